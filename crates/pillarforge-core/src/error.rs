//! Error types for PillarForge

use thiserror::Error;

/// Main error type for PillarForge operations
#[derive(Debug, Error)]
pub enum PillarForgeError {
    /// Contradictory or out-of-range selector configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error in domain model definition
    #[error("Domain model error: {0}")]
    DomainModel(String),

    /// The entity type lacks a capability the configuration relies on
    #[error("Missing capability: {0}")]
    MissingCapability(String),
}

/// Result type alias for PillarForge operations
pub type Result<T> = std::result::Result<T, PillarForgeError>;
