//! Variable type definitions

/// The type of a planning variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableType {
    /// A genuine planning variable that the solver optimizes.
    Genuine,
    /// A list variable containing multiple values.
    List,
    /// A shadow variable computed from other variables.
    Shadow(ShadowVariableKind),
}

/// The kind of shadow variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowVariableKind {
    /// Inverse of another variable (bidirectional relationship).
    InverseRelation,
    /// Index within a list variable.
    Index,
}

impl VariableType {
    /// Returns true if this is a genuine (non-shadow) variable.
    ///
    /// Genuine variables include basic and list variables.
    pub fn is_genuine(&self) -> bool {
        matches!(self, VariableType::Genuine | VariableType::List)
    }

    /// Returns true if this is a shadow variable.
    pub fn is_shadow(&self) -> bool {
        matches!(self, VariableType::Shadow(_))
    }

    /// Returns true if this is a list variable.
    pub fn is_list(&self) -> bool {
        matches!(self, VariableType::List)
    }

    /// Returns true if this is a basic genuine variable (not a list).
    pub fn is_basic(&self) -> bool {
        matches!(self, VariableType::Genuine)
    }
}
