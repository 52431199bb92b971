//! Variable descriptor.

use std::fmt;

use crate::domain::variable::{ShadowVariableKind, VariableType};

/// Describes a planning variable at runtime.
///
/// The getter reads the variable of the entity at `entity_index` within its
/// collection of the working solution. `None` stands for an unassigned value.
pub struct VariableDescriptor<S, V> {
    /// Name of the variable (field name).
    pub name: &'static str,
    /// Type of the variable.
    pub variable_type: VariableType,
    /// Typed getter; list variables carry no scalar getter.
    getter: Option<fn(&S, usize) -> Option<V>>,
}

impl<S, V> VariableDescriptor<S, V> {
    /// Creates a new genuine variable descriptor.
    pub fn genuine(name: &'static str, getter: fn(&S, usize) -> Option<V>) -> Self {
        VariableDescriptor {
            name,
            variable_type: VariableType::Genuine,
            getter: Some(getter),
        }
    }

    /// Creates a new list variable descriptor (metadata only).
    pub fn list(name: &'static str) -> Self {
        VariableDescriptor {
            name,
            variable_type: VariableType::List,
            getter: None,
        }
    }

    /// Creates a new shadow variable descriptor.
    pub fn shadow(
        name: &'static str,
        kind: ShadowVariableKind,
        getter: fn(&S, usize) -> Option<V>,
    ) -> Self {
        VariableDescriptor {
            name,
            variable_type: VariableType::Shadow(kind),
            getter: Some(getter),
        }
    }

    /// Reads the value of this variable on the given entity.
    pub fn value(&self, solution: &S, entity_index: usize) -> Option<V> {
        self.getter.and_then(|getter| getter(solution, entity_index))
    }
}

impl<S, V> Clone for VariableDescriptor<S, V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            variable_type: self.variable_type,
            getter: self.getter,
        }
    }
}

impl<S, V> fmt::Debug for VariableDescriptor<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableDescriptor")
            .field("name", &self.name)
            .field("variable_type", &self.variable_type)
            .finish()
    }
}
