use crate::operations::{OperationDescriptor, OperationKind};

/// Operation descriptors keyed by name, kept in registration order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    operations: Vec<OperationDescriptor>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every [`OperationKind`].
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for kind in OperationKind::ALL {
            registry.register(kind.descriptor().clone());
        }
        registry
    }

    /// Add `descriptor`, replacing any existing operation with the same name.
    pub fn register(&mut self, descriptor: OperationDescriptor) {
        match self.operations.iter_mut().find(|op| op.name == descriptor.name) {
            Some(existing) => {
                tracing::debug!(operation = descriptor.name, "replacing registered operation");
                *existing = descriptor;
            }
            None => self.operations.push(descriptor),
        }
    }

    pub fn get(&self, name: &str) -> Option<&OperationDescriptor> {
        self.operations.iter().find(|op| op.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OperationDescriptor> {
        self.operations.iter()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
