//! One-time publication of an engine's parameter set.
//!
//! An engine publishes its parameters exactly once, when the instance is
//! created; the tree validates the set (unique addresses, sane ranges) and
//! hands out [`Parameter`] handles for the lifetime of the instance.
//!
//! # Example
//!
//! ```
//! use legato_core::{ParameterDefinition, ParameterTree, ParameterUnit};
//!
//! let tree = ParameterTree::builder()
//!     .parameter(ParameterDefinition::percent("depth", "Depth", 1))
//!     .parameter(ParameterDefinition::boolean("bypass", "Bypass", 2))
//!     .build()?;
//!
//! tree.parameter(1).unwrap().set(25.0);
//! # Ok::<(), legato_core::Error>(())
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::definition::ParameterDefinition;
use crate::error::{Error, Result};
use crate::parameter::{Parameter, ValueObserver};

/// Builder for a [`ParameterTree`].
#[derive(Default)]
pub struct ParameterTreeBuilder {
    definitions: Vec<ParameterDefinition>,
    value_observer: Option<ValueObserver>,
}

impl ParameterTreeBuilder {
    /// Add a parameter definition.
    pub fn parameter(mut self, definition: ParameterDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    /// Add several parameter definitions at once.
    pub fn parameters(mut self, definitions: impl IntoIterator<Item = ParameterDefinition>) -> Self {
        self.definitions.extend(definitions);
        self
    }

    /// Install the engine-side hook invoked synchronously with every accepted
    /// value write on any parameter in the tree. Writes made by the engine
    /// itself re-enter through [`Parameter::set`] and notify subscribers the
    /// same way as any other write.
    pub fn value_observer(mut self, observer: impl Fn(u64, f32) + Send + Sync + 'static) -> Self {
        self.value_observer = Some(Arc::new(observer));
        self
    }

    /// Validate the set and build the tree.
    ///
    /// Fails with [`Error::InvalidRange`] when a definition has `min >= max`
    /// and [`Error::DuplicateAddress`] when two definitions share an address.
    pub fn build(self) -> Result<ParameterTree> {
        let mut index = HashMap::with_capacity(self.definitions.len());
        let mut parameters = Vec::with_capacity(self.definitions.len());

        for definition in self.definitions {
            if definition.min >= definition.max {
                return Err(Error::InvalidRange {
                    address: definition.address,
                    min: definition.min,
                    max: definition.max,
                });
            }
            if index.contains_key(&definition.address) {
                return Err(Error::DuplicateAddress(definition.address));
            }

            let parameter = Parameter::new(definition);
            if let Some(observer) = &self.value_observer {
                parameter.install_value_observer(observer.clone());
            }
            index.insert(parameter.address(), parameters.len());
            parameters.push(parameter);
        }

        tracing::debug!(count = parameters.len(), "parameter tree published");
        Ok(ParameterTree { parameters, index })
    }
}

/// The published parameter set of one engine instance.
///
/// Immutable after construction: parameters are never added, removed, or
/// re-addressed while the instance exists.
pub struct ParameterTree {
    parameters: Vec<Parameter>,
    index: HashMap<u64, usize>,
}

impl ParameterTree {
    /// Start building a tree.
    pub fn builder() -> ParameterTreeBuilder {
        ParameterTreeBuilder::default()
    }

    /// Look up a parameter by address. Returns a cheap clone of the handle.
    pub fn parameter(&self, address: u64) -> Option<Parameter> {
        self.index
            .get(&address)
            .map(|&position| self.parameters[position].clone())
    }

    /// Like [`parameter`](Self::parameter) but failing with
    /// [`Error::UnknownAddress`] for callers that treat a miss as a bug.
    pub fn require(&self, address: u64) -> Result<Parameter> {
        self.parameter(address).ok_or(Error::UnknownAddress(address))
    }

    /// The parameters in publish order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Number of published parameters.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::ParameterUnit;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn builds_and_looks_up() {
        let tree = ParameterTree::builder()
            .parameter(ParameterDefinition::percent("a", "A", 1))
            .parameter(ParameterDefinition::boolean("b", "B", 2))
            .build()
            .unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.parameter(1).unwrap().identifier(), "a");
        assert!(tree.parameter(3).is_none());
        assert!(tree.require(3).is_err());
    }

    #[test]
    fn rejects_duplicate_addresses() {
        let result = ParameterTree::builder()
            .parameter(ParameterDefinition::percent("a", "A", 1))
            .parameter(ParameterDefinition::percent("b", "B", 1))
            .build();
        assert!(matches!(result, Err(Error::DuplicateAddress(1))));
    }

    #[test]
    fn rejects_inverted_ranges() {
        let result = ParameterTree::builder()
            .parameter(ParameterDefinition::float(
                "bad",
                "Bad",
                9,
                1.0,
                1.0,
                ParameterUnit::Generic,
            ))
            .build();
        assert!(matches!(result, Err(Error::InvalidRange { address: 9, .. })));
    }

    #[test]
    fn value_observer_sees_every_write_path() {
        static WRITES: AtomicU32 = AtomicU32::new(0);

        let tree = ParameterTree::builder()
            .parameter(ParameterDefinition::percent("a", "A", 1))
            .value_observer(|_, _| {
                WRITES.fetch_add(1, Ordering::SeqCst);
            })
            .build()
            .unwrap();

        let param = tree.parameter(1).unwrap();
        let (token, _events) = param.subscribe();

        param.set(10.0);
        param.set_value(20.0, Some(token), crate::AutomationEvent::Value, 0);

        assert_eq!(WRITES.load(Ordering::SeqCst), 2);
    }
}
