//! Option storage consulted and updated by the resolver.

use std::collections::HashMap;

use log::debug;

use crate::catalog::ParameterCatalog;
use crate::error::Error::{ParameterFormat, UnknownParameter};
use crate::error::Result;
use crate::value::Value;

/// Holds the current value of every named option for one session.
pub trait OptionStore {
    fn get(&self, name: &str) -> Option<Value>;

    fn set(&mut self, name: &str, value: Option<Value>);

    /// Whether values may be collected by prompting the user.
    fn is_interactive(&self) -> bool;
}

/// In-memory [`OptionStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryOptionStore {
    values: HashMap<String, Value>,
    interactive: bool,
}

impl MemoryOptionStore {
    #[must_use]
    pub fn new(interactive: bool) -> Self {
        Self {
            values: HashMap::new(),
            interactive,
        }
    }

    #[must_use]
    pub fn with_value(mut self, name: &str, value: Value) -> Self {
        self.values.insert(name.to_string(), value);
        self
    }

    /// Builds a store from `key=value` assignments.
    ///
    /// Repeated assignments to an array-mode parameter accumulate into a
    /// list; for scalar parameters the last assignment wins.
    ///
    /// # Errors
    ///
    /// Returns an error if an assignment is not in the `key=value` format or
    /// names a parameter that is not in the catalog.
    pub fn from_assignments(
        assignments: &[String],
        catalog: &ParameterCatalog,
        interactive: bool,
    ) -> Result<Self> {
        let mut store = Self::new(interactive);

        for assignment in assignments {
            let parts: Vec<&str> = assignment.split('=').collect();
            if parts.len() != 2 {
                return Err(ParameterFormat(assignment.to_string()));
            }

            let key = parts[0];
            let value = Value::from(parts[1]);

            let definition = catalog
                .lookup(key)
                .ok_or_else(|| UnknownParameter(key.to_string()))?;

            debug!("Assigning `{}` from the command line", key);

            if definition.array_mode {
                match store.values.get_mut(key) {
                    Some(Value::List(items)) => items.push(value),
                    _ => {
                        store
                            .values
                            .insert(key.to_string(), Value::List(vec![value]));
                    }
                }
            } else {
                store.values.insert(key.to_string(), value);
            }
        }

        Ok(store)
    }

    pub fn values(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl OptionStore for MemoryOptionStore {
    fn get(&self, name: &str) -> Option<Value> {
        self.values.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: Option<Value>) {
        match value {
            Some(value) => {
                self.values.insert(name.to_string(), value);
            }
            None => {
                self.values.remove(name);
            }
        }
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::ParameterDefinition;
    use crate::error::Error;
    use crate::question::Question;

    fn catalog() -> ParameterCatalog {
        ParameterCatalog::from_definitions([
            ParameterDefinition::new("host", Question::new("Host")),
            ParameterDefinition::new("tags", Question::new("Tag")).multiple(true),
        ])
        .unwrap()
    }

    fn assignments(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_get_set() {
        let mut store = MemoryOptionStore::new(true);
        assert!(store.is_interactive());
        assert_eq!(store.get("host"), None);

        store.set("host", Some(Value::from("localhost")));
        assert_eq!(store.get("host"), Some(Value::from("localhost")));

        store.set("host", None);
        assert_eq!(store.get("host"), None);
    }

    #[test]
    fn test_from_assignments_scalar_last_wins() {
        let store = MemoryOptionStore::from_assignments(
            &assignments(&["host=a", "host=b"]),
            &catalog(),
            false,
        )
        .unwrap();

        assert_eq!(store.get("host"), Some(Value::from("b")));
        assert!(!store.is_interactive());
    }

    #[test]
    fn test_from_assignments_array_accumulates() {
        let store = MemoryOptionStore::from_assignments(
            &assignments(&["tags=a", "host=h", "tags=b"]),
            &catalog(),
            false,
        )
        .unwrap();

        assert_eq!(
            store.get("tags"),
            Some(Value::List(vec![Value::from("a"), Value::from("b")]))
        );
    }

    #[test]
    fn test_from_assignments_errors() {
        let format = MemoryOptionStore::from_assignments(&assignments(&["host"]), &catalog(), true);
        assert!(matches!(format, Err(Error::ParameterFormat(_))));

        let too_many =
            MemoryOptionStore::from_assignments(&assignments(&["host=a=b"]), &catalog(), true);
        assert!(matches!(too_many, Err(Error::ParameterFormat(_))));

        let unknown =
            MemoryOptionStore::from_assignments(&assignments(&["port=1"]), &catalog(), true);
        assert!(matches!(unknown, Err(Error::UnknownParameter(name)) if name == "port"));
    }
}
