//! Lookup structure mapping parameter names to their definitions.

use indexmap::IndexMap;

use crate::definitions::ParameterDefinition;
use crate::error::Error::{EmptyId, IdWithSpace, NonUniqueParameterId};
use crate::error::Result;

/// Parameter definitions keyed by name, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ParameterCatalog {
    params: IndexMap<String, ParameterDefinition>,
}

fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(EmptyId);
    }

    if id.contains(char::is_whitespace) {
        return Err(IdWithSpace(id.to_string()));
    }

    Ok(())
}

impl ParameterCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, contains whitespace, or is
    /// already present in the catalog.
    pub fn insert(&mut self, definition: ParameterDefinition) -> Result<()> {
        validate_id(&definition.name)?;

        if self.params.contains_key(&definition.name) {
            return Err(NonUniqueParameterId(definition.name));
        }

        self.params.insert(definition.name.clone(), definition);
        Ok(())
    }

    /// Builds a catalog from a list of definitions.
    ///
    /// # Errors
    ///
    /// See [`ParameterCatalog::insert`].
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ParameterDefinition>,
    ) -> Result<Self> {
        let mut catalog = Self::new();
        for definition in definitions {
            catalog.insert(definition)?;
        }
        Ok(catalog)
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&ParameterDefinition> {
        self.params.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParameterDefinition> {
        self.params.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::question::Question;

    fn definition(name: &str) -> ParameterDefinition {
        ParameterDefinition::new(name, Question::new(format!("Value for {name}")))
    }

    #[test]
    fn test_lookup_and_order() {
        let catalog =
            ParameterCatalog::from_definitions([definition("b"), definition("a")]).unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.lookup("a").is_some());
        assert!(catalog.lookup("c").is_none());
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = ParameterCatalog::from_definitions([definition("a"), definition("a")]);
        assert!(matches!(result, Err(Error::NonUniqueParameterId(name)) if name == "a"));
    }

    #[test]
    fn test_invalid_ids() {
        let mut catalog = ParameterCatalog::new();
        assert!(matches!(catalog.insert(definition("")), Err(Error::EmptyId)));
        assert!(matches!(
            catalog.insert(definition("has space")),
            Err(Error::IdWithSpace(_))
        ));
        assert!(catalog.is_empty());
    }
}
