//! JSON Schemas for the backend contract types.
//!
//! [`SchemaRegistry`] builds schemas from the entity types with
//! [`schemars::schema_for!`] and looks them up by snake-case name.

use std::collections::BTreeMap;

use schemars::schema_for;

use crate::entities::{
    HistoryResponse, ModelsResponse, ProjectCreateInput, ProjectCreateResponse, ProjectInfo,
    ProjectStatus, ProjectsResponse, QueryInput, QueryResponse, ScrapedDataResponse,
};
use crate::errors::CoreError;
use crate::responses::ProjectPage;

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty))?);
    };
}

/// Schemas for every wire type, keyed by name.
pub struct SchemaRegistry {
    schemas: BTreeMap<&'static str, serde_json::Value>,
}

impl SchemaRegistry {
    /// # Errors
    ///
    /// Returns [`CoreError::Json`] if a generated schema cannot be converted
    /// to a JSON value.
    pub fn new() -> Result<Self, CoreError> {
        let mut schemas = BTreeMap::new();

        register!(schemas, "projects_response", ProjectsResponse);
        register!(schemas, "project_create_input", ProjectCreateInput);
        register!(schemas, "project_create_response", ProjectCreateResponse);
        register!(schemas, "project_info", ProjectInfo);
        register!(schemas, "project_status", ProjectStatus);
        register!(schemas, "models_response", ModelsResponse);
        register!(schemas, "query_input", QueryInput);
        register!(schemas, "query_response", QueryResponse);
        register!(schemas, "scraped_data_response", ScrapedDataResponse);
        register!(schemas, "history_response", HistoryResponse);
        register!(schemas, "project_page", ProjectPage);

        Ok(Self { schemas })
    }

    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] for an unregistered name.
    pub fn get(&self, name: &str) -> Result<&serde_json::Value, CoreError> {
        self.schemas.get(name).ok_or_else(|| CoreError::NotFound {
            entity_type: "schema".into(),
            id: name.to_string(),
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.schemas.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_every_wire_type() {
        let registry = SchemaRegistry::new().unwrap();
        assert_eq!(registry.names().count(), 11);
        assert!(registry.get("query_response").is_ok());
    }

    #[test]
    fn unknown_schema_is_not_found() {
        let registry = SchemaRegistry::new().unwrap();
        assert!(matches!(
            registry.get("legacy_query_result"),
            Err(CoreError::NotFound { .. })
        ));
    }
}
