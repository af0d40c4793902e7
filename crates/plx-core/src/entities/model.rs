use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An analysis method the backend can run a query through.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Model {
    pub model_id: String,
    #[serde(default)]
    pub description: String,
}

/// Response of `GET /allmodels`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ModelsResponse {
    pub models: Vec<Model>,
}
