//! The intermediate representation handed over by the API document parser.
//!
//! All types are plain owned data. The parser builds a [`Client`] with raw
//! dot-segmented names; [`post_process_client`](crate::post_process_client)
//! returns a new one with canonical names and resolved imports.

mod model;
mod service;

use serde::{Deserialize, Serialize};

pub use self::model::{EnumValue, Model, ModelKind};
pub use self::service::{Operation, Service};

/// The aggregate root of one generation run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Base URL of the API.
    #[serde(default)]
    pub server: String,

    /// Version of the API document.
    #[serde(default)]
    pub version: String,

    /// Model definitions.
    #[serde(default)]
    pub models: Vec<Model>,

    /// Services with their operations.
    #[serde(default)]
    pub services: Vec<Service>,

    /// Runtime-validation schemas.
    #[serde(default)]
    pub schemas: Vec<Model>,
}

impl Client {
    /// Creates an empty client for the given server and version.
    #[must_use]
    pub fn new(server: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// Appends a model.
    #[must_use]
    pub fn with_model(mut self, model: Model) -> Self {
        self.models.push(model);
        self
    }

    /// Appends a service.
    #[must_use]
    pub fn with_service(mut self, service: Service) -> Self {
        self.services.push(service);
        self
    }

    /// Appends a schema.
    #[must_use]
    pub fn with_schema(mut self, schema: Model) -> Self {
        self.schemas.push(schema);
        self
    }

    /// Total number of models, services and schemas.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.models.len() + self.services.len() + self.schemas.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_parser_output() {
        let json = r#"{
            "server": "http://localhost:8080",
            "version": "1.0",
            "models": [
                {
                    "name": "pet.Pet",
                    "export": "interface",
                    "imports": ["pet.Category"],
                    "properties": [
                        { "name": "category", "export": "reference", "base": "pet.Category" }
                    ]
                }
            ],
            "services": [
                {
                    "name": "pet",
                    "operations": [
                        { "name": "petAddPet", "method": "POST", "path": "/pet" }
                    ]
                }
            ]
        }"#;

        let client: Client = serde_json::from_str(json).expect("valid client");

        assert_eq!(client.entity_count(), 2);
        assert!(client.schemas.is_empty());
        assert_eq!(client.models[0].properties[0].kind, ModelKind::Reference);
        assert_eq!(client.services[0].operations[0].path, "/pet");
    }
}
