use serde::{Deserialize, Serialize};

use super::Model;

/// A named group of operations, rendered as one service class.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Raw (or, once processed, canonical) name.
    pub name: String,

    /// Operations in declaration order.
    #[serde(default)]
    pub operations: Vec<Operation>,

    /// Names of the models used by the service.
    #[serde(default)]
    pub imports: Vec<String>,
}

impl Service {
    /// Creates an empty service.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Appends an operation.
    #[must_use]
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Appends an import.
    #[must_use]
    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }

    /// Iterates over the operation names, in order.
    #[must_use]
    pub fn operation_names(&self) -> impl Iterator<Item = &str> {
        self.operations.iter().map(|operation| operation.name.as_str())
    }
}

/// One callable unit of a service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Operation name, usually derived from the `operationId`.
    pub name: String,

    /// Free-form documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// HTTP method, carried through untouched.
    #[serde(default)]
    pub method: String,

    /// Request path template, carried through untouched.
    #[serde(default)]
    pub path: String,

    /// Parameter descriptors, each with its own imports.
    #[serde(default)]
    pub parameters: Vec<Model>,

    /// Result descriptors, each with its own imports.
    #[serde(default)]
    pub results: Vec<Model>,

    /// Names of the models used by the parameters and results.
    #[serde(default)]
    pub imports: Vec<String>,
}

impl Operation {
    /// Creates an operation without parameters or results.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the HTTP method and path.
    #[must_use]
    pub fn with_route(mut self, method: impl Into<String>, path: impl Into<String>) -> Self {
        self.method = method.into();
        self.path = path.into();
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: Model) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Appends a result.
    #[must_use]
    pub fn with_result(mut self, result: Model) -> Self {
        self.results.push(result);
        self
    }

    /// Appends an import.
    #[must_use]
    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }
}
