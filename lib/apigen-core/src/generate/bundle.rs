use serde::Serialize;

use crate::ir::{Model, Service};
use crate::partition::ExportSelection;

/// Everything a writer needs to render one package.
///
/// Entities are in client order; the index template uses the sorted views.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageBundle {
    /// Dotted package path, `""` for the root package.
    pub package: String,
    /// Base URL of the API.
    pub server: String,
    /// Version of the API document.
    pub version: String,
    /// Services of the package.
    pub services: Vec<Service>,
    /// Models of the package.
    pub models: Vec<Model>,
    /// Schemas of the package.
    pub schemas: Vec<Model>,
    /// Canonical name of the client class, when one must be rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    /// Canonical name of the package index, when the package is not empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    /// The export toggles of the run.
    pub exports: ExportSelection,
    /// Postfix appended to service aliases in the index.
    pub postfix_services: String,
    /// Postfix appended to model aliases in the index.
    pub postfix_models: String,
}

impl PackageBundle {
    /// Models sorted by canonical name.
    #[must_use]
    pub fn sorted_models(&self) -> Vec<&Model> {
        sorted_by_name(&self.models, |model| &model.name)
    }

    /// Schemas sorted by canonical name.
    #[must_use]
    pub fn sorted_schemas(&self) -> Vec<&Model> {
        sorted_by_name(&self.schemas, |schema| &schema.name)
    }

    /// Services sorted by canonical name.
    #[must_use]
    pub fn sorted_services(&self) -> Vec<&Service> {
        sorted_by_name(&self.services, |service| &service.name)
    }
}

fn sorted_by_name<T>(items: &[T], name: impl Fn(&T) -> &String) -> Vec<&T> {
    let mut sorted = items.iter().collect::<Vec<_>>();
    sorted.sort_by(|left, right| name(*left).cmp(name(*right)));
    sorted
}
