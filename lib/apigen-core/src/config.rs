use serde::{Deserialize, Serialize};

use crate::naming::{NamingMode, package_from_dir};
use crate::partition::ExportSelection;

/// Options of one generation run.
///
/// Options deserialize from the camelCase keys used by the command line
/// configuration file; every key is optional.
///
/// # Default Configuration
///
/// - **Packages**: `services`, `models` and `schemas`
/// - **Naming**: flat names, `Service` postfix for services, no postfix for models
/// - **Exports**: core, services and models; schemas are not exported
/// - **Packages output**: a single package holding everything
/// - **Client class**: none
///
/// # Example
///
/// ```rust
/// use apigen_core::{GeneratorOptions, NamingMode};
///
/// let options = GeneratorOptions::default()
///     .with_fully_qualified_names(true)
///     .with_model_output("api/models")
///     .with_client_name("PetStore");
///
/// assert_eq!(options.naming_mode(), NamingMode::FullyQualified);
/// assert_eq!(options.model_package(), "api.models");
/// assert_eq!(options.client_name(), Some("PetStore"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorOptions {
    service_package: String,
    model_package: String,
    schema_package: String,
    fully_qualified_names: bool,
    postfix_services: String,
    postfix_models: String,
    export_packages: bool,
    export_core: bool,
    export_services: bool,
    export_models: bool,
    export_schemas: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_name: Option<String>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            service_package: "services".to_owned(),
            model_package: "models".to_owned(),
            schema_package: "schemas".to_owned(),
            fully_qualified_names: false,
            postfix_services: "Service".to_owned(),
            postfix_models: String::new(),
            export_packages: false,
            export_core: true,
            export_services: true,
            export_models: true,
            export_schemas: false,
            client_name: None,
        }
    }
}

impl GeneratorOptions {
    /// Sets the dotted package of the services.
    #[must_use]
    pub fn with_service_package(mut self, package: impl Into<String>) -> Self {
        self.service_package = package.into();
        self
    }

    /// Sets the package of the services from an output directory (`api/services`).
    #[must_use]
    pub fn with_service_output(mut self, dir: &str) -> Self {
        self.service_package = package_from_dir(dir);
        self
    }

    /// Sets the dotted package of the models.
    #[must_use]
    pub fn with_model_package(mut self, package: impl Into<String>) -> Self {
        self.model_package = package.into();
        self
    }

    /// Sets the package of the models from an output directory.
    #[must_use]
    pub fn with_model_output(mut self, dir: &str) -> Self {
        self.model_package = package_from_dir(dir);
        self
    }

    /// Sets the dotted package of the schemas.
    #[must_use]
    pub fn with_schema_package(mut self, package: impl Into<String>) -> Self {
        self.schema_package = package.into();
        self
    }

    /// Sets the package of the schemas from an output directory.
    #[must_use]
    pub fn with_schema_output(mut self, dir: &str) -> Self {
        self.schema_package = package_from_dir(dir);
        self
    }

    /// Keeps raw namespaces as nested directories.
    #[must_use]
    pub fn with_fully_qualified_names(mut self, fully_qualified: bool) -> Self {
        self.fully_qualified_names = fully_qualified;
        self
    }

    /// Sets the postfix appended to service names.
    #[must_use]
    pub fn with_postfix_services(mut self, postfix: impl Into<String>) -> Self {
        self.postfix_services = postfix.into();
        self
    }

    /// Sets the postfix the writer appends to model aliases.
    #[must_use]
    pub fn with_postfix_models(mut self, postfix: impl Into<String>) -> Self {
        self.postfix_models = postfix.into();
        self
    }

    /// Groups entities by package instead of emitting a single package.
    #[must_use]
    pub fn with_export_packages(mut self, export_packages: bool) -> Self {
        self.export_packages = export_packages;
        self
    }

    /// Selects which parts of the client are written.
    #[must_use]
    pub fn with_exports(mut self, exports: ExportSelection) -> Self {
        self.export_core = exports.core;
        self.export_services = exports.services;
        self.export_models = exports.models;
        self.export_schemas = exports.schemas;
        self
    }

    /// Sets the name of the client class rendered for each package with services.
    #[must_use]
    pub fn with_client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = Some(client_name.into());
        self
    }

    /// Package of the services.
    #[must_use]
    pub fn service_package(&self) -> &str {
        &self.service_package
    }

    /// Package of the models.
    #[must_use]
    pub fn model_package(&self) -> &str {
        &self.model_package
    }

    /// Package of the schemas.
    #[must_use]
    pub fn schema_package(&self) -> &str {
        &self.schema_package
    }

    /// How raw names become canonical names.
    #[must_use]
    pub fn naming_mode(&self) -> NamingMode {
        NamingMode::from_fully_qualified(self.fully_qualified_names)
    }

    /// Postfix appended to service names.
    #[must_use]
    pub fn postfix_services(&self) -> &str {
        &self.postfix_services
    }

    /// Postfix forwarded to the writer for model aliases.
    #[must_use]
    pub fn postfix_models(&self) -> &str {
        &self.postfix_models
    }

    /// Whether entities are grouped by package.
    #[must_use]
    pub fn export_packages(&self) -> bool {
        self.export_packages
    }

    /// The export toggles.
    #[must_use]
    pub fn exports(&self) -> ExportSelection {
        ExportSelection {
            core: self.export_core,
            services: self.export_services,
            models: self.export_models,
            schemas: self.export_schemas,
        }
    }

    /// Name of the client class, if any.
    #[must_use]
    pub fn client_name(&self) -> Option<&str> {
        self.client_name.as_deref()
    }
}
