use std::convert::Infallible;

use apigen_core::{CanonicalName, ClientWriter, ImportDirective, PackageBundle};
use serde::Serialize;
use tracing::info;

/// What would be written for one run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core: Option<CoreEntry>,
    pub packages: Vec<PackageEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoreEntry {
    pub server: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageEntry {
    pub package: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    /// Re-export lines of the package index.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exports: Vec<String>,
    pub files: Vec<FileEntry>,
}

/// One generated file, with its import lines.
#[derive(Debug, Clone, Serialize)]
pub struct FileEntry {
    pub path: String,
    pub symbol: String,
    pub imports: Vec<String>,
}

impl FileEntry {
    fn new(name: &str, imports: &[String]) -> Self {
        let source = CanonicalName::new(name);
        Self {
            path: source.module_path(),
            symbol: source.symbol().to_owned(),
            imports: imports
                .iter()
                .map(|import| source.import_of(CanonicalName::new(import)).to_string())
                .collect(),
        }
    }
}

/// Services and models are exported by name, models with the configured
/// postfix as alias; schemas export their `$` constant.
fn index_exports(bundle: &PackageBundle, index: &str) -> Vec<String> {
    let source = CanonicalName::new(index);
    let export = |name: &str| source.import_of(CanonicalName::new(name));

    let services = bundle
        .sorted_services()
        .into_iter()
        .map(|service| export(&service.name));
    let models = bundle.sorted_models().into_iter().map(|model| {
        let directive = export(&model.name);
        if bundle.postfix_models.is_empty() {
            return directive;
        }
        let alias = format!("{}{}", directive.symbol, bundle.postfix_models);
        directive.with_alias(alias)
    });
    let schemas = bundle
        .sorted_schemas()
        .into_iter()
        .map(|schema| export(&schema.name).into_schema());

    services
        .chain(models)
        .chain(schemas)
        .map(|directive: ImportDirective| directive.to_string())
        .collect()
}

/// Collects a [`Manifest`] instead of rendering files.
#[derive(Debug, Default)]
pub struct ManifestWriter {
    manifest: Manifest,
}

impl ManifestWriter {
    #[must_use]
    pub fn into_manifest(self) -> Manifest {
        self.manifest
    }
}

impl ClientWriter for ManifestWriter {
    type Error = Infallible;

    async fn write_core(&mut self, server: &str, version: &str) -> Result<(), Self::Error> {
        self.manifest.core = Some(CoreEntry {
            server: server.to_owned(),
            version: version.to_owned(),
        });
        Ok(())
    }

    async fn write_package(&mut self, bundle: PackageBundle) -> Result<(), Self::Error> {
        let services = bundle
            .services
            .iter()
            .map(|service| FileEntry::new(&service.name, &service.imports));
        let models = bundle
            .models
            .iter()
            .chain(&bundle.schemas)
            .map(|model| FileEntry::new(&model.name, &model.imports));
        let files = services.chain(models).collect::<Vec<_>>();
        let exports = bundle
            .index_name
            .as_deref()
            .map(|index| index_exports(&bundle, index))
            .unwrap_or_default();
        info!(package = %bundle.package, files = files.len(), "package ready");

        self.manifest.packages.push(PackageEntry {
            package: bundle.package,
            client: bundle.client_name,
            index: bundle.index_name,
            exports,
            files,
        });
        Ok(())
    }
}
