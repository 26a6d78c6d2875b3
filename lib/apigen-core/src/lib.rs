//! # apigen-core
//!
//! Post-processing and package partitioning for an OpenAPI client generator.
//!
//! A version-specific parser turns an API document into a raw [`Client`]:
//! models, services and schemas named after the document, with dotted
//! namespaces (`pet.Category`) and unsorted, duplicated import lists. This
//! crate turns that raw IR into a render-ready one:
//!
//! - every type gets a canonical name `package.file.symbol`
//!   ([`normalize_model_name`], [`normalize_service_name`]);
//! - import lists are deduplicated, sorted and never reference their owner
//!   ([`resolve_imports`]);
//! - nested property references follow the same naming rule
//!   ([`rewrite_property`], [`PropertyArena`]);
//! - operation names lose the service name they repeat and are made unique
//!   ([`disambiguate`]);
//! - entities are grouped into output packages ([`partition`]) and handed to a
//!   [`ClientWriter`] one package at a time ([`generate`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use apigen_core::{Client, GeneratorOptions, MemoryWriter, Model, Operation, Service, generate};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), apigen_core::GenerateError> {
//! let client = Client::new("https://petstore.example.com", "1.0")
//!     .with_model(
//!         Model::interface("pet.Pet")
//!             .with_property(Model::reference("category", "pet.Category"))
//!             .with_import("pet.Category"),
//!     )
//!     .with_model(Model::interface("pet.Category"))
//!     .with_service(
//!         Service::new("pet")
//!             .with_operation(Operation::new("petFindByStatus").with_route("GET", "/pet/findByStatus")),
//!     );
//!
//! let options = GeneratorOptions::default()
//!     .with_fully_qualified_names(true)
//!     .with_export_packages(true);
//! let mut writer = MemoryWriter::default();
//!
//! let packages = generate(&client, &options, &mut writer).await?;
//!
//! assert_eq!(packages, ["services", "models.pet"]);
//! let pet = &writer.bundles()[1].models[0];
//! assert_eq!(pet.name, "models.pet.Pet.Pet");
//! assert_eq!(pet.imports, ["models.pet.Category.Category"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Naming modes
//!
//! | Raw name       | [`NamingMode::Flat`]                 | [`NamingMode::FullyQualified`]     |
//! |----------------|--------------------------------------|------------------------------------|
//! | `Pet`          | `models.Pet.Pet`                     | `models.Pet.Pet`                   |
//! | `pet.Category` | `models.pet_Category.pet_Category`   | `models.pet.Category.Category`     |
//! | service `pet`  | `services.PetService.PetService`     | `services.petService.petService`   |
//!
//! Canonical names are not idempotent: the pipeline normalizes each entity
//! exactly once, and [`CanonicalName`] reads them back for renderers.
//!
//! ## Features
//!
//! - `yaml`: [`ToYaml`] extension trait backed by `serde-saphyr`.

mod config;
mod error;
mod generate;
mod ir;
mod naming;
mod partition;
mod post;

#[cfg(feature = "yaml")]
mod yaml;

pub use self::config::GeneratorOptions;
pub use self::error::{EntityKind, GenerateError, PostProcessError};
pub use self::generate::{ClientWriter, MemoryWriter, PackageBundle, generate};
pub use self::ir::{Client, EnumValue, Model, ModelKind, Operation, Service};
pub use self::naming::{
    CanonicalName, ImportDirective, NamingMode, module_type, normalize_model_name,
    normalize_service_name, package_from_dir,
};
pub use self::partition::{ExportSelection, Package, Packages, partition};
pub use self::post::{
    NodeId, PropertyArena, disambiguate, post_process_client, resolve_imports, rewrite_property,
    unique_imports,
};
#[cfg(feature = "yaml")]
pub use self::yaml::{ToYaml, YamlError};
