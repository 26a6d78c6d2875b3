//! Grouping of post-processed entities into output packages.
//!
//! A package is the canonical name of an entity minus its file and symbol:
//! `models.pet.Category.Category` lives in `models.pet`. Each package becomes
//! one output module with its own index.

mod exports;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

pub use self::exports::ExportSelection;

use crate::ir::{Client, Model, Service};
use crate::naming::CanonicalName;

/// The entities of one output package.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Package {
    /// Services of the package, in client order.
    pub services: Vec<Service>,
    /// Models of the package, in client order.
    pub models: Vec<Model>,
    /// Schemas of the package, in client order.
    pub schemas: Vec<Model>,
}

impl Package {
    /// Returns `true` if the package holds no entity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty() && self.models.is_empty() && self.schemas.is_empty()
    }

    /// Number of entities in the package.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len() + self.models.len() + self.schemas.len()
    }
}

/// Packages keyed by their dotted path, in first-seen order.
pub type Packages = IndexMap<String, Package>;

/// Splits a post-processed client into packages.
///
/// Without grouping, everything lands in a single package keyed by `""`.
/// With grouping, buckets are created the first time a package is seen,
/// services first, then models, then schemas; entities keep their relative
/// order inside a bucket.
///
/// # Example
///
/// ```rust
/// use apigen_core::{Client, Model, partition};
///
/// let client = Client::default()
///     .with_model(Model::interface("models.pet.Pet.Pet"))
///     .with_model(Model::interface("models.store.Order.Order"))
///     .with_model(Model::interface("models.pet.Tag.Tag"));
///
/// let packages = partition(&client, true);
///
/// assert_eq!(packages.keys().collect::<Vec<_>>(), ["models.pet", "models.store"]);
/// assert_eq!(packages["models.pet"].models.len(), 2);
/// ```
#[must_use]
pub fn partition(client: &Client, group_by_package: bool) -> Packages {
    let mut packages = Packages::new();

    if !group_by_package {
        packages.insert(
            String::new(),
            Package {
                services: client.services.clone(),
                models: client.models.clone(),
                schemas: client.schemas.clone(),
            },
        );
        return packages;
    }

    for service in &client.services {
        bucket(&mut packages, &service.name)
            .services
            .push(service.clone());
    }
    for model in &client.models {
        bucket(&mut packages, &model.name).models.push(model.clone());
    }
    for schema in &client.schemas {
        bucket(&mut packages, &schema.name).schemas.push(schema.clone());
    }

    debug!(packages = packages.len(), "partitioned client");
    packages
}

fn bucket<'p>(packages: &'p mut Packages, name: &str) -> &'p mut Package {
    let package = CanonicalName::new(name).package();
    packages.entry(package.to_owned()).or_default()
}
