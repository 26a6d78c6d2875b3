//! Canonical names for models, services and schemas.
//!
//! A canonical name is a dotted path made of the package, the file and the
//! symbol exported by that file. Every type is rendered into its own file, so
//! the last segment is repeated: `models.Pet.Pet` is the `Pet` symbol of the
//! `models/Pet` file.
//!
//! Two modes are supported:
//!
//! - [`NamingMode::Flat`]: dots of the raw name become underscores, so every
//!   type lands directly in its package (`models.pet_Category.pet_Category`).
//! - [`NamingMode::FullyQualified`]: raw segments are kept as nested
//!   directories (`models.pet.Category.Category`).
//!
//! The functions here are pure: applying them twice double-appends the
//! symbol, so the pipeline calls them exactly once per entity.

mod canonical;

use cruet::*;
use serde::{Deserialize, Serialize};

pub use self::canonical::{CanonicalName, ImportDirective};

/// Selects how raw dotted names are turned into canonical names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingMode {
    /// Flatten the raw name into a single file per type.
    #[default]
    Flat,
    /// Keep the raw namespace as nested directories.
    FullyQualified,
}

impl NamingMode {
    /// Maps the `fullyQualifiedNames` toggle to a mode.
    #[must_use]
    pub fn from_fully_qualified(fully_qualified: bool) -> Self {
        if fully_qualified {
            Self::FullyQualified
        } else {
            Self::Flat
        }
    }

    /// Returns `true` for [`NamingMode::FullyQualified`].
    #[must_use]
    pub fn is_fully_qualified(self) -> bool {
        self == Self::FullyQualified
    }
}

/// Computes the canonical name of a model (or schema) inside `package`.
///
/// # Example
///
/// ```rust
/// use apigen_core::{NamingMode, normalize_model_name};
///
/// assert_eq!(
///     normalize_model_name("pet.category", "models", NamingMode::Flat),
///     "models.pet_category.pet_category"
/// );
/// assert_eq!(
///     normalize_model_name("pet.category", "models", NamingMode::FullyQualified),
///     "models.pet.category.category"
/// );
/// ```
#[must_use]
pub fn normalize_model_name(name: &str, package: &str, mode: NamingMode) -> String {
    match mode {
        NamingMode::Flat => {
            let flat = name.replace('.', "_");
            join_segments([package, flat.as_str(), flat.as_str()])
        }
        NamingMode::FullyQualified => {
            let mut segments = segments_of(name).collect::<Vec<_>>();
            if let Some(symbol) = segments.last().copied() {
                segments.push(symbol);
            }
            join_segments(std::iter::once(package).chain(segments))
        }
    }
}

/// Computes the canonical name of a service inside `package`.
///
/// The postfix is appended to the last segment before the file/symbol
/// duplication. In flat mode the whole name is also converted to PascalCase.
///
/// ```rust
/// use apigen_core::{NamingMode, normalize_service_name};
///
/// assert_eq!(
///     normalize_service_name("pet", "services", "Service", NamingMode::Flat),
///     "services.PetService.PetService"
/// );
/// assert_eq!(
///     normalize_service_name("store.pet", "services", "Service", NamingMode::FullyQualified),
///     "services.store.petService.petService"
/// );
/// ```
#[must_use]
pub fn normalize_service_name(
    name: &str,
    package: &str,
    postfix: &str,
    mode: NamingMode,
) -> String {
    match mode {
        NamingMode::Flat => {
            let flat = format!("{name}{postfix}").replace('.', "_").to_pascal_case();
            join_segments([package, flat.as_str(), flat.as_str()])
        }
        NamingMode::FullyQualified => {
            let mut segments = segments_of(name).map(str::to_owned).collect::<Vec<_>>();
            if let Some(last) = segments.last_mut() {
                last.push_str(postfix);
            }
            if let Some(symbol) = segments.last().cloned() {
                segments.push(symbol);
            }
            join_segments(std::iter::once(package).chain(segments.iter().map(String::as_str)))
        }
    }
}

/// Returns the last non-empty dot-segment of a name: the symbol of a
/// canonical name, or the short name of a raw one.
#[must_use]
pub fn module_type(name: &str) -> &str {
    segments_of(name).next_back().unwrap_or_default()
}

/// Converts an output directory (`api/models`) into a dotted package (`api.models`).
#[must_use]
pub fn package_from_dir(dir: &str) -> String {
    join_segments(dir.split(['/', '\\']))
}

fn segments_of(name: &str) -> impl DoubleEndedIterator<Item = &str> {
    name.split('.').filter(|segment| !segment.is_empty())
}

fn join_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    segments
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::flattened("pet.category", "models", "models.pet_category.pet_category")]
    #[case::single_segment("Pet", "models", "models.Pet.Pet")]
    #[case::root_package("Pet", "", "Pet.Pet")]
    #[case::dotted_package("Pet", "api.models", "api.models.Pet.Pet")]
    #[case::deep_name("a.b.c", "models", "models.a_b_c.a_b_c")]
    fn should_normalize_flat_model_names(
        #[case] name: &str,
        #[case] package: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(normalize_model_name(name, package, NamingMode::Flat), expected);
    }

    #[rstest]
    #[case::nested("pet.category", "models", "models.pet.category.category")]
    #[case::single_segment("Pet", "models", "models.Pet.Pet")]
    #[case::root_package("pet.Pet", "", "pet.Pet.Pet")]
    #[case::empty_segments("pet..Pet", "models", "models.pet.Pet.Pet")]
    #[case::trailing_dot("pet.Pet.", "models", "models.pet.Pet.Pet")]
    fn should_normalize_fully_qualified_model_names(
        #[case] name: &str,
        #[case] package: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(
            normalize_model_name(name, package, NamingMode::FullyQualified),
            expected
        );
    }

    #[rstest]
    #[case::flat("pet", NamingMode::Flat, "services.PetService.PetService")]
    #[case::flat_nested("pet.store", NamingMode::Flat, "services.PetStoreService.PetStoreService")]
    #[case::flat_snake("pet_orders", NamingMode::Flat, "services.PetOrdersService.PetOrdersService")]
    #[case::qualified("pet", NamingMode::FullyQualified, "services.petService.petService")]
    #[case::qualified_nested(
        "store.pet",
        NamingMode::FullyQualified,
        "services.store.petService.petService"
    )]
    #[case::qualified_trailing_dot(
        "store.pet.",
        NamingMode::FullyQualified,
        "services.store.petService.petService"
    )]
    fn should_normalize_service_names(
        #[case] name: &str,
        #[case] mode: NamingMode,
        #[case] expected: &str,
    ) {
        assert_eq!(
            normalize_service_name(name, "services", "Service", mode),
            expected
        );
    }

    #[test]
    fn should_not_be_idempotent() {
        let once = normalize_model_name("Pet", "models", NamingMode::Flat);
        let twice = normalize_model_name(&once, "models", NamingMode::Flat);

        assert_eq!(once, "models.Pet.Pet");
        assert_ne!(once, twice);
    }

    #[test]
    fn should_extract_module_type() {
        assert_eq!(module_type("models.pet.Pet.Pet"), "Pet");
        assert_eq!(module_type("Pet"), "Pet");
        assert_eq!(module_type("store.order."), "order");
        assert_eq!(module_type(""), "");
    }

    #[test]
    fn should_convert_output_dir_to_package() {
        assert_eq!(package_from_dir("services"), "services");
        assert_eq!(package_from_dir("api/v1/models/"), "api.v1.models");
        assert_eq!(package_from_dir(""), "");
    }

    #[test]
    fn should_map_toggle_to_mode() {
        assert_eq!(NamingMode::from_fully_qualified(true), NamingMode::FullyQualified);
        assert_eq!(NamingMode::from_fully_qualified(false), NamingMode::Flat);
        assert!(!NamingMode::default().is_fully_qualified());
    }
}
