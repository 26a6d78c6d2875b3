use std::collections::BTreeSet;

use crate::naming::{NamingMode, normalize_model_name};

/// Deduplicates and sorts raw import names, dropping `self_name`.
///
/// The self check uses the raw name, before any normalization.
///
/// ```rust
/// use apigen_core::unique_imports;
///
/// assert_eq!(unique_imports(["Pet", "Pet", "Category"], Some("Pet")), ["Category"]);
/// ```
#[must_use]
pub fn unique_imports<I, S>(names: I, self_name: Option<&str>) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| name.as_ref().to_owned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .filter(|name| Some(name.as_str()) != self_name)
        .collect()
}

/// Resolves raw import names into sorted, unique canonical model names.
///
/// Survivors of [`unique_imports`] are normalized with the model naming rule,
/// then deduplicated and sorted again on their canonical form: flattening can
/// merge two raw names (`pet.Tag` and `pet_Tag`) and can change their order.
///
/// ```rust
/// use apigen_core::{NamingMode, resolve_imports};
///
/// let imports = resolve_imports(["Pet", "Pet", "Category"], "models", NamingMode::Flat, Some("Pet"));
///
/// assert_eq!(imports, ["models.Category.Category"]);
/// ```
#[must_use]
pub fn resolve_imports<I, S>(
    names: I,
    package: &str,
    mode: NamingMode,
    self_name: Option<&str>,
) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    unique_imports(names, self_name)
        .iter()
        .map(|name| normalize_model_name(name, package, mode))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
