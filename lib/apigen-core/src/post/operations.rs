use std::collections::{HashMap, HashSet};

use cruet::*;
use tracing::{debug, warn};

use crate::error::PostProcessError;
use crate::ir::{Operation, Service};
use crate::naming::module_type;

/// Occurrence counters for one service.
#[derive(Debug, Default)]
struct OperationNames {
    occurrences: HashMap<String, usize>,
    assigned: HashSet<String>,
}

impl OperationNames {
    /// Returns the final name for `candidate`: unchanged on first use, then
    /// suffixed with the zero-based occurrence index.
    fn assign(&mut self, service: &str, candidate: String) -> Result<String, PostProcessError> {
        let index = self.occurrences.entry(candidate.clone()).or_default();
        let name = if *index == 0 {
            candidate
        } else {
            format!("{candidate}{index}")
        };
        *index += 1;

        if !self.assigned.insert(name.clone()) {
            return Err(PostProcessError::DuplicateOperationName {
                service: service.to_owned(),
                name,
            });
        }
        Ok(name)
    }
}

/// Removes the service name from the operation names and makes them unique.
///
/// Operation ids usually repeat the service they belong to
/// (`petFindByStatus` inside `pet`); the short service name is stripped as a
/// literal prefix and the remainder is camelCased. Acronyms count as one word
/// (`petGetPetByID` becomes `getPetById`). Operations ending up with the same
/// name get the zero-based occurrence index as suffix.
///
/// The imports of every parameter and result are appended to the imports of
/// their operation. Names are read from the raw service name, so this must run
/// before the service name is normalized.
///
/// # Example
///
/// ```rust
/// use apigen_core::{Operation, Service, disambiguate};
///
/// let service = Service::new("pet")
///     .with_operation(Operation::new("petFindByStatus"))
///     .with_operation(Operation::new("petFindByTags"));
///
/// let service = disambiguate(&service)?;
///
/// assert_eq!(service.operation_names().collect::<Vec<_>>(), ["findByStatus", "findByTags"]);
/// # Ok::<(), apigen_core::PostProcessError>(())
/// ```
///
/// # Errors
///
/// Returns [`PostProcessError::DuplicateOperationName`] when a final name is
/// produced twice, e.g. a natural `get1` next to two `get`.
pub fn disambiguate(service: &Service) -> Result<Service, PostProcessError> {
    let short_name = camel_case(module_type(&service.name));
    let mut names = OperationNames::default();

    let operations = service
        .operations
        .iter()
        .map(|operation| {
            let candidate = strip_service_name(&operation.name, &short_name);
            let name = names.assign(&service.name, candidate)?;
            if name != operation.name {
                debug!(service = %service.name, from = %operation.name, to = %name, "renamed operation");
            }
            Ok(with_nested_imports(operation, name))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Service {
        operations,
        ..service.clone()
    })
}

fn strip_service_name(name: &str, short_name: &str) -> String {
    let stripped = name.strip_prefix(short_name).unwrap_or(name);
    if stripped.is_empty() {
        warn!(operation = name, "operation is named after its service, keeping the full name");
        return camel_case(name);
    }
    camel_case(stripped)
}

fn camel_case(name: &str) -> String {
    split_words(name).to_camel_case()
}

/// Lowercases `name` and inserts `_` before every word start: an uppercase
/// letter after a lowercase one, or the last capital of an uppercase run
/// followed by a lowercase letter (`HTTPGet` gives `http_get`).
fn split_words(name: &str) -> String {
    let chars = name.chars().collect::<Vec<_>>();
    let mut words = String::with_capacity(name.len() + 4);

    for (index, current) in chars.iter().enumerate() {
        if current.is_uppercase() {
            let previous = index.checked_sub(1).and_then(|prev| chars.get(prev));
            let next = chars.get(index + 1);
            let after_lower = previous.is_some_and(|prev| prev.is_lowercase());
            let ends_acronym = previous.is_some_and(|prev| prev.is_uppercase())
                && next.is_some_and(|next| next.is_lowercase());
            if after_lower || ends_acronym {
                words.push('_');
            }
        }
        words.extend(current.to_lowercase());
    }
    words
}

fn with_nested_imports(operation: &Operation, name: String) -> Operation {
    let nested = operation
        .parameters
        .iter()
        .chain(&operation.results)
        .flat_map(|model| model.imports.iter().cloned());

    let mut imports = operation.imports.clone();
    imports.extend(nested);

    Operation {
        name,
        imports,
        ..operation.clone()
    }
}
