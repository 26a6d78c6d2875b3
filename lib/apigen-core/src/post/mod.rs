//! Post-processing of a parsed [`Client`].
//!
//! The parser hands over raw dot-segmented names. This module turns them into
//! canonical names once, resolves import lists, rewrites property bases and
//! strips the service name out of operation names.
//!
//! Every function returns a new value; the input client is never modified.

mod imports;
mod operations;
mod properties;

use indexmap::IndexMap;
use tracing::debug;

pub use self::imports::{resolve_imports, unique_imports};
pub use self::operations::disambiguate;
pub use self::properties::{NodeId, PropertyArena, rewrite_property};

use crate::config::GeneratorOptions;
use crate::error::{EntityKind, PostProcessError};
use crate::ir::{Client, EnumValue, Model, ModelKind, Service};
use crate::naming::{NamingMode, normalize_model_name, normalize_service_name};

/// Normalizes every model, service and schema of `client`.
///
/// Sequences keep their order. Names are normalized exactly once: feeding the
/// result back in would qualify them a second time.
///
/// # Example
///
/// ```rust
/// use apigen_core::{Client, GeneratorOptions, Model, Operation, Service, post_process_client};
///
/// let client = Client::new("http://localhost", "1.0")
///     .with_model(Model::interface("pet.Pet").with_import("pet.Category"))
///     .with_service(Service::new("pet").with_operation(Operation::new("petAddPet")));
///
/// let client = post_process_client(&client, &GeneratorOptions::default())?;
///
/// assert_eq!(client.models[0].name, "models.pet_Pet.pet_Pet");
/// assert_eq!(client.models[0].imports, ["models.pet_Category.pet_Category"]);
/// assert_eq!(client.services[0].name, "services.PetService.PetService");
/// assert_eq!(client.services[0].operations[0].name, "addPet");
/// # Ok::<(), apigen_core::PostProcessError>(())
/// ```
///
/// # Errors
///
/// Fails on the first entity with an empty raw name and on residual
/// operation name collisions.
pub fn post_process_client(
    client: &Client,
    options: &GeneratorOptions,
) -> Result<Client, PostProcessError> {
    let mode = options.naming_mode();

    let models = client
        .models
        .iter()
        .enumerate()
        .map(|(index, model)| post_process_model(index, model, options.model_package(), mode))
        .collect::<Result<Vec<_>, _>>()?;

    let services = client
        .services
        .iter()
        .enumerate()
        .map(|(index, service)| post_process_service(index, service, options))
        .collect::<Result<Vec<_>, _>>()?;

    let schemas = client
        .schemas
        .iter()
        .enumerate()
        .map(|(index, schema)| post_process_schema(index, schema, options.schema_package(), mode))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        models = models.len(),
        services = services.len(),
        schemas = schemas.len(),
        ?mode,
        "post-processed client"
    );

    Ok(Client {
        server: client.server.clone(),
        version: client.version.clone(),
        models,
        services,
        schemas,
    })
}

fn ensure_named(name: &str, kind: EntityKind, index: usize) -> Result<(), PostProcessError> {
    if name.split('.').all(str::is_empty) {
        return Err(PostProcessError::EmptyName { kind, index });
    }
    Ok(())
}

fn post_process_model(
    index: usize,
    model: &Model,
    package: &str,
    mode: NamingMode,
) -> Result<Model, PostProcessError> {
    ensure_named(&model.name, EntityKind::Model, index)?;

    let properties = model
        .properties
        .iter()
        .map(|property| rewrite_property(property, package, mode))
        .collect::<Result<Vec<_>, _>>()?;
    let imports = resolve_imports(&model.imports, package, mode, Some(model.name.as_str()));
    let name = normalize_model_name(&model.name, package, mode);
    debug!(from = %model.name, to = %name, imports = imports.len(), "post-processed model");

    Ok(Model {
        name,
        kind: dedup_enum_values(&model.kind),
        properties,
        enums: dedup_enums(&model.enums),
        imports,
        ..model.clone()
    })
}

fn dedup_enums(enums: &[Model]) -> Vec<Model> {
    let mut unique = IndexMap::new();
    for enumeration in enums {
        unique
            .entry(enumeration.name.as_str())
            .or_insert_with(|| Model {
                kind: dedup_enum_values(&enumeration.kind),
                ..enumeration.clone()
            });
    }
    unique.into_values().collect()
}

fn dedup_enum_values(kind: &ModelKind) -> ModelKind {
    let ModelKind::Enum { values } = kind else {
        return kind.clone();
    };
    let mut unique = IndexMap::<&str, &EnumValue>::new();
    for value in values {
        unique.entry(value.name.as_str()).or_insert(value);
    }
    ModelKind::Enum {
        values: unique.into_values().cloned().collect(),
    }
}

fn post_process_service(
    index: usize,
    service: &Service,
    options: &GeneratorOptions,
) -> Result<Service, PostProcessError> {
    ensure_named(&service.name, EntityKind::Service, index)?;

    let mode = options.naming_mode();
    let service = disambiguate(service)?;
    let raw_imports = service
        .imports
        .iter()
        .chain(service.operations.iter().flat_map(|operation| &operation.imports));
    let imports = resolve_imports(raw_imports, options.model_package(), mode, None);
    let name = normalize_service_name(
        &service.name,
        options.service_package(),
        options.postfix_services(),
        mode,
    );
    debug!(from = %service.name, to = %name, operations = service.operations.len(), "post-processed service");

    Ok(Service {
        name,
        imports,
        operations: service.operations,
    })
}

fn post_process_schema(
    index: usize,
    schema: &Model,
    package: &str,
    mode: NamingMode,
) -> Result<Model, PostProcessError> {
    ensure_named(&schema.name, EntityKind::Schema, index)?;

    Ok(Model {
        name: normalize_model_name(&schema.name, package, mode),
        ..schema.clone()
    })
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use rstest::rstest;

    use super::*;
    use crate::ir::Operation;

    fn petstore() -> Client {
        Client::new("http://localhost:8080", "1.0")
            .with_model(
                Model::interface("pet.Pet")
                    .with_property(Model::reference("category", "pet.Category"))
                    .with_property(Model::reference("tags", "pet.Tag"))
                    .with_import("pet.Tag")
                    .with_import("pet.Category")
                    .with_import("pet.Tag")
                    .with_import("pet.Pet"),
            )
            .with_model(Model::interface("pet.Category"))
            .with_service(
                Service::new("pet")
                    .with_import("pet.Pet")
                    .with_operation(
                        Operation::new("petFindByStatus")
                            .with_result(Model::reference("result", "pet.Pet").with_import("pet.Pet")),
                    )
                    .with_operation(
                        Operation::new("petAddPet")
                            .with_parameter(Model::reference("body", "pet.Pet").with_import("pet.Pet"))
                            .with_result(
                                Model::reference("result", "ApiResponse").with_import("ApiResponse"),
                            ),
                    ),
            )
            .with_schema(Model::interface("pet.Pet"))
    }

    #[test]
    fn should_post_process_flat_client() {
        let client = post_process_client(&petstore(), &GeneratorOptions::default())
            .expect("valid client");

        let pet = &client.models[0];
        check!(pet.name == "models.pet_Pet.pet_Pet");
        check!(pet.base == "pet.Pet");
        check!(pet.imports == ["models.pet_Category.pet_Category", "models.pet_Tag.pet_Tag"]);
        check!(pet.properties[0].base == "models.pet_Category.pet_Category");
        check!(client.schemas[0].name == "schemas.pet_Pet.pet_Pet");

        let service = &client.services[0];
        check!(service.name == "services.PetService.PetService");
        check!(service.imports == ["models.ApiResponse.ApiResponse", "models.pet_Pet.pet_Pet"]);
        check!(service.operations[1].imports == ["pet.Pet", "ApiResponse"]);
    }

    #[test]
    fn should_post_process_fully_qualified_client() {
        let options = GeneratorOptions::default().with_fully_qualified_names(true);

        let client = post_process_client(&petstore(), &options).expect("valid client");

        insta::assert_debug_snapshot!(
            client.models.iter().map(|model| model.name.as_str()).collect::<Vec<_>>(),
            @r#"
        [
            "models.pet.Pet.Pet",
            "models.pet.Category.Category",
        ]
        "#
        );
        check!(client.services[0].name == "services.petService.petService");
        check!(client.models[0].imports == ["models.pet.Category.Category", "models.pet.Tag.Tag"]);
    }

    #[test]
    fn should_keep_input_untouched() {
        let input = petstore();

        let _ = post_process_client(&input, &GeneratorOptions::default()).expect("valid client");

        check!(input == petstore());
    }

    #[rstest]
    #[case::empty("")]
    #[case::single_dot(".")]
    #[case::only_dots("..")]
    fn should_reject_empty_names(#[case] name: &str, #[values(false, true)] fully_qualified: bool) {
        let options = GeneratorOptions::default().with_fully_qualified_names(fully_qualified);
        let client = petstore().with_schema(Model::interface(name));

        let_assert!(
            Err(PostProcessError::EmptyName { kind, index }) = post_process_client(&client, &options)
        );
        check!(kind == EntityKind::Schema);
        check!(index == 1);
    }

    #[test]
    fn should_reject_models_without_segment() {
        let options = GeneratorOptions::default().with_fully_qualified_names(true);
        let client = petstore().with_model(Model::interface("."));

        let_assert!(
            Err(PostProcessError::EmptyName { kind, index }) = post_process_client(&client, &options)
        );
        check!(kind == EntityKind::Model);
        check!(index == 2);
    }

    #[test]
    fn should_accept_names_with_empty_segments() {
        let options = GeneratorOptions::default().with_fully_qualified_names(true);
        let client = petstore().with_model(Model::interface("pet..Toy"));

        let client = post_process_client(&client, &options).expect("valid client");

        check!(client.models[2].name == "models.pet.Toy.Toy");
    }

    #[test]
    fn should_dedup_enums_and_values() {
        let status = Model::enumeration(
            "status",
            vec![
                EnumValue::new("AVAILABLE", "'available'"),
                EnumValue::new("SOLD", "'sold'"),
                EnumValue::new("AVAILABLE", "'available'"),
            ],
        );
        let client = Client::default().with_model(
            Model::interface("Pet")
                .with_enum(status.clone())
                .with_enum(Model::enumeration("status", Vec::new())),
        );

        let client = post_process_client(&client, &GeneratorOptions::default()).expect("valid client");

        let enums = &client.models[0].enums;
        check!(enums.len() == 1);
        let_assert!(Some(values) = enums[0].enum_values());
        let names = values.iter().map(|value| value.name.as_str()).collect::<Vec<_>>();
        check!(names == ["AVAILABLE", "SOLD"]);
    }

    #[test]
    fn should_use_configured_packages() {
        let options = GeneratorOptions::default()
            .with_model_output("api/models")
            .with_service_package("api.services")
            .with_postfix_services("Api");
        let client = Client::default()
            .with_model(Model::interface("Pet"))
            .with_service(Service::new("store").with_import("Order"));

        let client = post_process_client(&client, &options).expect("valid client");

        check!(client.models[0].name == "api.models.Pet.Pet");
        check!(client.services[0].name == "api.services.StoreApi.StoreApi");
        check!(client.services[0].imports == ["api.models.Order.Order"]);
    }
}
