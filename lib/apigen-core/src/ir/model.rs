use serde::{Deserialize, Serialize};

/// A named type of the generated client.
///
/// A model is a tree: each property is itself a model with its own `base` and
/// nested `properties`. Before post-processing, `name`, `base` and `imports`
/// hold raw dot-segmented names (e.g. `pet.Category`); afterwards `name` is a
/// canonical name and `imports` are canonical names sorted and deduplicated.
///
/// # Example
///
/// ```rust
/// use apigen_core::{Model, ModelKind};
///
/// let pet = Model::interface("Pet")
///     .with_property(Model::reference("category", "pet.Category"))
///     .with_import("pet.Category");
///
/// assert_eq!(pet.kind, ModelKind::Interface);
/// assert_eq!(pet.properties.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Raw (or, once processed, canonical) name.
    pub name: String,

    /// What shape of type this model renders to.
    #[serde(flatten)]
    pub kind: ModelKind,

    /// Referenced type: another model name or a primitive marker such as `string`.
    #[serde(default)]
    pub base: String,

    /// Free-form documentation carried through to the renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the property must be present in its parent.
    #[serde(default)]
    pub required: bool,

    /// Whether the value may be null.
    #[serde(default)]
    pub nullable: bool,

    /// Nested properties (fields for interfaces, members for compositions).
    #[serde(default)]
    pub properties: Vec<Model>,

    /// Inline enums declared by the properties of this model.
    #[serde(default)]
    pub enums: Vec<Model>,

    /// Names of the models this model depends on.
    #[serde(default)]
    pub imports: Vec<String>,
}

/// The shape of a [`Model`], tagged with an explicit `export` discriminant.
///
/// Enumerated values only exist on [`ModelKind::Enum`], so an interface with
/// stray enum values cannot be represented.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "export", rename_all = "kebab-case")]
pub enum ModelKind {
    /// An object type with named fields.
    #[default]
    Interface,
    /// A plain reference to another model.
    Reference,
    /// A primitive or otherwise generic type.
    Generic,
    /// An array of `base`.
    Array,
    /// A string-keyed dictionary of `base`.
    Dictionary,
    /// A union where exactly one member matches.
    OneOf,
    /// A union where any member may match.
    AnyOf,
    /// An intersection of all members.
    AllOf,
    /// A closed set of values.
    Enum {
        /// The enumerated values, in declaration order.
        #[serde(rename = "enum", default)]
        values: Vec<EnumValue>,
    },
}

/// One value of an enumerated model.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    /// Symbol used for the value in generated code.
    pub name: String,
    /// Literal value, already rendered (e.g. `'available'` or `42`).
    pub value: String,
    /// Optional documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EnumValue {
    /// Creates an enum value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            description: None,
        }
    }
}

impl Model {
    /// Creates a model of the given kind, with `base` set to its own name.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ModelKind) -> Self {
        let name = name.into();
        Self {
            base: name.clone(),
            name,
            kind,
            ..Self::default()
        }
    }

    /// Creates an interface model.
    #[must_use]
    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, ModelKind::Interface)
    }

    /// Creates an enum model with the given values.
    #[must_use]
    pub fn enumeration(name: impl Into<String>, values: Vec<EnumValue>) -> Self {
        Self::new(name, ModelKind::Enum { values })
    }

    /// Creates a property referencing another model (or a primitive).
    #[must_use]
    pub fn reference(name: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ModelKind::Reference,
            base: base.into(),
            ..Self::default()
        }
    }

    /// Sets the referenced type.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Appends a nested property.
    #[must_use]
    pub fn with_property(mut self, property: Model) -> Self {
        self.properties.push(property);
        self
    }

    /// Appends an inline enum.
    #[must_use]
    pub fn with_enum(mut self, enumeration: Model) -> Self {
        self.enums.push(enumeration);
        self
    }

    /// Appends an import.
    #[must_use]
    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the property as required.
    #[must_use]
    pub fn into_required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Returns the enumerated values, if this is an enum model.
    #[must_use]
    pub fn enum_values(&self) -> Option<&[EnumValue]> {
        match &self.kind {
            ModelKind::Enum { values } => Some(values),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_tagged_kind() {
        let json = r#"{
            "name": "Status",
            "export": "enum",
            "base": "string",
            "enum": [
                { "name": "AVAILABLE", "value": "'available'" },
                { "name": "SOLD", "value": "'sold'" }
            ]
        }"#;

        let model: Model = serde_json::from_str(json).expect("valid model");

        let values = model.enum_values().expect("should be an enum");
        assert_eq!(values.len(), 2);
        assert!(model.properties.is_empty());
        assert!(model.imports.is_empty());
    }

    #[test]
    fn should_use_kebab_case_discriminant() {
        let model = Model::new("Shape", ModelKind::OneOf);

        let json = serde_json::to_value(&model).expect("serializable");

        assert_eq!(json["export"], "one-of");
        assert_eq!(json["name"], "Shape");
    }

    #[test]
    fn should_reject_missing_discriminant() {
        let result = serde_json::from_str::<Model>(r#"{ "name": "Pet" }"#);

        assert!(result.is_err());
    }

    #[test]
    fn should_only_expose_enum_values_on_enums() {
        let pet = Model::interface("Pet");

        assert_eq!(pet.enum_values(), None);
    }
}
