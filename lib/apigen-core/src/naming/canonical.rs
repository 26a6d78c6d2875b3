use std::fmt;

/// A borrowed view over a canonical name (`package.file.symbol`).
///
/// Renderers use it to locate the file a type lives in and to compute the
/// relative import directive from one generated file to another.
///
/// # Example
///
/// ```rust
/// use apigen_core::CanonicalName;
///
/// let name = CanonicalName::new("models.pet.Category.Category");
///
/// assert_eq!(name.package(), "models.pet");
/// assert_eq!(name.file(), "Category");
/// assert_eq!(name.symbol(), "Category");
/// assert_eq!(name.module_path(), "models/pet/Category");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalName<'a>(&'a str);

impl<'a> CanonicalName<'a> {
    /// Wraps a canonical name.
    #[must_use]
    pub fn new(name: &'a str) -> Self {
        Self(name)
    }

    /// The full dotted name.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// The exported symbol (last segment).
    #[must_use]
    pub fn symbol(&self) -> &'a str {
        self.0.rsplit('.').next().unwrap_or(self.0)
    }

    /// The file the symbol lives in (second to last segment).
    #[must_use]
    pub fn file(&self) -> &'a str {
        self.0.rsplit('.').nth(1).unwrap_or_default()
    }

    /// The package: every segment but the file and the symbol.
    #[must_use]
    pub fn package(&self) -> &'a str {
        self.0.rsplitn(3, '.').nth(2).unwrap_or_default()
    }

    /// Path of the file relative to the output root, without extension.
    #[must_use]
    pub fn module_path(&self) -> String {
        self.0
            .rsplit_once('.')
            .map(|(module, _symbol)| module.replace('.', "/"))
            .unwrap_or_default()
    }

    /// Directory segments of the file.
    fn directories(&self) -> Vec<&'a str> {
        let mut segments = self.0.split('.').collect::<Vec<_>>();
        segments.truncate(segments.len().saturating_sub(2));
        segments
    }

    /// Computes how the file of `self` imports `target`.
    ///
    /// ```rust
    /// use apigen_core::CanonicalName;
    ///
    /// let service = CanonicalName::new("services.PetService.PetService");
    /// let directive = service.import_of(CanonicalName::new("models.Pet.Pet"));
    ///
    /// assert_eq!(directive.path, "../models/Pet");
    /// assert_eq!(directive.symbol, "Pet");
    /// ```
    #[must_use]
    pub fn import_of(&self, target: CanonicalName<'_>) -> ImportDirective {
        let from = self.directories();
        let to = target.directories();
        let common = from
            .iter()
            .zip(&to)
            .take_while(|(left, right)| left == right)
            .count();

        let relative = std::iter::repeat_n("..", from.len() - common)
            .chain(to.iter().skip(common).copied())
            .collect::<Vec<_>>()
            .join("/");
        let relative = if relative.is_empty() {
            ".".to_owned()
        } else if relative.starts_with('.') {
            relative
        } else {
            format!("./{relative}")
        };

        ImportDirective {
            path: format!("{relative}/{}", target.file()),
            symbol: target.symbol().to_owned(),
            alias: None,
            schema: false,
        }
    }
}

impl fmt::Display for CanonicalName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl<'a> From<&'a str> for CanonicalName<'a> {
    fn from(value: &'a str) -> Self {
        Self(value)
    }
}

/// A relative module path and the symbol to import from it.
///
/// Schema imports refer to the `$`-prefixed constant generated next to a
/// model; an alias renames the symbol on import.
///
/// ```rust
/// use apigen_core::CanonicalName;
///
/// let index = CanonicalName::new("schemas.index.index");
/// let directive = index
///     .import_of(CanonicalName::new("schemas.Pet.Pet"))
///     .into_schema()
///     .with_alias("PetSchema");
///
/// assert_eq!(directive.to_string(), "$Pet as PetSchema from './Pet'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportDirective {
    /// Relative module path, always starting with `.`.
    pub path: String,
    /// The symbol of the target, without the schema prefix.
    pub symbol: String,
    /// Local name of the imported symbol.
    pub alias: Option<String>,
    /// Whether the schema constant of the target is imported.
    pub schema: bool,
}

impl ImportDirective {
    /// Imports the schema constant of the target instead of its type.
    #[must_use]
    pub fn into_schema(mut self) -> Self {
        self.schema = true;
        self
    }

    /// Renames the imported symbol; an empty alias is ignored.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        self.alias = (!alias.is_empty()).then_some(alias);
        self
    }

    /// The symbol as exported by the target module (`$Pet` for a schema).
    #[must_use]
    pub fn imported_symbol(&self) -> String {
        if self.schema {
            format!("${}", self.symbol)
        } else {
            self.symbol.clone()
        }
    }

    /// The name the symbol is bound to in the importing module.
    #[must_use]
    pub fn local_name(&self) -> String {
        self.alias.clone().unwrap_or_else(|| self.imported_symbol())
    }
}

impl fmt::Display for ImportDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.imported_symbol())?;
        if let Some(alias) = &self.alias {
            write!(f, " as {alias}")?;
        }
        write!(f, " from '{}'", self.path)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::sibling_package("services.PetService.PetService", "models.Pet.Pet", "../models/Pet")]
    #[case::same_package("models.Pet.Pet", "models.Category.Category", "./Category")]
    #[case::from_root("index.index", "models.Pet.Pet", "./models/Pet")]
    #[case::to_root("models.Pet.Pet", "index.index", "../index")]
    #[case::nested("models.pet.Pet.Pet", "models.store.Order.Order", "../store/Order")]
    #[case::deeper_target("models.Pet.Pet", "models.pet.Tag.Tag", "./pet/Tag")]
    fn should_compute_relative_imports(
        #[case] source: &str,
        #[case] target: &str,
        #[case] expected: &str,
    ) {
        let directive = CanonicalName::new(source).import_of(CanonicalName::new(target));

        assert_eq!(directive.path, expected);
    }

    #[test]
    fn should_split_short_names() {
        let name = CanonicalName::new("Pet.Pet");

        assert_eq!(name.package(), "");
        assert_eq!(name.file(), "Pet");
        assert_eq!(name.symbol(), "Pet");
        assert_eq!(name.module_path(), "Pet");
    }

    #[test]
    fn should_display_import_directive() {
        let directive = CanonicalName::new("models.Pet.Pet")
            .import_of(CanonicalName::new("models.Category.Category"));

        insta::assert_snapshot!(directive, @"Category from './Category'");
    }

    #[rstest]
    #[case::plain(false, "", "Pet from '../models/Pet'")]
    #[case::aliased(false, "PetModel", "Pet as PetModel from '../models/Pet'")]
    #[case::schema(true, "", "$Pet from '../models/Pet'")]
    #[case::aliased_schema(true, "PetSchema", "$Pet as PetSchema from '../models/Pet'")]
    fn should_display_schema_and_aliased_imports(
        #[case] schema: bool,
        #[case] alias: &str,
        #[case] expected: &str,
    ) {
        let mut directive = CanonicalName::new("services.PetService.PetService")
            .import_of(CanonicalName::new("models.Pet.Pet"))
            .with_alias(alias);
        if schema {
            directive = directive.into_schema();
        }

        assert_eq!(directive.to_string(), expected);
    }

    #[test]
    fn should_bind_local_name() {
        let directive =
            CanonicalName::new("index.index").import_of(CanonicalName::new("schemas.Pet.Pet"));

        assert_eq!(directive.local_name(), "Pet");
        assert_eq!(directive.clone().into_schema().local_name(), "$Pet");
        assert_eq!(directive.with_alias("PetModel").local_name(), "PetModel");
    }
}
