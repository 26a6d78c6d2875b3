//! YAML output using serde-saphyr.
//!
//! Only available with the `yaml` feature. Any serializable value gets a
//! `to_yaml()` method, handy to dump a post-processed [`Client`](crate::Client)
//! or a [`PackageBundle`](crate::PackageBundle).
//!
//! # Example
//!
//! ```rust
//! use apigen_core::{Model, ToYaml};
//!
//! let yaml = Model::interface("Pet").to_yaml()?;
//!
//! assert!(yaml.contains("export: interface"));
//! # Ok::<(), apigen_core::YamlError>(())
//! ```

use serde::Serialize;

/// Error type for YAML serialization.
pub type YamlError = serde_saphyr::ser_error::Error;

/// Extension trait serializing any [`Serialize`] value to YAML.
pub trait ToYaml: Serialize + Sized {
    /// Serializes this value to a YAML string.
    ///
    /// # Errors
    ///
    /// Returns a [`YamlError`] if serialization fails.
    fn to_yaml(&self) -> Result<String, YamlError> {
        serde_saphyr::to_string(self)
    }
}

impl<T: Serialize + Sized> ToYaml for T {}
