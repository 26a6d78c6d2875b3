use std::convert::Infallible;

use super::{ClientWriter, PackageBundle};

/// A [`ClientWriter`] keeping every bundle in memory.
///
/// ```rust
/// use apigen_core::{Client, GeneratorOptions, MemoryWriter, Model, generate};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), apigen_core::GenerateError> {
/// let client = Client::default().with_model(Model::interface("Pet"));
/// let mut writer = MemoryWriter::default();
///
/// generate(&client, &GeneratorOptions::default(), &mut writer).await?;
///
/// assert_eq!(writer.bundles()[0].models[0].name, "models.Pet.Pet");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    core: Option<(String, String)>,
    bundles: Vec<PackageBundle>,
}

impl MemoryWriter {
    /// Bundles received so far, in write order.
    #[must_use]
    pub fn bundles(&self) -> &[PackageBundle] {
        &self.bundles
    }

    /// Server and version received for the shared runtime, if it was written.
    #[must_use]
    pub fn core(&self) -> Option<(&str, &str)> {
        self.core
            .as_ref()
            .map(|(server, version)| (server.as_str(), version.as_str()))
    }

    /// Consumes the writer and returns the bundles.
    #[must_use]
    pub fn into_bundles(self) -> Vec<PackageBundle> {
        self.bundles
    }
}

impl ClientWriter for MemoryWriter {
    type Error = Infallible;

    async fn write_core(&mut self, server: &str, version: &str) -> Result<(), Self::Error> {
        self.core = Some((server.to_owned(), version.to_owned()));
        Ok(())
    }

    async fn write_package(&mut self, bundle: PackageBundle) -> Result<(), Self::Error> {
        self.bundles.push(bundle);
        Ok(())
    }
}
