//! The generation driver and its writer seam.
//!
//! [`generate`] runs the whole pipeline on a raw client: post-processing,
//! export selection, partitioning, then one [`ClientWriter::write_package`]
//! call per package. Rendering templates and touching the filesystem is the
//! writer's business.

mod bundle;
mod memory;

use std::future::Future;

use tracing::{debug, info};

pub use self::bundle::PackageBundle;
pub use self::memory::MemoryWriter;

use crate::config::GeneratorOptions;
use crate::error::GenerateError;
use crate::ir::Client;
use crate::partition::{Package, partition};
use crate::post::post_process_client;

/// The rendering collaborator.
///
/// Packages are written one after the other; the driver stops at the first
/// error.
///
/// # Example
///
/// ```rust
/// use apigen_core::{ClientWriter, PackageBundle};
///
/// #[derive(Debug, Default)]
/// struct CountingWriter(usize);
///
/// impl ClientWriter for CountingWriter {
///     type Error = std::io::Error;
///
///     async fn write_package(&mut self, bundle: PackageBundle) -> Result<(), Self::Error> {
///         self.0 += bundle.models.len();
///         Ok(())
///     }
/// }
/// ```
pub trait ClientWriter {
    /// The writer's own error.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Writes the shared runtime files, once per run when core export is enabled.
    ///
    /// Does nothing by default.
    fn write_core(
        &mut self,
        _server: &str,
        _version: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        async { Ok(()) }
    }

    /// Writes one package.
    fn write_package(
        &mut self,
        bundle: PackageBundle,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// Post-processes `client`, partitions it and hands every package to `writer`.
///
/// Returns the paths of the written packages, in write order.
///
/// # Errors
///
/// Fails if post-processing fails, before anything is written, or on the
/// first writer error; packages after the failing one are not written.
pub async fn generate<W>(
    client: &Client,
    options: &GeneratorOptions,
    writer: &mut W,
) -> Result<Vec<String>, GenerateError>
where
    W: ClientWriter,
{
    let client = post_process_client(client, options)?;
    let exports = options.exports();
    let client = exports.apply(&client);
    let packages = partition(&client, options.export_packages());

    if exports.core {
        writer
            .write_core(&client.server, &client.version)
            .await
            .map_err(|source| GenerateError::Writer {
                package: "core".to_owned(),
                source: Box::new(source),
            })?;
    }

    let mut written = Vec::with_capacity(packages.len());
    for (package, content) in packages {
        debug!(%package, entities = content.len(), "writing package");
        let bundle = package_bundle(&client, options, package.clone(), content);

        writer
            .write_package(bundle)
            .await
            .map_err(|source| GenerateError::Writer {
                package: package.clone(),
                source: Box::new(source),
            })?;
        written.push(package);
    }

    info!(packages = written.len(), "generated client");
    Ok(written)
}

fn package_bundle(
    client: &Client,
    options: &GeneratorOptions,
    package: String,
    content: Package,
) -> PackageBundle {
    let client_name = options
        .client_name()
        .filter(|_| !content.services.is_empty())
        .map(|name| qualified(&package, name));
    let index_name = (!content.is_empty()).then(|| qualified(&package, "index"));

    PackageBundle {
        server: client.server.clone(),
        version: client.version.clone(),
        services: content.services,
        models: content.models,
        schemas: content.schemas,
        client_name,
        index_name,
        exports: options.exports(),
        postfix_services: options.postfix_services().to_owned(),
        postfix_models: options.postfix_models().to_owned(),
        package,
    }
}

/// `package.symbol.symbol`, without the leading dot of the root package.
fn qualified(package: &str, symbol: &str) -> String {
    [package, symbol, symbol]
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}
