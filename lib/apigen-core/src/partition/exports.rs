use serde::{Deserialize, Serialize};

use crate::ir::Client;

/// Which parts of a client end up in the generated output.
///
/// `core` does not filter anything: it tells the writer whether to emit the
/// shared runtime files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportSelection {
    /// Emit the shared runtime files.
    pub core: bool,
    /// Keep the services.
    pub services: bool,
    /// Keep the models.
    pub models: bool,
    /// Keep the schemas.
    pub schemas: bool,
}

impl Default for ExportSelection {
    fn default() -> Self {
        Self {
            core: true,
            services: true,
            models: true,
            schemas: false,
        }
    }
}

impl ExportSelection {
    /// Everything, schemas included.
    #[must_use]
    pub fn all() -> Self {
        Self {
            schemas: true,
            ..Self::default()
        }
    }

    /// Returns a copy of `client` where the sequences that are not exported
    /// are empty.
    #[must_use]
    pub fn apply(&self, client: &Client) -> Client {
        Client {
            server: client.server.clone(),
            version: client.version.clone(),
            models: kept(self.models, &client.models),
            services: kept(self.services, &client.services),
            schemas: kept(self.schemas, &client.schemas),
        }
    }
}

fn kept<T: Clone>(enabled: bool, items: &[T]) -> Vec<T> {
    if enabled { items.to_vec() } else { Vec::new() }
}
