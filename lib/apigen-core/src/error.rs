//! Error types for the post-processing pipeline and the generation driver.

use crate::post::NodeId;

/// The kind of IR entity being processed, used to qualify errors and traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum EntityKind {
    /// A model (type definition).
    #[display("model")]
    Model,
    /// A service (group of operations).
    #[display("service")]
    Service,
    /// A runtime-validation schema.
    #[display("schema")]
    Schema,
}

/// Errors raised while normalizing a [`Client`](crate::Client).
///
/// Every error is local to a single entity. The post-processor does not try to
/// recover: the first failure aborts the run and siblings are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::Display)]
pub enum PostProcessError {
    /// An entity was handed over with a raw name that has no non-empty
    /// segment, such as `""` or `"."`.
    ///
    /// The parser must never emit such names; without at least one segment
    /// there is no file or symbol to derive a canonical name from.
    #[display("{kind} at index {index} has an empty name")]
    EmptyName {
        /// What kind of entity was malformed.
        kind: EntityKind,
        /// Position of the entity in its sequence.
        index: usize,
    },

    /// Two operations of the same service ended up with the same final name.
    ///
    /// The occurrence counter makes this impossible for operations sharing a
    /// candidate name, so hitting it means a natural name (e.g. `get1`) clashed
    /// with a suffixed one.
    #[display("service '{service}' has more than one operation named '{name}'")]
    DuplicateOperationName {
        /// Raw name of the owning service.
        service: String,
        /// The colliding operation name.
        name: String,
    },

    /// A property arena contains a cycle and cannot be turned back into a tree.
    #[display("property node {node} is part of a cycle")]
    CyclicProperty {
        /// A node found twice on the same path.
        node: NodeId,
    },

    /// A node id does not belong to the property arena it was used with.
    #[display("unknown property node {node}")]
    UnknownPropertyNode {
        /// The dangling node id.
        node: NodeId,
    },
}

/// Errors raised by [`generate`](crate::generate).
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum GenerateError {
    /// Normalizing the IR failed.
    PostProcess(PostProcessError),

    /// The writer collaborator failed on a package; later packages were not written.
    #[display("failed to write package '{package}': {source}")]
    #[from(skip)]
    Writer {
        /// Path of the package being written.
        package: String,
        /// The writer's own error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
