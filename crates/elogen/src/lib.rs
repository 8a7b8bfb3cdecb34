//! ## Crate layout
//! - `build`: deterministic rendering of classified models into source text.
//! - `schema`: descriptor data model, partitioning, and classification.
//! - `utils`: identifier casing helpers.
//! - `config`: generator configuration loaded from TOML.
//! - `snapshot`: JSON schema snapshot consumed by the generator.
//! - `generator`: per-table glue from snapshot to rendered model.
//!
//! The `prelude` module mirrors the surface a caller needs to drive one
//! generation run end to end.

pub use elogen_build as build;
pub use elogen_schema as schema;
pub use elogen_utils as utils;

pub mod config;
pub mod generator;
pub mod snapshot;

use crate::{config::ConfigError, snapshot::SnapshotError};
use elogen_schema::classify::ClassifyError;
use thiserror::Error as ThisError;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Error
/// Flat error surface over the member crates.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    ClassifyError(#[from] ClassifyError),

    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error(transparent)]
    SnapshotError(#[from] SnapshotError),
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error,
        config::GeneratorConfig,
        generator::{GeneratedModel, Generator},
        snapshot::{SchemaSnapshot, TableSnapshot},
    };
    pub use elogen_schema::prelude::*;
}
