pub mod classify;
pub mod column;
pub mod model;
pub mod timestamps;

use crate::classify::ClassifyError;
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        classify::classify,
        column::{ColumnDescriptor, ForeignKeyEdge, ForeignKeyPartition},
        model::ModelDescriptor,
        timestamps::{TimestampFields, TimestampLookup},
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    ClassifyError(#[from] ClassifyError),
}
