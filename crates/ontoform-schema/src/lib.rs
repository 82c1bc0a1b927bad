//! Schema data model and topology: the flattened wire shapes sent by the
//! template service (`node`) and the single-pass tree reconstruction over
//! them (`hierarchy`).

pub mod hierarchy;
pub mod node;

use crate::hierarchy::HierarchyError;
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        hierarchy::{AssignmentIx, FormHierarchy, GroupIx, SchemaHierarchy, SectionIx},
        node::*,
    };
    pub use ontoform_primitives::{GroupNest, Locator, SuffixedUri};
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    HierarchyError(#[from] HierarchyError),
}
