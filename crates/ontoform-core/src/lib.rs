//! Reconciliation layer: mapping annotations onto whichever schema actually
//! defines them (`branch`), repairing annotations after template edits
//! (`harmonize`), and the caller-owned snapshot cache (`template`).
//!
//! Everything here is synchronous and pure over immutable snapshots; nothing
//! blocks, suspends, or shares mutable state across calls.

pub mod branch;
pub mod harmonize;
pub mod template;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        branch::{BranchLocation, relative_branch},
        harmonize::{HarmonizeReport, harmonize},
        template::TemplateCache,
    };
    pub use ontoform_schema::prelude::*;
}
