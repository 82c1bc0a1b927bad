//! Path and suffix vocabulary shared by every ontoform layer: locator path
//! strings over flattened schema lists, group-nest ancestor paths, and the
//! `@N` duplication-suffix codec.

pub mod locator;
pub mod nest;
pub mod suffix;

pub use locator::Locator;
pub use nest::{GroupNest, NestError};
pub use suffix::SuffixedUri;

use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    NestError(#[from] NestError),
}
