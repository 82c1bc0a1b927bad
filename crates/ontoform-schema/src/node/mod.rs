//! Wire node shapes. One file per node type, all serde round-trippable
//! against the template service's camelCase JSON.

mod annotation;
mod assignment;
mod branch;
mod form;
mod group;
mod schema;

pub use annotation::Annotation;
pub use assignment::{SchemaAssignment, SuggestionType};
pub use branch::Branch;
pub use form::{EntryForm, EntryFormSection};
pub use group::SchemaGroup;
pub use schema::SchemaDefinition;
