//! Ontoform: schema topology and annotation reconciliation for
//! ontology-based curation.
//!
//! ## Crate layout
//! - `primitives`: locator path strings, group-nests, duplication suffixes.
//! - `schema`: flattened wire shapes and the hierarchy builder.
//! - `core`: branch resolution, annotation harmonization, template cache.
//!
//! The `prelude` mirrors the surface a curation front end consumes.

pub use ontoform_core as core;
pub use ontoform_primitives as primitives;
pub use ontoform_schema as schema;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use ontoform_core::{
        branch::{BranchLocation, relative_branch},
        harmonize::{HarmonizeReport, harmonize},
        template::TemplateCache,
    };
    pub use ontoform_primitives::{GroupNest, Locator, SuffixedUri};
    pub use ontoform_schema::{
        hierarchy::{AssignmentIx, FormHierarchy, GroupIx, SchemaHierarchy, SectionIx},
        node::{
            Annotation, Branch, EntryForm, EntryFormSection, SchemaAssignment, SchemaDefinition,
            SchemaGroup, SuggestionType,
        },
    };
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_facade_surface() {
        assert!(!crate::VERSION.is_empty());

        // the re-exported layers interoperate without extra imports
        let definition: SchemaDefinition = serde_json::from_str(
            r#"{
                "schemaURI": "bat:Primary",
                "groups": [{"name": "root", "locator": ""}],
                "assignments": [{"name": "a", "propURI": "P", "locator": "0"}]
            }"#,
        )
        .unwrap();

        let hierarchy = SchemaHierarchy::build(&definition).unwrap();
        assert_eq!(hierarchy.assignment_count(), 1);

        let mut annotations = vec![Annotation::term("P", "v:1")];
        assert!(harmonize(&definition, &mut annotations).is_clean());
    }
}
