use ontoform_primitives::GroupNest;
use serde::{Deserialize, Serialize};

///
/// Annotation
///
/// A leaf curation fact: property plus either a term URI or a free-text
/// label. Always expressed in primary-schema, duplication-suffixed
/// coordinates, even when it semantically lives inside a grafted branch.
///
/// Created and mutated by the editing layer; the harmonizer may relocate
/// `group_nest` after a schema reload, and touches nothing else.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    #[serde(rename = "propURI")]
    pub prop_uri: String,

    #[serde(default, skip_serializing_if = "GroupNest::is_empty")]
    pub group_nest: GroupNest,

    #[serde(rename = "valueURI", default, skip_serializing_if = "Option::is_none")]
    pub value_uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_label: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_label: Vec<String>,
}

impl Annotation {
    /// Term annotation: property plus ontology value URI.
    #[must_use]
    pub fn term(prop_uri: impl Into<String>, value_uri: impl Into<String>) -> Self {
        Self {
            prop_uri: prop_uri.into(),
            value_uri: Some(value_uri.into()),
            ..Self::default()
        }
    }

    /// Free-text annotation: property plus literal label.
    #[must_use]
    pub fn text(prop_uri: impl Into<String>, value_label: impl Into<String>) -> Self {
        Self {
            prop_uri: prop_uri.into(),
            value_label: Some(value_label.into()),
            ..Self::default()
        }
    }

    /// Same annotation nested under `group_nest`.
    #[must_use]
    pub fn nested_under(mut self, group_nest: impl Into<GroupNest>) -> Self {
        self.group_nest = group_nest.into();
        self
    }
}

///
/// TESTS
///
