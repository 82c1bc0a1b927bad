use ontoform_primitives::{GroupNest, Locator};
use serde::{Deserialize, Serialize};

///
/// SuggestionType
///
/// Rendering hint for an assignment's value picker. Carried for wire
/// fidelity; topology and reconciliation never consult it.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[remain::sorted]
pub enum SuggestionType {
    Date,
    Disabled,
    Field,
    #[default]
    Full,
    Id,
    Integer,
    Number,
    String,
    Url,
}

///
/// SchemaAssignment
///
/// A single annotatable property slot, owned by exactly one group (derived
/// from its locator).
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaAssignment {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub descr: String,

    #[serde(rename = "propURI")]
    pub prop_uri: String,

    /// Ancestor group URIs, nearest first.
    #[serde(default, skip_serializing_if = "GroupNest::is_empty")]
    pub group_nest: GroupNest,

    /// Per-ancestor display labels, aligned with `group_nest`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_label: Vec<String>,

    pub locator: Locator,

    #[serde(default, skip_serializing_if = "is_default_suggestions")]
    pub suggestions: SuggestionType,
}

fn is_default_suggestions(value: &SuggestionType) -> bool {
    *value == SuggestionType::default()
}

///
/// TESTS
///
