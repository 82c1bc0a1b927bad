use ontoform_primitives::{GroupNest, Locator};
use serde::{Deserialize, Serialize};

///
/// SchemaGroup
///
/// A (possibly repeatable) nesting container within a schema. `group_uri` is
/// absent only on the synthetic root. Groups are immutable for the lifetime
/// of one schema snapshot and superseded wholesale on the next fetch.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaGroup {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub descr: String,

    #[serde(rename = "groupURI", default, skip_serializing_if = "Option::is_none")]
    pub group_uri: Option<String>,

    /// Ancestor group URIs, nearest first; does not include `group_uri`.
    #[serde(default, skip_serializing_if = "GroupNest::is_empty")]
    pub group_nest: GroupNest,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub can_duplicate: bool,

    pub locator: Locator,
}

impl SchemaGroup {
    /// Returns `true` for the synthetic root group.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.group_uri.is_none()
    }
}

///
/// TESTS
///
