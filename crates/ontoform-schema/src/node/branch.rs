use ontoform_primitives::GroupNest;
use serde::{Deserialize, Serialize};

///
/// Branch
///
/// Directive grafting the sub-schema `schema_uri` onto the primary schema at
/// the group-nest location `group_nest`, expressed in the primary schema's
/// coordinate space in baseline form. Multiple branches may be active at
/// once; declaration order is significant for resolution.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    #[serde(rename = "schemaURI")]
    pub schema_uri: String,

    #[serde(default, skip_serializing_if = "GroupNest::is_empty")]
    pub group_nest: GroupNest,
}

impl Branch {
    #[must_use]
    pub fn new(schema_uri: impl Into<String>, group_nest: impl Into<GroupNest>) -> Self {
        Self {
            schema_uri: schema_uri.into(),
            group_nest: group_nest.into(),
        }
    }
}
