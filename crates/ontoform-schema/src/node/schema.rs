use crate::node::{SchemaAssignment, SchemaGroup};
use serde::{Deserialize, Serialize};

///
/// SchemaDefinition
///
/// One immutable flattened schema snapshot as fetched from the template
/// service: every group and assignment carries a locator expressing its
/// position, emitted parent-before-child.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDefinition {
    #[serde(rename = "schemaURI")]
    pub schema_uri: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub descr: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<SchemaGroup>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignments: Vec<SchemaAssignment>,
}

impl SchemaDefinition {
    /// Assignments sharing `prop_uri`, in flattened (wire) order.
    pub fn assignments_for_property<'a>(
        &'a self,
        prop_uri: &'a str,
    ) -> impl Iterator<Item = &'a SchemaAssignment> {
        self.assignments
            .iter()
            .filter(move |assignment| assignment.prop_uri == prop_uri)
    }
}
