use ontoform_primitives::Locator;
use serde::{Deserialize, Serialize};

///
/// EntryFormSection
///
/// One section of a data-entry form layout. Sections form a tree under the
/// same locator contract as schema groups; they are otherwise uncoupled from
/// the schema tree.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryFormSection {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub descr: String,

    pub locator: Locator,
}

///
/// EntryForm
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryForm {
    #[serde(rename = "formURI")]
    pub form_uri: String,

    /// Schemas this form applies to.
    #[serde(rename = "schemaURIList", default, skip_serializing_if = "Vec::is_empty")]
    pub schema_uri_list: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<EntryFormSection>,
}
