use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};

///
/// Locator
///
/// Path string identifying one element of a flattened schema or entry-form
/// list. Group locators are colon-terminated index chains (`"0:"`, `"0:2:"`);
/// assignment locators end in a bare index (`"0:2:1"`). The empty string is
/// the synthetic root group.
///
/// Locators are opaque keys: equality and prefix tests are plain string
/// operations, and the only structural operation is parent derivation.
///

#[repr(transparent)]
#[derive(
    Clone, Debug, Default, Deref, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Locator(String);

impl Locator {
    /// The root group locator (empty path).
    #[must_use]
    pub const fn root() -> Self {
        Self(String::new())
    }

    /// Wrap a raw locator string.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns `true` for the root group locator.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if this locator addresses a group (root included).
    #[must_use]
    pub fn is_group(&self) -> bool {
        self.0.is_empty() || self.0.ends_with(':')
    }

    /// Returns `true` if this locator addresses an assignment.
    #[must_use]
    pub fn is_assignment(&self) -> bool {
        !self.is_group()
    }

    /// Locator of the `index`-th child group under this group.
    #[must_use]
    pub fn child_group(&self, index: usize) -> Self {
        Self(format!("{}{index}:", self.0))
    }

    /// Locator of the `index`-th assignment owned by this group.
    #[must_use]
    pub fn child_assignment(&self, index: usize) -> Self {
        Self(format!("{}{index}", self.0))
    }

    /// Parent locator: the trailing segment stripped. The root has no
    /// parent; malformed input is treated the same way.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.0.is_empty() {
            return None;
        }

        // Group form carries a trailing colon; drop it so both forms reduce
        // to "strip everything after the last remaining colon".
        let body = self.0.strip_suffix(':').unwrap_or(&self.0);

        match body.rfind(':') {
            Some(pos) => Some(Self(self.0[..=pos].to_string())),
            None if body.is_empty() => None,
            None => Some(Self::root()),
        }
    }

    /// Borrow the underlying path string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Locator {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for Locator {
    fn from(path: String) -> Self {
        Self(path)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_has_no_parent() {
        assert_eq!(Locator::root().parent(), None);
        assert!(Locator::root().is_group());
        assert!(Locator::root().is_root());
    }

    #[test]
    fn test_group_parent_chain() {
        let leaf = Locator::new("0:3:1:");
        assert!(leaf.is_group());

        let mid = leaf.parent().unwrap();
        assert_eq!(mid.as_str(), "0:3:");

        let top = mid.parent().unwrap();
        assert_eq!(top.as_str(), "0:");

        let root = top.parent().unwrap();
        assert!(root.is_root());
        assert_eq!(root.parent(), None);
    }

    #[test]
    fn test_assignment_parent_is_owning_group() {
        assert_eq!(Locator::new("0:2:1").parent().unwrap().as_str(), "0:2:");
        assert_eq!(Locator::new("4").parent().unwrap(), Locator::root());
        assert!(Locator::new("0:2:1").is_assignment());
    }

    #[test]
    fn test_child_construction_round_trips() {
        let group = Locator::root().child_group(0).child_group(2);
        assert_eq!(group.as_str(), "0:2:");

        let assignment = group.child_assignment(5);
        assert_eq!(assignment.as_str(), "0:2:5");
        assert_eq!(assignment.parent().unwrap(), group);
        assert_eq!(group.parent().unwrap(), Locator::root().child_group(0));
    }

    #[test]
    fn test_malformed_locator_degrades_to_no_parent() {
        // A lone separator has no segment to strip.
        assert_eq!(Locator::new(":").parent(), None);
    }

    #[test]
    fn test_serde_transparent() {
        let loc = Locator::new("1:0:");
        let json = serde_json::to_string(&loc).unwrap();
        assert_eq!(json, "\"1:0:\"");

        let back: Locator = serde_json::from_str(&json).unwrap();
        assert_eq!(back, loc);
    }
}
