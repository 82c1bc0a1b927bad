use crate::suffix;
use derive_more::{Deref, From, IntoIterator};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// NestError
///

#[derive(Debug, ThisError)]
pub enum NestError {
    #[error("duplication suffix on non-leading nest element {position}: '{element}'")]
    SuffixOnInnerElement { position: usize, element: String },
}

///
/// GroupNest
///
/// Ordered ancestor-group URI path for an assignment or annotation, nearest
/// enclosing group first. Only the leading element may carry a duplication
/// suffix; every other element is a plain URI matched by strict equality.
///
/// Serializes identically to `Vec<String>`.
///

#[repr(transparent)]
#[derive(
    Clone, Debug, Default, Deref, Deserialize, Eq, From, Hash, IntoIterator, PartialEq, Serialize,
)]
#[serde(transparent)]
pub struct GroupNest(Vec<String>);

impl GroupNest {
    /// Create an empty nest (annotation directly on the schema root).
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Borrow the nest as a plain URI slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Return the nest depth.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for an empty nest.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The nearest enclosing group URI, if any.
    #[must_use]
    pub fn leading(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Returns `true` if the leading element carries no duplication marker.
    #[must_use]
    pub fn is_baseline(&self) -> bool {
        self.leading().is_none_or(|uri| suffix::decompose(uri).1 == 0)
    }

    /// Copy of this nest with the leading element's duplication suffix
    /// stripped. Already-baseline nests (empty included) copy unchanged.
    #[must_use]
    pub fn baseline(&self) -> Self {
        if self.is_baseline() {
            return self.clone();
        }

        let mut elements = self.0.clone();
        elements[0] = suffix::remove_suffix(&elements[0]).to_string();

        Self(elements)
    }

    /// Copy of this nest with the leading element's duplication suffix
    /// replaced by `index`. An empty nest copies unchanged.
    #[must_use]
    pub fn with_suffix(&self, index: u32) -> Self {
        let mut elements = self.0.clone();
        if let Some(leading) = elements.first_mut() {
            *leading = suffix::append_suffix(leading, index);
        }

        Self(elements)
    }

    /// Enforce the structural invariant that only the leading element may
    /// carry a duplication suffix.
    pub fn check_well_formed(&self) -> Result<(), NestError> {
        for (position, element) in self.0.iter().enumerate().skip(1) {
            if suffix::decompose(element).1 >= 1 {
                return Err(NestError::SuffixOnInnerElement {
                    position,
                    element: element.clone(),
                });
            }
        }

        Ok(())
    }

    /// Baseline nest equality: lengths must match, the leading elements are
    /// compared with duplication suffixes stripped from both sides, and all
    /// remaining elements compare strictly. Two empty nests are equal.
    #[must_use]
    pub fn compare_baseline(&self, other: &Self) -> bool {
        if self.0.len() != other.0.len() {
            return false;
        }

        self.0.iter().zip(&other.0).enumerate().all(|(pos, (a, b))| {
            if pos == 0 {
                suffix::remove_suffix(a) == suffix::remove_suffix(b)
            } else {
                a == b
            }
        })
    }
}

impl FromIterator<String> for GroupNest {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&[&str]> for GroupNest {
    fn from(elements: &[&str]) -> Self {
        Self(elements.iter().map(ToString::to_string).collect())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn nest(elements: &[&str]) -> GroupNest {
        GroupNest::from(elements)
    }

    #[test]
    fn test_baseline_strips_only_leading_suffix() {
        let suffixed = nest(&["grp@2", "sub@3"]);
        assert!(!suffixed.is_baseline());

        // element 1 is left untouched, baseline only concerns element 0
        assert_eq!(suffixed.baseline(), nest(&["grp", "sub@3"]));

        let plain = nest(&["grp", "sub"]);
        assert!(plain.is_baseline());
        assert_eq!(plain.baseline(), plain);

        assert_eq!(GroupNest::new().baseline(), GroupNest::new());
    }

    #[test]
    fn test_with_suffix_replaces_leading_marker() {
        assert_eq!(nest(&["grp", "sub"]).with_suffix(2), nest(&["grp@2", "sub"]));
        assert_eq!(nest(&["grp@9", "sub"]).with_suffix(2), nest(&["grp@2", "sub"]));
        assert_eq!(GroupNest::new().with_suffix(2), GroupNest::new());
    }

    #[test]
    fn test_well_formed_rejects_inner_suffix() {
        assert!(nest(&["grp@2", "sub"]).check_well_formed().is_ok());
        assert!(GroupNest::new().check_well_formed().is_ok());

        let err = nest(&["grp", "sub@1"]).check_well_formed().unwrap_err();
        let NestError::SuffixOnInnerElement { position, element } = err;
        assert_eq!(position, 1);
        assert_eq!(element, "sub@1");
    }

    #[test]
    fn test_compare_baseline_is_suffix_blind_at_leading_only() {
        assert!(nest(&["foo@1", "bar"]).compare_baseline(&nest(&["foo@2", "bar"])));
        assert!(nest(&["foo@1", "bar"]).compare_baseline(&nest(&["foo", "bar"])));
        assert!(!nest(&["foo", "bar@1"]).compare_baseline(&nest(&["foo", "bar@2"])));
        assert!(!nest(&["foo"]).compare_baseline(&nest(&["foo", "bar"])));
        assert!(GroupNest::new().compare_baseline(&GroupNest::new()));
    }

    #[test]
    fn test_duplicated_annotation_matches_schema_nest() {
        // the wire form of "second copy of Grp" matches the generic schema nest
        assert!(nest(&["Grp@2", "Sub"]).compare_baseline(&nest(&["Grp", "Sub"])));
    }

    proptest! {
        #[test]
        fn prop_baseline_after_with_suffix(
            elements in prop::collection::vec("[a-z:#]{1,8}", 0..4),
            n in 1u32..100,
        ) {
            let nest = GroupNest::from_iter(elements);

            prop_assert_eq!(nest.with_suffix(n).baseline(), nest.baseline());
        }

        #[test]
        fn prop_baseline_is_idempotent(
            elements in prop::collection::vec("[a-z:#]{1,8}(@[0-9]{1,2})?", 0..4),
        ) {
            let nest = GroupNest::from_iter(elements);
            let baseline = nest.baseline();

            prop_assert_eq!(baseline.baseline(), baseline);
        }
    }
}
