//! Duplication-suffix codec.
//!
//! A repeatable group instance is addressed by appending `@N` (N >= 1) to the
//! group URI on the leading element of a group-nest. `SuffixedUri` is the
//! tagged in-memory form; the string splice/strip helpers are the boundary
//! serialization used against wire data.

use std::fmt;

/// Split a URI into its base and duplication index. Index 0 means "no
/// duplication marker"; a `@0` tail is not a marker and stays in the base.
#[must_use]
pub fn decompose(uri: &str) -> (&str, u32) {
    if let Some(pos) = uri.rfind('@') {
        let digits = &uri[pos + 1..];
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = digits.parse::<u32>() {
                if index >= 1 {
                    return (&uri[..pos], index);
                }
            }
        }
    }

    (uri, 0)
}

/// Strip any duplication marker, returning the base URI.
#[must_use]
pub fn remove_suffix(uri: &str) -> &str {
    decompose(uri).0
}

/// Replace any existing duplication marker with `@index`.
#[must_use]
pub fn append_suffix(uri: &str, index: u32) -> String {
    format!("{}@{index}", remove_suffix(uri))
}

/// Permissive copy-aware URI equality: a suffixed reference names a specific
/// copy, an unsuffixed one matches any copy generically. Two references to
/// different specific copies never match.
#[must_use]
pub fn compare_permissive(uri1: &str, uri2: &str) -> bool {
    if uri1 == uri2 {
        return true;
    }

    let (base1, index1) = decompose(uri1);
    let (base2, index2) = decompose(uri2);

    // Both carry markers and were unequal above, so the copies differ.
    if index1 >= 1 && index2 >= 1 {
        return false;
    }

    base1 == base2
}

///
/// SuffixedUri
///
/// Tagged decomposition of a group URI and its optional duplication index.
/// `Display` re-serializes to the exact wire form.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SuffixedUri {
    pub base: String,
    pub index: Option<u32>,
}

impl SuffixedUri {
    /// Parse a wire URI, splitting off a trailing `@N` marker if present.
    #[must_use]
    pub fn parse(uri: &str) -> Self {
        let (base, index) = decompose(uri);

        Self {
            base: base.to_string(),
            index: (index >= 1).then_some(index),
        }
    }

    /// Returns `true` if this reference names a specific duplicate copy.
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        self.index.is_some()
    }
}

impl fmt::Display for SuffixedUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}@{index}", self.base),
            None => f.write_str(&self.base),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decompose() {
        assert_eq!(decompose("bao:Grp@3"), ("bao:Grp", 3));
        assert_eq!(decompose("bao:Grp"), ("bao:Grp", 0));
        assert_eq!(decompose("bao:Grp@"), ("bao:Grp@", 0));
        assert_eq!(decompose("bao:Grp@x1"), ("bao:Grp@x1", 0));
        assert_eq!(decompose("bao:Grp@0"), ("bao:Grp@0", 0));
    }

    #[test]
    fn test_append_replaces_existing_marker() {
        assert_eq!(append_suffix("uri", 2), "uri@2");
        assert_eq!(append_suffix("uri@7", 2), "uri@2");
    }

    #[test]
    fn test_permissive_comparison() {
        // unsuffixed matches any copy
        assert!(compare_permissive("uri", "uri@2"));
        assert!(compare_permissive("uri@2", "uri"));
        assert!(compare_permissive("uri", "uri"));
        assert!(compare_permissive("uri@2", "uri@2"));

        // two distinct specific copies never match
        assert!(!compare_permissive("uri@1", "uri@2"));

        // different bases never match
        assert!(!compare_permissive("uri", "other"));
        assert!(!compare_permissive("uri@1", "other@1"));
    }

    #[test]
    fn test_suffixed_uri_round_trip() {
        let plain = SuffixedUri::parse("bao:Grp");
        assert_eq!(plain.index, None);
        assert!(!plain.is_duplicate());
        assert_eq!(plain.to_string(), "bao:Grp");

        let copy = SuffixedUri::parse("bao:Grp@4");
        assert_eq!(copy.base, "bao:Grp");
        assert_eq!(copy.index, Some(4));
        assert_eq!(copy.to_string(), "bao:Grp@4");
    }

    proptest! {
        #[test]
        fn prop_suffix_idempotence(base in "[a-z:/#A-Z0-9_.-]{0,24}", n in 1u32..10_000) {
            // only bases without an existing marker participate
            prop_assume!(decompose(&base).1 == 0);

            let appended = append_suffix(&base, n);
            prop_assert_eq!(remove_suffix(&appended), base.as_str());
        }

        #[test]
        fn prop_permissive_symmetry(
            a in "[a-z]{1,6}(@[0-9]{1,3})?",
            b in "[a-z]{1,6}(@[0-9]{1,3})?",
        ) {
            prop_assert_eq!(compare_permissive(&a, &b), compare_permissive(&b, &a));
        }
    }
}
