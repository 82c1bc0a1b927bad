//! Branch resolution: which schema (primary or a grafted branch) owns a
//! nested annotation location, and that location re-expressed relative to
//! the owning schema.
//!
//! Branch schemas are fetched and cached independently and know nothing
//! about where they were grafted, so every consumer that needs the
//! "as seen from the defining sub-schema" view goes through here.

use ontoform_primitives::GroupNest;
use ontoform_schema::node::Branch;

///
/// BranchLocation
///
/// An annotation location re-expressed in the coordinate space of the schema
/// that defines it.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BranchLocation {
    pub schema_uri: String,
    pub group_nest: GroupNest,
}

/// Resolve an annotation's group-nest against the active branch grafts.
///
/// The nest is given in composite (primary-schema, duplication-suffixed)
/// coordinates. Branches are tried in declaration order and the first match
/// wins; grafts are expected not to overlap in practice. A branch matches
/// when its graft nest equals, element-for-element with strict equality, the
/// trailing slice of the annotation nest — graft points are always written
/// in baseline form, and any duplication lives on the portion of the nest
/// outside the branch. On a match the prefix inside the branch becomes the
/// branch-relative nest, baseline-normalized.
#[must_use]
pub fn relative_branch(
    group_nest: &GroupNest,
    primary_schema_uri: &str,
    branches: &[Branch],
) -> BranchLocation {
    // directly on the primary root, nothing to re-express
    if group_nest.is_empty() {
        return BranchLocation {
            schema_uri: primary_schema_uri.to_string(),
            group_nest: group_nest.clone(),
        };
    }

    for branch in branches {
        let Some(depth) = group_nest.len().checked_sub(branch.group_nest.len()) else {
            continue;
        };

        let trailing = &group_nest.as_slice()[depth..];
        if trailing == branch.group_nest.as_slice() {
            let prefix: GroupNest = group_nest.as_slice()[..depth].to_vec().into();

            return BranchLocation {
                schema_uri: branch.schema_uri.clone(),
                group_nest: prefix.baseline(),
            };
        }
    }

    BranchLocation {
        schema_uri: primary_schema_uri.to_string(),
        group_nest: group_nest.baseline(),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn nest(elements: &[&str]) -> GroupNest {
        GroupNest::from(elements)
    }

    #[test]
    fn test_empty_nest_stays_on_primary() {
        let branches = [Branch::new("B", nest(&["g2"]))];
        let location = relative_branch(&GroupNest::new(), "A", &branches);

        assert_eq!(location.schema_uri, "A");
        assert!(location.group_nest.is_empty());
    }

    #[test]
    fn test_no_branches_baselines_on_primary() {
        let location = relative_branch(&nest(&["g1@2", "g2"]), "A", &[]);

        assert_eq!(location.schema_uri, "A");
        assert_eq!(location.group_nest, nest(&["g1", "g2"]));
    }

    #[test]
    fn test_containment() {
        let branches = [Branch::new("B", nest(&["g2"]))];

        // prefix outside the branch becomes the branch-relative nest
        let inner = relative_branch(&nest(&["g1", "g2"]), "A", &branches);
        assert_eq!(inner.schema_uri, "B");
        assert_eq!(inner.group_nest, nest(&["g1"]));

        // directly at the graft point: empty branch-relative nest
        let at_graft = relative_branch(&nest(&["g2"]), "A", &branches);
        assert_eq!(at_graft.schema_uri, "B");
        assert!(at_graft.group_nest.is_empty());
    }

    #[test]
    fn test_graft_point_matching_is_strict() {
        // a duplicated graft-point element does not match: duplication is
        // encoded only outside the branch
        let branches = [Branch::new("B", nest(&["g2"]))];
        let location = relative_branch(&nest(&["g1", "g2@2"]), "A", &branches);

        assert_eq!(location.schema_uri, "A");
        assert_eq!(location.group_nest, nest(&["g1", "g2@2"]));
    }

    #[test]
    fn test_duplication_outside_branch_is_baselined() {
        let branches = [Branch::new("B", nest(&["g3"]))];
        let location = relative_branch(&nest(&["g1@4", "g2", "g3"]), "A", &branches);

        assert_eq!(location.schema_uri, "B");
        assert_eq!(location.group_nest, nest(&["g1", "g2"]));
    }

    #[test]
    fn test_first_declared_branch_wins() {
        let branches = [
            Branch::new("B1", nest(&["g2"])),
            Branch::new("B2", nest(&["g2"])),
        ];

        let location = relative_branch(&nest(&["g1", "g2"]), "A", &branches);
        assert_eq!(location.schema_uri, "B1");
    }

    #[test]
    fn test_longer_graft_than_nest_cannot_match() {
        let branches = [Branch::new("B", nest(&["g1", "g2"]))];
        let location = relative_branch(&nest(&["g2"]), "A", &branches);

        assert_eq!(location.schema_uri, "A");
        assert_eq!(location.group_nest, nest(&["g2"]));
    }
}
