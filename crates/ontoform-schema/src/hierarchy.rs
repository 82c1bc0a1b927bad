//! Single-pass tree reconstruction over flattened, locator-tagged lists.
//!
//! The wire format favors flat arrays with path strings (cheap to serialize,
//! stable under partial reloads); this module rebuilds the parent/child
//! topology as an arena indexed by position, with integer links instead of
//! pointers. Input snapshots are never mutated; the arena owns decorated
//! copies.

use crate::node::{EntryForm, EntryFormSection, SchemaAssignment, SchemaDefinition, SchemaGroup};
use ontoform_primitives::{GroupNest, Locator, NestError, SuffixedUri};
use std::collections::HashMap;
use thiserror::Error as ThisError;

// Nest-key separator. URIs never contain a newline, so joining with one
// cannot collide across element boundaries.
const NEST_KEY_SEP: char = '\n';

///
/// HierarchyError
///
/// Structural contract violations in the flattened input. These indicate a
/// malformed payload from the schema source and fail fast; they are not
/// user-recoverable and never arise from well-formed snapshots.
///

#[derive(Debug, ThisError)]
pub enum HierarchyError {
    #[error("duplicate locator '{locator}' in flattened list")]
    DuplicateLocator { locator: Locator },

    #[error("group '{locator}' references a parent that does not exist")]
    MissingParent { locator: Locator },

    #[error("no root element (empty locator) in flattened list")]
    MissingRoot,

    #[error("assignment '{locator}' references an owning group that does not exist")]
    MissingOwner { locator: Locator },

    #[error(transparent)]
    Nest(#[from] NestError),
}

///
/// GroupIx / AssignmentIx / SectionIx
///
/// Arena handles. Valid only against the hierarchy that issued them.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct GroupIx(usize);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct AssignmentIx(usize);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SectionIx(usize);

#[derive(Debug)]
struct GroupNode {
    group: SchemaGroup,
    parent: Option<GroupIx>,
    sub_groups: Vec<GroupIx>,
    assignments: Vec<AssignmentIx>,
}

#[derive(Debug)]
struct AssignmentNode {
    assignment: SchemaAssignment,
    owner: GroupIx,
}

///
/// SchemaHierarchy
///
/// Reconstructed schema tree plus lookup indices by locator and by semantic
/// group-nest path. Built once per schema snapshot and immutable afterwards,
/// so concurrent readers against one snapshot need no synchronization.
///

#[derive(Debug)]
pub struct SchemaHierarchy {
    groups: Vec<GroupNode>,
    assignments: Vec<AssignmentNode>,
    root: GroupIx,
    by_group_locator: HashMap<Locator, GroupIx>,
    by_assignment_locator: HashMap<Locator, AssignmentIx>,
    by_nest_key: HashMap<String, GroupIx>,
}

impl SchemaHierarchy {
    /// Rebuild the tree from one flattened snapshot.
    ///
    /// Both lists are walked in array order, groups before assignments. The
    /// wire emits elements parent-before-child, so every parent lookup must
    /// already be resolvable; anything else is a contract violation.
    pub fn build(definition: &SchemaDefinition) -> Result<Self, HierarchyError> {
        let mut hierarchy = Self {
            groups: Vec::with_capacity(definition.groups.len()),
            assignments: Vec::with_capacity(definition.assignments.len()),
            root: GroupIx(0),
            by_group_locator: HashMap::new(),
            by_assignment_locator: HashMap::new(),
            by_nest_key: HashMap::new(),
        };

        let mut root = None;

        for group in &definition.groups {
            group.group_nest.check_well_formed()?;

            let parent = if group.locator.is_root() {
                if root.is_some() {
                    return Err(HierarchyError::DuplicateLocator {
                        locator: group.locator.clone(),
                    });
                }
                None
            } else {
                let parent_locator = group.locator.parent().ok_or_else(|| {
                    HierarchyError::MissingParent {
                        locator: group.locator.clone(),
                    }
                })?;

                let parent = hierarchy
                    .by_group_locator
                    .get(&parent_locator)
                    .copied()
                    .ok_or_else(|| HierarchyError::MissingParent {
                        locator: group.locator.clone(),
                    })?;

                Some(parent)
            };

            let ix = GroupIx(hierarchy.groups.len());
            hierarchy.groups.push(GroupNode {
                group: group.clone(),
                parent,
                sub_groups: Vec::new(),
                assignments: Vec::new(),
            });

            match parent {
                Some(parent) => hierarchy.groups[parent.0].sub_groups.push(ix),
                None => root = Some(ix),
            }

            if hierarchy
                .by_group_locator
                .insert(group.locator.clone(), ix)
                .is_some()
            {
                return Err(HierarchyError::DuplicateLocator {
                    locator: group.locator.clone(),
                });
            }

            if let Some(uri) = &group.group_uri {
                hierarchy
                    .by_nest_key
                    .insert(nest_key(uri, &group.group_nest), ix);
            }
        }

        let root = root.ok_or(HierarchyError::MissingRoot)?;
        hierarchy.root = root;

        for assignment in &definition.assignments {
            assignment.group_nest.check_well_formed()?;

            let owner_locator = assignment.locator.parent().ok_or_else(|| {
                HierarchyError::MissingOwner {
                    locator: assignment.locator.clone(),
                }
            })?;

            let owner = hierarchy
                .by_group_locator
                .get(&owner_locator)
                .copied()
                .ok_or_else(|| HierarchyError::MissingOwner {
                    locator: assignment.locator.clone(),
                })?;

            let ix = AssignmentIx(hierarchy.assignments.len());
            hierarchy.assignments.push(AssignmentNode {
                assignment: assignment.clone(),
                owner,
            });
            hierarchy.groups[owner.0].assignments.push(ix);

            if hierarchy
                .by_assignment_locator
                .insert(assignment.locator.clone(), ix)
                .is_some()
            {
                return Err(HierarchyError::DuplicateLocator {
                    locator: assignment.locator.clone(),
                });
            }
        }

        Ok(hierarchy)
    }

    // ------------------------------------------------------------------
    // Node access
    // ------------------------------------------------------------------

    /// Root group handle (empty locator).
    #[must_use]
    pub const fn root(&self) -> GroupIx {
        self.root
    }

    /// Group payload for a handle.
    #[must_use]
    pub fn group(&self, ix: GroupIx) -> &SchemaGroup {
        &self.groups[ix.0].group
    }

    /// Assignment payload for a handle.
    #[must_use]
    pub fn assignment(&self, ix: AssignmentIx) -> &SchemaAssignment {
        &self.assignments[ix.0].assignment
    }

    /// Parent group; `None` only for the root.
    #[must_use]
    pub fn parent_of(&self, ix: GroupIx) -> Option<GroupIx> {
        self.groups[ix.0].parent
    }

    /// Group that owns an assignment.
    #[must_use]
    pub fn owner_of(&self, ix: AssignmentIx) -> GroupIx {
        self.assignments[ix.0].owner
    }

    /// Direct child groups, in flattened order.
    #[must_use]
    pub fn sub_groups(&self, ix: GroupIx) -> &[GroupIx] {
        &self.groups[ix.0].sub_groups
    }

    /// Directly-owned assignments, in flattened order.
    #[must_use]
    pub fn assignments_of(&self, ix: GroupIx) -> &[AssignmentIx] {
        &self.groups[ix.0].assignments
    }

    #[must_use]
    pub const fn group_count(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub const fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// All assignments in flattened (wire) order.
    pub fn assignments(&self) -> impl Iterator<Item = (AssignmentIx, &SchemaAssignment)> {
        self.assignments
            .iter()
            .enumerate()
            .map(|(pos, node)| (AssignmentIx(pos), &node.assignment))
    }

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------

    /// Resolve a group locator.
    #[must_use]
    pub fn find_group(&self, locator: &Locator) -> Option<GroupIx> {
        self.by_group_locator.get(locator).copied()
    }

    /// Resolve an assignment locator.
    #[must_use]
    pub fn find_assignment(&self, locator: &Locator) -> Option<AssignmentIx> {
        self.by_assignment_locator.get(locator).copied()
    }

    /// Resolve an annotation-style group-nest to the concrete group it names:
    /// the leading element (suffix-blind) is the group's own URI, the
    /// remainder its ancestor nest. The empty nest is the root.
    #[must_use]
    pub fn find_group_nest(&self, group_nest: &GroupNest) -> Option<GroupIx> {
        let Some(leading) = group_nest.leading() else {
            return Some(self.root);
        };

        // the leading element may name a specific duplicate copy; all copies
        // share one schema node
        let leading = SuffixedUri::parse(leading);
        let key = nest_key_elements(&leading.base, &group_nest.as_slice()[1..]);

        self.by_nest_key.get(&key).copied()
    }

    /// Assignments owned by the group at `locator`, optionally concatenated
    /// pre-order with every descendant group's assignments.
    #[must_use]
    pub fn find_assignment_list(
        &self,
        locator: &Locator,
        include_descendants: bool,
    ) -> Vec<AssignmentIx> {
        let Some(group) = self.find_group(locator) else {
            return Vec::new();
        };

        let mut list = Vec::new();
        if include_descendants {
            self.collect_assignments(group, &mut list);
        } else {
            list.extend_from_slice(self.assignments_of(group));
        }

        list
    }

    fn collect_assignments(&self, ix: GroupIx, out: &mut Vec<AssignmentIx>) {
        out.extend_from_slice(self.assignments_of(ix));
        for &child in self.sub_groups(ix) {
            self.collect_assignments(child, out);
        }
    }
}

fn nest_key(uri: &str, nest: &GroupNest) -> String {
    nest_key_elements(uri, nest.as_slice())
}

fn nest_key_elements(uri: &str, ancestors: &[String]) -> String {
    let mut key = String::from(uri);
    for element in ancestors {
        key.push(NEST_KEY_SEP);
        key.push_str(element);
    }

    key
}

///
/// FormHierarchy
///
/// Entry-form section tree, rebuilt by the same single-pass locator
/// algorithm over a different flattened list. Not coupled to the schema
/// tree.
///

#[derive(Debug)]
pub struct FormHierarchy {
    sections: Vec<SectionNode>,
    root: SectionIx,
    by_locator: HashMap<Locator, SectionIx>,
}

#[derive(Debug)]
struct SectionNode {
    section: EntryFormSection,
    parent: Option<SectionIx>,
    sub_sections: Vec<SectionIx>,
}

impl FormHierarchy {
    /// Rebuild the section tree from one entry-form snapshot.
    pub fn build(form: &EntryForm) -> Result<Self, HierarchyError> {
        let mut hierarchy = Self {
            sections: Vec::with_capacity(form.sections.len()),
            root: SectionIx(0),
            by_locator: HashMap::new(),
        };

        let mut root = None;

        for section in &form.sections {
            let parent = if section.locator.is_root() {
                if root.is_some() {
                    return Err(HierarchyError::DuplicateLocator {
                        locator: section.locator.clone(),
                    });
                }
                None
            } else {
                let parent_locator = section.locator.parent().ok_or_else(|| {
                    HierarchyError::MissingParent {
                        locator: section.locator.clone(),
                    }
                })?;

                let parent = hierarchy
                    .by_locator
                    .get(&parent_locator)
                    .copied()
                    .ok_or_else(|| HierarchyError::MissingParent {
                        locator: section.locator.clone(),
                    })?;

                Some(parent)
            };

            let ix = SectionIx(hierarchy.sections.len());
            hierarchy.sections.push(SectionNode {
                section: section.clone(),
                parent,
                sub_sections: Vec::new(),
            });

            match parent {
                Some(parent) => hierarchy.sections[parent.0].sub_sections.push(ix),
                None => root = Some(ix),
            }

            if hierarchy
                .by_locator
                .insert(section.locator.clone(), ix)
                .is_some()
            {
                return Err(HierarchyError::DuplicateLocator {
                    locator: section.locator.clone(),
                });
            }
        }

        hierarchy.root = root.ok_or(HierarchyError::MissingRoot)?;

        Ok(hierarchy)
    }

    #[must_use]
    pub const fn root(&self) -> SectionIx {
        self.root
    }

    #[must_use]
    pub fn section(&self, ix: SectionIx) -> &EntryFormSection {
        &self.sections[ix.0].section
    }

    #[must_use]
    pub fn parent_of(&self, ix: SectionIx) -> Option<SectionIx> {
        self.sections[ix.0].parent
    }

    #[must_use]
    pub fn sub_sections(&self, ix: SectionIx) -> &[SectionIx] {
        &self.sections[ix.0].sub_sections
    }

    #[must_use]
    pub fn find_section(&self, locator: &Locator) -> Option<SectionIx> {
        self.by_locator.get(locator).copied()
    }

    #[must_use]
    pub const fn section_count(&self) -> usize {
        self.sections.len()
    }
}

///
/// TESTS
///
