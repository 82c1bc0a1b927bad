//! Annotation harmonization: after a schema reload, re-attach annotations
//! whose exact location no longer exists to the best-matching current
//! assignment.
//!
//! Template edits routinely rename or move groups without changing what a
//! property means; exact-match-or-drop would destroy curated data on every
//! revision. The relocation heuristic favors the longest agreeing nest
//! prefix, preferring exact element matches over suffix-tolerant partial
//! ones. The two scoring passes and their evaluation order are normative:
//! downstream curator trust depends on predictable relocation, so ties go to
//! the first candidate in schema assignment order and the heuristic is not
//! to be "improved" casually.

use ontoform_primitives::suffix;
use ontoform_schema::node::{Annotation, SchemaDefinition};
use serde::Serialize;

///
/// HarmonizeReport
///
/// Outcome summary for one harmonization run, for UI flagging. Indices are
/// positions in the annotation list, which harmonization never reorders or
/// truncates.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct HarmonizeReport {
    /// Annotations whose group-nest was rewritten to a new location.
    pub relocated: Vec<usize>,
    /// Annotations with no property match anywhere in the schema, left
    /// untouched for the caller to flag.
    pub orphaned: Vec<usize>,
}

impl HarmonizeReport {
    /// Returns `true` when the run changed nothing and flagged nothing.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.relocated.is_empty() && self.orphaned.is_empty()
    }
}

/// Repair `annotations` in place against a freshly-loaded schema.
///
/// Never errors and never drops entries: an annotation either already
/// matches an assignment (untouched), is relocated to the best-scoring
/// assignment sharing its property URI, or has no property match at all and
/// is left as-is (reported as orphaned). Idempotent once converged.
pub fn harmonize(schema: &SchemaDefinition, annotations: &mut [Annotation]) -> HarmonizeReport {
    let mut report = HarmonizeReport::default();

    for (position, annotation) in annotations.iter_mut().enumerate() {
        // already valid: some assignment matches property and baseline nest
        let exact = schema.assignments_for_property(&annotation.prop_uri).any(
            |assignment| assignment.group_nest.compare_baseline(&annotation.group_nest),
        );
        if exact {
            continue;
        }

        let mut best = None;
        let mut best_score = 0.0_f64;

        for assignment in schema.assignments_for_property(&annotation.prop_uri) {
            // a property match always yields some relocation target
            if best.is_none() {
                best = Some(assignment);
                best_score = 0.0;
            }

            let strict = strict_prefix_score(
                assignment.group_nest.as_slice(),
                annotation.group_nest.as_slice(),
            );
            if strict > best_score {
                best = Some(assignment);
                best_score = strict;
            }

            let tolerant = tolerant_prefix_score(
                assignment.group_nest.as_slice(),
                annotation.group_nest.as_slice(),
            );
            if tolerant > best_score {
                best = Some(assignment);
                best_score = tolerant;
            }
        }

        match best {
            Some(assignment) => {
                if annotation.group_nest != assignment.group_nest {
                    annotation.group_nest = assignment.group_nest.clone();
                    report.relocated.push(position);
                }
            }
            None => report.orphaned.push(position),
        }
    }

    report
}

// Leading positions that are exactly equal, stopping at the first mismatch.
fn strict_prefix_score(a: &[String], b: &[String]) -> f64 {
    let mut score = 0.0;
    for (x, y) in a.iter().zip(b) {
        if x != y {
            break;
        }
        score += 1.0;
    }

    score
}

// Same walk, but a position still counts half when the elements agree once
// duplication suffixes are stripped from both — at any position, not just
// the leading one, so that a group which became duplicable (or stopped being
// duplicable) anywhere in the path still attracts its annotations. Stops at
// the first total mismatch.
fn tolerant_prefix_score(a: &[String], b: &[String]) -> f64 {
    let mut score = 0.0;
    for (x, y) in a.iter().zip(b) {
        if x == y {
            score += 1.0;
        } else if suffix::remove_suffix(x) == suffix::remove_suffix(y) {
            score += 0.5;
        } else {
            break;
        }
    }

    score
}

///
/// TESTS
///
