//! Pure reconciliation of a user's live role assignments against a
//! desired role-id set.
//!
//! The diff runs before any write: the coordinator loads the live
//! assignment rows, partitions them here, then deletes `to_remove` and
//! inserts `to_add` inside one transaction. Comparison is by role id
//! only; assignment ids ride along because revocation deletes by id.

use std::collections::BTreeSet;

/// A live assignment row, reduced to the two ids the diff needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentRef {
    pub assignment_id: i64,
    pub role_id: i64,
}

/// Three-way partition of current assignments vs. the desired role set.
///
/// `retained` and `to_remove` together are exactly the current
/// assignments; `retained` role ids plus `to_add` are exactly the
/// deduplicated desired set. The partitions are disjoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoleDiff {
    /// Assignments left untouched by the reconciliation.
    pub retained: Vec<AssignmentRef>,
    /// Role ids that need a new assignment row, in ascending order.
    pub to_add: Vec<i64>,
    /// Assignments to delete.
    pub to_remove: Vec<AssignmentRef>,
}

impl RoleDiff {
    pub fn retained_assignment_ids(&self) -> Vec<i64> {
        self.retained.iter().map(|a| a.assignment_id).collect()
    }

    /// True when applying the diff would not change anything.
    pub fn is_noop(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Compute the minimal add/remove diff bringing `current` in line with
/// `desired`.
///
/// Duplicates in `desired` collapse: a role requested twice behaves as
/// requested once. An empty `desired` removes every current assignment.
/// Idempotent: recomputing against the reconciled state yields a no-op
/// diff.
pub fn reconcile(current: &[AssignmentRef], desired: &[i64]) -> RoleDiff {
    let desired: BTreeSet<i64> = desired.iter().copied().collect();
    let current_roles: BTreeSet<i64> = current.iter().map(|a| a.role_id).collect();

    let mut retained = Vec::new();
    let mut to_remove = Vec::new();
    for assignment in current {
        if desired.contains(&assignment.role_id) {
            retained.push(*assignment);
        } else {
            to_remove.push(*assignment);
        }
    }

    let to_add = desired
        .into_iter()
        .filter(|role_id| !current_roles.contains(role_id))
        .collect();

    RoleDiff {
        retained,
        to_add,
        to_remove,
    }
}
