//! Public API trait for privilege ranking.

use std::cmp::Ordering;

/// Ordering over identities reflecting administrative rank.
///
/// ```ignore
/// let order = ranking.compare_rank("alice", "carol@t1");
/// if !is_authorized(order) {
///     // alice lacks authority over carol@t1
/// }
/// ```
pub trait PrivilegeRankClient: Send + Sync {
    /// Compare `operator` (bare username) with `target` (canonical username).
    ///
    /// `Less` means the operator lacks authority over the target.
    /// `Equal` and `Greater` mean the operator is authorized.
    fn compare_rank(&self, operator: &str, target: &str) -> Ordering;
}

/// Whether a rank comparison result grants authority.
#[must_use]
pub fn is_authorized(order: Ordering) -> bool {
    order != Ordering::Less
}
