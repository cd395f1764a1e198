//! Client implementation for the static privilege rank plugin.

use std::cmp::Ordering;

use privilege_rank_sdk::PrivilegeRankClient;

use super::service::Service;

impl PrivilegeRankClient for Service {
    fn compare_rank(&self, operator: &str, target: &str) -> Ordering {
        let order = self.compare(operator, target);
        tracing::trace!(operator, user = target, ?order, "Compared privilege rank");
        order
    }
}
