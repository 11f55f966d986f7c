use serde::{Deserialize, Serialize};

use crate::models::Customer;

/// Totals shown in the filter bar's statistics block. Computed by the page
/// from the currently visible customers and rendered verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerStats {
    pub total_customers: u32,
    pub total_consults: u32,
    pub total_actions: u32,
    pub total_pending: u32,
    /// Whole percentage of completed tasks.
    pub completion_rate: u32,
}

impl CustomerStats {
    pub fn from_customers<'a, I>(customers: I) -> Self
    where
        I: IntoIterator<Item = &'a Customer>,
    {
        let mut stats = CustomerStats::default();
        let mut completed = 0u32;
        let mut open = 0u32;

        for customer in customers {
            let counters = customer.display_counters();
            stats.total_customers += 1;
            stats.total_consults += counters.consults;
            stats.total_actions += counters.actions;
            stats.total_pending += counters.pending;
            completed += customer.completed_tasks;
            open += customer.pending_tasks;
        }

        let tasks = completed + open;
        if tasks > 0 {
            stats.completion_rate = (completed * 100 + tasks / 2) / tasks;
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn sums_coalesced_counters() {
        let mut a = fixtures::customer("a");
        a.voice_summaries = vec![fixtures::voice("v-1", "2024-01-01")];
        a.total_activities = 4;
        a.pending_tasks = 1;
        a.completed_tasks = 2;
        let mut b = fixtures::customer("b");
        b.real_consult_count = Some(10);
        b.real_action_count = Some(0);
        b.real_pending_count = Some(3);
        b.total_activities = 99;
        b.pending_tasks = 2;
        b.completed_tasks = 1;

        let stats = CustomerStats::from_customers([&a, &b]);

        assert_eq!(
            stats,
            CustomerStats {
                total_customers: 2,
                total_consults: 11,
                total_actions: 4,
                total_pending: 4,
                completion_rate: 50,
            }
        );
    }

    #[test]
    fn completion_rate_rounds_and_handles_no_tasks() {
        assert_eq!(CustomerStats::from_customers(std::iter::empty()).completion_rate, 0);

        let mut customer = fixtures::customer("a");
        customer.completed_tasks = 2;
        customer.pending_tasks = 1;
        assert_eq!(CustomerStats::from_customers([&customer]).completion_rate, 67);
    }
}
