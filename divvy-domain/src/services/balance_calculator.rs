use crate::model::{AccountActivity, LineItem, Money, ParticipantBalance, ParticipantId, SpentRecord};
use indexmap::IndexMap;

/// Balance extraction service.
///
/// Maps mode-specific raw input onto uniform per-participant activity
/// (paid / owed), in the document order of the input. Both modes feed the
/// same settlement pass afterwards.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Even split: everyone owes an equal share of the group total.
    ///
    /// Each record's `paid` is the reported spending, `owed` is
    /// `total / count`. An empty record set yields an empty vector, so the
    /// share division can never see a zero count.
    pub fn even_split(&self, records: &[SpentRecord]) -> Vec<AccountActivity> {
        if records.is_empty() {
            return Vec::new();
        }

        let total: Money = records.iter().map(|record| record.spent).sum();
        let share = total.divided_among(records.len());

        records
            .iter()
            .map(|record| AccountActivity {
                participant: record.participant,
                paid: record.spent,
                owed: share,
            })
            .collect()
    }

    /// Itemized split: each item's cost lands on its payer's paid total and
    /// is divided evenly among the item's consumers.
    ///
    /// Items with an empty consumer set contribute to `paid` but to nobody's
    /// `owed`: the payer gifts that cost. Ids not present in `participants`
    /// are ignored here; rejecting them is the application layer's call.
    pub fn itemized_split(
        &self,
        participants: &[ParticipantId],
        items: &[LineItem],
    ) -> Vec<AccountActivity> {
        let mut activities: IndexMap<ParticipantId, AccountActivity> = participants
            .iter()
            .map(|&participant| (participant, AccountActivity::idle(participant)))
            .collect();

        for item in items {
            if let Some(activity) = activities.get_mut(&item.paid_by) {
                activity.paid += item.cost;
            }

            let consumer_count = participants
                .iter()
                .filter(|&&participant| item.consumed_by.contains(participant))
                .count();
            if consumer_count == 0 {
                continue;
            }

            let per_share = item.cost.divided_among(consumer_count);
            for participant in participants {
                if !item.consumed_by.contains(*participant) {
                    continue;
                }
                if let Some(activity) = activities.get_mut(participant) {
                    activity.owed += per_share;
                }
            }
        }

        tracing::debug!(
            participant_count = participants.len(),
            item_count = items.len(),
            "itemized balances extracted"
        );

        activities.into_values().collect()
    }
}

/// Projects activity rows down to the net balances the settlement pass
/// consumes, preserving document order.
pub fn net_balances(activities: &[AccountActivity]) -> Vec<ParticipantBalance> {
    activities
        .iter()
        .map(|activity| ParticipantBalance {
            id: activity.participant,
            balance: activity.net(),
        })
        .collect()
}
