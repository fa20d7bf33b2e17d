use crate::{
    error::SplitError,
    model::{BalanceLine, DetailedSplitReport, SimpleSplitReport, SpentEntry},
    ports::SettlementStrategy,
};
use divvy_domain::{
    model::{AccountActivity, LineItem, Participant, ParticipantId, SpentRecord},
    services::{net_balances, BalanceCalculator, SettlementCalculator, SpendingAggregator},
};
use fxhash::{FxHashMap, FxHashSet};

/// Orchestrates one split computation over an immutable input snapshot.
///
/// Holds no state between calls; each compute method derives balances,
/// runs the settlement strategy, and assembles the mode-specific report in
/// one pass over the snapshot.
#[derive(Clone, Copy)]
pub struct SplitProcessor<'a> {
    settlement: &'a dyn SettlementStrategy,
}

impl<'a> SplitProcessor<'a> {
    pub fn new(settlement: &'a dyn SettlementStrategy) -> Self {
        Self { settlement }
    }

    /// Simple mode: every participant owes an equal share of the group
    /// total.
    ///
    /// Infallible: spending is bound to its participant in the snapshot, so
    /// no reference can dangle. An empty snapshot yields the defined
    /// empty/zero report.
    pub fn compute_simple_split(&self, entries: &[SpentEntry]) -> SimpleSplitReport {
        let records: Vec<SpentRecord> = entries
            .iter()
            .map(|entry| SpentRecord {
                participant: entry.participant.id,
                spent: entry.spent,
            })
            .collect();

        let activities = BalanceCalculator.even_split(&records);
        let transfers = self.settlement.settle(&net_balances(&activities));
        let summary = SpendingAggregator.summarize(&activities);

        let names: FxHashMap<ParticipantId, &str> = entries
            .iter()
            .map(|entry| (entry.participant.id, entry.participant.name.as_str()))
            .collect();

        SimpleSplitReport {
            balances: balance_lines(&activities, &names),
            transfers,
            total_spent: summary.total_spent,
            average_per_person: summary.average_share,
            summary,
        }
    }

    /// Detailed mode: each item's cost is split evenly among its consumers.
    ///
    /// Every item's payer and consumers must be on the roster; the first
    /// dangling reference is reported instead of being silently dropped.
    pub fn compute_detailed_split(
        &self,
        participants: &[Participant],
        items: &[LineItem],
    ) -> Result<DetailedSplitReport, SplitError> {
        let roster: FxHashSet<ParticipantId> =
            participants.iter().map(|participant| participant.id).collect();

        for item in items {
            if !roster.contains(&item.paid_by) {
                return Err(SplitError::UnknownPayer {
                    item: item.id,
                    participant: item.paid_by,
                });
            }
            // Smallest offending id, so the report is deterministic even
            // though the consumer set itself is unordered.
            if let Some(participant) = item
                .consumed_by
                .iter()
                .filter(|consumer| !roster.contains(consumer))
                .min()
            {
                return Err(SplitError::UnknownConsumer {
                    item: item.id,
                    participant,
                });
            }
        }

        let ids: Vec<ParticipantId> = participants.iter().map(|participant| participant.id).collect();
        let activities = BalanceCalculator.itemized_split(&ids, items);
        let transfers = self.settlement.settle(&net_balances(&activities));
        let summary = SpendingAggregator.summarize(&activities);

        let names: FxHashMap<ParticipantId, &str> = participants
            .iter()
            .map(|participant| (participant.id, participant.name.as_str()))
            .collect();

        Ok(DetailedSplitReport {
            balances: balance_lines(&activities, &names),
            transfers,
            total_spent: summary.total_spent,
            item_count: items.len(),
            item_shares: SpendingAggregator.itemize(items),
            summary,
        })
    }
}

impl SplitProcessor<'static> {
    /// Processor wired to the standard greedy settlement pass.
    pub fn greedy() -> Self {
        static GREEDY: SettlementCalculator = SettlementCalculator;
        Self::new(&GREEDY)
    }
}

fn balance_lines(
    activities: &[AccountActivity],
    names: &FxHashMap<ParticipantId, &str>,
) -> Vec<BalanceLine> {
    activities
        .iter()
        .map(|activity| BalanceLine {
            participant: activity.participant,
            name: names
                .get(&activity.participant)
                .copied()
                .unwrap_or_default()
                .to_string(),
            paid: activity.paid,
            owed: activity.owed,
            net: activity.net(),
        })
        .collect()
}
