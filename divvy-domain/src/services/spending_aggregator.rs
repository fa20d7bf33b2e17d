use crate::model::{AccountActivity, ItemId, LineItem, Money, ParticipantId};
use rust_decimal::Decimal;

/// Presentation statistics for one snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct SpendingSummary {
    pub total_spent: Money,
    /// `total / participant count`; zero for an empty snapshot.
    pub average_share: Money,
    /// Largest single paid total; zero for an empty snapshot.
    pub highest_contribution: Money,
    pub lines: Vec<ContributionLine>,
}

/// One participant's row in the summary, in document order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContributionLine {
    pub participant: ParticipantId,
    pub paid: Money,
    pub owed: Money,
    pub net: Money,
    /// `paid / total × 100`; zero when the group spent nothing.
    pub contribution_percent: Decimal,
}

/// Per-item cost breakdown: who fronted it and what one consumer's share is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemShare {
    pub item: ItemId,
    pub cost: Money,
    pub paid_by: ParticipantId,
    pub consumer_count: usize,
    /// `cost / consumer_count`; zero when nobody consumed the item.
    pub share_per_consumer: Money,
}

/// Derives summary figures without touching settlement state. Recomputed on
/// every call; inputs are tens of rows, nothing is cached.
pub struct SpendingAggregator;

impl SpendingAggregator {
    pub fn summarize(&self, activities: &[AccountActivity]) -> SpendingSummary {
        let total_spent: Money = activities.iter().map(|activity| activity.paid).sum();
        let average_share = total_spent.divided_among(activities.len());
        let highest_contribution = activities
            .iter()
            .map(|activity| activity.paid)
            .max()
            .unwrap_or(Money::ZERO);

        let lines = activities
            .iter()
            .map(|activity| {
                let contribution_percent = if total_spent.is_zero() {
                    Decimal::ZERO
                } else {
                    activity.paid.as_decimal() / total_spent.as_decimal() * Decimal::ONE_HUNDRED
                };
                ContributionLine {
                    participant: activity.participant,
                    paid: activity.paid,
                    owed: activity.owed,
                    net: activity.net(),
                    contribution_percent,
                }
            })
            .collect();

        SpendingSummary {
            total_spent,
            average_share,
            highest_contribution,
            lines,
        }
    }

    pub fn itemize(&self, items: &[LineItem]) -> Vec<ItemShare> {
        items
            .iter()
            .map(|item| {
                let consumer_count = item.consumed_by.len();
                ItemShare {
                    item: item.id,
                    cost: item.cost,
                    paid_by: item.paid_by,
                    consumer_count,
                    share_per_consumer: item.cost.divided_among(consumer_count),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConsumerSet;
    use rstest::{fixture, rstest};

    #[fixture]
    fn aggregator() -> SpendingAggregator {
        SpendingAggregator
    }

    fn activity(id: u64, paid: i64, owed: i64) -> AccountActivity {
        AccountActivity {
            participant: ParticipantId(id),
            paid: Money::from_i64(paid),
            owed: Money::from_i64(owed),
        }
    }

    #[rstest]
    fn summary_totals_and_extremes(aggregator: SpendingAggregator) {
        let activities = [activity(1, 100, 50), activity(2, 0, 50), activity(3, 20, 20)];

        let summary = aggregator.summarize(&activities);

        assert_eq!(summary.total_spent, Money::from_i64(120));
        assert_eq!(summary.average_share, Money::from_i64(40));
        assert_eq!(summary.highest_contribution, Money::from_i64(100));
        assert_eq!(summary.lines.len(), 3);
        assert_eq!(summary.lines[0].net, Money::from_i64(50));
    }

    #[rstest]
    fn contribution_percentages_sum_to_one_hundred(aggregator: SpendingAggregator) {
        let activities = [activity(1, 33, 0), activity(2, 66, 0), activity(3, 1, 0)];

        let summary = aggregator.summarize(&activities);

        let percent_sum: Decimal = summary
            .lines
            .iter()
            .map(|line| line.contribution_percent)
            .sum();
        assert!((percent_sum - Decimal::ONE_HUNDRED).abs() < Decimal::new(1, 2));
    }

    #[rstest]
    fn zero_total_means_zero_percentages(aggregator: SpendingAggregator) {
        let activities = [activity(1, 0, 0), activity(2, 0, 0)];

        let summary = aggregator.summarize(&activities);

        assert_eq!(summary.total_spent, Money::ZERO);
        assert_eq!(summary.average_share, Money::ZERO);
        assert_eq!(summary.highest_contribution, Money::ZERO);
        for line in &summary.lines {
            assert_eq!(line.contribution_percent, Decimal::ZERO);
        }
    }

    #[rstest]
    fn empty_snapshot_summarizes_to_zeroes(aggregator: SpendingAggregator) {
        let summary = aggregator.summarize(&[]);

        assert_eq!(summary.total_spent, Money::ZERO);
        assert_eq!(summary.average_share, Money::ZERO);
        assert_eq!(summary.highest_contribution, Money::ZERO);
        assert!(summary.lines.is_empty());
    }

    #[rstest]
    fn item_shares_follow_consumer_counts(aggregator: SpendingAggregator) {
        let items = [
            LineItem {
                id: ItemId(1),
                label: "dinner".to_string(),
                cost: Money::from_i64(30),
                paid_by: ParticipantId(1),
                consumed_by: [ParticipantId(1), ParticipantId(2)].into_iter().collect(),
            },
            LineItem {
                id: ItemId(2),
                label: "parking".to_string(),
                cost: Money::from_i64(20),
                paid_by: ParticipantId(1),
                consumed_by: ConsumerSet::new(),
            },
        ];

        let shares = aggregator.itemize(&items);

        assert_eq!(shares[0].consumer_count, 2);
        assert_eq!(shares[0].share_per_consumer, Money::from_i64(15));
        assert_eq!(shares[1].consumer_count, 0);
        assert_eq!(shares[1].share_per_consumer, Money::ZERO);
        assert_eq!(shares[1].paid_by, ParticipantId(1));
    }
}
