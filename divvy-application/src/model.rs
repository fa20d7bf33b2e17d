use divvy_domain::{
    model::{Money, Participant, ParticipantId, Transfer},
    services::{ItemShare, SpendingSummary},
};

/// Simple-mode input row: one roster entry and what they reported spending.
#[derive(Clone, Debug, PartialEq)]
pub struct SpentEntry {
    pub participant: Participant,
    pub spent: Money,
}

/// One participant's settled position, in roster document order.
#[derive(Clone, Debug, PartialEq)]
pub struct BalanceLine {
    pub participant: ParticipantId,
    pub name: String,
    pub paid: Money,
    pub owed: Money,
    /// Positive: gets money back. Negative: owes. Zero: even.
    pub net: Money,
}

/// Everything the presentation layer needs after a simple split.
#[derive(Clone, Debug, PartialEq)]
pub struct SimpleSplitReport {
    pub balances: Vec<BalanceLine>,
    pub transfers: Vec<Transfer>,
    pub total_spent: Money,
    pub average_per_person: Money,
    pub summary: SpendingSummary,
}

/// Everything the presentation layer needs after a detailed split.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailedSplitReport {
    pub balances: Vec<BalanceLine>,
    pub transfers: Vec<Transfer>,
    pub total_spent: Money,
    pub item_count: usize,
    pub item_shares: Vec<ItemShare>,
    pub summary: SpendingSummary,
}
