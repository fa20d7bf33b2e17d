#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    AccountActivity, ConsumerSet, ItemId, LineItem, Money, Participant, ParticipantBalance,
    ParticipantId, SpentRecord, Transfer,
};
pub use services::{
    net_balances, BalanceCalculator, ContributionLine, ItemShare, SettlementCalculator,
    SpendingAggregator, SpendingSummary,
};
