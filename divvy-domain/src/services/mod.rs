pub mod balance_calculator;
pub mod settlement_calculator;
pub mod spending_aggregator;

pub use balance_calculator::{net_balances, BalanceCalculator};
pub use settlement_calculator::SettlementCalculator;
pub use spending_aggregator::{ContributionLine, ItemShare, SpendingAggregator, SpendingSummary};
