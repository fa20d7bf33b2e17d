use divvy_domain::{
    model::{ParticipantBalance, Transfer},
    services::SettlementCalculator,
};

/// Seam for turning net balances into a transfer plan.
///
/// The default implementation is the greedy two-pointer pass. Strict
/// minimum-transfer solving is an open question; if it ever lands it should
/// arrive as another strategy, not as a change to the greedy pass.
pub trait SettlementStrategy: Send + Sync {
    fn settle(&self, balances: &[ParticipantBalance]) -> Vec<Transfer>;
}

impl SettlementStrategy for SettlementCalculator {
    fn settle(&self, balances: &[ParticipantBalance]) -> Vec<Transfer> {
        SettlementCalculator::settle(self, balances)
    }
}
