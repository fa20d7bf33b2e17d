use crate::model::{Money, ParticipantBalance, Transfer};

/// Balance below which a participant counts as settled. Stands in for
/// currency-cent granularity when balances carry sub-cent precision.
fn settlement_tolerance() -> Money {
    Money::new(1, 2)
}

fn is_settled(balance: Money) -> bool {
    balance.abs() < settlement_tolerance()
}

/// Settlement plan construction service.
///
/// Runs a greedy two-pointer pass over the balances sorted ascending: the
/// deepest debtor pays the largest creditor the most either side can bear,
/// and whichever side reaches tolerance moves on. The result zeroes every
/// balance (within tolerance) in at most n − 1 transfers for n unsettled
/// participants.
///
/// The pass is a heuristic, not a proof-of-optimality minimum-transfer
/// solver; callers that ever need strict minimality should swap the
/// strategy rather than change this pass, since downstream expectations are
/// pinned to its exact output.
pub struct SettlementCalculator;

impl SettlementCalculator {
    /// Builds the transfer list for one balance snapshot.
    ///
    /// Balances are taken in document order; the internal sort is stable, so
    /// equal balances keep that order and the output is deterministic.
    /// Transfer amounts are rounded to cents on emission while the running
    /// balances keep full precision.
    ///
    /// The engine does not validate its input: balances that do not sum to
    /// ~0 are the caller's contract violation. Already-settled snapshots
    /// produce an empty list, not an error.
    pub fn settle(&self, balances: &[ParticipantBalance]) -> Vec<Transfer> {
        let mut transfers = Vec::new();
        if balances.is_empty() {
            return transfers;
        }

        let mut rows: Vec<ParticipantBalance> = balances.to_vec();
        rows.sort_by(|a, b| a.balance.cmp(&b.balance));

        let mut i = 0;
        let mut j = rows.len() - 1;

        while i < j {
            if is_settled(rows[i].balance) {
                i += 1;
                continue;
            }
            if is_settled(rows[j].balance) {
                j -= 1;
                continue;
            }

            let amount = rows[i].balance.abs().min(rows[j].balance);
            if amount <= Money::ZERO {
                // A live debtor without a live creditor: the snapshot broke
                // the zero-sum contract. No progress is possible.
                break;
            }

            transfers.push(Transfer {
                from: rows[i].id,
                to: rows[j].id,
                amount: amount.round_to_cents(),
            });
            rows[i].balance += amount;
            rows[j].balance -= amount;

            if is_settled(rows[i].balance) {
                i += 1;
            }
            if is_settled(rows[j].balance) {
                j -= 1;
            }
        }

        tracing::debug!(
            participant_count = balances.len(),
            transfer_count = transfers.len(),
            "settlement plan constructed"
        );

        transfers
    }
}
