use divvy_domain::model::{ItemId, ParticipantId};
use thiserror::Error;

/// Caller errors surfaced by the split orchestration.
///
/// The core otherwise assumes sanitized numeric input: negative costs and
/// malformed amounts are the data-entry layer's problem and are not
/// re-validated here.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    #[error("item {item} names unknown payer {participant}")]
    UnknownPayer {
        item: ItemId,
        participant: ParticipantId,
    },
    #[error("item {item} names unknown consumer {participant}")]
    UnknownConsumer {
        item: ItemId,
        participant: ParticipantId,
    },
}
