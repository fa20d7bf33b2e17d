use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use fxhash::FxHashSet;
use rust_decimal::{Decimal, RoundingStrategy};

/// Identity of a participant. Display names are carried separately and are
/// never authoritative for computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(pub u64);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a line item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exact decimal money amount.
///
/// Internal arithmetic keeps full precision; amounts are rounded to cents
/// only when they leave the core as part of a [`Transfer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// `Money::new(1234, 2)` is 12.34.
    pub fn new(amount: i64, scale: u32) -> Self {
        Self(Decimal::new(amount, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Rounds to two decimal places, half away from zero.
    pub fn round_to_cents(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Even share of this amount among `count` heads, at full precision.
    /// A zero head count yields zero; the division is never reached.
    pub fn divided_among(self, count: usize) -> Self {
        if count == 0 {
            return Self::ZERO;
        }
        Self(self.0 / Decimal::from(count as u64))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|money| money.0).sum())
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        Self(iter.map(|money| money.0).sum())
    }
}

/// Roster entry supplied by the data-entry layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

/// Simple-mode input: one participant's reported total spending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpentRecord {
    pub participant: ParticipantId,
    pub spent: Money,
}

/// The subset of participants who consumed (and thus owe a share of) an
/// item. An absent id means "did not consume".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsumerSet(FxHashSet<ParticipantId>);

impl ConsumerSet {
    pub fn new() -> Self {
        Self(FxHashSet::default())
    }

    pub fn contains(&self, participant: ParticipantId) -> bool {
        self.0.contains(&participant)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ParticipantId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<ParticipantId> for ConsumerSet {
    fn from_iter<I: IntoIterator<Item = ParticipantId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Detailed-mode input: one shared cost, who fronted it, who consumed it.
///
/// An empty consumer set is accepted: the cost still counts toward the
/// payer's paid total but nobody owes a share of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineItem {
    pub id: ItemId,
    pub label: String,
    pub cost: Money,
    pub paid_by: ParticipantId,
    pub consumed_by: ConsumerSet,
}

/// What a participant fronted and what they consumed, per snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountActivity {
    pub participant: ParticipantId,
    pub paid: Money,
    pub owed: Money,
}

impl AccountActivity {
    pub fn idle(participant: ParticipantId) -> Self {
        Self {
            participant,
            paid: Money::ZERO,
            owed: Money::ZERO,
        }
    }

    /// Positive: is owed money. Negative: owes money.
    pub fn net(&self) -> Money {
        self.paid - self.owed
    }
}

/// Net balance of one participant (positive: is owed, negative: owes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParticipantBalance {
    pub id: ParticipantId,
    pub balance: Money,
}

/// A single settlement instruction. Output-only; applying it is the
/// surrounding application's business.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: Money,
}
