//! Fee / subvention classification for financial operations.

use serde::Serialize;

use crate::types::Cents;

/// Direction of a financial operation, derived from the sign of its amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Money paid out by the association (negative amount).
    Fee,
    /// Money received by the association (positive amount).
    Subvention,
    /// Zero amount.
    Neutral,
}

pub fn classify(amount: Cents) -> OperationKind {
    match amount {
        a if a < 0 => OperationKind::Fee,
        a if a > 0 => OperationKind::Subvention,
        _ => OperationKind::Neutral,
    }
}

/// Fees, subventions and net result of a set of operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Balance {
    pub fees: Cents,
    pub subventions: Cents,
    pub net: Cents,
}

/// Sum a set of signed amounts into a [`Balance`].
///
/// `fees` is reported as a negative number, like the amounts it sums. Sums
/// saturate at the bounds of [`Cents`].
pub fn balance<I>(amounts: I) -> Balance
where
    I: IntoIterator<Item = Cents>,
{
    amounts.into_iter().fold(Balance::default(), |mut acc, amount| {
        match classify(amount) {
            OperationKind::Fee => acc.fees = acc.fees.saturating_add(amount),
            OperationKind::Subvention => acc.subventions = acc.subventions.saturating_add(amount),
            OperationKind::Neutral => {}
        }
        acc.net = acc.net.saturating_add(amount);
        acc
    })
}
