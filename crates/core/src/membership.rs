//! Membership status, payment means and certificate validity.

use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::types::Date;

// ---------------------------------------------------------------------------
// Certificate validity
// ---------------------------------------------------------------------------

/// Weeks a medical certificate stays valid after its issue date.
pub const CERTIFICATE_VALIDITY_WEEKS: i64 = 52;

/// Extra weeks tolerated on top of [`CERTIFICATE_VALIDITY_WEEKS`].
pub const CERTIFICATE_GRACE_WEEKS: i64 = 6;

/// Last day (exclusive) on which a certificate issued on `issued` is accepted.
pub fn certificate_valid_until(issued: Date) -> Date {
    issued + Duration::weeks(CERTIFICATE_VALIDITY_WEEKS + CERTIFICATE_GRACE_WEEKS)
}

/// Whether a certificate issued on `issued` still covers a membership
/// expiring on `expiration`.
pub fn certificate_covers(issued: Date, expiration: Date) -> bool {
    certificate_valid_until(issued) > expiration
}

// ---------------------------------------------------------------------------
// Member status
// ---------------------------------------------------------------------------

/// A user is a member when their latest membership has not expired yet.
///
/// `latest_expiration` is the greatest expiration date across the user's
/// membership history, `None` when they never held one.
pub fn is_member(latest_expiration: Option<Date>, today: Date) -> bool {
    latest_expiration.is_some_and(|expiration| expiration >= today)
}

// ---------------------------------------------------------------------------
// Payment means
// ---------------------------------------------------------------------------

pub const PAYMENT_CASH: &str = "cash";
pub const PAYMENT_CHEQUE: &str = "cheque";

/// How a participant or a member paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMean {
    Cash,
    Cheque,
}

impl PaymentMean {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMean::Cash => PAYMENT_CASH,
            PaymentMean::Cheque => PAYMENT_CHEQUE,
        }
    }

    /// Cheques must name the issuing bank.
    pub fn requires_bank(self) -> bool {
        matches!(self, PaymentMean::Cheque)
    }
}

impl fmt::Display for PaymentMean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
