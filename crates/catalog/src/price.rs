use core::str::FromStr;
use serde::{Deserialize, Serialize};

use truckfest_core::{DomainError, ValueObject};

/// Unit price in the smallest currency unit (cents).
///
/// Written and read as a dollar string such as `"$3.75"`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price {
    cents: u64,
}

impl Price {
    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    /// Value of `quantity` units at this price, in cents. Saturates at `u64::MAX`.
    pub fn total_for(&self, quantity: u64) -> u64 {
        self.cents.saturating_mul(quantity)
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl FromStr for Price {
    type Err = DomainError;

    /// Accepts `"$3.75"`, `"3.75"`, `"$3.5"` and `"$3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("price cannot be empty"));
        }

        let amount = trimmed.strip_prefix('$').unwrap_or(trimmed);
        let (dollars, fraction) = match amount.split_once('.') {
            Some((dollars, fraction)) => (dollars, Some(fraction)),
            None => (amount, None),
        };

        if dollars.is_empty() || !dollars.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(format!("malformed price: {s:?}")));
        }
        let dollars: u64 = dollars
            .parse()
            .map_err(|_| DomainError::validation(format!("price out of range: {s:?}")))?;

        let cents = match fraction {
            None => 0,
            Some(f) if (1..=2).contains(&f.len()) && f.bytes().all(|b| b.is_ascii_digit()) => {
                // "5" means 50 cents, not 5.
                let value: u64 = f
                    .parse()
                    .map_err(|_| DomainError::validation(format!("malformed price: {s:?}")))?;
                if f.len() == 1 { value * 10 } else { value }
            }
            Some(_) => return Err(DomainError::validation(format!("malformed price: {s:?}"))),
        };

        dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .map(Price::from_cents)
            .ok_or_else(|| DomainError::validation(format!("price out of range: {s:?}")))
    }
}

impl TryFrom<String> for Price {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Price> for String {
    fn from(value: Price) -> Self {
        value.to_string()
    }
}
