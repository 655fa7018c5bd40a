//! Credit amounts (budgets, user allocations, item prices).

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Non-negative amount of credit units.
///
/// Deserialization goes through [`Credits::new`], so a negative amount can never
/// be observed inside the domain.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Credits(i64);

impl Credits {
    pub const ZERO: Credits = Credits(0);

    /// Validate a raw amount.
    pub fn new(units: i64) -> DomainResult<Self> {
        if units < 0 {
            return Err(DomainError::validation(format!(
                "credit amount cannot be negative (got {units})"
            )));
        }
        Ok(Self(units))
    }

    /// Build from an amount already known to be non-negative.
    ///
    /// Negative input is clamped to zero.
    pub const fn from_units(units: i64) -> Self {
        if units < 0 { Self(0) } else { Self(units) }
    }

    pub const fn units(self) -> i64 {
        self.0
    }

    /// `None` on overflow.
    pub fn checked_add(self, other: Credits) -> Option<Credits> {
        self.0.checked_add(other.0).map(Credits)
    }

    /// Difference, floored at zero.
    pub fn saturating_sub(self, other: Credits) -> Credits {
        Credits(self.0.saturating_sub(other.0).max(0))
    }

    /// Sum of a sequence of amounts; `None` on overflow.
    pub fn checked_sum<I>(amounts: I) -> Option<Credits>
    where
        I: IntoIterator<Item = Credits>,
    {
        amounts
            .into_iter()
            .try_fold(Credits::ZERO, |acc, c| acc.checked_add(c))
    }
}

impl core::fmt::Display for Credits {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i64> for Credits {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Credits> for i64 {
    fn from(value: Credits) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_amounts_are_rejected() {
        let err = Credits::new(-1).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(Credits::new(0).unwrap(), Credits::ZERO);
    }

    #[test]
    fn checked_sum_detects_overflow() {
        let big = Credits::from_units(i64::MAX);
        assert_eq!(Credits::checked_sum([big, Credits::from_units(1)]), None);
        assert_eq!(
            Credits::checked_sum([Credits::from_units(10), Credits::from_units(5)]),
            Some(Credits::from_units(15))
        );
    }

    #[test]
    fn saturating_sub_never_goes_negative() {
        let remaining = Credits::from_units(10).saturating_sub(Credits::from_units(25));
        assert_eq!(remaining, Credits::ZERO);
    }

    #[test]
    fn deserializing_negative_amount_fails() {
        assert!(serde_json::from_str::<Credits>("-5").is_err());
        assert_eq!(serde_json::from_str::<Credits>("100").unwrap().units(), 100);
    }
}
