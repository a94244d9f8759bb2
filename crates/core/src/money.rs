//! Currency amounts with exact decimal arithmetic.

use core::fmt;
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Number of fractional digits shown for any amount.
pub const DISPLAY_SCALE: u32 = 2;

/// Currency symbol appended to displayed amounts.
pub const CURRENCY_SYMBOL: &str = "€";

/// Non-negative amount of money.
///
/// Arithmetic stays exact and is checked: a result outside the decimal range
/// is an error, never a panic. Rounding happens only when the amount is
/// displayed (half away from zero, two fractional digits).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Result<Self, DomainError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::validation(format!(
                "amount must not be negative (got {amount})"
            )));
        }
        Ok(Self(amount.normalize()))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Amount multiplied by a line quantity.
    pub fn times(&self, quantity: u32) -> Result<Money, DomainError> {
        self.0
            .checked_mul(Decimal::from(quantity))
            .map(|amount| Money(amount.normalize()))
            .ok_or_else(|| DomainError::invariant(format!("{} × {quantity} overflows", self.0)))
    }

    pub fn checked_add(self, rhs: Money) -> Result<Money, DomainError> {
        self.0
            .checked_add(rhs.0)
            .map(|amount| Money(amount.normalize()))
            .ok_or_else(|| DomainError::invariant(format!("{} + {} overflows", self.0, rhs.0)))
    }

    /// Exact sum of `amounts`; fails on the first overflow.
    pub fn sum<I>(amounts: I) -> Result<Money, DomainError>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |acc, amount| acc.checked_add(amount))
    }

    /// Amount rounded for display.
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Amount with exactly two fractional digits and no symbol (`"3.00"`).
    pub fn fixed(&self) -> String {
        format!("{:.2}", self.rounded())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {CURRENCY_SYMBOL}", self.fixed())
    }
}

impl TryFrom<Decimal> for Money {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Money::new(value)
    }
}

/// Parses a plain decimal (`"1.50"`). Display labels such as `"1,50 €"` go
/// through the product price parser instead.
impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim())
            .map_err(|e| DomainError::validation(format!("invalid amount {s:?}: {e}")))?;
        Money::new(amount)
    }
}

// Stored as a JSON number to keep the persisted cart shape `{"unitPrice": 1.5}`.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;
        Money::new(amount).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let err = Money::new(Decimal::new(-1, 2)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn zero_is_a_valid_amount() {
        assert_eq!(Money::new(Decimal::ZERO).unwrap(), Money::ZERO);
    }

    #[test]
    fn equality_ignores_scale() {
        assert_eq!(money("1.5"), money("1.50"));
    }

    #[test]
    fn times_and_sum_stay_exact() {
        let total = Money::sum([
            money("2.50").times(3).unwrap(),
            money("1.20").times(2).unwrap(),
        ])
        .unwrap();
        assert_eq!(total.amount(), Decimal::new(990, 2));
        assert_eq!(total.fixed(), "9.90");
    }

    #[test]
    fn tenths_do_not_drift() {
        let total = Money::sum((0..10).map(|_| money("0.1"))).unwrap();
        assert_eq!(total.fixed(), "1.00");
    }

    #[test]
    fn overflow_is_an_error_not_a_panic() {
        let huge = money("50000000000000000000000000000");
        assert!(matches!(huge.times(2), Err(DomainError::InvariantViolation(_))));
        assert!(huge.checked_add(huge).is_err());
        assert!(Money::sum([huge, huge]).is_err());
        assert_eq!(huge.times(1).unwrap(), huge);
    }

    #[test]
    fn display_rounds_half_away_from_zero() {
        assert_eq!(money("0.125").to_string(), "0.13 €");
        assert_eq!(money("3").to_string(), "3.00 €");
    }

    #[test]
    fn serializes_as_json_number() {
        let json = serde_json::to_string(&money("1.50")).unwrap();
        assert_eq!(json, "1.5");

        let back: Money = serde_json::from_str("2.5").unwrap();
        assert_eq!(back, money("2.50"));
    }

    #[test]
    fn deserializing_a_negative_number_fails() {
        assert!(serde_json::from_str::<Money>("-1.0").is_err());
    }
}
