use crate::types::errors::MonetaryError;
use rust_decimal::Decimal;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A currency amount.
///
/// The scale the value was written with is kept, so `200.50` displays as `200.50`
/// and `200` displays as `200`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Monetary(Decimal);

impl Monetary {
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_sub(self, rhs: Monetary) -> Option<Monetary> {
        self.0.checked_sub(rhs.0).map(Monetary)
    }
}

impl From<i64> for Monetary {
    fn from(value: i64) -> Self {
        Monetary(Decimal::from(value))
    }
}

impl From<Decimal> for Monetary {
    fn from(value: Decimal) -> Self {
        Monetary(value)
    }
}

impl Display for Monetary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, formatter)
    }
}

impl FromStr for Monetary {
    type Err = MonetaryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(MonetaryError::InvalidFormat("Value is an empty string".to_string()));
        }

        if !is_plain_decimal(value) {
            return Err(MonetaryError::InvalidFormat(format!("Value '{value}' is not a plain decimal number")));
        }

        Decimal::from_str(value).map(Monetary).map_err(|error| {
            MonetaryError::InvalidFormat(format!("Value '{value}' is not a decimal number: {error}"))
        })
    }
}

/// An optional sign, digits and at most one decimal point, with at least one digit.
fn is_plain_decimal(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());

    !(integer.is_empty() && fraction.is_empty()) && all_digits(integer) && all_digits(fraction)
}
