//! Fixed-point bulk amounts.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

const SCALE: i64 = 1000;

/// A bulk amount with three decimal places.
///
/// Stored as thousandths so that repeated additions and removals are exact
/// and order-independent. Light items ("L") weigh one tenth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Bulk(i64);

impl Bulk {
    pub const ZERO: Bulk = Bulk(0);
    pub const LIGHT: Bulk = Bulk(SCALE / 10);

    pub const fn from_whole(value: i64) -> Self {
        Self(value * SCALE)
    }

    pub const fn from_milli(value: i64) -> Self {
        Self(value)
    }

    pub const fn milli(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, other: Bulk) -> Option<Bulk> {
        self.0.checked_add(other.0).map(Bulk)
    }

    /// Bulk of `quantity` units weighing `self` each.
    pub fn times(self, quantity: i64) -> Option<Bulk> {
        self.0.checked_mul(quantity).map(Bulk)
    }
}

impl Add for Bulk {
    type Output = Bulk;

    fn add(self, rhs: Bulk) -> Bulk {
        Bulk(self.0 + rhs.0)
    }
}

impl Sub for Bulk {
    type Output = Bulk;

    fn sub(self, rhs: Bulk) -> Bulk {
        Bulk(self.0 - rhs.0)
    }
}

impl Neg for Bulk {
    type Output = Bulk;

    fn neg(self) -> Bulk {
        Bulk(-self.0)
    }
}

impl Sum for Bulk {
    fn sum<I: Iterator<Item = Bulk>>(iter: I) -> Bulk {
        iter.fold(Bulk::ZERO, Add::add)
    }
}

impl fmt::Display for Bulk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = abs / SCALE as u64;
        let frac = abs % SCALE as u64;
        if frac == 0 {
            write!(f, "{sign}{whole}")
        } else {
            let digits = format!("{frac:03}");
            write!(f, "{sign}{whole}.{}", digits.trim_end_matches('0'))
        }
    }
}

impl FromStr for Bulk {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("l") {
            return Ok(Bulk::LIGHT);
        }
        if trimmed == "-" {
            return Ok(Bulk::ZERO);
        }

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty() || frac.len() > 3 {
            return Err(DomainError::parse(format!("Invalid bulk amount: {s}")));
        }

        let whole: i64 = whole
            .parse()
            .map_err(|_| DomainError::parse(format!("Invalid bulk amount: {s}")))?;
        let frac_milli: i64 = if frac.is_empty() {
            0
        } else {
            let padded = format!("{frac:0<3}");
            padded
                .parse()
                .map_err(|_| DomainError::parse(format!("Invalid bulk amount: {s}")))?
        };

        let milli = whole
            .checked_mul(SCALE)
            .and_then(|w| w.checked_add(frac_milli))
            .ok_or_else(|| DomainError::parse(format!("Bulk amount out of range: {s}")))?;
        Ok(Bulk(if negative { -milli } else { milli }))
    }
}

impl TryFrom<String> for Bulk {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Bulk> for String {
    fn from(value: Bulk) -> Self {
        value.to_string()
    }
}
