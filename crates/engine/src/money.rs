use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
    str::FromStr,
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    EngineError,
    util::{group_thousands, parse_fixed_point},
};

/// Symbol of the single currency the tracker works with (Brazilian real).
pub const CURRENCY_SYMBOL: &str = "R$";

/// Money amount represented as **integer centavos**.
///
/// Use this type for every monetary value (fuel event amounts, totals) to
/// avoid floating-point drift. Ratios such as price per liter are computed
/// as [`Decimal`] from it.
///
/// # Examples
///
/// ```rust
/// use engine::Money;
///
/// let amount = Money::new(1_234_56);
/// assert_eq!(amount.cents(), 123456);
/// assert_eq!(amount.to_string(), "R$ 1,234.56");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator; rejects >
/// 2 decimals):
///
/// ```rust
/// use engine::Money;
///
/// assert_eq!("10".parse::<Money>().unwrap().cents(), 1000);
/// assert_eq!("10,5".parse::<Money>().unwrap().cents(), 1050);
/// assert!("12.345".parse::<Money>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "Decimal", try_from = "Decimal")]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Largest amount a single fuel event may carry (R$ 10,000,000.00).
    ///
    /// Keeps any realistic number of stored events summable in `i64`.
    pub const MAX_ENTRY: Money = Money(1_000_000_000);

    /// Creates a new amount from integer centavos.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in centavos.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Exact decimal value in reais (`1050` -> `10.50`).
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let reais = group_thousands(abs / 100);
        let cents = abs % 100;
        write!(f, "{sign}{CURRENCY_SYMBOL} {reais}.{cents:02}")
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.to_decimal()
    }
}

impl TryFrom<Decimal> for Money {
    type Error = EngineError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        value.to_string().parse()
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl FromStr for Money {
    type Err = EngineError;

    /// Parses a decimal string into centavos.
    ///
    /// Validation rules:
    /// - max 2 fractional digits (rejects `12.345`)
    /// - at most [`Money::MAX_ENTRY`] in magnitude
    /// - rejects empty/invalid strings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fixed_point(s, 2, Self::MAX_ENTRY.0, "amount").map(Money)
    }
}
