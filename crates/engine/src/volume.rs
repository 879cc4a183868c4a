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

/// Fuel quantity represented as **integer milliliters**.
///
/// ```rust
/// use engine::Volume;
///
/// let volume: Volume = "20,5".parse().unwrap();
/// assert_eq!(volume.milliliters(), 20_500);
/// assert_eq!(volume.to_string(), "20.500 L");
/// assert_eq!(Volume::new(1_234_550).format_liters(1), "1,234.6 L");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "Decimal", try_from = "Decimal")]
#[repr(transparent)]
pub struct Volume(i64);

impl Volume {
    pub const ZERO: Volume = Volume(0);

    /// Largest volume a single fuel event may carry (1,000,000 L).
    pub const MAX_ENTRY: Volume = Volume(1_000_000_000);

    #[must_use]
    pub const fn new(milliliters: i64) -> Self {
        Self(milliliters)
    }

    #[must_use]
    pub const fn milliliters(self) -> i64 {
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

    /// Exact value in liters (`20500` -> `20.500`).
    #[must_use]
    pub fn to_liters(self) -> Decimal {
        Decimal::new(self.0, 3)
    }

    /// Liters rounded half-up to `decimals` places (at most three), with the
    /// whole part grouped by thousands: `1,234.5 L`.
    #[must_use]
    pub fn format_liters(self, decimals: u32) -> String {
        let decimals = decimals.min(3);
        let divisor = 10u64.pow(3 - decimals);
        let abs = self.0.unsigned_abs();
        let rounded = abs / divisor + u64::from(abs % divisor * 2 >= divisor && divisor > 1);
        let scale = 10u64.pow(decimals);
        let sign = if self.0 < 0 && rounded > 0 { "-" } else { "" };
        let whole = group_thousands(rounded / scale);
        if decimals == 0 {
            return format!("{sign}{whole} L");
        }
        format!(
            "{sign}{whole}.{:0width$} L",
            rounded % scale,
            width = decimals as usize
        )
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_liters(3))
    }
}

impl From<Volume> for Decimal {
    fn from(value: Volume) -> Self {
        value.to_liters()
    }
}

impl TryFrom<Decimal> for Volume {
    type Error = EngineError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        value.to_string().parse()
    }
}

impl Add for Volume {
    type Output = Volume;

    fn add(self, rhs: Volume) -> Self::Output {
        Volume(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Volume {
    fn add_assign(&mut self, rhs: Volume) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for Volume {
    fn sum<I: Iterator<Item = Volume>>(iter: I) -> Self {
        iter.fold(Volume::ZERO, Add::add)
    }
}

impl FromStr for Volume {
    type Err = EngineError;

    /// Parses liters with up to three decimals, at most [`Volume::MAX_ENTRY`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fixed_point(s, 3, Self::MAX_ENTRY.0, "volume").map(Volume)
    }
}
