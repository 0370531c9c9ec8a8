//! Day count conventions for year fraction calculations.
//!
//! Pricing inputs arrive as whole days to maturity; every engine works in
//! year fractions. `DayCount` owns that conversion.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::DayCount;
//!
//! // 30 calendar days under ACT/365F
//! let t = DayCount::Act365Fixed.year_fraction(30);
//! assert!((t - 30.0 / 365.0).abs() < 1e-12);
//! ```

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Day count convention.
///
/// # Variants
/// - `Act365Fixed`: actual days / 365 (the default for equity options)
/// - `Act360`: actual days / 360 (money-market style)
/// - `Act252`: actual days / 252 (trading-day convention)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DayCount {
    /// Actual days divided by a fixed 365-day year.
    #[default]
    Act365Fixed,
    /// Actual days divided by a 360-day year.
    Act360,
    /// Actual days divided by a 252-day trading year.
    Act252,
}

impl DayCount {
    /// Conventional name of the day count.
    pub fn name(&self) -> &'static str {
        match self {
            DayCount::Act365Fixed => "ACT/365F",
            DayCount::Act360 => "ACT/360",
            DayCount::Act252 => "ACT/252",
        }
    }

    /// Denominator of the convention in days.
    #[inline]
    pub fn denominator(&self) -> f64 {
        match self {
            DayCount::Act365Fixed => 365.0,
            DayCount::Act360 => 360.0,
            DayCount::Act252 => 252.0,
        }
    }

    /// Year fraction for a whole number of days to maturity.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::DayCount;
    ///
    /// assert_eq!(DayCount::Act365Fixed.year_fraction(365), 1.0);
    /// assert_eq!(DayCount::Act360.year_fraction(180), 0.5);
    /// ```
    #[inline]
    pub fn year_fraction(&self, days: u32) -> f64 {
        f64::from(days) / self.denominator()
    }

    /// Year fraction between two dates.
    ///
    /// Returns a negative value when `end` precedes `start`, mirroring
    /// signed date arithmetic.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use pricer_core::types::DayCount;
    ///
    /// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
    /// let yf = DayCount::Act365Fixed.year_fraction_dates(start, end);
    /// assert!((yf - 0.4986).abs() < 1e-3);
    /// ```
    pub fn year_fraction_dates(&self, start: NaiveDate, end: NaiveDate) -> f64 {
        let days = (end - start).num_days() as f64;
        days / self.denominator()
    }
}

impl FromStr for DayCount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_uppercase();
        match normalised.as_str() {
            "ACT365" | "ACT365F" | "A365" => Ok(DayCount::Act365Fixed),
            "ACT360" | "A360" => Ok(DayCount::Act360),
            "ACT252" | "A252" => Ok(DayCount::Act252),
            _ => Err(format!("Unknown day count convention: {}", s)),
        }
    }
}

impl fmt::Display for DayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::DayCount;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DayCount {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DayCount {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            DayCount::from_str(&s).map_err(de::Error::custom)
        }
    }
}
