//! Calendar-aware durations built from natural-language unit phrases.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, Months, NaiveDateTime};

use crate::error::Error;
use crate::number::Number;
use crate::util::{remainder_after_rounding, round_to_i64};

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_DAY: i64 = 86_400 * NANOS_PER_SECOND;
const NANOS_PER_WEEK: i64 = 7 * NANOS_PER_DAY;

/// Average length of a month and a year, in seconds (Gregorian averages).
const SECONDS_PER_MONTH: i64 = 2_629_746;
const SECONDS_PER_YEAR: i64 = 31_556_952;

/// Average number of days in a month (~30.436875).
#[allow(clippy::cast_precision_loss)]
const DAYS_PER_MONTH: f64 = SECONDS_PER_MONTH as f64 / 86_400.0;

/// The closed set of calendar units durations are built from.
///
/// Sub-day units have an exact length in nanoseconds. Days and coarser units
/// do not (daylight saving time, variable month lengths, leap years), so
/// they map onto the separate day/month/year buckets of [`Duration`] and only
/// become concrete when applied as an offset to an actual date-time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum TimeUnit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    HalfDays,
    Days,
    Weeks,
    Months,
    Years,
    Decades,
    Centuries,
    Millennia,
}

impl TimeUnit {
    /// The exact nanoseconds in one of this unit, for sub-day units only.
    #[must_use]
    pub fn exact_nanos(self) -> Option<i64> {
        match self {
            Self::Nanos => Some(1),
            Self::Micros => Some(1_000),
            Self::Millis => Some(1_000_000),
            Self::Seconds => Some(NANOS_PER_SECOND),
            Self::Minutes => Some(60 * NANOS_PER_SECOND),
            Self::Hours => Some(3_600 * NANOS_PER_SECOND),
            Self::HalfDays => Some(43_200 * NANOS_PER_SECOND),
            _ => None,
        }
    }

    /// How many months one of this unit spans, for year-or-coarser units.
    #[must_use]
    pub fn months_per_unit(self) -> Option<i64> {
        match self {
            Self::Years => Some(12),
            Self::Decades => Some(120),
            Self::Centuries => Some(1_200),
            Self::Millennia => Some(12_000),
            _ => None,
        }
    }

    /// The configuration-file name of this unit.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Nanos => "NANOS",
            Self::Micros => "MICROS",
            Self::Millis => "MILLIS",
            Self::Seconds => "SECONDS",
            Self::Minutes => "MINUTES",
            Self::Hours => "HOURS",
            Self::HalfDays => "HALF_DAYS",
            Self::Days => "DAYS",
            Self::Weeks => "WEEKS",
            Self::Months => "MONTHS",
            Self::Years => "YEARS",
            Self::Decades => "DECADES",
            Self::Centuries => "CENTURIES",
            Self::Millennia => "MILLENNIA",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NANOS" => Ok(Self::Nanos),
            "MICROS" => Ok(Self::Micros),
            "MILLIS" => Ok(Self::Millis),
            "SECONDS" => Ok(Self::Seconds),
            "MINUTES" => Ok(Self::Minutes),
            "HOURS" => Ok(Self::Hours),
            "HALF_DAYS" => Ok(Self::HalfDays),
            "DAYS" => Ok(Self::Days),
            "WEEKS" => Ok(Self::Weeks),
            "MONTHS" => Ok(Self::Months),
            "YEARS" => Ok(Self::Years),
            "DECADES" => Ok(Self::Decades),
            "CENTURIES" => Ok(Self::Centuries),
            "MILLENNIA" => Ok(Self::Millennia),
            _ => Err(Error::invalid_time_unit(s)),
        }
    }
}

/// A duration kept in four independent signed buckets.
///
/// Nanoseconds, days, months and years are deliberately not collapsed into a
/// single tick count: day, month and year lengths depend on the calendar and
/// timezone, and only become concrete when the duration is applied as an
/// offset to an actual date-time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Duration {
    /// Sub-day amount, exact.
    pub nanos: i64,
    /// Whole days; not nanoseconds because of e.g. daylight saving changes.
    pub days: i64,
    /// Whole months; not days because month lengths vary.
    pub months: i64,
    /// Whole years; not months because of e.g. historical calendar changes.
    pub years: i64,
}

impl Duration {
    /// The zero duration.
    pub const ZERO: Self = Self {
        nanos: 0,
        days: 0,
        months: 0,
        years: 0,
    };

    /// Creates a duration from explicit bucket values.
    #[must_use]
    pub fn of(nanos: i64, days: i64, months: i64, years: i64) -> Self {
        Self {
            nanos,
            days,
            months,
            years,
        }
    }

    /// Returns this duration with `amount` added to the nanosecond bucket.
    #[must_use]
    pub fn plus_nanos(self, amount: i64) -> Self {
        Self {
            nanos: self.nanos + amount,
            ..self
        }
    }

    /// Returns this duration with `amount` added to the day bucket.
    #[must_use]
    pub fn plus_days(self, amount: i64) -> Self {
        Self {
            days: self.days + amount,
            ..self
        }
    }

    /// Returns this duration with `amount` added to the month bucket.
    #[must_use]
    pub fn plus_months(self, amount: i64) -> Self {
        Self {
            months: self.months + amount,
            ..self
        }
    }

    /// Returns this duration with `amount` added to the year bucket.
    #[must_use]
    pub fn plus_years(self, amount: i64) -> Self {
        Self {
            years: self.years + amount,
            ..self
        }
    }

    /// Adds a whole number of the given unit to the appropriate bucket.
    #[must_use]
    pub fn plus_int(self, amount: i64, unit: TimeUnit) -> Self {
        if let Some(nanos) = unit.exact_nanos() {
            return self.plus_nanos(amount.saturating_mul(nanos));
        }
        match unit {
            TimeUnit::Days => self.plus_days(amount),
            TimeUnit::Weeks => self.plus_days(amount.saturating_mul(7)),
            TimeUnit::Months => self.plus_months(amount),
            TimeUnit::Years => self.plus_years(amount),
            TimeUnit::Decades => self.plus_years(amount.saturating_mul(10)),
            TimeUnit::Centuries => self.plus_years(amount.saturating_mul(100)),
            TimeUnit::Millennia => self.plus_years(amount.saturating_mul(1_000)),
            // exact_nanos covered the sub-day units above
            _ => self,
        }
    }

    /// Adds a fractional number of the given unit.
    ///
    /// The whole part lands in the unit's own bucket; the fractional
    /// remainder is converted down into the next finer bucket using the
    /// unit's average length, never silently truncated.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn plus_f64(self, amount: f64, unit: TimeUnit) -> Self {
        let result = self.plus_int(round_to_i64(amount), unit);
        let remainder = remainder_after_rounding(amount);
        if unit.exact_nanos().is_some() {
            return result;
        }
        match unit {
            TimeUnit::Days => result.plus_nanos(round_to_i64(remainder * NANOS_PER_DAY as f64)),
            TimeUnit::Weeks => result.plus_nanos(round_to_i64(remainder * NANOS_PER_WEEK as f64)),
            TimeUnit::Months => result.plus_f64(remainder * DAYS_PER_MONTH, TimeUnit::Days),
            // years and coarser units are an exact number of average months
            _ => match unit.months_per_unit() {
                Some(months) => result.plus_f64(remainder * months as f64, TimeUnit::Months),
                None => result,
            },
        }
    }

    /// Adds a [`Number`] of the given unit, whichever variant it holds.
    #[must_use]
    pub fn plus_number(self, number: &Number, unit: TimeUnit) -> Self {
        match number.integer_value() {
            Some(i) => self.plus_int(i, unit),
            None => self.plus_f64(number.as_f64(), unit),
        }
    }

    /// Pairwise-additive sum of the two durations' buckets.
    #[must_use]
    pub fn plus(self, other: &Duration) -> Self {
        Self {
            nanos: self.nanos + other.nanos,
            days: self.days + other.days,
            months: self.months + other.months,
            years: self.years + other.years,
        }
    }

    /// Multiplies every bucket by a whole number.
    #[must_use]
    pub fn multiply_i64(self, factor: i64) -> Self {
        Self {
            nanos: self.nanos.saturating_mul(factor),
            days: self.days.saturating_mul(factor),
            months: self.months.saturating_mul(factor),
            years: self.years.saturating_mul(factor),
        }
    }

    /// Multiplies by a decimal, pushing fractional bucket remainders down
    /// into finer buckets.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn multiply_f64(self, factor: f64) -> Self {
        Self::of(round_to_i64(self.nanos as f64 * factor), 0, 0, 0)
            .plus_f64(self.days as f64 * factor, TimeUnit::Days)
            .plus_f64(self.months as f64 * factor, TimeUnit::Months)
            .plus_f64(self.years as f64 * factor, TimeUnit::Years)
    }

    /// Multiplies by a [`Number`], whichever variant it holds.
    #[must_use]
    pub fn multiply_number(self, number: &Number) -> Self {
        match number.integer_value() {
            Some(i) => self.multiply_i64(i),
            None => self.multiply_f64(number.as_f64()),
        }
    }

    /// Whether every bucket is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Applies this duration as an offset to a date-time, bucket by bucket.
    ///
    /// Returns `None` when the resulting date-time is not representable.
    #[must_use]
    pub fn apply_as_offset(&self, origin: NaiveDateTime) -> Option<NaiveDateTime> {
        let result = origin.checked_add_signed(chrono::Duration::nanoseconds(self.nanos))?;
        let result = if self.days >= 0 {
            result.checked_add_days(Days::new(self.days.unsigned_abs()))?
        } else {
            result.checked_sub_days(Days::new(self.days.unsigned_abs()))?
        };
        let total_months = self.months.checked_add(self.years.checked_mul(12)?)?;
        if total_months >= 0 {
            result.checked_add_months(Months::new(u32::try_from(total_months).ok()?))
        } else {
            result.checked_sub_months(Months::new(u32::try_from(-total_months).ok()?))
        }
    }

    /// Flattens to a [`chrono::Duration`] using average month/year lengths.
    ///
    /// Returns `None` on overflow.
    #[must_use]
    pub fn to_chrono(&self) -> Option<chrono::Duration> {
        chrono::Duration::nanoseconds(self.nanos)
            .checked_add(&chrono::Duration::try_days(self.days)?)?
            .checked_add(&chrono::Duration::try_seconds(
                self.months.checked_mul(SECONDS_PER_MONTH)?,
            )?)?
            .checked_add(&chrono::Duration::try_seconds(
                self.years.checked_mul(SECONDS_PER_YEAR)?,
            )?)
    }
}
