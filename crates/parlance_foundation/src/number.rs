//! Exact-when-possible numeric values with an ordinal flag.

use std::fmt;

/// A number extracted from (or destined for) natural language.
///
/// Stores either an exact 64-bit integer or an approximate 64-bit float.
/// Arithmetic prefers the integer representation and only falls back to the
/// decimal one on overflow or genuinely fractional results.
///
/// The ordinal flag ("third" vs "three") is orthogonal to the magnitude and
/// is always propagated explicitly by callers through [`Number::with_ordinal`],
/// never inferred by arithmetic.
#[derive(Clone, Copy, Debug)]
pub struct Number {
    value: Value,
    ordinal: bool,
}

#[derive(Clone, Copy, Debug)]
enum Value {
    Integer(i64),
    Decimal(f64),
}

impl Number {
    /// Creates an exact integer number, not ordinal.
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Self {
            value: Value::Integer(value),
            ordinal: false,
        }
    }

    /// Creates an approximate decimal number, not ordinal.
    #[must_use]
    pub fn decimal(value: f64) -> Self {
        Self {
            value: Value::Decimal(value),
            ordinal: false,
        }
    }

    /// Returns a copy of this number with the given ordinal flag.
    #[must_use]
    pub fn with_ordinal(mut self, ordinal: bool) -> Self {
        self.ordinal = ordinal;
        self
    }

    /// Whether this number holds the exact integer representation.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self.value, Value::Integer(_))
    }

    /// Whether this number holds the approximate decimal representation.
    #[must_use]
    pub fn is_decimal(&self) -> bool {
        matches!(self.value, Value::Decimal(_))
    }

    /// Whether this number was tagged as an ordinal ("third", "42nd").
    #[must_use]
    pub fn is_ordinal(&self) -> bool {
        self.ordinal
    }

    /// The exact integer value, if this number is an integer.
    #[must_use]
    pub fn integer_value(&self) -> Option<i64> {
        match self.value {
            Value::Integer(i) => Some(i),
            Value::Decimal(_) => None,
        }
    }

    /// The decimal value, if this number is a decimal.
    #[must_use]
    pub fn decimal_value(&self) -> Option<f64> {
        match self.value {
            Value::Integer(_) => None,
            Value::Decimal(d) => Some(d),
        }
    }

    /// The magnitude as a float, whichever variant is active.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> f64 {
        match self.value {
            Value::Integer(i) => i as f64,
            Value::Decimal(d) => d,
        }
    }

    /// Whether this number equals the given integer exactly.
    ///
    /// Decimal numbers never compare equal to an integer, matching the
    /// variant-sensitive equality used throughout extraction.
    #[must_use]
    pub fn equals_i64(&self, integer: i64) -> bool {
        matches!(self.value, Value::Integer(i) if i == integer)
    }

    /// Whether the magnitude is exactly zero (in either representation).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self.value {
            Value::Integer(i) => i == 0,
            Value::Decimal(d) => d == 0.0,
        }
    }

    /// Whether the magnitude is strictly less than `threshold`.
    #[must_use]
    pub fn less_than(&self, threshold: f64) -> bool {
        self.as_f64() < threshold
    }

    /// Whether the magnitude is strictly greater than `threshold`.
    #[must_use]
    pub fn more_than(&self, threshold: f64) -> bool {
        self.as_f64() > threshold
    }

    /// Multiplies by an integer, promoting to decimal on overflow.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn multiply_i64(&self, factor: i64) -> Self {
        let value = match self.value {
            Value::Integer(i) => match i.checked_mul(factor) {
                Some(product) => Value::Integer(product),
                None => Value::Decimal(i as f64 * factor as f64),
            },
            Value::Decimal(d) => Value::Decimal(d * factor as f64),
        };
        Self {
            value,
            ordinal: self.ordinal,
        }
    }

    /// Multiplies by a decimal; the result is always decimal.
    #[must_use]
    pub fn multiply_f64(&self, factor: f64) -> Self {
        Self {
            value: Value::Decimal(self.as_f64() * factor),
            ordinal: self.ordinal,
        }
    }

    /// Multiplies by another number, keeping this number's ordinal flag.
    #[must_use]
    pub fn multiply(&self, other: &Number) -> Self {
        match other.value {
            Value::Integer(i) => self.multiply_i64(i),
            Value::Decimal(d) => self.multiply_f64(d),
        }
    }

    /// Adds an integer, promoting to decimal on overflow.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn plus_i64(&self, addend: i64) -> Self {
        let value = match self.value {
            Value::Integer(i) => match i.checked_add(addend) {
                Some(sum) => Value::Integer(sum),
                None => Value::Decimal(i as f64 + addend as f64),
            },
            Value::Decimal(d) => Value::Decimal(d + addend as f64),
        };
        Self {
            value,
            ordinal: self.ordinal,
        }
    }

    /// Adds a decimal; the result is always decimal.
    #[must_use]
    pub fn plus_f64(&self, addend: f64) -> Self {
        Self {
            value: Value::Decimal(self.as_f64() + addend),
            ordinal: self.ordinal,
        }
    }

    /// Adds another number, keeping this number's ordinal flag.
    #[must_use]
    pub fn plus(&self, other: &Number) -> Self {
        match other.value {
            Value::Integer(i) => self.plus_i64(i),
            Value::Decimal(d) => self.plus_f64(d),
        }
    }

    /// Divides by an integer, staying integer only when the division is exact.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn divide_i64(&self, divisor: i64) -> Self {
        let value = match self.value {
            Value::Integer(i) if divisor != 0 && i % divisor == 0 => Value::Integer(i / divisor),
            Value::Integer(i) => Value::Decimal(i as f64 / divisor as f64),
            Value::Decimal(d) => Value::Decimal(d / divisor as f64),
        };
        Self {
            value,
            ordinal: self.ordinal,
        }
    }

    /// Divides by a decimal; the result is always decimal.
    #[must_use]
    pub fn divide_f64(&self, divisor: f64) -> Self {
        Self {
            value: Value::Decimal(self.as_f64() / divisor),
            ordinal: self.ordinal,
        }
    }

    /// Divides by another number, keeping this number's ordinal flag.
    #[must_use]
    pub fn divide(&self, other: &Number) -> Self {
        match other.value {
            Value::Integer(i) => self.divide_i64(i),
            Value::Decimal(d) => self.divide_f64(d),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        if self.ordinal != other.ordinal {
            return false;
        }
        match (self.value, other.value) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Decimal(a), Value::Decimal(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::decimal(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Integer(i) => write!(f, "{i}")?,
            Value::Decimal(d) => write!(f, "{d}")?,
        }
        if self.ordinal {
            write!(f, "th")?;
        }
        Ok(())
    }
}
