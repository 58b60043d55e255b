use serde::{Serialize, Serializer};
use time::macros::format_description;
use time::Date;

use crate::error::IntervalFault;
use crate::ValidationError;

/// Closed range with optional bounds, checked before it is sent.
///
/// An absent bound is open-ended: `[a, null]` means `[a, +inf)` for numbers
/// and "from `a`" for dates. Both bounds absent is never valid.
pub trait BoundedInterval {
    fn validate(&self, field: &'static str) -> Result<(), ValidationError>;
}

/// Numeric interval used by `strike`, `contractSize` and `coupon`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumericInterval {
    low: Option<f64>,
    high: Option<f64>,
}

impl NumericInterval {
    pub const fn new(low: Option<f64>, high: Option<f64>) -> Self {
        Self { low, high }
    }

    pub const fn between(low: f64, high: f64) -> Self {
        Self::new(Some(low), Some(high))
    }

    pub const fn at_least(low: f64) -> Self {
        Self::new(Some(low), None)
    }

    pub const fn at_most(high: f64) -> Self {
        Self::new(None, Some(high))
    }

    pub const fn low(&self) -> Option<f64> {
        self.low
    }

    pub const fn high(&self) -> Option<f64> {
        self.high
    }

    /// Lower bound with the open end mapped to negative infinity.
    pub fn effective_low(&self) -> f64 {
        self.low.unwrap_or(f64::NEG_INFINITY)
    }

    /// Upper bound with the open end mapped to positive infinity.
    pub fn effective_high(&self) -> f64 {
        self.high.unwrap_or(f64::INFINITY)
    }
}

impl BoundedInterval for NumericInterval {
    fn validate(&self, field: &'static str) -> Result<(), ValidationError> {
        if self.low.is_none() && self.high.is_none() {
            return Err(ValidationError::InvalidInterval {
                field,
                fault: IntervalFault::Unbounded,
            });
        }

        // JSON has no encoding for NaN or infinities; they would go out as null.
        for bound in [self.low, self.high].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(ValidationError::InvalidInterval {
                    field,
                    fault: IntervalFault::NonFinite {
                        value: bound.to_string(),
                    },
                });
            }
        }

        if self.effective_low() > self.effective_high() {
            return Err(ValidationError::InvalidInterval {
                field,
                fault: IntervalFault::Reversed {
                    low: self.effective_low().to_string(),
                    high: self.effective_high().to_string(),
                },
            });
        }

        Ok(())
    }
}

impl From<(Option<f64>, Option<f64>)> for NumericInterval {
    fn from((low, high): (Option<f64>, Option<f64>)) -> Self {
        Self::new(low, high)
    }
}

impl From<[Option<f64>; 2]> for NumericInterval {
    fn from([low, high]: [Option<f64>; 2]) -> Self {
        Self::new(low, high)
    }
}

impl Serialize for NumericInterval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.low, self.high).serialize(serializer)
    }
}

/// Calendar-date interval used by `expiration` and `maturity`.
///
/// Bounds are kept as the caller's `YYYY-MM-DD` text and only parsed during
/// validation, so a malformed date is reported with the field it came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateInterval {
    low: Option<String>,
    high: Option<String>,
}

impl DateInterval {
    /// Empty strings are treated as absent bounds.
    pub fn new(low: Option<&str>, high: Option<&str>) -> Self {
        Self {
            low: low.filter(|value| !value.is_empty()).map(str::to_owned),
            high: high.filter(|value| !value.is_empty()).map(str::to_owned),
        }
    }

    pub fn from_dates(low: Option<Date>, high: Option<Date>) -> Self {
        Self {
            low: low.map(|date| date.to_string()),
            high: high.map(|date| date.to_string()),
        }
    }

    pub fn low(&self) -> Option<&str> {
        self.low.as_deref()
    }

    pub fn high(&self) -> Option<&str> {
        self.high.as_deref()
    }
}

/// Exactly `YYYY-MM-DD`: four-digit year, no sign, zero-padded month and day.
fn parse_date(field: &'static str, value: &str) -> Result<Date, ValidationError> {
    let invalid = || ValidationError::InvalidDateFormat {
        field,
        value: value.to_owned(),
    };
    let shaped = value.len() == 10
        && value.bytes().enumerate().all(|(index, byte)| match index {
            4 | 7 => byte == b'-',
            _ => byte.is_ascii_digit(),
        });
    if !shaped {
        return Err(invalid());
    }
    Date::parse(value, format_description!("[year]-[month]-[day]")).map_err(|_| invalid())
}

impl BoundedInterval for DateInterval {
    fn validate(&self, field: &'static str) -> Result<(), ValidationError> {
        let low = self.low.as_deref().map(|value| parse_date(field, value)).transpose()?;
        let high = self.high.as_deref().map(|value| parse_date(field, value)).transpose()?;

        match (low, high) {
            (None, None) => Err(ValidationError::InvalidInterval {
                field,
                fault: IntervalFault::Unbounded,
            }),
            (Some(low), Some(high)) if low > high => Err(ValidationError::InvalidInterval {
                field,
                fault: IntervalFault::Reversed {
                    low: low.to_string(),
                    high: high.to_string(),
                },
            }),
            _ => Ok(()),
        }
    }
}

impl From<(Option<&str>, Option<&str>)> for DateInterval {
    fn from((low, high): (Option<&str>, Option<&str>)) -> Self {
        Self::new(low, high)
    }
}

impl From<[Option<&str>; 2]> for DateInterval {
    fn from([low, high]: [Option<&str>; 2]) -> Self {
        Self::new(low, high)
    }
}

impl From<(Option<Date>, Option<Date>)> for DateInterval {
    fn from((low, high): (Option<Date>, Option<Date>)) -> Self {
        Self::from_dates(low, high)
    }
}

impl Serialize for DateInterval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.low.as_deref(), self.high.as_deref()).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use time::Month;

    use super::*;

    fn fault(result: Result<(), ValidationError>) -> IntervalFault {
        match result.expect_err("must fail") {
            ValidationError::InvalidInterval { fault, .. } => fault,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn numeric_interval_accepts_ordered_and_single_sided_bounds() {
        assert!(NumericInterval::between(2.0, 10.0).validate("strike").is_ok());
        assert!(NumericInterval::between(5.0, 5.0).validate("strike").is_ok());
        assert!(NumericInterval::at_least(-3.5).validate("strike").is_ok());
        assert!(NumericInterval::at_most(1e9).validate("strike").is_ok());
    }

    #[test]
    fn numeric_interval_rejects_unbounded_reversed_and_non_finite() {
        assert_eq!(
            fault(NumericInterval::new(None, None).validate("strike")),
            IntervalFault::Unbounded
        );
        assert!(matches!(
            fault(NumericInterval::between(10.0, 2.0).validate("contractSize")),
            IntervalFault::Reversed { .. }
        ));
        assert!(matches!(
            fault(NumericInterval::at_least(f64::NAN).validate("coupon")),
            IntervalFault::NonFinite { .. }
        ));
    }

    #[test]
    fn numeric_interval_serializes_open_bounds_as_null() {
        let json = serde_json::to_string(&NumericInterval::at_most(2.5)).expect("serialize");
        assert_eq!(json, "[null,2.5]");
    }

    #[test]
    fn date_interval_checks_format_before_ordering() {
        let err = DateInterval::new(Some("2024-13-01"), Some("2020-01-01"))
            .validate("expiration")
            .expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDateFormat { field: "expiration", .. }));

        let err = DateInterval::new(Some("2021-01-01"), Some("01/02/2022"))
            .validate("maturity")
            .expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDateFormat { field: "maturity", .. }));
    }

    #[test]
    fn date_bounds_must_be_unsigned_four_digit_years() {
        for value in ["+2021-01-01", "-2021-01-01", "02021-01-01", "2021-1-01", "2021-01-01 "] {
            let err = DateInterval::new(Some(value), None)
                .validate("expiration")
                .expect_err("only YYYY-MM-DD is accepted");
            assert_eq!(
                err,
                ValidationError::InvalidDateFormat {
                    field: "expiration",
                    value: value.to_owned(),
                },
                "{value:?}"
            );
        }
        assert!(DateInterval::new(Some("0001-01-01"), Some("9999-12-31"))
            .validate("expiration")
            .is_ok());
    }

    #[test]
    fn date_interval_rejects_unbounded_and_reversed() {
        assert_eq!(
            fault(DateInterval::new(Some(""), None).validate("expiration")),
            IntervalFault::Unbounded
        );
        assert!(matches!(
            fault(DateInterval::new(Some("2024-01-02"), Some("2024-01-01")).validate("maturity")),
            IntervalFault::Reversed { .. }
        ));
        assert!(DateInterval::new(None, Some("2022-01-01"))
            .validate("maturity")
            .is_ok());
    }

    #[test]
    fn date_interval_round_trips_typed_dates() {
        let low = Date::from_calendar_date(2023, Month::March, 7).expect("valid date");
        let interval = DateInterval::from_dates(Some(low), None);
        assert_eq!(interval.low(), Some("2023-03-07"));
        assert!(interval.validate("expiration").is_ok());
        assert_eq!(
            serde_json::to_string(&interval).expect("serialize"),
            r#"["2023-03-07",null]"#
        );
    }
}
