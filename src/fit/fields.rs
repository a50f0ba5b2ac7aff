// ABOUTME: Field lookup over one decoded FIT message with primary/secondary name fallback
// ABOUTME: Converts fitparser values into plain numbers, UTC timestamps and enum labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use fitparser::{FitDataRecord, Value as FitValue};

/// Named fields of one FIT data message.
///
/// Devices emit either the standard or the extended-precision field for the
/// same quantity, so numeric lookups take an optional secondary name that is
/// consulted when the primary is absent.
pub struct MessageFields<'a> {
    by_name: HashMap<&'a str, &'a FitValue>,
}

impl<'a> MessageFields<'a> {
    /// Index the fields of a decoded message by name
    #[must_use]
    pub fn new(record: &'a FitDataRecord) -> Self {
        Self {
            by_name: record
                .fields()
                .iter()
                .map(|field| (field.name(), field.value()))
                .collect(),
        }
    }

    /// First numeric value among `primary` and `secondary`
    #[must_use]
    pub fn number(&self, primary: &str, secondary: Option<&str>) -> Option<f64> {
        self.lookup(primary)
            .and_then(fit_value_to_f64)
            .or_else(|| secondary.and_then(|name| self.lookup(name).and_then(fit_value_to_f64)))
    }

    /// Timestamp field converted to UTC
    #[must_use]
    pub fn timestamp(&self, name: &str) -> Option<DateTime<Utc>> {
        match self.lookup(name)? {
            FitValue::Timestamp(ts) => Some(ts.with_timezone(&Utc)),
            _ => None,
        }
    }

    /// Enum or string field as its profile label
    #[must_use]
    pub fn label(&self, name: &str) -> Option<String> {
        match self.lookup(name)? {
            FitValue::String(text) => Some(text.clone()),
            FitValue::Enum(raw) => Some(raw.to_string()),
            _ => None,
        }
    }

    fn lookup(&self, name: &str) -> Option<&'a FitValue> {
        self.by_name.get(name).copied()
    }
}

/// Numeric view of a decoded FIT value; arrays yield their first number
#[must_use]
pub fn fit_value_to_f64(value: &FitValue) -> Option<f64> {
    let number = match value {
        FitValue::Float32(v) => f64::from(*v),
        FitValue::Float64(v) => *v,
        FitValue::SInt8(v) => f64::from(*v),
        FitValue::UInt8(v) | FitValue::UInt8z(v) | FitValue::Byte(v) => f64::from(*v),
        FitValue::SInt16(v) => f64::from(*v),
        FitValue::UInt16(v) | FitValue::UInt16z(v) => f64::from(*v),
        FitValue::SInt32(v) => f64::from(*v),
        FitValue::UInt32(v) | FitValue::UInt32z(v) => f64::from(*v),
        FitValue::SInt64(v) => *v as f64,
        FitValue::UInt64(v) | FitValue::UInt64z(v) => *v as f64,
        FitValue::Array(values) => return values.iter().find_map(fit_value_to_f64),
        _ => return None,
    };
    number.is_finite().then_some(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_variants() {
        assert_eq!(fit_value_to_f64(&FitValue::UInt8(140)), Some(140.0));
        assert_eq!(fit_value_to_f64(&FitValue::SInt16(-12)), Some(-12.0));
        assert_eq!(fit_value_to_f64(&FitValue::Float64(2.5)), Some(2.5));
        assert_eq!(
            fit_value_to_f64(&FitValue::String("running".to_owned())),
            None
        );
    }

    #[test]
    fn test_array_takes_first_number() {
        let value = FitValue::Array(vec![FitValue::String("x".to_owned()), FitValue::UInt16(7)]);
        assert_eq!(fit_value_to_f64(&value), Some(7.0));
    }

    #[test]
    fn test_non_finite_float_is_absent() {
        assert_eq!(fit_value_to_f64(&FitValue::Float32(f32::NAN)), None);
    }
}
