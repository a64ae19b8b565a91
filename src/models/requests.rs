use serde::{Deserialize, Serialize};

use crate::error::PredictError;
use crate::models::domain::{Island, PenguinMeasurements, Sex};

/// Fields of the prediction form, as submitted
///
/// Every field is optional so that a missing one surfaces as a rendered
/// error instead of an extractor rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictForm {
    #[serde(default)]
    pub bill_length: Option<String>,
    #[serde(default)]
    pub bill_depth: Option<String>,
    #[serde(default)]
    pub flipper_length: Option<String>,
    #[serde(default)]
    pub body_mass: Option<String>,
    #[serde(default)]
    pub island: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
}

impl PredictForm {
    /// Build a form from decoded key/value pairs
    ///
    /// The first occurrence of a repeated key wins; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "bill_length" => &mut form.bill_length,
                "bill_depth" => &mut form.bill_depth,
                "flipper_length" => &mut form.flipper_length,
                "body_mass" => &mut form.body_mass,
                "island" => &mut form.island,
                "sex" => &mut form.sex,
                "year" => &mut form.year,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        form
    }

    /// Coerce the form into typed measurements
    ///
    /// Fields are handled one at a time in form order: a field is looked up
    /// and, if numeric, parsed before the next field is looked at.
    pub fn into_measurements(self) -> Result<PenguinMeasurements, PredictError> {
        let bill_length_mm = parse_number("bill_length", required("bill_length", self.bill_length.as_deref())?)?;
        let bill_depth_mm = parse_number("bill_depth", required("bill_depth", self.bill_depth.as_deref())?)?;
        let flipper_length_mm =
            parse_number("flipper_length", required("flipper_length", self.flipper_length.as_deref())?)?;
        let body_mass_g = parse_number("body_mass", required("body_mass", self.body_mass.as_deref())?)?;
        let island = required("island", self.island.as_deref())?;
        let sex = required("sex", self.sex.as_deref())?;
        let year = required("year", self.year.as_deref())?;

        Ok(PenguinMeasurements {
            bill_length_mm,
            bill_depth_mm,
            flipper_length_mm,
            body_mass_g,
            island: Island::parse(island),
            sex: Sex::parse(sex),
            year: year.to_string(),
        })
    }
}

fn required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, PredictError> {
    value.ok_or(PredictError::MissingField(field))
}

/// Parse a finite number, tolerating surrounding whitespace and `_` between
/// digits
pub fn parse_number(field: &'static str, raw: &str) -> Result<f64, PredictError> {
    strip_digit_separators(raw.trim())
        .and_then(|cleaned| cleaned.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .ok_or_else(|| PredictError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
}

/// Remove underscores that sit between two ASCII digits; any other
/// underscore makes the input invalid
fn strip_digit_separators(value: &str) -> Option<String> {
    if !value.contains('_') {
        return Some(value.to_string());
    }
    let bytes = value.as_bytes();
    let mut cleaned = String::with_capacity(value.len());
    for (i, ch) in value.char_indices() {
        if ch == '_' {
            let before = i.checked_sub(1).map(|j| bytes[j]);
            let after = bytes.get(i + 1).copied();
            match (before, after) {
                (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => continue,
                _ => return None,
            }
        }
        cleaned.push(ch);
    }
    Some(cleaned)
}
