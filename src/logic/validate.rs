use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Field-level validation failures, keyed by the field's wire name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names of the invalid fields, sorted.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self
            .0
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join("; ")))
            .join(", ");
        write!(f, "invalid fields: {}", summary)
    }
}

impl std::error::Error for FieldErrors {}

/// Require a non-empty string. Whitespace counts as content.
pub fn require_text(errors: &mut FieldErrors, field: &str, value: Option<&str>) -> String {
    match value {
        None => {
            errors.add(field, "Required");
            String::new()
        }
        Some("") => {
            errors.add(field, "Must contain at least 1 character");
            String::new()
        }
        Some(text) => text.to_string(),
    }
}

/// Require a string of at least `min` characters.
pub fn require_min_chars(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<&str>,
    min: usize,
) -> String {
    let text = value.unwrap_or_default();
    if value.is_none() {
        errors.add(field, "Required");
    } else if text.chars().count() < min {
        errors.add(field, format!("Must contain at least {} characters", min));
    }
    text.to_string()
}

/// Coerce a query-string value to a finite number no smaller than `min`.
/// Surrounding whitespace is ignored; exponent notation is accepted.
pub fn require_number(errors: &mut FieldErrors, field: &str, value: Option<&str>, min: f64) -> f64 {
    let raw = value.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        errors.add(field, "Required");
        return 0.0;
    }
    match raw.parse::<f64>() {
        Ok(number) if number.is_finite() => {
            if number < min {
                errors.add(field, format!("Must be greater than or equal to {}", min));
            }
            number
        }
        _ => {
            errors.add(field, "Expected a number");
            0.0
        }
    }
}

/// The value of `field` among raw query pairs. A repeated key is recorded as
/// an error and its first value is still returned, so the remaining checks
/// report alongside it.
pub fn single_value(
    errors: &mut FieldErrors,
    pairs: &[(String, String)],
    field: &str,
) -> Option<String> {
    let values: Vec<&str> = pairs
        .iter()
        .filter(|(key, _)| key == field)
        .map(|(_, value)| value.as_str())
        .collect();
    if values.len() > 1 {
        errors.add(field, format!("Expected a single value, received {}", values.len()));
    }
    values.first().map(|value| value.to_string())
}

/// Raw `GET /api/farmer/buy` parameters, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyQueryParams {
    pub crop: Option<String>,
    pub location: Option<String>,
    pub farm_size: Option<String>,
}

/// Raw `GET /api/farmer/sell` parameters, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SellQueryParams {
    pub crop: Option<String>,
    pub location: Option<String>,
    pub quantity: Option<String>,
}

/// A validated recommendation query. `farm_size` is in acres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyQuery {
    pub crop: String,
    pub location: String,
    pub farm_size: f64,
}

/// A validated market insight query. `quantity` is in quintals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellQuery {
    pub crop: String,
    pub location: String,
    pub quantity: f64,
}

impl BuyQueryParams {
    /// Validate straight from the query string's `(key, value)` pairs.
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<BuyQuery, FieldErrors> {
        let mut errors = FieldErrors::new();
        let params = Self {
            crop: single_value(&mut errors, pairs, "crop"),
            location: single_value(&mut errors, pairs, "location"),
            farm_size: single_value(&mut errors, pairs, "farmSize"),
        };
        params.check(errors)
    }

    pub fn validate(&self) -> Result<BuyQuery, FieldErrors> {
        self.check(FieldErrors::new())
    }

    fn check(&self, mut errors: FieldErrors) -> Result<BuyQuery, FieldErrors> {
        let crop = require_text(&mut errors, "crop", self.crop.as_deref());
        let location = require_text(&mut errors, "location", self.location.as_deref());
        let farm_size = require_number(&mut errors, "farmSize", self.farm_size.as_deref(), 1.0);
        errors.into_result(BuyQuery {
            crop,
            location,
            farm_size,
        })
    }
}

impl SellQueryParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<SellQuery, FieldErrors> {
        let mut errors = FieldErrors::new();
        let params = Self {
            crop: single_value(&mut errors, pairs, "crop"),
            location: single_value(&mut errors, pairs, "location"),
            quantity: single_value(&mut errors, pairs, "quantity"),
        };
        params.check(errors)
    }

    pub fn validate(&self) -> Result<SellQuery, FieldErrors> {
        self.check(FieldErrors::new())
    }

    fn check(&self, mut errors: FieldErrors) -> Result<SellQuery, FieldErrors> {
        let crop = require_text(&mut errors, "crop", self.crop.as_deref());
        let location = require_text(&mut errors, "location", self.location.as_deref());
        let quantity = require_number(&mut errors, "quantity", self.quantity.as_deref(), 1.0);
        errors.into_result(SellQuery {
            crop,
            location,
            quantity,
        })
    }
}
