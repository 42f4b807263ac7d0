//! Input checks shared by the services, plus serde helpers that coerce numeric
//! fields sent either as JSON numbers or as numeric strings (`"12.50"`).

use serde::{Deserialize, Deserializer, de};

use crate::error::{AppError, AppResult};

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

/// Trimmed, non-empty text or `BadRequest` naming the field.
pub fn required_text(field: &str, value: Option<String>) -> AppResult<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!("{field} is required"))),
    }
}

/// Drops blank optional text so it is stored as NULL.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn non_negative_amount(field: &str, value: f64) -> AppResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::BadRequest(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(value)
}

pub fn positive_amount(field: &str, value: f64) -> AppResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::BadRequest(format!(
            "{field} must be greater than 0"
        )));
    }
    Ok(value)
}

pub fn rating(value: f64) -> AppResult<f64> {
    if !value.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&value) {
        return Err(AppError::BadRequest(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}"
        )));
    }
    Ok(value)
}

pub fn one_of(field: &str, value: &str, allowed: &[&str]) -> AppResult<()> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Invalid {field}, expected one of: {}",
            allowed.join(", ")
        )))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberLike {
    Number(f64),
    Text(String),
}

impl NumberLike {
    fn into_f64<E: de::Error>(self) -> Result<f64, E> {
        match self {
            NumberLike::Number(n) => Ok(n),
            NumberLike::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("`{s}` is not a number"))),
        }
    }
}

pub fn de_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberLike::deserialize(deserializer)?.into_f64()
}

pub fn de_opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NumberLike>::deserialize(deserializer)?
        .map(NumberLike::into_f64)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Priced {
        #[serde(deserialize_with = "de_number")]
        price: f64,
        #[serde(default, deserialize_with = "de_opt_number")]
        discount: Option<f64>,
    }

    #[test]
    fn numbers_are_coerced_from_strings() {
        let p: Priced = serde_json::from_str(r#"{"price": " 12.5 ", "discount": "2"}"#).unwrap();
        assert_eq!(p.price, 12.5);
        assert_eq!(p.discount, Some(2.0));

        let p: Priced = serde_json::from_str(r#"{"price": 7}"#).unwrap();
        assert_eq!(p.price, 7.0);
        assert_eq!(p.discount, None);
    }

    #[test]
    fn non_numeric_strings_are_rejected() {
        let err = serde_json::from_str::<Priced>(r#"{"price": "cheap"}"#).unwrap_err();
        assert!(err.to_string().contains("not a number"));
    }

    #[test]
    fn blank_required_text_is_rejected() {
        assert!(required_text("name", Some("   ".into())).is_err());
        assert!(required_text("name", None).is_err());
        assert_eq!(required_text("name", Some(" Biryani ".into())).unwrap(), "Biryani");
    }

    #[test]
    fn rating_bounds() {
        assert!(rating(0.5).is_err());
        assert!(rating(f64::NAN).is_err());
        assert_eq!(rating(4.0).unwrap(), 4.0);
        assert!(rating(5.5).is_err());
    }
}
