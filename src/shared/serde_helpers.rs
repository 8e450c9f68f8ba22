//! Deserializers for values that arrive as text in multipart forms

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrText {
    Bool(bool),
    Text(String),
}

fn parse_bool<E: de::Error>(raw: BoolOrText) -> Result<bool, E> {
    match raw {
        BoolOrText::Bool(value) => Ok(value),
        BoolOrText::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            other => Err(E::custom(format!("expected a boolean, got '{}'", other))),
        },
    }
}

/// `true`/`false` as JSON booleans or as form text (`"true"`, `"1"`, `"on"`, ...)
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    parse_bool(BoolOrText::deserialize(deserializer)?)
}

pub fn lenient_bool_opt<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<BoolOrText>::deserialize(deserializer)?
        .map(parse_bool)
        .transpose()
}

fn parse_datetime<E: de::Error>(text: &str) -> Result<DateTime<Utc>, E> {
    let text = text.trim();
    if let Ok(value) = DateTime::parse_from_rfc3339(text) {
        return Ok(value.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            E::custom(format!(
                "expected an RFC 3339 timestamp or YYYY-MM-DD, got '{}'",
                text
            ))
        })
}

/// RFC 3339 timestamps, or plain `YYYY-MM-DD` dates read as midnight UTC
pub fn lenient_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    parse_datetime(&String::deserialize(deserializer)?)
}

pub fn lenient_datetime_opt<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|text| parse_datetime(&text))
        .transpose()
}

/// Trimmed and upper-cased text, for codes typed in by hand
pub fn uppercase<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(String::deserialize(deserializer)?.trim().to_uppercase())
}

pub fn uppercase_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(|text| text.trim().to_uppercase()))
}
