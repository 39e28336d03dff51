//! `get_meta_spend_today`: mock ad-spend lookup.
//!
//! Stands in for a real ads API. The reported spend is a pure function of
//! the date and account id so callers can pin exact values in tests.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use serde_json::Value;

use marketing_core::{ToolCallResult, ToolDefinition, ToolError, ToolHandler};

use crate::registry::ToolEntry;

pub const NAME: &str = "get_meta_spend_today";

pub const DEFAULT_ACCOUNT_ID: &str = "act_mock_000";
pub const DEFAULT_TIME_ZONE: &str = "America/New_York";
pub const DEFAULT_CURRENCY: &str = "USD";

const MIN_SPEND: u32 = 250;
const MAX_SPEND: u32 = 3250;

/// Mock spend for an account on a date, in whole currency units.
///
/// Rolling hash (`seed * 31 + unit`, wrapping at 2^32) over the UTF-16 units
/// of `"{date}|{account_id}"`, reduced into `MIN_SPEND..=MAX_SPEND`.
pub fn stable_mock_spend(date: &str, account_id: &str) -> u32 {
    let key = format!("{date}|{account_id}");
    let seed = key
        .encode_utf16()
        .fold(0u32, |seed, unit| seed.wrapping_mul(31).wrapping_add(u32::from(unit)));
    MIN_SPEND + seed % (MAX_SPEND - MIN_SPEND + 1)
}

/// Report returned to the caller as pretty-printed JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendReport {
    pub account_id: String,
    pub date: String,
    pub time_zone: String,
    pub currency: String,
    pub spend: f64,
    pub spend_formatted: String,
    pub source: &'static str,
}

pub struct MetaSpend;

#[async_trait]
impl ToolHandler for MetaSpend {
    async fn call(&self, arguments: Value) -> Result<ToolCallResult, ToolError> {
        let report = build_report(&arguments, Utc::now())?;
        let text = serde_json::to_string_pretty(&report)
            .map_err(|e| ToolError::Internal(e.to_string()))?;
        Ok(ToolCallResult::text(text))
    }
}

/// Resolve the arguments against `now` and compute the report.
///
/// # Errors
///
/// Fails with [`ToolError::InvalidArgument`] on an unknown time zone or a
/// malformed `date`.
pub fn build_report(arguments: &Value, now: DateTime<Utc>) -> Result<SpendReport, ToolError> {
    // Hashed verbatim; only a missing or non-string id takes the default.
    let account_id = arguments
        .get("account_id")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_ACCOUNT_ID);
    let time_zone = string_arg(arguments, "time_zone").unwrap_or(DEFAULT_TIME_ZONE);
    let currency = string_arg(arguments, "currency")
        .unwrap_or(DEFAULT_CURRENCY)
        .to_uppercase();

    let tz: Tz = time_zone
        .parse()
        .map_err(|_| ToolError::invalid_argument(format!("unknown time zone: {time_zone}")))?;

    let date = match string_arg(arguments, "date") {
        Some(date) => parse_date(date)?,
        None => now.with_timezone(&tz).date_naive(),
    };
    let date = date.format("%Y-%m-%d").to_string();

    let spend = stable_mock_spend(&date, account_id);
    tracing::debug!(account_id, %date, spend, "computed mock spend");

    Ok(SpendReport {
        account_id: account_id.to_string(),
        date,
        time_zone: tz.name().to_string(),
        currency,
        spend: f64::from(spend),
        spend_formatted: format!("{:.2}", f64::from(spend)),
        source: "mock",
    })
}

/// A non-blank string argument, trimmed.
fn string_arg<'a>(arguments: &'a Value, key: &str) -> Option<&'a str> {
    arguments
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Parse a strict `YYYY-MM-DD` calendar date.
fn parse_date(raw: &str) -> Result<NaiveDate, ToolError> {
    let bytes = raw.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(ToolError::invalid_argument(format!(
            "date must be YYYY-MM-DD, got: {raw}"
        )));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| ToolError::invalid_argument(format!("invalid date {raw}: {e}")))
}

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        NAME,
        "Get today's Meta ads spend for an account (mock data, deterministic per date and account)",
        serde_json::json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "account_id": {
                    "type": "string",
                    "description": "Ad account id",
                    "default": DEFAULT_ACCOUNT_ID
                },
                "time_zone": {
                    "type": "string",
                    "description": "IANA time zone used to compute today's date",
                    "default": DEFAULT_TIME_ZONE
                },
                "currency": {
                    "type": "string",
                    "description": "Currency code",
                    "default": DEFAULT_CURRENCY
                },
                "date": {
                    "type": "string",
                    "pattern": "^\\d{4}-\\d{2}-\\d{2}$",
                    "description": "Date to report (YYYY-MM-DD); defaults to today in time_zone"
                }
            },
            "additionalProperties": false
        }),
    )
    .with_title("Meta Spend Today (mock)")
    .with_execution(serde_json::json!({ "taskSupport": "forbidden" }))
}

pub fn entry() -> ToolEntry {
    ToolEntry::new(definition(), MetaSpend)
}
