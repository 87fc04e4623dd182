//! Job records supplied by the upstream importer.
//!
//! A [`JobRecord`] is one row of the completed-jobs export. Only the money
//! amounts and the time log feed the allocation engine; the remaining fields
//! are carried through to the report untouched.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{EngineError, EngineResult};

const COMPLETED_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// One completed job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    /// The job number.
    pub job_id: String,
    /// Current job status (e.g., "Completed").
    #[serde(default)]
    pub status: String,
    /// Service address.
    #[serde(default)]
    pub address: String,
    /// Client company.
    #[serde(default)]
    pub company: String,
    /// Completion date as exported upstream.
    #[serde(default)]
    pub completed_date: String,
    /// Total charged for the job, tips included.
    #[serde(deserialize_with = "deserialize_amount")]
    pub job_amount: Decimal,
    /// Tip amount.
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub tip_amount: Decimal,
    /// Job duration as exported upstream.
    #[serde(default)]
    pub duration_text: String,
    /// Multi-line `"Employee Name - hours"` log; absent when nobody clocked in.
    #[serde(default)]
    pub time_log: Option<String>,
}

impl JobRecord {
    /// The job amount with tips removed; this is what the engine splits.
    ///
    /// # Examples
    ///
    /// ```
    /// use job_split_engine::models::JobRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let job = JobRecord {
    ///     job_id: "1001".to_string(),
    ///     status: "Completed".to_string(),
    ///     address: String::new(),
    ///     company: String::new(),
    ///     completed_date: String::new(),
    ///     job_amount: Decimal::new(110, 0),
    ///     tip_amount: Decimal::new(10, 0),
    ///     duration_text: String::new(),
    ///     time_log: Some("A - 2.0".to_string()),
    /// };
    /// assert_eq!(job.net_job_amount().unwrap(), Decimal::new(100, 0));
    /// assert!(!job.is_manual_input());
    /// ```
    ///
    /// Fails with [`EngineError::AmountOverflow`] when the difference is out of
    /// range.
    pub fn net_job_amount(&self) -> EngineResult<Decimal> {
        self.job_amount
            .checked_sub(self.tip_amount)
            .ok_or_else(|| EngineError::AmountOverflow {
                operation: "net job amount".to_string(),
            })
    }

    /// The completion date, when the export's date field can be read.
    ///
    /// Accepts `2026-01-15` and `01/15/2026`; anything after the date (such
    /// as a time of day) is ignored.
    pub fn completed_on(&self) -> Option<NaiveDate> {
        let date = self.completed_date.split_whitespace().next()?;
        COMPLETED_DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(date, format).ok())
    }

    /// True when no time was logged, so the job is paid outside the engine.
    pub fn is_manual_input(&self) -> bool {
        self.time_log
            .as_deref()
            .is_none_or(|log| log.trim().is_empty())
    }
}

/// Parses an exported money value such as `"$1,234.50"`.
///
/// Dollar signs, thousands separators and surrounding whitespace are ignored.
/// An empty value is zero.
///
/// # Examples
///
/// ```
/// use job_split_engine::models::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("$1,234.50").unwrap(), Decimal::new(123450, 2));
/// assert_eq!(parse_amount("").unwrap(), Decimal::ZERO);
/// assert!(parse_amount("n/a").is_err());
/// ```
pub fn parse_amount(raw: &str) -> EngineResult<Decimal> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();

    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }

    Decimal::from_str(&cleaned).map_err(|_| EngineError::InvalidAmount {
        value: raw.to_string(),
    })
}

/// Accepts a JSON number or a money string.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(Decimal),
        Text(String),
    }

    match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(value) => Ok(value),
        RawAmount::Text(text) => parse_amount(&text).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_amount_plain() {
        assert_eq!(parse_amount("250.75").unwrap(), dec("250.75"));
    }

    #[test]
    fn test_parse_amount_strips_currency_and_separators() {
        assert_eq!(parse_amount(" $12,345.00 ").unwrap(), dec("12345.00"));
    }

    #[test]
    fn test_parse_amount_rejects_text() {
        match parse_amount("twelve") {
            Err(EngineError::InvalidAmount { value }) => assert_eq!(value, "twelve"),
            other => panic!("Expected InvalidAmount, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_job_with_money_strings() {
        let json = r#"{
            "job_id": "J-100",
            "status": "Completed",
            "address": "12 Main St",
            "company": "Acme",
            "completed_date": "2026-01-15",
            "job_amount": "$1,210.00",
            "tip_amount": "$10.00",
            "duration_text": "5h",
            "time_log": "A - 5.0\nB - 3.0"
        }"#;

        let job: JobRecord = serde_json::from_str(json).unwrap();
        assert_eq!(job.job_amount, dec("1210.00"));
        assert_eq!(job.tip_amount, dec("10.00"));
        assert_eq!(job.net_job_amount().unwrap(), dec("1200.00"));
        assert_eq!(job.completed_on(), NaiveDate::from_ymd_opt(2026, 1, 15));
        assert!(!job.is_manual_input());
    }

    #[test]
    fn test_deserialize_job_with_numbers_and_defaults() {
        let json = r#"{"job_id": "J-101", "job_amount": 300}"#;

        let job: JobRecord = serde_json::from_str(json).unwrap();
        assert_eq!(job.job_amount, dec("300"));
        assert_eq!(job.tip_amount, Decimal::ZERO);
        assert!(job.time_log.is_none());
        assert!(job.is_manual_input());
    }

    #[test]
    fn test_blank_time_log_is_manual_input() {
        let json = r#"{"job_id": "J-102", "job_amount": "", "time_log": "  \r\n "}"#;

        let job: JobRecord = serde_json::from_str(json).unwrap();
        assert_eq!(job.job_amount, Decimal::ZERO);
        assert!(job.is_manual_input());
    }

    #[test]
    fn test_deserialize_rejects_bad_amount() {
        let json = r#"{"job_id": "J-103", "job_amount": "lots"}"#;
        assert!(serde_json::from_str::<JobRecord>(json).is_err());
    }

    #[test]
    fn test_completed_on_formats() {
        let mut job: JobRecord = serde_json::from_str(r#"{"job_id": "J-104", "job_amount": 1}"#).unwrap();
        assert_eq!(job.completed_on(), None);

        job.completed_date = "03/07/2026 4:15 PM".to_string();
        assert_eq!(job.completed_on(), NaiveDate::from_ymd_opt(2026, 3, 7));

        job.completed_date = "next Tuesday".to_string();
        assert_eq!(job.completed_on(), None);
    }

    #[test]
    fn test_net_job_amount_overflow() {
        let json = r#"{"job_id": "J-105", "job_amount": "79228162514264337593543950335", "tip_amount": "-1"}"#;

        let job: JobRecord = serde_json::from_str(json).unwrap();
        assert_eq!(job.net_job_amount().unwrap_err().code(), "AMOUNT_OVERFLOW");
    }
}
