//! Hours extraction from job time logs.
//!
//! A time log is free text with one `"Employee Name - hours"` entry per line.
//! The same parser serves two purposes, selected by [`HoursMode`]:
//!
//! - [`HoursMode::Tolerant`] snaps entries within the margin of error of the
//!   longest logged time up to that time. Pay is computed from these hours so
//!   that small clock drift between crew members does not decide a split.
//! - [`HoursMode::Raw`] reports the logged values unchanged, for totals and
//!   averages.
//!
//! Lines that do not parse are skipped. Each skipped or suspicious line is
//! reported as an [`AuditWarning`] instead of failing the job.

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::AuditWarning;

use super::checked_sum;

/// Separator between the employee name and the hours value.
pub const TIME_LOG_SEPARATOR: &str = " - ";

/// Selects how logged hours are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoursMode {
    /// Snap near-maximum entries up to the maximum logged time.
    Tolerant,
    /// Report logged values unchanged.
    Raw,
}

/// Hours per roster employee, in roster order.
#[derive(Debug, Clone, PartialEq)]
pub struct HoursExtraction {
    /// `(name, hours)` for every roster employee.
    pub entries: Vec<(String, Decimal)>,
    /// Largest positive value logged on the job, zero if none.
    pub max_time: Decimal,
    /// Problems found while reading the log.
    pub warnings: Vec<AuditWarning>,
}

impl HoursExtraction {
    /// Hours in roster order.
    pub fn hours(&self) -> Vec<Decimal> {
        self.entries.iter().map(|(_, h)| *h).collect()
    }

    /// Hours for a named roster employee.
    pub fn get(&self, name: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, h)| *h)
    }

    /// Sum of hours across the roster.
    ///
    /// Fails with [`crate::error::EngineError::AmountOverflow`] when the logged
    /// hours are too large to add up.
    pub fn total(&self) -> EngineResult<Decimal> {
        checked_sum(self.entries.iter().map(|(_, h)| *h), "total hours")
    }

    /// Number of roster employees with non-zero hours.
    pub fn worker_count(&self) -> usize {
        self.entries.iter().filter(|(_, h)| !h.is_zero()).count()
    }
}

/// Extracts per-employee hours from a job's time log.
///
/// Roster employees missing from the log get zero hours. An absent or blank
/// log yields zero for everyone.
///
/// # Examples
///
/// ```
/// use job_split_engine::calculation::{HoursMode, extract_hours};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let log = "A - 10.0\nB - 10.2";
///
/// let tolerant = extract_hours(Some(log), &["A", "B"], dec("0.25"), HoursMode::Tolerant);
/// assert_eq!(tolerant.hours(), vec![dec("10.2"), dec("10.2")]);
///
/// let raw = extract_hours(Some(log), &["A", "B"], dec("0.25"), HoursMode::Raw);
/// assert_eq!(raw.hours(), vec![dec("10.0"), dec("10.2")]);
/// ```
pub fn extract_hours(
    time_log: Option<&str>,
    roster_names: &[&str],
    margin_of_error: Decimal,
    mode: HoursMode,
) -> HoursExtraction {
    let Some(log) = time_log.filter(|log| !log.trim().is_empty()) else {
        return HoursExtraction {
            entries: roster_names
                .iter()
                .map(|name| (name.to_string(), Decimal::ZERO))
                .collect(),
            max_time: Decimal::ZERO,
            warnings: Vec::new(),
        };
    };

    let parsed = parse_time_log(log, roster_names);

    let max_time = parsed
        .logged
        .values()
        .copied()
        .filter(|v| *v > Decimal::ZERO)
        .max()
        .unwrap_or(Decimal::ZERO);

    let entries = roster_names
        .iter()
        .map(|name| {
            let logged = parsed.logged.get(*name).copied().unwrap_or(Decimal::ZERO);
            let hours = match mode {
                HoursMode::Raw => logged,
                HoursMode::Tolerant
                    if !logged.is_zero()
                        && max_time > Decimal::ZERO
                        && max_time - logged <= margin_of_error =>
                {
                    max_time
                }
                HoursMode::Tolerant => logged,
            };
            (name.to_string(), hours)
        })
        .collect();

    debug!(
        mode = ?mode,
        recognized = parsed.logged.len(),
        warnings = parsed.warnings.len(),
        max_time = %max_time,
        "Extracted hours from time log"
    );

    HoursExtraction {
        entries,
        max_time,
        warnings: parsed.warnings,
    }
}

struct ParsedTimeLog {
    logged: HashMap<String, Decimal>,
    warnings: Vec<AuditWarning>,
}

fn parse_time_log(log: &str, roster_names: &[&str]) -> ParsedTimeLog {
    let delimiter = if log.contains("\r\n") { "\r\n" } else { "\n" };

    let mut logged: HashMap<String, Decimal> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();
    let mut warnings = Vec::new();

    for (index, line) in log.split(delimiter).enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(TIME_LOG_SEPARATOR).collect();
        let [name, value] = parts.as_slice() else {
            warnings.push(AuditWarning::new(
                "UNRECOGNIZED_LINE",
                format!(
                    "Line {} is not in 'Name - hours' form and was skipped: '{}'",
                    index + 1,
                    line
                ),
                "low",
            ));
            continue;
        };

        let name = name.trim();
        let value = value.trim();

        let hours = match parse_hours_value(value) {
            Some(hours) if hours >= Decimal::ZERO => hours,
            _ => {
                warnings.push(AuditWarning::new(
                    "INVALID_HOURS",
                    format!("'{}' is not a valid hours value for {}; counted as 0", value, name),
                    "medium",
                ));
                Decimal::ZERO
            }
        };

        if let Some(previous) = logged.insert(name.to_string(), hours) {
            warnings.push(AuditWarning::new(
                "DUPLICATE_ENTRY",
                format!(
                    "{} is logged more than once; using the last entry ({}) instead of {}",
                    name, hours, previous
                ),
                "medium",
            ));
        } else {
            first_seen.push(name.to_string());
        }
    }

    for name in first_seen {
        if !roster_names.contains(&name.as_str()) {
            warnings.push(AuditWarning::new(
                "UNKNOWN_EMPLOYEE",
                format!("{} is not on the roster; their time is not paid", name),
                "low",
            ));
        }
    }

    ParsedTimeLog { logged, warnings }
}

/// Reads the leading number of an hours value, ignoring trailing text.
///
/// `"5.5 hrs"` reads as 5.5; a value with no leading number yields `None`.
fn parse_hours_value(text: &str) -> Option<Decimal> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut end = 0;
    let mut digits = 0;
    let mut seen_dot = false;
    for byte in unsigned.bytes() {
        match byte {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if digits == 0 {
        return None;
    }

    let number = unsigned[..end].trim_end_matches('.');
    let number = if number.starts_with('.') {
        format!("0{}", number)
    } else {
        number.to_string()
    };

    let value = Decimal::from_str(&number).ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn margin() -> Decimal {
        dec("0.25")
    }

    fn warning_codes(extraction: &HoursExtraction) -> Vec<&str> {
        extraction.warnings.iter().map(|w| w.code.as_str()).collect()
    }

    /// HX-001: absent and blank logs yield zero hours for every roster name
    #[test]
    fn test_empty_log_yields_zero_for_everyone() {
        for log in [None, Some(""), Some("  \n ")] {
            let result = extract_hours(log, &["A", "B"], margin(), HoursMode::Tolerant);
            assert_eq!(result.hours(), vec![Decimal::ZERO, Decimal::ZERO]);
            assert!(result.warnings.is_empty());
            assert_eq!(result.worker_count(), 0);
        }
    }

    /// HX-002: entries within the margin snap up to the maximum
    #[test]
    fn test_tolerant_mode_snaps_near_maximum() {
        let result = extract_hours(
            Some("A - 10.0\nB - 10.2"),
            &["A", "B"],
            margin(),
            HoursMode::Tolerant,
        );
        assert_eq!(result.get("A"), Some(dec("10.2")));
        assert_eq!(result.get("B"), Some(dec("10.2")));
        assert_eq!(result.max_time, dec("10.2"));
    }

    /// HX-003: raw mode reports logged values unchanged
    #[test]
    fn test_raw_mode_keeps_values() {
        let result = extract_hours(
            Some("A - 10.0\nB - 10.2"),
            &["A", "B"],
            margin(),
            HoursMode::Raw,
        );
        assert_eq!(result.hours(), vec![dec("10.0"), dec("10.2")]);
    }

    /// HX-004: entries outside the margin are kept
    #[test]
    fn test_tolerant_mode_keeps_values_outside_margin() {
        let result = extract_hours(
            Some("A - 5.0\nB - 3.0"),
            &["A", "B"],
            margin(),
            HoursMode::Tolerant,
        );
        assert_eq!(result.hours(), vec![dec("5.0"), dec("3.0")]);
    }

    #[test]
    fn test_margin_boundary_is_inclusive() {
        let result = extract_hours(
            Some("A - 4.00\nB - 3.75"),
            &["A", "B"],
            margin(),
            HoursMode::Tolerant,
        );
        assert_eq!(result.get("B"), Some(dec("4.00")));
    }

    #[test]
    fn test_crlf_line_endings() {
        let result = extract_hours(
            Some("A - 2.5\r\nB - 1.0\r\n"),
            &["A", "B"],
            margin(),
            HoursMode::Raw,
        );
        assert_eq!(result.hours(), vec![dec("2.5"), dec("1.0")]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_roster_order_and_missing_names() {
        let result = extract_hours(
            Some("C - 1.5\nA - 2.0"),
            &["A", "B", "C"],
            Decimal::ZERO,
            HoursMode::Raw,
        );
        assert_eq!(result.hours(), vec![dec("2.0"), Decimal::ZERO, dec("1.5")]);
        assert_eq!(result.total(), Ok(dec("3.5")));
        assert_eq!(result.worker_count(), 2);
    }

    #[test]
    fn test_malformed_lines_are_skipped_with_warning() {
        let result = extract_hours(
            Some("A - 2.0\nB: 3.0\nC - 1 - 2"),
            &["A", "B", "C"],
            margin(),
            HoursMode::Raw,
        );
        assert_eq!(result.hours(), vec![dec("2.0"), Decimal::ZERO, Decimal::ZERO]);
        assert_eq!(
            warning_codes(&result),
            vec!["UNRECOGNIZED_LINE", "UNRECOGNIZED_LINE"]
        );
    }

    #[test]
    fn test_duplicate_name_last_entry_wins() {
        let result = extract_hours(
            Some("A - 2.0\nA - 3.0"),
            &["A"],
            margin(),
            HoursMode::Raw,
        );
        assert_eq!(result.get("A"), Some(dec("3.0")));
        assert_eq!(warning_codes(&result), vec!["DUPLICATE_ENTRY"]);
    }

    #[test]
    fn test_unknown_employee_counts_toward_max_time() {
        let result = extract_hours(
            Some("A - 4.9\nZed - 5.0"),
            &["A"],
            margin(),
            HoursMode::Tolerant,
        );
        assert_eq!(result.get("A"), Some(dec("5.0")));
        assert_eq!(warning_codes(&result), vec!["UNKNOWN_EMPLOYEE"]);
    }

    #[test]
    fn test_invalid_and_negative_hours_count_as_zero() {
        let result = extract_hours(
            Some("A - abc\nB - -3\nC - 4"),
            &["A", "B", "C"],
            margin(),
            HoursMode::Tolerant,
        );
        assert_eq!(result.hours(), vec![Decimal::ZERO, Decimal::ZERO, dec("4")]);
        assert_eq!(warning_codes(&result), vec!["INVALID_HOURS", "INVALID_HOURS"]);
    }

    #[test]
    fn test_names_and_values_are_trimmed() {
        let result = extract_hours(
            Some("   Henry Rios   -   6.25 hrs  "),
            &["Henry Rios"],
            margin(),
            HoursMode::Raw,
        );
        assert_eq!(result.get("Henry Rios"), Some(dec("6.25")));
    }

    #[test]
    fn test_total_overflow_is_an_error() {
        let max = Decimal::MAX.to_string();
        let log = format!("A - {}\nB - {}", max, max);

        let result = extract_hours(Some(&log), &["A", "B"], margin(), HoursMode::Raw);

        assert_eq!(result.hours(), vec![Decimal::MAX, Decimal::MAX]);
        assert_eq!(result.total().unwrap_err().code(), "AMOUNT_OVERFLOW");
    }

    #[test]
    fn test_parse_hours_value_leading_number() {
        assert_eq!(parse_hours_value("5.5 hrs"), Some(dec("5.5")));
        assert_eq!(parse_hours_value(".5"), Some(dec("0.5")));
        assert_eq!(parse_hours_value("7."), Some(dec("7")));
        assert_eq!(parse_hours_value("+2"), Some(dec("2")));
        assert_eq!(parse_hours_value("-1.5"), Some(dec("-1.5")));
        assert_eq!(parse_hours_value("hrs"), None);
        assert_eq!(parse_hours_value("."), None);
        assert_eq!(parse_hours_value(""), None);
    }
}
