use crate::dates::{parse_day, Timestamp};
use crate::errors::{LineIssue, LineWarning, PipelineError};
use crate::models::Entry;
use tracing::warn;

/// Result of a successful parse: entries in timestamp order plus skipped-line diagnostics.
#[derive(Debug, Default)]
pub struct ParsedLog {
    pub entries: Vec<Entry>,
    pub warnings: Vec<LineWarning>,
}

/// Parses `DATE;TIME;PRIMARY;SECONDARY[;...]` lines.
///
/// Malformed lines are skipped and reported as warnings. Fails only when the
/// input is blank or no line survives validation.
pub fn parse(raw: &str) -> Result<ParsedLog, PipelineError> {
    if raw.trim().is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let mut parsed = ParsedLog::default();
    for (index, line) in raw.lines().enumerate() {
        let line_number = index + 1;
        match parse_line(line) {
            Ok(Some(entry)) => parsed.entries.push(entry),
            Ok(None) => {}
            Err(issue) => {
                let warning = LineWarning {
                    line: line_number,
                    issue,
                };
                warn!("{warning}");
                parsed.warnings.push(warning);
            }
        }
    }

    if parsed.entries.is_empty() {
        return Err(PipelineError::NoValidData);
    }

    parsed.entries.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    Ok(parsed)
}

fn parse_line(line: &str) -> Result<Option<Entry>, LineIssue> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(';').collect();
    if fields.len() < 4 {
        return Err(LineIssue::InvalidFormat);
    }

    let date_text = fields[0].trim();
    let date = parse_day(date_text).ok_or_else(|| LineIssue::InvalidDate(date_text.to_string()))?;
    let time_text = fields[1].trim();

    Ok(Some(Entry {
        date_text: date_text.to_string(),
        date,
        time_text: time_text.to_string(),
        timestamp: Timestamp::new(date, time_text),
        primary_amount: parse_amount(fields[2]),
        secondary_amount: parse_amount(fields[3]),
    }))
}

/// Reads the leading integer of a field; anything unreadable or negative counts as 0.
pub fn parse_amount(field: &str) -> u64 {
    let field = field.trim_start();
    let digits = field.strip_prefix('+').unwrap_or(field);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parses_valid_lines_in_time_order() {
        let raw = "02.01.2024;09:00;500;0\n01.01.2024;12:00;300;100\n01.01.2024;08:00;200;0";
        let parsed = parse(raw).unwrap();
        assert!(parsed.warnings.is_empty());
        let times: Vec<_> = parsed
            .entries
            .iter()
            .map(|e| (e.date_text.as_str(), e.time_text.as_str()))
            .collect();
        assert_eq!(
            times,
            vec![
                ("01.01.2024", "08:00"),
                ("01.01.2024", "12:00"),
                ("02.01.2024", "09:00"),
            ]
        );
        assert_eq!(parsed.entries[1].total_amount(), 400);
        assert_eq!(parsed.entries[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn skips_bad_date_with_warning() {
        let raw = "bad-date;08:00;100;0\n01.01.2024;08:00;200;50";
        let parsed = parse(raw).unwrap();
        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(
            parsed.warnings,
            vec![LineWarning {
                line: 1,
                issue: LineIssue::InvalidDate("bad-date".to_string()),
            }]
        );
    }

    #[test]
    fn skips_short_lines_with_line_number() {
        let raw = "01.01.2024;08:00;200;0\n\n01.01.2024;09:00;300\n";
        let parsed = parse(raw).unwrap();
        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(
            parsed.warnings,
            vec![LineWarning {
                line: 3,
                issue: LineIssue::InvalidFormat,
            }]
        );
    }

    #[test]
    fn leading_blank_lines_count_toward_line_numbers() {
        let raw = "\n\n   \nbad-date;08:00;100;0\n01.01.2024;08:00;200;0";
        let parsed = parse(raw).unwrap();
        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(parsed.warnings.len(), 1);
        assert_eq!(parsed.warnings[0].line, 4);
        assert_eq!(
            parsed.warnings[0].to_string(),
            "line 4: invalid date format: bad-date"
        );
    }

    #[test]
    fn blank_input_is_empty_error() {
        assert!(matches!(parse(""), Err(PipelineError::EmptyInput)));
        assert!(matches!(parse("  \n\t\r\n "), Err(PipelineError::EmptyInput)));
    }

    #[test]
    fn only_malformed_lines_is_no_valid_data() {
        let raw = "bad-date;08:00;100;0\nnot a record\n";
        assert!(matches!(parse(raw), Err(PipelineError::NoValidData)));
    }

    #[test]
    fn unparseable_amounts_default_to_zero() {
        let raw = "01.01.2024;08:00;abc;;extra\n01.01.2024;09:00; 250ml;+40";
        let parsed = parse(raw).unwrap();
        assert!(parsed.warnings.is_empty());
        assert_eq!(parsed.entries[0].primary_amount, 0);
        assert_eq!(parsed.entries[0].secondary_amount, 0);
        assert_eq!(parsed.entries[1].primary_amount, 250);
        assert_eq!(parsed.entries[1].secondary_amount, 40);
    }

    #[test]
    fn negative_amounts_clamp_to_zero() {
        assert_eq!(parse_amount("-5"), 0);
        assert_eq!(parse_amount("12.7"), 12);
        assert_eq!(parse_amount(""), 0);
    }

    #[test]
    fn time_token_is_not_validated() {
        let raw = "01.01.2024;whenever;100;0\r\n01.01.2024;07:00;50;0\r\n";
        let parsed = parse(raw).unwrap();
        assert_eq!(parsed.entries.len(), 2);
        assert_eq!(parsed.entries[0].time_text, "07:00");
        assert_eq!(parsed.entries[1].time_text, "whenever");
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let raw = "01.01.2024;08:00;1;0\n01.01.2024;08:00;2;0\n01.01.2024;08:00;3;0";
        let parsed = parse(raw).unwrap();
        let amounts: Vec<_> = parsed.entries.iter().map(|e| e.primary_amount).collect();
        assert_eq!(amounts, vec![1, 2, 3]);
    }

    #[test]
    fn impossible_calendar_day_is_skipped() {
        let raw = "31.02.2024;08:00;100;0\n01.03.2024;08:00;100;0";
        let parsed = parse(raw).unwrap();
        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(parsed.warnings[0].line, 1);
    }
}
