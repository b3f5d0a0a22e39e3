//! Display text for worksheet cells.
//!
//! calamine hands back typed cell values; the PRN output wants the text a
//! spreadsheet viewer would show. Numbers follow Excel's "General" format,
//! date-formatted cells render as ISO dates, and errors render as their
//! Excel literal.

use calamine::{Data, ExcelDateTime};
use chrono::NaiveTime;

/// Significant digits shown by Excel's "General" number format.
const GENERAL_SIGNIFICANT_DIGITS: i32 = 15;

/// Smallest decimal exponent "General" still prints in fixed notation.
const GENERAL_MIN_FIXED_EXPONENT: i32 = -9;

/// Render a cell value as display text.
pub fn display_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_general(*f),
        Data::Bool(true) => "TRUE".to_string(),
        Data::Bool(false) => "FALSE".to_string(),
        Data::DateTime(dt) => format_excel_datetime(dt),
        Data::Error(e) => e.to_string(),
        other => other.to_string(),
    }
}

/// Format a number the way Excel's "General" format shows it.
///
/// Integral values print without a decimal point. Everything else is rounded
/// to 15 significant digits with trailing zeros dropped, so binary noise such
/// as `0.1 + 0.2` prints as `0.3`. Magnitudes of 1e15 and above, or below
/// 1e-9, switch to exponent form (`1E+20`, `1.5E-12`).
pub fn format_general(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    if !(GENERAL_MIN_FIXED_EXPONENT..GENERAL_SIGNIFICANT_DIGITS).contains(&magnitude) {
        return format_scientific(value);
    }
    if value.fract() == 0.0 {
        return format!("{value:.0}");
    }

    let decimals = (GENERAL_SIGNIFICANT_DIGITS - 1 - magnitude).clamp(0, 30) as usize;
    trim_fraction(format!("{value:.decimals$}"))
}

/// `d.dddE+NN` with at most 15 significant digits and a two-digit exponent.
fn format_scientific(value: f64) -> String {
    let digits = (GENERAL_SIGNIFICANT_DIGITS - 1) as usize;
    let text = format!("{value:.digits$e}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!(
        "{}E{}{:02}",
        trim_fraction(mantissa.to_string()),
        sign,
        exponent.unsigned_abs()
    )
}

fn trim_fraction(text: String) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

fn format_excel_datetime(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        return match dt.as_duration() {
            Some(duration) => format_duration(duration.num_seconds()),
            None => format_general(dt.as_f64()),
        };
    }

    match dt.as_datetime() {
        Some(datetime) if datetime.time() == NaiveTime::MIN => {
            datetime.format("%Y-%m-%d").to_string()
        }
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => format_general(dt.as_f64()),
    }
}

/// `[h]:mm:ss` with unbounded hours.
fn format_duration(total_seconds: i64) -> String {
    let sign = if total_seconds < 0 { "-" } else { "" };
    let seconds = total_seconds.unsigned_abs();
    format!(
        "{}{}:{:02}:{:02}",
        sign,
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}
