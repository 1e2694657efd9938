use regex::Regex;
use std::sync::OnceLock;

static PERIOD_RE: OnceLock<Regex> = OnceLock::new();

fn period_regex() -> &'static Regex {
    PERIOD_RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}$").expect("static period pattern"))
}

fn month_abbrev(month: &str) -> Option<&'static str> {
    match month {
        "01" => Some("Ene"),
        "02" => Some("Feb"),
        "03" => Some("Mar"),
        "04" => Some("Abr"),
        "05" => Some("May"),
        "06" => Some("Jun"),
        "07" => Some("Jul"),
        "08" => Some("Ago"),
        "09" => Some("Sep"),
        "10" => Some("Oct"),
        "11" => Some("Nov"),
        "12" => Some("Dic"),
        _ => None,
    }
}

/// Turns `YYYY-MM` period labels into Spanish month abbreviations. The year
/// is appended on the first label and again whenever it changes; months with
/// no table entry keep their digits. Labels that are not `YYYY-MM` shaped
/// pass through untouched and do not reset the year tracking.
#[must_use]
pub fn format_period_labels(labels: &[String]) -> Vec<String> {
    let mut formatted = Vec::with_capacity(labels.len());
    let mut last_year: Option<&str> = None;

    for label in labels {
        if !period_regex().is_match(label) {
            formatted.push(label.clone());
            continue;
        }
        let (year, rest) = label.split_at(4);
        let month = &rest[1..];
        let month_name = month_abbrev(month).unwrap_or(month);

        let show_year = match last_year {
            Some(seen) => seen != year,
            None => true,
        };
        if show_year {
            last_year = Some(year);
            formatted.push(format!("{month_name} {year}"));
        } else {
            formatted.push(month_name.to_string());
        }
    }
    formatted
}

#[must_use]
pub fn display_number(value: f64) -> String {
    format!("{value}")
}

#[must_use]
pub fn rounded_score(value: f64) -> i64 {
    value.round() as i64
}
