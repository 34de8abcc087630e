//! Text helpers for the verse screen: the "Book C:V" reference and the
//! Brazilian Portuguese long date shown under the greeting.

use chrono::{DateTime, Local, Locale, NaiveDate, NaiveTime, TimeZone};

/// Weekday, day, month and year, e.g. "sábado, 17 de outubro de 2026".
const LONG_DATE_FORMAT: &str = "%A, %-d de %B de %Y";

pub fn format_reference(book: &str, chapter: u32, verse: u32) -> String {
    format!("{book} {chapter}:{verse}")
}

pub fn long_date(date: NaiveDate) -> String {
    format_pt_br(&date.and_time(NaiveTime::MIN).and_utc())
}

pub fn today() -> String {
    format_pt_br(&Local::now())
}

fn format_pt_br<Tz>(moment: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    moment
        .format_localized(LONG_DATE_FORMAT, Locale::pt_BR)
        .to_string()
}
