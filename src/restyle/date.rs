// Date marker rewriting.
//
// Markers carry an ISO `YYYY-MM-DD` date as their text content; the rewrite
// replaces it with the presentation form. Anything that doesn't parse as a
// date — or a marker with no text child at all — is left exactly as found.

use chrono::NaiveDate;

use crate::dom::{Document, NodeId};

const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Presentation form for a rewritten date.
#[derive(Debug, Clone, Copy)]
pub(crate) enum DateStyle {
    /// `DD.MM.YYYY.` with a trailing period.
    DayMonthYear,
    /// Four-digit year.
    YearOnly,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            DateStyle::DayMonthYear => "%d.%m.%Y.",
            DateStyle::YearOnly => "%Y",
        }
    }
}

/// Rewrite the text content of a date marker node in place.
pub(crate) fn rewrite_date(dom: &mut Document, id: NodeId, style: DateStyle) {
    let Some(first) = dom.first_child(id) else {
        return;
    };
    let Some(text) = dom.text(first) else {
        return;
    };

    // The parse must consume the whole string; anything else stays untouched.
    let formatted = match NaiveDate::parse_from_str(text, INPUT_FORMAT) {
        Ok(date) => date.format(style.pattern()).to_string(),
        Err(_) => return,
    };

    if let Some(text) = dom.text_mut(first) {
        *text = formatted;
    }
}
