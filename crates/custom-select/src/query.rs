//! XPath construction for option lookups.
//!
//! Caller text is embedded as an XPath string literal. XPath 1.0 has no
//! escape sequences, so a value holding both quote kinds is rebuilt with
//! `concat()`.

use mui_select_core_types::Selector;

use crate::markers::SelectMarkers;
use crate::model::TextMatch;

/// Renders `raw` as an XPath 1.0 expression that evaluates to exactly `raw`.
pub fn xpath_literal(raw: &str) -> String {
    match (raw.contains('"'), raw.contains('\'')) {
        (true, true) => concat_literal(raw),
        (true, false) => format!("'{}'", raw),
        _ => format!("\"{}\"", raw),
    }
}

fn concat_literal(raw: &str) -> String {
    let trailing_quote = raw.ends_with('"');
    let mut segments: Vec<&str> = raw.split('"').collect();
    if trailing_quote && segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }

    let mut out = String::from("concat(");
    for (idx, segment) in segments.iter().enumerate() {
        out.push('"');
        out.push_str(segment);
        out.push('"');
        if idx + 1 < segments.len() {
            out.push_str(", '\"', ");
        }
    }
    if trailing_quote {
        out.push_str(", '\"')");
    } else {
        out.push(')');
    }
    out
}

/// Collapses every whitespace run (Unicode, including no-break space) into a
/// single space and trims both ends.
pub fn normalize_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Longest space-separated token; the first one wins ties.
pub fn longest_token(text: &str) -> &str {
    text.split(' ').fold("", |best, token| {
        if token.chars().count() > best.chars().count() {
            token
        } else {
            best
        }
    })
}

/// A lookup against the option nodes of an open popup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum OptionQuery<'a> {
    Text { text: &'a str, mode: TextMatch },
    /// Loose retry: raw text containing `token`, narrowed afterwards to nodes
    /// whose normalized text equals `text`.
    Token { text: &'a str, token: &'a str },
    Value(&'a str),
}

impl<'a> OptionQuery<'a> {
    pub(crate) fn selector(&self, markers: &SelectMarkers) -> Selector {
        let role = format!("@role = {}", xpath_literal(&markers.option_role));
        match self {
            OptionQuery::Text {
                text,
                mode: TextMatch::Exact,
            } => Selector::xpath(format!(
                ".//*[{} and normalize-space(.) = {}]",
                role,
                xpath_literal(text)
            )),
            OptionQuery::Text {
                text,
                mode: TextMatch::Partial,
            } => Selector::xpath(format!(
                ".//*[{} and contains(normalize-space(.), {})]",
                role,
                xpath_literal(text)
            )),
            OptionQuery::Token { token, .. } if token.is_empty() => markers.option(),
            OptionQuery::Token { token, .. } => Selector::xpath(format!(
                ".//*[{} and contains(., {})]",
                role,
                xpath_literal(token)
            )),
            OptionQuery::Value(value) => Selector::xpath(format!(
                ".//*[{} and @{} = {}]",
                role,
                markers.value_attribute,
                xpath_literal(value)
            )),
        }
    }

    /// Text the rendered label must equal after the structural query, if any.
    pub(crate) fn required_text(&self) -> Option<&'a str> {
        match self {
            OptionQuery::Token { text, .. } => Some(*text),
            _ => None,
        }
    }
}
