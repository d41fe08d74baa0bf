extern crate regex;

use regex::Regex;

pub fn search_text<'t>(text: &'t str, regex: &Regex) -> Option<&'t str> {
    regex
        .captures(text)
        .and_then(|v| v.get(1))
        .map(|m| m.as_str())
}
