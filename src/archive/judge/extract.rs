extern crate regex;
extern crate serde_json;

use super::search::search_text;
use crate::error::{regex_mismatch, Result};
use regex::Regex;

/// Pulls the submitted source out of a submission detail page.
pub trait CodeExtractor: Send + Sync {
    fn extract(&self, page: &str) -> Result<String>;
}

/// Scrapes the `submissionCode: '...'` literal that the detail page embeds
/// into its inline script.
pub struct PatternExtractor {
    code: Regex,
}
impl PatternExtractor {
    pub fn new() -> Self {
        Self {
            code: Regex::new(r"submissionCode:\s'([^']*)'").unwrap(),
        }
    }
}
impl Default for PatternExtractor {
    fn default() -> Self {
        Self::new()
    }
}
impl CodeExtractor for PatternExtractor {
    fn extract(&self, page: &str) -> Result<String> {
        let raw = search_text(page, &self.code)
            .ok_or_else(|| regex_mismatch("can't find submission code"))?;
        unescape(raw)
    }
}

/// The page escapes the literal with `\uXXXX` sequences, which json reads as is.
pub fn unescape(raw: &str) -> Result<String> {
    Ok(serde_json::from_str(&format!("\"{}\"", raw))?)
}
