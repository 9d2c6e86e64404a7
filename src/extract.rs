use std::sync::LazyLock;

use regex::Regex;

use crate::store::Quote;

// Matches one five-field Quote literal. Quoted fields capture any run of
// non-quote characters, so backslash escapes pass through except for an
// escaped quote itself. `\s*` between tokens keeps rustfmt-reflowed
// literals matching.
static QUOTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"Quote\s*\{\s*text:\s*"([^"]*)"\.to_string\(\),\s*source:\s*"([^"]*)"\.to_string\(\),\s*difficulty:\s*QuoteDifficulty::(\w+),\s*category:\s*QuoteCategory::(\w+),\s*origin:\s*"([^"]*)"\.to_string\(\),\s*\}"#,
    )
    .unwrap()
});

/// Scan a source blob for quote literals. Blocks that do not match the
/// five-field shape are skipped without diagnostics.
pub fn scan(source: &str) -> Vec<Quote> {
    QUOTE_RE
        .captures_iter(source)
        .map(|caps| Quote {
            text: caps[1].to_string(),
            source: caps[2].to_string(),
            difficulty: caps[3].to_string(),
            category: caps[4].to_string(),
            origin: caps[5].to_string(),
        })
        .collect()
}
