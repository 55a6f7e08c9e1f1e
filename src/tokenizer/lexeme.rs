// src/tokenizer/lexeme.rs
//! Lexical attribute predicates over a single token's text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Regex patterns compilados uma vez
static PATTERNS: Lazy<LexemePatterns> = Lazy::new(LexemePatterns::new);

struct LexemePatterns {
    email: Regex,
    url_scheme: Regex,
    url_domain: Regex,
    digit_ordinal: Regex,
}

impl LexemePatterns {
    fn new() -> Self {
        Self {
            email: Regex::new(
                r"^[A-Za-z0-9!#$%&'*+\-/=?^_`{|}~][A-Za-z0-9!#$%&'*+\-/=?^_`{|}~.]*@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
            )
            .unwrap(),
            url_scheme: Regex::new(r"(?i)^(?:https?://|ftp://|www\.|ftp\.)\S+$").unwrap(),
            url_domain: Regex::new(
                r"(?i)^(?:[a-z0-9](?:[a-z0-9\-]*[a-z0-9])?\.)+([a-z]{2,})(?::\d+)?(?:[/?#]\S*)?$",
            )
            .unwrap(),
            digit_ordinal: Regex::new(r"(?i)^\d+(?:st|nd|rd|th)$").unwrap(),
        }
    }
}

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "trillion", "quadrillion", "gajillion",
    "bazillion",
];

const ORDINAL_WORDS: &[&str] = &[
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
    "tenth", "eleventh", "twelfth", "thirteenth", "fourteenth", "fifteenth", "sixteenth",
    "seventeenth", "eighteenth", "nineteenth", "twentieth", "thirtieth", "fortieth",
    "fiftieth", "sixtieth", "seventieth", "eightieth", "ninetieth", "hundredth", "thousandth",
    "millionth", "billionth", "trillionth",
];

/// Top-level domains accepted for scheme-less URLs (`example.com/path`).
const URL_TLDS: &[&str] = &[
    "com", "org", "net", "edu", "gov", "mil", "int", "io", "co", "info", "biz", "me", "tv",
    "ly", "us", "uk", "ca", "de", "fr", "es", "it", "nl", "br", "au", "jp", "cn", "ru", "in",
    "app", "dev", "ai", "gl", "be", "fm",
];

/// Every character is punctuation (no letters, digits or symbols like `$`).
pub fn is_punct(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_punctuation() && !matches!(c, '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~')
                || is_unicode_punct(c))
}

fn is_unicode_punct(c: char) -> bool {
    matches!(
        c,
        '\u{2010}'..='\u{2027}' | '\u{2030}'..='\u{205E}' | '\u{00A1}' | '\u{00A7}' | '\u{00AB}'
            | '\u{00B6}' | '\u{00B7}' | '\u{00BB}' | '\u{00BF}' | '\u{3001}'..='\u{3003}'
    )
}

pub fn like_email(text: &str) -> bool {
    PATTERNS.email.is_match(text)
}

/// `http://`, `https://`, `ftp://`, `www.` or `ftp.` prefix.
pub fn has_url_scheme(text: &str) -> bool {
    PATTERNS.url_scheme.is_match(text)
}

pub fn like_url(text: &str) -> bool {
    if text.is_empty() || text.contains('@') {
        return false;
    }
    if has_url_scheme(text) {
        return true;
    }
    if text.starts_with('.') || text.ends_with('.') {
        return false;
    }
    match PATTERNS.url_domain.captures(text) {
        Some(caps) => caps
            .get(1)
            .map(|tld| URL_TLDS.contains(&tld.as_str().to_lowercase().as_str()))
            .unwrap_or(false),
        None => false,
    }
}

/// Digits with separators, fractions, digit ordinals and number words.
pub fn like_num(text: &str) -> bool {
    let text = text.trim_start_matches(|c| matches!(c, '+' | '-' | '\u{00B1}' | '~'));
    if text.is_empty() {
        return false;
    }

    let stripped: String = text.chars().filter(|&c| c != ',' && c != '.').collect();
    if !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }

    if let Some((num, denom)) = text.split_once('/') {
        if !num.is_empty()
            && !denom.is_empty()
            && num.chars().all(|c| c.is_ascii_digit())
            && denom.chars().all(|c| c.is_ascii_digit())
        {
            return true;
        }
    }

    if PATTERNS.digit_ordinal.is_match(text) {
        return true;
    }

    let lower = text.to_lowercase();
    NUMBER_WORDS.contains(&lower.as_str()) || ORDINAL_WORDS.contains(&lower.as_str())
}
