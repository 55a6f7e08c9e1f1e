// src/tokenizer/segment.rs
//! Splits normalized text into surface tokens.
//!
//! Whitespace chunks are peeled of leading/trailing punctuation; URL and email
//! cores stay whole, English contraction suffixes are split off and whatever
//! remains is cut on Unicode word boundaries.

use unicode_segmentation::UnicodeSegmentation;

use super::lexeme::{has_url_scheme, like_email, like_url};

const PREFIXES: &[char] = &[
    '(', '[', '{', '<', '"', '\'', '*', '\u{00AB}', '\u{00BF}', '\u{00A1}', '\u{201C}', '\u{2018}',
];

const SUFFIXES: &[char] = &[
    ')', ']', '}', '>', '"', '\'', '*', '.', ',', '!', '?', ';', ':', '\u{2026}', '\u{00BB}',
    '\u{201D}', '\u{2019}',
];

/// Contraction endings, longest first.
const CONTRACTIONS: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'d", "'m"];

/// Surface forms in document order.
pub fn segment(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    for chunk in text.split_whitespace() {
        segment_chunk(chunk, &mut out);
    }
    out
}

fn segment_chunk<'a>(chunk: &'a str, out: &mut Vec<&'a str>) {
    let mut rest = chunk;

    // Prefixos
    while let Some(c) = rest.chars().next() {
        if rest.len() > c.len_utf8() && PREFIXES.contains(&c) {
            out.push(&rest[..c.len_utf8()]);
            rest = &rest[c.len_utf8()..];
        } else {
            break;
        }
    }

    // Sufixos (guardados em ordem reversa)
    let mut suffixes = Vec::new();
    while let Some(c) = rest.chars().next_back() {
        if rest.len() > c.len_utf8() && SUFFIXES.contains(&c) {
            let cut = rest.len() - c.len_utf8();
            suffixes.push(&rest[cut..]);
            rest = &rest[..cut];
        } else {
            break;
        }
    }

    if !rest.is_empty() {
        if has_url_scheme(rest) || rest.contains('@') {
            push_core(rest, out);
        } else {
            // great.It -> great . It
            let mut start = 0;
            for dot in infix_periods(rest) {
                push_core(&rest[start..dot], out);
                out.push(&rest[dot..dot + 1]);
                start = dot + 1;
            }
            push_core(&rest[start..], out);
        }
    }

    out.extend(suffixes.into_iter().rev());
}

fn push_core<'a>(core: &'a str, out: &mut Vec<&'a str>) {
    if like_url(core) || like_email(core) {
        out.push(core);
    } else {
        split_core(core, out);
    }
}

/// Byte offsets of `.` between a lowercase and an uppercase letter.
fn infix_periods(s: &str) -> Vec<usize> {
    let bytes = s.as_bytes();
    (1..bytes.len().saturating_sub(1))
        .filter(|&i| {
            bytes[i] == b'.' && bytes[i - 1].is_ascii_lowercase() && bytes[i + 1].is_ascii_uppercase()
        })
        .collect()
}

/// `don't` -> ("do", "n't"), `it's` -> ("it", "'s")
fn split_contraction(s: &str) -> Option<(&str, &str)> {
    let lower = s.to_ascii_lowercase();
    CONTRACTIONS.iter().find_map(|suffix| {
        if lower.len() > suffix.len() && lower.ends_with(suffix) {
            let cut = s.len() - suffix.len();
            if s.is_char_boundary(cut) {
                return Some((&s[..cut], &s[cut..]));
            }
        }
        None
    })
}

fn split_core<'a>(core: &'a str, out: &mut Vec<&'a str>) {
    let (stem, clitic) = match split_contraction(core) {
        Some((stem, clitic)) => (stem, Some(clitic)),
        None => (core, None),
    };

    out.extend(
        stem.split_word_bounds()
            .filter(|piece| !piece.trim().is_empty()),
    );

    if let Some(clitic) = clitic {
        out.push(clitic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peels_punctuation() {
        assert_eq!(segment("cats!"), vec!["cats", "!"]);
        assert_eq!(segment("(hello)"), vec!["(", "hello", ")"]);
        assert_eq!(segment("wait..."), vec!["wait", ".", ".", "."]);
    }

    #[test]
    fn test_keeps_url_and_email_whole() {
        assert_eq!(
            segment("Visit https://example.com or email me@x.com, now"),
            vec!["Visit", "https://example.com", "or", "email", "me@x.com", ",", "now"]
        );
    }

    #[test]
    fn test_missing_space_after_period() {
        assert_eq!(segment("great.It was"), vec!["great", ".", "It", "was"]);
        assert_eq!(segment("fun.Then.See"), vec!["fun", ".", "Then", ".", "See"]);
        assert_eq!(segment("https://example.com/a.Html"), vec!["https://example.com/a.Html"]);
        assert_eq!(segment("example.com"), vec!["example.com"]);
    }

    #[test]
    fn test_contractions() {
        assert_eq!(segment("don't"), vec!["do", "n't"]);
        assert_eq!(segment("It's great"), vec!["It", "'s", "great"]);
        assert_eq!(segment("we'll see."), vec!["we", "'ll", "see", "."]);
    }

    #[test]
    fn test_word_bounds_inside_chunk() {
        assert_eq!(segment("good,bad"), vec!["good", ",", "bad"]);
        assert_eq!(segment("3.14"), vec!["3.14"]);
        assert_eq!(segment("e-mail"), vec!["e", "-", "mail"]);
    }

    #[test]
    fn test_empty() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\t").is_empty());
    }
}
