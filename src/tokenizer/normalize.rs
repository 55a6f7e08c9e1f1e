// src/tokenizer/normalize.rs

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^<>]{1,200}>").unwrap());
static HTML_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]{2,8});").unwrap());

/// Cleans raw review/tweet text before segmentation
pub struct TextNormalizer {
    strip_markup: bool,
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self { strip_markup: true }
    }

    /// Leaves `<...>` sequences in place.
    pub fn keep_markup() -> Self {
        Self {
            strip_markup: false,
        }
    }

    pub fn normalize(&self, text: &str) -> String {
        let mut result = text.to_string();

        // 1. Tags HTML (IMDb usa <br />)
        if self.strip_markup {
            result = HTML_TAG.replace_all(&result, " ").into_owned();
        }

        // 2. Entidades HTML
        result = unescape_entities(&result);

        // 3. Normalização Unicode (NFC)
        result = result.nfc().collect();

        // 4. Normaliza aspas e hífen
        result = self.normalize_punctuation(&result);

        // 5. Caracteres de controle viram espaço
        result
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect()
    }

    fn normalize_punctuation(&self, text: &str) -> String {
        text
            // Aspas curvas para retas
            .replace(['\u{201C}', '\u{201D}', '\u{00AB}', '\u{00BB}'], "\"")
            .replace(['\u{2018}', '\u{2019}', '\u{02BC}'], "'")
            // Travessões para hífen
            .replace(['\u{2013}', '\u{2014}'], "-")
            // Espaços especiais
            .replace(['\u{00A0}', '\u{2009}', '\u{200B}'], " ")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn unescape_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    HTML_ENTITY
        .replace_all(text, |caps: &regex::Captures| {
            let body = &caps[1];
            let decoded = if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                named_entity(body)
            };
            match decoded {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<char> {
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        "hellip" => '\u{2026}',
        "mdash" => '\u{2014}',
        "ndash" => '\u{2013}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201C}',
        "rdquo" => '\u{201D}',
        _ => return None,
    };
    Some(c)
}
