// src/tokenizer/lemma.rs
//! Suffix-rule lemmatizer for English inflections not in the exception table.

const MIN_STEM: usize = 3;

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn has_vowel(s: &str) -> bool {
    s.chars().any(|c| is_vowel(c) || c == 'y')
}

/// Number of vowel groups, a rough syllable count.
fn vowel_groups(s: &str) -> usize {
    let mut groups = 0;
    let mut prev = false;
    for c in s.chars() {
        let v = is_vowel(c);
        if v && !prev {
            groups += 1;
        }
        prev = v;
    }
    groups
}

/// Lemma of a lowercased word; words that match no rule come back unchanged.
pub fn rule_lemma(lower: &str) -> String {
    if lower.chars().count() <= MIN_STEM || !lower.chars().all(char::is_alphabetic) {
        return lower.to_string();
    }

    // Plural / 3ª pessoa
    if let Some(stem) = lower.strip_suffix("ies") {
        if stem.len() >= 2 {
            return format!("{}y", stem);
        }
    }
    if lower.ends_with("sses") || lower.ends_with("xes") || lower.ends_with("ches") || lower.ends_with("shes") {
        return lower[..lower.len() - 2].to_string();
    }
    if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
        return lower.to_string();
    }
    if let Some(stem) = lower.strip_suffix('s') {
        return stem.to_string();
    }

    // Passado
    if let Some(stem) = lower.strip_suffix("ied") {
        if stem.len() >= 2 {
            return format!("{}y", stem);
        }
    }
    if lower.ends_with("eed") {
        return lower.to_string();
    }
    if let Some(stem) = lower.strip_suffix("ed") {
        if has_vowel(stem) {
            return restore_stem(stem);
        }
    }

    // Gerúndio
    if let Some(stem) = lower.strip_suffix("ing") {
        if stem.len() >= 2 && has_vowel(stem) {
            return restore_stem(stem);
        }
    }

    lower.to_string()
}

/// Undoes consonant doubling and puts back a dropped silent `e`.
fn restore_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    let last = chars[n - 1];

    if n >= 3 && last == chars[n - 2] && !is_vowel(last) && !matches!(last, 'l' | 's' | 'z' | 'f') {
        return chars[..n - 1].iter().collect();
    }

    if matches!(last, 'v' | 'c') || (last == 'z' && chars[n - 2] != 'z') {
        return format!("{}e", stem);
    }

    // consoante-vogal-consoante em palavra de uma sílaba: lik -> like, hop -> hope
    if n >= 3
        && vowel_groups(stem) == 1
        && !is_vowel(last)
        && !matches!(last, 'w' | 'x' | 'y')
        && is_vowel(chars[n - 2])
        && !is_vowel(chars[n - 3])
    {
        return format!("{}e", stem);
    }

    stem.to_string()
}
