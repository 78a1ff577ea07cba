//! Comparison keys for free-text card and edition names.
//!
//! Every comparison in the matcher goes through [`normalize`], so two strings
//! are "the same" when they only differ in case, accents, punctuation,
//! whitespace or the letter `s`.

/// Characters translated (or dropped, when mapped to "") before comparison.
const CHAR_REPLACEMENTS: &[(char, &str)] = &[
    // Quotes and punctuation
    ('"', ""),
    ('\'', ""),
    ('\u{2018}', ""),
    ('\u{2019}', ""),
    ('\u{201C}', ""),
    ('\u{201D}', ""),
    (',', ""),
    ('.', ""),
    (':', ""),
    (';', ""),
    ('!', ""),
    ('?', ""),
    ('-', ""),
    ('\u{2013}', ""),
    ('\u{2014}', ""),
    ('(', ""),
    (')', ""),
    ('[', ""),
    (']', ""),
    ('+', ""),
    ('~', ""),
    ('|', ""),
    ('\u{00AE}', ""),
    ('\u{2122}', ""),
    ('\u{2026}', ""),
    // Accents
    ('\u{00E0}', "a"),
    ('\u{00E1}', "a"),
    ('\u{00E2}', "a"),
    ('\u{00E3}', "a"),
    ('\u{00E4}', "a"),
    ('\u{00E5}', "a"),
    ('\u{00E8}', "e"),
    ('\u{00E9}', "e"),
    ('\u{00EA}', "e"),
    ('\u{00EB}', "e"),
    ('\u{00EC}', "i"),
    ('\u{00ED}', "i"),
    ('\u{00EE}', "i"),
    ('\u{00EF}', "i"),
    ('\u{00F2}', "o"),
    ('\u{00F3}', "o"),
    ('\u{00F4}', "o"),
    ('\u{00F5}', "o"),
    ('\u{00F6}', "o"),
    ('\u{00F9}', "u"),
    ('\u{00FA}', "u"),
    ('\u{00FB}', "u"),
    ('\u{00FC}', "u"),
    ('\u{00F1}', "n"),
    ('\u{00E7}', "c"),
    ('\u{00FD}', "y"),
    ('\u{00F8}', "o"),
    ('\u{0161}', "s"),
    ('\u{010D}', "c"),
    ('\u{017E}', "z"),
    // Ligatures
    ('\u{00E6}', "ae"),
    ('\u{0153}', "oe"),
];

/// Words that keep their `s` through normalization.
///
/// The replacement uses U+017F (long s), which survives lower-casing and the
/// generic `s` stripping. Removing an entry makes distinct cards collide.
const S_PRESERVING_WORDS: &[(&str, &str)] = &[("plains", "plain\u{017F}"), ("plus", "plu\u{017F}")];

/// Canonicalize a string into its comparison key.
///
/// Trims and lower-cases, translates the punctuation and diacritics in
/// [`CHAR_REPLACEMENTS`], protects [`S_PRESERVING_WORDS`], then drops every
/// `s` and every whitespace character. Plurals and a literal trailing `s` are
/// therefore indistinguishable.
pub fn normalize(text: &str) -> String {
    let lowered = text.trim().to_lowercase();

    let mut translated = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        match CHAR_REPLACEMENTS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => translated.push_str(to),
            None => translated.push(c),
        }
    }

    for (word, kept) in S_PRESERVING_WORDS {
        if translated.contains(word) {
            translated = translated.replace(word, kept);
        }
    }

    translated
        .chars()
        .filter(|c| *c != 's' && !c.is_whitespace())
        .collect()
}

/// Normalized equality
pub fn equals(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Normalized substring test, true when `b` appears in `a`
pub fn contains(a: &str, b: &str) -> bool {
    normalize(a).contains(&normalize(b))
}

/// Normalized prefix test
pub fn has_prefix(a: &str, prefix: &str) -> bool {
    normalize(a).starts_with(&normalize(prefix))
}

/// Normalized suffix test
pub fn has_suffix(a: &str, suffix: &str) -> bool {
    normalize(a).ends_with(&normalize(suffix))
}

fn collapse_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split parenthesized groups out of a string.
///
/// Element 0 is the text with every group removed, followed by the content of
/// each group in the order the groups open. Nested groups are returned as
/// their own elements. Text with unbalanced parentheses is returned whole as
/// a single element.
pub fn split_variants(text: &str) -> Vec<String> {
    let mut depth = 0i32;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return vec![text.to_string()];
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return vec![text.to_string()];
    }

    let mut base = String::new();
    let mut groups: Vec<String> = Vec::new();
    let mut open: Vec<usize> = Vec::new();

    for c in text.chars() {
        match c {
            '(' => {
                groups.push(String::new());
                open.push(groups.len() - 1);
                // Keep words on either side of the group apart
                match open.len() {
                    1 => base.push(' '),
                    _ => {
                        if let Some(&parent) = open.get(open.len() - 2) {
                            groups[parent].push(' ');
                        }
                    }
                }
            }
            ')' => {
                open.pop();
                match open.last() {
                    Some(&parent) => groups[parent].push(' '),
                    None => base.push(' '),
                }
            }
            _ => match open.last() {
                Some(&idx) => groups[idx].push(c),
                None => base.push(c),
            },
        }
    }

    let mut result = vec![collapse_spaces(&base)];
    result.extend(
        groups
            .iter()
            .map(|group| collapse_spaces(group))
            .filter(|group| !group.is_empty()),
    );
    result
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
