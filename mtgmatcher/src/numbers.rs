//! Collector number and year extraction from variant text

/// Numbers at or above this value are read as years, below it as collector numbers.
pub const YEAR_THRESHOLD: u32 = 1993;

const MONTHS: &[&str] = &[
    "jan", "january", "feb", "february", "mar", "march", "apr", "april", "may", "jun", "june",
    "jul", "july", "aug", "august", "sep", "sept", "september", "oct", "october", "nov",
    "november", "dec", "december",
];

/// Characters that wrap a token without being part of it
const WRAPPERS: &[char] = &['#', '(', ')', '[', ']', ',', '.', ':', ';', '"'];

fn is_month(token: &str) -> bool {
    let lowered = token.to_lowercase();
    MONTHS.contains(&lowered.as_str())
}

/// The two digits of a year abbreviated with an apostrophe, as in `'97`
fn abbreviated_year(token: &str) -> Option<&str> {
    token
        .strip_prefix('\'')
        .or_else(|| token.strip_prefix('\u{2019}'))
        .filter(|short| short.len() == 2 && short.chars().all(|c| c.is_ascii_digit()))
}

/// Extract the first collector number from free text.
///
/// Tokens naming a month are skipped together with the token that follows
/// them, so dates are not read as numbers, and so are abbreviated years
/// such as `'10`. One leading and one trailing
/// non-digit character are tolerated and kept (the trailing one keeps its
/// case). For `N/M` ratios only the numerator is returned. Values at or
/// above [`YEAR_THRESHOLD`] are skipped.
pub fn extract_number(text: &str) -> Option<String> {
    let mut skip_next = false;

    for raw in text.split_whitespace() {
        if skip_next {
            skip_next = false;
            continue;
        }

        let token = raw.trim_matches(WRAPPERS);
        if token.is_empty() {
            continue;
        }
        if is_month(token) {
            skip_next = true;
            continue;
        }
        if abbreviated_year(token).is_some() {
            continue;
        }

        let token = match token.split_once('/') {
            Some((numerator, denominator)) => {
                if numerator.is_empty()
                    || denominator.is_empty()
                    || !denominator.chars().all(|c| c.is_ascii_digit())
                {
                    continue;
                }
                numerator
            }
            None => token,
        };

        if let Some(number) = parse_number_token(token) {
            return Some(number);
        }
    }

    None
}

fn parse_number_token(token: &str) -> Option<String> {
    let chars: Vec<char> = token.chars().collect();
    let mut start = 0;
    let mut end = chars.len();

    let leading = match chars.first() {
        Some(c) if !c.is_ascii_digit() => {
            start = 1;
            Some(*c)
        }
        _ => None,
    };
    let trailing = match chars.last() {
        Some(c) if chars.len() > start + 1 && !c.is_ascii_digit() => {
            end -= 1;
            Some(*c)
        }
        _ => None,
    };

    if start >= end {
        return None;
    }
    let digits: String = chars[start..end].iter().collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let value: u32 = digits.parse().ok()?;
    if value >= YEAR_THRESHOLD {
        return None;
    }

    let trimmed = digits.trim_start_matches('0');
    let mut number = String::new();
    if let Some(c) = leading {
        number.push(c);
    }
    number.push_str(if trimmed.is_empty() { "0" } else { trimmed });
    if let Some(c) = trailing {
        number.push(c);
    }
    Some(number)
}

/// Extract the first year from free text.
///
/// Accepts four digit years between [`YEAR_THRESHOLD`] and 2099, or two
/// digit years abbreviated with an apostrophe: `'97` is 1997, `'05` is 2005.
pub fn extract_year(text: &str) -> Option<String> {
    for raw in text.split_whitespace() {
        let token = raw.trim_matches(WRAPPERS);

        if token.len() == 4 && token.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(year) = token.parse::<u32>() {
                if (YEAR_THRESHOLD..=2099).contains(&year) {
                    return Some(token.to_string());
                }
            }
            continue;
        }

        if let Some(short) = abbreviated_year(token) {
            let century = if short >= "93" { "19" } else { "20" };
            return Some(format!("{century}{short}"));
        }
    }

    None
}

/// Compare a collector number against an extracted number.
///
/// Leading zeros are ignored. Compound numbers of the form `CODE-NUM`
/// match on either side of the dash.
pub fn number_matches(card_number: &str, wanted: &str) -> bool {
    let strip = |s: &str| {
        let trimmed = s.trim_start_matches('0');
        if trimmed.is_empty() && !s.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    };

    if strip(card_number) == strip(wanted) {
        return true;
    }
    match card_number.split_once('-') {
        Some((code, number)) => code == wanted || strip(number) == strip(wanted),
        None => false,
    }
}
