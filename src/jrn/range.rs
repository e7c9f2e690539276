use std::fmt;

/// A parsed delete-criteria token.
///
/// The delete command accepts a small sublanguage of id selectors:
/// - `"7"` — one exact id
/// - `"3-7"` (any single non-digit separator) — an inclusive span,
///   expanded here into one [`RangeToken::Exact`] per id
/// - `":7"` — every id from 0 through 7
/// - `"7:"` — every id from 7 through the current maximum
///
/// Tokens matching none of these shapes come back as
/// [`RangeToken::Unrecognized`] so the caller can report them without
/// aborting the rest of the criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeToken {
    Exact(i64),
    Below(i64),
    Above(i64),
    Unrecognized(String),
}

impl fmt::Display for RangeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeToken::Exact(id) => write!(f, "{}", id),
            RangeToken::Below(id) => write!(f, ":{}", id),
            RangeToken::Above(id) => write!(f, "{}:", id),
            RangeToken::Unrecognized(raw) => write!(f, "\"{}\"", raw),
        }
    }
}

/// Parses delete criteria into concrete range tokens.
///
/// Output order follows input order; spans are expanded ascending in
/// place. Span endpoints are order-normalized, so `"7-3"` selects the
/// same ids as `"3-7"`. Never fails: malformed tokens degrade to
/// [`RangeToken::Unrecognized`].
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<RangeToken> {
    tokens
        .iter()
        .flat_map(|token| parse_token(token.as_ref()))
        .collect()
}

fn parse_token(token: &str) -> Vec<RangeToken> {
    if let Ok(id) = token.parse::<i64>() {
        if id >= 0 {
            return vec![RangeToken::Exact(id)];
        }
        // A negative number reads as "-N": separator then digits.
    }

    let digits_end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    let (head, rest) = token.split_at(digits_end);

    // `rest` starts with the separator; everything after it must be digits
    // for the token to mean a span or an open-ended bound.
    let mut rest_chars = rest.chars();
    let separator = rest_chars.next();
    let tail = rest_chars.as_str();

    if separator.is_none() {
        // All digits but didn't parse above: out of range for i64.
        return vec![RangeToken::Unrecognized(token.to_string())];
    }

    let head_id = if head.is_empty() {
        None
    } else {
        head.parse::<i64>().ok()
    };
    let tail_id = if !tail.is_empty() && tail.chars().all(|c| c.is_ascii_digit()) {
        tail.parse::<i64>().ok()
    } else {
        None
    };

    match (head_id, tail_id) {
        (Some(from), Some(to)) => {
            let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
            (lo..=hi).map(RangeToken::Exact).collect()
        }
        (None, Some(bound)) if head.is_empty() => vec![RangeToken::Below(bound)],
        (Some(bound), None) if tail.is_empty() => vec![RangeToken::Above(bound)],
        _ => vec![RangeToken::Unrecognized(token.to_string())],
    }
}
