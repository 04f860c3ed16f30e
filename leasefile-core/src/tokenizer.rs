/// Token delimiters of the lease-file format. A statement runs to its `;`,
/// a block header or closing brace to its line end, so CR, LF, and `;` all
/// terminate a token.
const DELIMITERS: [char; 3] = ['\r', '\n', ';'];

/// Split lease-file text into statement tokens.
///
/// Runs of delimiters yield no empty tokens, and any token whose first
/// character is `#` is discarded as a full-line comment. The iterator is a
/// single forward pass; tokens borrow from `text`.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(DELIMITERS)
        .filter(|token| !token.is_empty() && !token.starts_with('#'))
}

/// Split a single token on plain spaces, collapsing runs.
pub fn split_fields(token: &str) -> impl Iterator<Item = &str> {
    token.split(' ').filter(|field| !field.is_empty())
}

/// Remainder of `token` after skipping `count` space-delimited fields.
///
/// Unlike [`split_fields`], the tail is kept intact. Timestamp values span
/// two fields (`2024/01/01 00:00:00`), so they are reached as the remainder
/// past the day-of-week column rather than as a single field. Returns
/// `None` when nothing follows the skipped fields.
pub fn skip_fields(token: &str, count: usize) -> Option<&str> {
    let mut rest = token.trim_start_matches(' ');
    for _ in 0..count {
        let end = rest.find(' ')?;
        rest = rest[end..].trim_start_matches(' ');
    }
    (!rest.is_empty()).then_some(rest)
}
