use super::errors::ShortLinkError;

/// Ordered digit alphabet for short codes: position defines digit value,
/// case-sensitive, no padding, no sign.
///
/// Versioned constant: changing it invalidates every previously issued link.
pub const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

const BASE: u64 = 64;

/// Encodes a non-negative recipe identifier as a compact short code.
///
/// Base-64 positional encoding: remainders are collected least-significant
/// first and emitted most-significant first. Zero encodes to the alphabet's
/// zero symbol, never to an empty string.
pub fn encode(mut n: u64) -> String {
    let digits = ALPHABET.as_bytes();

    if n == 0 {
        return (digits[0] as char).to_string();
    }

    let mut out = Vec::new();
    while n > 0 {
        out.push(digits[(n % BASE) as usize]);
        n /= BASE;
    }
    out.reverse();

    out.into_iter().map(char::from).collect()
}

/// Decodes a short code back into the recipe identifier it was minted from.
///
/// Every character is validated against the alphabet before any folding, so
/// a malformed code fails fast with `InvalidEncoding` and no partial work.
/// A code whose value overflows the representable id range cannot name an
/// existing recipe and yields `NotFound`.
pub fn decode(code: &str) -> Result<u64, ShortLinkError> {
    if code.is_empty() {
        return Err(ShortLinkError::InvalidEncoding);
    }

    let mut value: u64 = 0;
    for ch in code.chars() {
        let digit = digit_value(ch).ok_or(ShortLinkError::InvalidEncoding)?;
        value = value
            .checked_mul(BASE)
            .and_then(|v| v.checked_add(digit))
            .ok_or(ShortLinkError::NotFound)?;
    }

    Ok(value)
}

fn digit_value(ch: char) -> Option<u64> {
    ALPHABET.find(ch).map(|position| position as u64)
}
