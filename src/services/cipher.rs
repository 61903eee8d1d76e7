use crate::domain::constants::ALPHABET_LEN;
use crate::domain::errors::CipherError;
use crate::domain::models::ShiftKey;

/// Accepts a non-empty run of ASCII digits of any length.
///
/// The value is folded modulo 26 digit by digit, so keys wider than `u64`
/// are still valid and never overflow.
pub fn parse_key(raw: &str) -> Result<ShiftKey, CipherError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CipherError::Usage);
    }
    let folded = raw.bytes().fold(0u64, |acc, b| {
        (acc * 10 + u64::from(b - b'0')) % u64::from(ALPHABET_LEN)
    });
    Ok(ShiftKey::new(folded))
}

pub fn shift_char(c: char, key: ShiftKey) -> char {
    if !c.is_ascii_alphabetic() {
        return c;
    }
    let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
    let offset = (c as u8 - base + key.get()) % ALPHABET_LEN;
    (base + offset) as char
}

pub fn encipher(text: &str, key: ShiftKey) -> String {
    text.chars().map(|c| shift_char(c, key)).collect()
}
