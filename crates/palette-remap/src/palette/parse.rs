//! Permissive hex number scanning.
//!
//! Palette lines are read the way a stream extracts an unsigned hex integer:
//! leading whitespace is skipped, digits are consumed up to the first
//! character that is not a hex digit, and whatever follows is ignored. A line
//! starting with any other character (`#` included) has no digits and is
//! rejected.

use super::error::ParseColorError;

/// Scan the leading hexadecimal number of `s`.
///
/// Accepted before the digits, in this order: whitespace, a `+` or `-` sign
/// and a `0x`/`0X` prefix. Scanning stops at the first non-hex character.
/// A `-` negates the value modulo 2^32, so `-1` scans as `0xFFFFFFFF`.
///
/// # Errors
///
/// - [`ParseColorError::NoDigits`] if no hex digit follows the prefixes
/// - [`ParseColorError::Overflow`] if the digits exceed `u32::MAX`
///
/// # Example
///
/// ```
/// use palette_remap::palette::scan_hex;
///
/// assert_eq!(scan_hex("FF8800"), Ok(0xFF8800));
/// assert_eq!(scan_hex("  0x00ff00 ; green"), Ok(0x00FF00));
/// assert_eq!(scan_hex("-12"), Ok(0xFFFF_FFEE));
/// assert!(scan_hex("#123abc").is_err());
/// assert!(scan_hex("zzzzzz").is_err());
/// ```
pub fn scan_hex(s: &str) -> Result<u32, ParseColorError> {
    let s = s.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let s = strip_radix_prefix(s);

    let digits = s
        .bytes()
        .take_while(u8::is_ascii_hexdigit)
        .count();
    if digits == 0 {
        return Err(ParseColorError::NoDigits);
    }

    // The digit run is pure ASCII hex, so the only possible failure is overflow
    let value = u32::from_str_radix(&s[..digits], 16).map_err(|_| ParseColorError::Overflow)?;
    Ok(if negative { value.wrapping_neg() } else { value })
}

/// Drop `0x`/`0X` only when a hex digit follows; a bare `0x` scans as `0`.
fn strip_radix_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() > 2
        && bytes[0] == b'0'
        && (bytes[1] == b'x' || bytes[1] == b'X')
        && bytes[2].is_ascii_hexdigit()
    {
        &s[2..]
    } else {
        s
    }
}
