//! Roman numeral text codec for the digits 1-9.
//!
//! The game engine stores and compares logical digits only; this module is
//! the sole place Roman notation exists. [`to_roman`] and [`parse`] convert
//! between the two, and [`resolve_partial`] decides when a keystroke buffer
//! of `I`/`V`/`X` characters unambiguously denotes a numeral.

use derive_more::{Display, Error};

use crate::Digit;

/// The numerals I-IX, indexed by logical digit minus one.
const NUMERALS: [&str; 9] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];

/// Returns the Roman numeral for a digit.
///
/// # Examples
///
/// ```
/// use aenigma_core::{Digit, roman};
///
/// assert_eq!(roman::to_roman(Digit::D1), "I");
/// assert_eq!(roman::to_roman(Digit::D4), "IV");
/// assert_eq!(roman::to_roman(Digit::D9), "IX");
/// ```
#[must_use]
pub fn to_roman(digit: Digit) -> &'static str {
    NUMERALS[usize::from(digit.value() - 1)]
}

/// Error returned when text is not a Roman numeral between I and IX.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("not a Roman numeral in I..IX")]
pub struct ParseRomanError;

/// Parses a Roman numeral into a digit.
///
/// Leading and trailing whitespace is ignored and letter case is folded, so
/// `" iv "` parses as [`Digit::D4`].
///
/// # Errors
///
/// Returns [`ParseRomanError`] for anything other than the nine numerals
/// I-IX, including subtractive forms outside that range (`X`, `XI`, ...)
/// and malformed sequences (`IIII`, `VX`, ...).
pub fn parse(text: &str) -> Result<Digit, ParseRomanError> {
    let token = text.trim().to_ascii_uppercase();
    NUMERALS
        .iter()
        .position(|numeral| *numeral == token)
        .map(|i| Digit::ALL[i])
        .ok_or(ParseRomanError)
}

/// Resolves a partially typed numeral buffer, committing only when no
/// further keystroke could extend it into a different valid numeral.
///
/// `III`, `IV`, `VIII`, and `IX` resolve immediately; `I`, `II`, `V`, `VI`,
/// and `VII` stay pending (each is a prefix of a longer numeral); anything
/// else resolves to `None` and the caller is expected to discard the buffer.
///
/// # Examples
///
/// ```
/// use aenigma_core::{Digit, roman};
///
/// assert_eq!(roman::resolve_partial("IV"), Some(Digit::D4));
/// assert_eq!(roman::resolve_partial("I"), None); // could become II, IV, IX
/// assert_eq!(roman::resolve_partial("XV"), None);
/// ```
#[must_use]
pub fn resolve_partial(buffer: &str) -> Option<Digit> {
    let token = buffer.trim().to_ascii_uppercase();
    let digit = parse(&token).ok()?;
    for keystroke in ['I', 'V', 'X'] {
        let extended = format!("{token}{keystroke}");
        if NUMERALS.contains(&extended.as_str()) {
            return None;
        }
    }
    Some(digit)
}
