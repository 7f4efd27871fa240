//! Symbol codec: the mapping between alphabet letters and the integer codes a
//! classifier writes into a [`SymbolGrid`](crate::grid::SymbolGrid).
//!
//! Codes use a fixed offset scheme: `'A'` is 1, `'B'` is 2, up to `'Z'` at 26.
//! Code 0 is never produced.

use std::ops::RangeInclusive;

use crate::errors::InputError;

/// Integer code of one grid cell.
pub type Symbol = u8;

// Character-set constants
pub const ALPHABET_SIZE: usize = 26;
pub const FIRST_CODE: Symbol = 1;
pub const LAST_CODE: Symbol = ALPHABET_SIZE as Symbol;
pub(crate) const UPPERCASE_ALPHABET: RangeInclusive<char> = 'A'..='Z';

/// Map an uppercase ASCII letter to its code (`'A'` → 1).
///
/// Callers must only pass `'A'..='Z'`; anything else gives a meaningless code.
/// Use [`try_char_to_code`] when the input has not been validated.
#[must_use]
pub fn char_to_code(ch: char) -> Symbol {
    debug_assert!(ch.is_ascii_uppercase(), "char_to_code expects 'A'..='Z', got {ch:?}");
    (ch as u8).wrapping_sub(b'A').wrapping_add(FIRST_CODE)
}

/// Map a code back to its uppercase letter (1 → `'A'`).
///
/// `code` must lie in `1..=26`. Use [`try_code_to_char`] otherwise.
#[must_use]
pub fn code_to_char(code: Symbol) -> char {
    debug_assert!(is_valid_code(code), "code_to_char expects 1..=26, got {code}");
    char::from(code.wrapping_sub(FIRST_CODE).wrapping_add(b'A'))
}

/// Checked form of [`char_to_code`]. Lowercase letters are accepted and
/// normalized.
///
/// # Errors
///
/// Returns [`InputError::InvalidWordChar`] if `ch` is not an ASCII letter.
pub fn try_char_to_code(ch: char) -> Result<Symbol, Box<InputError>> {
    let upper = ch.to_ascii_uppercase();
    if UPPERCASE_ALPHABET.contains(&upper) {
        Ok(char_to_code(upper))
    } else {
        Err(Box::new(InputError::InvalidWordChar {
            word: ch.to_string(),
            invalid_char: ch,
        }))
    }
}

/// Checked form of [`code_to_char`].
///
/// # Errors
///
/// Returns [`InputError::SymbolOutOfRange`] (at cell `(0, 0)`, since there is no
/// grid context here) if `code` is outside `1..=26`.
pub fn try_code_to_char(code: Symbol) -> Result<char, Box<InputError>> {
    if is_valid_code(code) {
        Ok(code_to_char(code))
    } else {
        Err(Box::new(InputError::SymbolOutOfRange { code, col: 0, row: 0 }))
    }
}

#[must_use]
pub fn is_valid_code(code: Symbol) -> bool {
    (FIRST_CODE..=LAST_CODE).contains(&code)
}

/// Encode a word that is already uppercase `A-Z`.
pub(crate) fn encode_word(word: &str) -> Vec<Symbol> {
    word.chars().map(char_to_code).collect()
}
