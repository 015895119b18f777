//! Mapping from typed menu input to menu choices.
//!
//! Input is read the way a `%d` conversion reads it: leading whitespace is
//! skipped, then an optionally signed run of digits is taken as the option
//! code. Whatever follows the digits stays pending for the next prompt.

use thiserror::Error;

use crate::types::MenuChoice;

/// Malformed or out-of-range menu input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("unknown option: {0}")]
    UnknownOption(i64),
}

/// Split the leading optionally signed integer off `text`.
///
/// Leading whitespace is skipped. Returns the digits (with sign) and the
/// unconsumed remainder, or `None` when no digit follows.
pub fn split_code(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    let sign = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    Some(text.split_at(sign + digits))
}

/// Map the leading integer of `text` to a menu choice, ignoring the rest.
pub fn parse_choice(text: &str) -> Result<MenuChoice, InputError> {
    let Some((token, _)) = split_code(text) else {
        return Err(InputError::NotANumber(text.trim().to_string()));
    };
    let code: i64 = token
        .parse()
        .map_err(|_| InputError::NotANumber(token.to_string()))?;
    MenuChoice::from_code(code).ok_or(InputError::UnknownOption(code))
}
