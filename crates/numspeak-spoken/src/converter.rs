//! Spoken-form conversion by recursive place-value decomposition.

use serde_json::Value;

use crate::error::ConversionError;
use crate::tables::{MAGNITUDES, word_for};

/// Converts a non-negative integer below one quadrillion into English words.
///
/// # Errors
///
/// Returns `ConversionError::Negative` if `number` is below zero and
/// `ConversionError::TooLarge` if it is `10^15` or more.
pub fn convert(number: i64) -> Result<String, ConversionError> {
    let number = u64::try_from(number).map_err(|_| ConversionError::Negative)?;
    let mut words = Vec::new();
    spell(number, &mut words)?;
    Ok(words.join(" "))
}

/// Converts a dynamically typed JSON value.
///
/// Only JSON integers are accepted, at any magnitude. Floats (including
/// integral ones such as `5.0` or `1e3`), strings, arrays, objects, booleans
/// and `null` are not numbers for the purpose of conversion.
///
/// # Errors
///
/// Returns `ConversionError::NotANumber` for non-integer input, otherwise
/// the same errors as [`convert`].
pub fn convert_value(value: &Value) -> Result<String, ConversionError> {
    let Value::Number(number) = value else {
        return Err(ConversionError::NotANumber);
    };
    if let Some(int) = number.as_i64() {
        return convert(int);
    }
    // Integers outside i64 keep their literal text; anything with a
    // fraction or exponent is a float.
    let literal = number.to_string();
    match literal.strip_prefix('-') {
        Some(digits) if is_integer_literal(digits) => Err(ConversionError::Negative),
        None if is_integer_literal(&literal) => Err(ConversionError::TooLarge),
        _ => Err(ConversionError::NotANumber),
    }
}

fn is_integer_literal(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Appends the words for `number` to `words`, largest scale first.
fn spell(mut number: u64, words: &mut Vec<&'static str>) -> Result<(), ConversionError> {
    let start = words.len();

    for magnitude in MAGNITUDES {
        let divisor = magnitude.divisor();
        if number < divisor {
            continue;
        }
        let count = number / divisor;
        number %= divisor;
        // A count of 1000 or more would need a scale above trillion.
        if count >= 1000 {
            return Err(ConversionError::TooLarge);
        }
        spell(count, words)?;
        words.push(magnitude.word);
    }

    if number == 0 && words.len() > start {
        return Ok(());
    }

    match word_for(number) {
        Some(word) => words.push(word),
        None => {
            let ones = number % 10;
            words.extend(word_for(number - ones));
            words.extend(word_for(ones));
        }
    }
    Ok(())
}
