//! Decoding of dataset files into card records

use crate::card::CardRecord;
use crate::error::DecodeError;
use serde_json::Value;

/// Decode a dataset file: a JSON array of card objects.
///
/// The root must be an array and every element an object carrying at least
/// `id`, `name`, `foiling` and `edition`. Unknown keys are ignored.
pub fn decode_cards(bytes: &[u8]) -> Result<Vec<CardRecord>, DecodeError> {
    let root: Value = serde_json::from_slice(bytes).map_err(DecodeError::Syntax)?;

    let items = match root {
        Value::Array(items) => items,
        other => {
            return Err(DecodeError::NotAnArray {
                found: json_kind(&other),
            })
        }
    };

    let mut cards = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            return Err(DecodeError::NotAnObject {
                index,
                found: json_kind(&item),
            });
        }
        let card: CardRecord = serde_json::from_value(item)
            .map_err(|source| DecodeError::Record { index, source })?;
        cards.push(card);
    }

    log::debug!("Decoded {} card records", cards.len());
    Ok(cards)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "decode_tests.rs"]
mod tests;
