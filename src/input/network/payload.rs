use crate::core::data::normalized_position::NormalizedPosition;

pub const PAIR_DELIMITER: char = '&';
pub const KEY_VALUE_SEPARATOR: char = '=';

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PayloadError {
    #[error("empty payload")]
    Empty,
    #[error("payload is not valid UTF-8")]
    NotUtf8,
    #[error("malformed pair '{0}', expected key=value")]
    MalformedPair(String),
    #[error("could not convert '{value}' to a number for '{key}'")]
    NonNumeric { key: String, value: String },
}

/// Parses `x=<float>&y=<float>` into a normalized position.
///
/// Unknown keys are ignored and a missing coordinate defaults to `0`. A
/// repeated key keeps its last value.
pub fn parse_payload(raw: &str) -> Result<NormalizedPosition, PayloadError> {
    let trimmed = raw.trim().trim_start_matches('?');

    let pairs = trimmed
        .split(PAIR_DELIMITER)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            pair.split_once(KEY_VALUE_SEPARATOR)
                .ok_or_else(|| PayloadError::MalformedPair(pair.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    parse_pairs(pairs)
}

/// Builds a position from key/value pairs that are already split apart,
/// such as a decoded HTTP query.
pub fn parse_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Result<NormalizedPosition, PayloadError>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut position = NormalizedPosition::default();
    let mut any_pair = false;

    for (key, value) in pairs {
        any_pair = true;

        let key = key.as_ref().trim();
        let target = match key {
            "x" => &mut position.x,
            "y" => &mut position.y,
            _ => continue,
        };

        *target = parse_coordinate(key, value.as_ref().trim())?;
    }

    if !any_pair {
        return Err(PayloadError::Empty);
    }

    Ok(position)
}

pub fn parse_payload_bytes(bytes: &[u8]) -> Result<NormalizedPosition, PayloadError> {
    let raw = std::str::from_utf8(bytes).map_err(|_| PayloadError::NotUtf8)?;
    parse_payload(raw)
}

fn parse_coordinate(key: &str, value: &str) -> Result<f64, PayloadError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .ok_or_else(|| PayloadError::NonNumeric {
            key: key.to_string(),
            value: value.to_string(),
        })
}
