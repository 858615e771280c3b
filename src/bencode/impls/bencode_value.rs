use std::collections::BTreeMap;
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::bencode::errors::BencodeError;

impl BencodeValue {
    /// Serializes the value to canonical bencode bytes.
    ///
    /// Byte strings become `<length>:<bytes>`, integers `i<value>e`, lists
    /// `l...e` and dictionaries `d...e` with keys emitted in ascending byte
    /// order (guaranteed by the backing `BTreeMap`).
    pub fn encode(&self) -> Vec<u8> {
        let mut output = Vec::new();
        self.encode_into(&mut output);
        output
    }

    fn encode_into(&self, output: &mut Vec<u8>) {
        match self {
            BencodeValue::Bytes(bytes) => {
                output.extend_from_slice(bytes.len().to_string().as_bytes());
                output.push(b':');
                output.extend_from_slice(bytes);
            }
            BencodeValue::Int(value) => {
                output.push(b'i');
                output.extend_from_slice(value.to_string().as_bytes());
                output.push(b'e');
            }
            BencodeValue::List(items) => {
                output.push(b'l');
                for item in items {
                    item.encode_into(output);
                }
                output.push(b'e');
            }
            BencodeValue::Dict(entries) => {
                output.push(b'd');
                for (key, value) in entries {
                    BencodeValue::Bytes(key.clone()).encode_into(output);
                    value.encode_into(output);
                }
                output.push(b'e');
            }
        }
    }

}

impl From<&str> for BencodeValue {
    fn from(value: &str) -> BencodeValue {
        BencodeValue::Bytes(value.as_bytes().to_vec())
    }
}

impl From<String> for BencodeValue {
    fn from(value: String) -> BencodeValue {
        BencodeValue::Bytes(value.into_bytes())
    }
}

impl From<Vec<u8>> for BencodeValue {
    fn from(value: Vec<u8>) -> BencodeValue {
        BencodeValue::Bytes(value)
    }
}

impl From<i64> for BencodeValue {
    fn from(value: i64) -> BencodeValue {
        BencodeValue::Int(value)
    }
}

/// Bencode has no float type; fractional values truncate to the integer part.
impl From<f64> for BencodeValue {
    fn from(value: f64) -> BencodeValue {
        BencodeValue::Int(value as i64)
    }
}

impl TryFrom<&serde_json::Value> for BencodeValue {
    type Error = BencodeError;

    /// Converts a JSON tree (the cache value format) to bencode.
    ///
    /// Numbers truncate to integers, strings become byte strings, arrays
    /// and objects map structurally. Booleans and nulls have no bencode
    /// representation and fail.
    fn try_from(value: &serde_json::Value) -> Result<BencodeValue, BencodeError> {
        match value {
            serde_json::Value::String(text) => Ok(BencodeValue::from(text.as_str())),
            serde_json::Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Ok(BencodeValue::Int(int))
                } else if let Some(float) = number.as_f64() {
                    Ok(BencodeValue::Int(float as i64))
                } else {
                    Err(BencodeError::UnsupportedValue(format!("number out of range: {}", number)))
                }
            }
            serde_json::Value::Array(items) => {
                let converted = items.iter()
                    .map(BencodeValue::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(BencodeValue::List(converted))
            }
            serde_json::Value::Object(entries) => {
                let mut dict = BTreeMap::new();
                for (key, entry) in entries {
                    dict.insert(key.as_bytes().to_vec(), BencodeValue::try_from(entry)?);
                }
                Ok(BencodeValue::Dict(dict))
            }
            serde_json::Value::Bool(_) => {
                Err(BencodeError::UnsupportedValue("boolean".to_string()))
            }
            serde_json::Value::Null => {
                Err(BencodeError::UnsupportedValue("null".to_string()))
            }
        }
    }
}

/// Builds a [`BencodeValue::Int`] from any integer-convertible expression.
#[macro_export]
macro_rules! ben_int {
    ($value:expr) => {
        $crate::bencode::enums::bencode_value::BencodeValue::Int($value as i64)
    };
}

/// Builds a [`BencodeValue::Bytes`] from strings or byte vectors.
#[macro_export]
macro_rules! ben_bytes {
    ($value:expr) => {
        $crate::bencode::enums::bencode_value::BencodeValue::from($value)
    };
}

/// Builds a [`BencodeValue::List`] from zero or more values.
#[macro_export]
macro_rules! ben_list {
    ($($item:expr),* $(,)?) => {
        $crate::bencode::enums::bencode_value::BencodeValue::List(vec![$($item),*])
    };
}

/// Builds a [`BencodeValue::Dict`]; keys accept anything convertible to bytes.
#[macro_export]
macro_rules! ben_map {
    () => {
        $crate::bencode::enums::bencode_value::BencodeValue::Dict(::std::collections::BTreeMap::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut entries = ::std::collections::BTreeMap::new();
        $(
            match $crate::bencode::enums::bencode_value::BencodeValue::from($key) {
                $crate::bencode::enums::bencode_value::BencodeValue::Bytes(key_bytes) => {
                    entries.insert(key_bytes, $value);
                }
                _ => unreachable!(),
            }
        )+
        $crate::bencode::enums::bencode_value::BencodeValue::Dict(entries)
    }};
}
