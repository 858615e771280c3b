use crate::database::errors::StorageError;
use crate::database::structs::sql_value::{SqlRow, SqlValue};

impl SqlRow {
    pub fn int(&self, index: usize) -> Result<i64, StorageError> {
        match self.0.get(index) {
            Some(SqlValue::Int(value)) => Ok(*value),
            Some(other) => Err(StorageError::DecodeError(format!(
                "column {} is not an integer: {:?}", index, other
            ))),
            None => Err(StorageError::DecodeError(format!("missing column {}", index))),
        }
    }

    pub fn bytes(&self, index: usize) -> Result<&[u8], StorageError> {
        match self.0.get(index) {
            Some(SqlValue::Bytes(value)) => Ok(value.as_slice()),
            Some(other) => Err(StorageError::DecodeError(format!(
                "column {} is not a byte string: {:?}", index, other
            ))),
            None => Err(StorageError::DecodeError(format!("missing column {}", index))),
        }
    }
}
