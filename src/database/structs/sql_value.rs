/// A positional statement parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Bytes(Vec<u8>),
    Int(i64),
}

/// A single decoded column value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Bytes(Vec<u8>),
    Int(i64),
    Null,
}

/// One fetched row, columns in statement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlRow(pub Vec<SqlValue>);
