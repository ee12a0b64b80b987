use serde::{Deserialize, Serialize};
use std::fmt;

/// PostgreSQL storage types a column can be declared with.
///
/// `Serial` and `BigSerial` are only used for auto-incrementing primary keys;
/// columns referencing them use `Integer` and `BigInt` respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Serial,
    BigSerial,
    Integer,
    BigInt,
    Text,
    DoublePrecision,
    Boolean,
    Date,
    TimestampTz,
    Uuid,
}

impl Type {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Serial => "SERIAL",
            Self::BigSerial => "BIGSERIAL",
            Self::Integer => "INTEGER",
            Self::BigInt => "BIGINT",
            Self::Text => "TEXT",
            Self::DoublePrecision => "DOUBLE PRECISION",
            Self::Boolean => "BOOLEAN",
            Self::Date => "DATE",
            Self::TimestampTz => "TIMESTAMPTZ",
            Self::Uuid => "UUID",
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Serial | Self::BigSerial | Self::Integer | Self::BigInt
        )
    }

    pub fn is_auto_increment(self) -> bool {
        matches!(self, Self::Serial | Self::BigSerial)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}
