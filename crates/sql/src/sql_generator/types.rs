//! Abstract-to-native column type mapping.

use datafusion::arrow::datatypes::DataType;

/// How a backend physically stores a column: the type name used in DDL
/// plus its numeric type code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeType {
    pub name: String,
    pub code: i32,
}

impl NativeType {
    pub fn new(name: impl Into<String>, code: i32) -> Self {
        Self {
            name: name.into(),
            code,
        }
    }
}

/// Numeric SQL type codes as defined by JDBC's `java.sql.Types`, which H2
/// and the other JDBC-era backends report for their columns.
pub mod type_codes {
    pub const BIGINT: i32 = -5;
    pub const BOOLEAN: i32 = 16;
    pub const CLOB: i32 = 2005;
    pub const DATE: i32 = 91;
    pub const DECIMAL: i32 = 3;
    pub const DOUBLE: i32 = 8;
    pub const INTEGER: i32 = 4;
    pub const NUMERIC: i32 = 2;
    pub const REAL: i32 = 7;
    pub const SMALLINT: i32 = 5;
    pub const TIMESTAMP: i32 = 93;
    pub const TINYINT: i32 = -6;
    pub const VARBINARY: i32 = -3;
    pub const VARCHAR: i32 = 12;
}

/// The dialect-agnostic mapping used when a dialect has no override.
///
/// Returns `None` for types with no portable SQL rendering; callers treat
/// absence as "keep the engine's default representation", not as an error.
pub fn common_native_type(data_type: &DataType) -> Option<NativeType> {
    use type_codes::*;

    match data_type {
        DataType::Boolean => Some(NativeType::new("BOOLEAN", BOOLEAN)),
        DataType::Int8 => Some(NativeType::new("TINYINT", TINYINT)),
        DataType::Int16 => Some(NativeType::new("SMALLINT", SMALLINT)),
        DataType::Int32 => Some(NativeType::new("INTEGER", INTEGER)),
        DataType::Int64 => Some(NativeType::new("BIGINT", BIGINT)),
        DataType::Float32 => Some(NativeType::new("REAL", REAL)),
        DataType::Float64 => Some(NativeType::new("DOUBLE PRECISION", DOUBLE)),
        DataType::Utf8 | DataType::LargeUtf8 => Some(NativeType::new("VARCHAR", VARCHAR)),
        DataType::Binary | DataType::LargeBinary => Some(NativeType::new("VARBINARY", VARBINARY)),
        DataType::Date32 => Some(NativeType::new("DATE", DATE)),
        DataType::Timestamp(_, _) => Some(NativeType::new("TIMESTAMP", TIMESTAMP)),
        DataType::Decimal128(precision, scale) => Some(NativeType::new(
            format!("DECIMAL({precision},{scale})"),
            DECIMAL,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datafusion::arrow::datatypes::TimeUnit;

    #[test]
    fn integers_map_to_standard_widths() {
        let mapped = common_native_type(&DataType::Int32).expect("mapped");
        assert_eq!(mapped, NativeType::new("INTEGER", type_codes::INTEGER));

        let mapped = common_native_type(&DataType::Int64).expect("mapped");
        assert_eq!(mapped, NativeType::new("BIGINT", type_codes::BIGINT));
    }

    #[test]
    fn decimal_keeps_precision_and_scale() {
        let mapped = common_native_type(&DataType::Decimal128(20, 4)).expect("mapped");
        assert_eq!(mapped.name, "DECIMAL(20,4)");
    }

    #[test]
    fn unsupported_types_are_absent_not_errors() {
        assert_eq!(
            common_native_type(&DataType::Duration(TimeUnit::Millisecond)),
            None
        );
        assert_eq!(common_native_type(&DataType::Null), None);
    }
}
