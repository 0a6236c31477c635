//! Property tests for invariants that must hold for arbitrary inputs:
//! classification totality and decimal precision/scale pass-through.

use datafusion::arrow::datatypes::DataType;
use keelson_error::CatalogError;
use keelson_sql::dialects::{H2DatabaseError, H2Dialect};
use keelson_sql::SourceDialect;
use proptest::prelude::*;

proptest! {
    #[test]
    fn classification_is_total_and_preserves_the_message(
        code in any::<i32>(),
        message in "\\PC*",
    ) {
        let classified = H2Dialect::new()
            .classify_error(&message, Box::new(H2DatabaseError::new(code, "native")));
        prop_assert_eq!(classified.message(), message.as_str());
        match classified {
            CatalogError::AlreadyExists { .. } => prop_assert_eq!(code, 42101),
            CatalogError::NotFound { .. } => prop_assert!(code == 42102 || code == 90079),
            CatalogError::Unclassified { .. } => {
                prop_assert!(code != 42101 && code != 42102 && code != 90079)
            }
        }
    }

    #[test]
    fn decimal_precision_and_scale_pass_through(
        precision in 1u8..=38,
        scale in 0i8..=38,
    ) {
        let scale = scale.min(precision as i8);
        let mapped = H2Dialect::new()
            .native_type(&DataType::Decimal128(precision, scale))
            .expect("decimal maps");
        prop_assert_eq!(mapped.name, format!("NUMERIC({},{})", precision, scale));
        prop_assert_eq!(mapped.code, 2);
    }
}
