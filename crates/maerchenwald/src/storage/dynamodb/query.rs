//! Pure helpers for building partition-scoped queries.
//!
//! The partition key value is always bound out-of-band as an expression
//! attribute value, never spliced into the expression text, so embedded
//! quote characters cannot malform the query and listings match the key
//! exactly.

// ============================================================================
// Attribute names
// ============================================================================

/// Attribute holding the partition key.
pub const ATTR_PARTITION_KEY: &str = "PK";

/// Attribute holding the row key.
pub const ATTR_ROW_KEY: &str = "SK";

/// Placeholder bound to the partition key value in query expressions.
pub const PARTITION_VALUE_PLACEHOLDER: &str = ":pk";

// ============================================================================
// Expression construction
// ============================================================================

/// Key condition expression selecting a single partition.
///
/// Pattern: `PK = :pk`
pub fn partition_key_condition() -> String {
    format!("{ATTR_PARTITION_KEY} = {PARTITION_VALUE_PLACEHOLDER}")
}

/// Condition expression for an insert-only put.
///
/// Pattern: `attribute_not_exists(PK)` - fails the write when the keyed
/// item already exists instead of overwriting it.
pub fn insert_only_condition() -> String {
    format!("attribute_not_exists({ATTR_PARTITION_KEY})")
}

/// Per-page limit for a capped enumeration: the number of rows still
/// needed, so no page fetches beyond the cap. `None` when the enumeration
/// is uncapped.
pub fn remaining_limit(top: Option<u32>, fetched: usize) -> Option<i32> {
    top.map(|t| (t as usize).saturating_sub(fetched) as i32)
}
