/// Prefix of receipt numbers generated for batch-entered payments
pub const BATCH_RECEIPT_PREFIX: &str = "BATCH";

/// Error reported when the remote store refuses a migration bundle
pub const MIGRATION_FAILED_MESSAGE: &str = "Failed to migrate data to Firebase";

/// Separator used when several validation messages apply to one entry
pub const VALIDATION_ERROR_SEPARATOR: &str = ", ";
