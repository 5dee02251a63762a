//! Batch payments module - validation and sequential application of
//! bulk-entered collections.

mod batch_model;
mod batch_processor;
mod batch_validator;


#[cfg(test)]
mod batch_validator_tests;

pub use batch_model::{BatchConfig, BatchResult, BatchStatus, PaymentBatchEntry};
pub use batch_processor::BatchPaymentProcessor;
pub use batch_validator::{
    validate_payment_entries, validate_payment_entry, AGENT_NAME_REQUIRED,
    AMBIGUOUS_SERIAL_NUMBER, AMOUNT_NOT_POSITIVE, CUSTOMER_NAME_REQUIRED, CUSTOMER_NOT_FOUND,
    NAME_MISMATCH,
};
