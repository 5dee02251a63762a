use async_trait::async_trait;

use super::payments_model::Payment;
use crate::Result;

/// Single-record write capability for payments.
///
/// Returns `Ok(false)` on a recoverable failure (the write was refused) and
/// `Err` on an unrecoverable one.
#[async_trait]
pub trait PaymentSinkTrait: Send + Sync {
    async fn add_payment(&self, payment: &Payment) -> Result<bool>;
}
