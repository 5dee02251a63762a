//! Payments module - ledger models and the payment write capability.

mod payments_model;
mod payments_traits;

pub use payments_model::{Payment, PaymentMethod};
pub use payments_traits::PaymentSinkTrait;
