use chrono::{NaiveDate, Utc};
use log::{debug, info, warn};
use std::sync::Arc;

use super::batch_model::{BatchConfig, BatchResult, PaymentBatchEntry};
use super::batch_validator::CUSTOMER_NOT_FOUND;
use crate::customers::{CollectionType, Customer};
use crate::ids::IdGenerator;
use crate::notifications::{Notification, NotificationSink};
use crate::payments::{Payment, PaymentMethod, PaymentSinkTrait};
use crate::utils::with_deadline;

/// Applies pre-validated batch entries through a payment sink.
///
/// Entries are written one at a time in input order. A failing entry never
/// aborts the batch; every failure ends up in `BatchResult::errors`.
pub struct BatchPaymentProcessor {
    id_generator: Arc<IdGenerator>,
    notification_sink: Arc<dyn NotificationSink>,
    config: BatchConfig,
}

impl BatchPaymentProcessor {
    pub fn new(
        id_generator: Arc<IdGenerator>,
        notification_sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            id_generator,
            notification_sink,
            config: BatchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: BatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Partitions `entries` by their precomputed `is_valid` flag and applies
    /// the valid ones through `sink`.
    ///
    /// Entries are not re-validated here; run `validate_payment_entries`
    /// first. Emits exactly one summary notification.
    pub async fn process_batch_payments(
        &self,
        entries: &[PaymentBatchEntry],
        collection_type: CollectionType,
        date: NaiveDate,
        sink: &dyn PaymentSinkTrait,
    ) -> BatchResult {
        let mut result = BatchResult::new(self.id_generator.batch_id());
        info!(
            "[Batch {}] Processing {} entries ({} collection on {})",
            result.batch_id,
            entries.len(),
            collection_type,
            date
        );

        let (valid, invalid): (Vec<&PaymentBatchEntry>, Vec<&PaymentBatchEntry>) =
            entries.iter().partition(|entry| entry.is_valid);

        for entry in invalid {
            let reason = entry.error.as_deref().unwrap_or("Invalid entry");
            result
                .errors
                .push(format!("{}: {}", entry.serial_number, reason));
            result.failed_count += 1;
        }

        for entry in valid {
            let Some(customer) = entry.customer.as_ref() else {
                warn!(
                    "[Batch {}] Entry {} is flagged valid but has no resolved customer",
                    result.batch_id, entry.serial_number
                );
                result
                    .errors
                    .push(format!("{}: {}", entry.serial_number, CUSTOMER_NOT_FOUND));
                result.failed_count += 1;
                continue;
            };

            let payment = self.build_payment(entry, customer, collection_type, date);
            let outcome = with_deadline(
                self.config.capability_timeout,
                "add_payment",
                sink.add_payment(&payment),
            )
            .await;

            match outcome {
                Ok(true) => {
                    debug!(
                        "[Batch {}] Saved payment {} for {}",
                        result.batch_id, payment.id, entry.serial_number
                    );
                    result.processed_count += 1;
                    result.payments.push(payment);
                }
                Ok(false) => {
                    warn!(
                        "[Batch {}] Payment sink refused entry {}",
                        result.batch_id, entry.serial_number
                    );
                    result.failed_count += 1;
                    result.errors.push(format!(
                        "Failed to save payment for {}",
                        entry.serial_number
                    ));
                }
                Err(e) => {
                    warn!(
                        "[Batch {}] Error saving entry {}: {}",
                        result.batch_id, entry.serial_number, e
                    );
                    result.failed_count += 1;
                    result.errors.push(format!(
                        "Error saving payment for {}: {}",
                        entry.serial_number, e
                    ));
                }
            }
        }

        result.success = result.processed_count > 0;
        info!(
            "[Batch {}] Completed. Success: {}, processed: {}, failed: {}",
            result.batch_id, result.success, result.processed_count, result.failed_count
        );
        self.notify_summary(&result);
        result
    }

    fn build_payment(
        &self,
        entry: &PaymentBatchEntry,
        customer: &Customer,
        collection_type: CollectionType,
        date: NaiveDate,
    ) -> Payment {
        let now = Utc::now();
        Payment {
            id: self.id_generator.payment_id_at(now),
            customer_id: customer.id.clone(),
            customer_name: customer.name.clone(),
            serial_number: customer.serial_number.clone(),
            amount: entry.amount,
            date,
            area: customer.area.clone(),
            collection_type,
            payment_method: PaymentMethod::Cash,
            agent_name: entry.agent_name.trim().to_string(),
            notes: Some(format!(
                "Batch payment collected by {}",
                entry.agent_name.trim()
            )),
            receipt_number: Some(
                self.id_generator
                    .receipt_number(&entry.serial_number, now),
            ),
            created_at: now,
        }
    }

    fn notify_summary(&self, result: &BatchResult) {
        let notification = if result.success {
            Notification::success(
                "Batch Payments Recorded",
                format!(
                    "{} payments recorded, {} failed",
                    result.processed_count, result.failed_count
                ),
            )
        } else if result.errors.is_empty() {
            Notification::error("Batch Payment Failed", "No valid payments to record")
        } else {
            Notification::error(
                "Batch Payment Failed",
                format!("{} errors occurred", result.errors.len()),
            )
        };
        self.notification_sink.notify(notification);
    }
}
