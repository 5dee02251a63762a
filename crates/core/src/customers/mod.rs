//! Customers module - borrower and area models.

mod customers_model;


pub use customers_model::{find_by_serial_number, Area, CollectionType, Customer, CustomerStatus};
