//! Domain models

pub mod cart;
pub mod checkout;
pub mod food;
pub mod order_log;

pub use cart::CartLine;
pub use checkout::{CheckoutForm, PaymentMethod};
pub use food::{DEFAULT_DESCRIPTION, FoodItem, split_categories};
pub use order_log::OrderLogEntry;
