//! Checkout - validation, order log submission and chat handoff

pub mod dispatcher;
pub mod handoff;
pub mod message;

pub use dispatcher::{CheckoutDispatcher, CheckoutOutcome, CheckoutPhase};
pub use handoff::{BrowserLauncher, ChatHandoff, ChatLauncher, PrintLauncher, RecordingLauncher};
pub use message::{NOTES_PLACEHOLDER, cart_message, single_item_message};
