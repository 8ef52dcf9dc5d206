//! Checkout dispatcher
//!
//! `Idle → Validating → Submitting → {Succeeded, FailedFallback}`
//!
//! The order log is a side channel: a failed POST only moves the checkout to
//! `FailedFallback`, which still produces and opens the chat link. The chat
//! message is the order confirmation the stall acts on.

use std::sync::Arc;
use std::time::Duration;

use danten_client::{ClientResult, OrderLog};
use shared::models::{CheckoutForm, FoodItem, OrderLogEntry, PaymentMethod};
use shared::util::now_id_locale;

use super::handoff::{ChatHandoff, ChatLauncher};
use super::message::{self, NOTES_PLACEHOLDER};
use crate::cart::Cart;
use crate::core::StorefrontProfile;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_phone, validate_required_text, validate_text_len,
};
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    FailedFallback,
}

impl CheckoutPhase {
    /// Whether a chat link has been produced
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::FailedFallback)
    }
}

/// Result of one dispatched order
#[derive(Debug, Clone)]
pub struct CheckoutOutcome {
    pub phase: CheckoutPhase,
    pub message: String,
    pub chat_url: String,
    pub total: i64,
    /// Rows accepted by the order log before it stopped
    pub logged: usize,
    /// `OrderLogFailed`, with the transport error as `cause`
    pub log_error: Option<AppError>,
    /// Whether the launcher accepted the chat link
    pub launched: bool,
}

impl CheckoutOutcome {
    pub fn succeeded(&self) -> bool {
        self.phase == CheckoutPhase::Succeeded
    }
}

/// Order prepared for submission
struct PreparedOrder {
    entries: Vec<OrderLogEntry>,
    message: String,
    total: i64,
}

pub struct CheckoutDispatcher {
    order_log: Arc<dyn OrderLog>,
    launcher: Arc<dyn ChatLauncher>,
    handoff: ChatHandoff,
    profile: StorefrontProfile,
    success_delay: Duration,
    phase: CheckoutPhase,
}

impl CheckoutDispatcher {
    pub fn new(
        order_log: Arc<dyn OrderLog>,
        launcher: Arc<dyn ChatLauncher>,
        handoff: ChatHandoff,
        profile: StorefrontProfile,
    ) -> Self {
        Self {
            order_log,
            launcher,
            handoff,
            profile,
            success_delay: Duration::ZERO,
            phase: CheckoutPhase::Idle,
        }
    }

    /// Pause between a logged order and the confirmation
    pub fn with_success_delay(mut self, delay: Duration) -> Self {
        self.success_delay = delay;
        self
    }

    pub fn phase(&self) -> CheckoutPhase {
        self.phase
    }

    pub fn profile(&self) -> &StorefrontProfile {
        &self.profile
    }

    /// Back to `Idle` for the next attempt
    pub fn reset(&mut self) {
        self.phase = CheckoutPhase::Idle;
    }

    /// Check the buyer form; the profile decides whether notes count.
    pub fn validate(&self, form: &CheckoutForm) -> AppResult<PaymentMethod> {
        validate_required_text(&form.name, "nama", MAX_NAME_LEN)?;
        validate_required_text(&form.class_label, "kelas", MAX_NAME_LEN)?;
        validate_phone(&form.phone)?;
        let payment = form
            .payment_method
            .ok_or_else(|| AppError::new(ErrorCode::PaymentMethodRequired))?;
        if self.profile.collect_notes {
            validate_text_len(&form.notes, "notes", MAX_NOTE_LEN)?;
        }
        Ok(payment)
    }

    /// Dispatch every cart line. The cart is cleared only on success.
    pub async fn checkout_cart(
        &mut self,
        cart: &mut Cart,
        form: &CheckoutForm,
    ) -> AppResult<CheckoutOutcome> {
        let order = self.guard(|this| {
            let payment = this.validate(form)?;
            if cart.is_empty() {
                return Err(AppError::new(ErrorCode::CartEmpty));
            }
            Ok(this.prepare_cart(cart, form, payment))
        })?;

        let outcome = self.dispatch(order).await;
        if outcome.succeeded() {
            cart.clear();
        }
        Ok(outcome)
    }

    /// Dispatch one item straight from its detail page.
    ///
    /// A quantity of 0 is ordered as 1.
    pub async fn order_single(
        &mut self,
        item: &FoodItem,
        quantity: u32,
        form: &CheckoutForm,
    ) -> AppResult<CheckoutOutcome> {
        let order = self.guard(|this| {
            let payment = this.validate(form)?;
            Ok(this.prepare_single(item, quantity.max(1), form, payment))
        })?;

        Ok(self.dispatch(order).await)
    }

    /// Run validation in the `Validating` phase; failures land back in `Idle`.
    fn guard<F>(&mut self, validate: F) -> AppResult<PreparedOrder>
    where
        F: FnOnce(&Self) -> AppResult<PreparedOrder>,
    {
        self.phase = CheckoutPhase::Validating;
        match validate(self) {
            Ok(order) => Ok(order),
            Err(e) => {
                tracing::debug!(code = %e.code, message = %e.message, "Checkout rejected");
                self.phase = CheckoutPhase::Idle;
                Err(e)
            }
        }
    }

    fn notes<'a>(&self, form: &'a CheckoutForm) -> Option<&'a str> {
        if self.profile.collect_notes {
            form.notes()
        } else {
            None
        }
    }

    fn prepare_cart(&self, cart: &Cart, form: &CheckoutForm, payment: PaymentMethod) -> PreparedOrder {
        let timestamp = now_id_locale();
        let notes = self.notes(form);
        let entries = cart
            .lines()
            .iter()
            .map(|line| {
                log_entry(
                    &timestamp,
                    form,
                    &line.item.name,
                    line.quantity,
                    line.line_total(),
                    notes,
                    payment,
                )
            })
            .collect();
        let total = cart.total();
        PreparedOrder {
            entries,
            message: message::cart_message(cart.lines(), total, form, notes),
            total,
        }
    }

    fn prepare_single(
        &self,
        item: &FoodItem,
        quantity: u32,
        form: &CheckoutForm,
        payment: PaymentMethod,
    ) -> PreparedOrder {
        let notes = self.notes(form);
        let total = item.unit_price().saturating_mul(i64::from(quantity));
        let entry = log_entry(&now_id_locale(), form, &item.name, quantity, total, notes, payment);
        PreparedOrder {
            entries: vec![entry],
            message: message::single_item_message(item, quantity, total, form, notes),
            total,
        }
    }

    /// Attempt the order log, then hand off to chat either way
    async fn dispatch(&mut self, order: PreparedOrder) -> CheckoutOutcome {
        self.phase = CheckoutPhase::Submitting;
        let (logged, result) = self.submit_entries(&order.entries).await;

        let log_error = match result {
            Ok(()) => {
                tracing::info!(rows = logged, total = order.total, "Order logged");
                if !self.success_delay.is_zero() {
                    tokio::time::sleep(self.success_delay).await;
                }
                self.phase = CheckoutPhase::Succeeded;
                None
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    code = %e.code(),
                    logged,
                    "Order log failed, falling back to chat"
                );
                self.phase = CheckoutPhase::FailedFallback;
                Some(
                    AppError::new(ErrorCode::OrderLogFailed)
                        .with_detail("cause", e.to_string())
                        .with_detail("logged", logged),
                )
            }
        };

        let chat_url = self.handoff.link(&order.message);
        let launched = match self.launcher.launch(&chat_url) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to open chat link");
                false
            }
        };

        CheckoutOutcome {
            phase: self.phase,
            message: order.message,
            chat_url,
            total: order.total,
            logged,
            log_error,
            launched,
        }
    }

    /// POST rows in order, stopping at the first failure
    async fn submit_entries(&self, entries: &[OrderLogEntry]) -> (usize, ClientResult<()>) {
        for (i, entry) in entries.iter().enumerate() {
            if let Err(e) = self.order_log.submit(entry).await {
                return (i, Err(e));
            }
        }
        (entries.len(), Ok(()))
    }
}

fn log_entry(
    timestamp: &str,
    form: &CheckoutForm,
    food: &str,
    quantity: u32,
    total: i64,
    notes: Option<&str>,
    payment: PaymentMethod,
) -> OrderLogEntry {
    OrderLogEntry {
        timestamp: timestamp.to_string(),
        nama: form.name.trim().to_string(),
        kelas: form.class_label.trim().to_string(),
        nomor_telpon: form.phone.trim().to_string(),
        makanan: food.to_string(),
        jumlah_pesanan: quantity,
        total_harga: total,
        notes: notes.unwrap_or(NOTES_PLACEHOLDER).to_string(),
        tipe_pembayaran: payment.as_str().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::handoff::RecordingLauncher;
    use async_trait::async_trait;
    use danten_client::ClientError;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct FakeLog {
        rows: Mutex<Vec<OrderLogEntry>>,
        fail_after: Option<usize>,
    }

    #[async_trait]
    impl OrderLog for FakeLog {
        async fn submit(&self, entry: &OrderLogEntry) -> ClientResult<()> {
            let mut rows = self.rows.lock();
            if self.fail_after.is_some_and(|n| rows.len() >= n) {
                return Err(ClientError::Status {
                    status: 500,
                    body: "boom".into(),
                });
            }
            rows.push(entry.clone());
            Ok(())
        }
    }

    fn dispatcher(log: Arc<FakeLog>, profile: StorefrontProfile) -> CheckoutDispatcher {
        CheckoutDispatcher::new(
            log,
            Arc::new(RecordingLauncher::new()),
            ChatHandoff::new("6283856278811"),
            profile,
        )
    }

    fn form() -> CheckoutForm {
        CheckoutForm::new("Budi", "X RPL 1", "081234567890").with_payment(PaymentMethod::Cash)
    }

    fn cart() -> Cart {
        let mut cart = Cart::in_memory();
        cart.add_item(FoodItem::new("1", "Ayam Geprek", "Rp 10.000"));
        cart.add_item(FoodItem::new("1", "Ayam Geprek", "Rp 10.000"));
        cart.add_item(FoodItem::new("2", "Cireng", "Rp 5.000"));
        cart
    }

    #[tokio::test]
    async fn test_validation_failure_returns_to_idle() {
        let log = Arc::new(FakeLog::default());
        let mut d = dispatcher(log.clone(), StorefrontProfile::cart());
        let mut cart = cart();

        let no_payment = CheckoutForm::new("Budi", "X RPL 1", "081234567890");
        let err = d.checkout_cart(&mut cart, &no_payment).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::PaymentMethodRequired);
        assert_eq!(d.phase(), CheckoutPhase::Idle);

        let bad_phone = CheckoutForm {
            phone: "12345".into(),
            ..form()
        };
        let err = d.checkout_cart(&mut cart, &bad_phone).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPhone);

        let blank_class = CheckoutForm {
            class_label: "  ".into(),
            ..form()
        };
        let err = d.checkout_cart(&mut cart, &blank_class).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.field(), Some("kelas"));

        assert!(log.rows.lock().is_empty());
        assert_eq!(cart.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_cart_rejected() {
        let mut d = dispatcher(Arc::new(FakeLog::default()), StorefrontProfile::cart());
        let err = d.checkout_cart(&mut Cart::in_memory(), &form()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CartEmpty);
        assert_eq!(d.phase(), CheckoutPhase::Idle);
    }

    #[tokio::test]
    async fn test_success_logs_each_line_and_clears_cart() {
        let log = Arc::new(FakeLog::default());
        let mut d = dispatcher(log.clone(), StorefrontProfile::cart());
        let mut cart = cart();

        let outcome = d
            .checkout_cart(&mut cart, &form().with_notes("tanpa saus"))
            .await
            .unwrap();
        assert_eq!(outcome.phase, CheckoutPhase::Succeeded);
        assert_eq!(d.phase(), CheckoutPhase::Succeeded);
        assert_eq!(outcome.total, 25000);
        assert_eq!(outcome.logged, 2);
        assert!(outcome.launched);
        assert!(cart.is_empty());

        let rows = log.rows.lock();
        assert_eq!(rows[0].makanan, "Ayam Geprek");
        assert_eq!(rows[0].jumlah_pesanan, 2);
        assert_eq!(rows[0].total_harga, 20000);
        assert_eq!(rows[0].notes, "tanpa saus");
        assert_eq!(rows[1].tipe_pembayaran, "cash");
        assert_eq!(rows[0].timestamp, rows[1].timestamp);
    }

    #[tokio::test]
    async fn test_failure_falls_back_and_keeps_cart() {
        let log = Arc::new(FakeLog {
            fail_after: Some(1),
            ..Default::default()
        });
        let mut d = dispatcher(log.clone(), StorefrontProfile::cart());
        let mut cart = cart();

        let outcome = d.checkout_cart(&mut cart, &form()).await.unwrap();
        assert_eq!(outcome.phase, CheckoutPhase::FailedFallback);
        assert_eq!(outcome.logged, 1);
        let log_error = outcome.log_error.unwrap();
        assert_eq!(log_error.code, ErrorCode::OrderLogFailed);
        assert!(log_error.detail("cause").unwrap().as_str().unwrap().contains("500"));
        assert!(outcome.message.contains("25.000"));
        assert!(outcome.chat_url.starts_with("https://wa.me/6283856278811?text="));
        assert_eq!(cart.len(), 2);

        d.reset();
        assert_eq!(d.phase(), CheckoutPhase::Idle);
    }

    #[tokio::test]
    async fn test_detail_profile_ignores_notes() {
        let log = Arc::new(FakeLog::default());
        let mut d = dispatcher(log.clone(), StorefrontProfile::detail());
        let item = FoodItem::new("3", "Nugget", "Rp 8.000");

        let outcome = d
            .order_single(&item, 3, &form().with_notes("x".repeat(600)))
            .await
            .unwrap();
        assert!(outcome.succeeded());
        assert_eq!(outcome.total, 24000);
        assert!(outcome.message.contains("📋 Catatan: -"));
        assert_eq!(log.rows.lock()[0].notes, "-");
    }

    #[tokio::test]
    async fn test_single_zero_quantity_orders_one() {
        let log = Arc::new(FakeLog::default());
        let mut d = dispatcher(log.clone(), StorefrontProfile::detail());
        let item = FoodItem::new("3", "Nugget", "Rp 8.000");
        let outcome = d.order_single(&item, 0, &form()).await.unwrap();
        assert!(outcome.succeeded());
        assert!(d.phase().is_terminal());
        assert_eq!(outcome.total, 8000);
        assert!(outcome.message.contains("🔢 Jumlah: 1 pcs"));
        assert_eq!(log.rows.lock()[0].jumlah_pesanan, 1);
    }

    #[tokio::test]
    async fn test_single_huge_order_total_saturates() {
        let log = Arc::new(FakeLog::default());
        let mut d = dispatcher(log.clone(), StorefrontProfile::detail());
        let item = FoodItem::new("9", "Mahal", "Rp 9.000.000.000");
        let outcome = d.order_single(&item, u32::MAX, &form()).await.unwrap();
        assert_eq!(outcome.total, i64::MAX);
        assert_eq!(log.rows.lock()[0].total_harga, i64::MAX);
    }

    #[tokio::test]
    async fn test_long_notes_rejected_when_collected() {
        let mut d = dispatcher(Arc::new(FakeLog::default()), StorefrontProfile::cart());
        let err = d
            .checkout_cart(&mut cart(), &form().with_notes("x".repeat(501)))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }
}
