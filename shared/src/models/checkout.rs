//! Checkout Form Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payment method offered at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Qris,
}

impl PaymentMethod {
    /// Value sent to the order log (`tipe_pembayaran`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Qris => "qris",
        }
    }

    /// Label used in the chat message
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Tunai (Cash)",
            Self::Qris => "QRIS",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cash" | "tunai" => Ok(Self::Cash),
            "qris" => Ok(Self::Qris),
            other => Err(format!("unknown payment method: {}", other)),
        }
    }
}

/// Buyer details collected before an order is dispatched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    /// Buyer name (`nama`)
    pub name: String,
    /// Class / group label (`kelas`), e.g. "X RPL 1"
    pub class_label: String,
    /// Phone number (`nomor_telpon`)
    pub phone: String,
    /// Free text, optional
    #[serde(default)]
    pub notes: String,
    pub payment_method: Option<PaymentMethod>,
}

impl CheckoutForm {
    pub fn new(
        name: impl Into<String>,
        class_label: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            class_label: class_label.into(),
            phone: phone.into(),
            ..Default::default()
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_payment(mut self, method: PaymentMethod) -> Self {
        self.payment_method = Some(method);
        self
    }

    /// Whether every required field has content (submit button enabled)
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.class_label.trim().is_empty()
            && !self.phone.trim().is_empty()
            && self.payment_method.is_some()
    }

    /// Notes trimmed, `None` when blank
    pub fn notes(&self) -> Option<&str> {
        let trimmed = self.notes.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}
