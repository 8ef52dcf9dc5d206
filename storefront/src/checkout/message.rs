//! Chat message composition
//!
//! Plain text with WhatsApp markup (`*bold*`, `_italic_`). Output depends
//! only on the arguments.

use shared::models::{CartLine, CheckoutForm, FoodItem};
use shared::money::{format_rupiah, format_total};

/// Shown when the buyer left no notes
pub const NOTES_PLACEHOLDER: &str = "-";

const GREETING: &str = "Halo! Saya mau pesan:";
const FOOTER: &str = "_*[ORDER DANUSAN OSIS]*_";

/// Newline-terminated lines, footer last without a newline
#[derive(Default)]
struct MessageBuilder {
    buf: String,
}

impl MessageBuilder {
    fn write_line(&mut self, line: &str) {
        self.buf.push_str(line);
        self.buf.push('\n');
    }

    fn blank(&mut self) {
        self.buf.push('\n');
    }

    fn finish(mut self) -> String {
        self.buf.push_str(FOOTER);
        self.buf
    }
}

/// Message for a whole cart.
///
/// `notes` is the already-resolved notes text; `None` prints the placeholder.
pub fn cart_message(lines: &[CartLine], total: i64, form: &CheckoutForm, notes: Option<&str>) -> String {
    let mut b = MessageBuilder::default();
    b.write_line(GREETING);
    b.blank();
    for line in lines {
        b.write_line(&format!(
            "🍱 *{}* x{} = {}",
            line.item.name,
            line.quantity,
            format_rupiah(line.line_total())
        ));
    }
    b.blank();
    b.write_line(&format!("💵 Total: {}", format_total(total)));
    order_details(&mut b, form, notes);
    buyer(&mut b, form);
    b.finish()
}

/// Message for a single item ordered from its detail page
pub fn single_item_message(
    item: &FoodItem,
    quantity: u32,
    total: i64,
    form: &CheckoutForm,
    notes: Option<&str>,
) -> String {
    let mut b = MessageBuilder::default();
    b.write_line(GREETING);
    b.blank();
    b.write_line(&format!("🍱 *{}*", item.name));
    b.write_line(&format!("💰 Harga: {}", item.price));
    b.write_line(&format!("🔢 Jumlah: {} pcs", quantity));
    b.write_line(&format!("💵 Total: {}", format_total(total)));
    b.write_line(&format!("📝 {}", item.description_or_default()));
    order_details(&mut b, form, notes);
    buyer(&mut b, form);
    b.finish()
}

fn order_details(b: &mut MessageBuilder, form: &CheckoutForm, notes: Option<&str>) {
    b.write_line(&format!("📋 Catatan: {}", notes.unwrap_or(NOTES_PLACEHOLDER)));
    let payment = form.payment_method.map(|p| p.label()).unwrap_or(NOTES_PLACEHOLDER);
    b.write_line(&format!("💳 Pembayaran: {}", payment));
}

fn buyer(b: &mut MessageBuilder, form: &CheckoutForm) {
    b.blank();
    b.write_line("👤 *Data Pemesan:*");
    b.write_line(&format!("Nama: {}", form.name.trim()));
    b.write_line(&format!("Kelas: {}", form.class_label.trim()));
    b.write_line(&format!("Telpon: {}", form.phone.trim()));
    b.blank();
}
