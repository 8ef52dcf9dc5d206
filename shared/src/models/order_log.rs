//! Order Log Entry
//!
//! One row of the spreadsheet order log. Field names are the wire names the
//! logging endpoint expects in its URL-encoded form body.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLogEntry {
    pub timestamp: String,
    pub nama: String,
    pub kelas: String,
    pub nomor_telpon: String,
    pub makanan: String,
    pub jumlah_pesanan: u32,
    pub total_harga: i64,
    pub notes: String,
    pub tipe_pembayaran: String,
}
