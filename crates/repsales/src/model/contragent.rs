//! Contragent (counterparty) records.

use serde::{Deserialize, Serialize};

/// A sales counterparty: a company, sole proprietor, or individual.
///
/// Read-only from the client's perspective; the backend sends the whole
/// directory in one response, using its own field names on the wire. The
/// `name` acts as the identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contragent {
    #[serde(rename = "Контрагент")]
    pub name: String,

    /// Legal form (company, sole proprietor, individual).
    #[serde(rename = "ТипЛица")]
    pub kind: String,

    #[serde(rename = "Адрес")]
    pub address: String,

    /// Timestamp of the most recent order, as a "dd.MM.yyyy H:mm:ss" string.
    #[serde(rename = "ПоследнийЗаказ")]
    pub last_order: String,

    #[serde(rename = "СреднийЧек")]
    pub average_check: f64,

    #[serde(rename = "КоличествоЗаказов")]
    pub orders_count: u32,

    #[serde(rename = "ОбщаяСуммаЗаказов")]
    pub total_orders_sum: f64,

    /// Derived classification label ("VIP client", "Regular client", …),
    /// computed by the backend.
    #[serde(rename = "Сегмент")]
    pub segment: String,
}

impl Contragent {
    /// Last-order timestamp formatted for display; the raw backend string
    /// when it does not parse.
    pub fn last_order_display(&self) -> String {
        crate::dates::readable_date_time(&self.last_order)
    }
}
