// ==========================================
// Выбор подрядчика и поставщика - Товар
// ==========================================

use serde::{Deserialize, Serialize};

/// Товар: ключ колонок в таблице поставок и в ценах поставщика.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
}

impl Product {
    pub const NAME_TEXT: &'static str = "Название";

    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
