// ==========================================
// Выбор подрядчика и поставщика - Критерий
// ==========================================
// Именованный фактор модели оценки с весом в [0, 1];
// сумма весов набора критериев должна быть близка к 1
// (проверяется валидацией как предупреждение)
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Критерий (Criterion)
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    /// Значимость: дробный вес от 0 до 1.
    pub value: f64,
}

impl Criterion {
    pub const NAME_TEXT: &'static str = "Название";
    pub const VALUE_TEXT: &'static str = "Значимость";
    pub const FILE_NAME: &'static str = "criteria.csv";

    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
