// ==========================================
// Выбор подрядчика и поставщика - Пара значений
// ==========================================
// Атомарная единица сравнения "по договору / по факту",
// используется и для цен, и для объемов поставок
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Пара (Pair)
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    /// Ожидаемое значение (по договору).
    pub expected: f64,
    /// Фактическое значение.
    pub actual: f64,
}

impl Pair {
    // Мнемоники колонок таблицы поставок: "{товар} Пд" / "{товар} Пф".
    pub const EXPECTED_MNEMONIC: &'static str = "Пд";
    pub const ACTUAL_MNEMONIC: &'static str = "Пф";

    pub const EXPECTED_TEXT: &'static str = "По договору";
    pub const ACTUAL_TEXT: &'static str = "По факту";

    pub fn new(expected: f64, actual: f64) -> Self {
        Self { expected, actual }
    }

    /// Пара не заполнена, если хотя бы одна из компонент нулевая.
    pub fn has_unset_component(&self) -> bool {
        self.expected == 0.0 || self.actual == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let pair = Pair::default();
        assert_eq!(pair.expected, 0.0);
        assert_eq!(pair.actual, 0.0);
    }

    #[test]
    fn test_has_unset_component() {
        assert!(Pair::default().has_unset_component());
        assert!(Pair::new(8.0, 0.0).has_unset_component());
        assert!(Pair::new(0.0, 10.0).has_unset_component());
        assert!(!Pair::new(8.0, 10.0).has_unset_component());
    }
}
