// ==========================================
// Выбор подрядчика и поставщика - Поставка
// ==========================================
// Поставка = объемы "по договору / по факту" по каждому
// товару за ОДИН месяц активного периода
// ==========================================

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::pair::Pair;
use crate::domain::product::Product;

// ==========================================
// Поставка (Supply)
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Supply {
    /// Название товара -> объемы за месяц.
    pub quantities: HashMap<String, Pair>,
}

impl Supply {
    pub const MONTH_TEXT: &'static str = "Месяц";

    pub fn new(quantities: HashMap<String, Pair>) -> Self {
        Self { quantities }
    }

    /// Поставка с нулевыми объемами по всем перечисленным товарам.
    pub fn filled(products: &[Product]) -> Self {
        let quantities = products
            .iter()
            .map(|product| (product.name.clone(), Pair::default()))
            .collect();
        Self { quantities }
    }

    /// Объем по товару; отсутствующая запись читается как (0, 0),
    /// без записи значения обратно.
    pub fn quantity(&self, product_name: &str) -> Pair {
        self.quantities
            .get(product_name)
            .copied()
            .unwrap_or_default()
    }

    /// Дозаполняет отсутствующие товары нулевыми объемами.
    pub fn fill_missing(&mut self, products: &[Product]) {
        for product in products {
            self.quantities
                .entry(product.name.clone())
                .or_insert_with(Pair::default);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_defaults_to_zero_pair() {
        let supply = Supply::default();
        assert_eq!(supply.quantity("Гравий"), Pair::default());
        // чтение не материализует запись
        assert!(supply.quantities.is_empty());
    }

    #[test]
    fn test_filled_covers_all_products() {
        let products = vec![Product::new("Гравий"), Product::new("Песок")];
        let supply = Supply::filled(&products);
        assert_eq!(supply.quantities.len(), 2);
        assert_eq!(supply.quantity("Песок"), Pair::default());
    }

    #[test]
    fn test_fill_missing_keeps_existing() {
        let products = vec![Product::new("Гравий"), Product::new("Песок")];
        let mut supply = Supply::default();
        supply
            .quantities
            .insert("Гравий".to_string(), Pair::new(100.0, 90.0));
        supply.fill_missing(&products);
        assert_eq!(supply.quantity("Гравий"), Pair::new(100.0, 90.0));
        assert_eq!(supply.quantity("Песок"), Pair::default());
    }
}
