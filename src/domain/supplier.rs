// ==========================================
// Выбор подрядчика и поставщика - Поставщик
// ==========================================
// Кандидат, оцениваемый расчетными критериями по
// временным рядам поставок и по ценам на товары
// ==========================================

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::pair::Pair;
use crate::domain::period::Period;
use crate::domain::product::Product;
use crate::domain::supply::Supply;

// ==========================================
// Поставщик (Supplier)
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub name: String,
    /// Поставки по месяцам активного периода (одна на месяц).
    pub supplies: Vec<Supply>,
    /// Название товара -> цена (по договору / по факту).
    pub prices: HashMap<String, Pair>,
}

impl Supplier {
    pub const NAME_TEXT: &'static str = "Название";

    pub fn new(
        name: impl Into<String>,
        supplies: Vec<Supply>,
        prices: HashMap<String, Pair>,
    ) -> Self {
        Self {
            name: name.into(),
            supplies,
            prices,
        }
    }

    /// Цена товара; отсутствующая запись читается как (0, 0).
    pub fn price(&self, product_name: &str) -> Pair {
        self.prices.get(product_name).copied().unwrap_or_default()
    }

    /// Явно достраивает структуры поставщика под активный период
    /// и набор товаров: список поставок удлиняется до длины периода,
    /// в каждой поставке и в ценах появляются записи по всем товарам.
    ///
    /// Вызывается при смене периода или набора товаров, чтобы
    /// вычисления читали уже полностью заполненные структуры.
    pub fn normalize(&mut self, products: &[Product], period: &Period) {
        let length = period.length();
        while self.supplies.len() < length {
            self.supplies.push(Supply::filled(products));
        }
        for supply in &mut self.supplies {
            supply.fill_missing(products);
        }
        for product in products {
            self.prices
                .entry(product.name.clone())
                .or_insert_with(Pair::default);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::month::Month;

    #[test]
    fn test_normalize_extends_supplies_to_period_length() {
        let products = vec![Product::new("Гравий")];
        let period = Period::new(Month::November, Month::February);
        let mut supplier = Supplier::default();

        supplier.normalize(&products, &period);

        assert_eq!(supplier.supplies.len(), 4);
        assert!(supplier.prices.contains_key("Гравий"));
    }

    #[test]
    fn test_normalize_keeps_existing_data() {
        let products = vec![Product::new("Гравий"), Product::new("Песок")];
        let period = Period::new(Month::January, Month::February);
        let mut supplier = Supplier::default();
        supplier.supplies.push(Supply::new(
            [("Гравий".to_string(), Pair::new(100.0, 90.0))]
                .into_iter()
                .collect(),
        ));
        supplier
            .prices
            .insert("Гравий".to_string(), Pair::new(8.0, 10.0));

        supplier.normalize(&products, &period);

        assert_eq!(supplier.supplies.len(), 2);
        assert_eq!(supplier.supplies[0].quantity("Гравий"), Pair::new(100.0, 90.0));
        assert_eq!(supplier.supplies[0].quantity("Песок"), Pair::default());
        assert_eq!(supplier.price("Гравий"), Pair::new(8.0, 10.0));
        assert_eq!(supplier.price("Песок"), Pair::default());
    }

    #[test]
    fn test_price_defaults_to_zero_pair() {
        let supplier = Supplier::default();
        assert_eq!(supplier.price("Гравий"), Pair::default());
        assert!(supplier.prices.is_empty());
    }
}
