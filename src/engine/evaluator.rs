// ==========================================
// Выбор подрядчика и поставщика - Оценка поставщика
// ==========================================
// Четыре независимых расчетных критерия поверх
// агрегированных за период объемов поставок и цен.
// Красная линия: чистые функции, без мутации входных данных
// ==========================================

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{Pair, Period, Product, Supplier};
use crate::engine::error::{EvalError, EvalResult};

// ==========================================
// Расчетный критерий (SupplierCriterion)
// ==========================================
// Отображаемые названия фиксированы и должны дословно
// совпадать с названиями настроенных критериев, чтобы
// взвешивание их учло (см. политику в aggregate_scores)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupplierCriterion {
    Volume,
    Price,
    Assortment,
    Rhythm,
}

impl SupplierCriterion {
    /// Все расчетные критерии в порядке вывода.
    pub const ALL: [SupplierCriterion; 4] = [
        SupplierCriterion::Volume,
        SupplierCriterion::Price,
        SupplierCriterion::Assortment,
        SupplierCriterion::Rhythm,
    ];

    /// Отображаемое название критерия.
    pub fn display_name(self) -> &'static str {
        match self {
            SupplierCriterion::Volume => "Объем",
            SupplierCriterion::Price => "Цена",
            SupplierCriterion::Assortment => "Ассортимент",
            SupplierCriterion::Rhythm => "Ритмичность",
        }
    }

    /// Критерий по отображаемому названию.
    pub fn from_display_name(name: &str) -> Option<SupplierCriterion> {
        SupplierCriterion::ALL
            .into_iter()
            .find(|criterion| criterion.display_name() == name)
    }
}

// ==========================================
// Результат оценки (SupplierScores)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SupplierScores {
    pub volume: f64,
    pub price: f64,
    pub assortment: f64,
    pub rhythm: f64,
}

impl SupplierScores {
    /// Балл по расчетному критерию.
    pub fn get(&self, criterion: SupplierCriterion) -> f64 {
        match criterion {
            SupplierCriterion::Volume => self.volume,
            SupplierCriterion::Price => self.price,
            SupplierCriterion::Assortment => self.assortment,
            SupplierCriterion::Rhythm => self.rhythm,
        }
    }

    /// Балл по отображаемому названию критерия.
    ///
    /// Возвращает `None`, если название не совпадает ни с одним
    /// из четырех фиксированных названий.
    pub fn by_name(&self, name: &str) -> Option<f64> {
        SupplierCriterion::from_display_name(name).map(|criterion| self.get(criterion))
    }

    /// Пары (критерий, балл) в порядке вывода.
    pub fn iter(&self) -> impl Iterator<Item = (SupplierCriterion, f64)> + '_ {
        SupplierCriterion::ALL
            .into_iter()
            .map(move |criterion| (criterion, self.get(criterion)))
    }
}

// ==========================================
// Агрегация поставок
// ==========================================

/// Суммирует объемы поставок по каждому товару за все месяцы периода.
///
/// Учитываются ровно `period.length()` месяцев: отсутствующие
/// поставки читаются как пустые, поставки за пределами периода
/// игнорируются. Входные данные не мутируются.
pub fn sum_supplies(
    supplier: &Supplier,
    products: &[Product],
    period: &Period,
) -> HashMap<String, Pair> {
    let mut totals = HashMap::with_capacity(products.len());
    for product in products {
        let mut total = Pair::default();
        for month_index in 0..period.length() {
            let quantity = supplier
                .supplies
                .get(month_index)
                .map(|supply| supply.quantity(&product.name))
                .unwrap_or_default();
            total.expected += quantity.expected;
            total.actual += quantity.actual;
        }
        totals.insert(product.name.clone(), total);
    }
    totals
}

// ==========================================
// Четыре расчетных критерия
// ==========================================

/// Объем: |1 - Σ(Цф * Оф) / Σ(Цф * Од)|.
///
/// Отклонение фактически оплаченного фактического объема от
/// фактически оплаченного договорного объема, по всем товарам
/// с общим числителем и знаменателем.
fn criterion_volume(
    supplier: &Supplier,
    products: &[Product],
    totals: &HashMap<String, Pair>,
) -> EvalResult<f64> {
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for product in products {
        let price = supplier.price(&product.name);
        let quantity = totals.get(&product.name).copied().unwrap_or_default();
        numerator += price.actual * quantity.actual;
        denominator += price.actual * quantity.expected;
    }
    if denominator == 0.0 {
        return Err(EvalError::DivisionByZero {
            criterion: SupplierCriterion::Volume.display_name(),
            denominator: "сумма (фактическая цена * договорный объем)",
        });
    }
    Ok((1.0 - numerator / denominator).abs())
}

/// Цена: Σ(Цф * Оф) / Σ(Цд * Оф).
///
/// Отношение фактически уплаченного к тому, что было бы
/// уплачено по договорным ценам за фактические объемы.
fn criterion_price(
    supplier: &Supplier,
    products: &[Product],
    totals: &HashMap<String, Pair>,
) -> EvalResult<f64> {
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for product in products {
        let price = supplier.price(&product.name);
        let quantity = totals.get(&product.name).copied().unwrap_or_default();
        numerator += price.actual * quantity.actual;
        denominator += price.expected * quantity.actual;
    }
    if denominator == 0.0 {
        return Err(EvalError::DivisionByZero {
            criterion: SupplierCriterion::Price.display_name(),
            denominator: "сумма (договорная цена * фактический объем)",
        });
    }
    Ok(numerator / denominator)
}

/// Ассортимент: Σ |Оф - Од| / Σ Од по всем товарам и месяцам.
///
/// Считается помесячно, без предварительной агрегации объемов.
fn criterion_assortment(
    supplier: &Supplier,
    products: &[Product],
    period: &Period,
) -> EvalResult<f64> {
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for product in products {
        for month_index in 0..period.length() {
            let quantity = supplier
                .supplies
                .get(month_index)
                .map(|supply| supply.quantity(&product.name))
                .unwrap_or_default();
            numerator += (quantity.actual - quantity.expected).abs();
            denominator += quantity.expected;
        }
    }
    if denominator == 0.0 {
        return Err(EvalError::DivisionByZero {
            criterion: SupplierCriterion::Assortment.display_name(),
            denominator: "сумма договорных объемов",
        });
    }
    Ok(numerator / denominator)
}

/// Ритмичность: Σ |1 - Оф / Од| по всем товарам и месяцам.
///
/// Сумма относительных помесячных отклонений, без нормировки
/// на число слагаемых.
fn criterion_rhythm(
    supplier: &Supplier,
    products: &[Product],
    period: &Period,
) -> EvalResult<f64> {
    let mut result = 0.0;
    for product in products {
        for month_index in 0..period.length() {
            let quantity = supplier
                .supplies
                .get(month_index)
                .map(|supply| supply.quantity(&product.name))
                .unwrap_or_default();
            if quantity.expected == 0.0 {
                return Err(EvalError::DivisionByZero {
                    criterion: SupplierCriterion::Rhythm.display_name(),
                    denominator: "договорный объем за месяц",
                });
            }
            result += (1.0 - quantity.actual / quantity.expected).abs();
        }
    }
    Ok(result)
}

/// Вычисляет все четыре расчетных критерия поставщика за период.
///
/// Нулевой знаменатель любого из критериев - фатальная ошибка
/// текущего расчета, а не молчаливый 0/NaN.
pub fn evaluate(
    supplier: &Supplier,
    products: &[Product],
    period: &Period,
) -> EvalResult<SupplierScores> {
    let totals = sum_supplies(supplier, products, period);
    Ok(SupplierScores {
        volume: criterion_volume(supplier, products, &totals)?,
        price: criterion_price(supplier, products, &totals)?,
        assortment: criterion_assortment(supplier, products, period)?,
        rhythm: criterion_rhythm(supplier, products, period)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Month, Supply};

    // ==========================================
    // Тестовые помощники
    // ==========================================

    /// Поставщик с одним товаром "Гравий" за один месяц:
    /// цена 8 по договору / 10 по факту,
    /// объем 100 по договору / 90 по факту.
    fn create_test_supplier() -> (Supplier, Vec<Product>, Period) {
        let products = vec![Product::new("Гравий")];
        let period = Period::new(Month::January, Month::January);
        let supply = Supply::new(
            [("Гравий".to_string(), Pair::new(100.0, 90.0))]
                .into_iter()
                .collect(),
        );
        let supplier = Supplier::new(
            "Стройбаза",
            vec![supply],
            [("Гравий".to_string(), Pair::new(8.0, 10.0))]
                .into_iter()
                .collect(),
        );
        (supplier, products, period)
    }

    #[test]
    fn test_sum_supplies_over_period() {
        let products = vec![Product::new("Гравий")];
        let period = Period::new(Month::January, Month::February);
        let month1 = Supply::new(
            [("Гравий".to_string(), Pair::new(100.0, 90.0))]
                .into_iter()
                .collect(),
        );
        let month2 = Supply::new(
            [("Гравий".to_string(), Pair::new(50.0, 60.0))]
                .into_iter()
                .collect(),
        );
        // третий месяц за пределами периода игнорируется
        let month3 = Supply::new(
            [("Гравий".to_string(), Pair::new(999.0, 999.0))]
                .into_iter()
                .collect(),
        );
        let supplier = Supplier::new("X", vec![month1, month2, month3], HashMap::new());

        let totals = sum_supplies(&supplier, &products, &period);

        assert_eq!(totals["Гравий"], Pair::new(150.0, 150.0));
    }

    #[test]
    fn test_sum_supplies_missing_months_count_as_empty() {
        let products = vec![Product::new("Гравий")];
        let period = Period::new(Month::January, Month::March);
        let month1 = Supply::new(
            [("Гравий".to_string(), Pair::new(100.0, 90.0))]
                .into_iter()
                .collect(),
        );
        let supplier = Supplier::new("X", vec![month1], HashMap::new());

        let totals = sum_supplies(&supplier, &products, &period);

        assert_eq!(totals["Гравий"], Pair::new(100.0, 90.0));
        // чтение не дозаполняет структуры поставщика
        assert_eq!(supplier.supplies.len(), 1);
    }

    #[test]
    fn test_known_scenario_all_criteria() {
        let (supplier, products, period) = create_test_supplier();

        let scores = evaluate(&supplier, &products, &period).unwrap();

        // объем: |1 - (10*90)/(10*100)| = 0.1
        assert!((scores.volume - 0.1).abs() < 1e-12);
        // цена: (10*90)/(8*90) = 1.25
        assert!((scores.price - 1.25).abs() < 1e-12);
        // ассортимент: |90-100|/100 = 0.1
        assert!((scores.assortment - 0.1).abs() < 1e-12);
        // ритмичность: |1 - 90/100| = 0.1
        assert!((scores.rhythm - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_zero_actual_price_fails_volume_criterion() {
        let (mut supplier, products, period) = create_test_supplier();
        supplier
            .prices
            .insert("Гравий".to_string(), Pair::new(8.0, 0.0));

        let result = evaluate(&supplier, &products, &period);

        assert!(matches!(
            result,
            Err(EvalError::DivisionByZero { criterion, .. })
                if criterion == SupplierCriterion::Volume.display_name()
        ));
    }

    #[test]
    fn test_zero_expected_price_fails_price_criterion() {
        let (mut supplier, products, period) = create_test_supplier();
        supplier
            .prices
            .insert("Гравий".to_string(), Pair::new(0.0, 10.0));

        let result = evaluate(&supplier, &products, &period);

        assert!(matches!(
            result,
            Err(EvalError::DivisionByZero { criterion, .. })
                if criterion == SupplierCriterion::Price.display_name()
        ));
    }

    #[test]
    fn test_zero_monthly_expected_quantity_fails_rhythm_criterion() {
        let products = vec![Product::new("Гравий")];
        let period = Period::new(Month::January, Month::February);
        let month1 = Supply::new(
            [("Гравий".to_string(), Pair::new(100.0, 90.0))]
                .into_iter()
                .collect(),
        );
        // во втором месяце договорный объем нулевой
        let month2 = Supply::new(
            [("Гравий".to_string(), Pair::new(0.0, 10.0))]
                .into_iter()
                .collect(),
        );
        let supplier = Supplier::new(
            "X",
            vec![month1, month2],
            [("Гравий".to_string(), Pair::new(8.0, 10.0))]
                .into_iter()
                .collect(),
        );

        let result = evaluate(&supplier, &products, &period);

        assert!(matches!(
            result,
            Err(EvalError::DivisionByZero { criterion, .. })
                if criterion == SupplierCriterion::Rhythm.display_name()
        ));
    }

    #[test]
    fn test_assortment_is_monthly_not_preaggregated() {
        // два месяца с противоположными отклонениями: агрегат за период
        // дал бы 0, помесячный расчет - 20/150
        let products = vec![Product::new("Гравий")];
        let period = Period::new(Month::January, Month::February);
        let month1 = Supply::new(
            [("Гравий".to_string(), Pair::new(100.0, 110.0))]
                .into_iter()
                .collect(),
        );
        let month2 = Supply::new(
            [("Гравий".to_string(), Pair::new(50.0, 40.0))]
                .into_iter()
                .collect(),
        );
        let supplier = Supplier::new(
            "X",
            vec![month1, month2],
            [("Гравий".to_string(), Pair::new(8.0, 10.0))]
                .into_iter()
                .collect(),
        );

        let scores = evaluate(&supplier, &products, &period).unwrap();

        assert!((scores.assortment - 20.0 / 150.0).abs() < 1e-12);
    }

    #[test]
    fn test_scores_by_display_name() {
        let (supplier, products, period) = create_test_supplier();
        let scores = evaluate(&supplier, &products, &period).unwrap();

        assert_eq!(scores.by_name("Цена"), Some(scores.price));
        assert_eq!(scores.by_name("Ритмичность"), Some(scores.rhythm));
        assert_eq!(scores.by_name("Надежность"), None);
    }
}
