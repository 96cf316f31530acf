// ==========================================
// Выбор подрядчика и поставщика - API поставщиков
// ==========================================
// Назначение: полный цикл пересчета режима фактических
// поставок: валидация критериев/товаров/периода/поставщиков,
// четыре расчетных критерия, взвешивание, выбор минимума.
// Арифметические сбои (деление на ноль) фатальны для
// текущего расчета и поднимаются как Err
// ==========================================

use serde::Serialize;

use crate::app::AppState;
use crate::engine::{
    aggregate_scores, evaluate, find_best_suppliers, validate_criteria, validate_period,
    validate_products, validate_suppliers, EvalResult, Issue, Problems,
};

// ==========================================
// Результат пересчета
// ==========================================

/// Разбор оценки одного поставщика по расчетным критериям.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierEvaluation {
    pub supplier: String,
    /// Пары (отображаемое название критерия, балл) в порядке вывода.
    pub scores: Vec<(String, f64)>,
    /// Взвешенный итог (меньше - лучше).
    pub total: f64,
}

/// Итог успешного пересчета.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierOutcome {
    pub evaluations: Vec<SupplierEvaluation>,
    pub best: Vec<String>,
}

/// Полный результат пересчета режима фактических поставок.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierRunResult {
    pub criteria_problems: Problems,
    pub products_problems: Problems,
    pub period_problems: Problems,
    pub suppliers_problems: Problems,
    /// `None`, пока ошибки валидации не устранены.
    pub outcome: Option<SupplierOutcome>,
}

impl SupplierRunResult {
    fn blocked(
        criteria_problems: Problems,
        products_problems: Problems,
        period_problems: Problems,
        suppliers_problems: Problems,
    ) -> Self {
        Self {
            criteria_problems,
            products_problems,
            period_problems,
            suppliers_problems,
            outcome: None,
        }
    }
}

// ==========================================
// SupplierApi
// ==========================================
pub struct SupplierApi;

impl SupplierApi {
    /// Выполняет полный проход пересчета по состоянию сессии.
    ///
    /// Ввод поставщиков блокируется, пока есть ошибки в критериях,
    /// товарах или периоде (как и в исходном приложении). Итог
    /// вычисляется только при отсутствии ошибок всех наборов.
    pub fn run(state: &AppState) -> EvalResult<SupplierRunResult> {
        tracing::debug!(
            suppliers = state.suppliers.len(),
            products = state.products.len(),
            period_months = state.period.length(),
            "пересчет режима фактических поставок"
        );

        let criteria_problems = validate_criteria(&state.supply_criteria);
        let products_problems = validate_products(&state.products);
        let period_problems = validate_period(&state.period);

        if criteria_problems.has_errors()
            || products_problems.has_errors()
            || period_problems.has_errors()
        {
            let mut suppliers_problems = Problems::new();
            suppliers_problems.push(Issue::SuppliersBlocked);
            return Ok(SupplierRunResult::blocked(
                criteria_problems,
                products_problems,
                period_problems,
                suppliers_problems,
            ));
        }

        let suppliers_problems = validate_suppliers(&state.suppliers, &state.products);
        if suppliers_problems.has_errors() {
            return Ok(SupplierRunResult::blocked(
                criteria_problems,
                products_problems,
                period_problems,
                suppliers_problems,
            ));
        }

        let mut evaluations = Vec::with_capacity(state.suppliers.len());
        let mut totals = Vec::with_capacity(state.suppliers.len());
        for supplier in &state.suppliers {
            let scores = evaluate(supplier, &state.products, &state.period)?;
            let total = aggregate_scores(&scores, &state.supply_criteria);
            evaluations.push(SupplierEvaluation {
                supplier: supplier.name.clone(),
                scores: scores
                    .iter()
                    .map(|(criterion, score)| (criterion.display_name().to_string(), score))
                    .collect(),
                total,
            });
            totals.push(total);
        }

        let best = find_best_suppliers(&state.suppliers, &totals)?
            .into_iter()
            .map(|supplier| supplier.name.clone())
            .collect();

        tracing::info!(best = ?best, "лучшие поставщики определены");

        Ok(SupplierRunResult {
            criteria_problems,
            products_problems,
            period_problems,
            suppliers_problems,
            outcome: Some(SupplierOutcome { evaluations, best }),
        })
    }
}
