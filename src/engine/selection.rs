// ==========================================
// Выбор подрядчика и поставщика - Выбор лучшего
// ==========================================
// Взвешенная агрегация и выбор лучших кандидатов с
// учетом ничьих по толерантности плавающей точки.
// Направления выбора намеренно различаются:
// подрядчик - максимум (полезность), поставщик -
// минимум (отклонение/стоимость)
// ==========================================

use crate::domain::{Contractor, Criterion, Supplier};
use crate::engine::error::{EvalError, EvalResult};
use crate::engine::evaluator::SupplierScores;
use crate::engine::numeric::is_close;

/// Взвешенная агрегация баллов поставщика:
/// Σ вес(критерий) * балл(название критерия).
///
/// Политика несовпадения названий (задокументирована, не
/// исправляется автоматически): настроенный критерий, название
/// которого не совпадает ни с одним из четырех фиксированных
/// названий расчетных критериев, вносит в сумму 0.
pub fn aggregate_scores(scores: &SupplierScores, criteria: &[Criterion]) -> f64 {
    criteria
        .iter()
        .map(|criterion| criterion.value * scores.by_name(&criterion.name).unwrap_or(0.0))
        .sum()
}

/// Индексы кандидатов, чей итог близок к экстремуму.
///
/// Ничья определяется через `is_close`, а не точное равенство.
fn closest_to_extremum(totals: &[f64], pick_minimum: bool) -> EvalResult<Vec<usize>> {
    if totals.is_empty() {
        return Err(EvalError::NoCandidates);
    }
    let extremum = totals
        .iter()
        .copied()
        .fold(if pick_minimum { f64::INFINITY } else { f64::NEG_INFINITY }, |acc, total| {
            if pick_minimum {
                acc.min(total)
            } else {
                acc.max(total)
            }
        });
    Ok(totals
        .iter()
        .enumerate()
        .filter(|(_, total)| is_close(**total, extremum))
        .map(|(index, _)| index)
        .collect())
}

/// Лучшие подрядчики: те, чья суммарная оценка близка к МАКСИМУМУ.
///
/// Пустой список подрядчиков - ошибка, а не пустой результат.
pub fn find_best_contractors<'a>(
    criteria: &[Criterion],
    contractors: &'a [Contractor],
) -> EvalResult<Vec<&'a Contractor>> {
    let totals: Vec<f64> = contractors
        .iter()
        .map(|contractor| contractor.total_score(criteria))
        .collect();
    let indexes = closest_to_extremum(&totals, false)?;
    Ok(indexes.into_iter().map(|index| &contractors[index]).collect())
}

/// Лучшие поставщики: те, чей итог близок к МИНИМУМУ
/// (меньше суммарное отклонение - лучше поставщик).
///
/// `totals` должен соответствовать `suppliers` по порядку и длине.
pub fn find_best_suppliers<'a>(
    suppliers: &'a [Supplier],
    totals: &[f64],
) -> EvalResult<Vec<&'a Supplier>> {
    debug_assert_eq!(suppliers.len(), totals.len());
    let indexes = closest_to_extremum(totals, true)?;
    Ok(indexes.into_iter().map(|index| &suppliers[index]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contractor_with_total(name: &str, score: i32, weight_name: &str) -> Contractor {
        Contractor::new(
            name,
            [(weight_name.to_string(), score)].into_iter().collect(),
        )
    }

    #[test]
    fn test_best_contractor_single_winner() {
        let criteria = vec![Criterion::new("Цена", 1.0)];
        let contractors = vec![
            contractor_with_total("А", 3, "Цена"),
            contractor_with_total("Б", 5, "Цена"),
        ];

        let best = find_best_contractors(&criteria, &contractors).unwrap();

        assert_eq!(best.len(), 1);
        assert_eq!(best[0].name, "Б");
    }

    #[test]
    fn test_best_contractor_ties_within_tolerance() {
        let criteria = vec![Criterion::new("Цена", 2.0)];
        let contractors = vec![
            contractor_with_total("А", 5, "Цена"), // 10.0
            contractor_with_total("Б", 5, "Цена"), // 10.0
            contractor_with_total("В", 3, "Цена"), // 6.0
        ];

        let best = find_best_contractors(&criteria, &contractors).unwrap();

        let names: Vec<&str> = best.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["А", "Б"]);
    }

    #[test]
    fn test_best_contractor_empty_list_is_error() {
        let criteria = vec![Criterion::new("Цена", 1.0)];
        let result = find_best_contractors(&criteria, &[]);
        assert_eq!(result.unwrap_err(), EvalError::NoCandidates);
    }

    #[test]
    fn test_best_supplier_uses_minimum() {
        let suppliers = vec![
            Supplier::new("А", vec![], Default::default()),
            Supplier::new("Б", vec![], Default::default()),
            Supplier::new("В", vec![], Default::default()),
        ];
        let totals = [0.1, 0.5, 0.1];

        let best = find_best_suppliers(&suppliers, &totals).unwrap();

        let names: Vec<&str> = best.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["А", "В"]);
    }

    #[test]
    fn test_best_supplier_empty_list_is_error() {
        let result = find_best_suppliers(&[], &[]);
        assert_eq!(result.unwrap_err(), EvalError::NoCandidates);
    }

    #[test]
    fn test_aggregate_scores_unknown_name_contributes_zero() {
        let scores = SupplierScores {
            volume: 0.1,
            price: 1.25,
            assortment: 0.1,
            rhythm: 0.1,
        };
        let matching = vec![Criterion::new("Цена", 0.4), Criterion::new("Объем", 0.3)];
        let renamed = vec![
            Criterion::new("Стоимость", 0.4), // не совпадает с фиксированным названием
            Criterion::new("Объем", 0.3),
        ];

        let full = aggregate_scores(&scores, &matching);
        let partial = aggregate_scores(&scores, &renamed);

        assert!((full - (0.4 * 1.25 + 0.3 * 0.1)).abs() < 1e-12);
        assert!((partial - 0.3 * 0.1).abs() < 1e-12);
    }
}
