// ==========================================
// Выбор подрядчика и поставщика - Подрядчик
// ==========================================
// Кандидат, оцениваемый напрямую экспертными баллами
// по каждому критерию (целые 0..=5)
// ==========================================

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::criterion::Criterion;

/// Минимальный экспертный балл.
pub const MIN_SCORE: i32 = 0;
/// Максимальный экспертный балл.
pub const MAX_SCORE: i32 = 5;

// ==========================================
// Подрядчик (Contractor)
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contractor {
    pub name: String,
    /// Название критерия -> балл; отсутствующий балл читается как 0.
    pub scores: HashMap<String, i32>,
}

impl Contractor {
    pub const NAME_TEXT: &'static str = "Название";
    pub const FILE_NAME: &'static str = "contractors.csv";

    pub fn new(name: impl Into<String>, scores: HashMap<String, i32>) -> Self {
        Self {
            name: name.into(),
            scores,
        }
    }

    /// Балл по критерию; незаданный балл читается как 0.
    pub fn score(&self, criterion_name: &str) -> i32 {
        self.scores.get(criterion_name).copied().unwrap_or(0)
    }

    /// Суммарная оценка подрядчика: Σ балл(критерий) * вес(критерий).
    pub fn total_score(&self, criteria: &[Criterion]) -> f64 {
        criteria
            .iter()
            .map(|criterion| f64::from(self.score(&criterion.name)) * criterion.value)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_contractor() -> Contractor {
        Contractor::new(
            "Рога и Копыта",
            [
                ("Цена".to_string(), 3),
                ("Качество".to_string(), 4),
                ("Удаленность".to_string(), 2),
            ]
            .into_iter()
            .collect(),
        )
    }

    #[test]
    fn test_missing_score_reads_as_zero() {
        let contractor = create_test_contractor();
        assert_eq!(contractor.score("Надежность"), 0);
    }

    #[test]
    fn test_total_score_weighted_sum() {
        let contractor = create_test_contractor();
        let criteria = vec![
            Criterion::new("Цена", 0.35),
            Criterion::new("Качество", 0.55),
            Criterion::new("Удаленность", 0.1),
        ];
        let total = contractor.total_score(&criteria);
        assert!((total - (3.0 * 0.35 + 4.0 * 0.55 + 2.0 * 0.1)).abs() < 1e-12);
    }

    #[test]
    fn test_total_score_is_linear_in_weight() {
        let contractor = create_test_contractor();
        let base = vec![Criterion::new("Цена", 0.35), Criterion::new("Качество", 0.55)];
        let scaled = vec![Criterion::new("Цена", 0.70), Criterion::new("Качество", 0.55)];
        let delta = contractor.total_score(&scaled) - contractor.total_score(&base);
        // удвоение веса "Цена" удваивает его вклад, остальные не меняются
        assert!((delta - 3.0 * 0.35).abs() < 1e-12);
    }
}
