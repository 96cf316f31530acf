// ==========================================
// Выбор подрядчика и поставщика - API подрядчиков
// ==========================================
// Назначение: полный цикл пересчета режима экспертных
// оценок: валидация -> взвешивание -> выбор лучшего.
// Вычисление блокируется только ошибками; предупреждения
// носят справочный характер
// ==========================================

use serde::Serialize;

use crate::app::AppState;
use crate::engine::{
    find_best_contractors, validate_contractors, validate_criteria, EvalResult, Issue, Problems,
};

// ==========================================
// Результат пересчета
// ==========================================

/// Суммарная оценка одного подрядчика.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractorTotal {
    pub name: String,
    pub total: f64,
}

/// Итог успешного пересчета: оценки всех подрядчиков
/// и названия лучших (ничьи дают несколько имен).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractorOutcome {
    pub totals: Vec<ContractorTotal>,
    pub best: Vec<String>,
}

/// Полный результат пересчета режима экспертных оценок.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractorRunResult {
    pub criteria_problems: Problems,
    pub contractor_problems: Problems,
    /// `None`, пока ошибки валидации не устранены.
    pub outcome: Option<ContractorOutcome>,
}

// ==========================================
// ContractorApi
// ==========================================
pub struct ContractorApi;

impl ContractorApi {
    /// Выполняет полный проход пересчета по состоянию сессии.
    ///
    /// Валидация подрядчиков блокируется, пока некорректны критерии
    /// (как и ввод подрядчиков в исходном приложении). Итог
    /// вычисляется только при отсутствии ошибок обоих наборов.
    pub fn run(state: &AppState) -> EvalResult<ContractorRunResult> {
        tracing::debug!(
            criteria = state.expert_criteria.len(),
            contractors = state.contractors.len(),
            "пересчет режима экспертных оценок"
        );

        let criteria_problems = validate_criteria(&state.expert_criteria);
        if criteria_problems.has_errors() {
            let mut contractor_problems = Problems::new();
            contractor_problems.push(Issue::ContractorsBlocked);
            return Ok(ContractorRunResult {
                criteria_problems,
                contractor_problems,
                outcome: None,
            });
        }

        let contractor_problems =
            validate_contractors(&state.expert_criteria, &state.contractors);
        if contractor_problems.has_errors() {
            return Ok(ContractorRunResult {
                criteria_problems,
                contractor_problems,
                outcome: None,
            });
        }

        let totals: Vec<ContractorTotal> = state
            .contractors
            .iter()
            .map(|contractor| ContractorTotal {
                name: contractor.name.clone(),
                total: contractor.total_score(&state.expert_criteria),
            })
            .collect();

        let best = find_best_contractors(&state.expert_criteria, &state.contractors)?
            .into_iter()
            .map(|contractor| contractor.name.clone())
            .collect();

        tracing::info!(best = ?best, "лучшие подрядчики определены");

        Ok(ContractorRunResult {
            criteria_problems,
            contractor_problems,
            outcome: Some(ContractorOutcome { totals, best }),
        })
    }
}
