// ==========================================
// Выбор подрядчика и поставщика - Отчеты границы
// ==========================================
// Назначение: превращение структурированных проблем и
// итогов в локализованные тексты (rust-i18n) и JSON
// (serde_json). Движок сам тексты не формирует
// ==========================================

use serde::Serialize;

use crate::api::contractor_api::ContractorOutcome;
use crate::api::supplier_api::SupplierOutcome;
use crate::engine::{Issue, Problems};
use crate::i18n::{t, t_with_args};

// ==========================================
// Тексты проблем
// ==========================================

/// Локализованный текст одной проблемы валидации.
pub fn describe_issue(issue: &Issue) -> String {
    match issue {
        Issue::NoCriteria => t("validation.no_criteria"),
        Issue::UnnamedCriterion { position } => t_with_args(
            "validation.unnamed_criterion",
            &[("position", &position.to_string())],
        ),
        Issue::DuplicateCriterionName { name } => {
            t_with_args("validation.duplicate_criterion", &[("name", name)])
        }
        Issue::WeightSumMismatch { total } => t_with_args(
            "validation.weight_sum_mismatch",
            &[("total", &format!("{:.2}", total))],
        ),
        Issue::NoContractors => t("validation.no_contractors"),
        Issue::UnnamedContractor { position } => t_with_args(
            "validation.unnamed_contractor",
            &[("position", &position.to_string())],
        ),
        Issue::DuplicateContractorName { name } => {
            t_with_args("validation.duplicate_contractor", &[("name", name)])
        }
        Issue::UnsetScore {
            contractor,
            criterion,
        } => t_with_args(
            "validation.unset_score",
            &[("contractor", contractor), ("criterion", criterion)],
        ),
        Issue::ContractorsBlocked => t("validation.contractors_blocked"),
        Issue::NoProducts => t("validation.no_products"),
        Issue::UnnamedProduct { position } => t_with_args(
            "validation.unnamed_product",
            &[("position", &position.to_string())],
        ),
        Issue::DuplicateProductName { name } => {
            t_with_args("validation.duplicate_product", &[("name", name)])
        }
        Issue::NoSuppliers => t("validation.no_suppliers"),
        Issue::UnnamedSupplier { position } => t_with_args(
            "validation.unnamed_supplier",
            &[("position", &position.to_string())],
        ),
        Issue::DuplicateSupplierName { name } => {
            t_with_args("validation.duplicate_supplier", &[("name", name)])
        }
        Issue::UnsetPrice { supplier, product } => t_with_args(
            "validation.unset_price",
            &[("supplier", supplier), ("product", product)],
        ),
        Issue::SuppliersBlocked => t("validation.suppliers_blocked"),
        Issue::DegeneratePeriod => t("validation.degenerate_period"),
    }
}

/// Локализованные тексты ошибок отчета по порядку.
pub fn error_lines(problems: &Problems) -> Vec<String> {
    problems.errors().iter().map(describe_issue).collect()
}

/// Локализованные тексты предупреждений отчета по порядку.
pub fn warning_lines(problems: &Problems) -> Vec<String> {
    problems.warnings().iter().map(describe_issue).collect()
}

/// Сводит список строк в один текст: одна строка - как есть,
/// несколько - маркированным списком.
pub fn join_lines(lines: &[String]) -> String {
    if lines.len() == 1 {
        lines[0].clone()
    } else {
        lines
            .iter()
            .map(|line| format!(" * {}", line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ==========================================
// Тексты итогов
// ==========================================

/// Текст про лучших подрядчиков (одного или нескольких при ничьей).
pub fn render_contractor_outcome(outcome: &ContractorOutcome) -> String {
    render_best(&outcome.best, "result.best_contractor", "result.best_contractors")
}

/// Развернутый текст итогов по поставщикам: разбор каждого
/// поставщика по критериям и список лучших.
pub fn render_supplier_outcome(outcome: &SupplierOutcome) -> String {
    let mut lines = Vec::new();
    for evaluation in &outcome.evaluations {
        lines.push(t_with_args(
            "result.supplier_heading",
            &[("name", &evaluation.supplier)],
        ));
        for (criterion, score) in &evaluation.scores {
            lines.push(format!(
                " * {}",
                t_with_args(
                    "result.criterion_score",
                    &[("criterion", criterion), ("score", &score.to_string())],
                )
            ));
        }
        lines.push(t_with_args(
            "result.total_score",
            &[("score", &evaluation.total.to_string())],
        ));
    }
    lines.push(render_best(
        &outcome.best,
        "result.best_supplier",
        "result.best_suppliers",
    ));
    lines.join("\n")
}

fn render_best(best: &[String], single_key: &str, plural_key: &str) -> String {
    debug_assert!(!best.is_empty());
    if best.len() == 1 {
        t_with_args(single_key, &[("name", &best[0])])
    } else {
        let mut text = t(plural_key);
        for name in best {
            text.push_str(&format!("\n * {}", name));
        }
        text
    }
}

// ==========================================
// JSON для машинного потребления
// ==========================================

/// Сериализует любой результат границы в JSON.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n;
    use std::sync::Mutex;

    // locale - глобальное состояние rust-i18n, а тесты идут
    // параллельно; сериализуем тесты локализации
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_describe_issue_russian() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        i18n::set_locale("ru");
        assert_eq!(
            describe_issue(&Issue::NoCriteria),
            "Не задано ни одного критерия"
        );
        assert_eq!(
            describe_issue(&Issue::DuplicateCriterionName {
                name: "Цена".to_string()
            }),
            "Несколько критериев с одним и тем же названием: Цена"
        );
        assert_eq!(
            describe_issue(&Issue::WeightSumMismatch { total: 0.9 }),
            "Суммарная значимость критериев (0.90) не равна 1"
        );
    }

    #[test]
    fn test_describe_issue_english() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        i18n::set_locale("en");
        let text = describe_issue(&Issue::NoCriteria);
        assert_eq!(text, "No criteria defined");
        i18n::set_locale("ru");
    }

    #[test]
    fn test_render_best_single_and_ties() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        i18n::set_locale("ru");
        let single = ContractorOutcome {
            totals: vec![],
            best: vec!["Рога и Копыта".to_string()],
        };
        assert_eq!(
            render_contractor_outcome(&single),
            "Лучший подрядчик: Рога и Копыта"
        );

        let ties = ContractorOutcome {
            totals: vec![],
            best: vec!["А".to_string(), "Б".to_string()],
        };
        let text = render_contractor_outcome(&ties);
        assert!(text.starts_with("Лучшие подрядчики:"));
        assert!(text.contains(" * А"));
        assert!(text.contains(" * Б"));
    }

    #[test]
    fn test_join_lines() {
        let one = vec!["строка".to_string()];
        assert_eq!(join_lines(&one), "строка");
        let two = vec!["раз".to_string(), "два".to_string()];
        assert_eq!(join_lines(&two), " * раз\n * два");
    }
}
