// ==========================================
// Выбор подрядчика и поставщика - Валидация
// ==========================================
// Структурированные проблемы двух уровней: ошибки
// блокируют дальнейшие вычисления, предупреждения
// носят справочный характер. Движок только
// классифицирует; тексты формируются на границе (api)
// ==========================================

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{Contractor, Criterion, Period, Product, Supplier};
use crate::engine::numeric::is_close;

// ==========================================
// Уровень проблемы (Severity)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Error,
    Warning,
}

// ==========================================
// Проблема валидации (Issue)
// ==========================================
// Позиции кандидатов указываются с 1 (как видит пользователь)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    // ===== Критерии =====
    NoCriteria,
    UnnamedCriterion { position: usize },
    DuplicateCriterionName { name: String },
    WeightSumMismatch { total: f64 },

    // ===== Подрядчики =====
    NoContractors,
    UnnamedContractor { position: usize },
    DuplicateContractorName { name: String },
    UnsetScore { contractor: String, criterion: String },
    ContractorsBlocked,

    // ===== Товары =====
    NoProducts,
    UnnamedProduct { position: usize },
    DuplicateProductName { name: String },

    // ===== Поставщики =====
    NoSuppliers,
    UnnamedSupplier { position: usize },
    DuplicateSupplierName { name: String },
    UnsetPrice { supplier: String, product: String },
    SuppliersBlocked,

    // ===== Период =====
    DegeneratePeriod,
}

impl Issue {
    /// Уровень проблемы.
    pub fn severity(&self) -> Severity {
        match self {
            Issue::WeightSumMismatch { .. }
            | Issue::UnsetScore { .. }
            | Issue::UnsetPrice { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

// ==========================================
// Отчет о проблемах (Problems)
// ==========================================
// Два упорядоченных списка: ошибки и предупреждения
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Problems {
    errors: Vec<Issue>,
    warnings: Vec<Issue>,
}

impl Problems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавляет проблему в список соответствующего уровня.
    pub fn push(&mut self, issue: Issue) {
        match issue.severity() {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
        }
    }

    /// Присоединяет проблемы другого отчета, сохраняя порядок.
    pub fn merge(&mut self, other: Problems) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn errors(&self) -> &[Issue] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Issue] {
        &self.warnings
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn has_issues(&self) -> bool {
        self.has_errors() || self.has_warnings()
    }
}

// ==========================================
// Проверка уникальности названий
// ==========================================

/// Обходит названия и выдает проблемы по пустым и повторяющимся.
/// Каждое повторяющееся название сообщается ровно один раз,
/// сколько бы раз оно ни встретилось.
fn check_names<'a>(
    names: impl Iterator<Item = &'a str>,
    problems: &mut Problems,
    on_unnamed: impl Fn(usize) -> Issue,
    on_duplicate: impl Fn(String) -> Issue,
) {
    let mut seen = HashSet::new();
    let mut duplicates = HashSet::new();
    for (index, name) in names.enumerate() {
        if name.is_empty() {
            problems.push(on_unnamed(index + 1));
        } else if seen.contains(name) {
            if duplicates.insert(name.to_string()) {
                problems.push(on_duplicate(name.to_string()));
            }
        } else {
            seen.insert(name.to_string());
        }
    }
}

// ==========================================
// Валидаторы наборов сущностей
// ==========================================

/// Проверяет набор критериев.
///
/// Ошибки: пустой набор, пустые названия, дубликаты (по одному
/// сообщению на название). Предупреждение: сумма весов не близка к 1.
pub fn validate_criteria(criteria: &[Criterion]) -> Problems {
    let mut problems = Problems::new();
    if criteria.is_empty() {
        problems.push(Issue::NoCriteria);
        return problems; // дальше проверять нечего
    }
    check_names(
        criteria.iter().map(|criterion| criterion.name.as_str()),
        &mut problems,
        |position| Issue::UnnamedCriterion { position },
        |name| Issue::DuplicateCriterionName { name },
    );
    let total: f64 = criteria.iter().map(|criterion| criterion.value).sum();
    if !is_close(total, 1.0) {
        problems.push(Issue::WeightSumMismatch { total });
    }
    problems
}

/// Проверяет набор подрядчиков.
///
/// Ошибки: пустой набор, пустые названия, дубликаты. Для каждого
/// корректно названного подрядчика - предупреждение по каждому
/// критерию с незаданным (нулевым) баллом.
pub fn validate_contractors(criteria: &[Criterion], contractors: &[Contractor]) -> Problems {
    let mut problems = Problems::new();
    if contractors.is_empty() {
        problems.push(Issue::NoContractors);
        return problems;
    }
    let mut seen = HashSet::new();
    let mut duplicates = HashSet::new();
    for (index, contractor) in contractors.iter().enumerate() {
        if contractor.name.is_empty() {
            problems.push(Issue::UnnamedContractor {
                position: index + 1,
            });
        } else if seen.contains(contractor.name.as_str()) {
            if duplicates.insert(contractor.name.clone()) {
                problems.push(Issue::DuplicateContractorName {
                    name: contractor.name.clone(),
                });
            }
        } else {
            seen.insert(contractor.name.clone());
            for criterion in criteria {
                if contractor.score(&criterion.name) == 0 {
                    problems.push(Issue::UnsetScore {
                        contractor: contractor.name.clone(),
                        criterion: criterion.name.clone(),
                    });
                }
            }
        }
    }
    problems
}

/// Проверяет набор товаров: пустой набор, пустые названия, дубликаты.
pub fn validate_products(products: &[Product]) -> Problems {
    let mut problems = Problems::new();
    if products.is_empty() {
        problems.push(Issue::NoProducts);
        return problems;
    }
    check_names(
        products.iter().map(|product| product.name.as_str()),
        &mut problems,
        |position| Issue::UnnamedProduct { position },
        |name| Issue::DuplicateProductName { name },
    );
    problems
}

/// Проверяет набор поставщиков.
///
/// Ошибки: пустой набор, пустые названия, дубликаты. Для каждого
/// корректно названного поставщика - предупреждение по каждому
/// товару с незаполненной ценой (нулевая компонента пары ведет
/// к делению на ноль при расчете).
pub fn validate_suppliers(suppliers: &[Supplier], products: &[Product]) -> Problems {
    let mut problems = Problems::new();
    if suppliers.is_empty() {
        problems.push(Issue::NoSuppliers);
        return problems;
    }
    let mut seen = HashSet::new();
    let mut duplicates = HashSet::new();
    for (index, supplier) in suppliers.iter().enumerate() {
        if supplier.name.is_empty() {
            problems.push(Issue::UnnamedSupplier {
                position: index + 1,
            });
        } else if seen.contains(supplier.name.as_str()) {
            if duplicates.insert(supplier.name.clone()) {
                problems.push(Issue::DuplicateSupplierName {
                    name: supplier.name.clone(),
                });
            }
        } else {
            seen.insert(supplier.name.clone());
            for product in products {
                if supplier.price(&product.name).has_unset_component() {
                    problems.push(Issue::UnsetPrice {
                        supplier: supplier.name.clone(),
                        product: product.name.clone(),
                    });
                }
            }
        }
    }
    problems
}

/// Проверяет период: совпадение первого и последнего месяца - ошибка
/// (полезный диапазон вырождается).
pub fn validate_period(period: &Period) -> Problems {
    let mut problems = Problems::new();
    if period.first_month == period.last_month {
        problems.push(Issue::DegeneratePeriod);
    }
    problems
}
