// ==========================================
// Выбор подрядчика и поставщика - Граница (API)
// ==========================================
// Назначение: вызовы пересчета обоих режимов поверх
// состояния сессии и локализованные отчеты
// ==========================================

pub mod contractor_api;
pub mod report;
pub mod supplier_api;

// Реэкспорт
pub use contractor_api::{ContractorApi, ContractorOutcome, ContractorRunResult, ContractorTotal};
pub use report::{
    describe_issue, error_lines, join_lines, render_contractor_outcome, render_supplier_outcome,
    to_json, warning_lines,
};
pub use supplier_api::{SupplierApi, SupplierEvaluation, SupplierOutcome, SupplierRunResult};
