// ==========================================
// Выбор подрядчика и поставщика - Движок вычислений
// ==========================================
// Назначение: модель оценки - агрегация поставок,
// расчетные критерии, взвешивание, выбор лучшего,
// валидация наборов сущностей
// Красная линия: без I/O, без состояния, без
// форматирования сообщений для пользователя
// ==========================================

pub mod error;
pub mod evaluator;
pub mod numeric;
pub mod selection;
pub mod validation;

// Реэкспорт основных типов движка
pub use error::{EvalError, EvalResult};
pub use evaluator::{evaluate, sum_supplies, SupplierCriterion, SupplierScores};
pub use numeric::{is_close, ABS_TOLERANCE, REL_TOLERANCE};
pub use selection::{aggregate_scores, find_best_contractors, find_best_suppliers};
pub use validation::{
    validate_contractors, validate_criteria, validate_period, validate_products,
    validate_suppliers, Issue, Problems, Severity,
};
