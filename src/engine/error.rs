// ==========================================
// Выбор подрядчика и поставщика - Ошибки вычислений
// ==========================================
// Инструмент: thiserror
// Красная линия: деление на ноль и пустой список
// кандидатов никогда не превращаются в NaN/inf/0
// ==========================================

use thiserror::Error;

/// Фатальные для текущего расчета ошибки арифметики.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("деление на ноль при расчете критерия '{criterion}': {denominator}")]
    DivisionByZero {
        /// Отображаемое название расчетного критерия.
        criterion: &'static str,
        /// Какой знаменатель оказался нулевым.
        denominator: &'static str,
    },

    #[error("список кандидатов пуст: выбор лучшего невозможен")]
    NoCandidates,
}

/// Псевдоним результата для движка вычислений.
pub type EvalResult<T> = Result<T, EvalError>;
