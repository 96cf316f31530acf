// ==========================================
// Выбор подрядчика и поставщика - Доменный слой
// ==========================================
// Назначение: сущности и типы-значения модели оценки
// Красная линия: без вычислений, без I/O, без состояния
// ==========================================

pub mod contractor;
pub mod criterion;
pub mod month;
pub mod pair;
pub mod period;
pub mod product;
pub mod supplier;
pub mod supply;

// Реэкспорт основных типов
pub use contractor::{Contractor, MAX_SCORE, MIN_SCORE};
pub use criterion::Criterion;
pub use month::{Month, MONTHS_IN_YEAR};
pub use pair::Pair;
pub use period::Period;
pub use product::Product;
pub use supplier::Supplier;
pub use supply::Supply;
