// ==========================================
// Выбор подрядчика и поставщика - Прикладной слой
// ==========================================
// Назначение: состояние пользовательской сессии
// ==========================================

pub mod state;

// Реэкспорт
pub use state::AppState;
