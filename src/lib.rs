// ==========================================
// Выбор подрядчика и поставщика - Ядро библиотеки
// ==========================================
// Система поддержки принятия решений: выбор лучшего
// подрядчика по экспертным оценкам и лучшего поставщика
// по данным фактических поставок
// ==========================================

// Инициализация системы интернационализации
rust_i18n::i18n!("locales", fallback = "ru");

// ==========================================
// Объявления модулей
// ==========================================

// Доменный слой - сущности и типы
pub mod domain;

// Движок - расчеты и валидация
pub mod engine;

// Импорт/экспорт - табличный обмен с файлами
pub mod importer;

// Граница - вызовы пересчета и отчеты
pub mod api;

// Прикладной слой - состояние сессии
pub mod app;

// Логирование
pub mod logging;

// Интернационализация
pub mod i18n;

// ==========================================
// Реэкспорт основных типов
// ==========================================

// Доменные сущности
pub use domain::{Contractor, Criterion, Month, Pair, Period, Product, Supplier, Supply};

// Движок
pub use engine::{EvalError, EvalResult, Issue, Problems, Severity, SupplierCriterion};

// Импорт/экспорт
pub use importer::{ImportError, ImportResult, Table};

// Граница
pub use api::{ContractorApi, SupplierApi};

// Состояние сессии
pub use app::AppState;

/// Версия системы.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Название системы.
pub const APP_NAME: &str = "Система выбора подрядчика и поставщика";
