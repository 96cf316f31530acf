// ==========================================
// Выбор подрядчика и поставщика - Слой обмена
// ==========================================
// Назначение: табличный файловый обмен с внешним слоем
// (критерии, подрядчики, поставки)
// Поддержка: Excel, CSV
// ==========================================

// Объявление модулей
pub mod error;
pub mod file_parser;
pub mod file_writer;
pub mod mapping;
pub mod table;

// Реэкспорт основных типов
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvReader, ExcelReader, TableReader, UniversalFileReader};
pub use file_writer::{CsvWriter, ExcelWriter, TableWriter, UniversalFileWriter};
pub use mapping::{
    contractors_from_table, contractors_to_table, criteria_from_table, criteria_to_table,
    supplies_from_table, supplies_to_table,
};
pub use table::Table;
