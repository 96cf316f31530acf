// ==========================================
// Выбор подрядчика и поставщика - Ошибки обмена
// ==========================================
// Инструмент: thiserror
// ==========================================

use thiserror::Error;

/// Ошибки табличного файлового обмена.
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== Файловые ошибки =====
    #[error("файл не найден: {0}")]
    FileNotFound(String),

    #[error("формат файла не поддерживается: '{0}' (ожидается .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("ошибка чтения файла: {0}")]
    FileReadError(String),

    #[error("ошибка записи файла: {0}")]
    FileWriteError(String),

    #[error("ошибка разбора Excel: {0}")]
    ExcelParseError(String),

    #[error("ошибка разбора CSV: {0}")]
    CsvParseError(String),

    #[error("ошибка формирования Excel: {0}")]
    ExcelWriteError(String),

    #[error("ошибка формирования CSV: {0}")]
    CsvWriteError(String),

    // ===== Ошибки соответствия данных =====
    #[error("отсутствует обязательная колонка: {0}")]
    MissingColumn(String),

    #[error("ошибка преобразования значения (строка {row}, колонка {column}): '{value}'")]
    TypeConversionError {
        row: usize,
        column: String,
        value: String,
    },

    // ===== Общие ошибки =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ImportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ImportError::ExcelWriteError(err.to_string())
    }
}

/// Псевдоним результата для модуля обмена.
pub type ImportResult<T> = Result<T, ImportError>;
