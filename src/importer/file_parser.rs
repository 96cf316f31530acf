// ==========================================
// Выбор подрядчика и поставщика - Чтение файлов
// ==========================================
// Поддержка: Excel (.xlsx/.xls) / CSV (.csv)
// Выбор формата по расширению файла; любое другое
// расширение отклоняется как неподдерживаемое
// ==========================================

use std::fs::File;
use std::path::Path;

use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::table::Table;

/// Чтение табличного файла в общую таблицу обмена.
pub trait TableReader {
    fn read(&self, file_path: &Path) -> ImportResult<Table>;
}

// ==========================================
// CSV
// ==========================================
pub struct CsvReader;

impl TableReader for CsvReader {
    fn read(&self, file_path: &Path) -> ImportResult<Table> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // допускаются строки разной длины
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|header| header.trim().to_string())
            .collect();

        let mut table = Table::new(headers);
        for record in reader.records() {
            let record = record?;
            let row: Vec<String> = record.iter().map(|value| value.trim().to_string()).collect();
            // полностью пустые строки пропускаются
            if Table::is_blank_row(&row) {
                continue;
            }
            table.push_row(row);
        }

        Ok(table)
    }
}

// ==========================================
// Excel
// ==========================================
pub struct ExcelReader;

impl TableReader for ExcelReader {
    fn read(&self, file_path: &Path) -> ImportResult<Table> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let mut workbook: Xlsx<_> = open_workbook(file_path)?;

        // читается первый лист
        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("в файле нет листов".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("в файле нет строки заголовков".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut table = Table::new(headers);
        for data_row in rows {
            let row: Vec<String> = data_row
                .iter()
                .map(|cell| cell.to_string().trim().to_string())
                .collect();
            if Table::is_blank_row(&row) {
                continue;
            }
            table.push_row(row);
        }

        Ok(table)
    }
}

// ==========================================
// Универсальное чтение по расширению
// ==========================================
pub struct UniversalFileReader;

impl UniversalFileReader {
    pub fn read<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Table> {
        let path = file_path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "csv" => CsvReader.read(path),
            "xlsx" | "xls" => ExcelReader.read(path),
            _ => Err(ImportError::UnsupportedFormat(extension)),
        }
    }
}
