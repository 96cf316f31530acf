// ==========================================
// Выбор подрядчика и поставщика - Запись файлов
// ==========================================
// Выгрузка таблицы обмена в CSV (байты в памяти, как для
// кнопки скачивания) и в Excel (rust_xlsxwriter; calamine
// умеет только читать). Запись на диск - по расширению
// ==========================================

use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::table::Table;

/// Формирование байтового представления таблицы обмена.
pub trait TableWriter {
    fn write_bytes(&self, table: &Table) -> ImportResult<Vec<u8>>;
}

// ==========================================
// CSV
// ==========================================
pub struct CsvWriter;

impl TableWriter for CsvWriter {
    fn write_bytes(&self, table: &Table) -> ImportResult<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(&table.headers)
            .map_err(|e| ImportError::CsvWriteError(e.to_string()))?;
        for row in &table.rows {
            writer
                .write_record(row)
                .map_err(|e| ImportError::CsvWriteError(e.to_string()))?;
        }
        writer
            .into_inner()
            .map_err(|e| ImportError::CsvWriteError(e.to_string()))
    }
}

// ==========================================
// Excel
// ==========================================
pub struct ExcelWriter;

impl TableWriter for ExcelWriter {
    fn write_bytes(&self, table: &Table) -> ImportResult<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        for (column_index, header) in table.headers.iter().enumerate() {
            worksheet.write_string(0, column_index as u16, header)?;
        }
        for (row_index, row) in table.rows.iter().enumerate() {
            for (column_index, value) in row.iter().enumerate() {
                let excel_row = (row_index + 1) as u32;
                let excel_column = column_index as u16;
                // числовые ячейки записываются числами, остальные текстом
                match value.parse::<f64>() {
                    Ok(number) => worksheet.write_number(excel_row, excel_column, number)?,
                    Err(_) => worksheet.write_string(excel_row, excel_column, value)?,
                };
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}

// ==========================================
// Универсальная запись по расширению
// ==========================================
pub struct UniversalFileWriter;

impl UniversalFileWriter {
    pub fn write<P: AsRef<Path>>(&self, file_path: P, table: &Table) -> ImportResult<()> {
        let path = file_path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        let bytes = match extension.as_str() {
            "csv" => CsvWriter.write_bytes(table)?,
            "xlsx" => ExcelWriter.write_bytes(table)?,
            _ => return Err(ImportError::UnsupportedFormat(extension)),
        };

        std::fs::write(path, bytes).map_err(|e| ImportError::FileWriteError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::file_parser::UniversalFileReader;

    fn create_test_table() -> Table {
        let mut table = Table::new(vec!["Название".to_string(), "Значимость".to_string()]);
        table.push_row(vec!["Цена".to_string(), "0.35".to_string()]);
        table.push_row(vec!["Качество".to_string(), "0.55".to_string()]);
        table
    }

    #[test]
    fn test_csv_round_trip_through_file() {
        let table = create_test_table();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("criteria.csv");

        UniversalFileWriter.write(&path, &table).unwrap();
        let restored = UniversalFileReader.read(&path).unwrap();

        assert_eq!(restored, table);
    }

    #[test]
    fn test_xlsx_round_trip_through_file() {
        let table = create_test_table();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("criteria.xlsx");

        UniversalFileWriter.write(&path, &table).unwrap();
        let restored = UniversalFileReader.read(&path).unwrap();

        assert_eq!(restored, table);
    }

    #[test]
    fn test_writer_rejects_unknown_extension() {
        let table = create_test_table();
        let result = UniversalFileWriter.write("отчет.pdf", &table);
        assert!(matches!(
            result,
            Err(ImportError::UnsupportedFormat(ext)) if ext == "pdf"
        ));
    }

    #[test]
    fn test_supplies_table_round_trips_through_both_formats() {
        use crate::domain::{Month, Pair, Period, Product, Supplier, Supply};
        use crate::importer::mapping::{supplies_from_table, supplies_to_table};

        let products = vec![Product::new("Гравий")];
        let period = Period::new(Month::January, Month::February);
        let supplier = Supplier::new(
            "Стройбаза",
            vec![
                Supply::new(
                    [("Гравий".to_string(), Pair::new(100.0, 90.5))]
                        .into_iter()
                        .collect(),
                ),
                Supply::new(
                    [("Гравий".to_string(), Pair::new(50.0, 60.0))]
                        .into_iter()
                        .collect(),
                ),
            ],
            Default::default(),
        );
        let table = supplies_to_table(&supplier, &products, &period);

        let dir = tempfile::tempdir().unwrap();
        for file_name in ["supplies.csv", "supplies.xlsx"] {
            let path = dir.path().join(file_name);
            UniversalFileWriter.write(&path, &table).unwrap();
            let restored = UniversalFileReader.read(&path).unwrap();
            let supplies = supplies_from_table(&products, &restored).unwrap();
            assert_eq!(supplies, supplier.supplies, "формат: {}", file_name);
        }
    }

    #[test]
    fn test_csv_bytes_contain_headers() {
        let bytes = CsvWriter.write_bytes(&create_test_table()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("Название,Значимость\n"));
        assert!(text.contains("Цена,0.35"));
    }
}
