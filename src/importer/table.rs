// ==========================================
// Выбор подрядчика и поставщика - Таблица обмена
// ==========================================
// Плоская таблица строковых ячеек: общая форма данных
// между файловыми форматами и доменными структурами.
// Порядок колонок и строк значим (круговой обмен должен
// воспроизводить данные без потерь)
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Таблица (Table)
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Добавляет строку; недостающие ячейки дополняются пустыми.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Индекс колонки по названию.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Значение ячейки по номеру строки и названию колонки.
    pub fn cell(&self, row_index: usize, column_name: &str) -> Option<&str> {
        let column_index = self.column_index(column_name)?;
        self.rows
            .get(row_index)
            .and_then(|row| row.get(column_index))
            .map(String::as_str)
    }

    /// Строка полностью пустая (такие строки пропускаются при чтении).
    pub fn is_blank_row(row: &[String]) -> bool {
        row.iter().all(|value| value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_row_pads_to_header_width() {
        let mut table = Table::new(vec!["Название".to_string(), "Значимость".to_string()]);
        table.push_row(vec!["Цена".to_string()]);
        assert_eq!(table.rows[0], vec!["Цена".to_string(), String::new()]);
    }

    #[test]
    fn test_cell_lookup_by_column_name() {
        let mut table = Table::new(vec!["Название".to_string(), "Значимость".to_string()]);
        table.push_row(vec!["Цена".to_string(), "0.35".to_string()]);
        assert_eq!(table.cell(0, "Значимость"), Some("0.35"));
        assert_eq!(table.cell(0, "Вес"), None);
        assert_eq!(table.cell(1, "Название"), None);
    }
}
