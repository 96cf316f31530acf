// ==========================================
// Выбор подрядчика и поставщика - Соответствие таблиц
// ==========================================
// Преобразования между доменными структурами и таблицей
// обмена. Контракт колонок:
//   критерии:   "Название", "Значимость"
//   подрядчики: "Название" + по колонке на критерий
//   поставки:   "Месяц" + на товар "{товар} Пд" / "{товар} Пф"
// ==========================================

use crate::domain::{Contractor, Criterion, Pair, Period, Product, Supplier, Supply};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::table::Table;

// ==========================================
// Разбор ячеек
// ==========================================

fn parse_float(table: &Table, row_index: usize, column: &str) -> ImportResult<f64> {
    let value = table
        .cell(row_index, column)
        .ok_or_else(|| ImportError::MissingColumn(column.to_string()))?;
    value
        .parse::<f64>()
        .map_err(|_| ImportError::TypeConversionError {
            row: row_index + 1,
            column: column.to_string(),
            value: value.to_string(),
        })
}

fn parse_score(table: &Table, row_index: usize, column: &str) -> ImportResult<i32> {
    // Excel может отдать целый балл как "3.0"
    Ok(parse_float(table, row_index, column)?.round() as i32)
}

fn require_cell<'a>(table: &'a Table, row_index: usize, column: &str) -> ImportResult<&'a str> {
    table
        .cell(row_index, column)
        .ok_or_else(|| ImportError::MissingColumn(column.to_string()))
}

// ==========================================
// Критерии
// ==========================================

/// Критерии -> таблица (колонки "Название", "Значимость").
pub fn criteria_to_table(criteria: &[Criterion]) -> Table {
    let mut table = Table::new(vec![
        Criterion::NAME_TEXT.to_string(),
        Criterion::VALUE_TEXT.to_string(),
    ]);
    for criterion in criteria {
        table.push_row(vec![criterion.name.clone(), criterion.value.to_string()]);
    }
    table
}

/// Таблица -> критерии; порядок строк сохраняется.
pub fn criteria_from_table(table: &Table) -> ImportResult<Vec<Criterion>> {
    if table.column_index(Criterion::NAME_TEXT).is_none() {
        return Err(ImportError::MissingColumn(Criterion::NAME_TEXT.to_string()));
    }
    let mut criteria = Vec::with_capacity(table.rows.len());
    for row_index in 0..table.rows.len() {
        let name = require_cell(table, row_index, Criterion::NAME_TEXT)?;
        let value = parse_float(table, row_index, Criterion::VALUE_TEXT)?;
        criteria.push(Criterion::new(name, value));
    }
    Ok(criteria)
}

// ==========================================
// Подрядчики
// ==========================================

/// Подрядчики -> таблица ("Название" + колонка на каждый критерий).
pub fn contractors_to_table(criteria: &[Criterion], contractors: &[Contractor]) -> Table {
    let mut headers = vec![Contractor::NAME_TEXT.to_string()];
    headers.extend(criteria.iter().map(|criterion| criterion.name.clone()));
    let mut table = Table::new(headers);
    for contractor in contractors {
        let mut row = vec![contractor.name.clone()];
        for criterion in criteria {
            row.push(contractor.score(&criterion.name).to_string());
        }
        table.push_row(row);
    }
    table
}

/// Таблица -> подрядчики.
///
/// Балл по критерию, колонки которого нет в файле, читается как 0.
pub fn contractors_from_table(
    criteria: &[Criterion],
    table: &Table,
) -> ImportResult<Vec<Contractor>> {
    if table.column_index(Contractor::NAME_TEXT).is_none() {
        return Err(ImportError::MissingColumn(Contractor::NAME_TEXT.to_string()));
    }
    let mut contractors = Vec::with_capacity(table.rows.len());
    for row_index in 0..table.rows.len() {
        let name = require_cell(table, row_index, Contractor::NAME_TEXT)?;
        let mut contractor = Contractor::new(name, Default::default());
        for criterion in criteria {
            if table.column_index(&criterion.name).is_none() {
                continue; // отсутствующая колонка -> балл 0
            }
            let score = parse_score(table, row_index, &criterion.name)?;
            contractor.scores.insert(criterion.name.clone(), score);
        }
        contractors.push(contractor);
    }
    Ok(contractors)
}

// ==========================================
// Поставки
// ==========================================

fn expected_column(product: &Product) -> String {
    format!("{} {}", product.name, Pair::EXPECTED_MNEMONIC)
}

fn actual_column(product: &Product) -> String {
    format!("{} {}", product.name, Pair::ACTUAL_MNEMONIC)
}

/// Поставки поставщика за период -> таблица.
///
/// Одна строка на месяц в порядке периода; колонка "Месяц" плюс
/// по паре колонок "{товар} Пд" / "{товар} Пф" на каждый товар.
pub fn supplies_to_table(supplier: &Supplier, products: &[Product], period: &Period) -> Table {
    let mut headers = vec![Supply::MONTH_TEXT.to_string()];
    for product in products {
        headers.push(expected_column(product));
        headers.push(actual_column(product));
    }
    let mut table = Table::new(headers);
    for (month_index, month) in period.months().into_iter().enumerate() {
        let mut row = vec![month.localized_name().to_string()];
        for product in products {
            let quantity = supplier
                .supplies
                .get(month_index)
                .map(|supply| supply.quantity(&product.name))
                .unwrap_or_default();
            row.push(quantity.expected.to_string());
            row.push(quantity.actual.to_string());
        }
        table.push_row(row);
    }
    table
}

/// Таблица -> поставки по месяцам.
///
/// Строки соответствуют месяцам активного периода по порядку.
pub fn supplies_from_table(products: &[Product], table: &Table) -> ImportResult<Vec<Supply>> {
    if table.column_index(Supply::MONTH_TEXT).is_none() {
        return Err(ImportError::MissingColumn(Supply::MONTH_TEXT.to_string()));
    }
    let mut supplies = Vec::with_capacity(table.rows.len());
    for row_index in 0..table.rows.len() {
        let mut supply = Supply::default();
        for product in products {
            let expected = parse_float(table, row_index, &expected_column(product))?;
            let actual = parse_float(table, row_index, &actual_column(product))?;
            supply
                .quantities
                .insert(product.name.clone(), Pair::new(expected, actual));
        }
        supplies.push(supply);
    }
    Ok(supplies)
}
