// ==========================================
// Выбор подрядчика и поставщика - Месяц
// ==========================================
// Порядковый номер: 0 = январь .. 11 = декабрь
// Локализованные названия входят в контракт
// табличного формата и НЕ проходят через i18n
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// Количество месяцев в году.
pub const MONTHS_IN_YEAR: usize = 12;

// Таблица отображаемых названий (колонка "Месяц" в таблице поставок).
const LOCALIZED_NAMES: [&str; MONTHS_IN_YEAR] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

// ==========================================
// Месяц (Month)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Все месяцы в календарном порядке.
    pub const ALL: [Month; MONTHS_IN_YEAR] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Порядковый номер месяца: 0..=11.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Месяц по порядковому номеру (по модулю 12).
    pub fn from_index(index: usize) -> Month {
        Month::ALL[index % MONTHS_IN_YEAR]
    }

    /// Следующий месяц с переходом через конец года.
    pub fn next(self) -> Month {
        Month::from_index(self.index() + 1)
    }

    /// Отображаемое название месяца.
    pub fn localized_name(self) -> &'static str {
        LOCALIZED_NAMES[self.index()]
    }

    /// Разбор отображаемого названия (обратная операция к `localized_name`).
    pub fn parse(text: &str) -> Option<Month> {
        LOCALIZED_NAMES
            .iter()
            .position(|name| *name == text)
            .map(Month::from_index)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.localized_name())
    }
}
