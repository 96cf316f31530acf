// ==========================================
// Выбор подрядчика и поставщика - Период
// ==========================================
// Циклический диапазон месяцев [первый, последний]
// включительно, возможен переход через конец года
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::month::{Month, MONTHS_IN_YEAR};

// ==========================================
// Период (Period)
// ==========================================
// Совпадение первого и последнего месяца считается
// ошибкой валидации выше по потоку; здесь такой
// период трактуется как один месяц.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub first_month: Month,
    pub last_month: Month,
}

impl Period {
    pub const FIRST_MONTH_TEXT: &'static str = "Начало";
    pub const LAST_MONTH_TEXT: &'static str = "Конец";

    pub fn new(first_month: Month, last_month: Month) -> Self {
        Self {
            first_month,
            last_month,
        }
    }

    /// Длина периода в месяцах, в диапазоне [1, 12].
    ///
    /// Переход через конец года учитывается:
    /// Ноябрь..Февраль = 4, Февраль..Январь = 12.
    pub fn length(&self) -> usize {
        let first = self.first_month.index();
        let last = self.last_month.index();
        (last + MONTHS_IN_YEAR - first) % MONTHS_IN_YEAR + 1
    }

    /// Месяцы периода по порядку, начиная с первого.
    ///
    /// Длина результата всегда равна `length()`.
    pub fn months(&self) -> Vec<Month> {
        let mut months = Vec::with_capacity(self.length());
        let mut month = self.first_month;
        loop {
            months.push(month);
            if month == self.last_month {
                break;
            }
            month = month.next();
        }
        months
    }
}

impl Default for Period {
    fn default() -> Self {
        Period::new(Month::January, Month::December)
    }
}
