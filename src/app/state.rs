// ==========================================
// Выбор подрядчика и поставщика - Состояние сессии
// ==========================================
// Назначение: явный объект состояния одной пользовательской
// сессии, передаваемый по ссылке в вычислительные вызовы.
// Никаких неявных глобальных переменных; жизненный цикл:
// new()/with_seeds() - инициализация, drop - завершение
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::{Contractor, Criterion, Period, Product, Supplier};

// ==========================================
// Состояние приложения (AppState)
// ==========================================
// Один экземпляр на сессию; обращения строго
// последовательны (см. модель параллелизма)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Критерии режима экспертных оценок.
    pub expert_criteria: Vec<Criterion>,
    /// Подрядчики (режим экспертных оценок).
    pub contractors: Vec<Contractor>,

    /// Критерии режима фактических поставок (названия фиксированы
    /// и должны совпадать с названиями расчетных критериев).
    pub supply_criteria: Vec<Criterion>,
    /// Поставщики (режим фактических поставок).
    pub suppliers: Vec<Supplier>,
    /// Товары активной сессии.
    pub products: Vec<Product>,
    /// Активный период времени.
    pub period: Period,
}

impl AppState {
    /// Пустая сессия.
    pub fn new() -> Self {
        Self::default()
    }

    /// Сессия с начальными данными обоих режимов.
    pub fn with_seeds() -> Self {
        let mut state = Self::new();

        state.expert_criteria = vec![
            Criterion::new("Цена", 0.35),
            Criterion::new("Качество", 0.55),
            Criterion::new("Удаленность", 0.1),
        ];
        state.contractors = vec![Contractor::new(
            "Рога и Копыта",
            [
                ("Цена".to_string(), 3),
                ("Качество".to_string(), 4),
                ("Удаленность".to_string(), 2),
            ]
            .into_iter()
            .collect(),
        )];

        state.supply_criteria = vec![
            Criterion::new("Объем", 0.3),
            Criterion::new("Цена", 0.4),
            Criterion::new("Ассортимент", 0.2),
            Criterion::new("Ритмичность", 0.1),
        ];

        state
    }

    /// Меняет активный период и явно достраивает структуры
    /// поставщиков под новую длину периода.
    pub fn set_period(&mut self, period: Period) {
        self.period = period;
        self.normalize_suppliers();
    }

    /// Меняет набор товаров и явно достраивает структуры поставщиков.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.normalize_suppliers();
    }

    /// Полностью заполняет структуры всех поставщиков
    /// (все товары x все месяцы активного периода).
    ///
    /// Вызывается при каждом изменении периода или набора товаров,
    /// чтобы вычисления не зависели от ленивого дозаполнения.
    pub fn normalize_suppliers(&mut self) {
        for supplier in &mut self.suppliers {
            supplier.normalize(&self.products, &self.period);
        }
    }

    /// Очищает все данные сессии, сохраняя сам объект.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}
