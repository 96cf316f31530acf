// ==========================================
// Выбор подрядчика и поставщика - Числовые утилиты
// ==========================================
// Единая толерантность для сравнения чисел с плавающей
// точкой: ей пользуются и проверка суммы весов, и
// определение ничьих при выборе лучшего кандидата
// ==========================================

/// Относительная толерантность сравнения (класс `math.isclose`).
pub const REL_TOLERANCE: f64 = 1e-9;

/// Абсолютная толерантность сравнения.
pub const ABS_TOLERANCE: f64 = 0.0;

/// Сравнение двух чисел с плавающей точкой с толерантностью:
/// |a - b| <= max(REL_TOLERANCE * max(|a|, |b|), ABS_TOLERANCE).
pub fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= f64::max(REL_TOLERANCE * f64::max(a.abs(), b.abs()), ABS_TOLERANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_values_are_close() {
        assert!(is_close(1.0, 1.0));
        assert!(is_close(0.0, 0.0));
    }

    #[test]
    fn test_tolerance_boundary() {
        // при величинах ~10 допустимое отклонение составляет 1e-8
        assert!(is_close(10.0, 9.999999999));
        assert!(is_close(10.0, 10.0 + 1e-9));
        // отклонение заметно больше толерантности
        assert!(!is_close(10.0, 10.0 + 1e-7));
        assert!(!is_close(10.0, 9.9999999));
    }

    #[test]
    fn test_zero_has_no_relative_margin() {
        // при нулевых значениях относительная толерантность вырождается
        assert!(!is_close(0.0, 1e-12));
    }
}
