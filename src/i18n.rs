// ==========================================
// Интернационализация (i18n)
// ==========================================
// Используется библиотека rust-i18n
// Поддерживаются русский (по умолчанию) и английский
// ==========================================
// Внимание: макрос rust_i18n::i18n! инициализирован в lib.rs
// ==========================================

/// Текущая локаль.
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Устанавливает локаль.
///
/// # Параметры
/// - locale: код локали ("ru" или "en")
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// Переводит сообщение (без параметров).
///
/// # Пример
/// ```no_run
/// use supplier_choice::i18n::t;
/// let msg = t("validation.no_criteria");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// Переводит сообщение (с параметрами).
///
/// # Пример
/// ```no_run
/// use supplier_choice::i18n::t_with_args;
/// let msg = t_with_args("result.best_contractor", &[("name", "Рога и Копыта")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Локаль в rust-i18n - глобальное состояние, а тесты Rust
    // по умолчанию идут параллельно; сериализуем тесты i18n.
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("ru");
        assert_eq!(current_locale(), "ru");

        set_locale("en");
        assert_eq!(current_locale(), "en");

        // возврат локали по умолчанию
        set_locale("ru");
    }

    #[test]
    fn test_translate_simple() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("ru");
        assert_eq!(t("validation.no_contractors"), "Не задан ни один подрядчик");

        set_locale("en");
        assert_eq!(t("validation.no_contractors"), "No contractors defined");

        set_locale("ru");
    }

    #[test]
    fn test_translate_with_args() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("ru");
        let msg = t_with_args("result.best_supplier", &[("name", "СтройБаза")]);
        assert_eq!(msg, "Лучший поставщик: СтройБаза");

        set_locale("en");
        let msg = t_with_args("result.best_supplier", &[("name", "СтройБаза")]);
        assert!(msg.contains("СтройБаза"));
        assert!(msg.contains("Best supplier"));

        set_locale("ru");
    }

    #[test]
    fn test_fallback_to_russian() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        // несуществующая локаль падает на русский
        set_locale("de");
        let msg = t("validation.no_criteria");
        assert_eq!(msg, "Не задано ни одного критерия");
        set_locale("ru");
    }
}
