//! Отображение нетипизированных значений JSON в текст карточки.
//!
//! Правила повторяют то, как браузерная страница выводит значения в разметку.

use serde_json::Value;

/// Текстовое представление значения поля для показа пользователю.
///
/// - строка выводится как есть, без кавычек;
/// - число выводится как в JavaScript (`3`, `12.5`, `1e+21`, `1e-7`);
/// - `null` и логические значения дают пустую строку;
/// - элементы массива склеиваются без разделителя;
/// - объект выводится компактным JSON.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(_) => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.as_f64().map(format_number).unwrap_or_default(),
        Value::Array(items) => items.iter().map(display_text).collect(),
        Value::Object(_) => value.to_string(),
    }
}

/// Кратчайшая запись числа; экспонента вне диапазона `[1e-6, 1e21)`.
fn format_number(f: f64) -> String {
    // -0 тоже печатается как "0"
    if f == 0.0 {
        return "0".to_string();
    }

    let abs = f.abs();
    if !(1e-6..1e21).contains(&abs) {
        let s = format!("{:e}", f);
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => s,
        };
    }

    f.to_string()
}
