use crate::shared::display::display_text;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Запись материала из `materiales.json`.
///
/// Поля не валидируются: что пришло в документе, то и показывается.
/// Отсутствующее поле превращается в `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    #[serde(default)]
    pub nombre: Value,
    /// Вес в килограммах
    #[serde(default)]
    pub peso: Value,
}

impl MaterialRecord {
    pub fn new(nombre: impl Into<String>, peso: impl Into<Value>) -> Self {
        Self {
            nombre: Value::String(nombre.into()),
            peso: peso.into(),
        }
    }

    /// Элемент массива, который не является объектом, даёт запись с пустыми полями.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut map) => Self {
                nombre: map.remove("nombre").unwrap_or(Value::Null),
                peso: map.remove("peso").unwrap_or(Value::Null),
            },
            _ => Self::default(),
        }
    }

    pub fn display_name(&self) -> String {
        display_text(&self.nombre)
    }

    pub fn display_weight(&self) -> String {
        display_text(&self.peso)
    }
}

/// Разбор документа `materiales.json`.
///
/// Верхний уровень обязан быть массивом, иначе ошибка. Элементы не проверяются.
pub fn decode_materials(body: &str) -> serde_json::Result<Vec<MaterialRecord>> {
    let items: Vec<Value> = serde_json::from_str(body)?;
    Ok(items.into_iter().map(MaterialRecord::from_value).collect())
}

/// Сериализация списка материалов с отступом в 4 пробела.
pub fn encode_materials(records: &[MaterialRecord]) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser)?;
    // serde_json пишет только валидный UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_keeps_response_order() {
        let body = r#"[{"nombre":"Aluminio","peso":12.5},{"nombre":"Vidrio","peso":3}]"#;
        let records = decode_materials(body).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], MaterialRecord::new("Aluminio", 12.5));
        assert_eq!(records[1], MaterialRecord::new("Vidrio", 3));
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode_materials("[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        assert!(decode_materials(r#"[{"nombre":"Cart"#).is_err());
        assert!(decode_materials("").is_err());
    }

    #[test]
    fn test_decode_rejects_non_array_document() {
        assert!(decode_materials(r#"{"nombre":"Rafia","peso":45}"#).is_err());
        assert!(decode_materials("null").is_err());
    }

    #[test]
    fn test_decode_passes_malformed_elements_through() {
        let body = r#"[{"nombre":"Rafia"},{"peso":"mucho"},42,{"nombre":7,"peso":null,"extra":1}]"#;
        let records = decode_materials(body).unwrap();

        assert_eq!(records.len(), 4);
        assert_eq!(records[0].nombre, json!("Rafia"));
        assert_eq!(records[0].peso, Value::Null);
        assert_eq!(records[1].nombre, Value::Null);
        assert_eq!(records[1].peso, json!("mucho"));
        assert_eq!(records[2], MaterialRecord::default());
        assert_eq!(records[3].nombre, json!(7));
    }

    #[test]
    fn test_display_helpers() {
        let record = MaterialRecord::new("Plástico duro", 60);
        assert_eq!(record.display_name(), "Plástico duro");
        assert_eq!(record.display_weight(), "60");
    }

    #[test]
    fn test_encode_uses_four_space_indent() {
        let text = encode_materials(&[MaterialRecord::new("Rafia", 45)]).unwrap();
        let expected = "[\n    {\n        \"nombre\": \"Rafia\",\n        \"peso\": 45\n    }\n]";
        assert_eq!(text, expected);
        assert_eq!(decode_materials(&text).unwrap(), vec![MaterialRecord::new("Rafia", 45)]);
    }

    #[test]
    fn test_encode_writes_raw_utf8() {
        let text = encode_materials(&[MaterialRecord::new("Cartón", 150)]).unwrap();
        assert!(text.contains("\"nombre\": \"Cartón\""));
        assert!(!text.contains("\\u00f3"));

        // Экранированная запись из старого генератора читается так же
        let escaped = r#"[{"nombre": "Cart\u00f3n", "peso": 150}]"#;
        assert_eq!(decode_materials(escaped).unwrap(), decode_materials(&text).unwrap());
    }
}
