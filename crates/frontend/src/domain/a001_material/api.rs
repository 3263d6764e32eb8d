use crate::shared::config::MATERIALS_URL;
use contracts::domain::a001_material::dto::{decode_materials, MaterialRecord};
use gloo_net::http::Request;
use thiserror::Error;

/// Ошибка загрузки списка материалов
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Запрос не выполнился или тело ответа не удалось прочитать
    #[error("Request failed: {0}")]
    Network(String),
    /// Тело ответа не является JSON-массивом
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Загрузить `materiales.json`.
///
/// Статус ответа не проверяется: любое полученное тело разбирается как документ.
pub async fn fetch_materials() -> Result<Vec<MaterialRecord>, LoadError> {
    let response = Request::get(MATERIALS_URL)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.ok() {
        log::debug!("{} answered with HTTP {}", MATERIALS_URL, response.status());
    }

    let body = response
        .text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    parse_materials(&body)
}

pub fn parse_materials(body: &str) -> Result<Vec<MaterialRecord>, LoadError> {
    decode_materials(body).map_err(|e| LoadError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_materials_ok() {
        let records = parse_materials(r#"[{"nombre":"Cartón","peso":150}]"#).unwrap();
        assert_eq!(records, vec![MaterialRecord::new("Cartón", 150)]);
    }

    #[test]
    fn test_parse_materials_truncated_document() {
        let err = parse_materials(r#"[{"nombre":"Aluminio","peso":12"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_parse_materials_html_error_page() {
        let err = parse_materials("<!DOCTYPE html><p>Not Found</p>").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_error_messages() {
        let err = LoadError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Request failed: connection refused");
    }
}
