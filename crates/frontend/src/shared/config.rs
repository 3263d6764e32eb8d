//! Константы приложения, известные на этапе сборки.

/// Путь к статическому документу со списком материалов.
/// Файл отдаётся тем же сервером, что и сам бандл.
pub const MATERIALS_URL: &str = "/materiales.json";

/// Заголовок страницы над карточками
pub const PAGE_TITLE: &str = "Materiales reciclables";

/// Inline-стиль карточки материала
pub const CARD_STYLE: &str =
    "border: 1px solid #ccc; border-radius: 8px; padding: 16px; margin: 8px 0;";
