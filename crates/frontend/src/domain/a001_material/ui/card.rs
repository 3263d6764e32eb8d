//! Карточка материала: название заголовком и строка веса.

use crate::shared::config::CARD_STYLE;
use leptos::prelude::*;

/// Текст карточки без разметки.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardText {
    pub heading: String,
    pub weight_line: String,
}

impl CardText {
    pub fn new(name: &str, weight: &str) -> Self {
        Self {
            heading: name.to_string(),
            weight_line: format!("Peso: {} kg", weight),
        }
    }
}

#[component]
pub fn MaterialCard(
    /// Название материала, выводится как есть
    #[prop(into)]
    name: String,
    /// Вес в килограммах, выводится как есть
    #[prop(into)]
    weight: String,
) -> impl IntoView {
    let text = CardText::new(&name, &weight);

    view! {
        <div class="material-card" style=CARD_STYLE>
            <h2>{text.heading}</h2>
            <p>{text.weight_line}</p>
        </div>
    }
}
