pub mod state;

use self::state::MaterialsState;
use super::card::MaterialCard;
use leptos::prelude::*;

/// Список карточек по текущему состоянию.
/// Индекс записи служит только ключом рендеринга.
#[component]
#[allow(non_snake_case)]
pub fn MaterialList(state: RwSignal<MaterialsState>) -> impl IntoView {
    view! {
        <div class="material-list">
            <For
                each=move || state.with(|s| s.indexed_materials())
                key=|(index, _)| *index
                children=move |(_, record)| {
                    view! {
                        <MaterialCard name=record.display_name() weight=record.display_weight() />
                    }
                }
            />
        </div>
    }
}
