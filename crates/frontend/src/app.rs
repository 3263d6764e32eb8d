use crate::domain::a001_material::api::fetch_materials;
use crate::domain::a001_material::ui::list::state::{create_state, MaterialsState};
use crate::domain::a001_material::ui::list::MaterialList;
use crate::shared::config::PAGE_TITLE;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Состояние живёт, пока смонтирована оболочка
    let state = create_state();

    // Загрузка запускается один раз при создании, а не эффектом на каждый рендер
    if state.try_update(MaterialsState::begin_load).unwrap_or(false) {
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_materials().await;
            // После размонтирования сигнал уже освобождён, результат просто отбрасывается
            if state.try_update(|s| s.finish_load(result)).is_none() {
                log::debug!("App disposed before materials arrived");
            }
        });
    }

    view! {
        <main class="app">
            <h1>{PAGE_TITLE}</h1>
            <MaterialList state=state />
        </main>
    }
}
