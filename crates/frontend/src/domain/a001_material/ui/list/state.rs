use crate::domain::a001_material::api::LoadError;
use contracts::domain::a001_material::dto::MaterialRecord;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// Данных ещё нет (в том числе пока запрос в полёте)
    #[default]
    Empty,
    Loaded,
    /// Загрузка не удалась; пользователь видит пустой список
    Failed,
}

/// Состояние оболочки: список материалов и фаза загрузки.
///
/// Единственный переход `Empty -> Loaded | Failed` выполняет [`finish_load`](Self::finish_load).
#[derive(Clone, Debug, Default)]
pub struct MaterialsState {
    pub materials: Vec<MaterialRecord>,
    pub phase: LoadPhase,
    pub fetch_issued: bool,
}

impl MaterialsState {
    /// Отметить запуск загрузки. `true` только при первом вызове.
    pub fn begin_load(&mut self) -> bool {
        if self.fetch_issued {
            return false;
        }
        self.fetch_issued = true;
        true
    }

    /// Применить результат загрузки. Повторные вызовы игнорируются.
    pub fn finish_load(&mut self, result: Result<Vec<MaterialRecord>, LoadError>) {
        if self.phase != LoadPhase::Empty {
            log::debug!("Materials already resolved ({:?}), result dropped", self.phase);
            return;
        }

        match result {
            Ok(materials) => {
                log::debug!("Loaded {} materials", materials.len());
                self.materials = materials;
                self.phase = LoadPhase::Loaded;
            }
            Err(err) => {
                log::error!("Error al cargar materiales: {}", err);
                self.phase = LoadPhase::Failed;
            }
        }
    }

    /// Записи вместе с индексом, который служит ключом рендеринга
    pub fn indexed_materials(&self) -> Vec<(usize, MaterialRecord)> {
        self.materials.iter().cloned().enumerate().collect()
    }
}

pub fn create_state() -> RwSignal<MaterialsState> {
    RwSignal::new(MaterialsState::default())
}
