//! Запись статического документа `materiales.json`.

use anyhow::Context;
use contracts::domain::a001_material::dto::{encode_materials, MaterialRecord};
use std::path::Path;

/// Записать материалы в файл, создавая недостающие каталоги.
pub fn write_materials(path: &Path, records: &[MaterialRecord]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let document = encode_materials(records)?;
    std::fs::write(path, document).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!("Wrote {} materials to {}", records.len(), path.display());
    Ok(())
}
