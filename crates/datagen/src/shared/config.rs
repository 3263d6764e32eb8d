use anyhow::Context;
use contracts::domain::a001_material::dto::MaterialRecord;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub output: OutputConfig,
    #[serde(default)]
    pub materials: Vec<SeedMaterial>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub path: String,
}

/// Материал для записи в документ; вес в килограммах
#[derive(Debug, Deserialize, Clone)]
pub struct SeedMaterial {
    pub nombre: String,
    pub peso: serde_json::Number,
}

impl Config {
    pub fn records(&self) -> Vec<MaterialRecord> {
        self.materials
            .iter()
            .map(|m| MaterialRecord::new(m.nombre.clone(), m.peso.clone()))
            .collect()
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[output]
path = "materiales.json"

[[materials]]
nombre = "Cartón"
peso = 150

[[materials]]
nombre = "Plástico duro"
peso = 60

[[materials]]
nombre = "Rafia"
peso = 45
"#;

/// Load configuration
///
/// Search order:
/// 1. Explicit path from the command line (must exist)
/// 2. config.toml next to the executable
/// 3. Falls back to embedded default config
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        tracing::info!("Loading config from: {}", path.display());
        return read_config(path);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                return read_config(&config_path);
            } else {
                tracing::debug!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: Config =
        toml::from_str(&contents).with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(config)
}
