use arc_swap::{ArcSwap, Guard};
use geom::Material;
use lazy_static::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// Materials known by name on top of the predefined ones.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// name -> density in kg/m³
    #[serde(default)]
    pub materials: BTreeMap<String, f32>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("material {name} has invalid density {density} (must be > 0)")]
    InvalidDensity { name: String, density: f32 },
}

impl Config {
    pub fn from_reader(r: impl Read) -> Result<Self, ConfigError> {
        let c: Config = serde_json::from_reader(r)?;
        c.validate()?;
        Ok(c)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, &density) in &self.materials {
            if !(density > 0.0 && density.is_finite()) {
                return Err(ConfigError::InvalidDensity {
                    name: name.clone(),
                    density,
                });
            }
        }
        Ok(())
    }

    /// Custom materials shadow predefined ones of the same name.
    pub fn material(&self, name: &str) -> Option<Material> {
        let name = name.trim();
        if let Some(&density) = self.materials.get(name) {
            return Some(Material::custom(name, density));
        }
        name.parse().ok()
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let c = Config::from_reader(BufReader::new(File::open(path)?))?;
    log::info!(
        "loaded {} custom materials from {}",
        c.materials.len(),
        path.display()
    );
    Ok(c)
}

pub fn save_config(path: impl AsRef<Path>, config: &Config) -> Result<(), ConfigError> {
    serde_json::to_writer_pretty(BufWriter::new(File::create(path)?), config)?;
    Ok(())
}

lazy_static! {
    static ref CONFIG: ArcSwap<Config> = ArcSwap::from_pointee(Config::default());
    static ref CONFIG_ID: AtomicUsize = AtomicUsize::new(0);
}

pub fn config() -> Guard<Arc<Config>> {
    CONFIG.load()
}

pub fn config_id() -> usize {
    CONFIG_ID.load(Ordering::Relaxed)
}

pub fn update_config(new_config: Config) {
    CONFIG_ID.fetch_add(1, Ordering::Relaxed);
    log::debug!(
        "config updated with {} custom materials",
        new_config.materials.len()
    );
    CONFIG.store(Arc::new(new_config));
}

/// Looks up a material by name in the current config
pub fn material(name: &str) -> Option<Material> {
    config().material(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geom::{MaterialType, Sphere};

    #[test]
    fn test_material_lookup() {
        let c = Config::from_reader(r#"{"materials": {"balsa": 160.0, "wood": 650.0}}"#.as_bytes())
            .unwrap();

        let balsa = c.material(" balsa ").unwrap();
        assert_eq!(balsa.name(), "balsa");
        assert_eq!(balsa.density(), 160.0);
        assert_eq!(balsa.kind(), MaterialType::Unknown);

        // custom entries shadow predefined ones
        assert_eq!(c.material("wood").unwrap().density(), 650.0);
        assert_eq!(c.material("Oak"), Some(Material::new(MaterialType::Oak)));
        assert_eq!(c.material("mithril"), None);
    }

    #[test]
    fn test_invalid_config() {
        let err = Config::from_reader(r#"{"materials": {"void": 0.0}}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDensity { .. }), "{}", err);

        let err = Config::from_reader("{".as_bytes()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{}", err);

        let err = load_config("this/file/does/not/exist.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)), "{}", err);

        let empty = Config::from_reader("{}".as_bytes()).unwrap();
        assert_eq!(empty, Config::default());
    }

    #[test]
    fn test_save_load_and_global() {
        let mut c = Config::default();
        c.materials.insert("lead".to_string(), 11340.0);

        let path = std::env::temp_dir().join(format!("geom_config_{}.json", std::process::id()));
        save_config(&path, &c).unwrap();
        let loaded = load_config(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, c);

        let id = config_id();
        update_config(loaded);
        assert!(config_id() > id);

        let lead = material("lead").unwrap();
        let mut sphere = Sphere::with_material(0.1, lead);
        let m = sphere.mass_matrix().unwrap();
        geom::assert_delta!(m.mass(), 11340.0 * sphere.volume(), 1e-3);

        assert!(sphere.set_density_from_mass(1.0));
        assert_eq!(sphere.material().name(), "lead");
        geom::assert_delta!(sphere.mass_matrix().unwrap().mass(), 1.0, 1e-4);
    }
}
