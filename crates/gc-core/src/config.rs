use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration de la conversion. Sérialisable en TOML.
///
/// Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use gc_core::config::ConvertConfig;
/// let config = ConvertConfig::default();
/// assert_eq!(config.max_width, 150);
/// assert_eq!(config.max_height, 150);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ConvertConfig {
    /// Largeur maximale de la boîte englobante, en caractères.
    pub max_width: u32,
    /// Hauteur maximale de la boîte englobante, en caractères.
    pub max_height: u32,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            max_width: 150,
            max_height: 150,
        }
    }
}

impl ConvertConfig {
    /// Vérifie que la boîte englobante est non dégénérée.
    ///
    /// # Errors
    /// Retourne une erreur si une dimension est nulle.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.max_width > 0 && self.max_height > 0,
            "Boîte englobante invalide : {}×{}",
            self.max_width,
            self.max_height
        );
        Ok(())
    }
}

/// Structure intermédiaire : tous les champs optionnels.
#[derive(Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    convert: ConvertSection,
}

#[derive(Default, Deserialize)]
struct ConvertSection {
    max_width: Option<u32>,
    max_height: Option<u32>,
}

/// Charge une configuration TOML depuis le disque.
///
/// Les champs absents gardent leur valeur par défaut.
///
/// # Errors
/// Retourne une erreur si le fichier est illisible, mal formé, ou
/// décrit une boîte englobante dégénérée.
///
/// # Example
/// ```no_run
/// use gc_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<ConvertConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))?;

    let mut config = ConvertConfig::default();
    if let Some(v) = file.convert.max_width {
        config.max_width = v;
    }
    if let Some(v) = file.convert.max_height {
        config.max_height = v;
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_box_is_150() {
        let config = ConvertConfig::default();
        assert_eq!(config.max_width, 150);
        assert_eq!(config.max_height, 150);
    }

    #[test]
    fn toml_overrides_box() {
        let file: ConfigFile = toml::from_str("[convert]\nmax_width = 80\n").unwrap();
        let mut config = ConvertConfig::default();
        if let Some(v) = file.convert.max_width {
            config.max_width = v;
        }
        assert_eq!(config.max_width, 80);
        assert_eq!(file.convert.max_height, None);
    }

    #[test]
    fn empty_toml_keeps_defaults() {
        let file: ConfigFile = toml::from_str("").unwrap();
        assert_eq!(file.convert.max_width, None);
        assert_eq!(file.convert.max_height, None);
    }

    #[test]
    fn zero_dimension_rejected() {
        let config = ConvertConfig {
            max_width: 0,
            max_height: 150,
        };
        assert!(config.validate().is_err());
    }
}
