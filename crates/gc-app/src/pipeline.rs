use std::path::{Path, PathBuf};
use std::time::SystemTime;

use gc_core::charset::GlyphRamp;
use gc_core::config::ConvertConfig;
use gc_core::error::ConvertError;
use gc_source::loader;
use gc_source::resize::Resizer;

/// Dérive le chemin de sortie, calculé une seule fois.
///
/// Un chemin explicite non blanc est retourné tel quel. Sinon :
/// `output/<nom-sans-extension>-<secondes-epoch>.txt`, horodaté au moment
/// de l'appel pour ne pas écraser les conversions précédentes.
#[must_use]
pub fn derive_output_path(input: &Path, explicit: Option<&str>) -> PathBuf {
    if let Some(path) = explicit {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let epoch = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map_or(0, |d| d.as_secs());
    PathBuf::from(format!("output/{stem}-{epoch}.txt"))
}

/// Enchaîne chargement → redimensionnement → rendu → écriture.
///
/// Retourne le chemin effectivement écrit. Les échecs de chaque étape
/// sont propagés tels quels.
///
/// # Errors
/// Toute erreur de [`ConvertError`] levée par le pipeline.
pub fn run(
    input: &Path,
    output: Option<&str>,
    config: &ConvertConfig,
) -> Result<PathBuf, ConvertError> {
    let frame = loader::load_image(input)?;

    let mut resizer = Resizer::new();
    let resized = resizer.resize_to_fit(&frame, config.max_width, config.max_height)?;

    let derived = output.is_none_or(|p| p.trim().is_empty());
    let target = derive_output_path(input, output);
    if derived {
        log::info!(
            "Pas de chemin de sortie fourni. Écriture vers {}",
            target.display()
        );
        // Le dossier output/ n'existe pas forcément au premier lancement.
        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    let ramp = GlyphRamp::default();
    gc_export::writer::write_rows(&target, gc_ascii::render::rows(&resized, &ramp))?;
    Ok(target)
}
