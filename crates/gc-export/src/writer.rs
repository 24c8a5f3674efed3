use std::fs::{File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use gc_core::error::ConvertError;

/// Terminateur de ligne de la plateforme.
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Ouvre le fichier cible en mode création exclusive.
///
/// # Errors
/// `OutputExists` si un fichier est déjà présent au chemin cible,
/// `Io` pour tout autre échec du système de fichiers.
pub fn create_output(path: &Path) -> Result<File, ConvertError> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| {
            if e.kind() == ErrorKind::AlreadyExists {
                ConvertError::OutputExists {
                    path: path.display().to_string(),
                }
            } else {
                ConvertError::Io(e)
            }
        })
}

/// Écrit les lignes une à une dans un fichier nouvellement créé.
///
/// Chaque ligne est suivie du terminateur de la plateforme. L'écriture
/// est incrémentale : une interruption laisse un fichier tronqué aux
/// lignes déjà écrites, jamais une ligne partiellement formée au-delà
/// du buffer d'écriture.
///
/// # Errors
/// `OutputExists` si le chemin cible existe déjà, `Io` si l'écriture
/// échoue.
///
/// # Example
/// ```no_run
/// use gc_export::writer::write_rows;
/// use std::path::Path;
/// let lines = vec!["````".to_string(), "$$$$".to_string()];
/// write_rows(Path::new("output/art.txt"), lines).unwrap();
/// ```
pub fn write_rows<I>(path: &Path, rows: I) -> Result<(), ConvertError>
where
    I: IntoIterator<Item = String>,
{
    let file = create_output(path)?;
    let mut out = BufWriter::new(file);

    let mut count = 0usize;
    for row in rows {
        out.write_all(row.as_bytes())?;
        out.write_all(LINE_ENDING.as_bytes())?;
        count += 1;
    }
    out.flush()?;

    log::debug!("{count} lignes écrites dans {}", path.display());
    Ok(())
}
