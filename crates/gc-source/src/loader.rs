use std::path::Path;

use gc_core::error::ConvertError;
use gc_core::frame::FrameBuffer;

/// Extensions acceptées, comparées en minuscules.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// Vérifie qu'un chemin porte une extension supportée.
///
/// # Example
/// ```
/// use gc_source::loader::is_supported_extension;
/// use std::path::Path;
/// assert!(is_supported_extension(Path::new("photo.PNG")));
/// assert!(!is_supported_extension(Path::new("photo.bmp")));
/// ```
#[must_use]
pub fn is_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_lowercase();
            SUPPORTED_EXTENSIONS.iter().any(|s| *s == ext)
        })
}

/// Charge une image depuis le disque et la décode en RGBA.
///
/// La validation du chemin et de l'extension précède toute tentative de
/// décodage. Un échec du codec est propagé, jamais remplacé par une
/// image vide.
///
/// # Errors
/// `FileNotFound` si le chemin ne désigne pas un fichier régulier,
/// `UnsupportedFormat` si l'extension n'est pas dans
/// [`SUPPORTED_EXTENSIONS`], `Decode` si les octets sont illisibles.
///
/// # Example
/// ```no_run
/// use gc_source::loader::load_image;
/// use std::path::Path;
/// let frame = load_image(Path::new("photo.png")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<FrameBuffer, ConvertError> {
    if !path.is_file() {
        return Err(ConvertError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    if !is_supported_extension(path) {
        let format = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        return Err(ConvertError::UnsupportedFormat { format });
    }

    let img = image::open(path).map_err(|e| ConvertError::Decode {
        path: path.display().to_string(),
        source: Box::new(e),
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::debug!("Image décodée : {width}×{height} depuis {}", path.display());

    Ok(FrameBuffer {
        data: rgba.into_raw(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_not_found() {
        let err = load_image(Path::new("nulle/part/photo.png")).unwrap_err();
        assert!(matches!(err, ConvertError::FileNotFound { .. }));
    }

    #[test]
    fn directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_image(dir.path()).unwrap_err();
        assert!(matches!(err, ConvertError::FileNotFound { .. }));
    }

    #[test]
    fn bmp_extension_rejected_before_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.bmp");
        // Contenu arbitraire : l'extension doit suffire à rejeter.
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"pas une image")
            .unwrap();
        let err = load_image(&path).unwrap_err();
        match err {
            ConvertError::UnsupportedFormat { format } => assert_eq!(format, "bmp"),
            other => panic!("erreur inattendue : {other}"),
        }
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(is_supported_extension(Path::new("a.JPG")));
        assert!(is_supported_extension(Path::new("a.JpEg")));
        assert!(is_supported_extension(Path::new("a.gif")));
        assert!(!is_supported_extension(Path::new("a.tiff")));
        assert!(!is_supported_extension(Path::new("sans_extension")));
    }

    #[test]
    fn corrupt_png_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrompu.png");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"definitivement pas un png")
            .unwrap();
        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, ConvertError::Decode { .. }));
    }

    #[test]
    fn valid_png_decodes_to_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gris.png");
        image::RgbImage::from_pixel(3, 2, image::Rgb([10, 20, 30]))
            .save(&path)
            .unwrap();

        let frame = load_image(&path).unwrap();
        assert_eq!((frame.width, frame.height), (3, 2));
        assert_eq!(frame.data.len(), 3 * 2 * 4);
        assert_eq!(frame.pixel(0, 0), (10, 20, 30, 255));
    }
}
