use thiserror::Error;

/// Errors originating from the conversion pipeline.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Input path does not reference an existing regular file.
    #[error("Fichier introuvable : {path}")]
    FileNotFound {
        /// Path that was not found.
        path: String,
    },

    /// Unsupported file extension.
    #[error("Format non supporté : {format}. Formats acceptés : .jpg .jpeg .png .gif")]
    UnsupportedFormat {
        /// The extension that is unsupported.
        format: String,
    },

    /// The codec could not parse the file bytes.
    #[error("Décodage impossible : {path}")]
    Decode {
        /// Path of the file that failed to decode.
        path: String,
        /// Underlying codec error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Invalid width/height dimensions.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Target output file already exists.
    #[error("Le fichier de sortie existe déjà : {path}")]
    OutputExists {
        /// Path that was refused.
        path: String,
    },

    /// Generic filesystem failure during read/write.
    #[error("Erreur d'E/S : {0}")]
    Io(#[from] std::io::Error),
}
