use std::path::PathBuf;

use clap::Parser;

/// glyphcast — convertisseur d'image en art ASCII.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Chemin vers l'image source (JPG, JPEG, PNG, GIF).
    pub input: PathBuf,

    /// Chemin du fichier texte de sortie. Défaut : output/<nom>-<epoch>.txt.
    pub output: Option<String>,

    /// Fichier de configuration TOML (boîte englobante).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
