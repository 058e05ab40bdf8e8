// src/main.rs
//
// Calculatrice de base — point d’entrée
// -------------------------------------
// But:
// - Journalisation sur stderr (filtre RUST_LOG, défaut "warn")
// - Configuration lue depuis l’environnement (CALC_DIGITS)
// - Démo imprimée sur stdout, puis sortie
//
// Pas d’arguments, pas de codes de sortie configurables.

mod app;
mod noyau;

use tracing_subscriber::EnvFilter;

use app::ConfigApp;

/// Titre unique (bandeau de la démo).
const TITRE_APP: &str = "Calculatrice de base";

fn installer_journal() {
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    installer_journal();

    let config = ConfigApp::from_env();
    app::lancer(&config)
}
