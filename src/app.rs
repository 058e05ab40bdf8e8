// src/app.rs
//
// Calculatrice de base — module App (racine)
// ------------------------------------------
// Rôle:
// - Déclarer les sous-modules (config.rs + vue.rs)
// - Ré-exporter ConfigApp (pour main.rs: use crate::app::ConfigApp;)
// - Fournir `lancer` : rendu de la démo + impression sur stdout
//
// Le noyau n’imprime rien : tout l’affichage vit ici.

pub mod config;
pub mod vue;

pub use config::ConfigApp;

use std::io::Write;

pub fn lancer(config: &ConfigApp) -> anyhow::Result<()> {
    tracing::info!(digits = config.digits, "démo lancée");

    let texte = vue::rendre_demo(config)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(texte.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
