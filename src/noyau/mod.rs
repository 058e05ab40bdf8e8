//! Noyau arithmétique
//!
//! Organisation interne :
//! - erreur.rs       : ErreurCalc (division par zéro / argument invalide / opérateur invalide)
//! - operations.rs   : opérations pures génériques (f64, f32)
//! - operateur.rs    : jeton {+, -, *, /, **} + dispatcher `calculate`
//! - calculatrice.rs : état inerte + reset
//! - format.rs       : affichage d’un résultat

pub mod calculatrice;
pub mod erreur;
pub mod format;
pub mod operateur;
pub mod operations;

#[cfg(test)]
mod tests_scenarios;


// API publique
pub use calculatrice::Calculatrice;
pub use erreur::ErreurCalc;
pub use format::format_nombre;
pub use operateur::{calculate, Operateur};
pub use operations::{
    add, divide, multiply, negate, percentage, power, reciprocal, square_root, subtract, Operande,
};
