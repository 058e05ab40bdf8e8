//! src/noyau/calculatrice.rs
//!
//! État inerte de la calculatrice.
//!
//! Rôle : porter les quatre champs d’un futur accumulateur (résultat courant,
//! résultat précédent, dernière opération, drapeau d’affichage) sans leur
//! donner de sémantique. Aucune opération arithmétique ne les lit ni ne les écrit.
//!
//! Contrats :
//! - `reset` ramène toujours au même état par défaut, quel que soit l’état avant.
//! - Les calculs passent par les fonctions pures de `operations` ; l’état n’y entre pas.

use super::erreur::ErreurCalc;
use super::operateur::{self, Operateur};
use super::operations::Operande;

#[derive(Clone, Debug, PartialEq)]
pub struct Calculatrice<T: Operande = f64> {
    pub resultat: T,
    pub resultat_precedent: T,
    pub operation: Option<Operateur>,
    pub reinit_affichage: bool,
}

impl<T: Operande> Default for Calculatrice<T> {
    fn default() -> Self {
        Self {
            resultat: T::zero(),
            resultat_precedent: T::zero(),
            operation: None,
            reinit_affichage: false,
        }
    }
}

impl<T: Operande> Calculatrice<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remise à zéro totale (résultats + opération + drapeau).
    pub fn reset(&mut self) {
        tracing::debug!(
            resultat = %self.resultat,
            operation = ?self.operation,
            "remise à zéro"
        );
        *self = Self::default();
    }

    /// Raccourci vers le dispatcher ; ne touche pas à l’état.
    pub fn calculate(&self, a: T, op: &str, b: T) -> Result<T, ErreurCalc> {
        operateur::calculate(a, op, b)
    }
}
