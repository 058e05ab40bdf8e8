// src/noyau/erreur.rs
//
// Erreurs du noyau : trois cas, tous synchrones, jamais rattrapés ici.

/// Erreur d’une opération arithmétique.
///
/// Chaque variante correspond à une entrée mathématiquement indéfinie
/// (ou non supportée) : l’appelant décide quoi en faire.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ErreurCalc {
    /// `divide(a, 0)`, ou `power(0, e)` avec `e < 0`.
    #[error("division par zéro")]
    DivisionParZero,

    /// Racine d’un négatif, inverse de zéro, base négative avec exposant non entier.
    #[error("argument invalide : {0}")]
    ArgumentInvalide(&'static str),

    /// Jeton hors de `{+, -, *, /, **}` (comparaison exacte).
    #[error("opérateur invalide : {0:?}")]
    OperateurInvalide(String),
}
