// src/noyau/operateur.rs
//
// Jeton d’opérateur : ensemble fermé {+, -, *, /, **}.
// Lecture stricte : pas de trim, pas de casse, pas d’alias (`^` n’est PAS la puissance).

use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurCalc;
use super::operations::{self, Operande};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance, // **
}

impl Operateur {
    /// Tous les opérateurs, dans l’ordre d’affichage.
    pub const TOUS: [Operateur; 5] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
        Operateur::Puissance,
    ];

    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "*",
            Operateur::Divise => "/",
            Operateur::Puissance => "**",
        }
    }

    /// Applique l’opérateur (match exhaustif, pas de table dynamique).
    pub fn appliquer<T: Operande>(self, a: T, b: T) -> Result<T, ErreurCalc> {
        match self {
            Operateur::Plus => Ok(operations::add(a, b)),
            Operateur::Moins => Ok(operations::subtract(a, b)),
            Operateur::Fois => Ok(operations::multiply(a, b)),
            Operateur::Divise => operations::divide(a, b),
            Operateur::Puissance => operations::power(a, b),
        }
    }
}

impl FromStr for Operateur {
    type Err = ErreurCalc;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operateur::TOUS
            .into_iter()
            .find(|op| op.symbole() == s)
            .ok_or_else(|| ErreurCalc::OperateurInvalide(s.to_string()))
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

/// Dispatcher : `calculate(a, "+", b)` etc.
pub fn calculate<T: Operande>(a: T, jeton: &str, b: T) -> Result<T, ErreurCalc> {
    let op: Operateur = jeton.parse().inspect_err(|_| {
        tracing::debug!(jeton, "opérateur refusé");
    })?;
    tracing::trace!(%a, %op, %b, "calculate");
    op.appliquer(a, b)
}
