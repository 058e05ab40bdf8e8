//! src/app/config.rs
//!
//! Configuration de la démo (lue depuis l’environnement).
//!
//! - `CALC_DIGITS` : décimales affichées (défaut 10, borné à 17)
//! - `RUST_LOG`    : filtre de journalisation (lu par main.rs, pas ici)
//!
//! Garde-fou : une valeur illisible n’arrête pas la démo, on retombe sur le défaut.

/// Précision d’affichage par défaut.
pub const DIGITS_DEFAUT: usize = 10;

/// Au-delà de 17 décimales, un f64 n’apporte plus d’information.
pub const DIGITS_MAX: usize = 17;

const VAR_DIGITS: &str = "CALC_DIGITS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigApp {
    pub digits: usize,
}

impl Default for ConfigApp {
    fn default() -> Self {
        Self {
            digits: DIGITS_DEFAUT,
        }
    }
}

impl ConfigApp {
    pub fn from_env() -> Self {
        Self::from_valeur(std::env::var(VAR_DIGITS).ok().as_deref())
    }

    fn from_valeur(digits: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(brut) = digits {
            match brut.trim().parse::<usize>() {
                Ok(n) => config.set_digits(n),
                Err(e) => {
                    tracing::warn!(valeur = brut, erreur = %e, "{VAR_DIGITS} illisible, défaut conservé");
                }
            }
        }

        config
    }

    /// Borne la précision à `DIGITS_MAX`.
    pub fn set_digits(&mut self, digits: usize) {
        if digits > DIGITS_MAX {
            tracing::warn!(digits, max = DIGITS_MAX, "précision bornée");
        }
        self.digits = digits.min(DIGITS_MAX);
    }
}
