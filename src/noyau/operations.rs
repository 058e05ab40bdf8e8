// src/noyau/operations.rs
//
// Opérations arithmétiques pures (sans état, sans I/O).
// - add / subtract / multiply / percentage / negate : totales
// - divide / power / square_root / reciprocal : Err si l’entrée est indéfinie
//
// Contrat : une opération réussit entièrement ou échoue sans effet de bord.

use std::fmt::{Debug, Display};

use num_traits::Float;

use super::erreur::ErreurCalc;

/// Opérande : tout flottant affichable (f64, f32).
///
/// `From<u8>` sert aux constantes exactes (100 pour le pourcentage).
pub trait Operande: Float + From<u8> + Debug + Display {}

impl<T> Operande for T where T: Float + From<u8> + Debug + Display {}

pub fn add<T: Operande>(a: T, b: T) -> T {
    a + b
}

pub fn subtract<T: Operande>(a: T, b: T) -> T {
    a - b
}

pub fn multiply<T: Operande>(a: T, b: T) -> T {
    a * b
}

/// a ÷ b. Refuse b = 0 (y compris -0).
pub fn divide<T: Operande>(a: T, b: T) -> Result<T, ErreurCalc> {
    if b.is_zero() {
        tracing::debug!(%a, "division par zéro refusée");
        return Err(ErreurCalc::DivisionParZero);
    }
    Ok(a / b)
}

/// base^exp (réel).
///
/// Cas indéfinis :
/// - 0 avec exposant négatif => DivisionParZero
/// - base négative avec exposant non entier => ArgumentInvalide (pas de complexes)
pub fn power<T: Operande>(base: T, exp: T) -> Result<T, ErreurCalc> {
    if base.is_zero() && exp < T::zero() {
        tracing::debug!(%exp, "puissance négative de zéro refusée");
        return Err(ErreurCalc::DivisionParZero);
    }
    if base < T::zero() && exp.trunc() != exp {
        tracing::debug!(%base, %exp, "base négative avec exposant non entier refusée");
        return Err(ErreurCalc::ArgumentInvalide(
            "base négative avec exposant non entier",
        ));
    }
    Ok(base.powf(exp))
}

/// Racine carrée positive. Refuse x < 0.
pub fn square_root<T: Operande>(x: T) -> Result<T, ErreurCalc> {
    if x < T::zero() {
        tracing::debug!(%x, "racine carrée refusée");
        return Err(ErreurCalc::ArgumentInvalide(
            "racine carrée d’un nombre négatif",
        ));
    }
    Ok(x.sqrt())
}

/// p % de x : (x × p) / 100.
pub fn percentage<T: Operande>(x: T, p: T) -> T {
    (x * p) / <T as From<u8>>::from(100)
}

/// 1/x. Refuse x = 0.
pub fn reciprocal<T: Operande>(x: T) -> Result<T, ErreurCalc> {
    if x.is_zero() {
        tracing::debug!("inverse de zéro refusé");
        return Err(ErreurCalc::ArgumentInvalide("inverse de zéro"));
    }
    Ok(T::one() / x)
}

pub fn negate<T: Operande>(x: T) -> T {
    -x
}
