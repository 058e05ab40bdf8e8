// src/noyau/format.rs

use super::operations::Operande;

/// Affichage d’un résultat :
/// - `digits` décimales, puis zéros de fin retirés (8.0 => "8", 0.125 => "0.125")
/// - "-0" => "0"
/// - NaN => "indéfini", ±∞ => "∞" / "-∞"
pub fn format_nombre<T: Operande>(x: T, digits: usize) -> String {
    if x.is_nan() {
        return "indéfini".to_string();
    }
    if x.is_infinite() {
        return if x.is_sign_negative() { "-∞" } else { "∞" }.to_string();
    }

    let mut s = format!("{x:.digits$}");
    if s.contains('.') {
        let coupe = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(coupe);
    }

    // -0.0 ou arrondi vers zéro d’un petit négatif
    if s == "-0" {
        s.remove(0);
    }
    s
}
