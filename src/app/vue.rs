// src/app/vue.rs
//
// Vue texte de la démo
// --------------------
// Objectifs :
// - Montrer chaque opération du noyau sur un exemple
// - Montrer que les erreurs sont bien levées (et interceptées ici, pas dans le noyau)
// - Rendre dans une String : main.rs imprime, les tests lisent

use std::fmt::{self, Write};

use crate::noyau::{
    add, calculate, divide, format_nombre, multiply, negate, percentage, power, reciprocal,
    square_root, subtract, Calculatrice, ErreurCalc, Operateur,
};

use super::config::ConfigApp;

const LARGEUR: usize = 50;

/// Texte complet de la démo.
pub fn rendre_demo(config: &ConfigApp) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let d = config.digits;

    bandeau(&mut out)?;
    writeln!(out, "{}", crate::TITRE_APP)?;
    writeln!(out, "Opérations arithmétiques de base")?;
    bandeau(&mut out)?;

    section(&mut out, "Opérations de base")?;
    writeln!(out, "5 + 3 = {}", format_nombre(add(5.0, 3.0), d))?;
    writeln!(out, "10 - 4 = {}", format_nombre(subtract(10.0, 4.0), d))?;
    writeln!(out, "7 * 6 = {}", format_nombre(multiply(7.0, 6.0), d))?;
    ligne_resultat(&mut out, "20 / 4", divide(20.0, 4.0), d)?;

    section(&mut out, "Opérations avancées")?;
    ligne_resultat(&mut out, "2 ^ 8 (puissance)", power(2.0, 8.0), d)?;
    ligne_resultat(&mut out, "√16 (racine carrée)", square_root(16.0), d)?;
    writeln!(out, "25 % de 200 = {}", format_nombre(percentage(200.0, 25.0), d))?;
    ligne_resultat(&mut out, "1/8 (inverse)", reciprocal(8.0), d)?;
    writeln!(out, "-(-42) (opposé) = {}", format_nombre(negate(-42.0), d))?;

    let mut calc: Calculatrice = Calculatrice::new();

    section(&mut out, "Méthode générique calculate")?;
    ligne_resultat(&mut out, "calculate(100, '+', 50)", calc.calculate(100.0, "+", 50.0), d)?;
    ligne_resultat(&mut out, "calculate(15, '**', 2)", calc.calculate(15.0, "**", 2.0), d)?;
    let symboles: Vec<&str> = Operateur::TOUS.iter().map(|op| op.symbole()).collect();
    writeln!(out, "opérateurs acceptés : {}", symboles.join(" "))?;

    section(&mut out, "Gestion des erreurs")?;
    ligne_resultat(&mut out, "10 / 0", divide(10.0, 0.0), d)?;
    ligne_resultat(&mut out, "√-5", square_root(-5.0), d)?;
    ligne_resultat(&mut out, "calculate(5, '%', 3)", calculate(5.0, "%", 3.0), d)?;

    section(&mut out, "Remise à zéro")?;
    calc.resultat = 42.0;
    calc.resultat_precedent = 100.0;
    calc.operation = Some(Operateur::Plus);
    calc.reinit_affichage = true;
    ligne_etat(&mut out, "avant", &calc, d)?;
    calc.reset();
    ligne_etat(&mut out, "après", &calc, d)?;

    writeln!(out)?;
    bandeau(&mut out)?;
    writeln!(out, "Démo terminée !")?;
    bandeau(&mut out)?;

    Ok(out)
}

fn bandeau(out: &mut String) -> fmt::Result {
    writeln!(out, "{}", "=".repeat(LARGEUR))
}

fn section(out: &mut String, titre: &str) -> fmt::Result {
    writeln!(out, "\n--- {titre} ---")
}

/// Résultat ou erreur interceptée, sur une ligne.
fn ligne_resultat(
    out: &mut String,
    libelle: &str,
    r: Result<f64, ErreurCalc>,
    digits: usize,
) -> fmt::Result {
    match r {
        Ok(v) => writeln!(out, "{libelle} = {}", format_nombre(v, digits)),
        Err(e) => writeln!(out, "{libelle} : erreur interceptée : {e}"),
    }
}

fn ligne_etat(out: &mut String, moment: &str, calc: &Calculatrice, digits: usize) -> fmt::Result {
    let op = calc
        .operation
        .map(|o| o.to_string())
        .unwrap_or_else(|| "aucune".to_string());
    writeln!(
        out,
        "{moment} : résultat={} précédent={} opération={op} réinit_affichage={}",
        format_nombre(calc.resultat, digits),
        format_nombre(calc.resultat_precedent, digits),
        calc.reinit_affichage
    )
}
