//! Scénarios concrets : valeurs attendues exactes, erreurs attendues par variante.

use super::{
    calculate, divide, format_nombre, percentage, power, reciprocal, square_root, Calculatrice,
    ErreurCalc,
};

fn ok(r: Result<f64, ErreurCalc>, ctx: &str) -> f64 {
    r.unwrap_or_else(|e| panic!("{ctx}: erreur inattendue: {e}"))
}

#[test]
fn scenario_valeurs_de_reference() {
    assert_eq!(super::add(5.0, 3.0), 8.0);
    assert_eq!(ok(calculate(15.0, "**", 2.0), "15 ** 2"), 225.0);
    assert_eq!(percentage(200.0, 25.0), 50.0);
    assert_eq!(ok(reciprocal(8.0), "1/8"), 0.125);
}

#[test]
fn scenario_erreurs_de_reference() {
    assert_eq!(divide(10.0, 0.0), Err(ErreurCalc::DivisionParZero));
    assert!(matches!(
        square_root(-5.0),
        Err(ErreurCalc::ArgumentInvalide(_))
    ));
    assert!(matches!(
        calculate(5.0, "%", 3.0),
        Err(ErreurCalc::OperateurInvalide(ref t)) if t == "%"
    ));
}

#[test]
fn scenario_pas_d_alias_pour_la_puissance() {
    assert_eq!(ok(calculate(2.0, "**", 8.0), "2 ** 8"), 256.0);
    assert_eq!(
        calculate(2.0, "^", 8.0),
        Err(ErreurCalc::OperateurInvalide("^".into()))
    );
}

#[test]
fn scenario_affichage_des_resultats() {
    assert_eq!(format_nombre(ok(calculate(100.0, "+", 50.0), "100 + 50"), 10), "150");
    assert_eq!(format_nombre(ok(divide(20.0, 4.0), "20 / 4"), 10), "5");
    assert_eq!(format_nombre(ok(power(2.0, 8.0), "2 ** 8"), 10), "256");
    assert_eq!(format_nombre(ok(square_root(16.0), "√16"), 10), "4");
}

#[test]
fn scenario_reset_apres_usage() {
    let mut calc: Calculatrice = Calculatrice::new();
    calc.resultat = ok(calc.calculate(100.0, "+", 50.0), "100 + 50");
    calc.resultat_precedent = 42.0;
    calc.reinit_affichage = true;

    calc.reset();
    assert_eq!(calc, Calculatrice::default());
}
