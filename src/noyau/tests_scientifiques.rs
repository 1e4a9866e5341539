//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : vérifier le contrat du noyau sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (profondeur, longueur) sous les garde-fous de l’analyseur
//!
//! Notes :
//! - Toutes les comparaisons sont exactes (==) : mêmes opérations flottantes dans le même ordre.
//! - Les cas limites (longueur, imbrication) sont choisis juste sous JETONS_MAX / PROFONDEUR_MAX.

use std::time::{Duration, Instant};

use super::analyse::{JETONS_MAX, PROFONDEUR_MAX};
use super::erreur::{ErreurCalcul, ErreurEvaluation, ErreurSyntaxe};
use super::{analyser, eval_expression, evaluer};

fn eval_ok(expr: &str) -> f64 {
    eval_expression(expr)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
        .valeur
}

fn assert_val(expr: &str, attendu: f64) {
    assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Contrat (associativité, précédence) ------------------------ */

#[test]
fn sci_associativite() {
    assert_val("2-3-4", -5.0);
    assert_val("2^3^2", 512.0);
    assert_val("2^2^3", 256.0);
    assert_val("100÷10÷5", 2.0);
}

#[test]
fn sci_precedence() {
    assert_val("2+3×4", 14.0);
    assert_val("2×3^2", 18.0);
    assert_val("2+3×4^2-1", 49.0);
    assert_val("√9×2", 6.0);
    assert_val("√(9×4)", 6.0);
}

/* ------------------------ Parenthésage et re-analyse ------------------------ */

const CORPUS: &[&str] = &[
    "1",
    "2+3×4",
    "2-3-4",
    "2^3^2",
    "√16-√9",
    "-√4+.5",
    "1÷(3)",
    "(1+2)×(3+4)÷5",
    "2^-2",
    "1.5×1.5",
    "√(2)×√(2)",
    "0.1+0.2",
];

#[test]
fn sci_parenthesage_neutre() {
    for e in CORPUS {
        let nu = eval_ok(e);
        let entoure = eval_ok(&format!("({e})"));
        let double = eval_ok(&format!("(({e}))"));
        assert_eq!(nu.to_bits(), entoure.to_bits(), "expr={e:?}");
        assert_eq!(nu.to_bits(), double.to_bits(), "expr={e:?}");
    }
}

#[test]
fn sci_reanalyse_idempotente() {
    for e in CORPUS {
        let a = analyser(e).unwrap();
        let b = analyser(e).unwrap();
        assert_eq!(a, b, "expr={e:?}");
        assert_eq!(
            evaluer(&a).unwrap().to_bits(),
            evaluer(&b).unwrap().to_bits(),
            "expr={e:?}"
        );
    }
}

/* ------------------------ Deux familles d’erreurs ------------------------ */

#[test]
fn sci_familles_erreurs() {
    for s in ["3+", "(3+4", "×", ".", "()", "1..2", "2√"] {
        let e = eval_expression(s).unwrap_err();
        assert!(e.est_structurelle(), "expr={s:?} err={e}");
    }

    for s in ["5÷0", "√-9", "(0-1)^.5", "10^999", "0^-2"] {
        let e = eval_expression(s).unwrap_err();
        assert!(e.est_semantique(), "expr={s:?} err={e}");
    }
}

#[test]
fn sci_division_par_zero_jamais_infinie() {
    for s in ["5÷0", "0÷0", "1÷(1-1)", "2÷-0", "1÷(0×5)"] {
        assert_eq!(
            eval_expression(s).unwrap_err(),
            ErreurCalcul::Evaluation(ErreurEvaluation::DivisionParZero),
            "expr={s:?}"
        );
    }
}

/* ------------------------ Inverse (1/x de l’UI) ------------------------ */

#[test]
fn sci_inverse_involution() {
    // 1÷(1÷(x)) = x pour des x exactement représentables en puissance de 2
    for x in ["2", "4", "0.5", "8", "0.125"] {
        let v = eval_ok(x);
        assert_val(&format!("1÷(1÷({x}))"), v);
    }
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_somme_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // (JETONS_MAX - 1) / 2 additions
    let n = (JETONS_MAX - 1) / 2;
    let expr = format!("{}1", "1+".repeat(n));
    assert_val(&expr, (n + 1) as f64);

    budget(t0, max);
}

#[test]
fn sci_stress_imbrication_sous_la_borne() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let n = PROFONDEUR_MAX;
    let expr = format!("{}2{}", "(".repeat(n), ")".repeat(n));
    assert_val(&expr, 2.0);

    let expr = format!("{}2{}", "(".repeat(n + 1), ")".repeat(n + 1));
    assert_eq!(
        eval_expression(&expr).unwrap_err(),
        ErreurCalcul::Syntaxe(ErreurSyntaxe::ImbricationTropProfonde)
    );

    // préfixes empilés : ----16 sous la borne
    let expr = format!("{}16", "--".repeat(n / 2));
    assert_val(&expr, 16.0);

    budget(t0, max);
}
