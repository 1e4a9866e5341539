//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> descente récursive -> Noeud -> repli post-ordre -> f64
//!
//! Remarque : le formatage du résultat (entier / flottant) reste côté appelant
//! (voir format::format_valeur), le noyau ne rend qu’un f64 fini ou une erreur typée.

use super::analyse::analyser_jetons;
use super::erreur::{Domaine, ErreurCalcul, ErreurEvaluation};
use super::expr::{Noeud, OpBinaire};
use super::format::format_arbre;
use super::jetons::{format_tokens, tokenize};

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub arbre: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Resultat {
    pub valeur: f64,
    pub demarche: DemarcheNoyau,
}

/// API publique : évalue le texte de l’affichage et retourne:
/// - la valeur (toujours finie)
/// - la démarche (jetons, arbre parenthésé)
///
/// Les erreurs structurelles (lexique, syntaxe) et sémantiques (division par zéro,
/// domaine, dépassement) restent distinguables via ErreurCalcul.
pub fn eval_expression(texte: &str) -> Result<Resultat, ErreurCalcul> {
    // 1) Jetons
    let jetons = tokenize(texte)?;

    // 2) Arbre
    let arbre = analyser_jetons(&jetons)?;
    tracing::debug!(
        texte,
        jetons = jetons.len(),
        profondeur = arbre.profondeur(),
        "expression analysée"
    );

    // 3) Valeur
    let valeur = evaluer(&arbre)?;
    tracing::debug!(valeur, "expression évaluée");

    Ok(Resultat {
        valeur,
        demarche: DemarcheNoyau {
            jetons: format_tokens(&jetons),
            arbre: format_arbre(&arbre),
        },
    })
}

/// Repli post-ordre : chaque noeud visité une seule fois.
pub fn evaluer(noeud: &Noeud) -> Result<f64, ErreurEvaluation> {
    use Noeud::*;

    match noeud {
        Litteral(v) => Ok(*v),

        Oppose(x) => Ok(-evaluer(x)?),

        Racine(x) => {
            let v = evaluer(x)?;
            if v < 0.0 {
                return Err(Domaine::RacineNegative(v).into());
            }
            Ok(v.sqrt())
        }

        Binaire(op, a, b) => {
            let a = evaluer(a)?;
            let b = evaluer(b)?;
            appliquer(*op, a, b)
        }
    }
}

/// Opérandes finis => résultat fini, sinon erreur sémantique.
fn appliquer(op: OpBinaire, a: f64, b: f64) -> Result<f64, ErreurEvaluation> {
    let r = match op {
        OpBinaire::Add => a + b,
        OpBinaire::Sub => a - b,
        OpBinaire::Mul => a * b,

        OpBinaire::Div => {
            // -0.0 == 0.0 : les deux zéros sont refusés
            if b == 0.0 {
                return Err(ErreurEvaluation::DivisionParZero);
            }
            a / b
        }

        OpBinaire::Pow => {
            // 0^-n = 1÷0^n
            if a == 0.0 && b < 0.0 {
                return Err(ErreurEvaluation::DivisionParZero);
            }
            let r = a.powf(b);
            if r.is_nan() {
                return Err(Domaine::PuissanceNonReelle {
                    base: a,
                    exposant: b,
                }
                .into());
            }
            r
        }
    };

    if r.is_finite() {
        Ok(r)
    } else {
        Err(ErreurEvaluation::Depassement)
    }
}
