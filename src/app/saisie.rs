//! src/app/saisie.rs
//!
//! Règles du clavier : comment chaque touche réécrit le texte de l’affichage.
//!
//! Contrats :
//! - Fonctions pures sur le texte (pas d’egui ici) : testables sans fenêtre.
//! - Seule la touche "=" appelle le noyau.
//! - Erreur sémantique => affichage = sentinelle ; erreur structurelle => texte inchangé.
//! - La sentinelle est relue comme "0" à la touche suivante.

use crate::noyau::{eval_expression, format_valeur, ErreurCalcul, Resultat};

use super::etat::{AppCalc, Demarche};

/// Affiché quand l’expression est bien formée mais sans valeur (÷0, √ négative…).
pub const SENTINELLE_ERREUR: &str = "Erreur";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Point,
    Operateur(char), // + - × ÷
    Puissance,       // xʸ
    Racine,          // √x
    ParenOuvrante,
    ParenFermante,
    Effacer,      // C
    Retour,       // ⌫
    ChangerSigne, // ±
    Inverse,      // 1/x
    Egal,
}

impl Touche {
    /// Clavier physique -> touche. '*' et '/' valent × et ÷.
    pub fn depuis_caractere(c: char) -> Option<Touche> {
        match c {
            '0'..='9' => Some(Touche::Chiffre(c)),
            '.' => Some(Touche::Point),
            '+' | '-' | '×' | '÷' => Some(Touche::Operateur(c)),
            '*' => Some(Touche::Operateur('×')),
            '/' => Some(Touche::Operateur('÷')),
            '^' => Some(Touche::Puissance),
            '√' => Some(Touche::Racine),
            '(' => Some(Touche::ParenOuvrante),
            ')' => Some(Touche::ParenFermante),
            '=' => Some(Touche::Egal),
            _ => None,
        }
    }
}

/// Nouveau texte + issue de l’évaluation (seulement pour "=").
#[derive(Clone, Debug, PartialEq)]
pub struct Sortie {
    pub affichage: String,
    pub evaluation: Option<Result<Resultat, ErreurCalcul>>,
}

impl Sortie {
    fn texte(affichage: String) -> Self {
        Self {
            affichage,
            evaluation: None,
        }
    }
}

/// Applique une touche au texte de l’affichage.
pub fn appliquer(affichage: &str, touche: Touche) -> Sortie {
    let aff = if affichage == SENTINELLE_ERREUR {
        "0"
    } else {
        affichage
    };

    let sortie = match touche {
        Touche::Chiffre(d) => Sortie::texte(chiffre(aff, d)),
        Touche::Point => Sortie::texte(point(aff)),
        Touche::Operateur(op) => Sortie::texte(operateur(aff, op)),
        Touche::Puissance => Sortie::texte(operateur(aff, '^')),
        Touche::Racine => Sortie::texte(racine(aff)),
        Touche::ParenOuvrante => Sortie::texte(paren_ouvrante(aff)),
        Touche::ParenFermante => Sortie::texte(paren_fermante(aff)),
        Touche::Effacer => Sortie::texte("0".to_string()),
        Touche::Retour => Sortie::texte(retour(aff)),
        Touche::ChangerSigne => Sortie::texte(changer_signe(aff)),
        Touche::Inverse => Sortie::texte(inverse(aff)),
        Touche::Egal => egal(aff),
    };

    tracing::trace!(?touche, avant = affichage, apres = %sortie.affichage, "touche");
    sortie
}

/* ------------------------ Règles ------------------------ */

fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '×' | '÷' | '^' | '√')
}

fn est_chiffre_ou_point(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn dernier(s: &str) -> Option<char> {
    s.chars().next_back()
}

/// Tout sauf le dernier caractère (frontière UTF-8 respectée : × ÷ √ sont multi-octets).
fn sans_dernier(s: &str) -> &str {
    s.char_indices().next_back().map_or("", |(i, _)| &s[..i])
}

/// "0" est remplacé ; un "0" isolé après un opérateur aussi (pas de "2+05").
fn chiffre(aff: &str, d: char) -> String {
    if aff == "0" {
        return d.to_string();
    }
    if aff.chars().count() == 1 {
        return format!("{aff}{d}");
    }

    let reste = sans_dernier(aff);
    let zero_isole =
        dernier(aff) == Some('0') && dernier(reste).is_some_and(|c| !est_chiffre_ou_point(c));
    if zero_isole {
        format!("{reste}{d}")
    } else {
        format!("{aff}{d}")
    }
}

/// Un seul point par nombre, et seulement après au moins un chiffre.
fn point(aff: &str) -> String {
    let avant_chiffres = aff.trim_end_matches(|c: char| c.is_ascii_digit());
    if avant_chiffres.len() == aff.len() {
        // ne finit pas par un chiffre
        return aff.to_string();
    }

    match dernier(avant_chiffres) {
        Some('.') => aff.to_string(),
        _ => format!("{aff}."),
    }
}

/// Un opérateur en fin de texte est remplacé, pas empilé.
fn operateur(aff: &str, op: char) -> String {
    match dernier(aff) {
        Some(c) if est_operateur(c) => format!("{}{op}", sans_dernier(aff)),
        _ => format!("{aff}{op}"),
    }
}

fn racine(aff: &str) -> String {
    if aff == "0" {
        return "√".to_string();
    }
    match dernier(aff) {
        Some(c) if est_chiffre_ou_point(c) || c == '√' => aff.to_string(),
        _ => format!("{aff}√"),
    }
}

fn paren_ouvrante(aff: &str) -> String {
    if aff == "0" {
        return "(".to_string();
    }
    match dernier(aff) {
        Some(c) if est_chiffre_ou_point(c) => aff.to_string(),
        _ => format!("{aff}("),
    }
}

/// Fermer seulement ce qui est ouvert, et jamais juste après un opérateur.
fn paren_fermante(aff: &str) -> String {
    let ouvertes = aff.chars().filter(|c| *c == '(').count();
    let fermees = aff.chars().filter(|c| *c == ')').count();
    let apres_operateur = dernier(aff).is_some_and(est_operateur);

    if !apres_operateur && ouvertes > fermees {
        format!("{aff})")
    } else {
        aff.to_string()
    }
}

fn retour(aff: &str) -> String {
    if aff.chars().count() > 1 {
        sans_dernier(aff).to_string()
    } else {
        "0".to_string()
    }
}

fn changer_signe(aff: &str) -> String {
    match aff.strip_prefix('-') {
        Some("") => "0".to_string(),
        Some(reste) => reste.to_string(),
        None => format!("-{aff}"),
    }
}

/// 1/x : "x" devient "1÷(x)", et "1÷(x)" redevient "(x)".
fn inverse(aff: &str) -> String {
    match aff.strip_prefix("1÷") {
        Some(reste) if reste.starts_with('(') && reste.ends_with(')') => reste.to_string(),
        _ => format!("1÷({aff})"),
    }
}

fn egal(aff: &str) -> Sortie {
    let evaluation = eval_expression(aff);

    let affichage = match &evaluation {
        Ok(r) => format_valeur(r.valeur),
        Err(e) if e.est_semantique() => SENTINELLE_ERREUR.to_string(),
        Err(_) => aff.to_string(),
    };

    if let Err(e) = &evaluation {
        tracing::debug!(texte = aff, erreur = %e, "évaluation refusée");
    }

    Sortie {
        affichage,
        evaluation: Some(evaluation),
    }
}

/* ------------------------ État UI ------------------------ */

impl AppCalc {
    /// Une touche (bouton ou clavier) : nouveau texte + résultat/erreur dans l’état.
    pub fn presser(&mut self, touche: Touche) {
        let sortie = appliquer(&self.affichage, touche);

        match sortie.evaluation {
            None => self.clear_erreur(),
            Some(Ok(r)) => self.set_resultat(Demarche {
                jetons: r.demarche.jetons,
                arbre: r.demarche.arbre,
            }),
            Some(Err(e)) => self.set_erreur(e.to_string()),
        }

        self.affichage = sortie.affichage;
    }
}
