//! Noyau flottant
//!
//! Organisation interne :
//! - erreur.rs   : erreurs structurelles (lexique, syntaxe) / sémantiques (évaluation)
//! - jetons.rs   : tokenisation
//! - expr.rs     : arbre d’analyse (Noeud)
//! - analyse.rs  : descente récursive jetons -> Noeud
//! - format.rs   : affichage du résultat + arbre parenthésé
//! - eval.rs     : repli post-ordre + pipeline complet

pub mod analyse;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;


// API publique minimale
pub use analyse::analyser;
pub use erreur::ErreurCalcul;
pub use eval::{eval_expression, evaluer, Resultat};
pub use format::format_valeur;
