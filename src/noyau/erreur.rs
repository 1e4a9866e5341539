//! Noyau — erreurs
//!
//! Deux familles, deux réactions côté UI :
//! - structurelles (lexique, syntaxe) : le texte n’est pas une expression, on le laisse tel quel ;
//! - sémantiques (division par zéro, domaine, dépassement) : l’expression est bien formée
//!   mais n’a pas de valeur finie, l’UI affiche la sentinelle d’erreur.

use thiserror::Error;

/// Caractère hors de l’alphabet `[0-9.+\-×÷^√()]`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurLexicale {
    #[error("caractère inattendu: '{caractere}' (position {position})")]
    CaractereInattendu { caractere: char, position: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurSyntaxe {
    #[error("parenthèses non fermées")]
    ParentheseNonFermee,

    #[error("jeton en trop: '{jeton}' (jeton n°{position})")]
    JetonEnTrop { jeton: String, position: usize },

    #[error("opérande manquant avant '{jeton}' (jeton n°{position})")]
    OperandeManquant { jeton: String, position: usize },

    #[error("opérande manquant en fin d’expression")]
    FinInattendue,

    #[error("nombre invalide: '{0}'")]
    NombreInvalide(String),

    #[error("expression trop longue ({0} jetons)")]
    ExpressionTropLongue(usize),

    #[error("imbrication trop profonde")]
    ImbricationTropProfonde,
}

/// Opération hors de son domaine réel.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum Domaine {
    #[error("√ d’un nombre négatif ({0})")]
    RacineNegative(f64),

    #[error("puissance non réelle ({base}^{exposant})")]
    PuissanceNonReelle { base: f64, exposant: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ErreurEvaluation {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("hors domaine: {0}")]
    Domaine(#[from] Domaine),

    #[error("dépassement de capacité")]
    Depassement,
}

/// Erreur du pipeline complet (texte -> valeur).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurCalcul {
    #[error(transparent)]
    Lexicale(#[from] ErreurLexicale),

    #[error(transparent)]
    Syntaxe(#[from] ErreurSyntaxe),

    #[error(transparent)]
    Evaluation(#[from] ErreurEvaluation),
}

impl ErreurCalcul {
    /// Le texte ne dénote pas une expression : l’utilisateur peut continuer à l’éditer.
    pub fn est_structurelle(&self) -> bool {
        matches!(self, Self::Lexicale(_) | Self::Syntaxe(_))
    }

    /// Expression bien formée mais mathématiquement indéfinie.
    pub fn est_semantique(&self) -> bool {
        matches!(self, Self::Evaluation(_))
    }
}
