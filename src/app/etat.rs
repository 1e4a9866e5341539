//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (affichage, erreur, démarche)
//! et offrir des opérations simples, sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Rien n’est conservé entre deux lancements.

/// Texte de l’affichage au démarrage et après "C".
const AFFICHAGE_INITIAL: &str = "0";

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub arbre: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- affichage (l’expression en cours, ou le résultat, ou la sentinelle) ---
    pub affichage: String,

    // --- sorties ---
    pub erreur: String, // message de la dernière évaluation refusée

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            affichage: AFFICHAGE_INITIAL.to_string(),
            erreur: String::new(),
            demarche: Demarche::default(),
        }
    }
}

impl AppCalc {
    /// Remise à zéro totale (affichage + erreur + démarche).
    pub fn reset_total(&mut self) {
        *self = Self::default();
    }

    pub fn clear_erreur(&mut self) {
        self.erreur.clear();
    }

    /// Utilitaire : placer une erreur.
    ///
    /// La démarche de l’évaluation précédente ne décrit plus l’affichage : on l’efface.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
    }

    /// Utilitaire : déposer la démarche d’une évaluation réussie.
    pub fn set_resultat(&mut self, demarche: Demarche) {
        self.erreur.clear();
        self.demarche = demarche;
    }
}
