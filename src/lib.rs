//! Calculatrice flottante
//!
//! - noyau : texte de l’affichage -> jetons -> arbre -> f64 (erreurs typées)
//! - app   : règles du clavier + fenêtre egui (natif + web)

pub mod app;
pub mod noyau;
