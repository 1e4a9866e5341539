// src/app.rs
//
// Calculatrice flottante — module App (racine)
// --------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + saisie.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier physique : chiffres, opérateurs (* et / acceptés), ^ ( ) = ;
// Enter = "=", Backspace = ⌫, Escape = remise à zéro totale.

pub mod etat;
pub mod saisie;
pub mod vue;

// Ré-export pratique
pub use etat::AppCalc;
pub use saisie::Touche;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.reset_total();
        }

        for touche in touches_clavier(ctx) {
            self.presser(touche);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}

/// Événements clavier de la frame -> touches de la calculatrice (dans l’ordre de frappe).
fn touches_clavier(ctx: &egui::Context) -> Vec<Touche> {
    ctx.input(|i| {
        let mut out = Vec::new();
        for ev in &i.events {
            match ev {
                egui::Event::Text(t) => out.extend(t.chars().filter_map(Touche::depuis_caractere)),
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => out.push(Touche::Egal),
                    egui::Key::Backspace => out.push(Touche::Retour),
                    _ => {}
                },
                _ => {}
            }
        }
        out
    })
}
