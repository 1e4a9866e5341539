// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé 4 colonnes : C ⌫ ± 1/x, √x xʸ ( ), chiffres, opérateurs, =
// - Affichage en lecture seule : le texte ne change que par les touches (saisie.rs)
// - Démarche repliable : jetons + arbre parenthésé de la dernière évaluation

use eframe::egui;

use super::etat::AppCalc;
use super::saisie::Touche;

const TAILLE_BOUTON: [f32; 2] = [64.0, 44.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_affichage(ui);

        if !self.erreur.is_empty() {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }

        ui.add_space(8.0);
        self.ui_pave(ui);

        ui.add_space(8.0);
        ui.separator();
        self.ui_demarche(ui);
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(&self.affichage).monospace().size(28.0));
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        use Touche::*;

        let lignes: [[(&str, Touche); 4]; 6] = [
            [
                ("C", Effacer),
                ("⌫", Retour),
                ("±", ChangerSigne),
                ("1/x", Inverse),
            ],
            [
                ("√x", Racine),
                ("xʸ", Puissance),
                ("(", ParenOuvrante),
                (")", ParenFermante),
            ],
            [
                ("7", Chiffre('7')),
                ("8", Chiffre('8')),
                ("9", Chiffre('9')),
                ("÷", Operateur('÷')),
            ],
            [
                ("4", Chiffre('4')),
                ("5", Chiffre('5')),
                ("6", Chiffre('6')),
                ("×", Operateur('×')),
            ],
            [
                ("1", Chiffre('1')),
                ("2", Chiffre('2')),
                ("3", Chiffre('3')),
                ("-", Operateur('-')),
            ],
            [
                ("0", Chiffre('0')),
                (".", Point),
                ("=", Egal),
                ("+", Operateur('+')),
            ],
        ];

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in lignes {
                    for (label, touche) in ligne {
                        self.bouton(ui, label, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let texte = egui::RichText::new(label).size(18.0);
        if ui.add_sized(TAILLE_BOUTON, egui::Button::new(texte)).clicked() {
            self.presser(touche);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "Arbre", "demarche_arbre", &self.demarche.arbre);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));

        // Lecture seule, cadre visuel via Frame + Label monospace.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }
}
