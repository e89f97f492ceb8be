// src/app.rs
//
// Calculatrice RPN : module App (racine)
// -------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Enter est géré dans vue.rs (seulement quand l’affichage a le focus).

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = touche "C" (ou ferme l’écran STOP)
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            if self.diversion {
                self.fermer_diversion();
            } else {
                self.effacer();
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
