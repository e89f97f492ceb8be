// src/app/vue.rs
//
// Vue (UI egui), natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (affichage focalisé, ou qui vient de rendre le focus), Escape efface (app.rs)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Écran “STOP” à la place du pavé quand une division par zéro est tapée

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::trig::TrigFn;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        if self.diversion {
            self.ui_diversion(ui);
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_affichage(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.affichage)
                .desired_width(ui.available_width())
                .font(egui::TextStyle::Heading)
                .hint_text("0")
                .id_salt("affichage_edit"),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Un TextEdit monoligne rend le focus dans la frame même où il lit Enter.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.evaluer();
        }

        if !self.erreur.is_empty() {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "sin", Touche::Fonction(TrigFn::Sin));
                self.bouton(ui, "cos", Touche::Fonction(TrigFn::Cos));
                self.bouton(ui, "tan", Touche::Fonction(TrigFn::Tan));
                self.bouton(ui, "C", Touche::Effacer);
                ui.end_row();

                self.bouton(ui, "(", Touche::Texte("("));
                self.bouton(ui, ")", Touche::Texte(")"));
                self.bouton(ui, "%", Touche::Pourcentage);
                self.bouton(ui, "÷", Touche::Texte("÷"));
                ui.end_row();

                for ligne in [["7", "8", "9", "×"], ["4", "5", "6", "-"], ["1", "2", "3", "+"]] {
                    for t in ligne {
                        self.bouton(ui, t, Touche::Texte(t));
                    }
                    ui.end_row();
                }

                self.bouton(ui, "0", Touche::Texte("0"));
                self.bouton(ui, ".", Touche::Texte("."));
                self.bouton(ui, "DEL", Touche::RetourArriere);
                self.bouton(ui, "=", Touche::Egal);
                ui.end_row();
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(
                    ui,
                    "Normalisés",
                    "demarche_normalises",
                    &self.demarche.normalises,
                );
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn ui_diversion(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 4.0);
            ui.label(
                egui::RichText::new("STOP")
                    .size(72.0)
                    .strong()
                    .color(egui::Color32::RED),
            );
            ui.add_space(8.0);
            ui.label("On ne divise pas par zéro.");
            ui.add_space(16.0);
            if ui
                .add_sized([120.0, 36.0], egui::Button::new("Compris"))
                .clicked()
            {
                self.fermer_diversion();
            }
        });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        // Lecture seule : Frame + Label monospace, pas de TextEdit.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized([64.0, 44.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Texte(t) => self.ajouter(t),
            Touche::Fonction(f) => self.ajouter_fonction(f),
            Touche::Effacer => self.effacer(),
            Touche::RetourArriere => self.retour_arriere(),
            Touche::Pourcentage => self.pourcentage(),
            Touche::Egal => self.evaluer(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Texte(&'static str),
    Fonction(TrigFn),
    Effacer,
    RetourArriere,
    Pourcentage,
    Egal,
}
