//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’affichage de la calculatrice (chaîne accumulée touche par touche),
//! le dernier message d’erreur, la démarche, et l’écran de diversion “÷0”.
//!
//! Contrats :
//! - Chaque évaluation envoie l’affichage COMPLET au noyau (pas d’analyse incrémentale).
//! - Le test “÷0” est une heuristique d’affichage : le noyau ne le fait jamais.
//! - Sur erreur, l’affichage est conservé (l’utilisateur corrige ou efface).
//! - Les "(" restées ouvertes (touches sin/cos/tan) sont fermées avant l’appel au noyau.
//! - Un résultat non fini ("Infinity", "NaN") n’est pas une expression : la touche
//!   suivante repart d’un affichage vide.

use log::{info, warn};

use crate::config::Reglages;
use crate::noyau::trig::TrigFn;
use crate::noyau::{calculer_avec_demarche, format_nombre, Demarche};

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub affichage: String,

    // --- sorties ---
    pub erreur: String,
    pub demarche: Demarche,

    // --- diversion ÷0 ---
    pub diversion: bool,
    diversion_autorisee: bool,

    // --- paramètres ---
    diviseur_pourcentage: f64,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’affichage après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_reglages(&Reglages::default())
    }
}

impl AppCalc {
    pub fn avec_reglages(reglages: &Reglages) -> Self {
        Self {
            affichage: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            diversion: false,
            diversion_autorisee: reglages.diversion_div_zero,
            diviseur_pourcentage: reglages.diviseur_pourcentage,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// Chiffre, point, opérateur ou parenthèse : ajouté tel quel.
    pub fn ajouter(&mut self, touche: &str) {
        self.repartir_si_non_fini();
        self.affichage.push_str(touche);
        self.focus_entree = true;
    }

    /// Touche trig : "sin(" / "cos(" / "tan(".
    pub fn ajouter_fonction(&mut self, f: TrigFn) {
        self.repartir_si_non_fini();
        self.affichage.push_str(f.nom());
        self.affichage.push('(');
        self.focus_entree = true;
    }

    /// C : remet l’affichage à vide.
    pub fn effacer(&mut self) {
        self.affichage.clear();
        self.erreur.clear();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier jeton tapé ("sin(" d’un coup, sinon un caractère).
    pub fn retour_arriere(&mut self) {
        if self.resultat_non_fini() {
            self.effacer();
            return;
        }
        for f in TrigFn::TOUTES {
            let motif = format!("{}(", f.nom());
            if self.affichage.ends_with(&motif) {
                self.affichage.truncate(self.affichage.len() - motif.len());
                self.focus_entree = true;
                return;
            }
        }
        self.affichage.pop();
        self.focus_entree = true;
    }

    /// = : remplace l’affichage par le résultat.
    pub fn evaluer(&mut self) {
        self.calcul(1.0);
    }

    /// % : comme =, puis divise par le diviseur réglé (100).
    pub fn pourcentage(&mut self) {
        self.calcul(self.diviseur_pourcentage);
    }

    /// Ferme l’écran “STOP” et repart d’un affichage vide.
    pub fn fermer_diversion(&mut self) {
        self.diversion = false;
        self.effacer();
    }

    /// L’affichage montre "Infinity", "-Infinity" ou "NaN" (résultat précédent).
    pub fn resultat_non_fini(&self) -> bool {
        matches!(self.affichage.as_str(), "Infinity" | "-Infinity" | "NaN")
    }

    fn repartir_si_non_fini(&mut self) {
        if self.resultat_non_fini() {
            self.affichage.clear();
            self.erreur.clear();
        }
    }

    fn calcul(&mut self, diviseur: f64) {
        self.focus_entree = true;

        // "Infinity" = "Infinity" : rien à recalculer
        if self.resultat_non_fini() {
            return;
        }

        if self.diversion_autorisee && divise_par_zero(&self.affichage) {
            warn!("division par zéro tapée: {:?}", self.affichage);
            self.diversion = true;
            return;
        }

        let expression = fermer_parentheses(&self.affichage);
        match calculer_avec_demarche(&expression) {
            Ok((v, d)) => {
                let texte = format_nombre(v / diviseur);
                info!("{expression} = {texte}");
                self.affichage = texte;
                self.demarche = d;
                self.erreur.clear();
            }
            Err(e) => {
                self.erreur = e.to_string();
                // démarche non fiable si l’évaluation échoue
                self.demarche = Demarche::default();
            }
        }
    }
}

/// Ajoute les ")" manquantes en fin de saisie ("sin(0" => "sin(0)").
///
/// Une ")" en trop n’est pas corrigée : le noyau la refuse.
pub fn fermer_parentheses(texte: &str) -> String {
    let ouvertes = texte.chars().filter(|c| *c == '(').count();
    let fermees = texte.chars().filter(|c| *c == ')').count();
    let mut complet = texte.to_string();
    for _ in fermees..ouvertes {
        complet.push(')');
    }
    complet
}

/// Heuristique d’affichage : "÷0" (ou "/0") non suivi d’un chiffre ni d’un point.
///
/// "6÷0" et "6÷0+1" => true ; "6÷0.5" et "6÷05" => false.
pub fn divise_par_zero(texte: &str) -> bool {
    let chars: Vec<char> = texte.chars().collect();
    chars.windows(2).enumerate().any(|(i, w)| {
        matches!(w[0], '÷' | '/')
            && w[1] == '0'
            && !matches!(chars.get(i + 2), Some(c) if c.is_ascii_digit() || *c == '.')
    })
}
