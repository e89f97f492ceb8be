// src/config.rs
//
// Réglages de l’application (natif + web)
// ---------------------------------------
// Valeurs livrées par Default, surcharge possible par variables d’environnement
// (natif seulement : en wasm32, std::env ne voit rien et on garde les défauts).

/// Variable d’environnement : filtre de logs (syntaxe env_logger, ex: "debug").
pub const ENV_LOG: &str = "CALC_LOG";

/// Variable d’environnement : si présente, pas d’écran “STOP” sur ÷0.
pub const ENV_SANS_DIVERSION: &str = "CALC_SANS_DIVERSION";

#[derive(Clone, Debug, PartialEq)]
pub struct Reglages {
    pub titre: String,
    pub taille_fenetre: [f32; 2],
    pub taille_min: [f32; 2],

    /// Filtre par défaut si RUST_LOG n’est pas défini.
    pub niveau_log: String,

    /// Écran de diversion quand l’affichage contient une division par zéro littérale.
    pub diversion_div_zero: bool,

    /// Diviseur appliqué par la touche %.
    pub diviseur_pourcentage: f64,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            titre: "Calculatrice RPN".to_string(),
            taille_fenetre: [360.0, 560.0],
            taille_min: [300.0, 480.0],
            niveau_log: "info".to_string(),
            diversion_div_zero: true,
            diviseur_pourcentage: 100.0,
        }
    }
}

impl Reglages {
    /// Défauts + surcharges lues dans l’environnement.
    pub fn depuis_env() -> Self {
        Self::default().avec_env(|cle| std::env::var(cle).ok())
    }

    /// Applique les surcharges données par `lire` (injectable pour les tests).
    pub fn avec_env(mut self, lire: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(niveau) = lire(ENV_LOG) {
            let niveau = niveau.trim();
            if !niveau.is_empty() {
                self.niveau_log = niveau.to_string();
            }
        }
        if lire(ENV_SANS_DIVERSION).is_some() {
            self.diversion_div_zero = false;
        }
        self
    }
}
