// src/noyau/trig.rs
//
// Fonctions trigonométriques reconnues (sin/cos/tan)
// --------------------------------------------------
// - Argument en radians, arithmétique IEEE double précision
// - tan(π/2) ne lève rien : on rend ce que f64::tan rend

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

impl TrigFn {
    /// Noms acceptés par le découpage, dans l’ordre d’essai.
    pub const TOUTES: [TrigFn; 3] = [TrigFn::Sin, TrigFn::Cos, TrigFn::Tan];

    pub fn nom(self) -> &'static str {
        match self {
            TrigFn::Sin => "sin",
            TrigFn::Cos => "cos",
            TrigFn::Tan => "tan",
        }
    }

    pub fn appliquer(self, x: f64) -> f64 {
        match self {
            TrigFn::Sin => x.sin(),
            TrigFn::Cos => x.cos(),
            TrigFn::Tan => x.tan(),
        }
    }
}

impl fmt::Display for TrigFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}
