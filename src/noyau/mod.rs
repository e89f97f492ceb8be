//! Noyau RPN (f64)
//!
//! Organisation interne :
//! - erreur.rs   : ErreurCalcul (thiserror)
//! - jetons.rs   : tokenisation + doubles négatifs
//! - trig.rs     : sin/cos/tan
//! - rpn.rs      : shunting-yard (moins unaire replié)
//! - eval.rs     : machine à pile + pipeline complet
//! - format.rs   : texte d’affichage d’un résultat

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod trig;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{calculer, calculer_avec_demarche, Demarche};
pub use format::format_nombre;
