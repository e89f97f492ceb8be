// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du noyau. Aucune n’est rattrapée en interne : l’appelant décide.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalcul {
    /// Le découpage n’a produit aucun jeton.
    #[error("expression vide")]
    ExpressionVide,

    /// La conversion RPN a reçu une suite vide.
    #[error("aucun jeton à convertir")]
    FluxJetonsVide,

    /// Une opération (binaire, trig, moins unaire) manque d’opérandes.
    #[error("pile insuffisante pour {operation}")]
    PileInsuffisante { operation: String },

    /// '(' jamais refermée, ou ')' sans '(' correspondante.
    #[error("parenthèses déséquilibrées")]
    ParenthesesDesequilibrees,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    /// Suite de chiffres/points qui n’est pas un nombre (ex: "1.2.3").
    #[error("nombre invalide: {0}")]
    NombreInvalide(String),

    /// Moins unaire suivi d’autre chose qu’un nombre (ex: "-(").
    #[error("moins unaire sans nombre (suivi de '{0}')")]
    MoinsUnaireOrphelin(String),

    /// Fin d’évaluation avec plusieurs valeurs sur la pile (ex: "2(3)").
    #[error("expression incomplète: {0} valeurs restantes")]
    OperandesEnTrop(usize),
}

impl ErreurCalcul {
    pub(crate) fn pile(operation: impl Into<String>) -> Self {
        ErreurCalcul::PileInsuffisante {
            operation: operation.into(),
        }
    }
}
