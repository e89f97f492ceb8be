//! Noyau : évaluation (pipeline réel)
//!
//! tokenize -> doubles négatifs -> RPN -> machine à pile -> f64
//!
//! Chaque appel repart de la chaîne complète : aucun état conservé entre deux calculs.

use log::{debug, trace};

use super::erreur::ErreurCalcul;
use super::jetons::{format_jetons, remplacer_doubles_negatifs, tokenize, Jeton};
use super::rpn::to_rpn;

/// Trace textuelle du pipeline (affichée dans le panneau “Démarche”).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub normalises: String,
    pub rpn: String,
}

/// API publique : évalue une expression infixe.
pub fn calculer(expression: &str) -> Result<f64, ErreurCalcul> {
    let jetons = tokenize(expression)?;
    let normalises = remplacer_doubles_negatifs(&jetons);
    let rpn = to_rpn(&normalises)?;
    debug!("rpn: {}", format_jetons(&rpn));

    let resultat = evaluer_rpn(&rpn)?;
    debug!("{expression:?} = {resultat}");
    Ok(resultat)
}

/// Comme `calculer`, mais retourne aussi la démarche (jetons, normalisés, RPN).
pub fn calculer_avec_demarche(expression: &str) -> Result<(f64, Demarche), ErreurCalcul> {
    // 1) Jetons
    let jetons = tokenize(expression)?;
    let jetons_txt = format_jetons(&jetons);

    // 2) "--" -> "+"
    let normalises = remplacer_doubles_negatifs(&jetons);
    let normalises_txt = format_jetons(&normalises);

    // 3) RPN
    let rpn = to_rpn(&normalises)?;
    let rpn_txt = format_jetons(&rpn);
    debug!("jetons: {jetons_txt} | normalisés: {normalises_txt} | rpn: {rpn_txt}");

    // 4) Machine à pile
    let resultat = evaluer_rpn(&rpn)?;
    debug!("{expression:?} = {resultat}");

    let d = Demarche {
        jetons: jetons_txt,
        normalises: normalises_txt,
        rpn: rpn_txt,
    };
    Ok((resultat, d))
}

/// Évalue une suite RPN.
///
/// - Nombre : lu en f64, empilé
/// - Binaire : dépile `droite` puis `gauche`, empile `gauche OP droite`
/// - Trig : dépile un opérande (radians)
///
/// La division par zéro suit IEEE (∞ ou NaN) : ce n’est pas une erreur ici.
pub fn evaluer_rpn(rpn: &[Jeton]) -> Result<f64, ErreurCalcul> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Jeton::Nombre(texte) => {
                let v: f64 = texte
                    .parse()
                    .map_err(|_| ErreurCalcul::NombreInvalide(texte.clone()))?;
                pile.push(v);
            }

            Jeton::Plus | Jeton::Moins | Jeton::Fois | Jeton::Divise => {
                // pile vide != opérande nul : on teste la présence, jamais la valeur
                let droite = pile.pop().ok_or_else(|| ErreurCalcul::pile(tok.to_string()))?;
                let gauche = pile.pop().ok_or_else(|| ErreurCalcul::pile(tok.to_string()))?;

                let v = match tok {
                    Jeton::Plus => gauche + droite,
                    Jeton::Moins => gauche - droite,
                    Jeton::Fois => gauche * droite,
                    _ => gauche / droite,
                };
                pile.push(v);
            }

            Jeton::Trig(f) => {
                let x = pile.pop().ok_or_else(|| ErreurCalcul::pile(f.nom()))?;
                pile.push(f.appliquer(x));
            }

            // to_rpn ne laisse jamais passer de parenthèse
            Jeton::ParG | Jeton::ParD => return Err(ErreurCalcul::ParenthesesDesequilibrees),
        }

        trace!("eval: {tok} -> {pile:?}");
    }

    match pile.as_slice() {
        [resultat] => Ok(*resultat),
        [] => Err(ErreurCalcul::pile("le résultat")),
        reste => Err(ErreurCalcul::OperandesEnTrop(reste.len())),
    }
}
