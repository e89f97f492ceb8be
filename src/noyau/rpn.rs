// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir la suite de jetons (déjà normalisée) en RPN (postfix)
//
// Règles:
// - Moins unaire (en tête, ou après un opérateur binaire / '(') :
//   replié avec le nombre suivant en un seul littéral "-n", envoyé directement en sortie.
//   Il ne passe jamais par la pile d’opérateurs.
// - Opérateurs binaires : tous associatifs à gauche (on dépile tant que prec(sommet) >= prec(jeton)).
// - sin/cos/tan : empilés avec la précédence 3, sortis quand une construction de précédence
//   inférieure ou égale les force, ou au vidage final.

use log::trace;

use super::erreur::ErreurCalcul;
use super::jetons::Jeton;

/// Précédence : plus haut = lie plus fort. 0 pour les parenthèses.
pub fn precedence(t: &Jeton) -> u8 {
    match t {
        Jeton::Plus | Jeton::Moins => 1,
        Jeton::Fois | Jeton::Divise => 2,
        Jeton::Trig(_) => 3,
        _ => 0,
    }
}

fn est_moins_unaire(i: usize, jetons: &[Jeton]) -> bool {
    if jetons[i] != Jeton::Moins {
        return false;
    }
    match i.checked_sub(1).map(|p| &jetons[p]) {
        None => true,
        Some(prev) => prev.est_operateur_binaire() || *prev == Jeton::ParG,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [3, +, 4, ×, 2, ÷, (, 1, -, 5, )]
///   rpn:    [3, 4, 2, ×, 1, 5, -, ÷, +]
pub fn to_rpn(jetons: &[Jeton]) -> Result<Vec<Jeton>, ErreurCalcul> {
    if jetons.is_empty() {
        return Err(ErreurCalcul::FluxJetonsVide);
    }

    let mut out: Vec<Jeton> = Vec::with_capacity(jetons.len());
    let mut ops: Vec<Jeton> = Vec::new();

    let mut i = 0;
    while i < jetons.len() {
        if est_moins_unaire(i, jetons) {
            // on consomme aussi le jeton suivant
            i += 1;
            match jetons.get(i) {
                Some(Jeton::Nombre(texte)) => out.push(Jeton::Nombre(format!("-{texte}"))),
                Some(autre) => return Err(ErreurCalcul::MoinsUnaireOrphelin(autre.to_string())),
                None => return Err(ErreurCalcul::pile("moins unaire")),
            }
            i += 1;
            continue;
        }

        let tok = &jetons[i];
        match tok {
            Jeton::Nombre(_) => out.push(tok.clone()),

            Jeton::Plus | Jeton::Moins | Jeton::Fois | Jeton::Divise => {
                while let Some(top) = ops.last() {
                    if precedence(top) < precedence(tok) {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }
                ops.push(tok.clone());
            }

            Jeton::ParG | Jeton::Trig(_) => ops.push(tok.clone()),

            Jeton::ParD => {
                // dépile jusqu’à '(' ; la '(' est jetée
                loop {
                    match ops.pop() {
                        Some(Jeton::ParG) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurCalcul::ParenthesesDesequilibrees),
                    }
                }
            }
        }

        trace!("rpn: jeton={tok} sortie={} pile={}", out.len(), ops.len());
        i += 1;
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if op == Jeton::ParG {
            return Err(ErreurCalcul::ParenthesesDesequilibrees);
        }
        out.push(op);
    }

    Ok(out)
}
