// src/noyau/jetons.rs
//
// Découpage en jetons + réécriture des doubles négatifs
// -----------------------------------------------------
// Scanner explicite par classe de caractère :
// - suite chiffres/point   -> Nombre (texte conservé tel quel)
// - + - × ÷ ( )            -> opérateur / parenthèse (un caractère)
// - sin | cos | tan        -> fonction trig
//
// Alias clavier : x et * pour ×, / pour ÷. Les espaces sont ignorés.

use std::fmt;

use super::erreur::ErreurCalcul;
use super::trig::TrigFn;

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    /// Littéral numérique. Le signe '-' n’y apparaît qu’après repliement du moins unaire (rpn.rs).
    Nombre(String),

    Plus,
    Moins,
    Fois,
    Divise,

    Trig(TrigFn),

    ParG,
    ParD,
}

impl Jeton {
    pub fn est_operateur_binaire(&self) -> bool {
        matches!(self, Jeton::Plus | Jeton::Moins | Jeton::Fois | Jeton::Divise)
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(texte) => f.write_str(texte),
            Jeton::Plus => f.write_str("+"),
            Jeton::Moins => f.write_str("-"),
            Jeton::Fois => f.write_str("×"),
            Jeton::Divise => f.write_str("÷"),
            Jeton::Trig(t) => write!(f, "{t}"),
            Jeton::ParG => f.write_str("("),
            Jeton::ParD => f.write_str(")"),
        }
    }
}

/// Découpe une expression en jetons.
///
/// Erreurs:
/// - `ExpressionVide` si rien d’utile (chaîne vide ou seulement des espaces)
/// - `NombreInvalide` pour une suite comme "1.2.3" ou "."
/// - `CaractereInattendu` hors alphabet
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Jeton::ParG),
            ')' => Some(Jeton::ParD),
            '+' => Some(Jeton::Plus),
            '-' => Some(Jeton::Moins),
            '×' | 'x' | '*' => Some(Jeton::Fois),
            '÷' | '/' => Some(Jeton::Divise),
            _ => None,
        };
        if let Some(jeton) = simple {
            out.push(jeton);
            i += 1;
            continue;
        }

        // Nombre : chiffres et au plus un point
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            let points = texte.matches('.').count();
            if points > 1 || texte.parse::<f64>().is_err() {
                return Err(ErreurCalcul::NombreInvalide(texte));
            }
            out.push(Jeton::Nombre(texte));
            continue;
        }

        // Mots-clés trig (insensible à la casse)
        if let Some(t) = mot_cle_trig(&chars[i..]) {
            out.push(Jeton::Trig(t));
            i += t.nom().len();
            continue;
        }

        return Err(ErreurCalcul::CaractereInattendu(c));
    }

    if out.is_empty() {
        return Err(ErreurCalcul::ExpressionVide);
    }
    Ok(out)
}

fn mot_cle_trig(reste: &[char]) -> Option<TrigFn> {
    TrigFn::TOUTES.into_iter().find(|t| {
        let nom = t.nom();
        reste.len() >= nom.len()
            && reste
                .iter()
                .zip(nom.chars())
                .all(|(c, attendu)| c.to_ascii_lowercase() == attendu)
    })
}

/// Remplace chaque paire "- -" consécutive par un seul "+".
///
/// Doit passer AVANT la détection du moins unaire : "5--3" doit se présenter comme "5+3".
///
/// Exemple: [5, -, -, 3] -> [5, +, 3]
pub fn remplacer_doubles_negatifs(jetons: &[Jeton]) -> Vec<Jeton> {
    let mut out = Vec::with_capacity(jetons.len());
    let mut i = 0;

    while i < jetons.len() {
        if jetons[i] == Jeton::Moins && jetons.get(i + 1) == Some(&Jeton::Moins) {
            out.push(Jeton::Plus);
            i += 2;
        } else {
            out.push(jetons[i].clone());
            i += 1;
        }
    }

    out
}

/// Format utilitaire (démarche) : jetons séparés par des espaces.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|j| j.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
