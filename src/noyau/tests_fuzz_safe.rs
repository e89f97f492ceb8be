//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - référence indépendante (descente récursive) sur les expressions bien formées
//! - alphabet des touches au hasard : erreur typée acceptée, panique jamais

use std::time::{Duration, Instant};

use super::{calculer, calculer_avec_demarche};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Référence : descente récursive ------------------------ */

struct Reference<'a> {
    chars: &'a [char],
    pos: usize,
}

impl Reference<'_> {
    fn eval(s: &str) -> f64 {
        let chars: Vec<char> = s.chars().collect();
        let mut r = Reference {
            chars: &chars,
            pos: 0,
        };
        let v = r.somme();
        assert_eq!(r.pos, chars.len(), "référence: reste non lu dans {s:?}");
        v
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn somme(&mut self) -> f64 {
        let mut acc = self.produit();
        while let Some(c @ ('+' | '-')) = self.peek() {
            self.pos += 1;
            let b = self.produit();
            acc = if c == '+' { acc + b } else { acc - b };
        }
        acc
    }

    fn produit(&mut self) -> f64 {
        let mut acc = self.facteur();
        while let Some(c @ ('×' | '÷')) = self.peek() {
            self.pos += 1;
            let b = self.facteur();
            acc = if c == '×' { acc * b } else { acc / b };
        }
        acc
    }

    fn facteur(&mut self) -> f64 {
        if self.peek() == Some('(') {
            self.pos += 1;
            let v = self.somme();
            assert_eq!(self.peek(), Some(')'));
            self.pos += 1;
            return v;
        }
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '.') {
            self.pos += 1;
        }
        let texte: String = self.chars[start..self.pos].iter().collect();
        texte
            .parse()
            .unwrap_or_else(|_| panic!("référence: nombre {texte:?}"))
    }
}

fn meme_valeur(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(4) {
        0 => format!("{}", rng.pick(10)),
        1 => format!("{}", rng.pick(1000)),
        2 => format!("{}.{}", rng.pick(100), rng.pick(100)),
        _ => format!("0.{}", rng.pick(10)),
    }
}

/// Expression bien formée, sans signe unaire.
fn gen_expr(rng: &mut Rng, depth: usize, avec_mul: bool) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    let ops: &[&str] = if avec_mul {
        &["+", "-", "×", "÷"]
    } else {
        &["+", "-"]
    };

    match rng.pick(4) {
        0 => gen_nombre(rng),
        1 => format!("({})", gen_expr(rng, depth - 1, avec_mul)),
        _ => {
            let op = ops[rng.pick(ops.len() as u32) as usize];
            format!(
                "{}{op}{}",
                gen_expr(rng, depth - 1, avec_mul),
                gen_expr(rng, depth - 1, avec_mul)
            )
        }
    }
}

/// Suite de touches au hasard (alphabet des boutons), mal formée la plupart du temps.
fn gen_touches(rng: &mut Rng, longueur: usize) -> String {
    const TOUCHES: [&str; 19] = [
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "×", "÷", "(", ")",
        "sin(", "cos(",
    ];
    (0..longueur)
        .map(|_| TOUCHES[rng.pick(TOUCHES.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_plus_moins_conforme_a_la_reference() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5, false);
        let attendu = Reference::eval(&expr);
        let obtenu = calculer(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));

        assert!(
            meme_valeur(obtenu, attendu),
            "expr={expr:?} attendu={attendu} obtenu={obtenu}"
        );
    }
}

#[test]
fn fuzz_safe_quatre_operations_conforme_a_la_reference() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5, true);
        let attendu = Reference::eval(&expr);
        let obtenu = calculer(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));

        // même ordre d’opérations IEEE => égalité exacte attendue
        assert!(
            meme_valeur(obtenu, attendu),
            "expr={expr:?} attendu={attendu} obtenu={obtenu}"
        );
    }
}

#[test]
fn fuzz_safe_touches_au_hasard_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xFEED_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for i in 0..400 {
        budget(t0, max);

        let expr = gen_touches(&mut rng, 1 + i % 12);

        match calculer_avec_demarche(&expr) {
            Ok((v, d)) => {
                assert!(!d.rpn.contains('(') && !d.rpn.contains(')'));
                // déterminisme : deux appels, même réponse
                let w = calculer(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
                assert!(meme_valeur(v, w), "expr={expr:?}");
                seen_ok += 1;
            }
            Err(e) => {
                assert_eq!(calculer(&expr), Err(e), "expr={expr:?}");
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}
