//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : Ok => valeur finie ; Err => famille structurelle OU sémantique, jamais de panique

use std::time::{Duration, Instant};

use super::eval_expression;

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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

/// Alphabet de l’affichage + un intrus (pour les erreurs lexicales).
const ALPHABET: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '×', '÷', '^', '√', '(', ')',
    '#',
];

/// Texte quelconque : ce que l’affichage pourrait contenir après des éditions libres.
fn gen_bruit(rng: &mut Rng) -> String {
    let n = 1 + rng.pick(16) as usize;
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

fn gen_nombre(rng: &mut Rng) -> String {
    let entier = rng.pick(10);
    if rng.coin() {
        format!("{entier}.{}", rng.pick(10))
    } else {
        format!("{entier}")
    }
}

fn gen_atome(rng: &mut Rng) -> String {
    match rng.pick(4) {
        0 => format!("√{}", gen_nombre(rng)),           // racine d’un littéral >= 0
        1 => format!("{}^{}", gen_nombre(rng), rng.pick(4)), // exposant entier borné
        _ => gen_nombre(rng),
    }
}

/// Expression bien formée, sans division par zéro ni racine négative.
fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atome(rng);
    }

    match rng.pick(6) {
        0 => gen_atome(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}×{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        // diviseur littéral non nul
        4 => format!("({}÷{})", gen_expr(rng, depth - 1), 1 + rng.pick(9)),
        _ => format!("-{}", gen_expr(rng, depth - 1)),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);
        match eval_expression(&expr) {
            Ok(r) => assert!(r.valeur.is_finite(), "expr={expr:?} valeur={}", r.valeur),
            Err(e) => panic!("erreur non attendue: expr={expr:?} err={e}"),
        }
    }
}

#[test]
fn fuzz_safe_bruit_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;
    let mut seen_struct = 0usize;

    for _ in 0..500 {
        budget(t0, max);

        let texte = gen_bruit(&mut rng);
        match eval_expression(&texte) {
            Ok(r) => {
                assert!(r.valeur.is_finite(), "texte={texte:?}");
                seen_ok += 1;
            }
            Err(e) => {
                // exactement une des deux familles
                assert_ne!(e.est_structurelle(), e.est_semantique(), "texte={texte:?}");
                if e.est_structurelle() {
                    seen_struct += 1;
                }
            }
        }
    }

    // On veut voir un mix, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 0, "aucun succès: fuzz trop “sale”");
    assert!(seen_struct > 0, "aucune erreur structurelle vue");
}

#[test]
fn fuzz_safe_determinisme() {
    // Même seed => mêmes textes => mêmes sorties
    let sortie = |seed: u64| -> Vec<String> {
        let mut rng = Rng::new(seed);
        (0..50)
            .map(|_| {
                let texte = gen_bruit(&mut rng);
                match eval_expression(&texte) {
                    Ok(r) => format!("ok {}", r.valeur.to_bits()),
                    Err(e) => format!("err {e}"),
                }
            })
            .collect()
    };

    assert_eq!(sortie(42), sortie(42));
}
