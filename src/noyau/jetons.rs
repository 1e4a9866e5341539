// src/noyau/jetons.rs

use std::fmt;

use super::erreur::ErreurLexicale;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    // Lexème brut : la conversion en f64 est faite par l’analyseur
    // (un "." isolé est un jeton valide ici, refusé plus tard).
    Nombre(String),

    Plus,
    Moins,
    Fois,    // ×
    Divise,  // ÷
    Chapeau, // ^
    Racine,  // √

    ParG,
    ParD,
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(n) => f.write_str(n),
            Jeton::Plus => f.write_str("+"),
            Jeton::Moins => f.write_str("-"),
            Jeton::Fois => f.write_str("×"),
            Jeton::Divise => f.write_str("÷"),
            Jeton::Chapeau => f.write_str("^"),
            Jeton::Racine => f.write_str("√"),
            Jeton::ParG => f.write_str("("),
            Jeton::ParD => f.write_str(")"),
        }
    }
}

/// Tokenize le texte de l’affichage en jetons.
/// Supporte:
/// - nombres décimaux : suite de chiffres avec au plus un '.' (ex: 12, 3.5, .5, 5.)
/// - opérateurs + - × ÷ ^
/// - racine carrée √ (préfixe)
/// - parenthèses ( )
///
/// Tout autre caractère (espaces compris) est refusé : l’affichage n’en produit jamais.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurLexicale> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        let simple = match c {
            '+' => Some(Jeton::Plus),
            '-' => Some(Jeton::Moins),
            '×' => Some(Jeton::Fois),
            '÷' => Some(Jeton::Divise),
            '^' => Some(Jeton::Chapeau),
            '√' => Some(Jeton::Racine),
            '(' => Some(Jeton::ParG),
            ')' => Some(Jeton::ParD),
            _ => None,
        };
        if let Some(j) = simple {
            out.push(j);
            i += 1;
            continue;
        }

        // Nombre : course maximale de chiffres, un seul point.
        // Un second point termine le nombre (il en commence un autre).
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut point_vu = false;
            while i < chars.len() {
                match chars[i] {
                    d if d.is_ascii_digit() => i += 1,
                    '.' if !point_vu => {
                        point_vu = true;
                        i += 1;
                    }
                    _ => break,
                }
            }
            out.push(Jeton::Nombre(chars[start..i].iter().collect()));
            continue;
        }

        return Err(ErreurLexicale::CaractereInattendu {
            caractere: c,
            position: i,
        });
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Jeton]) -> String {
    tokens
        .iter()
        .map(Jeton::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
