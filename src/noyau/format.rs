// src/noyau/format.rs

use super::expr::Noeud;

/* ------------------------ Résultat (politique d’affichage) ------------------------ */

/// Valeur -> texte de l’affichage.
/// - partie fractionnaire nulle : entier, tous les chiffres (ex: 14, -5, 1152921504606846976)
/// - sinon : flottant complet (ex: 0.30000000000000004, 0.0000000009313225746154785)
///
/// Jamais de notation scientifique : le texte reste dans l’alphabet de l’affichage,
/// donc ré-évaluable après "=".
pub fn format_valeur(v: f64) -> String {
    // -0 s’affiche 0
    if v == 0.0 {
        return "0".to_string();
    }
    if v.fract() == 0.0 {
        // précision explicite : développement décimal exact (pas de zéros de remplissage)
        return format!("{v:.0}");
    }
    // plus courte écriture qui relit le même f64
    format!("{v}")
}

/* ------------------------ Arbre (démarche) ------------------------ */

/// Arbre -> texte entièrement parenthésé : "2+3×4" => "(2 + (3 × 4))".
pub fn format_arbre(noeud: &Noeud) -> String {
    let mut out = String::new();
    ecrire_arbre(noeud, &mut out);
    out
}

fn ecrire_arbre(noeud: &Noeud, out: &mut String) {
    match noeud {
        Noeud::Litteral(v) => out.push_str(&format_valeur(*v)),

        Noeud::Oppose(x) => {
            out.push('-');
            ecrire_arbre(x, out);
        }

        Noeud::Racine(x) => {
            out.push('√');
            ecrire_arbre(x, out);
        }

        Noeud::Binaire(op, a, b) => {
            out.push('(');
            ecrire_arbre(a, out);
            out.push(' ');
            out.push(op.symbole());
            out.push(' ');
            ecrire_arbre(b, out);
            out.push(')');
        }
    }
}
