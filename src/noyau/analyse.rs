// src/noyau/analyse.rs
//
// Descente récursive : jetons -> arbre (Noeud)
//
// Grammaire (précédence croissante) :
//   expression := terme (('+' | '-') terme)*        gauche
//   terme      := puissance (('×' | '÷') puissance)* gauche
//   puissance  := unaire ('^' puissance)?           droite : 2^3^2 = 2^(3^2)
//   unaire     := '-' unaire | '√' unaire | atome
//   atome      := Nombre | '(' expression ')'
//
// L’état de l’analyseur est la position courante, qui ne recule jamais.

use super::erreur::{ErreurCalcul, ErreurSyntaxe};
use super::expr::{Noeud, OpBinaire};
use super::jetons::{tokenize, Jeton};

/// Garde-fou : nombre de jetons accepté (borne aussi la hauteur des chaînes + - × ÷).
pub const JETONS_MAX: usize = 4096;

/// Garde-fou : imbrication ( … ), préfixes - √ et exposants.
pub const PROFONDEUR_MAX: usize = 256;

/// Texte de l’affichage -> arbre.
/// Entrée vide (ou sentinelle "0") => Litteral(0).
pub fn analyser(texte: &str) -> Result<Noeud, ErreurCalcul> {
    let jetons = tokenize(texte)?;
    Ok(analyser_jetons(&jetons)?)
}

/// Jetons -> arbre. Toute la suite doit être consommée.
pub fn analyser_jetons(jetons: &[Jeton]) -> Result<Noeud, ErreurSyntaxe> {
    if jetons.is_empty() {
        return Ok(Noeud::Litteral(0.0));
    }
    if jetons.len() > JETONS_MAX {
        return Err(ErreurSyntaxe::ExpressionTropLongue(jetons.len()));
    }

    let mut a = Analyseur {
        jetons,
        pos: 0,
        profondeur: 0,
    };

    let arbre = a.expression()?;

    if let Some(j) = a.courant() {
        return Err(ErreurSyntaxe::JetonEnTrop {
            jeton: j.to_string(),
            position: a.pos,
        });
    }

    Ok(arbre)
}

struct Analyseur<'a> {
    jetons: &'a [Jeton],
    pos: usize,
    profondeur: usize,
}

impl<'a> Analyseur<'a> {
    fn courant(&self) -> Option<&'a Jeton> {
        self.jetons.get(self.pos)
    }

    fn descendre(&mut self) -> Result<(), ErreurSyntaxe> {
        self.profondeur += 1;
        if self.profondeur > PROFONDEUR_MAX {
            return Err(ErreurSyntaxe::ImbricationTropProfonde);
        }
        Ok(())
    }

    fn remonter(&mut self) {
        self.profondeur -= 1;
    }

    fn expression(&mut self) -> Result<Noeud, ErreurSyntaxe> {
        let mut gauche = self.terme()?;

        loop {
            let op = match self.courant() {
                Some(Jeton::Plus) => OpBinaire::Add,
                Some(Jeton::Moins) => OpBinaire::Sub,
                _ => break,
            };
            self.pos += 1;

            let droite = self.terme()?;
            gauche = Noeud::binaire(op, gauche, droite);
        }

        Ok(gauche)
    }

    fn terme(&mut self) -> Result<Noeud, ErreurSyntaxe> {
        let mut gauche = self.puissance()?;

        loop {
            let op = match self.courant() {
                Some(Jeton::Fois) => OpBinaire::Mul,
                Some(Jeton::Divise) => OpBinaire::Div,
                _ => break,
            };
            self.pos += 1;

            let droite = self.puissance()?;
            gauche = Noeud::binaire(op, gauche, droite);
        }

        Ok(gauche)
    }

    fn puissance(&mut self) -> Result<Noeud, ErreurSyntaxe> {
        let base = self.unaire()?;

        if self.courant() != Some(&Jeton::Chapeau) {
            return Ok(base);
        }
        self.pos += 1;

        // récursion à droite : l’exposant peut lui-même contenir '^'
        self.descendre()?;
        let exposant = self.puissance()?;
        self.remonter();

        Ok(Noeud::binaire(OpBinaire::Pow, base, exposant))
    }

    fn unaire(&mut self) -> Result<Noeud, ErreurSyntaxe> {
        let prefixe: fn(Box<Noeud>) -> Noeud = match self.courant() {
            Some(Jeton::Moins) => Noeud::Oppose,
            Some(Jeton::Racine) => Noeud::Racine,
            _ => return self.atome(),
        };
        self.pos += 1;

        self.descendre()?;
        let x = self.unaire()?;
        self.remonter();

        Ok(prefixe(Box::new(x)))
    }

    fn atome(&mut self) -> Result<Noeud, ErreurSyntaxe> {
        match self.courant() {
            Some(Jeton::Nombre(texte)) => {
                self.pos += 1;
                litteral(texte)
            }

            Some(Jeton::ParG) => {
                self.pos += 1;

                self.descendre()?;
                let e = self.expression()?;
                self.remonter();

                match self.courant() {
                    Some(Jeton::ParD) => {
                        self.pos += 1;
                        Ok(e)
                    }
                    Some(j) => Err(ErreurSyntaxe::JetonEnTrop {
                        jeton: j.to_string(),
                        position: self.pos,
                    }),
                    None => Err(ErreurSyntaxe::ParentheseNonFermee),
                }
            }

            Some(j) => Err(ErreurSyntaxe::OperandeManquant {
                jeton: j.to_string(),
                position: self.pos,
            }),

            None => Err(ErreurSyntaxe::FinInattendue),
        }
    }
}

/// Un littéral doit être fini : "." seul ou une course de chiffres trop longue
/// (débordement f64) sont refusés ici.
fn litteral(texte: &str) -> Result<Noeud, ErreurSyntaxe> {
    match texte.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Noeud::Litteral(v)),
        _ => Err(ErreurSyntaxe::NombreInvalide(texte.to_string())),
    }
}
