// src/noyau/expr.rs
//
// Arbre d’analyse (flottant).
// - Litteral : valeur finie (jamais NaN/∞ à la construction)
// - Binaire  : + - × ÷ ^
// - Oppose   : moins unaire
// - Racine   : √
//
// Pas de noeud "inverse" : l’affichage écrit 1/x sous la forme 1÷(x),
// c’est une division ordinaire.
//
// Arbre strict : chaque noeud possède ses enfants (Box), aucun partage.
// Construit à chaque "=", jeté juste après l’évaluation.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBinaire {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl OpBinaire {
    pub fn symbole(self) -> char {
        match self {
            OpBinaire::Add => '+',
            OpBinaire::Sub => '-',
            OpBinaire::Mul => '×',
            OpBinaire::Div => '÷',
            OpBinaire::Pow => '^',
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Noeud {
    Litteral(f64),

    Binaire(OpBinaire, Box<Noeud>, Box<Noeud>),

    Oppose(Box<Noeud>), // -x
    Racine(Box<Noeud>), // √x
}

impl Noeud {
    pub fn binaire(op: OpBinaire, a: Noeud, b: Noeud) -> Noeud {
        Noeud::Binaire(op, Box::new(a), Box::new(b))
    }

    /// Hauteur de l’arbre (une feuille vaut 1).
    /// Itératif : ne dépend pas de la pile d’appels.
    pub fn profondeur(&self) -> usize {
        let mut pile: Vec<(&Noeud, usize)> = vec![(self, 1)];
        let mut max = 0;

        while let Some((n, d)) = pile.pop() {
            max = max.max(d);
            match n {
                Noeud::Litteral(_) => {}
                Noeud::Oppose(x) | Noeud::Racine(x) => pile.push((x.as_ref(), d + 1)),
                Noeud::Binaire(_, a, b) => {
                    pile.push((a.as_ref(), d + 1));
                    pile.push((b.as_ref(), d + 1));
                }
            }
        }

        max
    }
}
