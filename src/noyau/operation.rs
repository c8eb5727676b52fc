// src/noyau/operation.rs
//
// Opérateurs (somme fermée) + primitives arithmétiques.
//
// Une primitive binaire reçoit une tranche "<gauche><symbole><droite>",
// la coupe sur son symbole (exactement deux morceaux), lit deux réels,
// calcule en f64 et renvoie le texte à réinjecter dans le tampon.

use std::fmt;

use num_traits::Zero;

use super::erreur::{ErreurCalc, Resultat};
use super::format::format_nombre;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Mod,
    Exponent,
    Logarithm,
}

/// Ordre de réduction des opérateurs binaires (après parenthèses et logarithmes).
/// Ce n’est pas PEMDAS : `*` passe avant `/`, `%` avant `+`, `+` avant `-`.
pub const ORDRE_BINAIRE: [Operation; 6] = [
    Operation::Exponent,
    Operation::Multiply,
    Operation::Divide,
    Operation::Mod,
    Operation::Add,
    Operation::Subtract,
];

/// Symboles d’opérateurs binaires (validation + recherche d’opérandes).
pub const SYMBOLES_BINAIRES: [char; 6] = ['+', '-', '*', '/', '%', '^'];

/// Jeton du logarithme : `log_b(x)` ou `log_(b)(x)`.
pub const JETON_LOG: &str = "log_";

pub fn est_symbole_binaire(c: char) -> bool {
    SYMBOLES_BINAIRES.contains(&c)
}

impl Operation {
    pub fn symbole(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Mod => "%",
            Operation::Exponent => "^",
            Operation::Logarithm => JETON_LOG,
        }
    }

    /// Caractère de l’opérateur infixe (`None` pour le logarithme).
    pub fn symbole_binaire(self) -> Option<char> {
        match self {
            Operation::Logarithm => None,
            op => op.symbole().chars().next(),
        }
    }

    fn nom(self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "soustraction",
            Operation::Multiply => "multiplication",
            Operation::Divide => "division",
            Operation::Mod => "modulo",
            Operation::Exponent => "puissance",
            Operation::Logarithm => "logarithme",
        }
    }

    /// Calcul pur sur deux réels.
    /// Pour `Logarithm` : `a` = base, `b` = argument.
    pub fn calculer(self, a: f64, b: f64) -> Resultat<f64> {
        match self {
            Operation::Add => Ok(a + b),
            Operation::Subtract => Ok(a - b),
            Operation::Multiply => Ok(a * b),
            Operation::Divide => {
                if b.is_zero() {
                    return Err(ErreurCalc::DivisionByZero);
                }
                Ok(a / b)
            }
            Operation::Mod => {
                if b.is_zero() {
                    return Err(ErreurCalc::ModulusByZero);
                }
                Ok(modulo_plancher(a, b))
            }
            Operation::Exponent => Ok(a.powf(b)),
            Operation::Logarithm => {
                if b <= 0.0 {
                    return Err(ErreurCalc::DomainError(format!(
                        "logarithme d’un argument non positif ({b})"
                    )));
                }
                if a <= 0.0 || a == 1.0 {
                    return Err(ErreurCalc::DomainError(format!(
                        "base de logarithme invalide ({a})"
                    )));
                }
                Ok(b.ln() / a.ln())
            }
        }
    }

    /// Primitive textuelle : "<gauche><symbole><droite>" -> résultat formaté.
    pub fn appliquer(self, tranche: &str) -> Resultat<String> {
        let morceaux: Vec<&str> = tranche.split(self.symbole()).collect();
        if morceaux.len() != 2 {
            return Err(ErreurCalc::ArityError(self));
        }

        let a = lire_operande(morceaux[0])?;
        let b = lire_operande(morceaux[1])?;
        format_nombre(self.calculer(a, b)?)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

/// Texte -> réel fini (espaces tolérés autour).
pub fn lire_operande(texte: &str) -> Resultat<f64> {
    let t = texte.trim();
    let v = t
        .parse::<f64>()
        .map_err(|_| ErreurCalc::InvalidOperand(t.to_string()))?;
    if !v.is_finite() {
        return Err(ErreurCalc::DomainError(format!("nombre trop grand ({t})")));
    }
    Ok(v)
}

/// Modulo “plancher” : le reste a le signe du diviseur (-5 % 3 = 1).
fn modulo_plancher(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r.is_zero() {
        return 0.0_f64.copysign(b);
    }
    if (b < 0.0) != (r < 0.0) {
        r + b
    } else {
        r
    }
}
