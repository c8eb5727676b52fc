//! Erreurs du noyau.
//!
//! Une seule énumération pour la validation ET l’évaluation : toute erreur
//! interrompt l’évaluation entière (pas de résultat partiel, pas de reprise).

use thiserror::Error;

use super::operation::Operation;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalc {
    #[error("parenthèses non appariées")]
    MismatchedParentheses,

    #[error("caractère invalide '{0}'")]
    InvalidCharacter(char),

    #[error("opérateurs consécutifs (position {position})")]
    ConsecutiveOperators { position: usize },

    /// Chiffre collé à '(' ou ')' collée à un chiffre, hors logarithme.
    #[error("parenthèse mal placée (position {position})")]
    InvalidParenAdjacency { position: usize },

    #[error("{0} : il faut exactement deux opérandes")]
    ArityError(Operation),

    #[error("opérande invalide : {0:?}")]
    InvalidOperand(String),

    #[error("division par zéro")]
    DivisionByZero,

    #[error("modulo par zéro")]
    ModulusByZero,

    #[error("logarithme mal formé (attendu log_b(x) ou log_(b)(x))")]
    InvalidLogarithmSyntax,

    #[error("opération inconnue (utiliser +, -, *, /, %, ^ ou log_b(x))")]
    UnknownOperation,

    #[error("entrée vide")]
    EmptyInput,

    /// Résultat non fini (débordement, log hors domaine, etc.).
    #[error("hors domaine : {0}")]
    DomainError(String),
}

pub type Resultat<T> = Result<T, ErreurCalc>;
