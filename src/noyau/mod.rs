//! Noyau de réécriture
//!
//! Organisation interne :
//! - erreur.rs     : ErreurCalc (toutes les fautes, validation + évaluation)
//! - config.rs     : Config injectée (debug)
//! - operation.rs  : opérateurs + primitives arithmétiques (f64)
//! - format.rs     : f64 -> texte réinjectable ("5.0", jamais d’exposant)
//! - syntaxe.rs    : validation avant évaluation
//! - operandes.rs  : portée "<gauche><op><droite>" autour du dernier op
//! - logarithme.rs : log_b(x) / log_(b)(x)
//! - eval.rs       : boucle de réduction + démarche + pipeline

pub mod config;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod logarithme;
pub mod operandes;
pub mod operation;
pub mod syntaxe;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use config::Config;
pub use erreur::ErreurCalc;
pub use eval::{eval_expression, evaluer, Demarche, Evaluateur};
pub use syntaxe::valider_syntaxe;
