// src/noyau/format.rs
//
// Affichage des nombres réinjectés dans le tampon.
// Contraintes :
// - jamais de notation exponentielle ("1e16" casserait la réécriture : 'e', '+')
// - toujours une partie fractionnaire : 5 -> "5.0"
// - plus courte écriture décimale qui se relit à l’identique (Display de f64)

use super::erreur::{ErreurCalc, Resultat};

/// f64 -> texte décimal réinjectable. Refuse inf / NaN.
pub fn format_nombre(x: f64) -> Resultat<String> {
    if !x.is_finite() {
        return Err(ErreurCalc::DomainError(format!("résultat non fini ({x})")));
    }

    let mut s = format!("{x}");
    if !s.contains('.') {
        s.push_str(".0");
    }
    Ok(s)
}
