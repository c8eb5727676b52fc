// src/noyau/logarithme.rs
//
// Mini-grammaire du logarithme :
//   log_<chiffres>[.chiffres](<argument>)   ex: log_2(16)
//   log_(<expression>)(<argument>)          ex: log_((9*2)+(4/2))(10)
//
// Les parenthèses de la base et de l’argument sont appariées par profondeur
// (imbrication respectée). Base et argument sont rendus BRUTS : c’est à
// l’évaluateur de les réduire avant de calculer ln(argument)/ln(base).

use super::erreur::{ErreurCalc, Resultat};
use super::operation::JETON_LOG;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppelLog {
    /// Position du dernier "log_".
    pub debut: usize,
    pub base: String,
    pub argument: String,
    /// Juste après la ')' fermant l’argument.
    pub fin: usize,
}

/// Depuis une '(' en `ouvrante`, renvoie l’indice juste après sa ')' appariée.
fn fin_de_groupe(chars: &[char], ouvrante: usize) -> Resultat<usize> {
    let mut profondeur = 1usize;
    let mut j = ouvrante + 1;

    while j < chars.len() && profondeur > 0 {
        match chars[j] {
            '(' => profondeur += 1,
            ')' => profondeur -= 1,
            _ => {}
        }
        j += 1;
    }

    if profondeur != 0 {
        return Err(ErreurCalc::MismatchedParentheses);
    }
    Ok(j)
}

fn texte(chars: &[char]) -> String {
    chars.iter().collect()
}

/// Analyse le DERNIER logarithme de l’expression.
pub fn trouver_logarithme(chars: &[char]) -> Resultat<AppelLog> {
    let jeton: Vec<char> = JETON_LOG.chars().collect();
    let debut = chars
        .windows(jeton.len())
        .rposition(|w| w == jeton.as_slice())
        .ok_or(ErreurCalc::InvalidLogarithmSyntax)?;

    let base_debut = debut + jeton.len();
    let suit_ouvrante = |i: usize| chars.get(i) == Some(&'(');

    // Base : groupe parenthésé ou nombre nu
    let (base, arg_ouvrante) = if suit_ouvrante(base_debut) {
        let base_fin = fin_de_groupe(chars, base_debut)?;
        if !suit_ouvrante(base_fin) {
            return Err(ErreurCalc::InvalidLogarithmSyntax);
        }
        (texte(&chars[base_debut + 1..base_fin - 1]), base_fin)
    } else {
        let mut base_fin = base_debut;
        while base_fin < chars.len() && (chars[base_fin].is_ascii_digit() || chars[base_fin] == '.')
        {
            base_fin += 1;
        }
        if !suit_ouvrante(base_fin) {
            return Err(ErreurCalc::InvalidLogarithmSyntax);
        }
        (texte(&chars[base_debut..base_fin]), base_fin)
    };

    // Argument
    let fin = fin_de_groupe(chars, arg_ouvrante)?;
    let argument = texte(&chars[arg_ouvrante + 1..fin - 1]);

    Ok(AppelLog {
        debut,
        base,
        argument,
        fin,
    })
}
