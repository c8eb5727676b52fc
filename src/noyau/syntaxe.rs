// src/noyau/syntaxe.rs
//
// Validation syntaxique (avant toute évaluation).
// Contrôles, dans cet ordre (la première faute trouvée est renvoyée) :
// 1) autant de '(' que de ')'
// 2) jeu de caractères : chiffres, '.', + - * / % ^, ( ), et les lettres de "log_"
// 3) pas deux opérateurs collés (sauf '-' unaire en position 0)
// 4) pas de chiffre juste avant '(' ni de ')' juste avant un chiffre,
//    sauf si le chiffre est la base d’un logarithme ("log_2(8)")
//
// Ne vérifie ni l’arité ni le sens : ces fautes remontent de l’évaluation.

use super::erreur::{ErreurCalc, Resultat};
use super::operation::{est_symbole_binaire, JETON_LOG};

fn est_caractere_permis(c: char) -> bool {
    c.is_ascii_digit()
        || c == '.'
        || c == '('
        || c == ')'
        || est_symbole_binaire(c)
        || JETON_LOG.contains(c)
}

/// Le chiffre en position `i` appartient-il à la base numérique d’un `log_` ?
/// On remonte la suite de chiffres/points, puis on regarde les 4 caractères avant.
fn chiffre_dans_base_log(chars: &[char], i: usize) -> bool {
    let mut debut = i;
    while debut > 0 && (chars[debut - 1].is_ascii_digit() || chars[debut - 1] == '.') {
        debut -= 1;
    }

    let jeton: Vec<char> = JETON_LOG.chars().collect();
    debut >= jeton.len() && chars[debut - jeton.len()..debut] == jeton[..]
}

/// Valide la syntaxe générale d’une expression (sans espaces).
pub fn valider_syntaxe(expression: &str) -> Resultat<()> {
    let chars: Vec<char> = expression.chars().collect();

    // 1) équilibre global
    let ouvrantes = chars.iter().filter(|&&c| c == '(').count();
    let fermantes = chars.iter().filter(|&&c| c == ')').count();
    if ouvrantes != fermantes {
        log::trace!("syntaxe: {ouvrantes} '(' pour {fermantes} ')'");
        return Err(ErreurCalc::MismatchedParentheses);
    }

    // 2) caractères
    if let Some(&c) = chars.iter().find(|&&c| !est_caractere_permis(c)) {
        log::trace!("syntaxe: caractère refusé {c:?}");
        return Err(ErreurCalc::InvalidCharacter(c));
    }

    // 3) opérateurs consécutifs
    for (i, paire) in chars.windows(2).enumerate() {
        let moins_unaire = paire[0] == '-' && i == 0;
        if est_symbole_binaire(paire[0]) && est_symbole_binaire(paire[1]) && !moins_unaire {
            log::trace!("syntaxe: opérateurs collés en {i}");
            return Err(ErreurCalc::ConsecutiveOperators { position: i });
        }
    }

    // 4) adjacence chiffre / parenthèse
    for (i, paire) in chars.windows(2).enumerate() {
        if paire[0].is_ascii_digit() && paire[1] == '(' && !chiffre_dans_base_log(&chars, i) {
            log::trace!("syntaxe: chiffre avant '(' en {i}");
            return Err(ErreurCalc::InvalidParenAdjacency { position: i });
        }
        // une ')' n’est jamais suivie d’un chiffre, même après un logarithme
        if paire[0] == ')' && paire[1].is_ascii_digit() {
            log::trace!("syntaxe: ')' avant chiffre en {i}");
            return Err(ErreurCalc::InvalidParenAdjacency { position: i });
        }
    }

    Ok(())
}
