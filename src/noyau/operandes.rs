// src/noyau/operandes.rs
//
// Localisation des opérandes autour d’un opérateur binaire.
//
// Règle : on prend la DERNIÈRE occurrence de l’opérateur (balayage par la droite).
// C’est ce choix qui donne "2^2^3" = 2^(2^3) : le '^' le plus à droite part en premier.

/// Renvoie `[debut, fin)` couvrant "<gauche><op><droite>" autour du dernier `op`,
/// ou `None` si `op` n’apparaît pas (l’appelant doit vérifier avant).
///
/// - gauche : chiffres, '.', et '-' s’il est en tête ou précédé d’un non-chiffre
/// - droite : chiffres, '.', et '-' seulement juste après l’opérateur
pub fn trouver_operandes(chars: &[char], op: char) -> Option<(usize, usize)> {
    let pos = chars.iter().rposition(|&c| c == op)?;

    // Opérande gauche
    let mut debut = pos;
    while debut > 0 {
        let i = debut - 1;
        let c = chars[i];
        let moins_signe = c == '-' && (i == 0 || !chars[i - 1].is_ascii_digit());
        if c.is_ascii_digit() || c == '.' || moins_signe {
            debut = i;
        } else {
            break;
        }
    }

    // Opérande droite
    let mut fin = pos + 1;
    while fin < chars.len() {
        let c = chars[fin];
        if c.is_ascii_digit() || c == '.' || (c == '-' && fin == pos + 1) {
            fin += 1;
        } else {
            break;
        }
    }

    Some((debut, fin))
}
