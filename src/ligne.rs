// src/ligne.rs
//
// Mode ligne (natif seulement) : lire, évaluer, afficher, recommencer.
// - "quit" (casse indifférente) termine la boucle
// - une erreur n’arrête jamais la boucle : message puis ligne suivante
// - en debug, la démarche suit chaque résultat

use std::io::{self, BufRead, Write};

use crate::noyau::{eval_expression, Config};

/// Mot qui termine la boucle.
const MOT_SORTIE: &str = "quit";

/// Évalue une ligne et renvoie le texte à afficher.
pub fn traiter_ligne(ligne: &str, config: &Config) -> String {
    match eval_expression(ligne, config) {
        Ok((resultat, demarche)) if config.debug && !demarche.etapes.is_empty() => {
            format!("{demarche}\nRésultat : {resultat}")
        }
        Ok((resultat, _)) => format!("Résultat : {resultat}"),
        Err(e) => format!("Erreur : {e}"),
    }
}

pub fn boucle<R: BufRead, W: Write>(entree: R, mut sortie: W, config: &Config) -> io::Result<()> {
    writeln!(sortie, "Calculatrice à réécriture ('{MOT_SORTIE}' pour sortir)")?;

    for ligne in entree.lines() {
        let ligne = ligne?;
        if ligne.trim().eq_ignore_ascii_case(MOT_SORTIE) {
            break;
        }
        writeln!(sortie, "{}", traiter_ligne(&ligne, config))?;
    }

    Ok(())
}

/// Boucle sur stdin/stdout.
pub fn lancer(config: &Config) -> io::Result<()> {
    let stdin = io::stdin();
    boucle(stdin.lock(), io::stdout().lock(), config)
}
