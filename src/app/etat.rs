//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche, debug)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.

use crate::noyau::Config;

/// Jeton inséré par la touche "log".
pub const JETON_LOG_UI: &str = "log_";

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // dernier résultat numérique
    pub erreur: String,   // message d’erreur (si validation/éval échoue)

    // --- démarche (une ligne par réduction) ---
    pub demarche: String,

    // --- paramètres ---
    pub debug: bool, // journalise chaque réduction (log::debug!)

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: String::new(),
            debug: false,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + debug coupé).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.debug = false;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche.clear();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    /// - La démarche est coupée : une évaluation interrompue n’a pas de réduction complète.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche.clear();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (valeur + démarche).
    pub fn set_resultats(&mut self, resultat: impl Into<String>, demarche: impl Into<String>) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche.into();
        self.focus_entree = true;
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
        self.focus_entree = true;
    }

    /// Configuration injectée dans le noyau à chaque évaluation.
    pub fn config(&self) -> Config {
        Config::default().avec_debug(self.debug)
    }

    /// DEL : retire "log_" d’un coup, sinon un caractère.
    pub fn backspace_entree(&mut self) {
        if self.entree.ends_with(JETON_LOG_UI) {
            let n = self.entree.len() - JETON_LOG_UI.len();
            self.entree.truncate(n);
        } else {
            self.entree.pop();
        }
        self.focus_entree = true;
    }
}
