//! Configuration injectée dans l’évaluateur.
//!
//! Remplace un drapeau DEBUG global : chaque `Evaluateur` reçoit sa propre copie.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Journalise chaque étape de réduction (`log::debug!`).
    pub debug: bool,
}

impl Config {
    pub fn avec_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
