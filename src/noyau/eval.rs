//! Noyau — évaluation par réécriture
//!
//! Le tampon texte est réduit une étape à la fois : on repère la prochaine
//! unité réductible (ordre fixe), on la calcule, on réinjecte le nombre obtenu,
//! et on recommence jusqu’à ce qu’il ne reste qu’un nombre.
//!
//! Ordre des cas (premier qui s’applique) :
//! 1) parenthèses (seulement s’il n’y a AUCUN "log_") : dernière '(' + première ')' qui suit
//! 2) logarithme : dernier "log_", base et argument réduits récursivement
//! 3) ^  4) *  5) /  6) %  7) +  8) -   (dernière occurrence de l’opérateur)
//! 9) sinon : opération inconnue
//!
//! La boucle remplace la récursion terminale ; seuls les sous-groupes
//! (intérieur de parenthèses, base/argument d’un log) descendent d’un niveau.

use std::fmt;

use super::config::Config;
use super::erreur::{ErreurCalc, Resultat};
use super::format::format_nombre;
use super::logarithme::trouver_logarithme;
use super::operandes::trouver_operandes;
use super::operation::{lire_operande, Operation, JETON_LOG, ORDRE_BINAIRE};
use super::syntaxe::valider_syntaxe;

/* ------------------------ Démarche (trace des réductions) ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeEtape {
    Parentheses,
    Operation(Operation),
}

impl fmt::Display for TypeEtape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeEtape::Parentheses => f.write_str("parenthèses"),
            TypeEtape::Operation(op) => write!(f, "{op}"),
        }
    }
}

/// Une étape de réduction : le tampon avant/après.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Etape {
    /// 0 = expression principale, 1 = sous-expression, etc.
    pub profondeur: usize,
    pub type_etape: TypeEtape,
    pub avant: String,
    pub apres: String,
}

/// Étapes dans l’ordre où elles se TERMINENT (un sous-groupe avant son parent).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Demarche {
    pub etapes: Vec<Etape>,
}

impl fmt::Display for Demarche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.etapes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let retrait = "  ".repeat(e.profondeur);
            write!(f, "{retrait}{} → {}  [{}]", e.avant, e.apres, e.type_etape)?;
        }
        Ok(())
    }
}

/* ------------------------ Évaluateur ------------------------ */

#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluateur {
    config: Config,
}

fn texte(chars: &[char]) -> String {
    chars.iter().collect()
}

/// Remplace `chars[debut..fin]` par `valeur`.
fn reinjecter(chars: &[char], debut: usize, fin: usize, valeur: &str) -> String {
    let mut out = texte(&chars[..debut]);
    out.push_str(valeur);
    out.extend(&chars[fin..]);
    out
}

fn contient_log(chars: &[char]) -> bool {
    let jeton: Vec<char> = JETON_LOG.chars().collect();
    chars.windows(jeton.len()).any(|w| w == jeton.as_slice())
}

/// Tampon entièrement réduit ?
/// - 1 caractère : un chiffre, sinon erreur
/// - plus long : tout ce qui suit l’indice 0 est chiffre ou '.'
///   (l’indice 0 peut porter un moins unaire)
fn est_reduit(chars: &[char]) -> Resultat<bool> {
    match chars {
        [] => Err(ErreurCalc::EmptyInput),
        [c] if c.is_ascii_digit() => Ok(true),
        [c] => Err(ErreurCalc::InvalidOperand(c.to_string())),
        [_, reste @ ..] => Ok(reste.iter().all(|c| c.is_ascii_digit() || *c == '.')),
    }
}

impl Evaluateur {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Réduit une expression (supposée validée) jusqu’à son texte numérique.
    pub fn evaluer(&self, expression: &str) -> Resultat<String> {
        let mut demarche = Demarche::default();
        self.reduire(expression, 0, &mut demarche)
    }

    /// Comme `evaluer`, avec la liste des étapes de réduction.
    pub fn evaluer_avec_demarche(&self, expression: &str) -> Resultat<(String, Demarche)> {
        let mut demarche = Demarche::default();
        let resultat = self.reduire(expression, 0, &mut demarche)?;
        Ok((resultat, demarche))
    }

    fn reduire(
        &self,
        expression: &str,
        profondeur: usize,
        demarche: &mut Demarche,
    ) -> Resultat<String> {
        let mut tampon = expression.to_string();

        loop {
            let chars: Vec<char> = tampon.chars().collect();
            if est_reduit(&chars)? {
                // "5.5.5" passe le test de forme mais n’est pas un nombre
                lire_operande(&tampon)?;
                return Ok(tampon);
            }

            let (type_etape, suivant) = self.etape(&chars, profondeur, demarche)?;

            if self.config.debug {
                log::debug!("[{profondeur}] {type_etape} : {tampon} -> {suivant}");
            }
            demarche.etapes.push(Etape {
                profondeur,
                type_etape,
                avant: tampon,
                apres: suivant.clone(),
            });

            tampon = suivant;
        }
    }

    /// Une seule réduction : renvoie le type d’étape et le nouveau tampon.
    fn etape(
        &self,
        chars: &[char],
        profondeur: usize,
        demarche: &mut Demarche,
    ) -> Resultat<(TypeEtape, String)> {
        let a_log = contient_log(chars);

        // 1) Parenthèses (hors logarithme)
        if chars.contains(&'(') && chars.contains(&')') && !a_log {
            let ouvrante = chars
                .iter()
                .rposition(|&c| c == '(')
                .ok_or(ErreurCalc::MismatchedParentheses)?;
            let fermante = chars[ouvrante..]
                .iter()
                .position(|&c| c == ')')
                .map(|p| ouvrante + p)
                .ok_or(ErreurCalc::MismatchedParentheses)?;

            let interieur = texte(&chars[ouvrante + 1..fermante]);
            let valeur = self.reduire(&interieur, profondeur + 1, demarche)?;

            let suivant = reinjecter(chars, ouvrante, fermante + 1, &valeur);
            return Ok((TypeEtape::Parentheses, suivant));
        }

        // 2) Logarithme
        if a_log {
            let appel = trouver_logarithme(chars)?;
            if self.config.debug {
                log::debug!(
                    "[{profondeur}] log_ en {} : base={:?} argument={:?}",
                    appel.debut,
                    appel.base,
                    appel.argument
                );
            }

            let base = self.reduire(&appel.base, profondeur + 1, demarche)?;
            let argument = self.reduire(&appel.argument, profondeur + 1, demarche)?;

            let valeur = Operation::Logarithm
                .calculer(lire_operande(&base)?, lire_operande(&argument)?)?;
            let valeur = format_nombre(valeur)?;

            let suivant = reinjecter(chars, appel.debut, appel.fin, &valeur);
            return Ok((TypeEtape::Operation(Operation::Logarithm), suivant));
        }

        // 3..8) Opérateurs binaires, dans l’ordre fixe
        for op in ORDRE_BINAIRE {
            let Some(symbole) = op.symbole_binaire() else {
                continue;
            };
            if !chars.contains(&symbole) {
                continue;
            }

            let (debut, fin) =
                trouver_operandes(chars, symbole).ok_or(ErreurCalc::UnknownOperation)?;
            let tranche = texte(&chars[debut..fin]);
            if self.config.debug {
                log::debug!("[{profondeur}] {op} : tranche {tranche:?} en [{debut}, {fin})");
            }

            let valeur = op.appliquer(&tranche)?;
            let suivant = reinjecter(chars, debut, fin, &valeur);
            return Ok((TypeEtape::Operation(op), suivant));
        }

        // 9) Rien de reconnu
        Err(ErreurCalc::UnknownOperation)
    }
}

/* ------------------------ API publique ------------------------ */

/// Évalue avec la configuration par défaut.
pub fn evaluer(expression: &str) -> Resultat<String> {
    Evaluateur::default().evaluer(expression)
}

/// Pipeline complet côté interface :
/// retire TOUS les espaces -> refuse le vide -> valide -> évalue (+ démarche).
pub fn eval_expression(entree: &str, config: &Config) -> Resultat<(String, Demarche)> {
    let s: String = entree.chars().filter(|c| !c.is_whitespace()).collect();
    if s.is_empty() {
        return Err(ErreurCalc::EmptyInput);
    }

    valider_syntaxe(&s)?;
    Evaluateur::new(*config).evaluer_avec_demarche(&s)
}
