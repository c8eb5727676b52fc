//! Tests de scénarios (campagne) : propriétés attendues + comportements figés.
//!
//! - chaque propriété observable a son test
//! - les particularités de l’ordre de réduction sont figées telles quelles
//!   (multiplication avant division, addition avant soustraction, '^' le plus à droite d’abord)
//! - stress borné : budget temps global, tailles modestes

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

use super::eval::{eval_expression, TypeEtape};
use super::{evaluer, valider_syntaxe, Config, ErreurCalc};

fn eval_ok(expr: &str) -> String {
    let (res, _d) = eval_expression(expr, &Config::default())
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    res
}

fn assert_fini(expr: &str) {
    let res = eval_ok(expr);
    let v: f64 = res
        .parse()
        .unwrap_or_else(|_| panic!("résultat non numérique: expr={expr:?} res={res:?}"));
    assert!(v.is_finite(), "expr={expr:?} res={res:?}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Table de propriétés ------------------------ */

#[test]
fn scn_table_des_valeurs_attendues() {
    let cas = [
        ("2+3", "5.0"),
        ("5-3", "2.0"),
        ("2*3", "6.0"),
        ("6/3", "2.0"),
        ("5%2", "1.0"),
        ("2^3", "8.0"),
        ("2+3*4", "14.0"),
        ("10-2^3", "2.0"),
        ("log_10(100)", "2.0"),
        ("2*(3+4)", "14.0"),
        ("2^3*4", "32.0"),
        ("(2^2^(2+1))", "256.0"),
        ("log_2(16)/2", "2.0"),
        ("log_2(8)+1", "4.0"),
        ("(47)*(2/47)+2", "4.0"),
    ];

    for (expr, attendu) in cas {
        assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
    }
}

#[test]
fn scn_erreurs_du_pipeline() {
    let cfg = Config::default();
    let cas = [
        ("5/0", ErreurCalc::DivisionByZero),
        ("5%0", ErreurCalc::ModulusByZero),
        ("(2+3", ErreurCalc::MismatchedParentheses),
        ("2+a", ErreurCalc::InvalidCharacter('a')),
        ("2++3", ErreurCalc::ConsecutiveOperators { position: 1 }),
        ("2(3+4)", ErreurCalc::InvalidParenAdjacency { position: 0 }),
        ("log_2+3", ErreurCalc::InvalidLogarithmSyntax),
        ("", ErreurCalc::EmptyInput),
    ];

    for (expr, attendu) in cas {
        assert_eq!(eval_expression(expr, &cfg), Err(attendu), "expr={expr:?}");
    }
}

#[test]
fn scn_validation_seule() {
    assert_eq!(
        valider_syntaxe("2(3+4)"),
        Err(ErreurCalc::InvalidParenAdjacency { position: 0 })
    );
    assert_eq!(
        valider_syntaxe("2++3"),
        Err(ErreurCalc::ConsecutiveOperators { position: 1 })
    );
    // la validation ne juge pas l’arité
    assert_eq!(valider_syntaxe("2+"), Ok(()));
}

#[test]
fn scn_idempotence_d_un_litteral() {
    for lit in ["7", "42", "3.25", "-8", "5.0"] {
        assert_eq!(evaluer(lit).unwrap(), lit);
    }
    // un résultat réévalué reste identique
    let r = eval_ok("2+3*4");
    assert_eq!(evaluer(&r).unwrap(), r);
}

#[test]
fn scn_expressions_valides_resultat_fini() {
    for e in [
        "1+2*3-4",
        "(1+2)*(3+4)/7",
        "2^10%7",
        "log_2(1024)-log_10(1000)",
        "((((1+1))))",
        "-3*2+10",
        "1.5*4/3",
        "log_(2+2)(4^3)",
    ] {
        assert_fini(e);
    }
}

/* ------------------------ Comportements figés ------------------------ */

#[test]
fn scn_groupe_le_plus_a_droite_d_abord() {
    // La dernière '(' n’a aucune '(' après elle : le groupe trouvé est toujours
    // un groupe sans sous-groupe, même s’il n’est pas le plus profond.
    let (_, d) = eval_expression("((1+2)*(3+4))+(5)", &Config::default()).unwrap();
    let premier = &d.etapes[0];
    assert_eq!(premier.type_etape, TypeEtape::Parentheses);
    assert_eq!(premier.apres, "((1+2)*(3+4))+5");
    assert_eq!(premier.profondeur, 0);
    assert_eq!(eval_ok("((1+2)*(3+4))+(5)"), "26.0");
}

#[test]
fn scn_ordre_fixe_des_operateurs() {
    assert_eq!(eval_ok("8/2*4"), "1.0");
    assert_eq!(eval_ok("7-2+1"), "4.0");
    assert_eq!(eval_ok("10%4*2"), "2.0");
    assert_eq!(eval_ok("2^3^2"), "512.0");
}

#[test]
fn scn_logarithme_avant_les_parentheses_libres() {
    // Tant qu’un "log_" reste, les parenthèses libres attendent.
    let (res, d) = eval_expression("(1+1)*log_2(8)", &Config::default()).unwrap();
    assert_eq!(res, "6.0");
    assert_eq!(d.etapes[0].apres, "(1+1)*3.0");
}

/* ------------------------ Stress borné ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

#[test]
fn scn_somme_balancee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    let expr = somme_balancee("1", 400);
    assert_eq!(eval_ok(&expr), "400.0");
    budget(t0, max);
}

#[test]
fn scn_longue_chaine_plate() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    let expr = vec!["3"; 250].join("+");
    assert_eq!(eval_ok(&expr), "750.0");

    let expr = vec!["1.5"; 40].join("*");
    assert_fini(&expr);
    budget(t0, max);
}
