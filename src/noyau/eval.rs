//! Noyau — pipeline complet
//!
//! texte -> ('=' + variable) -> jetons gauche/droite -> (a, b, c) -> tri -> Solution -> message
//!
//! Aucune E/S, aucun état partagé : même entrée => même sortie.

use super::erreur::ErreurEquation;
use super::format::{format_decimal, format_solution};
use super::jetons::format_jetons;
use super::normalise::{normaliser_detail, Coefficients};
use super::resolution::{branche, resoudre, Branche, Solution};

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub variable: String,
    pub gauche: String,
    pub droite: String,
    pub coefficients: String,
    pub branche: String,
    pub note: String,
}

/// Résolution structurée : pour les appelants qui formatent eux-mêmes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub variable: char,
    pub coefficients: Coefficients,
    pub solution: Solution,
}

/// Normalise puis résout, sans mise en forme.
pub fn resoudre_equation(equation: &str) -> Result<Resolution, ErreurEquation> {
    let n = normaliser_detail(equation)?;
    let solution = resoudre(&n.coefficients)?;
    Ok(Resolution {
        variable: n.variable,
        coefficients: n.coefficients,
        solution,
    })
}

/// API publique : résout une équation et retourne
/// - le message lisible
/// - la solution (valeurs numériques)
/// - la démarche (variable, jetons, triplet, branche)
pub fn eval_equation(
    equation: &str,
    chiffres: usize,
) -> Result<(String, Solution, DemarcheNoyau), ErreurEquation> {
    let n = normaliser_detail(equation)?;
    let v = n.variable;
    let c = n.coefficients;

    let solution = resoudre(&c)?;
    let message = format_solution(&solution, v, chiffres);

    let d = DemarcheNoyau {
        variable: v.to_string(),
        gauche: format_jetons(&n.gauche, v),
        droite: format_jetons(&n.droite, v),
        coefficients: format!(
            "a = {}, b = {}, c = {}",
            format_decimal(c.a, chiffres),
            format_decimal(c.b, chiffres),
            format_decimal(c.c, chiffres)
        ),
        branche: format_branche(branche(&c), chiffres),
        note: "Pipeline: '=' → variable → jetons (gauche, droite inversée) → (a, b, c) → tri ε = 1e-9 → solution.".into(),
    };

    Ok((message, solution, d))
}

fn format_branche(b: Branche, chiffres: usize) -> String {
    match b {
        Branche::SecondDegre { delta } => {
            format!("second degré, Δ = b² − 4ac = {}", format_decimal(delta, chiffres))
        }
        Branche::PremierDegre => "premier degré, x = −c/b".to_string(),
        Branche::Degeneree => "dégénérée (a = b = 0), comparaison de c à 0".to_string(),
    }
}
