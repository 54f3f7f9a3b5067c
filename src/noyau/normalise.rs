// src/noyau/normalise.rs

use super::erreur::{ErreurEquation, Malformation};
use super::jetons::{tokenize_cote, Jeton};
use super::variable::identifier_variable;

/// Triplet canonique (a, b, c) de a·x² + b·x + c = 0.
/// Construit une fois par appel, jamais modifié ensuite.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Résultat détaillé de la normalisation (variable + jetons des deux côtés).
#[derive(Clone, Debug, PartialEq)]
pub struct Normalisation {
    pub variable: char,
    pub gauche: Vec<Jeton>,
    pub droite: Vec<Jeton>,
    pub coefficients: Coefficients,
}

/// Normalise une équation : "2x+3=7" -> (0, 2, -4).
pub fn normaliser(equation: &str) -> Result<Coefficients, ErreurEquation> {
    normaliser_detail(equation).map(|n| n.coefficients)
}

/// Comme `normaliser`, en gardant les étapes (pour la démarche).
///
/// Ordre des contrôles : nombre de '=', puis variable, puis jetons.
pub fn normaliser_detail(equation: &str) -> Result<Normalisation, ErreurEquation> {
    let s: String = equation.chars().filter(|c| !c.is_whitespace()).collect();

    let nb_egal = s.matches('=').count();
    let Some((gauche_txt, droite_txt)) = s.split_once('=').filter(|_| nb_egal == 1) else {
        return Err(Malformation::SignesEgal(nb_egal).into());
    };

    let variable = identifier_variable(&s).ok_or(ErreurEquation::AucuneVariable)?;

    let gauche = tokenize_cote(gauche_txt, variable)?;
    let droite = tokenize_cote(droite_txt, variable)?;

    let mut coefficients = Coefficients::default();
    accumuler(&mut coefficients, &gauche, 1.0);
    // côté droit passé à gauche : signes inversés
    accumuler(&mut coefficients, &droite, -1.0);

    if !(coefficients.a.is_finite() && coefficients.b.is_finite() && coefficients.c.is_finite()) {
        log::warn!("coefficients non finis pour {equation:?}: {coefficients:?}");
        return Err(Malformation::ResultatNonFini.into());
    }

    log::debug!(
        "normalisé {equation:?} -> a={}, b={}, c={} (variable '{variable}')",
        coefficients.a,
        coefficients.b,
        coefficients.c
    );

    Ok(Normalisation {
        variable,
        gauche,
        droite,
        coefficients,
    })
}

fn accumuler(coeffs: &mut Coefficients, jetons: &[Jeton], signe: f64) {
    for j in jetons {
        match j {
            Jeton::Carre(v) => coeffs.a += signe * v,
            Jeton::Lineaire(v) => coeffs.b += signe * v,
            Jeton::Constante(v) => coeffs.c += signe * v,
            Jeton::Fin => break,
        }
    }
}
