// src/noyau/resolution.rs
//
// Résolution fermée de a·x² + b·x + c = 0 (degré 0, 1 ou 2).
// Sans état : fonctions pures, sûres en concurrence.

use super::erreur::{ErreurEquation, Malformation};
use super::normalise::Coefficients;

/// Tolérance unique pour toutes les comparaisons à zéro.
pub const EPSILON: f64 = 1e-9;

/// Issue d’une résolution réussie. Les valeurs numériques restent accessibles
/// pour que l’appelant les formate à sa manière.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Solution {
    SolutionsInfinies,
    AucuneSolution,
    UneRacine { x: f64 },
    DeuxRacines { x1: f64, x2: f64 },
    /// reel ± imaginaire·i, avec imaginaire > 0
    DeuxComplexes { reel: f64, imaginaire: f64 },
}

/// Branche choisie par le tri (affichée dans la démarche).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Branche {
    SecondDegre { delta: f64 },
    PremierDegre,
    Degeneree,
}

pub fn branche(c: &Coefficients) -> Branche {
    if c.a.abs() > EPSILON {
        Branche::SecondDegre {
            delta: discriminant(c.a, c.b, c.c),
        }
    } else if c.b.abs() > EPSILON {
        Branche::PremierDegre
    } else {
        Branche::Degeneree
    }
}

pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Point d’entrée unifié : tri sur |a|, puis |b|, puis |c|.
pub fn resoudre(c: &Coefficients) -> Result<Solution, ErreurEquation> {
    let br = branche(c);
    log::debug!("branche {br:?} pour {c:?}");
    match br {
        Branche::SecondDegre { .. } => resoudre_second_degre(c.a, c.b, c.c),
        Branche::PremierDegre | Branche::Degeneree => resoudre_premier_degre(c.b, c.c),
    }
}

/// Chemin degré 2. Si |a| ≤ ε, on retombe sur le degré 1 (mêmes règles dégénérées).
pub fn resoudre_second_degre(a: f64, b: f64, c: f64) -> Result<Solution, ErreurEquation> {
    if a.abs() <= EPSILON {
        return resoudre_premier_degre(b, c);
    }

    let delta = discriminant(a, b, c);

    let sol = if delta.abs() <= EPSILON {
        Solution::UneRacine { x: -b / (2.0 * a) }
    } else if delta > 0.0 {
        let r = delta.sqrt();
        Solution::DeuxRacines {
            x1: (-b + r) / (2.0 * a),
            x2: (-b - r) / (2.0 * a),
        }
    } else {
        Solution::DeuxComplexes {
            reel: -b / (2.0 * a),
            imaginaire: ((-delta).sqrt() / (2.0 * a)).abs(),
        }
    };

    finaliser(sol)
}

/// Chemin degré 1 : b·x + c = 0. b nul => infinité / aucune solution (jamais d’erreur).
pub fn resoudre_premier_degre(b: f64, c: f64) -> Result<Solution, ErreurEquation> {
    if b.abs() <= EPSILON {
        return Ok(if c.abs() <= EPSILON {
            Solution::SolutionsInfinies
        } else {
            Solution::AucuneSolution
        });
    }
    finaliser(Solution::UneRacine { x: -c / b })
}

/// Refuse NaN/±inf, et remplace -0 par 0.
fn finaliser(sol: Solution) -> Result<Solution, ErreurEquation> {
    fn net(v: f64) -> Result<f64, ErreurEquation> {
        if !v.is_finite() {
            log::warn!("valeur non finie rejetée: {v}");
            return Err(Malformation::ResultatNonFini.into());
        }
        Ok(if v == 0.0 { 0.0 } else { v })
    }

    Ok(match sol {
        Solution::UneRacine { x } => Solution::UneRacine { x: net(x)? },
        Solution::DeuxRacines { x1, x2 } => Solution::DeuxRacines {
            x1: net(x1)?,
            x2: net(x2)?,
        },
        Solution::DeuxComplexes { reel, imaginaire } => Solution::DeuxComplexes {
            reel: net(reel)?,
            imaginaire: net(imaginaire)?,
        },
        autre => autre,
    })
}
