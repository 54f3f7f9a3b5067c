// src/noyau/format.rs

use num_rational::Rational64;
use num_traits::One;

use super::resolution::Solution;

/// Plus grand dénominateur accepté pour la forme exacte (1/3, 5/8, …).
const DENOM_MAX: i64 = 1000;

/// Écart relatif toléré entre la valeur et sa fraction : quelques ulps, pas plus.
const TOLERANCE_FRACTION: f64 = 8.0 * f64::EPSILON;

/// Au-delà, la forme exacte n’apporte rien (numérateur illisible) : lecture décimale.
const MAGNITUDE_MAX: f64 = 1e9;

/* ------------------------ Nombres ------------------------ */

/// Fraction simple égale à `x` à la précision f64 près (fractions continues), si elle existe.
/// Jamais 0/1 pour x ≠ 0.
pub fn fraction_simple(x: f64) -> Option<Rational64> {
    if !x.is_finite() || x.abs() > MAGNITUDE_MAX {
        return None;
    }

    // réduites h/k : (h_{n-2}, h_{n-1}) et (k_{n-2}, k_{n-1})
    let (mut h0, mut h1): (i64, i64) = (0, 1);
    let (mut k0, mut k1): (i64, i64) = (1, 0);
    let mut reste = x;

    for _ in 0..32 {
        let ent = reste.floor();
        let n = ent as i64;

        let h2 = n.checked_mul(h1)?.checked_add(h0)?;
        let k2 = n.checked_mul(k1)?.checked_add(k0)?;
        if k2 > DENOM_MAX {
            return None;
        }

        let q = h2 as f64 / k2 as f64;
        if (x - q).abs() <= TOLERANCE_FRACTION * x.abs().max(q.abs()) {
            return Some(Rational64::new(h2, k2));
        }

        let frac = reste - ent;
        if frac <= f64::EPSILON {
            return None;
        }
        reste = 1.0 / frac;

        (h0, h1) = (h1, h2);
        (k0, k1) = (k1, k2);
    }

    None
}

/// Lecture décimale arrondie à `chiffres` décimales, zéros finaux retirés.
pub fn format_decimal(x: f64, chiffres: usize) -> String {
    let mut s = format!("{x:.chiffres$}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Entier => "2" ; fraction simple => "1/3 ≈ 0.3333333333" ; sinon décimal.
pub fn format_nombre(x: f64, chiffres: usize) -> String {
    match fraction_simple(x) {
        Some(r) if r.denom().is_one() => format!("{}", r.numer()),
        Some(r) => format!("{}/{} ≈ {}", r.numer(), r.denom(), format_decimal(x, chiffres)),
        None => format_decimal(x, chiffres),
    }
}

/// Partie réelle/imaginaire : entier si possible, sinon décimal (pas de fraction, lisibilité de a ± bi).
fn format_partie(x: f64, chiffres: usize) -> String {
    match fraction_simple(x) {
        Some(r) if r.denom().is_one() => format!("{}", r.numer()),
        _ => format_decimal(x, chiffres),
    }
}

/* ------------------------ Messages ------------------------ */

/// Message lisible pour une solution, avec le nom réel de la variable.
pub fn format_solution(sol: &Solution, variable: char, chiffres: usize) -> String {
    let v = variable;
    match *sol {
        Solution::SolutionsInfinies => "L’équation a une infinité de solutions.".to_string(),
        Solution::AucuneSolution => "L’équation n’a pas de solution.".to_string(),
        Solution::UneRacine { x } => {
            format!("Une solution réelle : {v} = {}", format_nombre(x, chiffres))
        }
        Solution::DeuxRacines { x1, x2 } => format!(
            "Deux solutions réelles : {v}1 = {}, {v}2 = {}",
            format_nombre(x1, chiffres),
            format_nombre(x2, chiffres)
        ),
        Solution::DeuxComplexes { reel, imaginaire } => {
            let r = format_partie(reel, chiffres);
            let i = format_partie(imaginaire, chiffres);
            format!("Deux solutions complexes : {v}1 = {r} + {i}i, {v}2 = {r} - {i}i")
        }
    }
}
