//! Noyau — résolution d’équations à une inconnue (degré 0, 1 ou 2)
//!
//! Organisation interne :
//! - erreur.rs     : taxonomie d’erreurs (aucune variable / équation malformée)
//! - variable.rs   : identification de l’inconnue
//! - jetons.rs     : lexeur d’un côté -> jetons typés (x², x, constante, fin)
//! - normalise.rs  : '=' + deux côtés -> triplet canonique (a, b, c)
//! - resolution.rs : tri ε + formules fermées
//! - format.rs     : messages lisibles (forme exacte si fraction simple)
//! - eval.rs       : pipeline complet + démarche

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod normalise;
pub mod resolution;
pub mod variable;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurEquation, GenreErreur, Malformation};
pub use eval::{eval_equation, resoudre_equation, DemarcheNoyau, Resolution};
pub use normalise::{normaliser, Coefficients};
pub use resolution::{
    resoudre, resoudre_premier_degre, resoudre_second_degre, Solution, EPSILON,
};
