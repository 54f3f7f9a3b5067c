// src/noyau/variable.rs

/// Première lettre (ASCII) rencontrée de gauche à droite = l’inconnue.
/// Une seule lettre est supportée ; plusieurs lettres distinctes => le lexeur refusera.
pub fn identifier_variable(equation: &str) -> Option<char> {
    equation.chars().find(|c| c.is_ascii_alphabetic())
}
