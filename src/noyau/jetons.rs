// src/noyau/jetons.rs

use super::erreur::{ErreurEquation, Malformation};

/// Terme typé d’un côté d’équation. Chaque terme porte son coefficient signé.
#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Carre(f64),     // a·x²
    Lineaire(f64),  // b·x
    Constante(f64), // c
    Fin,
}

/// Tokenize UN côté d’équation (sans '=') pour la variable donnée.
///
/// À chaque position, dans cet ordre de priorité :
/// - signe optionnel + chiffres/point, suivi de la variable et d’un exposant (2, ^2, ²) => Carre
/// - idem sans exposant => Lineaire
/// - signe optionnel + nombre (au moins un chiffre) => Constante
///
/// Rien n’est ignoré en silence : tout autre caractère est une erreur, de même qu’un
/// nombre collé sans signe derrière un terme en variable ("2x3", "x23").
/// Un côté vide donne seulement `[Fin]`.
pub fn tokenize_cote(cote: &str, variable: char) -> Result<Vec<Jeton>, ErreurEquation> {
    let chars: Vec<char> = cote.chars().collect();
    let mut out = Vec::new();
    let mut i: usize = 0;
    let mut apres_variable = false;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // "2x3" n’est pas "2x+3" : un terme suivant doit commencer par un signe
        if apres_variable && (c.is_ascii_digit() || c == '.') {
            return Err(Malformation::CaractereInattendu(c).into());
        }
        apres_variable = false;

        // Signe + texte numérique (peut être vide)
        let start = i;
        if c == '+' || c == '-' {
            i += 1;
        }
        while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
            i += 1;
        }
        let texte: String = chars[start..i].iter().collect();

        // Terme en variable : x² d’abord, puis x
        if i < chars.len() && chars[i] == variable {
            let coeff = parse_coefficient(&texte)?;
            i += 1;
            match fin_exposant_carre(&chars, i) {
                Some(apres) => {
                    out.push(Jeton::Carre(coeff));
                    i = apres;
                }
                None => out.push(Jeton::Lineaire(coeff)),
            }
            apres_variable = true;
            continue;
        }

        // Constante : au moins un chiffre
        if texte.chars().any(|c| c.is_ascii_digit()) {
            out.push(Jeton::Constante(parse_nombre(&texte)?));
            continue;
        }

        // Restes invalides
        if texte.is_empty() {
            return Err(Malformation::CaractereInattendu(c).into());
        }
        if texte.contains('.') {
            return Err(Malformation::Coefficient(texte).into());
        }
        return match chars.get(i) {
            None | Some('+') | Some('-') => Err(Malformation::SigneIsole.into()),
            Some(&autre) => Err(Malformation::CaractereInattendu(autre).into()),
        };
    }

    out.push(Jeton::Fin);
    log::trace!("jetons({cote:?}) = {}", format_jetons(&out, variable));
    Ok(out)
}

/// Si un exposant "2" (ou "^2", "²") commence en `i`, retourne l’indice juste après.
fn fin_exposant_carre(chars: &[char], i: usize) -> Option<usize> {
    match chars.get(i) {
        Some('2') | Some('²') => Some(i + 1),
        Some('^') if chars.get(i + 1) == Some(&'2') => Some(i + 2),
        _ => None,
    }
}

/// Coefficient devant la variable : "" ou "+" => 1, "-" => -1, sinon nombre décimal.
pub fn parse_coefficient(texte: &str) -> Result<f64, ErreurEquation> {
    match texte {
        "" | "+" => Ok(1.0),
        "-" => Ok(-1.0),
        _ => parse_nombre(texte),
    }
}

fn parse_nombre(texte: &str) -> Result<f64, ErreurEquation> {
    match texte.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Malformation::Coefficient(texte.to_string()).into()),
    }
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton], variable: char) -> String {
    jetons
        .iter()
        .map(|j| match j {
            Jeton::Carre(v) => format!("[{v}{variable}²]"),
            Jeton::Lineaire(v) => format!("[{v}{variable}]"),
            Jeton::Constante(v) => format!("[{v}]"),
            Jeton::Fin => "[fin]".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
