// src/noyau/erreur.rs

use thiserror::Error;

/// Les deux familles d’échec visibles par l’appelant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenreErreur {
    NoVariable,
    MalformedEquation,
}

/// Erreur du noyau : rendue (jamais avalée), aucune reprise possible.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurEquation {
    #[error("Aucune variable trouvée dans l’équation.")]
    AucuneVariable,

    #[error("Équation non valide : {0}")]
    Malformee(#[from] Malformation),
}

/// Détail d’une équation malformée.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Malformation {
    #[error("il faut exactement un signe '=', trouvé {0}")]
    SignesEgal(usize),

    #[error("coefficient invalide: '{0}'")]
    Coefficient(String),

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("signe isolé sans nombre ni variable")]
    SigneIsole,

    #[error("résultat non fini (coefficients hors domaine)")]
    ResultatNonFini,
}

impl ErreurEquation {
    pub fn genre(&self) -> GenreErreur {
        match self {
            ErreurEquation::AucuneVariable => GenreErreur::NoVariable,
            ErreurEquation::Malformee(_) => GenreErreur::MalformedEquation,
        }
    }
}
