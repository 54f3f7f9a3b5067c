//! Résolveur d’équations — noyau réutilisable (sans UI)
//!
//! Le binaire (eframe) n’est qu’un appelant parmi d’autres : toute source de texte
//! (saisie, OCR, service) peut appeler `noyau::eval_equation` directement.

pub mod noyau;
