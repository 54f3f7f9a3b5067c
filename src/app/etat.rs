//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état du résolveur (entrée, résultat, erreur, chiffres, démarche, historique)
//! et offrir des opérations simples (C/CLR/AC, historique) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune résolution ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Bornes sur les chiffres affichés et sur la taille de l’historique.

use std::collections::VecDeque;
use std::ops::RangeInclusive;

/// Décimales affichées par défaut pour les racines.
const CHIFFRES_DEFAUT: usize = 10;

/// Au-delà, un f64 n’a plus de chiffres significatifs à montrer.
pub const CHIFFRES_MAX: usize = 15;

/// Plage du sélecteur de décimales (vue), alignée sur la borne de `set_chiffres`.
pub fn plage_chiffres() -> RangeInclusive<u32> {
    0..=CHIFFRES_MAX as u32
}

/// Historique borné (le plus récent en tête).
pub const HISTORIQUE_MAX: usize = 50;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub variable: String,
    pub gauche: String,
    pub droite: String,
    pub coefficients: String,
    pub branche: String,
    pub note: String,
}

/// Une équation déjà soumise et son message (succès ou erreur).
#[derive(Clone, Debug, PartialEq)]
pub struct EntreeHistorique {
    pub equation: String,
    pub resultat: String,
    pub succes: bool,
}

#[derive(Clone, Debug)]
pub struct AppResolveur {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // message lisible (dernière résolution réussie)
    pub erreur: String,   // message d’erreur (si normalisation/résolution échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- historique (remplace le stockage distant) ---
    pub historique: VecDeque<EntreeHistorique>,

    // --- paramètres ---
    pub chiffres: usize,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppResolveur {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            historique: VecDeque::with_capacity(HISTORIQUE_MAX),
            chiffres: CHIFFRES_DEFAUT,
            focus_entree: true,
        }
    }
}

impl AppResolveur {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + chiffres par défaut).
    /// L’historique est conservé (bouton dédié).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.chiffres = CHIFFRES_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    fn clear_demarche(&mut self) {
        self.demarche = Demarche::default();
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.clear_demarche();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE `resultat` (dernier succès) ; la démarche n’est plus fiable => effacée.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.clear_demarche();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (message + démarche).
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Garde-fou : borne les décimales affichées.
    pub fn set_chiffres(&mut self, chiffres: usize) {
        self.chiffres = chiffres.min(CHIFFRES_MAX);
        self.focus_entree = true;
    }

    /* ------------------------ Historique ------------------------ */

    /// Ajoute en tête ; au-delà de HISTORIQUE_MAX, la plus ancienne entrée sort.
    pub fn ajouter_historique(&mut self, equation: &str, resultat: &str, succes: bool) {
        self.historique.push_front(EntreeHistorique {
            equation: equation.to_string(),
            resultat: resultat.to_string(),
            succes,
        });
        self.historique.truncate(HISTORIQUE_MAX);
    }

    pub fn vider_historique(&mut self) {
        self.historique.clear();
        self.focus_entree = true;
    }

    /// Recharge l’équation d’une entrée dans le champ de saisie.
    pub fn rappeler(&mut self, index: usize) {
        if let Some(h) = self.historique.get(index) {
            self.entree = h.equation.clone();
            self.focus_entree = true;
        }
    }
}
