// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppResolveur (etat.rs) pour natif + wasm
// - Clavier : Enter résout (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Historique cliquable : recharge l’équation dans l’entrée

use eframe::egui;

use resolveur_equations::noyau::{eval_equation, DemarcheNoyau};

use super::etat::{plage_chiffres, AppResolveur, Demarche};

impl AppResolveur {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Résolveur d’équations");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);

                ui.add_space(8.0);
                self.ui_historique(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Équation :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2x+3=7, x2-4=0, 3y2 - 2y = 7.5")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter résout (le champ monoligne perd le focus sur Enter)
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.resoudre_via_noyau();
        }

        ui.add_space(6.0);

        // Actions + décimales
        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout (sauf historique)
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Décimales :");
            let mut d = self.chiffres as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(plage_chiffres())
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_chiffres(d as usize);
            }
        });

        ui.add_space(8.0);

        // Touches rapides : variable, carré, signes, '='
        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "x", "x");
            self.bouton_insert(ui, "x²", "x2");
            self.bouton_insert(ui, "+", "+");
            self.bouton_insert(ui, "-", "-");
            self.bouton_insert(ui, "=", "=");

            ui.add_space(10.0);

            let go = ui.add_sized([96.0, 32.0], egui::Button::new("Résoudre"));
            if go.clicked() {
                self.resoudre_via_noyau();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", "7");
                self.bouton_insert(ui, "8", "8");
                self.bouton_insert(ui, "9", "9");
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", "4");
                self.bouton_insert(ui, "5", "5");
                self.bouton_insert(ui, "6", "6");
                self.bouton_insert(ui, ".", ".");
                ui.end_row();

                self.bouton_insert(ui, "1", "1");
                self.bouton_insert(ui, "2", "2");
                self.bouton_insert(ui, "3", "3");
                self.bouton_insert(ui, "0", "0");
                ui.end_row();
            });
    }

    /// Retire le dernier symbole ("x2" d’un coup, sinon un caractère).
    fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        if self.entree.ends_with("x2") {
            self.entree.truncate(self.entree.len() - 2);
        } else {
            self.entree.pop();
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 2);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Variable", "demarche_var", &self.demarche.variable);
                Self::champ_demarche(ui, "Gauche", "demarche_gauche", &self.demarche.gauche);
                Self::champ_demarche(
                    ui,
                    "Droite (signes inversés)",
                    "demarche_droite",
                    &self.demarche.droite,
                );
                Self::champ_demarche(
                    ui,
                    "Coefficients",
                    "demarche_coeffs",
                    &self.demarche.coefficients,
                );
                Self::champ_demarche(ui, "Branche", "demarche_branche", &self.demarche.branche);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let mut rappel: Option<usize> = None;
        let mut vider = false;

        egui::CollapsingHeader::new(format!("Historique ({})", self.historique.len()))
            .id_salt("historique")
            .default_open(false)
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.label("Aucune équation pour l’instant.");
                    return;
                }

                for (i, h) in self.historique.iter().enumerate() {
                    ui.horizontal_wrapped(|ui| {
                        if ui
                            .button(&h.equation)
                            .on_hover_text("Recharger dans l’entrée")
                            .clicked()
                        {
                            rappel = Some(i);
                        }
                        if h.succes {
                            ui.monospace(&h.resultat);
                        } else {
                            ui.colored_label(ui.visuals().error_fg_color, &h.resultat);
                        }
                    });
                }

                ui.add_space(4.0);
                vider = ui.button("Vider l’historique").clicked();
            });

        if let Some(i) = rappel {
            self.rappeler(i);
        }
        if vider {
            self.vider_historique();
        }
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.entree.push_str(to_insert);
            self.focus_entree = true;
        }
    }

    /// Résout via le noyau, puis dépose résultat/démarche dans l’état UI et l’historique.
    fn resoudre_via_noyau(&mut self) {
        let s = self.entree.trim().to_string();
        if s.is_empty() {
            self.set_erreur("Entrée vide : saisissez une équation, ex. 2x+3=7");
            return;
        }

        match eval_equation(&s, self.chiffres) {
            Ok((message, _solution, d)) => {
                log::info!("{s:?} -> {message}");
                self.ajouter_historique(&s, &message, true);
                self.set_resultat(message, demarche_ui(d));
            }
            Err(e) => {
                log::info!("{s:?} refusée: {e}");
                let msg = e.to_string();
                self.ajouter_historique(&s, &msg, false);
                self.set_erreur(msg);
            }
        }
    }
}

fn demarche_ui(d: DemarcheNoyau) -> Demarche {
    Demarche {
        variable: d.variable,
        gauche: d.gauche,
        droite: d.droite,
        coefficients: d.coefficients,
        branche: d.branche,
        note: d.note,
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}
