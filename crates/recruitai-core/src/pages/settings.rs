use std::path::Path;
use std::time::{Duration, Instant};

use crate::{config::Config, settings::Settings, Result};

pub const TITLE: &str = "Platform Settings";
pub const SAVE: &str = "Save Changes";
pub const SAVED: &str = "Settings Saved!";

/// How long the save button reads "Settings Saved!"
pub const SAVED_FLASH: Duration = Duration::from_secs(2);

/// Step applied by one left/right press on the weight slider
pub const WEIGHT_STEP: i16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsField {
    #[default]
    Theme,
    SemanticWeight,
    AutoAnalyze,
}

impl SettingsField {
    pub const ALL: [SettingsField; 3] = [
        SettingsField::Theme,
        SettingsField::SemanticWeight,
        SettingsField::AutoAnalyze,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsField::Theme => "Appearance",
            SettingsField::SemanticWeight => "Matching Algorithm",
            SettingsField::AutoAnalyze => "Auto-Analyze Resumes",
        }
    }
}

/// Unsaved edits on the settings page. Nothing reaches disk until `save`.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsForm {
    pub draft: Settings,
    pub focus: SettingsField,
    saved_at: Option<Instant>,
}

impl SettingsForm {
    pub fn new(settings: Settings) -> Self {
        Self {
            draft: settings,
            focus: SettingsField::default(),
            saved_at: None,
        }
    }

    pub fn focus_next(&mut self) {
        let idx = SettingsField::ALL
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        self.focus = SettingsField::ALL[(idx + 1) % SettingsField::ALL.len()];
    }

    pub fn focus_prev(&mut self) {
        let len = SettingsField::ALL.len();
        let idx = SettingsField::ALL
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        self.focus = SettingsField::ALL[(idx + len - 1) % len];
    }

    /// Left/right on the focused field. `forward` is right.
    pub fn adjust(&mut self, forward: bool) {
        match self.focus {
            SettingsField::Theme => {
                self.draft.theme = if forward {
                    self.draft.theme.next()
                } else {
                    self.draft.theme.prev()
                };
            }
            SettingsField::SemanticWeight => {
                let mut weights = self.draft.weights();
                weights.step_semantic(if forward { WEIGHT_STEP } else { -WEIGHT_STEP });
                self.draft.set_weights(weights);
            }
            SettingsField::AutoAnalyze => self.draft.toggle_auto_analyze(),
        }
    }

    /// Write the draft to `path`; `config` only changes once that succeeds
    pub fn save(&mut self, config: &mut Config, path: &Path) -> Result<()> {
        self.save_at(config, path, Instant::now())
    }

    fn save_at(&mut self, config: &mut Config, path: &Path, now: Instant) -> Result<()> {
        let updated = Config {
            settings: self.draft.clone(),
            ..config.clone()
        };
        updated.save_to(path)?;
        *config = updated;
        self.saved_at = Some(now);
        Ok(())
    }

    pub fn button_label(&self) -> &'static str {
        self.button_label_at(Instant::now())
    }

    fn button_label_at(&self, now: Instant) -> &'static str {
        match self.saved_at {
            Some(at) if now.saturating_duration_since(at) < SAVED_FLASH => SAVED,
            _ => SAVE,
        }
    }
}
