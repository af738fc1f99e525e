use serde::{Deserialize, Serialize};

/// Semantic and skill weights always add up to this
pub const WEIGHT_TOTAL: u8 = 100;

const DEFAULT_SEMANTIC_WEIGHT: u8 = 70;

/// Appearance preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Dark, ThemeMode::Light, ThemeMode::System];

    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "Dark Mode",
            ThemeMode::Light => "Light Mode",
            ThemeMode::System => "System Mode",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::System,
            ThemeMode::System => ThemeMode::Dark,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::System => ThemeMode::Light,
        }
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("unknown theme '{}' (dark, light or system)", other)),
        }
    }
}

/// Matching weights as percentages. Moving one slider moves the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchWeights {
    semantic: u8,
    skills: u8,
}

impl MatchWeights {
    pub fn from_semantic(semantic: u8) -> Self {
        let semantic = semantic.min(WEIGHT_TOTAL);
        Self {
            semantic,
            skills: WEIGHT_TOTAL - semantic,
        }
    }

    pub fn from_skills(skills: u8) -> Self {
        let skills = skills.min(WEIGHT_TOTAL);
        Self {
            semantic: WEIGHT_TOTAL - skills,
            skills,
        }
    }

    pub fn semantic(&self) -> u8 {
        self.semantic
    }

    pub fn skills(&self) -> u8 {
        self.skills
    }

    pub fn set_semantic(&mut self, value: u8) {
        *self = Self::from_semantic(value);
    }

    pub fn set_skills(&mut self, value: u8) {
        *self = Self::from_skills(value);
    }

    /// Nudge the semantic slider by `delta` points, saturating at the ends
    pub fn step_semantic(&mut self, delta: i16) {
        let value = (self.semantic as i16 + delta).clamp(0, WEIGHT_TOTAL as i16);
        self.set_semantic(value as u8);
    }

    /// Fractions for display, e.g. (0.7, 0.3)
    pub fn as_fractions(&self) -> (f64, f64) {
        (
            self.semantic as f64 / WEIGHT_TOTAL as f64,
            self.skills as f64 / WEIGHT_TOTAL as f64,
        )
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self::from_semantic(DEFAULT_SEMANTIC_WEIGHT)
    }
}

/// User-facing preferences.
///
/// Field aliases accept the camelCase keys the web dashboard kept in
/// browser storage, so an exported blob can be imported as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: ThemeMode,

    #[serde(default = "default_semantic_weight", alias = "matchWeightSimilarity")]
    semantic_weight: u8,

    #[serde(default = "default_skill_weight", alias = "matchWeightSkills")]
    skill_weight: u8,

    #[serde(default = "default_auto_analyze", alias = "autoAnalyze")]
    pub auto_analyze: bool,
}

fn default_semantic_weight() -> u8 {
    DEFAULT_SEMANTIC_WEIGHT
}

fn default_skill_weight() -> u8 {
    WEIGHT_TOTAL - DEFAULT_SEMANTIC_WEIGHT
}

fn default_auto_analyze() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            semantic_weight: default_semantic_weight(),
            skill_weight: default_skill_weight(),
            auto_analyze: default_auto_analyze(),
        }
    }
}

impl Settings {
    /// Parse the JSON blob the browser dashboard stored
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.normalized())
    }

    pub fn weights(&self) -> MatchWeights {
        MatchWeights {
            semantic: self.semantic_weight,
            skills: self.skill_weight,
        }
    }

    pub fn set_weights(&mut self, weights: MatchWeights) {
        self.semantic_weight = weights.semantic();
        self.skill_weight = weights.skills();
    }

    pub fn set_semantic_weight(&mut self, value: u8) {
        self.set_weights(MatchWeights::from_semantic(value));
    }

    pub fn set_skill_weight(&mut self, value: u8) {
        self.set_weights(MatchWeights::from_skills(value));
    }

    pub fn toggle_auto_analyze(&mut self) {
        self.auto_analyze = !self.auto_analyze;
    }

    /// Repair weights read from disk that do not add up; the semantic
    /// weight wins because it is the one users actually drag.
    pub fn normalized(mut self) -> Self {
        let weights = self.weights();
        if weights.semantic as u16 + weights.skills as u16 != WEIGHT_TOTAL as u16 {
            tracing::warn!(
                "Stored weights {}/{} do not sum to {}, keeping semantic weight",
                weights.semantic,
                weights.skills,
                WEIGHT_TOTAL
            );
            self.set_semantic_weight(weights.semantic);
        }
        self
    }
}
