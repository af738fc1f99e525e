// Skill list helpers shared by the job form, candidate rows and match view

/// "React, Node.js, TypeScript" -> ["React", "Node.js", "TypeScript"]
///
/// Empty entries from stray commas are dropped.
pub fn parse_skill_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Skill chips for a compact row: the first `limit` skills plus how many
/// were left out (rendered as "+N").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillChips<'a> {
    pub shown: &'a [String],
    pub hidden: usize,
}

impl SkillChips<'_> {
    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{}", self.hidden))
    }
}

pub fn chips(skills: &[String], limit: usize) -> SkillChips<'_> {
    let shown = &skills[..skills.len().min(limit)];
    SkillChips {
        shown,
        hidden: skills.len() - shown.len(),
    }
}

/// Candidate skills that did not match, compared case-insensitively
/// against the backend's (lowercased) matched list
pub fn other_skills<'a>(skills: &'a [String], matched: &[String]) -> Vec<&'a str> {
    skills
        .iter()
        .filter(|skill| {
            let lower = skill.to_lowercase();
            !matched.iter().any(|m| m.to_lowercase() == lower)
        })
        .map(String::as_str)
        .collect()
}
