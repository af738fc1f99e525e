use crate::models::Candidate;

/// Case-insensitive substring search over filename and skills.
///
/// A blank query returns the list untouched. A non-blank query is matched
/// as typed (lowercased, not trimmed), so " go" only hits text with a
/// leading space before "go".
pub fn filter_candidates<'a>(candidates: &'a [Candidate], query: &str) -> Vec<&'a Candidate> {
    if query.trim().is_empty() {
        return candidates.iter().collect();
    }

    let needle = query.to_lowercase();
    candidates
        .iter()
        .filter(|candidate| matches_query(candidate, &needle))
        .collect()
}

/// `needle` must already be lowercase
fn matches_query(candidate: &Candidate, needle: &str) -> bool {
    candidate.filename.to_lowercase().contains(needle)
        || candidate
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(needle))
}
