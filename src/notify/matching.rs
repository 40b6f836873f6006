//! Professor selection by keyword overlap.

use crate::catalog::{self, Faculty};

/// 2 points per specialty or interest found in `content`, 1 for the name.
pub fn professor_score(professor: &Faculty, content: &str) -> u32 {
    let lower = content.to_lowercase();
    let keyword_hits = professor
        .specialties
        .iter()
        .chain(professor.interests)
        .filter(|k| lower.contains(&k.to_lowercase()))
        .count() as u32;
    let name_hit = u32::from(lower.contains(&professor.name.to_lowercase()));
    keyword_hits * 2 + name_hit
}

/// Choose who receives the inquiry.
///
/// An explicitly selected professor (exact roster name) wins. Otherwise the
/// highest positive score against `content` is chosen, earlier roster
/// entries winning ties, and the department chair is the default.
pub fn select_professor(content: &str, selected: Option<&str>) -> &'static Faculty {
    if let Some(professor) = selected.and_then(catalog::find_professor) {
        return professor;
    }

    let mut best: Option<(&'static Faculty, u32)> = None;
    for professor in catalog::faculty() {
        let score = professor_score(professor, content);
        if score > 0 && best.is_none_or(|(_, top)| score > top) {
            best = Some((professor, score));
        }
    }

    best.map(|(p, _)| p).unwrap_or_else(catalog::default_advisor)
}
