//! Interest extraction.
//!
//! Keyword matching over a lower-cased message. No stemming, no
//! tokenization, no negation handling: "I hate data" still scores
//! `data_science`.

use std::fmt;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::catalog;

/// Subject categories and the keywords that score them.
const SUBJECT_KEYWORDS: &[(&str, &[&str])] = &[
    ("programming", &["programming", "coding", "software", "developer"]),
    ("data_science", &["data", "analytics", "statistics", "visualization"]),
    ("algorithms", &["algorithm", "data structures", "efficient", "computational"]),
    (
        "artificial_intelligence",
        &["ai", "machine learning", "artificial intelligence", "neural"],
    ),
    ("web_development", &["web", "frontend", "backend", "fullstack", "website"]),
    ("design", &["design", "user experience", "ux", "ui", "interface"]),
    ("graphics", &["graphics", "game", "animation", "visual", "3d"]),
    ("security", &["security", "privacy", "cryptography", "cybersecurity"]),
    ("theory", &["theory", "formal", "mathematical", "proof"]),
];

/// Category → strength map that remembers first-seen order.
///
/// Ranking is a stable sort on strength, so equal strengths keep the order
/// in which their categories were first recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterestScores {
    entries: Vec<(String, u32)>,
}

impl InterestScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: &str) -> u32 {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, s)| *s)
            .unwrap_or(0)
    }

    /// Add `amount` to a category, inserting it at the end if new.
    pub fn add(&mut self, category: &str, amount: u32) {
        match self.entries.iter_mut().find(|(c, _)| c == category) {
            Some((_, strength)) => *strength = strength.saturating_add(amount),
            None => self.entries.push((category.to_string(), amount)),
        }
    }

    pub fn increment(&mut self, category: &str) {
        self.add(category, 1);
    }

    /// Merge another score set, keeping the per-category maximum.
    pub fn merge_max(&mut self, other: &InterestScores) {
        for (category, strength) in &other.entries {
            match self.entries.iter_mut().find(|(c, _)| c == category) {
                Some((_, existing)) => *existing = (*existing).max(*strength),
                None => self.entries.push((category.clone(), *strength)),
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(c, s)| (c.as_str(), *s))
    }

    /// Entries by strength descending, ties in insertion order.
    pub fn ranked(&self) -> Vec<(&str, u32)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The `n` strongest categories.
    pub fn top(&self, n: usize) -> Vec<&str> {
        self.ranked().into_iter().take(n).map(|(c, _)| c).collect()
    }
}

impl Serialize for InterestScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, strength) in &self.entries {
            map.serialize_entry(category, strength)?;
        }
        map.end()
    }
}

impl fmt::Display for InterestScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(c, s)| format!("{c}={s}")).collect();
        write!(f, "{}", parts.join(","))
    }
}

/// Score the interests expressed in a single message.
///
/// Within one message scores add up: each matching course, career path and
/// subject keyword contributes one point to its category.
pub fn extract_interests(message: &str) -> InterestScores {
    let lower = message.to_lowercase();
    let mut scores = InterestScores::new();

    for course in catalog::courses() {
        if lower.contains(&course.code.to_lowercase())
            || lower.contains(&course.title.to_lowercase())
        {
            scores.increment(&course.primary_category());
        }
    }

    for path in catalog::career_paths() {
        if lower.contains(&path.name.to_lowercase()) {
            scores.increment(&path.interest_key());
        }
    }

    for (category, keywords) in SUBJECT_KEYWORDS {
        for keyword in *keywords {
            if lower.contains(keyword) {
                scores.increment(category);
            }
        }
    }

    scores
}

/// Catalog course codes named in a message, in catalog order.
pub fn mentioned_courses(message: &str) -> Vec<&'static str> {
    let lower = message.to_lowercase();
    catalog::courses()
        .iter()
        .filter(|c| lower.contains(&c.code.to_lowercase()))
        .map(|c| c.code)
        .collect()
}

/// Career path names named in a message, in catalog order.
pub fn mentioned_careers(message: &str) -> Vec<&'static str> {
    let lower = message.to_lowercase();
    catalog::career_paths()
        .iter()
        .filter(|p| lower.contains(&p.name.to_lowercase()))
        .map(|p| p.name)
        .collect()
}
