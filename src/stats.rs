//! Quick statistics over a merged names file.
//!
//! Counts entries, genders (`genero`, uppercased) and origins (`origen`,
//! title-cased). Records without the field are not counted for it. Counts
//! are listed most common first; ties keep first-appearance order.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

/// Number of origins shown by [`Stats`]'s `Display`.
pub const TOP_ORIGINS: usize = 20;

/// Summary of a record collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of records.
    pub total: usize,
    /// `(gender, count)`, most common first.
    pub by_gender: Vec<(String, usize)>,
    /// `(origin, count)`, most common first.
    pub by_origin: Vec<(String, usize)>,
}

impl Stats {
    /// Compute statistics over `records`.
    #[must_use]
    pub fn compute(records: &[Value]) -> Self {
        let mut genders = Counter::default();
        let mut origins = Counter::default();

        for record in records {
            if let Some(g) = record.get("genero") {
                genders.add(text_of(g).to_uppercase());
            }
            if let Some(o) = record.get("origen") {
                origins.add(title_case(&text_of(o)));
            }
        }

        Self {
            total: records.len(),
            by_gender: genders.most_common(),
            by_origin: origins.most_common(),
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total entries: {}", self.total)?;
        writeln!(f)?;
        writeln!(f, "By gender:")?;
        for (gender, count) in &self.by_gender {
            writeln!(f, "  {}: {count}", or_empty(gender))?;
        }
        writeln!(f)?;
        writeln!(f, "Most frequent origins:")?;
        for (origin, count) in self.by_origin.iter().take(TOP_ORIGINS) {
            writeln!(f, "  {}: {count}", or_empty(origin))?;
        }
        Ok(())
    }
}

fn or_empty(label: &str) -> &str {
    if label.is_empty() { "(empty)" } else { label }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Uppercase the first letter of every word, lowercase the rest.
///
/// A word starts at any letter not preceded by another letter.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Insertion-ordered tally.
#[derive(Default)]
struct Counter {
    index: HashMap<String, usize>,
    counts: Vec<(String, usize)>,
}

impl Counter {
    fn add(&mut self, label: String) {
        if let Some(&i) = self.index.get(&label) {
            self.counts[i].1 += 1;
        } else {
            self.index.insert(label.clone(), self.counts.len());
            self.counts.push((label, 1));
        }
    }

    fn most_common(mut self) -> Vec<(String, usize)> {
        // Stable sort: equal counts stay in first-seen order.
        self.counts.sort_by(|a, b| b.1.cmp(&a.1));
        self.counts
    }
}
