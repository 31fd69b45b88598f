//! Story types and template rendering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::catalog;

/// Narrative flavour of a generated story.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoryType {
    #[serde(rename = "histórica")]
    Historica,
    #[serde(rename = "bíblica")]
    Biblica,
    #[serde(rename = "mitológica")]
    Mitologica,
    #[default]
    #[serde(rename = "poética")]
    Poetica,
    #[serde(rename = "fantástica")]
    Fantastica,
}

impl StoryType {
    /// Every story type, in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Historica,
        Self::Biblica,
        Self::Mitologica,
        Self::Poetica,
        Self::Fantastica,
    ];

    /// Spanish label, as stored in `historia.tipo`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Historica => "histórica",
            Self::Biblica => "bíblica",
            Self::Mitologica => "mitológica",
            Self::Poetica => "poética",
            Self::Fantastica => "fantástica",
        }
    }

    const fn template(self) -> &'static str {
        match self {
            Self::Historica => catalog::TEMPLATE_HISTORICA,
            Self::Biblica => catalog::TEMPLATE_BIBLICA,
            Self::Mitologica => catalog::TEMPLATE_MITOLOGICA,
            Self::Poetica => catalog::TEMPLATE_POETICA,
            Self::Fantastica => catalog::TEMPLATE_FANTASTICA,
        }
    }

    /// Story of this type about `name`, on a single line.
    #[must_use]
    pub fn render(self, name: &str) -> String {
        self.template()
            .replace("{nombre}", name)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for StoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A `--types` value that names no story type.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown story type '{0}'")]
pub struct UnknownStoryType(pub String);

impl FromStr for StoryType {
    type Err = UnknownStoryType;

    /// Accepts the Spanish label with or without accents, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "historica" | "histórica" => Ok(Self::Historica),
            "biblica" | "bíblica" => Ok(Self::Biblica),
            "mitologica" | "mitológica" => Ok(Self::Mitologica),
            "poetica" | "poética" => Ok(Self::Poetica),
            "fantastica" | "fantástica" => Ok(Self::Fantastica),
            _ => Err(UnknownStoryType(s.to_owned())),
        }
    }
}

/// Parse `--types` values, dropping unknown ones.
///
/// Returns the recognised types and the rejected raw values.
#[must_use]
pub fn parse_types(values: &[String]) -> (Vec<StoryType>, Vec<String>) {
    let mut types = Vec::new();
    let mut rejected = Vec::new();
    for value in values {
        match value.parse::<StoryType>() {
            Ok(t) => types.push(t),
            Err(UnknownStoryType(raw)) => rejected.push(raw),
        }
    }
    (types, rejected)
}
