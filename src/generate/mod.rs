//! Name generator: CSV rows → enriched JSON entries.
//!
//! Each CSV row (`Nombre`, `Género`, `Origen`, with a few accepted header
//! spellings) becomes a [`NameEntry`] whose `significado` is a five-paragraph
//! description:
//!
//! 1. origin and meaning (curated etymology, or drawn from phrase pools);
//! 2. notable bearers or an archetypal legacy;
//! 3. a custom or poetic story;
//! 4. a second story of a randomly drawn type;
//! 5. the name's numerology.
//!
//! All randomness comes from one seeded [`StdRng`], so a given CSV, seed and
//! `--types` list always produce the same file. Batches are produced with
//! `--skip` / `--max` and later combined with `nombres dedupe`.

pub mod catalog;
pub mod story;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use nombres_core::key::normalize_text;
use nombres_core::numerology;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

pub use story::{StoryType, parse_types};

/// Accepted header spellings, in lookup order.
const NAME_HEADERS: &[&str] = &["Nombre", "nombre"];
const GENDER_HEADERS: &[&str] = &["Género", "Genero", "genero"];
const ORIGIN_HEADERS: &[&str] = &["Origen", "origen"];

const DEFAULT_GENDER: &str = "U";
const DEFAULT_ORIGIN: &str = "Desconocido";

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Story metadata of an entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub tipo: StoryType,
    /// Stories are embedded in `significado`; kept for schema compatibility.
    pub relato: String,
}

/// One generated dataset entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameEntry {
    pub nombre: String,
    pub genero: String,
    pub origen: String,
    pub significado: String,
    pub historia: Story,
}

/// A CSV row reduced to the three fields the generator reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameRow {
    pub name: String,
    pub gender: String,
    pub origin: String,
}

impl NameRow {
    /// Map a header → value row. Returns `None` when the name is empty.
    ///
    /// For each field the first header spelling with a non-empty value wins;
    /// the chosen value is then trimmed.
    #[must_use]
    pub fn from_fields(fields: &HashMap<&str, &str>) -> Option<Self> {
        let first = |headers: &[&str], default: &str| -> String {
            headers
                .iter()
                .filter_map(|h| fields.get(h).copied())
                .find(|v| !v.is_empty())
                .unwrap_or(default)
                .trim()
                .to_owned()
        };

        let name = first(NAME_HEADERS, "");
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name,
            gender: first(GENDER_HEADERS, DEFAULT_GENDER),
            origin: first(ORIGIN_HEADERS, DEFAULT_ORIGIN),
        })
    }
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Seeded text generator.
pub struct Generator {
    rng: StdRng,
    preferred: Vec<StoryType>,
}

impl Generator {
    /// Generator seeded with `seed`, drawing fallback story types from
    /// `preferred` (all types when empty).
    #[must_use]
    pub fn new(seed: u64, preferred: Vec<StoryType>) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            preferred,
        }
    }

    fn pick<T: Copy + Default>(&mut self, items: &[T]) -> T {
        items.choose(&mut self.rng).copied().unwrap_or_default()
    }

    /// Build the dataset entry for one row.
    pub fn entry(&mut self, row: &NameRow) -> NameEntry {
        let significado = self.describe(&row.name, &row.origin);
        let tipo = self.choose_type(&row.name, &row.origin);
        NameEntry {
            nombre: row.name.clone(),
            genero: row.gender.clone(),
            origen: row.origin.clone(),
            significado,
            historia: Story {
                tipo,
                relato: String::new(),
            },
        }
    }

    /// Five-paragraph description of `name`, paragraphs separated by a blank
    /// line.
    pub fn describe(&mut self, name: &str, origin: &str) -> String {
        let curated = catalog::curated(&normalize_text(name, false, false));

        let origin_paragraph = match curated {
            Some(c) => {
                let mut p = c.etymology.to_owned();
                if !c.variants.is_empty() {
                    p.push_str(&format!(
                        " Algunas de sus variantes son {}.",
                        c.variants.join(", ")
                    ));
                }
                p.push(' ');
                p.push_str(c.symbolism);
                p
            }
            None => {
                let virtue = self.pick(catalog::VIRTUES);
                let character = self.pick(catalog::CHARACTER);
                let drive = self.pick(catalog::DRIVES);
                format!(
                    "De origen {}, se asocia a la {virtue} y a un carácter {character}. Refleja un impulso hacia el {drive}.",
                    origin.to_lowercase()
                )
            }
        };

        let legacy_paragraph = match curated {
            Some(c) => format!(
                "Este nombre ha sido llevado por figuras notables a lo largo de la historia. {}",
                c.notable_bearers.join(" ")
            ),
            None => self.legacy(),
        };

        let (first_story, second_story) = match curated {
            Some(c) => {
                let t = self.pick(&[StoryType::Fantastica, StoryType::Mitologica]);
                (c.story.to_owned(), t.render(name))
            }
            None => {
                let t = self.pick(&[
                    StoryType::Historica,
                    StoryType::Fantastica,
                    StoryType::Mitologica,
                ]);
                (StoryType::Poetica.render(name), t.render(name))
            }
        };

        let number = numerology::name_number(name);
        let numerology_paragraph = format!(
            "En numerología, el nombre {name} resuena con la vibración del número {number}. {}",
            numerology::meaning(number)
        );

        [
            origin_paragraph,
            legacy_paragraph,
            first_story,
            second_story,
            numerology_paragraph,
        ]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
    }

    fn legacy(&mut self) -> String {
        let archetype = self.pick(catalog::ARCHETYPES);
        let legacy = self.pick(catalog::LEGACIES);
        let pursuit = self.pick(catalog::PURSUITS);
        let exemplar = self.pick(catalog::EXEMPLARS);
        let options = [
            format!(
                "Portadores de este nombre a menudo se destacan como {archetype}, dejando una huella de {legacy} en su comunidad."
            ),
            format!(
                "El eco de este nombre resuena en aquellos que buscan la {pursuit}, convirtiéndose en referentes de {exemplar}."
            ),
        ];
        options
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_default()
    }

    /// Story type recorded in `historia.tipo`.
    ///
    /// Fixed rules for well-known names and origins come first; otherwise the
    /// type is drawn from the preferred list, or from all types.
    pub fn choose_type(&mut self, name: &str, origin: &str) -> StoryType {
        let name = name.to_lowercase();
        let origin = origin.to_lowercase();
        let name = name.as_str();
        let origin = origin.as_str();

        if catalog::BIBLICAL_NAMES.contains(&name) {
            return StoryType::Biblica;
        }
        if catalog::CLASSICAL_ORIGINS.contains(&origin)
            && catalog::CLASSICAL_HISTORIC_NAMES.contains(&name)
        {
            return StoryType::Historica;
        }
        if catalog::MYTHIC_ORIGINS.contains(&origin) {
            return self.pick(&[StoryType::Mitologica, StoryType::Poetica]);
        }
        if catalog::ARABIC_ORIGINS.contains(&origin)
            && catalog::ARABIC_HISTORIC_NAMES.contains(&name)
        {
            return StoryType::Historica;
        }
        if catalog::POETIC_NAMES.contains(&name) {
            return StoryType::Poetica;
        }
        if self.preferred.is_empty() {
            self.pick(&StoryType::ALL)
        } else {
            let preferred = std::mem::take(&mut self.preferred);
            let chosen = self.pick(&preferred);
            self.preferred = preferred;
            chosen
        }
    }
}

// ---------------------------------------------------------------------------
// CSV driver
// ---------------------------------------------------------------------------

/// Errors reading the CSV source.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The CSV file could not be opened or a row could not be decoded.
    #[error("could not read CSV {}: {source}", path.display())]
    Csv {
        /// CSV file being read.
        path: PathBuf,
        /// Underlying CSV error (I/O, UTF-8, or row structure).
        source: csv::Error,
    },
}

/// Row window and randomness settings for one generation batch.
#[derive(Clone, Debug, Default)]
pub struct GenerateOptions {
    /// Raw CSV rows to skip before generating.
    pub skip: usize,
    /// Maximum entries to produce; 0 means no limit.
    pub max: usize,
    /// RNG seed.
    pub seed: u64,
    /// Fallback story types.
    pub types: Vec<StoryType>,
}

/// Generate entries for the rows of the CSV file at `path`.
///
/// `skip` counts raw data rows, including rows later ignored for an empty
/// name; `max` counts produced entries.
///
/// # Errors
/// Returns [`GenerateError::Csv`] if the file cannot be read or parsed.
#[instrument(skip_all, fields(path = %path.display(), skip = options.skip, max = options.max))]
pub fn generate_from_csv(
    path: &Path,
    options: &GenerateOptions,
) -> Result<Vec<NameEntry>, GenerateError> {
    let csv_err = |source| GenerateError::Csv {
        path: path.to_owned(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;
    let headers = reader.headers().map_err(csv_err)?.clone();

    let mut generator = Generator::new(options.seed, options.types.clone());
    let mut entries = Vec::new();

    for (row_index, result) in reader.records().enumerate() {
        if row_index < options.skip {
            continue;
        }
        if options.max > 0 && entries.len() >= options.max {
            break;
        }
        let record = result.map_err(csv_err)?;
        let fields: HashMap<&str, &str> = headers.iter().zip(record.iter()).collect();
        match NameRow::from_fields(&fields) {
            Some(row) => entries.push(generator.entry(&row)),
            None => tracing::debug!(row = row_index + 1, "row without name ignored"),
        }
    }

    tracing::info!(entries = entries.len(), "generation complete");
    Ok(entries)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
