//! Fixture cases for slugs, grammars and tag lists
//!
//! Fixtures are CSV files with the header `kind,input,expected`:
//! - `slug`: `expected` is the normalized slug of `input`
//! - `tags`: `expected` is `tags => slugs`, each side joined with `;`
//! - any grammar name (`is_slug`, `utf8_tag`, ...): `expected` is `true` or `false`

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use csv::Reader;
use log::debug;
use serde::Deserialize;
use slugrule::grammar::Grammar;

use crate::slugger::Slugger;

const LIST_JOINER: &str = ";";
const TAGS_ARROW: &str = "=>";

#[derive(Debug, Deserialize, PartialEq)]
struct Record {
    kind: String,
    input: String,
    expected: String,
}

/// What a case exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseKind {
    Slug,
    Tags,
    Check(Grammar),
}

impl CaseKind {
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim() {
            "slug" => Ok(CaseKind::Slug),
            "tags" => Ok(CaseKind::Tags),
            other => Ok(CaseKind::Check(other.parse()?)),
        }
    }
}

impl fmt::Display for CaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseKind::Slug => f.write_str("slug"),
            CaseKind::Tags => f.write_str("tags"),
            CaseKind::Check(grammar) => write!(f, "{}", grammar),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugCase {
    pub kind: CaseKind,
    pub input: String,
    pub expected: String,
}

/// Result of running one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub hypothesis: String,
    pub reference: String,
    pub correct: bool,
}

impl SlugCase {
    pub fn evaluate(&self, slugger: &Slugger) -> Outcome {
        let hypothesis = match self.kind {
            CaseKind::Slug => slugger.slugify(&self.input),
            CaseKind::Tags => {
                let result = slugger.tags_and_slugs(&self.input);
                format_tags(&result.tags, &result.slugs)
            }
            CaseKind::Check(grammar) => slugger.check(grammar, &self.input).to_string(),
        };
        let reference = match self.kind {
            CaseKind::Tags => canonical_tags(&self.expected),
            _ => self.expected.clone(),
        };
        Outcome {
            correct: hypothesis == reference,
            hypothesis,
            reference,
        }
    }
}

/// Render a tag list result the way `tags` fixtures spell it.
pub fn format_tags(tags: &[String], slugs: &[String]) -> String {
    format!(
        "{} {} {}",
        tags.join(LIST_JOINER),
        TAGS_ARROW,
        slugs.join(LIST_JOINER)
    )
}

// One space belongs to the arrow on the tag side; tags keep any others.
fn canonical_tags(expected: &str) -> String {
    match expected.split_once(TAGS_ARROW) {
        Some((tags, slugs)) => format!(
            "{} {} {}",
            tags.strip_suffix(' ').unwrap_or(tags),
            TAGS_ARROW,
            slugs.trim()
        ),
        None => expected.to_string(),
    }
}

/// Parse fixture cases from CSV text.
pub fn process_cases(data: &str) -> Result<Vec<SlugCase>> {
    let mut reader = Reader::from_reader(data.as_bytes());
    let mut cases = Vec::new();
    for (row, result) in reader.deserialize().enumerate() {
        let record: Record = result.with_context(|| format!("malformed case at row {}", row + 1))?;
        let kind = CaseKind::parse(&record.kind)
            .with_context(|| format!("bad case kind at row {}", row + 1))?;
        if let CaseKind::Check(_) = kind {
            if record.expected != "true" && record.expected != "false" {
                bail!(
                    "row {}: expected 'true' or 'false', found '{}'",
                    row + 1,
                    record.expected
                );
            }
        }
        if kind == CaseKind::Tags && !record.expected.contains(TAGS_ARROW) {
            return Err(anyhow!("row {}: tags case needs '{}' in expected", row + 1, TAGS_ARROW));
        }
        cases.push(SlugCase {
            kind,
            input: record.input,
            expected: record.expected,
        });
    }
    Ok(cases)
}

/// Read and parse a fixture file.
pub fn load_cases(path: &Path) -> Result<Vec<SlugCase>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read case file: {}", path.display()))?;
    let cases = process_cases(&content).with_context(|| format!("in {}", path.display()))?;
    debug!("loaded {} cases from {}", cases.len(), path.display());
    Ok(cases)
}
