use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Which side of the label a producer sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProducerKind {
    Distiller,
    Bottler,
}

impl ProducerKind {
    pub const fn ordered() -> [Self; 2] {
        [Self::Distiller, Self::Bottler]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Distiller => "distiller",
            Self::Bottler => "bottler",
        }
    }
}

impl fmt::Display for ProducerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProducerKind {
    type Err = UnknownProducerKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "distiller" => Ok(Self::Distiller),
            "bottler" => Ok(Self::Bottler),
            _ => Err(UnknownProducerKind(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown producer kind '{0}' (expected 'distiller' or 'bottler')")]
pub struct UnknownProducerKind(pub String);

/// A producer row as held by the catalog store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerRecord {
    pub kind: ProducerKind,
    pub name: String,
    #[serde(default = "default_active", deserialize_with = "blank_as_active")]
    pub active: bool,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub merged_into: Option<String>,
}

impl ProducerRecord {
    pub fn new(kind: ProducerKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            active: true,
            merged_into: None,
        }
    }

    /// Only active records that have not been merged into another producer are
    /// offered as resolution targets.
    pub fn is_candidate(&self) -> bool {
        self.active && self.merged_into.is_none()
    }
}

/// Supplies the current canonical names for a producer kind.
///
/// Implementations may return blanks or duplicates; the resolver cleans them.
pub trait CandidateSource: Send + Sync {
    fn active_names(&self, kind: ProducerKind) -> Result<Vec<String>, CatalogError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read producer catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid producer catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("producer catalog unavailable: {0}")]
    Unavailable(String),
}

/// Immutable in-memory producer catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProducerCatalog {
    records: Vec<ProducerRecord>,
}

impl ProducerCatalog {
    pub fn new(records: Vec<ProducerRecord>) -> Self {
        Self { records }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load `kind,name,active,merged_into` rows. `active` and `merged_into` may be
    /// omitted or left blank.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in csv_reader.deserialize::<ProducerRecord>() {
            records.push(row?);
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[ProducerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CandidateSource for ProducerCatalog {
    fn active_names(&self, kind: ProducerKind) -> Result<Vec<String>, CatalogError> {
        Ok(self
            .records
            .iter()
            .filter(|record| record.kind == kind && record.is_candidate())
            .map(|record| record.name.clone())
            .collect())
    }
}

fn default_active() -> bool {
    true
}

fn blank_as_active<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(true),
        Some(value) => match value.to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(true),
            "false" | "no" | "0" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected a boolean for 'active', found '{other}'"
            ))),
        },
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
