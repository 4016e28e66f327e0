use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Owner {
    Union,
    Confederate,
    Neutral,
}

impl Owner {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Union => "Union",
            Self::Confederate => "Confederate",
            Self::Neutral => "Neutral",
        }
    }
}

/// A territory the spinner can land on. Never mutated by the spinner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Territory {
    pub id: String,
    pub name: String,
    pub owner: Owner,
    pub victory_points: u32,
}

#[derive(Debug, Error)]
pub enum TerritoryError {
    #[error("failed to read territories from {path}: {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid territories file {path}: {source}", path = path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("territory {name:?} has an empty id")]
    EmptyId { name: String },

    #[error("territory id {0:?} appears more than once")]
    DuplicateId(String),
}

/// Rejects rosters the spinner could not select from unambiguously.
pub fn validate_roster(territories: &[Territory]) -> Result<(), TerritoryError> {
    let mut seen = HashSet::with_capacity(territories.len());

    for territory in territories {
        if territory.id.trim().is_empty() {
            return Err(TerritoryError::EmptyId {
                name: territory.name.clone(),
            });
        }
        if !seen.insert(territory.id.as_str()) {
            return Err(TerritoryError::DuplicateId(territory.id.clone()));
        }
    }

    Ok(())
}

pub fn parse_roster(json: &str, path: &Path) -> Result<Vec<Territory>, TerritoryError> {
    let territories: Vec<Territory> =
        serde_json::from_str(json).map_err(|source| TerritoryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    validate_roster(&territories)?;
    Ok(territories)
}

pub fn load_roster(path: &Path) -> Result<Vec<Territory>, TerritoryError> {
    let json = std::fs::read_to_string(path).map_err(|source| TerritoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_roster(&json, path)
}

/// Resolves a controlled selection id; empty or unknown ids resolve to nothing.
pub fn find_territory<'a>(territories: &'a [Territory], id: &str) -> Option<&'a Territory> {
    if id.is_empty() {
        return None;
    }

    territories.iter().find(|territory| territory.id == id)
}

#[cfg(test)]
pub(crate) fn territory(id: &str, name: &str) -> Territory {
    Territory {
        id: id.to_string(),
        name: name.to_string(),
        owner: Owner::Neutral,
        victory_points: 1,
    }
}
