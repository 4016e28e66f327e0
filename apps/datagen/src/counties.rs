use crate::collate::locale_cmp;
use crate::error::DatagenError;
use crate::geojson::Feature;
use crate::states::{state_by_fips, StateInfo, STATES};
use serde::ser::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct County {
    pub name: String,
    pub fips: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StateCounties {
    pub name: String,
    pub fips: String,
    pub regions: Vec<County>,
}

/// Every known state with its counties, keyed by abbreviation in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountyIndex {
    states: Vec<(&'static str, StateCounties)>,
}

impl CountyIndex {
    /// The fixed state enumeration with no counties filed yet.
    pub fn empty() -> Self {
        let states = STATES
            .iter()
            .map(|state| {
                (
                    state.abbr,
                    StateCounties {
                        name: state.name.to_string(),
                        fips: state.fips.to_string(),
                        regions: Vec::new(),
                    },
                )
            })
            .collect();

        Self { states }
    }

    /// Builds the sorted index. Features outside the known states are skipped
    /// before their key is checked; a known state with a malformed key fails.
    pub fn from_features(features: &[Feature]) -> Result<Self, DatagenError> {
        let mut index = Self::empty();

        for feature in features {
            let Some(state) = feature.id.state_prefix().as_deref().and_then(state_by_fips) else {
                tracing::debug!(key = %feature.id.key(), "skipping county outside the state table");
                continue;
            };
            let code = feature.id.county_code()?;
            index.insert(state, &feature.properties.name, code);
        }

        index.sort();
        Ok(index)
    }

    fn insert(&mut self, state: &StateInfo, name: &str, code: String) {
        if let Some((_, entry)) = self.states.iter_mut().find(|(abbr, _)| *abbr == state.abbr) {
            entry.regions.push(County {
                name: name.to_string(),
                fips: code,
                id: county_slug(name, state.abbr),
            });
        }
    }

    fn sort(&mut self) {
        for (_, entry) in &mut self.states {
            entry.regions.sort_by(|a, b| locale_cmp(&a.name, &b.name));
        }
    }

    pub fn get(&self, abbr: &str) -> Option<&StateCounties> {
        self.states
            .iter()
            .find(|(key, _)| *key == abbr)
            .map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StateCounties)> + '_ {
        self.states.iter().map(|(abbr, entry)| (*abbr, entry))
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn county_count(&self) -> usize {
        self.states.iter().map(|(_, entry)| entry.regions.len()).sum()
    }
}

impl Serialize for CountyIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.states.iter().map(|(abbr, entry)| (*abbr, entry)))
    }
}

/// `"Santa Clara"` in CA becomes `"santa-clara-ca"`.
pub fn county_slug(name: &str, state_abbr: &str) -> String {
    let mut slug = String::with_capacity(name.len() + 4);

    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            slug.push(ch);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    if !slug.is_empty() && !slug.ends_with('-') {
        slug.push('-');
    }
    slug.push_str(&state_abbr.to_lowercase());
    slug
}
