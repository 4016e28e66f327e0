use crate::error::DatagenError;
use serde::Deserialize;

/// The slice of a GeoJSON FeatureCollection the generator reads.
#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    pub id: FeatureId,
    pub properties: FeatureProperties,
}

#[derive(Debug, Deserialize)]
pub struct FeatureProperties {
    #[serde(rename = "NAME")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FeatureId {
    Text(String),
    Number(u64),
}

impl FeatureId {
    /// The trimmed key as written, with numeric ids zero-padded to 5 digits.
    pub fn key(&self) -> String {
        match self {
            Self::Text(text) => text.trim().to_string(),
            Self::Number(number) => format!("{number:05}"),
        }
    }

    /// First two characters of the key; `None` for keys shorter than that.
    pub fn state_prefix(&self) -> Option<String> {
        let prefix: String = self.key().chars().take(2).collect();
        (prefix.chars().count() == 2).then_some(prefix)
    }

    /// Normalized 5-digit county code: 2-digit state prefix + 3-digit county.
    pub fn county_code(&self) -> Result<String, DatagenError> {
        let code = self.key();

        if code.len() == 5 && code.bytes().all(|byte| byte.is_ascii_digit()) {
            Ok(code)
        } else {
            Err(DatagenError::InvalidFeatureId(code))
        }
    }
}

pub fn parse_feature_collection(body: &str) -> Result<FeatureCollection, DatagenError> {
    serde_json::from_str(body).map_err(DatagenError::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_string_and_numeric_ids() -> Result<(), Box<dyn std::error::Error>> {
        let body = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "id": "06001", "properties": {"NAME": "Alameda", "LSAD": "County"}, "geometry": null},
                {"type": "Feature", "id": 1001, "properties": {"NAME": "Autauga"}}
            ]
        }"#;

        let collection = parse_feature_collection(body)?;
        assert_eq!(collection.features.len(), 2);
        assert_eq!(collection.features[0].id.county_code()?, "06001");
        assert_eq!(collection.features[1].id.county_code()?, "01001");
        assert_eq!(collection.features[1].properties.name, "Autauga");

        Ok(())
    }

    #[test]
    fn missing_name_is_malformed() {
        let body = r#"{"features": [{"id": "06001", "properties": {}}]}"#;
        assert!(matches!(
            parse_feature_collection(body),
            Err(DatagenError::Parse(_))
        ));
    }

    #[test]
    fn non_json_is_malformed() {
        assert!(matches!(
            parse_feature_collection("<html>rate limited</html>"),
            Err(DatagenError::Parse(_))
        ));
    }

    #[test]
    fn prefixes_are_taken_before_validation() {
        assert_eq!(FeatureId::Text(" AB123 ".to_string()).state_prefix().as_deref(), Some("AB"));
        assert_eq!(FeatureId::Number(1001).state_prefix().as_deref(), Some("01"));
        assert_eq!(FeatureId::Text("7".to_string()).state_prefix(), None);
    }

    #[test]
    fn short_or_alphabetic_ids_are_rejected() {
        for id in ["0600", "06A01", "060011"] {
            let feature_id = FeatureId::Text(id.to_string());
            assert!(
                matches!(feature_id.county_code(), Err(DatagenError::InvalidFeatureId(_))),
                "{id} should be rejected"
            );
        }
    }
}
