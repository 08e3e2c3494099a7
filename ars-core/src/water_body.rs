use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Label used in the source data for groundwater samples.
pub const GROUNDWATER_LABEL: &str = "Subterránea";

/// Label used in the source data for surface water samples.
pub const SURFACE_LABEL: &str = "Superficial";

/// Classification of a sample's source.
///
/// The source data uses an open set of labels; the two known ones get their
/// own variants and everything else is kept verbatim in `Other`. Build values
/// with `WaterBodyType::from_label` so a known label never ends up in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WaterBodyType {
    Groundwater,
    Surface,
    Other(String),
}

impl WaterBodyType {
    pub fn from_label(label: &str) -> Self {
        match label {
            GROUNDWATER_LABEL => WaterBodyType::Groundwater,
            SURFACE_LABEL => WaterBodyType::Surface,
            other => WaterBodyType::Other(other.to_string()),
        }
    }

    /// The label as it appears in the source data.
    pub fn label(&self) -> &str {
        match self {
            WaterBodyType::Groundwater => GROUNDWATER_LABEL,
            WaterBodyType::Surface => SURFACE_LABEL,
            WaterBodyType::Other(label) => label,
        }
    }
}

impl From<String> for WaterBodyType {
    fn from(value: String) -> Self {
        WaterBodyType::from_label(&value)
    }
}

impl From<WaterBodyType> for String {
    fn from(value: WaterBodyType) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for WaterBodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Ordered by label so tables and facets list types alphabetically.
impl Ord for WaterBodyType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label().cmp(other.label())
    }
}

impl PartialOrd for WaterBodyType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_known_and_other() {
        assert_eq!(WaterBodyType::from_label("Subterránea"), WaterBodyType::Groundwater);
        assert_eq!(WaterBodyType::from_label("Superficial"), WaterBodyType::Surface);
        assert_eq!(
            WaterBodyType::from_label("Costera"),
            WaterBodyType::Other("Costera".to_string())
        );
    }

    #[test]
    fn test_label_round_trip() {
        for label in ["Subterránea", "Superficial", "Costera"] {
            assert_eq!(WaterBodyType::from_label(label).label(), label);
        }
    }

    #[test]
    fn test_ordering_follows_label() {
        let mut types = vec![
            WaterBodyType::Surface,
            WaterBodyType::Other("Costera".to_string()),
            WaterBodyType::Groundwater,
        ];
        types.sort();
        assert_eq!(
            types,
            vec![
                WaterBodyType::Other("Costera".to_string()),
                WaterBodyType::Groundwater,
                WaterBodyType::Surface,
            ]
        );
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&WaterBodyType::Groundwater).unwrap();
        assert_eq!(json, "\"Subterránea\"");
        let back: WaterBodyType = serde_json::from_str("\"Superficial\"").unwrap();
        assert_eq!(back, WaterBodyType::Surface);
    }
}
