//! Agent metadata record and its update payload

use serde::{Deserialize, Serialize};

/// Metadata held for one live agent token.
///
/// `name` is fixed at mint; the remaining fields are replaced wholesale by
/// [`AgentMetadata::apply`]. `capabilities` keeps insertion order, which is
/// the canonical order for equality comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentMetadata {
    /// Display name, set once at mint
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Image URI (typically a content identifier from the uploader)
    pub image: String,
    /// Ordered capability list
    pub capabilities: Vec<String>,
    /// Caller-supplied semantic version string (not validated here)
    pub version: String,
}

impl AgentMetadata {
    /// Create a new record
    #[inline]
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        capabilities: Vec<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image: image.into(),
            capabilities,
            version: version.into(),
        }
    }

    /// Replace the mutable fields wholesale.
    ///
    /// `name` is left untouched. The capability list is replaced, never
    /// merged.
    #[inline]
    pub fn apply(&mut self, update: MetadataUpdate) {
        self.description = update.description;
        self.image = update.image;
        self.capabilities = update.capabilities;
        self.version = update.version;
    }
}

/// Replacement payload for the mutable fields of an [`AgentMetadata`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataUpdate {
    pub description: String,
    pub image: String,
    pub capabilities: Vec<String>,
    pub version: String,
}

impl MetadataUpdate {
    /// Create a new update payload
    #[inline]
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        image: impl Into<String>,
        capabilities: Vec<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            image: image.into(),
            capabilities,
            version: version.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> AgentMetadata {
        AgentMetadata::new(
            "AI Agent 1",
            "Description of AI Agent 1",
            "https://example.com/image.png",
            vec!["skill1".to_string(), "skill2".to_string()],
            "1.0.0",
        )
    }

    #[test]
    fn apply_replaces_mutable_fields_wholesale() {
        let mut record = sample();
        record.apply(MetadataUpdate::new(
            "Updated description",
            "https://example.com/updated-image.png",
            vec!["new-skill1".to_string()],
            "1.1.0",
        ));

        assert_eq!(record.description, "Updated description");
        assert_eq!(record.image, "https://example.com/updated-image.png");
        // Old capabilities are gone, not merged
        assert_eq!(record.capabilities, vec!["new-skill1".to_string()]);
        assert_eq!(record.version, "1.1.0");
    }

    #[test]
    fn apply_leaves_name_untouched() {
        let mut record = sample();
        record.apply(MetadataUpdate::new("d", "i", vec![], "2.0.0"));
        assert_eq!(record.name, "AI Agent 1");
    }

    #[test]
    fn apply_with_empty_capabilities_clears_list() {
        let mut record = sample();
        record.apply(MetadataUpdate::new("d", "i", Vec::new(), "1.0.1"));
        assert!(record.capabilities.is_empty());
    }

    #[test]
    fn capability_order_is_preserved() {
        let record = AgentMetadata::new(
            "a",
            "b",
            "c",
            vec!["z".to_string(), "a".to_string(), "m".to_string()],
            "0.1.0",
        );
        assert_eq!(
            record.capabilities,
            vec!["z".to_string(), "a".to_string(), "m".to_string()]
        );
    }

    #[test]
    fn record_serde_round_trip() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let decoded: AgentMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(record, decoded);
    }
}
