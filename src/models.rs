//! Typed view of the Ads Document used by the CSV exporter.
//!
//! The server stores the document as opaque JSON; only the exporter needs the
//! campaign structure. Unknown fields are ignored, every list defaults to empty.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ============================================================================
// Scalar cells
// ============================================================================

/// A scalar written verbatim into a CSV cell.
///
/// The editor stores some numbers (budgets, bids) as JSON numbers and others
/// as strings, so any scalar is accepted. `null` becomes an empty cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text(pub String);

impl Text {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text(s.to_string())
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Text::from_value(Value::deserialize(deserializer)?))
    }
}

impl Text {
    fn from_value(value: Value) -> Self {
        Text(match value {
            Value::Null => String::new(),
            Value::String(s) => s,
            Value::Bool(true) => "True".to_string(),
            Value::Bool(false) => "False".to_string(),
            Value::Number(n) => n.to_string(),
            other => other.to_string(),
        })
    }
}

/// Deserialize a present field (even `null`) as `Some`, so that only an absent
/// field falls back to its default.
fn present<'de, D>(deserializer: D) -> Result<Option<Text>, D::Error>
where
    D: Deserializer<'de>,
{
    Text::deserialize(deserializer).map(Some)
}

/// Pin position; values the editor treats as false (`0`, `false`, `""`,
/// `null`, empty list or object) mean unpinned and come through empty.
fn pin_position<'de, D>(deserializer: D) -> Result<Text, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let unpinned = match &value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    };
    Ok(if unpinned {
        Text::default()
    } else {
        Text::from_value(value)
    })
}

/// Value of an optional field, or `default` when the field is absent.
pub fn or_default(field: &Option<Text>, default: &str) -> String {
    match field {
        Some(text) => text.0.clone(),
        None => default.to_string(),
    }
}

// ============================================================================
// Document
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct AdsDocument {
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
}

#[derive(Debug, Deserialize)]
pub struct Campaign {
    pub name: Text,
    #[serde(default, rename = "type", deserialize_with = "present")]
    pub campaign_type: Option<Text>,
    #[serde(default, deserialize_with = "present")]
    pub networks: Option<Text>,
    #[serde(default, deserialize_with = "present")]
    pub budget: Option<Text>,
    #[serde(default, deserialize_with = "present")]
    pub budget_type: Option<Text>,
    #[serde(default, deserialize_with = "present")]
    pub languages: Option<Text>,
    #[serde(default, deserialize_with = "present")]
    pub bid_strategy: Option<Text>,
    #[serde(default, deserialize_with = "present")]
    pub target_impression_share: Option<Text>,
    #[serde(default, deserialize_with = "present")]
    pub max_cpc_limit: Option<Text>,
    #[serde(default, deserialize_with = "present")]
    pub start_date: Option<Text>,
    #[serde(default, deserialize_with = "present")]
    pub status: Option<Text>,
    #[serde(default, deserialize_with = "present")]
    pub comment: Option<Text>,
    #[serde(default)]
    pub locations: Vec<Text>,
    #[serde(default)]
    pub ad_groups: Vec<AdGroup>,
}

#[derive(Debug, Deserialize)]
pub struct AdGroup {
    pub name: Text,
    #[serde(default, deserialize_with = "present")]
    pub max_cpc: Option<Text>,
    #[serde(default, deserialize_with = "present")]
    pub status: Option<Text>,
    #[serde(default)]
    pub keywords: Vec<Keyword>,
    #[serde(default)]
    pub negative_keywords: Vec<Keyword>,
    #[serde(default)]
    pub ads: Vec<Ad>,
}

#[derive(Debug, Deserialize)]
pub struct Keyword {
    #[serde(default, deserialize_with = "present")]
    pub keyword: Option<Text>,
    #[serde(default, deserialize_with = "present")]
    pub match_type: Option<Text>,
    #[serde(default, deserialize_with = "present")]
    pub status: Option<Text>,
}

/// Responsive search ad.
#[derive(Debug, Deserialize)]
pub struct Ad {
    #[serde(default)]
    pub headlines: Vec<AdText>,
    #[serde(default)]
    pub descriptions: Vec<AdText>,
    #[serde(default, deserialize_with = "present")]
    pub final_url: Option<Text>,
    #[serde(default, deserialize_with = "present")]
    pub path1: Option<Text>,
    #[serde(default, deserialize_with = "present")]
    pub path2: Option<Text>,
    #[serde(default, deserialize_with = "present")]
    pub status: Option<Text>,
}

/// A headline or description: either bare text or text pinned to a position.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AdText {
    Pinned {
        #[serde(default)]
        text: Text,
        #[serde(default, deserialize_with = "pin_position")]
        position: Text,
    },
    Plain(Text),
}

impl AdText {
    pub fn text(&self) -> &str {
        match self {
            AdText::Pinned { text, .. } => text.as_str(),
            AdText::Plain(text) => text.as_str(),
        }
    }

    /// Pinned position, if one is set.
    pub fn position(&self) -> Option<&str> {
        match self {
            AdText::Pinned { position, .. } if !position.is_empty() => Some(position.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_accepts_scalars() {
        let cells: Vec<Text> =
            serde_json::from_value(json!(["x", 50, 12.5, true, false, null])).unwrap();
        let cells: Vec<&str> = cells.iter().map(Text::as_str).collect();
        assert_eq!(cells, vec!["x", "50", "12.5", "True", "False", ""]);
    }

    #[test]
    fn test_absent_and_null_fields_differ() {
        let campaign: Campaign =
            serde_json::from_value(json!({"name": "C", "status": null})).unwrap();

        assert_eq!(campaign.status, Some(Text(String::new())));
        assert_eq!(campaign.networks, None);
        assert_eq!(or_default(&campaign.status, "Enabled"), "");
        assert_eq!(or_default(&campaign.networks, "Google search"), "Google search");
    }

    #[test]
    fn test_campaign_name_required() {
        let result = serde_json::from_value::<Campaign>(json!({"type": "Search"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_document_defaults_and_unknown_fields() {
        let doc: AdsDocument = serde_json::from_value(json!({
            "account": "ignored",
            "campaigns": [{"name": "C", "ad_groups": [{"name": "G", "extra": 1}]}]
        }))
        .unwrap();

        assert_eq!(doc.campaigns.len(), 1);
        let group = &doc.campaigns[0].ad_groups[0];
        assert!(group.keywords.is_empty());
        assert!(group.negative_keywords.is_empty());
        assert!(group.ads.is_empty());

        let empty: AdsDocument = serde_json::from_value(json!({})).unwrap();
        assert!(empty.campaigns.is_empty());
    }

    #[test]
    fn test_ad_text_variants() {
        let texts: Vec<AdText> = serde_json::from_value(json!([
            "Plain headline",
            {"text": "Pinned headline", "position": "1"},
            {"text": "Unpinned object"},
            {"text": "Empty position", "position": ""}
        ]))
        .unwrap();

        assert_eq!(texts[0].text(), "Plain headline");
        assert_eq!(texts[0].position(), None);
        assert_eq!(texts[1].text(), "Pinned headline");
        assert_eq!(texts[1].position(), Some("1"));
        assert_eq!(texts[2].text(), "Unpinned object");
        assert_eq!(texts[2].position(), None);
        assert_eq!(texts[3].position(), None);
    }

    #[test]
    fn test_false_like_positions_are_unpinned() {
        let texts: Vec<AdText> = serde_json::from_value(json!([
            {"text": "Zero", "position": 0},
            {"text": "Zero float", "position": 0.0},
            {"text": "False", "position": false},
            {"text": "Null", "position": null},
            {"text": "Numeric pin", "position": 2},
            {"text": "String zero", "position": "0"}
        ]))
        .unwrap();

        assert_eq!(texts[0].position(), None);
        assert_eq!(texts[1].position(), None);
        assert_eq!(texts[2].position(), None);
        assert_eq!(texts[3].position(), None);
        assert_eq!(texts[4].position(), Some("2"));
        // A non-empty string is a pin, whatever it says
        assert_eq!(texts[5].position(), Some("0"));
    }
}
