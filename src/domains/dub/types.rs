//! Wire types for the Dub REST API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A domain configured in the authenticated workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: String,
    pub slug: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expired_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_found_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A short link as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub domain: String,
    pub key: String,
    /// Destination URL.
    pub url: String,
    /// Fully composed short URL, e.g. `https://dub.sh/abc`.
    pub short_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body for `POST /links` and `PUT /links/upsert`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRequest {
    pub url: String,
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

/// Body for `PATCH /links/{id}`. Omitted fields are left untouched remotely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LinkUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl LinkUpdate {
    /// True when no field would be sent.
    pub fn is_empty(&self) -> bool {
        self.url.is_none() && self.domain.is_none() && self.key.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_domain_lenient_deserialize() {
        let domain: Domain = serde_json::from_value(json!({
            "id": "dom_1",
            "slug": "dub.sh",
            "primary": true,
            "createdAt": "2024-05-01T10:00:00.000Z",
            "someFutureField": 42
        }))
        .unwrap();

        assert_eq!(domain.slug, "dub.sh");
        assert!(domain.primary);
        assert!(!domain.verified);
        assert!(!domain.archived);
        assert!(domain.created_at.is_some());
    }

    #[test]
    fn test_link_request_omits_absent_fields() {
        let body = LinkRequest {
            url: "https://example.com".to_string(),
            domain: "dub.sh".to_string(),
            key: None,
            external_id: Some("ext-1".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"url": "https://example.com", "domain": "dub.sh", "externalId": "ext-1"})
        );
    }

    #[test]
    fn test_link_update_only_supplied_fields() {
        let update = LinkUpdate {
            key: Some("promo".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({"key": "promo"}));
        assert!(LinkUpdate::default().is_empty());
    }
}
