//! Data models for Contxt platform entities.
//!
//! Field name constants (`FIELDS`) list the dotted paths a user may request
//! with `--fields`; they must match the serialized attribute names, since
//! projection resolves paths through the serialized form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Paginated response envelope used by the record-listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordsPage<T> {
    pub records: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Organization {
    pub const FIELDS: &'static [&'static str] = &["id", "name", "slug", "created_at"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_activated: bool,
}

impl User {
    pub const FIELDS: &'static [&'static str] =
        &["id", "first_name", "last_name", "email", "is_activated"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub address: Address,
    pub organization_id: String,
    pub timezone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Facility {
    pub const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "slug",
        "address.street",
        "address.city",
        "address.state",
        "address.zip",
        "organization_id",
        "timezone",
        "created_at",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetType {
    pub id: String,
    pub label: String,
    pub description: String,
    pub organization_id: String,
}

impl AssetType {
    pub const FIELDS: &'static [&'static str] = &["id", "label", "description", "organization_id"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub asset_type_id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub organization_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Asset {
    pub const FIELDS: &'static [&'static str] = &[
        "id",
        "asset_type_id",
        "label",
        "description",
        "organization_id",
        "created_at",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventType {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub is_ongoing_event: bool,
}

impl EventType {
    pub const FIELDS: &'static [&'static str] = &["id", "name", "slug", "is_ongoing_event"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub event_type_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility_id: Option<u64>,
    pub is_public: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Event {
    pub const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "event_type_id",
        "facility_id",
        "is_public",
        "created_at",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub asset_id: String,
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthStatus {
    pub const FIELDS: &'static [&'static str] = &["asset_id", "status", "timestamp"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    pub id: u64,
    pub key: String,
    pub facility_id: u64,
    pub feed_type: String,
    pub status: String,
    pub timezone: String,
}

impl Feed {
    pub const FIELDS: &'static [&'static str] =
        &["id", "key", "facility_id", "feed_type", "status", "timezone"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedField {
    pub id: u64,
    pub field_descriptor: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    pub feed_id: u64,
}

impl FeedField {
    pub const FIELDS: &'static [&'static str] =
        &["id", "field_descriptor", "label", "units", "feed_id"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationJob {
    pub id: String,
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_run_at: Option<DateTime<Utc>>,
}

impl IntegrationJob {
    pub const FIELDS: &'static [&'static str] = &["id", "name", "status", "last_run_at"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainService {
    pub id: u64,
    pub facility_id: u64,
    pub name: String,
    pub service_type: String,
}

impl MainService {
    pub const FIELDS: &'static [&'static str] = &["id", "facility_id", "name", "service_type"];
}

/// Utility spend report: one value per period within the requested window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilitySpend {
    pub currency: String,
    pub periods: Vec<SpendPeriod>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendPeriod {
    pub date: String,
    pub value: f64,
}

impl SpendPeriod {
    pub const FIELDS: &'static [&'static str] = &["date", "value"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facility_field_paths_resolve_on_a_serialized_facility() {
        let facility = Facility {
            id: 7,
            name: "Plant 1".to_string(),
            slug: "plant-1".to_string(),
            address: Address {
                street: "100 Main St".to_string(),
                city: "Raleigh".to_string(),
                state: "NC".to_string(),
                zip: "27601".to_string(),
            },
            organization_id: "org-1".to_string(),
            timezone: "America/New_York".to_string(),
            created_at: None,
        };
        let value = serde_json::to_value(&facility).unwrap();
        for path in Facility::FIELDS {
            // created_at is skipped when None; every other advertised path
            // must resolve on the serialized form
            if *path == "created_at" {
                continue;
            }
            let mut current = &value;
            for segment in path.split('.') {
                current = current
                    .get(segment)
                    .unwrap_or_else(|| panic!("path {path} broke at {segment}"));
            }
        }
    }
}
