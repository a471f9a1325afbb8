//! Wire types for the trip server.
//!
//! The server speaks JSON with snake_case fields and RFC 3339 instants;
//! these types mirror it field for field so the HTTP client can work with
//! them directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A trip as stored by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub destination: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    /// Whether the trip owner confirmed the trip.
    pub is_confirmed: bool,
}

/// A guest invited to a trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    /// Missing until the guest confirms attendance.
    pub name: Option<String>,
    pub email: String,
    pub is_confirmed: bool,
}

/// One scheduled activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub occurs_at: DateTime<Utc>,
}

impl Activity {
    /// Whether the activity already happened.
    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.occurs_at < now
    }
}

/// Activities grouped under one trip day.
///
/// The server returns one group per day of the trip range, including days
/// with nothing scheduled yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayActivities {
    pub date: DateTime<Utc>,
    pub activities: Vec<Activity>,
}

/// A link attached to a trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripLink {
    pub id: String,
    pub title: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn trip_deserializes_server_json() {
        let json = r#"{
            "id": "0bd6a836",
            "destination": "Florianópolis",
            "starts_at": "2024-03-12T00:00:00.000Z",
            "ends_at": "2024-03-18T00:00:00.000Z",
            "is_confirmed": true
        }"#;

        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.destination, "Florianópolis");
        assert_eq!(trip.starts_at, Utc.with_ymd_and_hms(2024, 3, 12, 0, 0, 0).unwrap());
        assert!(trip.is_confirmed);
    }

    #[test]
    fn participant_name_is_optional() {
        let json = r#"{
            "id": "p1",
            "name": null,
            "email": "ana@example.com",
            "is_confirmed": false
        }"#;

        let participant: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(participant.name, None);
        assert!(!participant.is_confirmed);
    }

    #[test]
    fn day_groups_deserialize_with_empty_days() {
        let json = r#"[
            {
                "date": "2024-03-12T00:00:00.000Z",
                "activities": [
                    {"id": "a1", "title": "Hiking", "occurs_at": "2024-03-12T09:00:00.000Z"}
                ]
            },
            {"date": "2024-03-13T00:00:00.000Z", "activities": []}
        ]"#;

        let days: Vec<DayActivities> = serde_json::from_str(json).unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].activities[0].title, "Hiking");
        assert!(days[1].activities.is_empty());
    }

    #[test]
    fn activity_is_past_compares_against_now() {
        let activity = Activity {
            id: "a1".into(),
            title: "Hiking".into(),
            occurs_at: Utc.with_ymd_and_hms(2024, 3, 12, 9, 0, 0).unwrap(),
        };

        assert!(activity.is_past(Utc.with_ymd_and_hms(2024, 3, 12, 10, 0, 0).unwrap()));
        assert!(!activity.is_past(Utc.with_ymd_and_hms(2024, 3, 12, 8, 0, 0).unwrap()));
    }
}
