//! HTTP client for the trip server.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use planner_core::trip::{DayActivities, Participant, Trip, TripLink};

/// HTTP client for the trip server REST API.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

// Request/response types matching the server API

#[derive(Serialize)]
pub struct CreateTripRequest {
    pub destination: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub emails_to_invite: Vec<String>,
}

#[derive(Serialize)]
pub struct UpdateTripRequest {
    pub destination: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct CreateActivityRequest {
    pub title: String,
    pub occurs_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct CreateLinkRequest {
    pub title: String,
    pub url: String,
}

#[derive(Serialize)]
pub struct ConfirmParticipantRequest {
    pub name: String,
    pub email: String,
}

#[derive(Deserialize)]
struct CreateTripResponse {
    #[serde(rename = "tripId")]
    trip_id: String,
}

#[derive(Deserialize)]
struct GetTripResponse {
    trip: Trip,
}

#[derive(Deserialize)]
struct ParticipantsResponse {
    participants: Vec<Participant>,
}

#[derive(Deserialize)]
struct ActivitiesResponse {
    activities: Vec<DayActivities>,
}

#[derive(Deserialize)]
struct CreateActivityResponse {
    #[serde(rename = "activityId")]
    activity_id: String,
}

#[derive(Deserialize)]
struct LinksResponse {
    links: Vec<TripLink>,
}

#[derive(Deserialize)]
struct CreateLinkResponse {
    #[serde(rename = "linkId")]
    link_id: String,
}

#[derive(Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl Client {
    pub fn new(base_url: String) -> Self {
        Client {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// POST /trips
    pub async fn create_trip(&self, req: CreateTripRequest) -> Result<String> {
        let resp = self
            .http
            .post(format!("{}/trips", self.base_url))
            .json(&req)
            .send()
            .await
            .context("Failed to connect to trip server")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        let body: CreateTripResponse = resp.json().await?;
        Ok(body.trip_id)
    }

    /// GET /trips/:id
    pub async fn get_trip(&self, trip_id: &str) -> Result<Trip> {
        let resp = self
            .http
            .get(format!("{}/trips/{}", self.base_url, trip_id))
            .send()
            .await
            .context("Failed to connect to trip server")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        let body: GetTripResponse = resp.json().await?;
        Ok(body.trip)
    }

    /// PUT /trips/:id
    pub async fn update_trip(&self, trip_id: &str, req: UpdateTripRequest) -> Result<()> {
        let resp = self
            .http
            .put(format!("{}/trips/{}", self.base_url, trip_id))
            .json(&req)
            .send()
            .await
            .context("Failed to connect to trip server")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        Ok(())
    }

    /// GET /trips/:id/participants
    pub async fn participants(&self, trip_id: &str) -> Result<Vec<Participant>> {
        let resp = self
            .http
            .get(format!("{}/trips/{}/participants", self.base_url, trip_id))
            .send()
            .await
            .context("Failed to connect to trip server")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        let body: ParticipantsResponse = resp.json().await?;
        Ok(body.participants)
    }

    /// PATCH /participants/:id/confirm
    pub async fn confirm_participant(
        &self,
        participant_id: &str,
        req: ConfirmParticipantRequest,
    ) -> Result<()> {
        let resp = self
            .http
            .patch(format!(
                "{}/participants/{}/confirm",
                self.base_url, participant_id
            ))
            .json(&req)
            .send()
            .await
            .context("Failed to connect to trip server")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        Ok(())
    }

    /// GET /trips/:id/activities
    pub async fn activities(&self, trip_id: &str) -> Result<Vec<DayActivities>> {
        let resp = self
            .http
            .get(format!("{}/trips/{}/activities", self.base_url, trip_id))
            .send()
            .await
            .context("Failed to connect to trip server")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        let body: ActivitiesResponse = resp.json().await?;
        Ok(body.activities)
    }

    /// POST /trips/:id/activities
    pub async fn create_activity(
        &self,
        trip_id: &str,
        req: CreateActivityRequest,
    ) -> Result<String> {
        let resp = self
            .http
            .post(format!("{}/trips/{}/activities", self.base_url, trip_id))
            .json(&req)
            .send()
            .await
            .context("Failed to connect to trip server")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        let body: CreateActivityResponse = resp.json().await?;
        Ok(body.activity_id)
    }

    /// GET /trips/:id/links
    pub async fn links(&self, trip_id: &str) -> Result<Vec<TripLink>> {
        let resp = self
            .http
            .get(format!("{}/trips/{}/links", self.base_url, trip_id))
            .send()
            .await
            .context("Failed to connect to trip server")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        let body: LinksResponse = resp.json().await?;
        Ok(body.links)
    }

    /// POST /trips/:id/links
    pub async fn create_link(&self, trip_id: &str, req: CreateLinkRequest) -> Result<String> {
        let resp = self
            .http
            .post(format!("{}/trips/{}/links", self.base_url, trip_id))
            .json(&req)
            .send()
            .await
            .context("Failed to connect to trip server")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        let body: CreateLinkResponse = resp.json().await?;
        Ok(body.link_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // --- request wire shapes ---

    #[test]
    fn create_trip_request_wire_shape() {
        let req = CreateTripRequest {
            destination: "Florianópolis".into(),
            starts_at: Utc.with_ymd_and_hms(2024, 3, 12, 0, 0, 0).unwrap(),
            ends_at: Utc.with_ymd_and_hms(2024, 3, 18, 0, 0, 0).unwrap(),
            emails_to_invite: vec!["ana@example.com".into()],
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["destination"], "Florianópolis");
        assert!(json["starts_at"].as_str().unwrap().starts_with("2024-03-12T00:00:00"));
        assert_eq!(json["emails_to_invite"][0], "ana@example.com");
    }

    #[test]
    fn confirm_request_wire_shape() {
        let req = ConfirmParticipantRequest {
            name: "Ana".into(),
            email: "ana@example.com".into(),
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["email"], "ana@example.com");
    }

    // --- response envelopes ---

    #[test]
    fn create_responses_use_camel_case_ids() {
        let trip: CreateTripResponse = serde_json::from_str(r#"{"tripId":"t1"}"#).unwrap();
        assert_eq!(trip.trip_id, "t1");

        let activity: CreateActivityResponse =
            serde_json::from_str(r#"{"activityId":"a1"}"#).unwrap();
        assert_eq!(activity.activity_id, "a1");

        let link: CreateLinkResponse = serde_json::from_str(r#"{"linkId":"l1"}"#).unwrap();
        assert_eq!(link.link_id, "l1");
    }

    #[test]
    fn get_trip_response_is_enveloped() {
        let json = r#"{"trip": {
            "id": "t1",
            "destination": "Lisboa",
            "starts_at": "2024-03-12T00:00:00.000Z",
            "ends_at": "2024-03-18T00:00:00.000Z",
            "is_confirmed": false
        }}"#;

        let body: GetTripResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.trip.destination, "Lisboa");
    }

    #[test]
    fn list_responses_are_enveloped() {
        let body: ParticipantsResponse = serde_json::from_str(
            r#"{"participants": [
                {"id": "p1", "name": "Ana", "email": "ana@example.com", "is_confirmed": true}
            ]}"#,
        )
        .unwrap();
        assert_eq!(body.participants.len(), 1);

        let body: LinksResponse = serde_json::from_str(
            r#"{"links": [{"id": "l1", "title": "Airbnb", "url": "https://airbnb.com/x"}]}"#,
        )
        .unwrap();
        assert_eq!(body.links[0].title, "Airbnb");
    }
}
