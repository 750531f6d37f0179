//! Trip handlers
//!
//! Endpoints for browsing trips and enrolling clients on them.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{EnrollmentRequest, NewClient, Pesel, TripId, TripPage, TripSummary};
use crate::domain::ports::TravelStore;
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing trips
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTripsQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

/// Response for listing trips
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripsResponse {
    pub page_num: u64,
    pub page_size: u64,
    pub all_pages: u64,
    pub trips: Vec<TripResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResponse {
    pub name: String,
    pub description: String,
    pub date_from: String,
    pub date_to: String,
    pub max_people: i32,
    pub countries: Vec<CountryResponse>,
    pub clients: Vec<ClientNameResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CountryResponse {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientNameResponse {
    pub first_name: String,
    pub last_name: String,
}

impl From<TripPage> for TripsResponse {
    fn from(page: TripPage) -> Self {
        TripsResponse {
            page_num: page.page_num,
            page_size: page.page_size,
            all_pages: page.all_pages,
            trips: page.trips.into_iter().map(TripResponse::from).collect(),
        }
    }
}

impl From<TripSummary> for TripResponse {
    fn from(trip: TripSummary) -> Self {
        TripResponse {
            name: trip.name,
            description: trip.description,
            date_from: trip.date_from.to_rfc3339(),
            date_to: trip.date_to.to_rfc3339(),
            max_people: trip.max_people,
            countries: trip
                .countries
                .into_iter()
                .map(|c| CountryResponse { name: c.name })
                .collect(),
            clients: trip
                .clients
                .into_iter()
                .map(|c| ClientNameResponse {
                    first_name: c.first_name,
                    last_name: c.last_name,
                })
                .collect(),
        }
    }
}

/// Request to put a client on a trip.
///
/// Extra fields sent by older clients (`idTrip`, `tripName`) are ignored;
/// the trip always comes from the path.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignClientRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub telephone: String,
    #[serde(alias = "nationalId")]
    pub pesel: String,
    #[serde(default)]
    pub payment_date: Option<DateTime<Utc>>,
}

impl AssignClientRequest {
    /// Validate the payload and convert it into an enrollment request
    fn into_enrollment(self) -> Result<EnrollmentRequest, AppError> {
        let required = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("telephone", &self.telephone),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::BadRequest(format!("{} is required", field)));
            }
        }

        let pesel = Pesel::parse(&self.pesel).map_err(AppError::BadRequest)?;

        Ok(EnrollmentRequest {
            client: NewClient {
                first_name: self.first_name.trim().to_string(),
                last_name: self.last_name.trim().to_string(),
                email: self.email.trim().to_string(),
                telephone: self.telephone.trim().to_string(),
                pesel,
            },
            payment_date: self.payment_date,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignClientResponse {
    pub message: String,
    pub client_id: i32,
    pub trip_id: i32,
    pub new_client: bool,
}

/// GET /api/trips
///
/// List trips, latest start date first.
pub async fn list_trips<S: TravelStore>(
    State(state): State<AppState<S>>,
    Query(query): Query<ListTripsQuery>,
) -> Result<Json<TripsResponse>, AppError> {
    let page = state
        .trip_service
        .list_trips(query.page, query.page_size)
        .await?;

    Ok(Json(page.into()))
}

/// POST /api/trips/:id/clients
///
/// Enroll a new or returning client (matched by PESEL) on a trip.
pub async fn assign_client_to_trip<S: TravelStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<i32>,
    Json(payload): Json<AssignClientRequest>,
) -> Result<Json<AssignClientResponse>, AppError> {
    let request = payload.into_enrollment()?;

    let outcome = state
        .enrollment_service
        .assign_client_to_trip(TripId(id), &request)
        .await?;

    Ok(Json(AssignClientResponse {
        message: "Client assigned to trip".to_string(),
        client_id: outcome.client.id.0,
        trip_id: outcome.trip.id.0,
        new_client: outcome.client_created,
    }))
}
