//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::{
    Client, ClientId, Enrollment, EnrollmentRequest, NewClient, Pesel, Trip, TripId,
};

/// Create a trip starting at the given instant and lasting a week
pub fn test_trip_starting(id: i32, date_from: DateTime<Utc>) -> Trip {
    Trip {
        id: TripId(id),
        name: format!("Trip {}", id),
        description: format!("Description of trip {}", id),
        date_from,
        date_to: date_from + Duration::days(7),
        max_people: 20,
    }
}

/// Create a trip that starts in thirty days
pub fn test_future_trip(id: i32) -> Trip {
    test_trip_starting(id, Utc::now() + Duration::days(30))
}

/// Create a trip that started thirty days ago
pub fn test_past_trip(id: i32) -> Trip {
    test_trip_starting(id, Utc::now() - Duration::days(30))
}

/// Create client data for a given PESEL
pub fn test_new_client(pesel: &str) -> NewClient {
    NewClient {
        first_name: "Jan".to_string(),
        last_name: "Kowalski".to_string(),
        email: format!("jan.{}@example.com", pesel),
        telephone: "+48 600 100 200".to_string(),
        pesel: Pesel::from(pesel.to_string()),
    }
}

/// Create a stored client with a specific id and PESEL
pub fn test_client(id: i32, pesel: &str) -> Client {
    let new_client = test_new_client(pesel);
    Client {
        id: ClientId(id),
        first_name: new_client.first_name,
        last_name: new_client.last_name,
        email: new_client.email,
        telephone: new_client.telephone,
        pesel: new_client.pesel,
    }
}

/// Create an unpaid enrollment request for a given PESEL
pub fn test_enrollment_request(pesel: &str) -> EnrollmentRequest {
    EnrollmentRequest {
        client: test_new_client(pesel),
        payment_date: None,
    }
}

/// Create an enrollment registered a day ago
pub fn test_enrollment(client_id: ClientId, trip_id: TripId) -> Enrollment {
    Enrollment {
        client_id,
        trip_id,
        registered_at: Utc::now() - Duration::days(1),
        payment_date: None,
    }
}
