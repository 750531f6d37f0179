//! Client domain entity
//!
//! Clients are identified by a system-assigned id and, independently, by
//! their national personal number (PESEL), which is unique across clients.

use serde::{Deserialize, Serialize};

/// Unique identifier for a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClientId(pub i32);

impl From<i32> for ClientId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<ClientId> for i32 {
    fn from(id: ClientId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Length of a PESEL number
pub const PESEL_LEN: usize = 11;

/// National personal number, the natural identifier of a client.
///
/// Compared by exact string equality. Format checks happen at the request
/// boundary (see [`Pesel::parse`]); values loaded from storage are trusted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pesel(String);

impl Pesel {
    /// Parse user input, accepting exactly eleven ASCII digits
    pub fn parse(input: &str) -> Result<Self, String> {
        let input = input.trim();
        if input.len() != PESEL_LEN || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!(
                "PESEL must be exactly {} digits, got '{}'",
                PESEL_LEN, input
            ));
        }
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Pesel {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Pesel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Client {
    pub id: ClientId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub telephone: String,
    pub pesel: Pesel,
}

/// Data needed to create a new client
#[derive(Debug, Clone, PartialEq)]
pub struct NewClient {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub telephone: String,
    pub pesel: Pesel,
}

/// Name-only projection used in trip listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientName {
    pub first_name: String,
    pub last_name: String,
}

impl From<&Client> for ClientName {
    fn from(client: &Client) -> Self {
        ClientName {
            first_name: client.first_name.clone(),
            last_name: client.last_name.clone(),
        }
    }
}
