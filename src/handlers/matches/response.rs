//! Matching response DTOs

use serde::Serialize;

use crate::{
    handlers::{donations::DonationResponse, requests::RequestResponse, tasks::TaskResponse},
    models::Role,
    services::match_service::{DonationMatches, MatchListing, RequestMatches},
};

/// One donor donation with its exactly-matching requests
#[derive(Debug, Serialize)]
pub struct DonationMatchGroup {
    pub donation: DonationResponse,
    pub requests: Vec<RequestResponse>,
}

impl From<DonationMatches> for DonationMatchGroup {
    fn from(m: DonationMatches) -> Self {
        Self {
            donation: m.donation.into(),
            requests: m.requests.into_iter().map(Into::into).collect(),
        }
    }
}

/// One receiver request with its exactly-matching donations
#[derive(Debug, Serialize)]
pub struct RequestMatchGroup {
    pub request: RequestResponse,
    pub donations: Vec<DonationResponse>,
}

impl From<RequestMatches> for RequestMatchGroup {
    fn from(m: RequestMatches) -> Self {
        Self {
            request: m.request.into(),
            donations: m.donations.into_iter().map(Into::into).collect(),
        }
    }
}

/// Match listing, grouped by the actor's own open records
#[derive(Debug, Serialize)]
pub struct MatchListingResponse {
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donation_matches: Option<Vec<DonationMatchGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_matches: Option<Vec<RequestMatchGroup>>,
}

impl From<MatchListing> for MatchListingResponse {
    fn from(listing: MatchListing) -> Self {
        match listing {
            MatchListing::Donor(matches) => Self {
                role: Role::Donor,
                donation_matches: Some(matches.into_iter().map(Into::into).collect()),
                request_matches: None,
            },
            MatchListing::Receiver(matches) => Self {
                role: Role::Receiver,
                donation_matches: None,
                request_matches: Some(matches.into_iter().map(Into::into).collect()),
            },
        }
    }
}

/// Match connection response
#[derive(Debug, Serialize)]
pub struct ConnectMatchResponse {
    pub message: String,
    pub task: TaskResponse,
    pub donation: DonationResponse,
    pub request: RequestResponse,
}
