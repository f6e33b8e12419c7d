//! Wire types for the recommendation endpoint
//!
//! - UserInput: the three form values, sent as the request body
//! - RecommendationItem: one recommended IEM
//! - ResponseEnvelope: the backend's reply

use serde::{Deserialize, Serialize};

/// Form values posted to `/api/recommend`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    pub budget: String,
    pub genre: String,
    pub sound_character: String,
}

/// One recommended IEM as returned by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationItem {
    pub name: String,
    pub brand: String,

    /// Raw price in rupiah; display uses `price_formatted`
    pub price: Option<i64>,
    pub price_formatted: String,

    pub tuning: String,
    pub genre: String,

    pub bass: u8,
    pub mid: u8,
    pub treble: u8,

    pub driver_type: String,
    pub soundstage: u8,

    /// Nearest-neighbour distance; smaller is closer
    pub distance: f64,

    /// Backend similarity score. Not used for display.
    pub match_score: Option<f64>,

    /// Path relative to the static asset root
    pub iem_image: Option<String>,
    pub tuning_image: Option<String>,
}

/// Backend reply. Only `success` decides the branch; the HTTP status is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Absent is treated as failure
    #[serde(default)]
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<RecommendationItem>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_input: Option<UserInput>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
