//! IEM Recommender Common Library
//!
//! Shared by the web app (WASM) and the terminal client

pub mod types;
pub mod options;
pub mod error;
pub mod form;
pub mod view;
pub mod controller;
pub mod api;

pub use types::{RecommendationItem, ResponseEnvelope, UserInput};
pub use options::{Field, FormOption};
pub use error::{Error, Result, FALLBACK_ERROR_MESSAGE};
pub use form::FormFields;
pub use view::{
    render_results, Aspect, CardView, ImageView, MatchScore, MatchTier, RatingView,
    RenderConfig, ResultsView, StarBar, SummaryView,
};
pub use controller::{FormController, Resolution, Submission, Ticket, ViewState};
pub use api::{parse_envelope, Transport, RECOMMEND_PATH};
