//! UI components

pub mod header;
pub mod recommendation_form;
pub mod loading_indicator;
pub mod error_message;
pub mod results_section;
pub mod iem_card;
