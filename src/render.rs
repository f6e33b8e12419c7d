//! Terminal output of the view-model

use crate::error::Result;
use iem_reco_common::{CardView, ResponseEnvelope, ResultsView, ViewState};
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::process::ExitCode;
use std::time::Duration;

const FULL_STAR: char = '★';
const EMPTY_STAR: char = '☆';

/// Loading indicator
pub fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.magenta} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Text for a settled state. `None` for idle and loading.
pub fn render_state(state: &ViewState) -> Option<String> {
    match state {
        ViewState::Idle | ViewState::Loading => None,
        ViewState::Error(message) => Some(format!("✖ {}", message)),
        ViewState::Results(view) => Some(ResultsText(view).to_string()),
    }
}

/// Final output of a `recommend` run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub text: String,
    pub failed: bool,
}

impl Report {
    /// `None` while nothing has settled
    pub fn from_state(state: &ViewState) -> Option<Self> {
        render_state(state).map(|text| Self {
            text,
            failed: state.error_message().is_some(),
        })
    }

    /// Pretty JSON of the envelope; `success: false` is a failure
    pub fn from_envelope(envelope: &ResponseEnvelope) -> Result<Self> {
        Ok(Self {
            text: serde_json::to_string_pretty(envelope)?,
            failed: !envelope.success,
        })
    }

    pub fn failure(error: &iem_reco_common::Error) -> Self {
        Self { text: format!("✖ {}", error), failed: true }
    }

    fn exit_code(&self) -> ExitCode {
        if self.failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }

    /// Failures go to stderr
    pub fn emit(&self) -> ExitCode {
        if self.failed {
            eprintln!("{}", self.text.trim_end());
        } else {
            println!("{}", self.text.trim_end());
        }
        self.exit_code()
    }
}

pub struct ResultsText<'a>(pub &'a ResultsView);

impl fmt::Display for ResultsText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;

        writeln!(f, "Your preferences:")?;
        for entry in &view.summary.entries {
            writeln!(f, "  {}: {}", entry.label, entry.value)?;
        }

        if view.cards.is_empty() {
            writeln!(f, "\nNo recommendations returned.")?;
        }
        for card in &view.cards {
            writeln!(f)?;
            write!(f, "{}", CardText(card))?;
        }
        Ok(())
    }
}

pub struct CardText<'a>(pub &'a CardView);

impl fmt::Display for CardText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = self.0;

        writeln!(f, "#{} {} ({})", card.rank, card.name, card.brand)?;
        writeln!(f, "   Price:      {}", card.price)?;
        writeln!(f, "   Tuning:     {}", card.tuning)?;
        writeln!(f, "   Genre:      {}", card.genre)?;
        for rating in &card.ratings {
            writeln!(
                f,
                "   {:<11} {} {}",
                rating.aspect.label(),
                rating.stars.render(FULL_STAR, EMPTY_STAR),
                rating.score_text()
            )?;
        }
        writeln!(f, "   Driver:     {}", card.driver_type)?;
        writeln!(f, "   Soundstage: {}", card.soundstage)?;
        writeln!(
            f,
            "   Match:      {} ({})",
            card.match_score.display(),
            card.match_score.tier().as_str()
        )?;
        writeln!(f, "   Image:      {}", card.image.src)?;
        writeln!(f, "   Graph:      {}", card.tuning_image.src)
    }
}
