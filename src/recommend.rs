//! One submission from the terminal: validate, request, resolve

use iem_reco_common::{FormController, FormFields, Resolution, Transport};
use crate::error::Result;
use crate::render::{self, Report};
use tracing::{info, warn};

/// Run `fields` through `controller`, with a spinner while loading when `show_progress`.
///
/// Returns `None` when validation failed and nothing was sent.
pub async fn submit<T: Transport>(
    controller: &mut FormController,
    fields: &FormFields,
    transport: &T,
    show_progress: bool,
) -> Option<Resolution> {
    let Some(submission) = controller.submit(fields) else {
        warn!("form incomplete, request not sent");
        return None;
    };

    info!(ticket = submission.ticket.id(), "requesting recommendations");
    let spinner = show_progress.then(|| render::spinner("Finding the best IEMs for you..."));
    let outcome = transport.recommend(&submission.input).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if let Err(e) = &outcome {
        warn!(error = %e, "request failed");
    }

    let resolution = controller.resolve(submission.ticket, outcome);
    if resolution == Resolution::Stale {
        info!(ticket = submission.ticket.id(), "discarded stale response");
    }
    Some(resolution)
}

/// `--json`: send once and report the raw envelope.
///
/// Validation and transport failures report the same message the controller
/// would show; nothing is sent for an incomplete form.
pub async fn fetch_json<T: Transport>(fields: &FormFields, transport: &T) -> Result<Report> {
    let input = match fields.validate() {
        Ok(input) => input,
        Err(e) => {
            warn!("form incomplete, request not sent");
            return Ok(Report::failure(&e));
        }
    };

    info!("requesting recommendations (json)");
    match transport.recommend(&input).await {
        Ok(envelope) => Report::from_envelope(&envelope),
        Err(e) => {
            warn!(error = %e, "request failed");
            Ok(Report::failure(&e))
        }
    }
}
