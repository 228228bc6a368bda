use crate::api::{ApiResponse, PaycodeEventApi};
use crate::errors::AppResult;
use crate::models::{Action, PaycodeEvent, SubmissionOutcome};
use log::warn;

pub struct SubmitLogic;

impl SubmitLogic {
    /// Create or update every event, in order, one call each.
    ///
    /// Events with an id are updated, the rest are created. A failed call is
    /// recorded and the batch carries on; nothing is retried or rolled back.
    pub fn submit(events: &[PaycodeEvent], api: &dyn PaycodeEventApi) -> Vec<SubmissionOutcome> {
        events.iter().map(|ev| Self::submit_one(ev, api)).collect()
    }

    fn submit_one(event: &PaycodeEvent, api: &dyn PaycodeEventApi) -> SubmissionOutcome {
        let (action, result) = match event.update_id() {
            Some(id) => (Action::Update, api.update(id, event)),
            None => (Action::Create, api.create(&event.without_id())),
        };

        let outcome = classify(&event.name, action, result, &[200, 201]);
        if !outcome.success {
            warn!(
                "{} '{}' failed: {}",
                action,
                event.name,
                outcome.message.as_deref().unwrap_or("no response body")
            );
        }
        outcome
    }
}

fn classify(
    name: &str,
    action: Action,
    result: AppResult<ApiResponse>,
    ok_statuses: &[u16],
) -> SubmissionOutcome {
    match result {
        Ok(resp) => {
            let success = ok_statuses.contains(&resp.status);
            SubmissionOutcome {
                event_name: name.to_string(),
                action,
                http_status: Some(resp.status),
                success,
                message: (!success && !resp.body.trim().is_empty()).then(|| resp.body.trim().to_string()),
            }
        }
        Err(e) => SubmissionOutcome {
            event_name: name.to_string(),
            action,
            http_status: None,
            success: false,
            message: Some(e.to_string()),
        },
    }
}
