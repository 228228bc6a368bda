use crate::api::PaycodeEventApi;
use crate::models::DeleteOutcome;
use log::{debug, warn};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Ids from a comma separated list; tokens that are not plain digits are
    /// skipped.
    pub fn parse_ids(input: &str) -> Vec<i64> {
        input
            .split(',')
            .map(str::trim)
            .filter_map(|tok| {
                if tok.is_empty() || !tok.bytes().all(|b| b.is_ascii_digit()) {
                    if !tok.is_empty() {
                        debug!("ignoring non-numeric id '{tok}'");
                    }
                    return None;
                }
                tok.parse::<i64>().ok()
            })
            .collect()
    }

    /// Delete every id, in order. Failures are reported, never fatal.
    pub fn apply(ids: &[i64], api: &dyn PaycodeEventApi) -> Vec<DeleteOutcome> {
        ids.iter()
            .map(|&id| match api.delete(id) {
                Ok(resp) => {
                    let success = resp.status == 200 || resp.status == 204;
                    if !success {
                        warn!("delete #{id} failed with status {}", resp.status);
                    }
                    DeleteOutcome {
                        id,
                        http_status: Some(resp.status),
                        success,
                        message: (!success && !resp.body.trim().is_empty())
                            .then(|| resp.body.trim().to_string()),
                    }
                }
                Err(e) => {
                    warn!("delete #{id} failed: {e}");
                    DeleteOutcome {
                        id,
                        http_status: None,
                        success: false,
                        message: Some(e.to_string()),
                    }
                }
            })
            .collect()
    }
}
