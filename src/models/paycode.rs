use serde::{Deserialize, Serialize};

/// Payroll code as returned by the `paycodes` reference endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paycode {
    pub id: i64,
    #[serde(default)]
    pub code: String,
}
