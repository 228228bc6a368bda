//! Remote collaborators: the OAuth token endpoint and the paycode event
//! REST resource.

pub mod auth;
pub mod client;

pub use auth::{Credentials, TokenResponse, login};
pub use client::HttpApi;

use crate::errors::AppResult;
use crate::models::{Paycode, PaycodeEvent};

/// Raw status and body of a write call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// CRUD operations on the `paycode_events` collection.
///
/// Write calls return `Ok` for any HTTP status; `Err` means the request did
/// not complete. Read calls return `Err` on non-success statuses too.
pub trait PaycodeEventApi {
    /// `POST {base}`
    fn create(&self, event: &PaycodeEvent) -> AppResult<ApiResponse>;

    /// `PUT {base}/{id}`
    fn update(&self, id: i64, event: &PaycodeEvent) -> AppResult<ApiResponse>;

    /// `DELETE {base}/{id}`
    fn delete(&self, id: i64) -> AppResult<ApiResponse>;

    /// `GET {base}`
    fn list(&self) -> AppResult<Vec<PaycodeEvent>>;

    /// `GET` on the paycodes reference collection
    fn list_paycodes(&self) -> AppResult<Vec<Paycode>>;
}
