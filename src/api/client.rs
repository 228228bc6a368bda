use super::{ApiResponse, PaycodeEventApi};
use crate::errors::{AppError, AppResult};
use crate::models::{Paycode, PaycodeEvent};
use log::debug;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;

/// Blocking HTTP implementation of [`PaycodeEventApi`].
pub struct HttpApi {
    http: Client,
    base_url: String,
    paycodes_url: String,
    token: String,
}

impl HttpApi {
    pub fn new(
        http: Client,
        base_url: impl Into<String>,
        paycodes_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            paycodes_url: paycodes_url.into(),
            token: token.into(),
        }
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
        req.header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/json")
    }

    fn send(&self, method: &str, url: &str, req: RequestBuilder) -> AppResult<ApiResponse> {
        debug!("{method} {url}");
        let response = self.authorized(req).send()?;
        let status = response.status().as_u16();
        let body = response.text().unwrap_or_default();
        debug!("{method} {url} -> {status}");
        Ok(ApiResponse { status, body })
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        debug!("GET {url}");
        let response: Response = self.authorized(self.http.get(url)).send()?;
        let status = response.status();
        debug!("GET {url} -> {status}");

        if !status.is_success() {
            return Err(AppError::Api {
                status: status.as_u16(),
                message: response.text().unwrap_or_default(),
            });
        }

        Ok(response.json::<T>()?)
    }
}

impl PaycodeEventApi for HttpApi {
    fn create(&self, event: &PaycodeEvent) -> AppResult<ApiResponse> {
        let url = &self.base_url;
        self.send("POST", url, self.http.post(url).json(event))
    }

    fn update(&self, id: i64, event: &PaycodeEvent) -> AppResult<ApiResponse> {
        let url = self.item_url(id);
        self.send("PUT", &url, self.http.put(&url).json(event))
    }

    fn delete(&self, id: i64) -> AppResult<ApiResponse> {
        let url = self.item_url(id);
        self.send("DELETE", &url, self.http.delete(&url))
    }

    fn list(&self) -> AppResult<Vec<PaycodeEvent>> {
        self.get_json(&self.base_url)
    }

    fn list_paycodes(&self) -> AppResult<Vec<Paycode>> {
        self.get_json(&self.paycodes_url)
    }
}
