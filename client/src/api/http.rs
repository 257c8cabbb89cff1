use reqwest::blocking::{Client, Response};
use serde_json::json;
use taskdeck_core::Task;
use uuid::Uuid;

use super::{ApiError, TaskApi};

/// Task API over HTTP. The base URL is injected at construction so the
/// client can be pointed at any endpoint; there is no ambient configuration.
pub struct HttpTaskApi {
    base_url: String,
    client: Client,
}

impl HttpTaskApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn network_err(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Server {
            status: status.as_u16(),
        })
    }
}

impl TaskApi for HttpTaskApi {
    fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let response = self
            .client
            .get(self.url("/api/tasks"))
            .send()
            .map_err(network_err)?;
        check_status(response)?
            .json()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn create_task(&self, title: &str) -> Result<Task, ApiError> {
        let response = self
            .client
            .post(self.url("/api/tasks"))
            .json(&json!({ "title": title }))
            .send()
            .map_err(network_err)?;
        check_status(response)?
            .json()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn delete_task(&self, id: &Uuid) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/tasks/{id}")))
            .send()
            .map_err(network_err)?;
        check_status(response).map(|_| ())
    }

    fn delete_all_tasks(&self) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url("/api/tasks"))
            .send()
            .map_err(network_err)?;
        check_status(response).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let api = HttpTaskApi::new("http://localhost:8000/");
        assert_eq!(api.url("/api/tasks"), "http://localhost:8000/api/tasks");

        let api = HttpTaskApi::new("http://localhost:8000");
        assert_eq!(api.url("/api/tasks"), "http://localhost:8000/api/tasks");
    }
}
