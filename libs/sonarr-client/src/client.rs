// This file is part of the terraform-provider-sonarr project
//
// Copyright (C) ANEO, 2024-2024. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Debug;

use reqwest::{Method, Url};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::model::{Endpoint, SystemStatus};
use crate::{Error, Result};

/// Every endpoint is relative to this prefix
const API_PREFIX: &str = "api/v3";
/// Header carrying the API key
const API_KEY_HEADER: &str = "X-Api-Key";

/// Sonarr API client
///
/// Cloning a client is cheap and the clones share the same connection pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"***")
            .finish()
    }
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    ///
    /// * `url` - Full server URL with protocol and port, and an optional URL base (eg: `http://localhost:8989/sonarr`)
    /// * `api_key` - API key sent with every request
    pub fn new(url: &str, api_key: impl Into<String>) -> Result<Self> {
        let mut base_url = Url::parse(url).map_err(|source| Error::Url {
            url: url.to_owned(),
            source,
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::Scheme(base_url.scheme().to_owned()));
        }
        // `Url::join` drops the last segment unless the path is a directory
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            api_key: api_key.into(),
        })
    }

    /// Base URL of the server
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// List all the entities of an endpoint
    pub async fn list<T: Endpoint>(&self) -> Result<Vec<T>> {
        self.send_json(Method::GET, T::PATH.to_owned(), None::<&()>)
            .await
    }

    /// Get a single entity by ID
    pub async fn get<T: Endpoint>(&self, id: i64) -> Result<T> {
        self.send_json(Method::GET, format!("{}/{}", T::PATH, id), None::<&()>)
            .await
    }

    /// Create a new entity, and return it as stored by the server
    pub async fn create<T: Endpoint>(&self, item: &T) -> Result<T> {
        self.send_json(Method::POST, T::PATH.to_owned(), Some(item))
            .await
    }

    /// Replace an existing entity, and return it as stored by the server
    pub async fn update<T: Endpoint>(&self, item: &T) -> Result<T> {
        self.send_json(Method::PUT, format!("{}/{}", T::PATH, item.id()), Some(item))
            .await
    }

    /// Delete an entity by ID
    pub async fn delete<T: Endpoint>(&self, id: i64) -> Result<()> {
        self.send(Method::DELETE, &format!("{}/{}", T::PATH, id), None::<&()>)
            .await
            .map(drop)
    }

    /// Get a settings entity
    ///
    /// Settings endpoints hold a single entity that is read without ID,
    /// and updated with [`Client::update`].
    pub async fn get_settings<T: Endpoint>(&self) -> Result<T> {
        self.send_json(Method::GET, T::PATH.to_owned(), None::<&()>)
            .await
    }

    /// Get the template of a new entity
    ///
    /// Profiles must list every quality or language known by the server,
    /// the template is the way to discover them.
    pub async fn schema<T: Endpoint>(&self) -> Result<T> {
        self.send_json(Method::GET, format!("{}/schema", T::PATH), None::<&()>)
            .await
    }

    /// Get the status of the server
    pub async fn system_status(&self) -> Result<SystemStatus> {
        self.send_json(Method::GET, "system/status".to_owned(), None::<&()>)
            .await
    }

    async fn send_json<T, B>(&self, method: Method, path: String, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let text = self.send(method, &path, body).await?;
        serde_json::from_str(&text).map_err(|source| Error::Decode { path, source })
    }

    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        let url = self
            .base_url
            .join(&format!("{API_PREFIX}/{path}"))
            .map_err(|source| Error::Url {
                url: path.to_owned(),
                source,
            })?;

        debug!(%method, %url, "sending request");
        let mut request = self
            .http
            .request(method.clone(), url)
            .header(API_KEY_HEADER, &self.api_key);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(%method, path, %status, "received response");

        if status.is_success() {
            Ok(text)
        } else {
            Err(Error::Status {
                method,
                path: path.to_owned(),
                status,
                message: error_message(&text, status.canonical_reason()),
            })
        }
    }
}

/// Extract a human readable message from an error body
///
/// The server answers either with `{"message": ...}`, or with a list of validation failures
/// `[{"propertyName": ..., "errorMessage": ...}]`.
fn error_message(body: &str, reason: Option<&str>) -> String {
    let body = body.trim();
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let message = match &parsed {
        Some(serde_json::Value::Object(object)) => object
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(ToOwned::to_owned),
        Some(serde_json::Value::Array(failures)) => {
            let messages = failures
                .iter()
                .filter_map(|failure| failure.get("errorMessage")?.as_str())
                .collect::<Vec<_>>();
            (!messages.is_empty()).then(|| messages.join(", "))
        }
        _ => None,
    };

    match message {
        Some(message) => message,
        None if !body.is_empty() => body.to_owned(),
        None => reason.unwrap_or("unknown error").to_owned(),
    }
}
