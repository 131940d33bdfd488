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

use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Result type of the API client
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by the API client
#[derive(Debug, Error)]
pub enum Error {
    /// The server URL could not be parsed
    #[error("invalid url `{url}`: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The server URL is not an http(s) URL
    #[error("unsupported url scheme `{0}`, expected http or https")]
    Scheme(String),

    /// The request could not be sent, or the response could not be received
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("{method} {path} returned {status}: {message}")]
    Status {
        method: Method,
        path: String,
        status: StatusCode,
        message: String,
    },

    /// A name does not match anything known by the server
    #[error("unknown {kind} `{name}`")]
    Unknown { kind: &'static str, name: String },

    /// The response body does not match the expected model
    #[error("unable to decode response of {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// HTTP status returned by the server, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Check if the server reported the entity as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}
