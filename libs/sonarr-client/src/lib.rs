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

//! Sonarr API client
//!
//! Thin async client over the Sonarr v3 REST API.
//! Every collection endpoint is described by a model implementing [`Endpoint`],
//! and the [`Client`] exposes the same generic CRUD calls for all of them.

mod client;
mod error;

pub mod model;

pub use client::Client;
pub use error::{Error, Result};
pub use model::Endpoint;
