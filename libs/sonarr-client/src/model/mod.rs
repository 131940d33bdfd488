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

//! Wire models of the Sonarr v3 API
//!
//! Models are serialized in camelCase, default every missing field,
//! and silently ignore fields they do not know about.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Implement [`Endpoint`] for a model with an `id` field
macro_rules! endpoint {
    ($model:ty => $path:literal) => {
        impl $crate::model::Endpoint for $model {
            const PATH: &'static str = $path;

            fn id(&self) -> i64 {
                self.id
            }
        }
    };
}

mod config;
mod download_client;
mod indexer;
mod profile;
mod root_folder;
mod series;
mod system;
mod tag;

pub use config::{IndexerConfig, MediaManagement, Naming};
pub use download_client::DownloadClient;
pub use indexer::Indexer;
pub use profile::{
    DelayProfile, Language, LanguageItem, LanguageProfile, Quality, QualityProfile,
    QualityProfileItem, ReleaseProfile,
};
pub use root_folder::RootFolder;
pub use series::{AddSeriesOptions, Series};
pub use system::SystemStatus;
pub use tag::Tag;

/// Model served by a REST endpoint
pub trait Endpoint: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Path of the endpoint, relative to the API root
    const PATH: &'static str;

    /// Server assigned ID of the entity
    fn id(&self) -> i64;
}

/// Entry of the generic settings list of polymorphic entities
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Field {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl Field {
    /// Create a field
    pub fn new(name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}
