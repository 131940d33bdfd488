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

use std::collections::HashMap;
use std::env;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sonarr_client::Client;
use tf_provider::schema::{AttributeType, Block, Description, Schema};
use tf_provider::value::{ValueEmpty, ValueString};
use tf_provider::{
    map, AttributePath, Diagnostics, DynamicDataSource, DynamicResource, Provider,
};
use tracing::{debug, warn};

use crate::attributes::{optional, sensitive};
use crate::client::ClientHandle;
use crate::data_source::{EntitiesDataSource, EntityDataSource, SettingsDataSource};
use crate::download_client::{
    DownloadClient, DownloadClientQbittorrent, DownloadClientSabnzbd,
    DownloadClientTorrentDownloadStation, DownloadClientTransmission,
};
use crate::entity::{Entity, ManagedEntity};
use crate::resource::ApiResource;
use crate::settings::{IndexerConfig, MediaManagement, Naming};
use crate::system_status::SystemStatusDataSource;
use crate::{
    DelayProfile, Indexer, LanguageProfile, QualityProfile, ReleaseProfile, RootFolder, Series,
    Tag,
};

/// Environment variable used when `url` is not configured
pub const URL_ENV: &str = "SONARR_URL";
/// Environment variable used when `api_key` is not configured
pub const API_KEY_ENV: &str = "SONARR_API_KEY";

const UNABLE_TO_CREATE_CLIENT: &str = "Unable to create client";

/// Provider for [Sonarr](https://sonarr.tv/)
///
/// All resources and data sources share the client built when the provider is configured.
#[derive(Debug, Clone, Default)]
pub struct SonarrProvider {
    client: ClientHandle,
}

impl SonarrProvider {
    /// Handle of the client shared with resources and data sources
    pub fn client(&self) -> &ClientHandle {
        &self.client
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig<'a> {
    #[serde(borrow = "'a")]
    pub url: ValueString<'a>,
    pub api_key: ValueString<'a>,
}

/// Outcome of resolving a connection setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Setting {
    /// Value is not known yet, the client cannot be created
    Unknown,
    /// Value is neither configured nor set in the environment
    Missing,
    Value(String),
}

/// Resolve a setting from the configuration, falling back to the environment when it is null
pub(crate) fn resolve_setting(
    value: &ValueString<'_>,
    fallback: impl FnOnce() -> Option<String>,
) -> Setting {
    let value = match value {
        ValueString::Value(value) => value.to_string(),
        ValueString::Null => fallback().unwrap_or_default(),
        ValueString::Unknown => return Setting::Unknown,
    };
    if value.is_empty() {
        Setting::Missing
    } else {
        Setting::Value(value)
    }
}

impl SonarrProvider {
    /// Resolve a setting, and report why it cannot be used
    ///
    /// Returns `Err(())` when an error is reported, and `Ok(None)` when the client cannot be
    /// created yet.
    fn setting(
        diags: &mut Diagnostics,
        value: &ValueString<'_>,
        attribute: &'static str,
        env: &'static str,
        missing: &'static str,
    ) -> Result<Option<String>, ()> {
        match resolve_setting(value, || env::var(env).ok()) {
            Setting::Value(value) => Ok(Some(value)),
            Setting::Unknown => {
                warn!("cannot create client with an unknown {}", attribute);
                diags.root_warning(
                    UNABLE_TO_CREATE_CLIENT,
                    format!("Cannot use unknown value as {attribute}"),
                );
                Ok(None)
            }
            Setting::Missing => {
                diags.error(
                    missing,
                    format!(
                        "{attribute} cannot be an empty string. \
                        Set it in the provider configuration or with the {env} environment variable."
                    ),
                    AttributePath::new(attribute),
                );
                Err(())
            }
        }
    }
}

#[async_trait]
impl Provider for SonarrProvider {
    type Config<'a> = ProviderConfig<'a>;
    type MetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes: map! {
                    "url" => optional(
                        AttributeType::String,
                        "Full Sonarr URL with protocol and port (e.g. `https://test.sonarr.tv:8989`). \
                        You should **NOT** supply any path (`/api`), the provider will use the appropriate paths. \
                        Can be specified via the `SONARR_URL` environment variable.",
                    ),
                    "api_key" => sensitive(optional(
                        AttributeType::String,
                        "API key for Sonarr authentication. \
                        Can be specified via the `SONARR_API_KEY` environment variable.",
                    )),
                },
                description: Description::markdown(
                    "The Sonarr provider is used to interact with any [Sonarr](https://sonarr.tv/) installation.\n\
                    You must configure the provider with the proper [credentials](#api_key) before you can use it.\n\
                    Use the left navigation to read about the available resources.\n\n\
                    For more information about Sonarr and its resources, as well as configuration guides and hints, \
                    visit the [Servarr wiki](https://wiki.servarr.com/en/sonarr).",
                ),
                ..Default::default()
            },
        })
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::Config<'a>) -> Option<()> {
        // empty values are reported by `configure`, after the environment fallback
        if let Some(url) = config.url.as_deref_option().filter(|url| !url.is_empty()) {
            if let Err(err) = Client::new(url, "") {
                diags.error("Invalid URL", err.to_string(), AttributePath::new("url"));
                return None;
            }
        }
        Some(())
    }

    async fn configure<'a>(
        &self,
        diags: &mut Diagnostics,
        terraform_version: String,
        config: Self::Config<'a>,
    ) -> Option<()> {
        let url = Self::setting(diags, &config.url, "url", URL_ENV, "Unable to find URL");
        let api_key = Self::setting(
            diags,
            &config.api_key,
            "api_key",
            API_KEY_ENV,
            "Unable to find API key",
        );

        let (Some(url), Some(api_key)) = (url.ok()?, api_key.ok()?) else {
            return Some(());
        };

        match Client::new(&url, api_key) {
            Ok(client) => {
                debug!("configured client for {} (terraform {})", url, terraform_version);
                self.client.set(client);
                Some(())
            }
            Err(err) => {
                diags.root_error(UNABLE_TO_CREATE_CLIENT, err.to_string());
                None
            }
        }
    }

    fn get_resources(
        &self,
        _diags: &mut Diagnostics,
    ) -> Option<HashMap<String, Box<dyn DynamicResource>>> {
        let client = &self.client;

        Some(map! {
            Tag::NAME => resource::<Tag>(client),
            DelayProfile::NAME => resource::<DelayProfile>(client),
            ReleaseProfile::NAME => resource::<ReleaseProfile>(client),
            RootFolder::NAME => resource::<RootFolder>(client),
            Series::NAME => resource::<Series>(client),
            QualityProfile::NAME => resource::<QualityProfile>(client),
            LanguageProfile::NAME => resource::<LanguageProfile>(client),
            Indexer::NAME => resource::<Indexer>(client),
            IndexerConfig::NAME => resource::<IndexerConfig>(client),
            MediaManagement::NAME => resource::<MediaManagement>(client),
            Naming::NAME => resource::<Naming>(client),
            DownloadClient::NAME => resource::<DownloadClient>(client),
            DownloadClientTransmission::NAME => resource::<DownloadClientTransmission>(client),
            DownloadClientQbittorrent::NAME => resource::<DownloadClientQbittorrent>(client),
            DownloadClientTorrentDownloadStation::NAME => resource::<DownloadClientTorrentDownloadStation>(client),
            DownloadClientSabnzbd::NAME => resource::<DownloadClientSabnzbd>(client),
        })
    }

    fn get_data_sources(
        &self,
        _diags: &mut Diagnostics,
    ) -> Option<HashMap<String, Box<dyn DynamicDataSource>>> {
        let client = self.client.clone();

        Some(map! {
            Tag::NAME => EntityDataSource::<Tag>::new(client.clone()),
            "tags" => EntitiesDataSource::<Tag>::new(client.clone()),
            DelayProfile::NAME => EntityDataSource::<DelayProfile>::new(client.clone()),
            "delay_profiles" => EntitiesDataSource::<DelayProfile>::new(client.clone()),
            ReleaseProfile::NAME => EntityDataSource::<ReleaseProfile>::new(client.clone()),
            "release_profiles" => EntitiesDataSource::<ReleaseProfile>::new(client.clone()),
            RootFolder::NAME => EntityDataSource::<RootFolder>::new(client.clone()),
            "root_folders" => EntitiesDataSource::<RootFolder>::new(client.clone()),
            Series::NAME => EntityDataSource::<Series>::new(client.clone()),
            "all_series" => EntitiesDataSource::<Series>::new(client.clone()),
            Indexer::NAME => EntityDataSource::<Indexer>::new(client.clone()),
            "indexers" => EntitiesDataSource::<Indexer>::new(client.clone()),
            DownloadClient::NAME => EntityDataSource::<DownloadClient>::new(client.clone()),
            "download_clients" => EntitiesDataSource::<DownloadClient>::new(client.clone()),
            QualityProfile::NAME => EntityDataSource::<QualityProfile>::new(client.clone()),
            "quality_profiles" => EntitiesDataSource::<QualityProfile>::new(client.clone()),
            LanguageProfile::NAME => EntityDataSource::<LanguageProfile>::new(client.clone()),
            "language_profiles" => EntitiesDataSource::<LanguageProfile>::new(client.clone()),
            IndexerConfig::NAME => SettingsDataSource::<IndexerConfig>::new(client.clone()),
            MediaManagement::NAME => SettingsDataSource::<MediaManagement>::new(client.clone()),
            Naming::NAME => SettingsDataSource::<Naming>::new(client.clone()),
            "system_status" => SystemStatusDataSource::new(client),
        })
    }
}

fn resource<E: ManagedEntity>(client: &ClientHandle) -> ApiResource<E> {
    ApiResource::new(client.clone())
}
