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

//! Terraform provider for Sonarr
//!
//! Every Sonarr entity is described once, by implementing [`Entity`] (and [`ManagedEntity`] when it
//! can be managed by Terraform). The generic [`ApiResource`], [`EntityDataSource`], [`EntitiesDataSource`]
//! and [`SettingsDataSource`] turn those descriptions into Terraform resources and data sources,
//! registered by [`SonarrProvider`].

mod attributes;
mod client;
mod data_source;
mod delay_profile;
mod entity;
mod fields;
mod indexer;
mod language_profile;
mod provider;
mod quality_profile;
mod release_profile;
mod resource;
mod root_folder;
mod series;
mod system_status;
mod tag;
mod utils;

pub mod download_client;
pub mod settings;

pub use client::ClientHandle;
pub use data_source::{EntitiesDataSource, EntityDataSource, ListState, SettingsDataSource};
pub use delay_profile::{DelayProfile, DelayProfileState};
pub use entity::{Entity, EntityKind, ManagedEntity, Searchable};
pub use indexer::{Indexer, IndexerState};
pub use language_profile::{LanguageProfile, LanguageProfileState};
pub use provider::{ProviderConfig, SonarrProvider, API_KEY_ENV, URL_ENV};
pub use quality_profile::{QualityGroupState, QualityProfile, QualityProfileState, QualityState};
pub use release_profile::{ReleaseProfile, ReleaseProfileState};
pub use resource::ApiResource;
pub use root_folder::{RootFolder, RootFolderState};
pub use series::{Series, SeriesState};
pub use system_status::{SystemStatusDataSource, SystemStatusState};
pub use tag::{Tag, TagState};
