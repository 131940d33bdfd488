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

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DelayProfile {
    pub id: i64,
    pub enable_usenet: bool,
    pub enable_torrent: bool,
    pub bypass_if_highest_quality: bool,
    pub usenet_delay: i64,
    pub torrent_delay: i64,
    pub order: i64,
    pub preferred_protocol: String,
    pub tags: Vec<i64>,
}

endpoint!(DelayProfile => "delayprofile");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReleaseProfile {
    pub id: i64,
    pub name: String,
    pub enabled: bool,
    pub indexer_id: i64,
    pub required: Vec<String>,
    pub ignored: Vec<String>,
    pub tags: Vec<i64>,
}

endpoint!(ReleaseProfile => "releaseprofile");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QualityProfile {
    pub id: i64,
    pub name: String,
    pub upgrade_allowed: bool,
    /// ID of a quality or of a quality group
    pub cutoff: i64,
    /// Qualities, ordered from the least to the most wanted
    pub items: Vec<QualityProfileItem>,
}

/// Entry of a quality profile: either a single quality, or a named group of qualities
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QualityProfileItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<Quality>,
    pub items: Vec<QualityProfileItem>,
    pub allowed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Quality {
    pub id: i64,
    pub name: String,
    pub source: String,
    pub resolution: i64,
}

endpoint!(QualityProfile => "qualityprofile");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageProfile {
    pub id: i64,
    pub name: String,
    pub upgrade_allowed: bool,
    pub cutoff: Language,
    /// Languages, ordered from the least to the most wanted
    pub languages: Vec<LanguageItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageItem {
    pub language: Language,
    pub allowed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    pub id: i64,
    pub name: String,
}

endpoint!(LanguageProfile => "languageprofile");
