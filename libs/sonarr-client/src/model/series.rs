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
pub struct Series {
    pub id: i64,
    pub title: String,
    pub title_slug: String,
    pub tvdb_id: i64,
    pub quality_profile_id: i64,
    pub language_profile_id: i64,
    pub monitored: bool,
    pub season_folder: bool,
    pub use_scene_numbering: bool,
    pub path: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub root_folder_path: String,
    pub tags: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_options: Option<AddSeriesOptions>,
}

/// Options only considered when a series is added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddSeriesOptions {
    pub search_for_missing_episodes: bool,
    pub search_for_cutoff_unmet_episodes: bool,
    pub ignore_episodes_with_files: bool,
    pub ignore_episodes_without_files: bool,
}

endpoint!(Series => "series");
