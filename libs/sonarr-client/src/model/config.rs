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

//! Settings models
//!
//! Each of these endpoints holds exactly one entity.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexerConfig {
    pub id: i64,
    pub minimum_age: i64,
    pub retention: i64,
    pub maximum_size: i64,
    pub rss_sync_interval: i64,
}

endpoint!(IndexerConfig => "config/indexer");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaManagement {
    pub id: i64,
    pub auto_unmonitor_previously_downloaded_episodes: bool,
    pub recycle_bin: String,
    pub recycle_bin_cleanup_days: i64,
    pub download_propers_and_repacks: String,
    pub create_empty_series_folders: bool,
    pub delete_empty_folders: bool,
    pub file_date: String,
    pub rescan_after_refresh: String,
    pub set_permissions_linux: bool,
    pub chmod_folder: String,
    pub chown_group: String,
    pub episode_title_required: String,
    pub skip_free_space_check_when_importing: bool,
    pub minimum_free_space_when_importing: i64,
    pub copy_using_hardlinks: bool,
    pub import_extra_files: bool,
    pub extra_file_extensions: String,
    pub enable_media_info: bool,
}

endpoint!(MediaManagement => "config/mediamanagement");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Naming {
    pub id: i64,
    pub rename_episodes: bool,
    pub replace_illegal_characters: bool,
    pub multi_episode_style: i64,
    pub standard_episode_format: String,
    pub daily_episode_format: String,
    pub anime_episode_format: String,
    pub series_folder_format: String,
    pub season_folder_format: String,
    pub specials_folder_format: String,
}

endpoint!(Naming => "config/naming");
