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

use super::Field;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DownloadClient {
    pub id: i64,
    pub name: String,
    pub enable: bool,
    pub priority: i64,
    pub remove_completed_downloads: bool,
    pub remove_failed_downloads: bool,
    pub implementation: String,
    pub config_contract: String,
    pub protocol: String,
    pub tags: Vec<i64>,
    pub fields: Vec<Field>,
}

endpoint!(DownloadClient => "downloadclient");
