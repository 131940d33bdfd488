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

use sonarr_client::model;

use crate::entity::Searchable;

download_client! {
    /// Download client of any implementation
    DownloadClient(DownloadClientState) {
        name: "download_client",
        description: "<!-- subcategory:Download Clients -->Generic Download Client resource. \
            When possible use a specific resource instead.\n\
            For more information refer to [Download Client](https://wiki.servarr.com/sonarr/settings#download-clients) documentation.",
        identity: None,
        fields: {
            host: string("host"), "Host.";
            port: int("port"), "Port.";
            use_ssl: bool("useSsl"), "Use SSL flag.";
            url_base: string("urlBase"), "Base URL.";
            api_key: secret("apiKey"), "API key.";
            username: string("username"), "Username.";
            password: secret("password"), "Password.";
            tv_category: string("tvCategory"), "TV category.";
            tv_imported_category: string("tvImportedCategory"), "TV imported category.";
            tv_directory: string("tvDirectory"), "TV directory.";
            recent_tv_priority: int("recentTvPriority"), "Recent TV priority.";
            older_tv_priority: int("olderTvPriority"), "Older TV priority.";
            initial_state: int("initialState"), "Initial state.";
            add_paused: bool("addPaused"), "Add paused flag.";
            sequential_order: bool("sequentialOrder"), "Sequential order flag.";
            first_and_last: bool("firstAndLast"), "First and last flag.";
        }
    }
}

impl Searchable for DownloadClient {
    const PLURAL: &'static str = "download_clients";
    const LOOKUP: &'static str = "name";

    fn matches(state: &Self::State<'_>, model: &model::DownloadClient) -> bool {
        state.name.as_deref_option() == Some(model.name.as_str())
    }
}
