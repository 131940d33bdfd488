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

use super::Identity;

download_client! {
    /// [qBittorrent](https://www.qbittorrent.org/) torrent client
    DownloadClientQbittorrent(DownloadClientQbittorrentState) {
        name: "download_client_qbittorrent",
        description: "<!-- subcategory:Download Clients -->Download Client qBittorrent resource.\n\
            For more information refer to [Download Client](https://wiki.servarr.com/sonarr/settings#download-clients) \
            and [qBittorrent](https://wiki.servarr.com/sonarr/supported#qbittorrent).",
        identity: Some(Identity {
            implementation: "QBittorrent",
            config_contract: "QBittorrentSettings",
            protocol: "torrent",
        }),
        fields: {
            host: string("host"), "Host.";
            port: int("port"), "Port.";
            use_ssl: bool("useSsl"), "Use SSL flag.";
            url_base: string("urlBase"), "Base URL.";
            username: string("username"), "Username.";
            password: secret("password"), "Password.";
            tv_category: string("tvCategory"), "TV category.";
            tv_imported_category: string("tvImportedCategory"), "TV imported category.";
            recent_tv_priority: int("recentTvPriority"), "Recent TV priority. `0` Last, `1` First.";
            older_tv_priority: int("olderTvPriority"), "Older TV priority. `0` Last, `1` First.";
            initial_state: int("initialState"), "Initial state. `0` Start, `1` ForceStart, `2` Pause.";
            sequential_order: bool("sequentialOrder"), "Sequential order flag.";
            first_and_last: bool("firstAndLast"), "First and last flag.";
        }
    }
}
