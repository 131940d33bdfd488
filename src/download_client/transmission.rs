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
    /// [Transmission](https://transmissionbt.com/) torrent client
    DownloadClientTransmission(DownloadClientTransmissionState) {
        name: "download_client_transmission",
        description: "<!-- subcategory:Download Clients -->Download Client Transmission resource.\n\
            For more information refer to [Download Client](https://wiki.servarr.com/sonarr/settings#download-clients) \
            and [Transmission](https://wiki.servarr.com/sonarr/supported#transmission).",
        identity: Some(Identity {
            implementation: "Transmission",
            config_contract: "TransmissionSettings",
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
            tv_directory: string("tvDirectory"), "TV directory.";
            recent_tv_priority: int("recentTvPriority"), "Recent TV priority. `0` Last, `1` First.";
            older_tv_priority: int("olderTvPriority"), "Older TV priority. `0` Last, `1` First.";
            add_paused: bool("addPaused"), "Add paused flag.";
        }
    }
}
