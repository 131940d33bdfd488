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
    /// Synology Download Station, used as a torrent client
    DownloadClientTorrentDownloadStation(DownloadClientTorrentDownloadStationState) {
        name: "download_client_torrent_download_station",
        description: "<!-- subcategory:Download Clients -->Download Client TorrentDownloadStation resource.\n\
            For more information refer to [Download Client](https://wiki.servarr.com/sonarr/settings#download-clients) \
            and [TorrentDownloadStation](https://wiki.servarr.com/sonarr/supported#torrentdownloadstation).",
        identity: Some(Identity {
            implementation: "TorrentDownloadStation",
            config_contract: "DownloadStationSettings",
            protocol: "torrent",
        }),
        fields: {
            host: string("host"), "host.";
            port: int("port"), "Port.";
            use_ssl: bool("useSsl"), "Use SSL flag.";
            username: string("username"), "Username.";
            password: secret("password"), "Password.";
            tv_category: string("tvCategory"), "TV category.";
            tv_directory: string("tvDirectory"), "TV directory.";
        }
    }
}
