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
    /// [SABnzbd](https://sabnzbd.org/) usenet client
    DownloadClientSabnzbd(DownloadClientSabnzbdState) {
        name: "download_client_sabnzbd",
        description: "<!-- subcategory:Download Clients -->Download Client SABnzbd resource.\n\
            For more information refer to [Download Client](https://wiki.servarr.com/sonarr/settings#download-clients) \
            and [SABnzbd](https://wiki.servarr.com/sonarr/supported#sabnzbd).",
        identity: Some(Identity {
            implementation: "Sabnzbd",
            config_contract: "SabnzbdSettings",
            protocol: "usenet",
        }),
        fields: {
            host: string("host"), "Host.";
            port: int("port"), "Port.";
            use_ssl: bool("useSsl"), "Use SSL flag.";
            url_base: string("urlBase"), "Base URL.";
            api_key: secret("apiKey"), "API key.";
            username: string("username"), "Username.";
            password: secret("password"), "Password.";
            tv_category: string("tvCategory"), "TV category.";
            recent_tv_priority: int("recentTvPriority"), "Recent TV priority. `-100` Default, `-2` Paused, `-1` Low, `0` Normal, `1` High, `2` Force.";
            older_tv_priority: int("olderTvPriority"), "Older TV priority. `-100` Default, `-2` Paused, `-1` Low, `0` Normal, `1` High, `2` Force.";
        }
    }
}
