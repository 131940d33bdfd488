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

use serde_json::json;
use sonarr_client::Client;
use terraform_provider_sonarr::download_client::{
    DownloadClientTransmission, DownloadClientTransmissionState,
};
use terraform_provider_sonarr::settings::{Naming, NamingState};
use terraform_provider_sonarr::{
    ApiResource, ClientHandle, LanguageProfile, LanguageProfileState, RootFolder, RootFolderState,
    Series, SeriesState, Tag, TagState,
};
use tf_provider::value::{Value, ValueString};
use tf_provider::{AttributePath, Diagnostics, Resource};
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn resource<E>(server: &MockServer) -> ApiResource<E> {
    let client = Client::new(&server.uri(), "secret").unwrap();
    ApiResource::new(ClientHandle::new(client))
}

#[tokio::test]
async fn tag_lifecycle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/tag"))
        .and(header("X-Api-Key", "secret"))
        .and(body_json(json!({"id": 0, "label": "hd"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1, "label": "hd"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v3/tag/1"))
        .and(body_json(json!({"id": 1, "label": "uhd"})))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"id": 1, "label": "uhd"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v3/tag/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let resource = resource::<Tag>(&server);
    let mut diags = Diagnostics::default();
    let config = TagState {
        label: ValueString::from("hd"),
        ..Default::default()
    };

    let (planned, private) = resource
        .plan_create(&mut diags, config.clone(), config.clone(), Default::default())
        .await
        .unwrap();
    assert!(planned.id.is_unknown());

    let (state, _) = resource
        .create(&mut diags, planned, config, private, Default::default())
        .await
        .unwrap();
    assert_eq!(state.id, Value::Value(1));
    assert_eq!(state.label, ValueString::from("hd"));

    let proposed = TagState {
        label: ValueString::from("uhd"),
        ..state.clone()
    };
    let (planned, private, replace) = resource
        .plan_update(
            &mut diags,
            state.clone(),
            proposed.clone(),
            proposed.clone(),
            Default::default(),
            Default::default(),
        )
        .await
        .unwrap();
    assert!(replace.is_empty());

    let (state, _) = resource
        .update(&mut diags, state, planned, proposed, private, Default::default())
        .await
        .unwrap();
    assert_eq!(state.label, ValueString::from("uhd"));

    let private = resource
        .plan_destroy(&mut diags, state.clone(), Default::default(), Default::default())
        .await
        .unwrap();
    assert_eq!(
        resource
            .destroy(&mut diags, state, private, Default::default())
            .await,
        Some(())
    );
    assert!(diags.errors.is_empty());
}

#[tokio::test]
async fn deleting_missing_entity_is_a_client_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v3/tag/42"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "NotFound"})))
        .expect(1)
        .mount(&server)
        .await;

    let resource = resource::<Tag>(&server);
    let mut diags = Diagnostics::default();
    let state = TagState {
        id: Value::Value(42),
        label: ValueString::from("gone"),
    };

    assert_eq!(
        resource
            .destroy(&mut diags, state, Default::default(), Default::default())
            .await,
        None
    );
    assert_eq!(diags.errors.len(), 1);
    assert_eq!(diags.errors[0].summary, "Client Error");
    assert!(diags.errors[0]
        .detail
        .starts_with("Unable to delete tag, got error: "));
    assert!(diags.errors[0].detail.contains("404"));
}

#[tokio::test]
async fn import_then_read() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/tag/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 12, "label": "anime"})))
        .expect(1)
        .mount(&server)
        .await;

    let resource = resource::<Tag>(&server);
    let mut diags = Diagnostics::default();

    let (state, private) = resource.import(&mut diags, "12".to_owned()).await.unwrap();
    assert_eq!(state.id, Value::Value(12));
    assert!(state.label.is_null());

    let (state, _) = resource
        .read(&mut diags, state, private, Default::default())
        .await
        .unwrap();
    assert_eq!(state.label, ValueString::from("anime"));
    assert!(diags.errors.is_empty());
}

#[tokio::test]
async fn entity_deleted_outside_terraform_is_removed_from_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/tag/7"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "NotFound"})))
        .expect(1)
        .mount(&server)
        .await;

    let resource = resource::<Tag>(&server);
    let mut diags = Diagnostics::default();
    let state = TagState {
        id: Value::Value(7),
        label: ValueString::from("gone"),
    };

    assert!(resource
        .read(&mut diags, state, Default::default(), Default::default())
        .await
        .is_none());
    assert!(diags.errors.is_empty());
    assert_eq!(diags.warnings.len(), 1);
    assert_eq!(diags.warnings[0].summary, "Resource Not Found");
    assert!(diags.warnings[0]
        .detail
        .starts_with("Unable to find tag 7, removing it from the state."));
}

#[tokio::test]
async fn failed_read_is_a_client_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/tag/7"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .expect(1)
        .mount(&server)
        .await;

    let resource = resource::<Tag>(&server);
    let mut diags = Diagnostics::default();
    let state = TagState {
        id: Value::Value(7),
        label: ValueString::from("hd"),
    };

    assert!(resource
        .read(&mut diags, state, Default::default(), Default::default())
        .await
        .is_none());
    assert!(diags.warnings.is_empty());
    assert_eq!(diags.errors.len(), 1);
    assert_eq!(diags.errors[0].summary, "Client Error");
    assert!(diags.errors[0]
        .detail
        .starts_with("Unable to read tag, got error: "));
}

fn language_schema() -> serde_json::Value {
    json!({
        "id": 0,
        "name": "",
        "upgradeAllowed": false,
        "cutoff": {"id": 1, "name": "English"},
        "languages": [
            {"language": {"id": 1, "name": "English"}, "allowed": false},
            {"language": {"id": 8, "name": "Japanese"}, "allowed": false}
        ]
    })
}

#[tokio::test]
async fn language_profile_lists_every_language() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/languageprofile/schema"))
        .respond_with(ResponseTemplate::new(200).set_body_json(language_schema()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v3/languageprofile"))
        .and(body_partial_json(json!({
            "name": "Anime",
            "cutoff": {"id": 8, "name": "Japanese"},
            "languages": [
                {"language": {"id": 1, "name": "English"}, "allowed": false},
                {"language": {"id": 8, "name": "Japanese"}, "allowed": true}
            ]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 3,
            "name": "Anime",
            "upgradeAllowed": true,
            "cutoff": {"id": 8, "name": "Japanese"},
            "languages": [
                {"language": {"id": 1, "name": "English"}, "allowed": false},
                {"language": {"id": 8, "name": "Japanese"}, "allowed": true}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resource = resource::<LanguageProfile>(&server);
    let mut diags = Diagnostics::default();
    let config = LanguageProfileState {
        name: ValueString::from("Anime"),
        upgrade_allowed: Value::Value(true),
        cutoff_language: ValueString::from("Japanese"),
        languages: Value::Value([ValueString::from("Japanese")].into_iter().collect()),
        ..Default::default()
    };

    let (planned, private) = resource
        .plan_create(&mut diags, config.clone(), config.clone(), Default::default())
        .await
        .unwrap();
    let (state, _) = resource
        .create(&mut diags, planned, config.clone(), private, Default::default())
        .await
        .unwrap();
    assert_eq!(state.id, Value::Value(3));
    assert_eq!(state.languages, config.languages);
    assert!(diags.errors.is_empty());
}

#[tokio::test]
async fn unknown_language_is_not_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/languageprofile/schema"))
        .respond_with(ResponseTemplate::new(200).set_body_json(language_schema()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v3/languageprofile"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let resource = resource::<LanguageProfile>(&server);
    let mut diags = Diagnostics::default();
    let config = LanguageProfileState {
        name: ValueString::from("Sci-fi"),
        cutoff_language: ValueString::from("English"),
        languages: Value::Value([ValueString::from("Klingon")].into_iter().collect()),
        ..Default::default()
    };

    let (planned, private) = resource
        .plan_create(&mut diags, config.clone(), config.clone(), Default::default())
        .await
        .unwrap();
    assert!(resource
        .create(&mut diags, planned, config, private, Default::default())
        .await
        .is_none());
    assert_eq!(diags.errors[0].summary, "Client Error");
    assert!(diags.errors[0]
        .detail
        .starts_with("Unable to create language_profile, got error: unknown language `Klingon`"));
}

#[tokio::test]
async fn import_rejects_non_numeric_id() {
    let server = MockServer::start().await;
    let resource = resource::<Tag>(&server);
    let mut diags = Diagnostics::default();

    assert!(resource.import(&mut diags, "hd".to_owned()).await.is_none());
    assert_eq!(diags.errors.len(), 1);
    assert_eq!(diags.errors[0].summary, "Unexpected Import Identifier");
    assert!(diags.errors[0]
        .detail
        .starts_with("Expected import identifier with format: ID. Got: \"hd\""));
}

#[tokio::test]
async fn unconfigured_provider_is_reported() {
    let resource = ApiResource::<Tag>::new(ClientHandle::default());
    let mut diags = Diagnostics::default();
    let state = TagState {
        id: Value::Value(1),
        label: ValueString::from("hd"),
    };

    assert!(resource
        .read(&mut diags, state, Default::default(), Default::default())
        .await
        .is_none());
    assert_eq!(diags.errors[0].summary, "Unconfigured Client");
}

#[tokio::test]
async fn masked_password_is_preserved() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/downloadclient"))
        .and(body_partial_json(json!({
            "name": "transmission",
            "implementation": "Transmission",
            "configContract": "TransmissionSettings",
            "protocol": "torrent",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 5,
            "name": "transmission",
            "enable": true,
            "priority": 1,
            "removeCompletedDownloads": true,
            "removeFailedDownloads": true,
            "implementation": "Transmission",
            "configContract": "TransmissionSettings",
            "protocol": "torrent",
            "tags": [],
            "fields": [
                {"name": "host", "value": "transmission"},
                {"name": "port", "value": 9091},
                {"name": "useSsl", "value": false},
                {"name": "urlBase", "value": "/transmission/"},
                {"name": "username", "value": "admin"},
                {"name": "password", "value": "********"},
                {"name": "tvCategory", "value": "tv-sonarr"},
                {"name": "tvDirectory"},
                {"name": "recentTvPriority", "value": 0},
                {"name": "olderTvPriority", "value": 0},
                {"name": "addPaused", "value": false},
            ],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resource = resource::<DownloadClientTransmission>(&server);
    let mut diags = Diagnostics::default();
    let config = DownloadClientTransmissionState {
        name: ValueString::from("transmission"),
        host: ValueString::from("transmission"),
        port: Value::Value(9091),
        username: ValueString::from("admin"),
        password: ValueString::from("hunter2"),
        ..Default::default()
    };

    let (planned, private) = resource
        .plan_create(&mut diags, config.clone(), config.clone(), Default::default())
        .await
        .unwrap();
    let (state, _) = resource
        .create(&mut diags, planned, config, private, Default::default())
        .await
        .unwrap();

    assert!(diags.errors.is_empty());
    assert_eq!(state.id, Value::Value(5));
    assert_eq!(state.password, ValueString::from("hunter2"));
    assert_eq!(state.tv_category, ValueString::from("tv-sonarr"));
    assert!(state.tv_directory.is_null());
    assert_eq!(state.implementation, ValueString::from("Transmission"));
}

#[tokio::test]
async fn series_are_added_without_search() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/series"))
        .and(body_partial_json(json!({
            "tvdbId": 81189,
            "addOptions": {
                "searchForMissingEpisodes": false,
                "searchForCutoffUnmetEpisodes": false,
            },
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 3,
            "title": "Breaking Bad",
            "titleSlug": "breaking-bad",
            "tvdbId": 81189,
            "qualityProfileId": 1,
            "languageProfileId": 1,
            "monitored": true,
            "seasonFolder": true,
            "useSceneNumbering": false,
            "path": "/tv/Breaking Bad",
            "rootFolderPath": "/tv/",
            "tags": [],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resource = resource::<Series>(&server);
    let mut diags = Diagnostics::default();
    let config = SeriesState {
        title: ValueString::from("Breaking Bad"),
        title_slug: ValueString::from("breaking-bad"),
        tvdb_id: Value::Value(81189),
        quality_profile_id: Value::Value(1),
        language_profile_id: Value::Value(1),
        root_folder_path: ValueString::from("/tv/"),
        ..Default::default()
    };

    let (planned, private) = resource
        .plan_create(&mut diags, config.clone(), config.clone(), Default::default())
        .await
        .unwrap();
    let (state, _) = resource
        .create(&mut diags, planned, config, private, Default::default())
        .await
        .unwrap();
    assert_eq!(state.id, Value::Value(3));
    assert_eq!(state.path, ValueString::from("/tv/Breaking Bad"));
    assert_eq!(state.monitored, Value::Value(true));

    let mut proposed = state.clone();
    proposed.tvdb_id = Value::Value(1);
    let (_, _, replace) = resource
        .plan_update(
            &mut diags,
            state,
            proposed.clone(),
            proposed,
            Default::default(),
            Default::default(),
        )
        .await
        .unwrap();
    assert_eq!(replace, vec![AttributePath::new("tvdb_id")]);
}

#[tokio::test]
async fn root_folder_is_refreshed_on_update() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/rootfolder/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2,
            "path": "/tv",
            "accessible": false,
            "freeSpace": 0,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resource = resource::<RootFolder>(&server);
    let mut diags = Diagnostics::default();
    let state = RootFolderState {
        id: Value::Value(2),
        path: ValueString::from("/tv"),
        accessible: Value::Value(true),
    };

    let (state, _) = resource
        .update(
            &mut diags,
            state.clone(),
            state.clone(),
            state,
            Default::default(),
            Default::default(),
        )
        .await
        .unwrap();
    assert_eq!(state.accessible, Value::Value(false));
}

#[tokio::test]
async fn settings_are_updated_and_never_deleted() {
    let server = MockServer::start().await;
    let naming = json!({
        "id": 1,
        "renameEpisodes": true,
        "replaceIllegalCharacters": true,
        "multiEpisodeStyle": 0,
        "standardEpisodeFormat": "{Series Title} - S{season:00}E{episode:00} - {Episode Title}",
        "dailyEpisodeFormat": "{Series Title} - {Air-Date} - {Episode Title}",
        "animeEpisodeFormat": "{Series Title} - S{season:00}E{episode:00} - {Episode Title}",
        "seriesFolderFormat": "{Series Title}",
        "seasonFolderFormat": "Season {season}",
        "specialsFolderFormat": "Specials",
    });
    Mock::given(method("PUT"))
        .and(path("/api/v3/config/naming/1"))
        .and(body_json(&naming))
        .respond_with(ResponseTemplate::new(202).set_body_json(&naming))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let resource = resource::<Naming>(&server);
    let mut diags = Diagnostics::default();
    let config = NamingState {
        rename_episodes: Value::Value(true),
        replace_illegal_characters: Value::Value(true),
        multi_episode_style: Value::Value(0),
        standard_episode_format: ValueString::from(
            "{Series Title} - S{season:00}E{episode:00} - {Episode Title}",
        ),
        daily_episode_format: ValueString::from("{Series Title} - {Air-Date} - {Episode Title}"),
        anime_episode_format: ValueString::from(
            "{Series Title} - S{season:00}E{episode:00} - {Episode Title}",
        ),
        series_folder_format: ValueString::from("{Series Title}"),
        season_folder_format: ValueString::from("Season {season}"),
        specials_folder_format: ValueString::from("Specials"),
        ..Default::default()
    };

    let (planned, private) = resource
        .plan_create(&mut diags, config.clone(), config.clone(), Default::default())
        .await
        .unwrap();
    let (state, _) = resource
        .create(&mut diags, planned, config, private, Default::default())
        .await
        .unwrap();
    assert_eq!(state.id, Value::Value(1));

    assert_eq!(
        resource
            .destroy(&mut diags, state, Default::default(), Default::default())
            .await,
        Some(())
    );
    assert!(diags.errors.is_empty());
}
