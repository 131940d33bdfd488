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

use reqwest::StatusCode;
use serde_json::json;
use sonarr_client::model::{DownloadClient, Field, Naming, QualityProfile, Tag};
use sonarr_client::{Client, Error};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client(server: &MockServer) -> Client {
    Client::new(&server.uri(), "secret").unwrap()
}

#[tokio::test]
async fn list_sends_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/tag"))
        .and(header("X-Api-Key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "label": "hd"},
            {"id": 2, "label": "anime"},
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let tags = client(&server).await.list::<Tag>().await.unwrap();
    assert_eq!(
        tags,
        vec![
            Tag {
                id: 1,
                label: "hd".into()
            },
            Tag {
                id: 2,
                label: "anime".into()
            },
        ]
    );
}

#[tokio::test]
async fn url_base_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sonarr/api/v3/tag/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 4, "label": "uhd"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&format!("{}/sonarr", server.uri()), "secret").unwrap();
    let tag = client.get::<Tag>(4).await.unwrap();
    assert_eq!(tag.label, "uhd");
}

#[tokio::test]
async fn create_posts_camel_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/downloadclient"))
        .and(body_json(json!({
            "id": 0,
            "name": "transmission",
            "enable": true,
            "priority": 1,
            "removeCompletedDownloads": false,
            "removeFailedDownloads": true,
            "implementation": "Transmission",
            "configContract": "TransmissionSettings",
            "protocol": "torrent",
            "tags": [3],
            "fields": [{"name": "host", "value": "localhost"}],
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 7,
            "name": "transmission",
            "enable": true,
            "priority": 1,
            "removeCompletedDownloads": false,
            "removeFailedDownloads": true,
            "implementation": "Transmission",
            "implementationName": "Transmission",
            "configContract": "TransmissionSettings",
            "protocol": "torrent",
            "tags": [3],
            "fields": [
                {"name": "host", "value": "localhost", "label": "Host", "type": "textbox"},
                {"name": "port", "value": 9091},
            ],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = DownloadClient {
        name: "transmission".into(),
        enable: true,
        priority: 1,
        remove_failed_downloads: true,
        implementation: "Transmission".into(),
        config_contract: "TransmissionSettings".into(),
        protocol: "torrent".into(),
        tags: vec![3],
        fields: vec![Field::new("host", "localhost")],
        ..Default::default()
    };
    let created = client(&server).await.create(&request).await.unwrap();
    assert_eq!(created.id, 7);
    assert_eq!(created.fields.len(), 2);
    assert_eq!(created.fields[1], Field::new("port", 9091));
}

#[tokio::test]
async fn update_puts_on_id() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v3/tag/5"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"id": 5, "label": "new"})))
        .expect(1)
        .mount(&server)
        .await;

    let tag = Tag {
        id: 5,
        label: "new".into(),
    };
    let updated = client(&server).await.update(&tag).await.unwrap();
    assert_eq!(updated, tag);
}

#[tokio::test]
async fn delete_missing_entity_fails() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v3/tag/42"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "NotFound"})))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).await.delete::<Tag>(42).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.to_string(), "DELETE tag/42 returned 404 Not Found: NotFound");
}

#[tokio::test]
async fn settings_are_read_without_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/config/naming"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "renameEpisodes": true,
            "multiEpisodeStyle": 5,
            "seasonFolderFormat": "Season {season}",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let naming = client(&server).await.get_settings::<Naming>().await.unwrap();
    assert_eq!(naming.id, 1);
    assert!(naming.rename_episodes);
    assert!(!naming.replace_illegal_characters);
    assert_eq!(naming.multi_episode_style, 5);
    assert_eq!(naming.season_folder_format, "Season {season}");
}

#[tokio::test]
async fn validation_failures_are_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/tag"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!([
            {"propertyName": "Label", "errorMessage": "Label must be unique"}
        ])))
        .mount(&server)
        .await;

    let err = client(&server)
        .await
        .create(&Tag::default())
        .await
        .unwrap_err();
    match err {
        Error::Status {
            status, message, ..
        } => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(message, "Label must be unique");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn malformed_response_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/system/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let err = client(&server).await.system_status().await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn schema_lists_every_quality() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/qualityprofile/schema"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "",
            "upgradeAllowed": false,
            "cutoff": 0,
            "items": [
                {
                    "quality": {"id": 1, "name": "SDTV", "source": "television", "resolution": 480},
                    "items": [],
                    "allowed": false,
                },
                {
                    "id": 1000,
                    "name": "WEB 1080p",
                    "items": [
                        {
                            "quality": {"id": 3, "name": "WEBDL-1080p", "source": "web", "resolution": 1080},
                            "items": [],
                            "allowed": false,
                        },
                    ],
                    "allowed": false,
                },
            ],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let schema = client(&server)
        .await
        .schema::<QualityProfile>()
        .await
        .unwrap();
    assert_eq!(schema.id, 0);
    assert_eq!(schema.items.len(), 2);
    assert_eq!(schema.items[0].quality.as_ref().unwrap().resolution, 480);
    assert_eq!(schema.items[1].name.as_deref(), Some("WEB 1080p"));
    assert_eq!(
        schema.items[1].items[0].quality.as_ref().unwrap().name,
        "WEBDL-1080p"
    );
}
