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

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sonarr_client::model::{self, AddSeriesOptions};
use sonarr_client::{Client, Result};
use tf_provider::map;
use tf_provider::schema::{Attribute, AttributeType};
use tf_provider::value::{Value, ValueBool, ValueNumber, ValueSet, ValueString};
use tf_provider::AttributePath;

use crate::attributes::{id, optional, required, tags};
use crate::entity::{Entity, ManagedEntity, Searchable};
use crate::utils::{boolean, number, number_set, numbers, string, unknown_if_null};

/// Series followed by Sonarr
#[derive(Debug, Clone, Copy, Default)]
pub struct Series;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeriesState<'a> {
    pub id: ValueNumber,
    #[serde(borrow = "'a")]
    pub title: ValueString<'a>,
    pub title_slug: ValueString<'a>,
    pub tvdb_id: ValueNumber,
    pub quality_profile_id: ValueNumber,
    pub language_profile_id: ValueNumber,
    pub monitored: ValueBool,
    pub season_folder: ValueBool,
    pub use_scene_numbering: ValueBool,
    pub path: ValueString<'a>,
    pub root_folder_path: ValueString<'a>,
    pub tags: ValueSet<ValueNumber>,
}

impl Entity for Series {
    const NAME: &'static str = "series";
    const DESCRIPTION: &'static str = "<!-- subcategory:Series -->Series resource.\n\
        For more information refer to [Sonarr library](https://wiki.servarr.com/sonarr/library) documentation.";

    type State<'a> = SeriesState<'a>;
    type Model = model::Series;

    fn attributes() -> HashMap<String, Attribute> {
        map! {
            "id" => id("Series"),
            "title" => required(AttributeType::String, "Series title."),
            "title_slug" => required(AttributeType::String, "Series title in kebab format."),
            "tvdb_id" => required(AttributeType::Number, "TVDB ID."),
            "quality_profile_id" => required(AttributeType::Number, "Quality profile ID."),
            "language_profile_id" => required(AttributeType::Number, "Language profile ID."),
            "monitored" => optional(AttributeType::Bool, "Monitored flag."),
            "season_folder" => optional(AttributeType::Bool, "Season folder flag."),
            "use_scene_numbering" => optional(AttributeType::Bool, "Scene numbering flag."),
            "path" => optional(AttributeType::String, "Full series path."),
            "root_folder_path" => optional(AttributeType::String, "Series root folder."),
            "tags" => tags(),
        }
    }

    fn id(state: &Self::State<'_>) -> Option<i64> {
        state.id.as_ref_option().copied()
    }

    fn set_id(state: &mut Self::State<'_>, id: i64) {
        state.id = Value::Value(id);
    }

    fn write(state: &mut Self::State<'_>, model: Self::Model) {
        state.id = Value::Value(model.id);
        state.title = model.title.into();
        state.title_slug = model.title_slug.into();
        state.tvdb_id = Value::Value(model.tvdb_id);
        state.quality_profile_id = Value::Value(model.quality_profile_id);
        state.language_profile_id = Value::Value(model.language_profile_id);
        state.monitored = Value::Value(model.monitored);
        state.season_folder = Value::Value(model.season_folder);
        state.use_scene_numbering = Value::Value(model.use_scene_numbering);
        state.path = model.path.into();
        // Not always returned by the server
        if !model.root_folder_path.is_empty() || !state.root_folder_path.is_value() {
            state.root_folder_path = model.root_folder_path.into();
        }
        state.tags = number_set(model.tags);
    }
}

impl Searchable for Series {
    const PLURAL: &'static str = "series";
    const LOOKUP: &'static str = "title";

    fn matches(state: &Self::State<'_>, model: &Self::Model) -> bool {
        state.title.as_deref_option() == Some(model.title.as_str())
    }
}

#[async_trait]
impl ManagedEntity for Series {
    fn to_model(state: &Self::State<'_>) -> Self::Model {
        model::Series {
            id: number(&state.id),
            title: string(&state.title),
            title_slug: string(&state.title_slug),
            tvdb_id: number(&state.tvdb_id),
            quality_profile_id: number(&state.quality_profile_id),
            language_profile_id: number(&state.language_profile_id),
            monitored: boolean(&state.monitored),
            season_folder: boolean(&state.season_folder),
            use_scene_numbering: boolean(&state.use_scene_numbering),
            path: string(&state.path),
            root_folder_path: string(&state.root_folder_path),
            tags: numbers(&state.tags),
            add_options: None,
        }
    }

    fn plan(state: &mut Self::State<'_>) {
        state.id = Value::Unknown;
        unknown_if_null(&mut state.monitored);
        unknown_if_null(&mut state.season_folder);
        unknown_if_null(&mut state.use_scene_numbering);
        unknown_if_null(&mut state.path);
        unknown_if_null(&mut state.root_folder_path);
        unknown_if_null(&mut state.tags);
    }

    fn requires_replace(prior: &Self::State<'_>, proposed: &Self::State<'_>) -> Vec<AttributePath> {
        if prior.tvdb_id != proposed.tvdb_id {
            vec![AttributePath::new("tvdb_id")]
        } else {
            Vec::new()
        }
    }

    /// Add the series without searching for its episodes
    async fn create(client: &Client, model: Self::Model) -> Result<Self::Model> {
        let model = model::Series {
            add_options: Some(AddSeriesOptions::default()),
            ..model
        };
        client.create(&model).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> model::Series {
        model::Series {
            id: 10,
            title: "Breaking Bad".to_owned(),
            title_slug: "breaking-bad".to_owned(),
            tvdb_id: 81189,
            quality_profile_id: 1,
            language_profile_id: 1,
            monitored: true,
            season_folder: true,
            use_scene_numbering: false,
            path: "/tv/Breaking Bad".to_owned(),
            root_folder_path: "/tv/".to_owned(),
            tags: vec![1],
            add_options: None,
        }
    }

    #[test]
    fn mapping() {
        let mut state = SeriesState::default();
        Series::write(&mut state, series());
        assert_eq!(state.title_slug, ValueString::from("breaking-bad"));
        assert_eq!(Series::to_model(&state), series());
    }

    #[test]
    fn root_folder_path_is_kept_when_not_returned() {
        let mut state = SeriesState {
            root_folder_path: ValueString::from("/tv/"),
            ..Default::default()
        };
        Series::write(
            &mut state,
            model::Series {
                root_folder_path: String::new(),
                ..series()
            },
        );
        assert_eq!(state.root_folder_path, ValueString::from("/tv/"));
    }

    #[test]
    fn tvdb_change_replaces() {
        let mut prior = SeriesState::default();
        Series::write(&mut prior, series());
        let mut proposed = prior.clone();
        proposed.monitored = Value::Value(false);
        assert!(Series::requires_replace(&prior, &proposed).is_empty());

        proposed.tvdb_id = Value::Value(1);
        assert_eq!(
            Series::requires_replace(&prior, &proposed),
            vec![AttributePath::new("tvdb_id")]
        );
    }
}
