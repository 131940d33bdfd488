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

use serde::{Deserialize, Serialize};
use sonarr_client::model;
use tf_provider::map;
use tf_provider::schema::{Attribute, AttributeType};
use tf_provider::value::{Value, ValueBool, ValueNumber, ValueString};

use crate::attributes::{id, required};
use crate::entity::{Entity, EntityKind, ManagedEntity, SETTINGS_ID};
use crate::utils::{boolean, number, string};

/// Episode file and folder naming
#[derive(Debug, Clone, Copy, Default)]
pub struct Naming;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamingState<'a> {
    pub id: ValueNumber,
    pub rename_episodes: ValueBool,
    pub replace_illegal_characters: ValueBool,
    pub multi_episode_style: ValueNumber,
    #[serde(borrow = "'a")]
    pub standard_episode_format: ValueString<'a>,
    pub daily_episode_format: ValueString<'a>,
    pub anime_episode_format: ValueString<'a>,
    pub series_folder_format: ValueString<'a>,
    pub season_folder_format: ValueString<'a>,
    pub specials_folder_format: ValueString<'a>,
}

impl Entity for Naming {
    const NAME: &'static str = "naming";
    const DESCRIPTION: &'static str = "<!-- subcategory:Media Management -->Naming resource.\n\
        For more information refer to [Naming](https://wiki.servarr.com/sonarr/settings#community-naming-suggestions) documentation.";
    const KIND: EntityKind = EntityKind::Settings;

    type State<'a> = NamingState<'a>;
    type Model = model::Naming;

    fn attributes() -> HashMap<String, Attribute> {
        map! {
            "id" => id("Naming"),
            "rename_episodes" => required(AttributeType::Bool, "Sonarr will use the existing file name if false."),
            "replace_illegal_characters" => required(AttributeType::Bool, "Replace illegal characters. They will be removed if false."),
            "multi_episode_style" => required(
                AttributeType::Number,
                "Multi episode style. 0 - 'Extend' 1 - 'Duplicate' 2 - 'Repeat' 3 - 'Scene' 4 - 'Range' 5 - 'Prefixed Range'."
            ),
            "standard_episode_format" => required(AttributeType::String, "Standard episode format."),
            "daily_episode_format" => required(AttributeType::String, "Daily episode format."),
            "anime_episode_format" => required(AttributeType::String, "Anime episode format."),
            "series_folder_format" => required(AttributeType::String, "Series folder format."),
            "season_folder_format" => required(AttributeType::String, "Season folder format."),
            "specials_folder_format" => required(AttributeType::String, "Special folder format."),
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
        state.rename_episodes = Value::Value(model.rename_episodes);
        state.replace_illegal_characters = Value::Value(model.replace_illegal_characters);
        state.multi_episode_style = Value::Value(model.multi_episode_style);
        state.standard_episode_format = model.standard_episode_format.into();
        state.daily_episode_format = model.daily_episode_format.into();
        state.anime_episode_format = model.anime_episode_format.into();
        state.series_folder_format = model.series_folder_format.into();
        state.season_folder_format = model.season_folder_format.into();
        state.specials_folder_format = model.specials_folder_format.into();
    }
}

impl ManagedEntity for Naming {
    fn to_model(state: &Self::State<'_>) -> Self::Model {
        model::Naming {
            id: Self::id(state).unwrap_or(SETTINGS_ID),
            rename_episodes: boolean(&state.rename_episodes),
            replace_illegal_characters: boolean(&state.replace_illegal_characters),
            multi_episode_style: number(&state.multi_episode_style),
            standard_episode_format: string(&state.standard_episode_format),
            daily_episode_format: string(&state.daily_episode_format),
            anime_episode_format: string(&state.anime_episode_format),
            series_folder_format: string(&state.series_folder_format),
            season_folder_format: string(&state.season_folder_format),
            specials_folder_format: string(&state.specials_folder_format),
        }
    }

    fn plan(state: &mut Self::State<'_>) {
        state.id = Value::Unknown;
    }
}
