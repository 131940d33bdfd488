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
use tf_provider::value::{Value, ValueNumber};

use crate::attributes::{id, required};
use crate::entity::{Entity, EntityKind, ManagedEntity, SETTINGS_ID};
use crate::utils::number;

/// Global indexer settings
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexerConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexerConfigState {
    pub id: ValueNumber,
    pub minimum_age: ValueNumber,
    pub retention: ValueNumber,
    pub maximum_size: ValueNumber,
    pub rss_sync_interval: ValueNumber,
}

impl Entity for IndexerConfig {
    const NAME: &'static str = "indexer_config";
    const DESCRIPTION: &'static str = "<!-- subcategory:Indexers -->Indexer Config resource.\n\
        For more information refer to [Indexer](https://wiki.servarr.com/sonarr/settings#options) documentation.";
    const KIND: EntityKind = EntityKind::Settings;

    type State<'a> = IndexerConfigState;
    type Model = model::IndexerConfig;

    fn attributes() -> HashMap<String, Attribute> {
        map! {
            "id" => id("Indexer Config"),
            "minimum_age" => required(AttributeType::Number, "Minimum age (usenet only) in minutes."),
            "retention" => required(AttributeType::Number, "Retention (usenet only) in days."),
            "maximum_size" => required(AttributeType::Number, "Maximum size in MB."),
            "rss_sync_interval" => required(AttributeType::Number, "RSS sync interval in minutes."),
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
        state.minimum_age = Value::Value(model.minimum_age);
        state.retention = Value::Value(model.retention);
        state.maximum_size = Value::Value(model.maximum_size);
        state.rss_sync_interval = Value::Value(model.rss_sync_interval);
    }
}

impl ManagedEntity for IndexerConfig {
    fn to_model(state: &Self::State<'_>) -> Self::Model {
        model::IndexerConfig {
            id: Self::id(state).unwrap_or(SETTINGS_ID),
            minimum_age: number(&state.minimum_age),
            retention: number(&state.retention),
            maximum_size: number(&state.maximum_size),
            rss_sync_interval: number(&state.rss_sync_interval),
        }
    }

    fn plan(state: &mut Self::State<'_>) {
        state.id = Value::Unknown;
    }
}
