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
use tf_provider::value::{Value, ValueBool, ValueNumber, ValueSet, ValueString};

use crate::attributes::{id, number_set_type, optional, required, sensitive, tags};
use crate::entity::{Entity, ManagedEntity, Searchable};
use crate::fields::{FieldsReader, FieldsWriter};
use crate::utils::{boolean, number, number_set, numbers, string, unknown_if_null, write_sensitive};

/// Source of releases
///
/// The `implementation` and `config_contract` attributes select which fields are meaningful.
#[derive(Debug, Clone, Copy, Default)]
pub struct Indexer;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexerState<'a> {
    pub id: ValueNumber,
    #[serde(borrow = "'a")]
    pub name: ValueString<'a>,
    pub enable_automatic_search: ValueBool,
    pub enable_interactive_search: ValueBool,
    pub enable_rss: ValueBool,
    pub priority: ValueNumber,
    pub implementation: ValueString<'a>,
    pub config_contract: ValueString<'a>,
    pub protocol: ValueString<'a>,
    pub tags: ValueSet<ValueNumber>,
    pub base_url: ValueString<'a>,
    pub api_path: ValueString<'a>,
    pub api_key: ValueString<'a>,
    pub additional_parameters: ValueString<'a>,
    pub username: ValueString<'a>,
    pub categories: ValueSet<ValueNumber>,
    pub anime_categories: ValueSet<ValueNumber>,
    pub minimum_seeders: ValueNumber,
    pub allow_zero_size: ValueBool,
}

impl Entity for Indexer {
    const NAME: &'static str = "indexer";
    const DESCRIPTION: &'static str = "<!-- subcategory:Indexers -->Generic Indexer resource. \
        When possible use a specific resource instead.\n\
        For more information refer to [Indexer](https://wiki.servarr.com/sonarr/settings#indexers) documentation.";

    type State<'a> = IndexerState<'a>;
    type Model = model::Indexer;

    fn attributes() -> HashMap<String, Attribute> {
        map! {
            "id" => id("Indexer"),
            "name" => required(AttributeType::String, "Indexer name."),
            "enable_automatic_search" => optional(AttributeType::Bool, "Enable automatic search flag."),
            "enable_interactive_search" => optional(AttributeType::Bool, "Enable interactive search flag."),
            "enable_rss" => optional(AttributeType::Bool, "Enable RSS flag."),
            "priority" => optional(AttributeType::Number, "Priority."),
            "implementation" => required(AttributeType::String, "Indexer implementation name."),
            "config_contract" => required(AttributeType::String, "Indexer configuration template."),
            "protocol" => required(AttributeType::String, "Protocol. Valid values are `usenet` and `torrent`."),
            "tags" => tags(),
            "base_url" => optional(AttributeType::String, "Base URL."),
            "api_path" => optional(AttributeType::String, "API path."),
            "api_key" => sensitive(optional(AttributeType::String, "API key.")),
            "additional_parameters" => optional(AttributeType::String, "Additional parameters."),
            "username" => optional(AttributeType::String, "Username."),
            "categories" => optional(number_set_type(), "Series list."),
            "anime_categories" => optional(number_set_type(), "Anime list."),
            "minimum_seeders" => optional(AttributeType::Number, "Minimum seeders."),
            "allow_zero_size" => optional(AttributeType::Bool, "Allow zero size files."),
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
        state.name = model.name.into();
        state.enable_automatic_search = Value::Value(model.enable_automatic_search);
        state.enable_interactive_search = Value::Value(model.enable_interactive_search);
        state.enable_rss = Value::Value(model.enable_rss);
        state.priority = Value::Value(model.priority);
        state.implementation = model.implementation.into();
        state.config_contract = model.config_contract.into();
        state.protocol = model.protocol.into();
        state.tags = number_set(model.tags);

        let fields = FieldsReader::new(model.fields);
        state.base_url = fields.string("baseUrl");
        state.api_path = fields.string("apiPath");
        write_sensitive(&mut state.api_key, fields.string("apiKey"));
        state.additional_parameters = fields.string("additionalParameters");
        state.username = fields.string("username");
        state.categories = fields.int_set("categories");
        state.anime_categories = fields.int_set("animeCategories");
        state.minimum_seeders = fields.int("minimumSeeders");
        state.allow_zero_size = fields.bool("allowZeroSize");
    }
}

impl Searchable for Indexer {
    const PLURAL: &'static str = "indexers";
    const LOOKUP: &'static str = "name";

    fn matches(state: &Self::State<'_>, model: &Self::Model) -> bool {
        state.name.as_deref_option() == Some(model.name.as_str())
    }
}

impl ManagedEntity for Indexer {
    fn to_model(state: &Self::State<'_>) -> Self::Model {
        let fields = FieldsWriter::new()
            .string("baseUrl", &state.base_url)
            .string("apiPath", &state.api_path)
            .string("apiKey", &state.api_key)
            .string("additionalParameters", &state.additional_parameters)
            .string("username", &state.username)
            .int_set("categories", &state.categories)
            .int_set("animeCategories", &state.anime_categories)
            .int("minimumSeeders", &state.minimum_seeders)
            .bool("allowZeroSize", &state.allow_zero_size)
            .into_inner();

        model::Indexer {
            id: number(&state.id),
            name: string(&state.name),
            enable_automatic_search: boolean(&state.enable_automatic_search),
            enable_interactive_search: boolean(&state.enable_interactive_search),
            enable_rss: boolean(&state.enable_rss),
            priority: number(&state.priority),
            implementation: string(&state.implementation),
            config_contract: string(&state.config_contract),
            protocol: string(&state.protocol),
            tags: numbers(&state.tags),
            fields,
        }
    }

    fn plan(state: &mut Self::State<'_>) {
        state.id = Value::Unknown;
        unknown_if_null(&mut state.enable_automatic_search);
        unknown_if_null(&mut state.enable_interactive_search);
        unknown_if_null(&mut state.enable_rss);
        unknown_if_null(&mut state.priority);
        unknown_if_null(&mut state.tags);
        unknown_if_null(&mut state.base_url);
        unknown_if_null(&mut state.api_path);
        unknown_if_null(&mut state.api_key);
        unknown_if_null(&mut state.additional_parameters);
        unknown_if_null(&mut state.username);
        unknown_if_null(&mut state.categories);
        unknown_if_null(&mut state.anime_categories);
        unknown_if_null(&mut state.minimum_seeders);
        unknown_if_null(&mut state.allow_zero_size);
    }
}
