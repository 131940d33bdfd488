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

use crate::attributes::{id, optional, string_set_type, tags};
use crate::entity::{Entity, ManagedEntity, Searchable};
use crate::utils::{
    boolean, number, number_set, numbers, string, string_set, strings, unknown_if_null,
};

/// Terms that releases must or must not contain
#[derive(Debug, Clone, Copy, Default)]
pub struct ReleaseProfile;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReleaseProfileState<'a> {
    pub id: ValueNumber,
    pub enabled: ValueBool,
    #[serde(borrow = "'a")]
    pub name: ValueString<'a>,
    pub indexer_id: ValueNumber,
    pub required: ValueSet<ValueString<'a>>,
    pub ignored: ValueSet<ValueString<'a>>,
    pub tags: ValueSet<ValueNumber>,
}

impl Entity for ReleaseProfile {
    const NAME: &'static str = "release_profile";
    const DESCRIPTION: &'static str = "<!-- subcategory:Profiles -->Release Profile resource.\n\
        For more information refer to [Release Profiles](https://wiki.servarr.com/sonarr/settings#release-profiles) documentation.";

    type State<'a> = ReleaseProfileState<'a>;
    type Model = model::ReleaseProfile;

    fn attributes() -> HashMap<String, Attribute> {
        map! {
            "id" => id("Release Profile"),
            "enabled" => optional(AttributeType::Bool, "Enabled."),
            "name" => optional(AttributeType::String, "Release profile name."),
            "indexer_id" => optional(AttributeType::Number, "Indexer ID. Set `0` for all."),
            "required" => optional(string_set_type(), "Required terms."),
            "ignored" => optional(string_set_type(), "Ignored terms."),
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
        state.enabled = Value::Value(model.enabled);
        state.name = model.name.into();
        state.indexer_id = Value::Value(model.indexer_id);
        state.required = string_set(model.required);
        state.ignored = string_set(model.ignored);
        state.tags = number_set(model.tags);
    }
}

impl Searchable for ReleaseProfile {
    const PLURAL: &'static str = "release_profiles";
    const LOOKUP: &'static str = "id";

    fn matches(state: &Self::State<'_>, model: &Self::Model) -> bool {
        Self::id(state) == Some(model.id)
    }
}

impl ManagedEntity for ReleaseProfile {
    fn to_model(state: &Self::State<'_>) -> Self::Model {
        model::ReleaseProfile {
            id: number(&state.id),
            name: string(&state.name),
            enabled: boolean(&state.enabled),
            indexer_id: number(&state.indexer_id),
            required: strings(&state.required),
            ignored: strings(&state.ignored),
            tags: numbers(&state.tags),
        }
    }

    fn plan(state: &mut Self::State<'_>) {
        state.id = Value::Unknown;
        unknown_if_null(&mut state.enabled);
        unknown_if_null(&mut state.name);
        unknown_if_null(&mut state.indexer_id);
        unknown_if_null(&mut state.required);
        unknown_if_null(&mut state.ignored);
        unknown_if_null(&mut state.tags);
    }
}
