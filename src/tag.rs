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
use tf_provider::value::{Value, ValueNumber, ValueString};

use crate::attributes::{id, required};
use crate::entity::{Entity, ManagedEntity, Searchable};
use crate::utils::string;

/// Tag used to link indexers, download clients and profiles to series
#[derive(Debug, Clone, Copy, Default)]
pub struct Tag;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagState<'a> {
    pub id: ValueNumber,
    #[serde(borrow = "'a")]
    pub label: ValueString<'a>,
}

impl Entity for Tag {
    const NAME: &'static str = "tag";
    const DESCRIPTION: &'static str = "<!-- subcategory:Tags -->Tag resource.\n\
        For more information refer to [Tags](https://wiki.servarr.com/sonarr/settings#tags) documentation.";

    type State<'a> = TagState<'a>;
    type Model = model::Tag;

    fn attributes() -> HashMap<String, Attribute> {
        map! {
            "id" => id("Tag"),
            "label" => required(AttributeType::String, "Tag label. It must be lowercase."),
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
        state.label = model.label.into();
    }
}

impl Searchable for Tag {
    const PLURAL: &'static str = "tags";
    const LOOKUP: &'static str = "label";

    fn matches(state: &Self::State<'_>, model: &Self::Model) -> bool {
        state.label.as_deref_option() == Some(model.label.as_str())
    }
}

impl ManagedEntity for Tag {
    fn to_model(state: &Self::State<'_>) -> Self::Model {
        model::Tag {
            id: Self::id(state).unwrap_or_default(),
            label: string(&state.label),
        }
    }

    fn plan(state: &mut Self::State<'_>) {
        state.id = Value::Unknown;
    }
}
