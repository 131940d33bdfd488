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
use sonarr_client::{model, Client, Endpoint, Result};
use tf_provider::map;
use tf_provider::schema::{Attribute, AttributeType};
use tf_provider::value::{Value, ValueBool, ValueNumber, ValueString};
use tf_provider::AttributePath;

use crate::attributes::{computed, id, required};
use crate::entity::{Entity, ManagedEntity, Searchable};
use crate::utils::{number, string};

/// Folder where series are stored
#[derive(Debug, Clone, Copy, Default)]
pub struct RootFolder;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RootFolderState<'a> {
    pub id: ValueNumber,
    #[serde(borrow = "'a")]
    pub path: ValueString<'a>,
    pub accessible: ValueBool,
}

impl Entity for RootFolder {
    const NAME: &'static str = "root_folder";
    const DESCRIPTION: &'static str = "<!-- subcategory:Media Management -->Root Folder resource.\n\
        For more information refer to [Root Folders](https://wiki.servarr.com/sonarr/settings#root-folders) documentation.";

    type State<'a> = RootFolderState<'a>;
    type Model = model::RootFolder;

    fn attributes() -> HashMap<String, Attribute> {
        map! {
            "id" => id("Root Folder"),
            "path" => required(AttributeType::String, "Root Folder absolute path."),
            "accessible" => computed(AttributeType::Bool, "Access flag."),
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
        state.path = model.path.into();
        state.accessible = Value::Value(model.accessible);
    }
}

impl Searchable for RootFolder {
    const PLURAL: &'static str = "root_folders";
    const LOOKUP: &'static str = "path";

    fn matches(state: &Self::State<'_>, model: &Self::Model) -> bool {
        state.path.as_deref_option() == Some(model.path.as_str())
    }
}

#[async_trait]
impl ManagedEntity for RootFolder {
    fn to_model(state: &Self::State<'_>) -> Self::Model {
        model::RootFolder {
            id: number(&state.id),
            path: string(&state.path),
            ..Default::default()
        }
    }

    fn plan(state: &mut Self::State<'_>) {
        state.id = Value::Unknown;
        state.accessible = Value::Unknown;
    }

    fn requires_replace(prior: &Self::State<'_>, proposed: &Self::State<'_>) -> Vec<AttributePath> {
        if prior.path != proposed.path {
            vec![AttributePath::new("path")]
        } else {
            Vec::new()
        }
    }

    /// Root folders cannot be modified, only their computed attributes are refreshed
    async fn update(client: &Client, model: Self::Model) -> Result<Self::Model> {
        client.get(model.id()).await
    }
}
