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

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sonarr_client::{model, Client, Result};
use tf_provider::map;
use tf_provider::schema::{Attribute, AttributeType};
use tf_provider::value::{Value, ValueBool, ValueList, ValueNumber, ValueString};

use crate::attributes::{id, optional, required};
use crate::entity::{Entity, ManagedEntity, Searchable};
use crate::utils::{boolean, number, string, unknown_if_null};

/// IDs of quality groups start here, below are the IDs of the qualities themselves
const GROUP_ID_START: i64 = 1000;

/// Qualities that are wanted for a series
#[derive(Debug, Clone, Copy, Default)]
pub struct QualityProfile;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityProfileState<'a> {
    pub id: ValueNumber,
    #[serde(borrow = "'a")]
    pub name: ValueString<'a>,
    pub upgrade_allowed: ValueBool,
    pub cutoff: ValueNumber,
    #[serde(borrow = "'a")]
    pub quality_groups: ValueList<QualityGroupState<'a>>,
}

/// Allowed qualities that are considered equivalent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityGroupState<'a> {
    pub id: ValueNumber,
    #[serde(borrow = "'a")]
    pub name: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub qualities: ValueList<QualityState<'a>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityState<'a> {
    pub id: ValueNumber,
    #[serde(borrow = "'a")]
    pub name: ValueString<'a>,
    pub source: ValueString<'a>,
    pub resolution: ValueNumber,
}

impl<'a> From<&model::Quality> for QualityState<'a> {
    fn from(quality: &model::Quality) -> Self {
        Self {
            id: Value::Value(quality.id),
            name: quality.name.clone().into(),
            source: quality.source.clone().into(),
            resolution: Value::Value(quality.resolution),
        }
    }
}

impl QualityState<'_> {
    fn to_model(&self) -> model::Quality {
        model::Quality {
            id: number(&self.id),
            name: string(&self.name),
            source: string(&self.source),
            resolution: number(&self.resolution),
        }
    }
}

fn quality_type() -> AttributeType {
    AttributeType::Object(map! {
        "id" => AttributeType::Number,
        "name" => AttributeType::String,
        "source" => AttributeType::String,
        "resolution" => AttributeType::Number,
    })
}

fn quality_group_type() -> AttributeType {
    AttributeType::Object(map! {
        "id" => AttributeType::Number,
        "name" => AttributeType::String,
        "qualities" => AttributeType::List(Box::new(quality_type())),
    })
}

/// Group of allowed qualities as seen by Terraform
///
/// Single qualities become a group with the ID and the name of the quality.
fn group_from_item<'a>(item: &model::QualityProfileItem) -> QualityGroupState<'a> {
    match &item.quality {
        Some(quality) => QualityGroupState {
            id: Value::Value(quality.id),
            name: quality.name.clone().into(),
            qualities: Value::Value(vec![quality.into()]),
        },
        None => QualityGroupState {
            id: Value::Value(item.id.unwrap_or_default()),
            name: item.name.clone().unwrap_or_default().into(),
            qualities: Value::Value(
                item.items
                    .iter()
                    .filter_map(|item| item.quality.as_ref())
                    .map(Into::into)
                    .collect(),
            ),
        },
    }
}

fn allowed(quality: model::Quality) -> model::QualityProfileItem {
    model::QualityProfileItem {
        quality: Some(quality),
        allowed: true,
        ..Default::default()
    }
}

/// Item sent to the server for a group
///
/// A group holding a single quality of the same name is sent as that quality.
fn item_from_group(index: usize, group: &QualityGroupState<'_>) -> model::QualityProfileItem {
    let mut qualities: Vec<model::Quality> = group
        .qualities
        .iter()
        .flatten()
        .map(QualityState::to_model)
        .collect();

    if qualities.len() == 1 && group.name.as_deref_option() == Some(qualities[0].name.as_str()) {
        if let Some(quality) = qualities.pop() {
            return allowed(quality);
        }
    }

    let id = match group.id.as_ref_option() {
        Some(&id) if id >= GROUP_ID_START => id,
        _ => GROUP_ID_START + index as i64,
    };
    model::QualityProfileItem {
        id: Some(id),
        name: Some(string(&group.name)),
        quality: None,
        items: qualities.into_iter().map(allowed).collect(),
        allowed: true,
    }
}

/// Qualities used by the items, including the ones inside groups
fn qualities(items: &[model::QualityProfileItem]) -> impl Iterator<Item = &model::Quality> {
    items.iter().flat_map(|item| {
        item.quality
            .iter()
            .chain(item.items.iter().filter_map(|item| item.quality.as_ref()))
    })
}

/// Add every quality known by the server and missing from the profile as a disallowed quality
///
/// The server rejects profiles that do not list all its qualities.
fn complete(mut profile: model::QualityProfile, schema: model::QualityProfile) -> model::QualityProfile {
    let used: HashSet<i64> = qualities(&profile.items).map(|quality| quality.id).collect();

    let mut items: Vec<model::QualityProfileItem> = qualities(&schema.items)
        .filter(|quality| !used.contains(&quality.id))
        .map(|quality| model::QualityProfileItem {
            quality: Some(quality.clone()),
            allowed: false,
            ..Default::default()
        })
        .collect();
    items.append(&mut profile.items);
    profile.items = items;
    profile
}

impl Entity for QualityProfile {
    const NAME: &'static str = "quality_profile";
    const DESCRIPTION: &'static str = "<!-- subcategory:Profiles -->Quality Profile resource.\n\
        For more information refer to [Quality Profiles](https://wiki.servarr.com/sonarr/settings#quality-profiles) documentation.";

    type State<'a> = QualityProfileState<'a>;
    type Model = model::QualityProfile;

    fn attributes() -> HashMap<String, Attribute> {
        map! {
            "id" => id("Quality Profile"),
            "name" => required(AttributeType::String, "Quality Profile name."),
            "upgrade_allowed" => optional(AttributeType::Bool, "Upgrade allowed flag."),
            "cutoff" => required(AttributeType::Number, "Quality ID to which cutoff."),
            "quality_groups" => required(
                AttributeType::List(Box::new(quality_group_type())),
                "Allowed quality groups, from the least to the most wanted. \
                Qualities left out are not allowed.",
            ),
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
        state.upgrade_allowed = Value::Value(model.upgrade_allowed);
        state.cutoff = Value::Value(model.cutoff);
        state.quality_groups = Value::Value(
            model
                .items
                .iter()
                .filter(|item| item.allowed)
                .map(group_from_item)
                .collect(),
        );
    }
}

impl Searchable for QualityProfile {
    const PLURAL: &'static str = "quality_profiles";
    const LOOKUP: &'static str = "name";

    fn matches(state: &Self::State<'_>, model: &Self::Model) -> bool {
        state.name.as_deref_option() == Some(model.name.as_str())
    }
}

#[async_trait]
impl ManagedEntity for QualityProfile {
    fn to_model(state: &Self::State<'_>) -> Self::Model {
        model::QualityProfile {
            id: number(&state.id),
            name: string(&state.name),
            upgrade_allowed: boolean(&state.upgrade_allowed),
            cutoff: number(&state.cutoff),
            items: state
                .quality_groups
                .iter()
                .flatten()
                .enumerate()
                .map(|(index, group)| item_from_group(index, group))
                .collect(),
        }
    }

    fn plan(state: &mut Self::State<'_>) {
        state.id = Value::Unknown;
        unknown_if_null(&mut state.upgrade_allowed);
    }

    async fn create(client: &Client, model: Self::Model) -> Result<Self::Model> {
        let schema = client.schema().await?;
        client.create(&complete(model, schema)).await
    }

    async fn update(client: &Client, model: Self::Model) -> Result<Self::Model> {
        let schema = client.schema().await?;
        client.update(&complete(model, schema)).await
    }
}
