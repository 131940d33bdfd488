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

use crate::attributes::{id, optional, tags};
use crate::entity::{Entity, ManagedEntity, Searchable};
use crate::utils::{boolean, number, number_set, numbers, string, unknown_if_null};

/// Delay applied to releases before they are grabbed
#[derive(Debug, Clone, Copy, Default)]
pub struct DelayProfile;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DelayProfileState<'a> {
    pub id: ValueNumber,
    pub enable_usenet: ValueBool,
    pub enable_torrent: ValueBool,
    pub bypass_if_highest_quality: ValueBool,
    pub usenet_delay: ValueNumber,
    pub torrent_delay: ValueNumber,
    pub order: ValueNumber,
    #[serde(borrow = "'a")]
    pub preferred_protocol: ValueString<'a>,
    pub tags: ValueSet<ValueNumber>,
}

impl Entity for DelayProfile {
    const NAME: &'static str = "delay_profile";
    const DESCRIPTION: &'static str = "<!-- subcategory:Profiles -->Delay Profile resource.\n\
        For more information refer to [Delay Profiles](https://wiki.servarr.com/sonarr/settings#delay-profiles) documentation.";

    type State<'a> = DelayProfileState<'a>;
    type Model = model::DelayProfile;

    fn attributes() -> HashMap<String, Attribute> {
        map! {
            "id" => id("Delay Profile"),
            "enable_usenet" => optional(AttributeType::Bool, "Usenet allowed flag."),
            "enable_torrent" => optional(AttributeType::Bool, "Torrent allowed flag."),
            "bypass_if_highest_quality" => optional(AttributeType::Bool, "Bypass for highest quality flag."),
            "usenet_delay" => optional(AttributeType::Number, "Usenet delay in minutes."),
            "torrent_delay" => optional(AttributeType::Number, "Torrent delay in minutes."),
            "order" => optional(AttributeType::Number, "Order, `2147483647` is reserved for the default profile."),
            "preferred_protocol" => optional(AttributeType::String, "Preferred protocol, `usenet` or `torrent`."),
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
        state.enable_usenet = Value::Value(model.enable_usenet);
        state.enable_torrent = Value::Value(model.enable_torrent);
        state.bypass_if_highest_quality = Value::Value(model.bypass_if_highest_quality);
        state.usenet_delay = Value::Value(model.usenet_delay);
        state.torrent_delay = Value::Value(model.torrent_delay);
        state.order = Value::Value(model.order);
        state.preferred_protocol = model.preferred_protocol.into();
        state.tags = number_set(model.tags);
    }
}

impl Searchable for DelayProfile {
    const PLURAL: &'static str = "delay_profiles";
    const LOOKUP: &'static str = "id";

    fn matches(state: &Self::State<'_>, model: &Self::Model) -> bool {
        Self::id(state) == Some(model.id)
    }
}

impl ManagedEntity for DelayProfile {
    fn to_model(state: &Self::State<'_>) -> Self::Model {
        model::DelayProfile {
            id: number(&state.id),
            enable_usenet: boolean(&state.enable_usenet),
            enable_torrent: boolean(&state.enable_torrent),
            bypass_if_highest_quality: boolean(&state.bypass_if_highest_quality),
            usenet_delay: number(&state.usenet_delay),
            torrent_delay: number(&state.torrent_delay),
            order: number(&state.order),
            preferred_protocol: string(&state.preferred_protocol),
            tags: numbers(&state.tags),
        }
    }

    fn plan(state: &mut Self::State<'_>) {
        state.id = Value::Unknown;
        unknown_if_null(&mut state.enable_usenet);
        unknown_if_null(&mut state.enable_torrent);
        unknown_if_null(&mut state.bypass_if_highest_quality);
        unknown_if_null(&mut state.usenet_delay);
        unknown_if_null(&mut state.torrent_delay);
        unknown_if_null(&mut state.order);
        unknown_if_null(&mut state.preferred_protocol);
        unknown_if_null(&mut state.tags);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> model::DelayProfile {
        model::DelayProfile {
            id: 2,
            enable_usenet: true,
            enable_torrent: false,
            bypass_if_highest_quality: true,
            usenet_delay: 60,
            torrent_delay: 0,
            order: 1,
            preferred_protocol: "usenet".to_owned(),
            tags: vec![1, 2],
        }
    }

    #[test]
    fn mapping() {
        let mut state = DelayProfileState::default();
        DelayProfile::write(&mut state, profile());
        assert_eq!(state.tags, number_set([1, 2]));
        assert_eq!(DelayProfile::to_model(&state), profile());
    }

    #[test]
    fn plan_leaves_no_null() {
        let mut state = DelayProfileState {
            usenet_delay: Value::Value(30),
            ..Default::default()
        };
        DelayProfile::plan(&mut state);
        assert!(state.id.is_unknown());
        assert_eq!(state.usenet_delay, Value::Value(30));
        assert!(state.enable_torrent.is_unknown());
        assert!(state.preferred_protocol.is_unknown());
        assert!(state.tags.is_unknown());
    }

    #[test]
    fn lookup_by_id() {
        let state = DelayProfileState {
            id: Value::Value(2),
            ..Default::default()
        };
        assert!(DelayProfile::matches(&state, &profile()));
        assert!(!DelayProfile::matches(&DelayProfileState::default(), &profile()));
    }
}
