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

//! Download clients
//!
//! Every download client shares the same API model, and differs by its `fields` list.
//! The generic resource lets the practitioner pick the implementation, while the specific
//! resources fix it and only expose the fields meaningful for their implementation.

use tf_provider::schema::{Attribute, AttributeType};
use tf_provider::value::ValueString;

use crate::attributes::{computed, required};
use crate::utils::string;

/// Identifiers selecting the implementation of a download client on the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub implementation: &'static str,
    pub config_contract: &'static str,
    pub protocol: &'static str,
}

impl Identity {
    /// Attribute holding an identifier, set by the practitioner unless the identity is fixed
    pub(crate) fn attribute(fixed: Option<Self>, description: &str) -> Attribute {
        match fixed {
            Some(_) => computed(AttributeType::String, description),
            None => required(AttributeType::String, description),
        }
    }

    /// Fixed identity, or the one configured in the state
    pub(crate) fn resolve(
        fixed: Option<Self>,
        implementation: &ValueString<'_>,
        config_contract: &ValueString<'_>,
        protocol: &ValueString<'_>,
    ) -> (String, String, String) {
        match fixed {
            Some(identity) => (
                identity.implementation.to_owned(),
                identity.config_contract.to_owned(),
                identity.protocol.to_owned(),
            ),
            None => (string(implementation), string(config_contract), string(protocol)),
        }
    }
}

/// Per kind of field: Terraform type, schema, and translation from and to the API
macro_rules! field {
    (@type string, $lt:lifetime) => { tf_provider::value::ValueString<$lt> };
    (@type secret, $lt:lifetime) => { tf_provider::value::ValueString<$lt> };
    (@type int, $lt:lifetime) => { tf_provider::value::ValueNumber };
    (@type bool, $lt:lifetime) => { tf_provider::value::ValueBool };
    (@type int_set, $lt:lifetime) => { tf_provider::value::ValueSet<tf_provider::value::ValueNumber> };

    (@attribute string, $doc:literal) => {
        $crate::attributes::optional(tf_provider::schema::AttributeType::String, $doc)
    };
    (@attribute secret, $doc:literal) => {
        $crate::attributes::sensitive($crate::attributes::optional(
            tf_provider::schema::AttributeType::String,
            $doc,
        ))
    };
    (@attribute int, $doc:literal) => {
        $crate::attributes::optional(tf_provider::schema::AttributeType::Number, $doc)
    };
    (@attribute bool, $doc:literal) => {
        $crate::attributes::optional(tf_provider::schema::AttributeType::Bool, $doc)
    };
    (@attribute int_set, $doc:literal) => {
        $crate::attributes::optional($crate::attributes::number_set_type(), $doc)
    };

    (@write $writer:ident, secret, $api:literal, $value:expr) => { $writer.string($api, $value) };
    (@write $writer:ident, $kind:ident, $api:literal, $value:expr) => { $writer.$kind($api, $value) };

    (@read $reader:ident, secret, $api:literal, $state:ident.$field:ident) => {
        $crate::utils::write_sensitive(&mut $state.$field, $reader.string($api))
    };
    (@read $reader:ident, $kind:ident, $api:literal, $state:ident.$field:ident) => {
        $state.$field = $reader.$kind($api)
    };
}

/// Declare a download client entity, its state, and its translation
macro_rules! download_client {
    (
        $(#[$meta:meta])*
        $entity:ident($state:ident) {
            name: $name:literal,
            description: $description:expr,
            identity: $identity:expr,
            fields: {
                $($field:ident: $kind:ident($api:literal), $doc:literal;)*
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $entity;

        #[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
        pub struct $state<'a> {
            pub id: tf_provider::value::ValueNumber,
            #[serde(borrow = "'a")]
            pub name: tf_provider::value::ValueString<'a>,
            pub enable: tf_provider::value::ValueBool,
            pub priority: tf_provider::value::ValueNumber,
            pub remove_completed_downloads: tf_provider::value::ValueBool,
            pub remove_failed_downloads: tf_provider::value::ValueBool,
            pub implementation: tf_provider::value::ValueString<'a>,
            pub config_contract: tf_provider::value::ValueString<'a>,
            pub protocol: tf_provider::value::ValueString<'a>,
            pub tags: tf_provider::value::ValueSet<tf_provider::value::ValueNumber>,
            $(pub $field: field!(@type $kind, 'a),)*
        }

        impl $entity {
            const IDENTITY: Option<$crate::download_client::Identity> = $identity;
        }

        impl $crate::entity::Entity for $entity {
            const NAME: &'static str = $name;
            const DESCRIPTION: &'static str = $description;

            type State<'a> = $state<'a>;
            type Model = sonarr_client::model::DownloadClient;

            fn attributes() -> std::collections::HashMap<String, tf_provider::schema::Attribute> {
                use tf_provider::map;
                use tf_provider::schema::AttributeType;
                use $crate::attributes::{id, optional, required, tags};
                use $crate::download_client::Identity;

                let mut attributes: std::collections::HashMap<String, tf_provider::schema::Attribute> = map! {
                    "id" => id("Download Client"),
                    "name" => required(AttributeType::String, "Download Client name."),
                    "enable" => optional(AttributeType::Bool, "Enable flag."),
                    "priority" => optional(AttributeType::Number, "Priority."),
                    "remove_completed_downloads" => optional(AttributeType::Bool, "Remove completed downloads flag."),
                    "remove_failed_downloads" => optional(AttributeType::Bool, "Remove failed downloads flag."),
                    "implementation" => Identity::attribute(Self::IDENTITY, "Download Client implementation name."),
                    "config_contract" => Identity::attribute(Self::IDENTITY, "Download Client configuration template."),
                    "protocol" => Identity::attribute(Self::IDENTITY, "Protocol. Valid values are `usenet` and `torrent`."),
                    "tags" => tags(),
                };
                $(attributes.insert(stringify!($field).to_owned(), field!(@attribute $kind, $doc));)*
                attributes
            }

            fn id(state: &Self::State<'_>) -> Option<i64> {
                state.id.as_ref_option().copied()
            }

            fn set_id(state: &mut Self::State<'_>, id: i64) {
                state.id = tf_provider::value::Value::Value(id);
            }

            fn write(state: &mut Self::State<'_>, model: Self::Model) {
                use tf_provider::value::Value;

                state.id = Value::Value(model.id);
                state.name = model.name.into();
                state.enable = Value::Value(model.enable);
                state.priority = Value::Value(model.priority);
                state.remove_completed_downloads = Value::Value(model.remove_completed_downloads);
                state.remove_failed_downloads = Value::Value(model.remove_failed_downloads);
                state.implementation = model.implementation.into();
                state.config_contract = model.config_contract.into();
                state.protocol = model.protocol.into();
                state.tags = $crate::utils::number_set(model.tags);

                let fields = $crate::fields::FieldsReader::new(model.fields);
                $(field!(@read fields, $kind, $api, state.$field);)*
            }
        }

        impl $crate::entity::ManagedEntity for $entity {
            fn to_model(state: &Self::State<'_>) -> Self::Model {
                use $crate::utils::{boolean, number, numbers, string};

                let (implementation, config_contract, protocol) =
                    $crate::download_client::Identity::resolve(
                        Self::IDENTITY,
                        &state.implementation,
                        &state.config_contract,
                        &state.protocol,
                    );

                let writer = $crate::fields::FieldsWriter::new();
                $(let writer = field!(@write writer, $kind, $api, &state.$field);)*

                sonarr_client::model::DownloadClient {
                    id: number(&state.id),
                    name: string(&state.name),
                    enable: boolean(&state.enable),
                    priority: number(&state.priority),
                    remove_completed_downloads: boolean(&state.remove_completed_downloads),
                    remove_failed_downloads: boolean(&state.remove_failed_downloads),
                    implementation,
                    config_contract,
                    protocol,
                    tags: numbers(&state.tags),
                    fields: writer.into_inner(),
                }
            }

            fn plan(state: &mut Self::State<'_>) {
                use tf_provider::value::Value;
                use $crate::utils::unknown_if_null;

                state.id = Value::Unknown;
                if let Some(identity) = Self::IDENTITY {
                    state.implementation = identity.implementation.into();
                    state.config_contract = identity.config_contract.into();
                    state.protocol = identity.protocol.into();
                }
                unknown_if_null(&mut state.enable);
                unknown_if_null(&mut state.priority);
                unknown_if_null(&mut state.remove_completed_downloads);
                unknown_if_null(&mut state.remove_failed_downloads);
                unknown_if_null(&mut state.tags);
                $(unknown_if_null(&mut state.$field);)*
            }
        }
    };
}

mod generic;
mod qbittorrent;
mod sabnzbd;
mod torrent_download_station;
mod transmission;

pub use generic::{DownloadClient, DownloadClientState};
pub use qbittorrent::{DownloadClientQbittorrent, DownloadClientQbittorrentState};
pub use sabnzbd::{DownloadClientSabnzbd, DownloadClientSabnzbdState};
pub use torrent_download_station::{
    DownloadClientTorrentDownloadStation, DownloadClientTorrentDownloadStationState,
};
pub use transmission::{DownloadClientTransmission, DownloadClientTransmissionState};
