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

use std::borrow::Cow;
use std::fmt::Debug;
use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::IgnoredAny;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};
use tf_provider::schema::{Attribute, AttributeType, Block, Description, Schema};
use tf_provider::value::{Value, ValueEmpty, ValueList, ValueString};
use tf_provider::{map, DataSource, Diagnostics};
use tracing::trace;

use crate::attributes::{computed, object, read_only};
use crate::client::ClientHandle;
use crate::entity::{Entity, Searchable};
use crate::utils::{client_error, DATA_SOURCE_ERROR};

macro_rules! data_source {
    ($name:ident, $bound:ident) => {
        pub struct $name<E> {
            client: ClientHandle,
            entity: PhantomData<fn() -> E>,
        }

        impl<E: $bound> $name<E> {
            pub fn new(client: ClientHandle) -> Self {
                Self {
                    client,
                    entity: PhantomData,
                }
            }
        }

        impl<E> Debug for $name<E> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("client", &self.client)
                    .field("entity", &std::any::type_name::<E>())
                    .finish()
            }
        }
    };
}

data_source!(EntityDataSource, Searchable);
data_source!(EntitiesDataSource, Searchable);
data_source!(SettingsDataSource, Entity);

fn schema(description: String, attributes: std::collections::HashMap<String, Attribute>) -> Schema {
    Schema {
        version: 1,
        block: Block {
            version: 1,
            attributes,
            description: Description::markdown(description),
            ..Default::default()
        },
    }
}

/// Single entity found by its lookup attribute
#[async_trait]
impl<E: Searchable> DataSource for EntityDataSource<E> {
    type State<'a> = E::State<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(schema(
            format!("Single {} found by `{}`.", E::NAME, E::LOOKUP),
            read_only(E::attributes(), Some(E::LOOKUP)),
        ))
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let client = self.client.get(diags)?;
        let models = match E::fetch_all(&client).await {
            Ok(models) => models,
            Err(err) => {
                client_error(diags, "read", E::NAME, err);
                return None;
            }
        };

        let Some(model) = models.into_iter().find(|model| E::matches(&config, model)) else {
            diags.root_error(
                DATA_SOURCE_ERROR,
                format!(
                    "Unable to find {}, got error: no {} with the requested {}",
                    E::NAME,
                    E::NAME,
                    E::LOOKUP
                ),
            );
            return None;
        };

        let mut state = config;
        E::write(&mut state, model);
        trace!("read {}", E::NAME);
        Some(state)
    }
}

/// Singleton settings entity
#[async_trait]
impl<E: Entity> DataSource for SettingsDataSource<E> {
    type State<'a> = E::State<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(schema(
            E::DESCRIPTION.to_owned(),
            read_only(E::attributes(), None),
        ))
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let client = self.client.get(diags)?;
        let mut models = match E::fetch_all(&client).await {
            Ok(models) => models,
            Err(err) => {
                client_error(diags, "read", E::NAME, err);
                return None;
            }
        };

        let Some(model) = models.pop() else {
            diags.root_error(
                DATA_SOURCE_ERROR,
                format!("Unable to find {}, got error: empty response", E::NAME),
            );
            return None;
        };

        let mut state = config;
        E::write(&mut state, model);
        trace!("read {}", E::NAME);
        Some(state)
    }
}

/// Record of the plural data sources
///
/// The list attribute is named after [`Searchable::PLURAL`], so serialization is written by hand.
pub struct ListState<'a, E: Entity> {
    pub id: ValueString<'a>,
    pub items: ValueList<E::State<'a>>,
}

impl<'a, E: Entity> Default for ListState<'a, E> {
    fn default() -> Self {
        Self {
            id: Value::Null,
            items: Value::Null,
        }
    }
}

impl<'a, E: Searchable> Serialize for ListState<'a, E> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry(E::PLURAL, &self.items)?;
        map.end()
    }
}

/// Every attribute of the plural data sources is computed, so the configuration carries nothing
impl<'de, 'a, E: Entity> Deserialize<'de> for ListState<'a, E> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer)?;
        Ok(Self::default())
    }
}

/// Every entity of a kind
#[async_trait]
impl<E: Searchable> DataSource for EntitiesDataSource<E> {
    type State<'a> = ListState<'a, E>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        let attributes = read_only(E::attributes(), None);
        let sensitive = attributes.values().any(|attribute| attribute.sensitive);
        let items = Attribute {
            sensitive,
            ..computed(
                AttributeType::List(Box::new(object(&attributes))),
                &format!("{} list.", E::NAME),
            )
        };

        Some(schema(
            format!("List all available {}.", E::PLURAL),
            map! {
                "id" => computed(AttributeType::String, "Number of items."),
                E::PLURAL => items,
            },
        ))
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        _config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let client = self.client.get(diags)?;
        let models = match E::fetch_all(&client).await {
            Ok(models) => models,
            Err(err) => {
                client_error(diags, "read", E::NAME, err);
                return None;
            }
        };

        let count = models.len();
        let items = models
            .into_iter()
            .map(|model| {
                let mut item: E::State<'a> = Default::default();
                E::write(&mut item, model);
                item
            })
            .collect();

        trace!("read {} {}", count, E::PLURAL);
        Some(ListState {
            id: Value::Value(Cow::Owned(count.to_string())),
            items: Value::Value(items),
        })
    }
}
