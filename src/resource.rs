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

use std::fmt::Debug;
use std::marker::PhantomData;

use async_trait::async_trait;
use tf_provider::schema::{Block, Description, Schema};
use tf_provider::value::ValueEmpty;
use tf_provider::{AttributePath, Diagnostics, Resource};
use tracing::{trace, warn};

use crate::client::ClientHandle;
use crate::entity::{EntityKind, ManagedEntity, SETTINGS_ID};
use crate::utils::{client_error, parse_import_id, RESOURCE_NOT_FOUND};

/// Terraform resource managing entities of kind `E`
pub struct ApiResource<E> {
    client: ClientHandle,
    entity: PhantomData<fn() -> E>,
}

impl<E> ApiResource<E> {
    pub fn new(client: ClientHandle) -> Self {
        Self {
            client,
            entity: PhantomData,
        }
    }
}

impl<E> Debug for ApiResource<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiResource")
            .field("client", &self.client)
            .field("entity", &std::any::type_name::<E>())
            .finish()
    }
}

impl<E: ManagedEntity> ApiResource<E> {
    /// ID targeted by an operation on an existing entity
    fn target(diags: &mut Diagnostics, action: &str, state: &E::State<'_>) -> Option<i64> {
        match (E::id(state), E::KIND) {
            (Some(id), _) => Some(id),
            (None, EntityKind::Settings) => Some(SETTINGS_ID),
            (None, EntityKind::Collection) => {
                diags.error(
                    "Missing ID",
                    format!("Unable to {action} {}: the ID is not known.", E::NAME),
                    AttributePath::new("id"),
                );
                None
            }
        }
    }
}

#[async_trait]
impl<E: ManagedEntity> Resource for ApiResource<E> {
    type State<'a> = E::State<'a>;
    type PrivateState<'a> = ValueEmpty;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes: E::attributes(),
                description: Description::markdown(E::DESCRIPTION),
                ..Default::default()
            },
        })
    }

    async fn validate<'a>(&self, _diags: &mut Diagnostics, _config: Self::State<'a>) -> Option<()> {
        Some(())
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let client = self.client.get(diags)?;
        let id = Self::target(diags, "read", &state)?;

        match E::fetch(&client, id).await {
            Ok(model) => {
                let mut state = state;
                E::write(&mut state, model);
                trace!("read {}: {}", E::NAME, id);
                Some((state, private_state))
            }
            // Deleted outside of Terraform: forget it so that it is planned for creation again
            Err(err) if err.is_not_found() => {
                warn!("{} {} not found, removing it from the state", E::NAME, id);
                diags.root_warning(
                    RESOURCE_NOT_FOUND,
                    format!("Unable to find {} {}, removing it from the state.", E::NAME, id),
                );
                None
            }
            Err(err) => {
                client_error(diags, "read", E::NAME, err);
                None
            }
        }
    }

    async fn plan_create<'a>(
        &self,
        _diags: &mut Diagnostics,
        proposed_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let mut state = proposed_state;
        E::plan(&mut state);
        Some((state, Default::default()))
    }

    async fn plan_update<'a>(
        &self,
        _diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        proposed_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>, Vec<AttributePath>)> {
        let trigger_replace = E::requires_replace(&prior_state, &proposed_state);
        Some((proposed_state, prior_private_state, trigger_replace))
    }

    async fn plan_destroy<'a>(
        &self,
        _diags: &mut Diagnostics,
        _prior_state: Self::State<'a>,
        prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::PrivateState<'a>> {
        Some(prior_private_state)
    }

    async fn create<'a>(
        &self,
        diags: &mut Diagnostics,
        planned_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        planned_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let client = self.client.get(diags)?;
        let model = E::to_model(&planned_state);

        match E::create(&client, model).await {
            Ok(model) => {
                let mut state = planned_state;
                E::write(&mut state, model);
                trace!("created {}: {:?}", E::NAME, E::id(&state));
                Some((state, planned_private_state))
            }
            Err(err) => {
                client_error(diags, "create", E::NAME, err);
                None
            }
        }
    }

    async fn update<'a>(
        &self,
        diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        planned_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        planned_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let client = self.client.get(diags)?;
        let id = Self::target(diags, "update", &prior_state)?;

        let mut state = planned_state;
        E::set_id(&mut state, id);
        let model = E::to_model(&state);

        match E::update(&client, model).await {
            Ok(model) => {
                E::write(&mut state, model);
                trace!("updated {}: {}", E::NAME, id);
                Some((state, planned_private_state))
            }
            Err(err) => {
                client_error(diags, "update", E::NAME, err);
                None
            }
        }
    }

    async fn destroy<'a>(
        &self,
        diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        _planned_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<()> {
        let client = self.client.get(diags)?;
        let id = Self::target(diags, "delete", &prior_state)?;

        match E::delete(&client, id).await {
            Ok(()) => {
                trace!("deleted {}: {}", E::NAME, id);
                Some(())
            }
            Err(err) => {
                client_error(diags, "delete", E::NAME, err);
                None
            }
        }
    }

    async fn import<'a>(
        &self,
        diags: &mut Diagnostics,
        id: String,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let id = parse_import_id(diags, &id)?;
        let mut state: Self::State<'a> = Default::default();
        E::set_id(&mut state, id);
        trace!("imported {}: {}", E::NAME, id);
        Some((state, Default::default()))
    }
}
