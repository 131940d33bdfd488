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
use sonarr_client::{Client, Endpoint, Result};
use tf_provider::schema::Attribute;
use tf_provider::AttributePath;

/// How an entity is stored by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Entities are created, read, updated and deleted by ID
    Collection,
    /// A single entity always exists, and can only be read and updated
    Settings,
}

/// ID of settings entities
pub(crate) const SETTINGS_ID: i64 = 1;

/// Mapping between a Terraform record and an API model
///
/// This is the read side of the mapping, shared by resources and data sources.
#[async_trait]
pub trait Entity: Send + Sync + 'static {
    /// Name of the entity, prefixed by the provider name to get the Terraform type name
    const NAME: &'static str;
    /// Markdown description of the entity
    const DESCRIPTION: &'static str;
    /// How the entity is stored by the server
    const KIND: EntityKind = EntityKind::Collection;

    /// Terraform record
    type State<'a>: Serialize + Deserialize<'a> + Default + Clone + Send + Sync;
    /// API model
    type Model: Endpoint;

    /// Attributes of the record, as seen by the resource
    fn attributes() -> HashMap<String, Attribute>;

    /// ID of the entity, if known
    fn id(state: &Self::State<'_>) -> Option<i64>;

    /// Set the ID of the entity
    fn set_id(state: &mut Self::State<'_>, id: i64);

    /// Copy the API model into the record
    ///
    /// Every attribute must be known after this call.
    fn write(state: &mut Self::State<'_>, model: Self::Model);

    /// Fetch a single entity
    async fn fetch(client: &Client, id: i64) -> Result<Self::Model> {
        match Self::KIND {
            EntityKind::Collection => client.get(id).await,
            EntityKind::Settings => client.get_settings().await,
        }
    }

    /// Fetch all the entities
    async fn fetch_all(client: &Client) -> Result<Vec<Self::Model>> {
        match Self::KIND {
            EntityKind::Collection => client.list().await,
            EntityKind::Settings => Ok(vec![client.get_settings().await?]),
        }
    }
}

/// Entity that can be looked up by a single attribute
pub trait Searchable: Entity {
    /// Name of the list attribute of the plural data source
    const PLURAL: &'static str;
    /// Attribute used to find a single entity
    const LOOKUP: &'static str;

    /// Check if the model matches the lookup attribute of the record
    fn matches(state: &Self::State<'_>, model: &Self::Model) -> bool;
}

/// Entity managed by a resource
///
/// This is the write side of the mapping.
#[async_trait]
pub trait ManagedEntity: Entity {
    /// Build the API model from the record
    fn to_model(state: &Self::State<'_>) -> Self::Model;

    /// Mark the attributes the server will compute as unknown
    ///
    /// Called when planning a creation, so that attributes left null by the practitioner
    /// can be filled with the server defaults.
    fn plan(state: &mut Self::State<'_>);

    /// Attributes whose modification requires the entity to be replaced
    fn requires_replace(prior: &Self::State<'_>, proposed: &Self::State<'_>) -> Vec<AttributePath> {
        _ = prior;
        _ = proposed;
        Vec::new()
    }

    /// Create the entity on the server
    async fn create(client: &Client, model: Self::Model) -> Result<Self::Model> {
        match Self::KIND {
            EntityKind::Collection => client.create(&model).await,
            EntityKind::Settings => client.update(&model).await,
        }
    }

    /// Replace the entity on the server
    async fn update(client: &Client, model: Self::Model) -> Result<Self::Model> {
        client.update(&model).await
    }

    /// Delete the entity from the server
    async fn delete(client: &Client, id: i64) -> Result<()> {
        match Self::KIND {
            EntityKind::Collection => client.delete::<Self::Model>(id).await,
            EntityKind::Settings => Ok(()),
        }
    }
}
