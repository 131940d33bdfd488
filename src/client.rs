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

use std::sync::{Arc, RwLock};

use sonarr_client::Client;
use tf_provider::Diagnostics;

/// Client shared between the provider and all its resources and data sources
///
/// Resources are instantiated before the provider is configured,
/// so the client is filled in later by [`crate::SonarrProvider`].
#[derive(Debug, Clone, Default)]
pub struct ClientHandle {
    inner: Arc<RwLock<Option<Client>>>,
}

impl ClientHandle {
    /// Create a handle that is already configured
    pub fn new(client: Client) -> Self {
        let handle = Self::default();
        handle.set(client);
        handle
    }

    /// Replace the client
    pub fn set(&self, client: Client) {
        match self.inner.write() {
            Ok(mut guard) => *guard = Some(client),
            Err(poisoned) => *poisoned.into_inner() = Some(client),
        }
    }

    /// Get the client, or report that the provider is not configured
    pub fn get(&self, diags: &mut Diagnostics) -> Option<Client> {
        let client = self.inner.read().ok().and_then(|guard| guard.clone());
        if client.is_none() {
            diags.root_error(
                "Unconfigured Client",
                "The provider has not been configured with a Sonarr URL and API key.",
            );
        }
        client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_handle_reports_error() {
        let handle = ClientHandle::default();
        let mut diags = Diagnostics::default();
        assert!(handle.get(&mut diags).is_none());
        assert_eq!(diags.errors.len(), 1);
        assert_eq!(diags.errors[0].summary, "Unconfigured Client");
    }

    #[test]
    fn clones_share_client() {
        let handle = ClientHandle::default();
        let clone = handle.clone();
        handle.set(Client::new("http://localhost:8989", "key").unwrap());

        let mut diags = Diagnostics::default();
        let client = clone.get(&mut diags).unwrap();
        assert!(diags.errors.is_empty());
        assert_eq!(client.base_url().as_str(), "http://localhost:8989/");
    }
}
