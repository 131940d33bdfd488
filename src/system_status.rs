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
use sonarr_client::model;
use tf_provider::map;
use tf_provider::schema::{Attribute, AttributeType, Block, Description, Schema};
use tf_provider::value::{Value, ValueBool, ValueEmpty, ValueNumber, ValueString};
use tf_provider::{DataSource, Diagnostics};
use tracing::trace;

use crate::attributes::computed;
use crate::client::ClientHandle;
use crate::utils::client_error;

const NAME: &str = "system_status";

/// Facts about the running server
#[derive(Debug, Clone)]
pub struct SystemStatusDataSource {
    client: ClientHandle,
}

impl SystemStatusDataSource {
    pub fn new(client: ClientHandle) -> Self {
        Self { client }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemStatusState<'a> {
    pub id: ValueNumber,
    #[serde(borrow = "'a")]
    pub app_name: ValueString<'a>,
    pub instance_name: ValueString<'a>,
    pub version: ValueString<'a>,
    pub build_time: ValueString<'a>,
    pub start_time: ValueString<'a>,
    pub is_debug: ValueBool,
    pub is_production: ValueBool,
    pub is_admin: ValueBool,
    pub is_user_interactive: ValueBool,
    pub is_docker: ValueBool,
    pub is_linux: ValueBool,
    pub is_osx: ValueBool,
    pub is_windows: ValueBool,
    pub startup_path: ValueString<'a>,
    pub app_data: ValueString<'a>,
    pub os_name: ValueString<'a>,
    pub os_version: ValueString<'a>,
    pub mode: ValueString<'a>,
    pub branch: ValueString<'a>,
    pub authentication: ValueString<'a>,
    pub sqlite_version: ValueString<'a>,
    pub migration_version: ValueNumber,
    pub url_base: ValueString<'a>,
    pub runtime_name: ValueString<'a>,
    pub runtime_version: ValueString<'a>,
    pub package_update_mechanism: ValueString<'a>,
}

impl<'a> From<model::SystemStatus> for SystemStatusState<'a> {
    fn from(status: model::SystemStatus) -> Self {
        Self {
            id: Value::Value(1),
            app_name: status.app_name.into(),
            instance_name: status.instance_name.into(),
            version: status.version.into(),
            build_time: status.build_time.into(),
            start_time: status.start_time.into(),
            is_debug: Value::Value(status.is_debug),
            is_production: Value::Value(status.is_production),
            is_admin: Value::Value(status.is_admin),
            is_user_interactive: Value::Value(status.is_user_interactive),
            is_docker: Value::Value(status.is_docker),
            is_linux: Value::Value(status.is_linux),
            is_osx: Value::Value(status.is_osx),
            is_windows: Value::Value(status.is_windows),
            startup_path: status.startup_path.into(),
            app_data: status.app_data.into(),
            os_name: status.os_name.into(),
            os_version: status.os_version.into(),
            mode: status.mode.into(),
            branch: status.branch.into(),
            authentication: status.authentication.into(),
            sqlite_version: status.sqlite_version.into(),
            migration_version: Value::Value(status.migration_version),
            url_base: status.url_base.into(),
            runtime_name: status.runtime_name.into(),
            runtime_version: status.runtime_version.into(),
            package_update_mechanism: status.package_update_mechanism.into(),
        }
    }
}

fn attributes() -> HashMap<String, Attribute> {
    let string = |description| computed(AttributeType::String, description);
    let flag = |description| computed(AttributeType::Bool, description);

    map! {
        "id" => computed(AttributeType::Number, "Status ID."),
        "app_name" => string("App name."),
        "instance_name" => string("Instance name."),
        "version" => string("Version."),
        "build_time" => string("Build time."),
        "start_time" => string("Start time."),
        "is_debug" => flag("Is debug flag."),
        "is_production" => flag("Is production flag."),
        "is_admin" => flag("Is admin flag."),
        "is_user_interactive" => flag("Is user interactive flag."),
        "is_docker" => flag("Is docker flag."),
        "is_linux" => flag("Is linux flag."),
        "is_osx" => flag("Is osx flag."),
        "is_windows" => flag("Is windows flag."),
        "startup_path" => string("Startup path."),
        "app_data" => string("App data folder."),
        "os_name" => string("OS name."),
        "os_version" => string("OS version."),
        "mode" => string("Mode."),
        "branch" => string("Branch."),
        "authentication" => string("Authentication."),
        "sqlite_version" => string("SQLite version."),
        "migration_version" => computed(AttributeType::Number, "Migration version."),
        "url_base" => string("Base URL."),
        "runtime_name" => string("Runtime name."),
        "runtime_version" => string("Runtime version."),
        "package_update_mechanism" => string("Package update mechanism."),
    }
}

#[async_trait]
impl DataSource for SystemStatusDataSource {
    type State<'a> = SystemStatusState<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes: attributes(),
                description: Description::markdown(
                    "<!-- subcategory:Status -->[System Status](https://wiki.servarr.com/sonarr/system#status).",
                ),
                ..Default::default()
            },
        })
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        _config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let client = self.client.get(diags)?;
        match client.system_status().await {
            Ok(status) => {
                trace!("read {}", NAME);
                Some(status.into())
            }
            Err(err) => {
                client_error(diags, "read", NAME, err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_attribute_is_mapped() {
        let state = SystemStatusState::from(model::SystemStatus {
            version: "3.0.10.1567".to_owned(),
            is_docker: true,
            ..Default::default()
        });
        assert_eq!(state.version, ValueString::from("3.0.10.1567"));
        assert_eq!(state.is_docker, Value::Value(true));

        let serde_json::Value::Object(fields) = serde_json::to_value(&state).unwrap() else {
            panic!("state is not an object");
        };
        let mut fields: Vec<_> = fields.keys().cloned().collect();
        let mut attributes: Vec<_> = attributes().into_keys().collect();
        fields.sort();
        attributes.sort();
        assert_eq!(fields, attributes);
    }
}
