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

//! Singleton settings
//!
//! Settings always exist on the server: creating them updates them, and destroying them only
//! removes them from the Terraform state. Every attribute is required so that applying a
//! resource never resets settings to zero values.

mod indexer_config;
mod media_management;
mod naming;

pub use indexer_config::{IndexerConfig, IndexerConfigState};
pub use media_management::{MediaManagement, MediaManagementState};
pub use naming::{Naming, NamingState};
