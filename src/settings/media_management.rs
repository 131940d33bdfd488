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
use tf_provider::value::{Value, ValueBool, ValueNumber, ValueString};

use crate::attributes::{id, required};
use crate::entity::{Entity, EntityKind, ManagedEntity, SETTINGS_ID};
use crate::utils::{boolean, number, string};

/// How episode files are imported, organized and deleted
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaManagement;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaManagementState<'a> {
    pub id: ValueNumber,
    pub unmonitor_previous_episodes: ValueBool,
    #[serde(borrow = "'a")]
    pub recycle_bin_path: ValueString<'a>,
    pub recycle_bin_days: ValueNumber,
    pub download_propers_repacks: ValueString<'a>,
    pub create_empty_folders: ValueBool,
    pub delete_empty_folders: ValueBool,
    pub file_date: ValueString<'a>,
    pub rescan_after_refresh: ValueString<'a>,
    pub set_permissions: ValueBool,
    pub chmod_folder: ValueString<'a>,
    pub chown_group: ValueString<'a>,
    pub episode_title_required: ValueString<'a>,
    pub skip_free_space_check: ValueBool,
    pub minimum_free_space: ValueNumber,
    pub hardlinks_copy: ValueBool,
    pub import_extra_files: ValueBool,
    pub extra_file_extensions: ValueString<'a>,
    pub enable_media_info: ValueBool,
}

impl Entity for MediaManagement {
    const NAME: &'static str = "media_management";
    const DESCRIPTION: &'static str = "<!-- subcategory:Media Management -->Media Management resource.\n\
        For more information refer to [Naming](https://wiki.servarr.com/sonarr/settings#file-management) documentation.";
    const KIND: EntityKind = EntityKind::Settings;

    type State<'a> = MediaManagementState<'a>;
    type Model = model::MediaManagement;

    fn attributes() -> HashMap<String, Attribute> {
        map! {
            "id" => id("Media Management"),
            "unmonitor_previous_episodes" => required(AttributeType::Bool, "Unmonitor deleted files."),
            "recycle_bin_path" => required(AttributeType::String, "Recycle bin absolute path."),
            "recycle_bin_days" => required(AttributeType::Number, "Recycle bin days of retention."),
            "download_propers_repacks" => required(
                AttributeType::String,
                "Download proper and repack policy. Valid inputs are: `preferAndUpgrade`, `doNotUpgrade` and `doNotPrefer`."
            ),
            "create_empty_folders" => required(AttributeType::Bool, "Create empty series directories."),
            "delete_empty_folders" => required(AttributeType::Bool, "Delete empty series directories."),
            "file_date" => required(AttributeType::String, "Define the file date modification. Valid inputs are: `none`, `localAirDate` and `utcAirDate`."),
            "rescan_after_refresh" => required(AttributeType::String, "Rescan after refresh. Valid inputs are: `always`, `afterManual` and `never`."),
            "set_permissions" => required(AttributeType::Bool, "Linux set permission flag."),
            "chmod_folder" => required(AttributeType::String, "Permission in linux format."),
            "chown_group" => required(AttributeType::String, "Group used for permission."),
            "episode_title_required" => required(AttributeType::String, "Episode title required. Valid inputs are: `always`, `bulkSeasonReleases` and `never`."),
            "skip_free_space_check" => required(AttributeType::Bool, "Skip free space check before importing."),
            "minimum_free_space" => required(AttributeType::Number, "Minimum free space in MB to allow import."),
            "hardlinks_copy" => required(AttributeType::Bool, "Use hardlinks instead of copy."),
            "import_extra_files" => required(AttributeType::Bool, "Import extra files. If enabled it will leverage `extra_file_extensions`."),
            "extra_file_extensions" => required(AttributeType::String, "Comma separated list of extra files to import (.nfo will be imported as .nfo-orig)."),
            "enable_media_info" => required(AttributeType::Bool, "Scan files details."),
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
        state.unmonitor_previous_episodes =
            Value::Value(model.auto_unmonitor_previously_downloaded_episodes);
        state.recycle_bin_path = model.recycle_bin.into();
        state.recycle_bin_days = Value::Value(model.recycle_bin_cleanup_days);
        state.download_propers_repacks = model.download_propers_and_repacks.into();
        state.create_empty_folders = Value::Value(model.create_empty_series_folders);
        state.delete_empty_folders = Value::Value(model.delete_empty_folders);
        state.file_date = model.file_date.into();
        state.rescan_after_refresh = model.rescan_after_refresh.into();
        state.set_permissions = Value::Value(model.set_permissions_linux);
        state.chmod_folder = model.chmod_folder.into();
        state.chown_group = model.chown_group.into();
        state.episode_title_required = model.episode_title_required.into();
        state.skip_free_space_check = Value::Value(model.skip_free_space_check_when_importing);
        state.minimum_free_space = Value::Value(model.minimum_free_space_when_importing);
        state.hardlinks_copy = Value::Value(model.copy_using_hardlinks);
        state.import_extra_files = Value::Value(model.import_extra_files);
        state.extra_file_extensions = model.extra_file_extensions.into();
        state.enable_media_info = Value::Value(model.enable_media_info);
    }
}

impl ManagedEntity for MediaManagement {
    fn to_model(state: &Self::State<'_>) -> Self::Model {
        model::MediaManagement {
            id: Self::id(state).unwrap_or(SETTINGS_ID),
            auto_unmonitor_previously_downloaded_episodes: boolean(
                &state.unmonitor_previous_episodes,
            ),
            recycle_bin: string(&state.recycle_bin_path),
            recycle_bin_cleanup_days: number(&state.recycle_bin_days),
            download_propers_and_repacks: string(&state.download_propers_repacks),
            create_empty_series_folders: boolean(&state.create_empty_folders),
            delete_empty_folders: boolean(&state.delete_empty_folders),
            file_date: string(&state.file_date),
            rescan_after_refresh: string(&state.rescan_after_refresh),
            set_permissions_linux: boolean(&state.set_permissions),
            chmod_folder: string(&state.chmod_folder),
            chown_group: string(&state.chown_group),
            episode_title_required: string(&state.episode_title_required),
            skip_free_space_check_when_importing: boolean(&state.skip_free_space_check),
            minimum_free_space_when_importing: number(&state.minimum_free_space),
            copy_using_hardlinks: boolean(&state.hardlinks_copy),
            import_extra_files: boolean(&state.import_extra_files),
            extra_file_extensions: string(&state.extra_file_extensions),
            enable_media_info: boolean(&state.enable_media_info),
        }
    }

    fn plan(state: &mut Self::State<'_>) {
        state.id = Value::Unknown;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping() {
        let settings = model::MediaManagement {
            id: 1,
            auto_unmonitor_previously_downloaded_episodes: true,
            recycle_bin: "/bin".to_owned(),
            recycle_bin_cleanup_days: 7,
            download_propers_and_repacks: "doNotPrefer".to_owned(),
            create_empty_series_folders: true,
            delete_empty_folders: true,
            file_date: "localAirDate".to_owned(),
            rescan_after_refresh: "always".to_owned(),
            set_permissions_linux: true,
            chmod_folder: "755".to_owned(),
            chown_group: "arrs".to_owned(),
            episode_title_required: "always".to_owned(),
            skip_free_space_check_when_importing: false,
            minimum_free_space_when_importing: 100,
            copy_using_hardlinks: true,
            import_extra_files: true,
            extra_file_extensions: "srt,info".to_owned(),
            enable_media_info: true,
        };

        let mut state = MediaManagementState::default();
        MediaManagement::write(&mut state, settings.clone());
        assert_eq!(state.recycle_bin_path, ValueString::from("/bin"));
        assert_eq!(MediaManagement::to_model(&state), settings);
    }
}
