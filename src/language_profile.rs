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
use sonarr_client::{model, Client, Error, Result};
use tf_provider::map;
use tf_provider::schema::{Attribute, AttributeType};
use tf_provider::value::{Value, ValueBool, ValueNumber, ValueSet, ValueString};

use crate::attributes::{id, optional, required, string_set_type};
use crate::entity::{Entity, ManagedEntity, Searchable};
use crate::utils::{boolean, number, string, string_set, strings, unknown_if_null};

/// Languages that are wanted for a series
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageProfile;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageProfileState<'a> {
    pub id: ValueNumber,
    #[serde(borrow = "'a")]
    pub name: ValueString<'a>,
    pub upgrade_allowed: ValueBool,
    pub cutoff_language: ValueString<'a>,
    pub languages: ValueSet<ValueString<'a>>,
}

/// Turn language names into the languages known by the server
///
/// Every language of the server is listed, and only the requested ones are allowed.
fn resolve(
    mut profile: model::LanguageProfile,
    schema: model::LanguageProfile,
) -> Result<model::LanguageProfile> {
    let known = |name: &str| {
        schema
            .languages
            .iter()
            .find(|item| item.language.name == name)
            .map(|item| item.language.clone())
            .ok_or_else(|| Error::Unknown {
                kind: "language",
                name: name.to_owned(),
            })
    };

    for item in &profile.languages {
        known(&item.language.name)?;
    }
    profile.cutoff = known(&profile.cutoff.name)?;

    let requested: Vec<String> = profile
        .languages
        .drain(..)
        .map(|item| item.language.name)
        .collect();
    profile.languages = schema
        .languages
        .iter()
        .map(|item| model::LanguageItem {
            language: item.language.clone(),
            allowed: requested.contains(&item.language.name),
        })
        .collect();
    Ok(profile)
}

impl Entity for LanguageProfile {
    const NAME: &'static str = "language_profile";
    const DESCRIPTION: &'static str = "<!-- subcategory:Profiles -->Language Profile resource.\n\
        For more information refer to [Language Profiles](https://wiki.servarr.com/sonarr/settings#language-profiles) documentation.";

    type State<'a> = LanguageProfileState<'a>;
    type Model = model::LanguageProfile;

    fn attributes() -> HashMap<String, Attribute> {
        map! {
            "id" => id("Language Profile"),
            "name" => required(AttributeType::String, "Language Profile name."),
            "upgrade_allowed" => optional(AttributeType::Bool, "Upgrade allowed flag."),
            "cutoff_language" => required(AttributeType::String, "Name of language to which cutoff."),
            "languages" => required(string_set_type(), "Names of the allowed languages."),
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
        state.cutoff_language = model.cutoff.name.into();
        state.languages = string_set(
            model
                .languages
                .into_iter()
                .filter(|item| item.allowed)
                .map(|item| item.language.name),
        );
    }
}

impl Searchable for LanguageProfile {
    const PLURAL: &'static str = "language_profiles";
    const LOOKUP: &'static str = "name";

    fn matches(state: &Self::State<'_>, model: &Self::Model) -> bool {
        state.name.as_deref_option() == Some(model.name.as_str())
    }
}

#[async_trait]
impl ManagedEntity for LanguageProfile {
    /// Languages are only known by name, their IDs are resolved when the profile is sent
    fn to_model(state: &Self::State<'_>) -> Self::Model {
        let language = |name: String| model::Language { id: 0, name };

        model::LanguageProfile {
            id: number(&state.id),
            name: string(&state.name),
            upgrade_allowed: boolean(&state.upgrade_allowed),
            cutoff: language(string(&state.cutoff_language)),
            languages: strings(&state.languages)
                .into_iter()
                .map(|name| model::LanguageItem {
                    language: language(name),
                    allowed: true,
                })
                .collect(),
        }
    }

    fn plan(state: &mut Self::State<'_>) {
        state.id = Value::Unknown;
        unknown_if_null(&mut state.upgrade_allowed);
    }

    async fn create(client: &Client, model: Self::Model) -> Result<Self::Model> {
        let schema = client.schema().await?;
        client.create(&resolve(model, schema)?).await
    }

    async fn update(client: &Client, model: Self::Model) -> Result<Self::Model> {
        let schema = client.schema().await?;
        client.update(&resolve(model, schema)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn language(id: i64, name: &str) -> model::Language {
        model::Language {
            id,
            name: name.to_owned(),
        }
    }

    fn schema() -> model::LanguageProfile {
        model::LanguageProfile {
            languages: [(1, "English"), (2, "French"), (8, "Japanese")]
                .into_iter()
                .map(|(id, name)| model::LanguageItem {
                    language: language(id, name),
                    allowed: false,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn mapping() {
        let profile = model::LanguageProfile {
            id: 1,
            name: "Anime".to_owned(),
            upgrade_allowed: true,
            cutoff: language(8, "Japanese"),
            languages: vec![
                model::LanguageItem {
                    language: language(1, "English"),
                    allowed: true,
                },
                model::LanguageItem {
                    language: language(2, "French"),
                    allowed: false,
                },
                model::LanguageItem {
                    language: language(8, "Japanese"),
                    allowed: true,
                },
            ],
        };

        let mut state = LanguageProfileState::default();
        LanguageProfile::write(&mut state, profile.clone());
        assert_eq!(state.cutoff_language, ValueString::from("Japanese"));
        assert_eq!(
            strings(&state.languages),
            vec!["English".to_owned(), "Japanese".to_owned()]
        );
        assert!(LanguageProfile::matches(&state, &profile));

        let resolved = resolve(LanguageProfile::to_model(&state), schema()).unwrap();
        assert_eq!(resolved, profile);
    }

    #[test]
    fn unknown_language_is_rejected() {
        let state = LanguageProfileState {
            name: ValueString::from("Klingon"),
            cutoff_language: ValueString::from("English"),
            languages: string_set(["Klingon".to_owned()]),
            ..Default::default()
        };

        let err = resolve(LanguageProfile::to_model(&state), schema()).unwrap_err();
        assert_eq!(err.to_string(), "unknown language `Klingon`");
    }
}
