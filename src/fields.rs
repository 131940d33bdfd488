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

//! Translation between the generic `fields` list of polymorphic entities and typed values

use std::borrow::Cow;
use std::collections::HashMap;

use serde_json::Value as Json;
use sonarr_client::model::Field;
use tf_provider::value::{Value, ValueBool, ValueNumber, ValueSet, ValueString};

use crate::utils::numbers;

/// Build a field list from Terraform values
///
/// Null and unknown values are skipped, so the server keeps its defaults for them.
#[derive(Debug, Default)]
pub(crate) struct FieldsWriter {
    fields: Vec<Field>,
}

impl FieldsWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn string(mut self, name: &str, value: &ValueString<'_>) -> Self {
        if let Some(value) = value.as_deref_option() {
            self.fields.push(Field::new(name, value));
        }
        self
    }

    pub(crate) fn int(mut self, name: &str, value: &ValueNumber) -> Self {
        if let Some(value) = value.as_ref_option() {
            self.fields.push(Field::new(name, *value));
        }
        self
    }

    pub(crate) fn bool(mut self, name: &str, value: &ValueBool) -> Self {
        if let Some(value) = value.as_ref_option() {
            self.fields.push(Field::new(name, *value));
        }
        self
    }

    pub(crate) fn int_set(mut self, name: &str, value: &ValueSet<ValueNumber>) -> Self {
        if value.is_value() {
            self.fields.push(Field::new(name, numbers(value)));
        }
        self
    }

    pub(crate) fn into_inner(self) -> Vec<Field> {
        self.fields
    }
}

/// Typed access to a field list returned by the server
#[derive(Debug, Default)]
pub(crate) struct FieldsReader {
    fields: HashMap<String, Json>,
}

impl FieldsReader {
    pub(crate) fn new(fields: Vec<Field>) -> Self {
        Self {
            fields: fields
                .into_iter()
                .filter_map(|field| Some((field.name, field.value?)))
                .collect(),
        }
    }

    fn get(&self, name: &str) -> Option<&Json> {
        self.fields.get(name).filter(|value| !value.is_null())
    }

    pub(crate) fn string<'a>(&self, name: &str) -> ValueString<'a> {
        match self.get(name) {
            Some(Json::String(value)) => Value::Value(Cow::Owned(value.clone())),
            Some(Json::Number(value)) => Value::Value(Cow::Owned(value.to_string())),
            Some(Json::Bool(value)) => Value::Value(Cow::Owned(value.to_string())),
            _ => Value::Null,
        }
    }

    pub(crate) fn int(&self, name: &str) -> ValueNumber {
        self.get(name).and_then(as_int).into()
    }

    pub(crate) fn bool(&self, name: &str) -> ValueBool {
        self.get(name).and_then(Json::as_bool).into()
    }

    pub(crate) fn int_set(&self, name: &str) -> ValueSet<ValueNumber> {
        match self.get(name) {
            Some(Json::Array(values)) => Value::Value(
                values
                    .iter()
                    .filter_map(as_int)
                    .map(Value::Value)
                    .collect(),
            ),
            _ => Value::Null,
        }
    }
}

/// Integer value, also accepting floats with an integral value
fn as_int(value: &Json) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|value| value.fract() == 0.0)
            .map(|value| value as i64)
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn writer_skips_unset_values() {
        let fields = FieldsWriter::new()
            .string("host", &ValueString::from("localhost"))
            .string("urlBase", &ValueString::Null)
            .int("port", &ValueNumber::Value(9091))
            .int("recentTvPriority", &ValueNumber::Unknown)
            .bool("useSsl", &ValueBool::Value(false))
            .int_set("categories", &Value::Value([Value::Value(5030), Value::Value(5040)].into()))
            .int_set("animeCategories", &Value::Null)
            .into_inner();

        assert_eq!(
            fields,
            vec![
                Field::new("host", "localhost"),
                Field::new("port", 9091),
                Field::new("useSsl", false),
                Field::new("categories", vec![5030, 5040]),
            ]
        );
    }

    #[test]
    fn reader_converts_values() {
        let reader = FieldsReader::new(vec![
            Field::new("host", "localhost"),
            Field::new("port", 9091.0),
            Field::new("useSsl", true),
            Field::new("categories", json!([5030, 5040.0])),
            Field::new("ratio", 1.5),
            Field {
                name: "urlBase".to_owned(),
                value: None,
            },
            Field::new("username", Json::Null),
        ]);

        assert_eq!(reader.string("host"), ValueString::from("localhost"));
        assert_eq!(reader.int("port"), Value::Value(9091));
        assert_eq!(reader.bool("useSsl"), Value::Value(true));
        assert_eq!(
            reader.int_set("categories"),
            Value::Value([Value::Value(5030), Value::Value(5040)].into())
        );
        assert_eq!(reader.int("ratio"), Value::Null);
        assert_eq!(reader.string("urlBase"), Value::Null);
        assert_eq!(reader.string("username"), Value::Null);
        assert_eq!(reader.bool("missing"), Value::Null);
    }
}
