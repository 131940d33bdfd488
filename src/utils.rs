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
use std::fmt::Display;

use tf_provider::value::{Value, ValueBool, ValueNumber, ValueSet, ValueString};
use tf_provider::Diagnostics;

/// Summary of diagnostics raised when the API returns an error
pub(crate) const CLIENT_ERROR: &str = "Client Error";
/// Summary of diagnostics raised when a data source finds nothing
pub(crate) const DATA_SOURCE_ERROR: &str = "Data Source Error";
/// Summary of diagnostics raised when a resource has been deleted outside of Terraform
pub(crate) const RESOURCE_NOT_FOUND: &str = "Resource Not Found";
/// Summary of diagnostics raised when an import ID is not valid
pub(crate) const UNEXPECTED_IMPORT_IDENTIFIER: &str = "Unexpected Import Identifier";

/// Placeholder returned by the server instead of sensitive values
pub(crate) const MASKED: &str = "********";

/// Report an API failure
pub(crate) fn client_error(diags: &mut Diagnostics, action: &str, name: &str, err: impl Display) {
    diags.root_error(
        CLIENT_ERROR,
        format!("Unable to {action} {name}, got error: {err}"),
    );
}

/// Parse the identifier given to `terraform import`
pub(crate) fn parse_import_id(diags: &mut Diagnostics, id: &str) -> Option<i64> {
    match id.trim().parse() {
        Ok(id) => Some(id),
        Err(_) => {
            diags.root_error(
                UNEXPECTED_IMPORT_IDENTIFIER,
                format!("Expected import identifier with format: ID. Got: {id:?}"),
            );
            None
        }
    }
}

/// Mark a value that the server computes when it is not set by the practitioner
pub(crate) fn unknown_if_null<T>(value: &mut Value<T>) {
    if value.is_null() {
        *value = Value::Unknown;
    }
}

pub(crate) fn string(value: &ValueString<'_>) -> String {
    value.as_deref_option().unwrap_or_default().to_owned()
}

pub(crate) fn number(value: &ValueNumber) -> i64 {
    value.as_ref_option().copied().unwrap_or_default()
}

pub(crate) fn boolean(value: &ValueBool) -> bool {
    value.as_ref_option().copied().unwrap_or_default()
}

/// Known elements of a set of numbers
pub(crate) fn numbers(set: &ValueSet<ValueNumber>) -> Vec<i64> {
    set.iter()
        .flatten()
        .filter_map(|value| value.as_ref_option().copied())
        .collect()
}

/// Known elements of a set of strings
pub(crate) fn strings(set: &ValueSet<ValueString<'_>>) -> Vec<String> {
    set.iter()
        .flatten()
        .filter_map(|value| value.as_deref_option().map(ToOwned::to_owned))
        .collect()
}

pub(crate) fn number_set(values: impl IntoIterator<Item = i64>) -> ValueSet<ValueNumber> {
    Value::Value(values.into_iter().map(Value::Value).collect())
}

pub(crate) fn string_set<'a>(values: impl IntoIterator<Item = String>) -> ValueSet<ValueString<'a>> {
    Value::Value(
        values
            .into_iter()
            .map(|value| Value::Value(Cow::Owned(value)))
            .collect(),
    )
}

/// Store a sensitive value read back from the server
///
/// Masked values keep the value from the state, or become null if the state has no known value.
pub(crate) fn write_sensitive<'a>(target: &mut ValueString<'a>, value: ValueString<'a>) {
    if value.as_deref_option() == Some(MASKED) {
        if !target.is_value() {
            *target = Value::Null;
        }
    } else {
        *target = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_id_must_be_numeric() {
        let mut diags = Diagnostics::default();
        assert_eq!(parse_import_id(&mut diags, "12"), Some(12));
        assert_eq!(parse_import_id(&mut diags, " 7 "), Some(7));
        assert!(diags.errors.is_empty());

        assert_eq!(parse_import_id(&mut diags, "abc"), None);
        assert_eq!(diags.errors.len(), 1);
        assert_eq!(diags.errors[0].summary, UNEXPECTED_IMPORT_IDENTIFIER);
        assert!(diags.errors[0].detail.contains("\"abc\""));
    }

    #[test]
    fn unknown_only_replaces_null() {
        let mut null = ValueNumber::Null;
        let mut known = ValueNumber::Value(3);
        unknown_if_null(&mut null);
        unknown_if_null(&mut known);
        assert!(null.is_unknown());
        assert_eq!(known, Value::Value(3));
    }

    #[test]
    fn sets_skip_unknown_elements() {
        let set: ValueSet<ValueNumber> =
            Value::Value([Value::Value(1), Value::Unknown, Value::Value(4)].into());
        assert_eq!(numbers(&set), vec![1, 4]);
        assert_eq!(numbers(&Value::Null), Vec::<i64>::new());
        assert_eq!(numbers(&number_set([4, 1])), vec![1, 4]);

        let set = string_set(["b".to_owned(), "a".to_owned()]);
        assert_eq!(strings(&set), vec!["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn masked_values_keep_state() {
        let mut password = ValueString::from("hunter2");
        write_sensitive(&mut password, ValueString::from(MASKED));
        assert_eq!(password, ValueString::from("hunter2"));

        let mut password = ValueString::Unknown;
        write_sensitive(&mut password, ValueString::from(MASKED));
        assert!(password.is_null());

        let mut password = ValueString::from("old");
        write_sensitive(&mut password, ValueString::from("new"));
        assert_eq!(password, ValueString::from("new"));
    }
}
