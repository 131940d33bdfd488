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

//! Shorthands to declare schema attributes

use std::collections::HashMap;

use tf_provider::schema::{Attribute, AttributeConstraint, AttributeType, Description};

fn attribute(attr_type: AttributeType, description: &str, constraint: AttributeConstraint) -> Attribute {
    Attribute {
        attr_type,
        description: Description::markdown(description),
        constraint,
        ..Default::default()
    }
}

/// Attribute that must be set by the practitioner
pub(crate) fn required(attr_type: AttributeType, description: &str) -> Attribute {
    attribute(attr_type, description, AttributeConstraint::Required)
}

/// Attribute that can be set by the practitioner, and is defaulted by the server otherwise
pub(crate) fn optional(attr_type: AttributeType, description: &str) -> Attribute {
    attribute(attr_type, description, AttributeConstraint::OptionalComputed)
}

/// Attribute that is only set by the server
pub(crate) fn computed(attr_type: AttributeType, description: &str) -> Attribute {
    attribute(attr_type, description, AttributeConstraint::Computed)
}

pub(crate) fn sensitive(attribute: Attribute) -> Attribute {
    Attribute {
        sensitive: true,
        ..attribute
    }
}

pub(crate) fn number_set_type() -> AttributeType {
    AttributeType::Set(Box::new(AttributeType::Number))
}

pub(crate) fn string_set_type() -> AttributeType {
    AttributeType::Set(Box::new(AttributeType::String))
}

/// Server assigned ID
pub(crate) fn id(entity: &str) -> Attribute {
    computed(AttributeType::Number, &format!("{entity} ID."))
}

pub(crate) fn tags() -> Attribute {
    optional(number_set_type(), "List of associated tags.")
}

/// Turn resource attributes into data source attributes
///
/// Every attribute becomes computed, except `lookup` that becomes required.
pub(crate) fn read_only(
    attributes: HashMap<String, Attribute>,
    lookup: Option<&str>,
) -> HashMap<String, Attribute> {
    attributes
        .into_iter()
        .map(|(name, attribute)| {
            let constraint = if Some(name.as_str()) == lookup {
                AttributeConstraint::Required
            } else {
                AttributeConstraint::Computed
            };
            (
                name,
                Attribute {
                    constraint,
                    ..attribute
                },
            )
        })
        .collect()
}

/// Object type with the same shape as the attributes
pub(crate) fn object(attributes: &HashMap<String, Attribute>) -> AttributeType {
    AttributeType::Object(
        attributes
            .iter()
            .map(|(name, attribute)| (name.clone(), attribute.attr_type.clone()))
            .collect(),
    )
}
