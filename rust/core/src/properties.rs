// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element identity and property bags.
//!
//! The viewer hands back element properties as an open-ended JSON object.
//! [`ElementProperties`] wraps that bag with the two fields the workflow
//! actually inspects typed out: the numeric `id` and the optional
//! `Name.value` display name. Everything else stays opaque and is only
//! surfaced verbatim through the raw-JSON inspector.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::error::{Error, Result};

/// Display name used when an element carries no usable `Name` attribute.
pub const UNKNOWN_ELEMENT_NAME: &str = "Unknown Element";

/// Identifier the viewer assigns to a pickable element.
///
/// Stable for the lifetime of one loaded model; not unique across models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier the viewer assigns to a loaded model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(pub u32);

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "model {}", self.0)
    }
}

/// Property bag for one element: a required id plus opaque attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementProperties {
    id: ElementId,
    attributes: Map<String, Value>,
}

impl ElementProperties {
    /// Create an empty bag for the given element.
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            attributes: Map::new(),
        }
    }

    /// Wrap an attribute map under a known element id.
    ///
    /// Any `id` entry inside the map is shadowed by the explicit one.
    pub fn from_object(id: ElementId, mut attributes: Map<String, Value>) -> Self {
        attributes.remove("id");
        Self { id, attributes }
    }

    /// Build from a raw JSON value as produced by the viewer.
    ///
    /// The value must be an object with a numeric `id` attribute.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut map) = value else {
            return Err(Error::MissingId);
        };
        let id = map
            .get("id")
            .and_then(Value::as_u64)
            .and_then(|id| u32::try_from(id).ok())
            .ok_or(Error::MissingId)?;
        map.remove("id");
        Ok(Self {
            id: ElementId(id),
            attributes: map,
        })
    }

    /// The element's identity.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The element's display name, when `Name` is an object with a string
    /// `value`. Any other shape (absent, bare string, wrong type) is `None`.
    pub fn name(&self) -> Option<&str> {
        self.attributes.get("Name")?.get("value")?.as_str()
    }

    /// The display name, falling back to [`UNKNOWN_ELEMENT_NAME`].
    pub fn display_name(&self) -> &str {
        self.name().unwrap_or(UNKNOWN_ELEMENT_NAME)
    }

    /// Look up an arbitrary attribute.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Insert or replace an attribute. The `id` key is reserved.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        if key != "id" {
            self.attributes.insert(key, value);
        }
    }

    /// Reassemble the full bag, id included.
    pub fn to_value(&self) -> Value {
        let mut map = self.attributes.clone();
        map.insert("id".into(), Value::from(self.id.0));
        Value::Object(map)
    }

    /// Pretty-printed JSON of the full bag, for the raw-data inspector.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.to_value())
            .unwrap_or_else(|_| format!("{{\"id\": {}}}", self.id.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> ElementProperties {
        ElementProperties::from_value(value).unwrap()
    }

    #[test]
    fn from_value_requires_numeric_id() {
        assert!(matches!(
            ElementProperties::from_value(json!({"Name": {"value": "Wall"}})),
            Err(Error::MissingId)
        ));
        assert!(matches!(
            ElementProperties::from_value(json!({"id": "42"})),
            Err(Error::MissingId)
        ));
        assert!(matches!(
            ElementProperties::from_value(json!([1, 2, 3])),
            Err(Error::MissingId)
        ));
    }

    #[test]
    fn name_resolves_only_the_object_shape() {
        let named = props(json!({"id": 42, "Name": {"value": "Wall-07"}}));
        assert_eq!(named.name(), Some("Wall-07"));
        assert_eq!(named.display_name(), "Wall-07");

        // Absent, bare-string and wrongly-typed Name all fall back.
        let absent = props(json!({"id": 7}));
        let bare = props(json!({"id": 7, "Name": "Wall-07"}));
        let wrong = props(json!({"id": 7, "Name": {"value": 3}}));
        for p in [absent, bare, wrong] {
            assert_eq!(p.name(), None);
            assert_eq!(p.display_name(), UNKNOWN_ELEMENT_NAME);
        }
    }

    #[test]
    fn round_trips_the_full_bag() {
        let p = props(json!({"id": 12, "GlobalId": {"value": "2O2Fr$t4X7Zf8NOew3FL"}, "Tag": null}));
        let v = p.to_value();
        assert_eq!(v["id"], json!(12));
        assert_eq!(v["GlobalId"]["value"], json!("2O2Fr$t4X7Zf8NOew3FL"));
        assert!(p.to_pretty_json().contains("GlobalId"));
    }

    #[test]
    fn explicit_id_shadows_the_bag() {
        let mut map = Map::new();
        map.insert("id".into(), json!(999));
        let p = ElementProperties::from_object(ElementId(5), map);
        assert_eq!(p.id(), ElementId(5));
        assert_eq!(p.to_value()["id"], json!(5));

        let mut p = ElementProperties::new(ElementId(5));
        p.insert("id", json!(999));
        assert_eq!(p.to_value()["id"], json!(5));
    }
}
