/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Bracket-notation query strings (`populate[blocks][on][...]=...`).
//!
//! The content API reads nested objects from the query string the way the
//! `qs` family of serializers writes them: object keys become `[key]`
//! segments, array elements become `[index]` segments and leaves are
//! percent-encoded. Key order follows insertion order of the JSON object.

use serde_json::Value;
use url::form_urlencoded::byte_serialize;

/// A nested query parameter tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    params: Value,
    encode_values_only: bool,
}

impl Query {
    /// A query built from a JSON object. Non-object values serialize to
    /// nothing.
    pub fn new(params: Value) -> Self {
        Self {
            params,
            encode_values_only: false,
        }
    }

    /// A query with no parameters.
    pub fn empty() -> Self {
        Self::new(Value::Object(Default::default()))
    }

    /// Leave bracketed keys unencoded and encode only the values.
    pub fn encode_values_only(mut self) -> Self {
        self.encode_values_only = true;
        self
    }

    /// Serialize to `key=value&key=value` without a leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        if let Value::Object(map) = &self.params {
            for (key, value) in map {
                flatten(key.clone(), value, &mut pairs);
            }
        }
        pairs
            .into_iter()
            .map(|(key, value)| {
                let key = if self.encode_values_only {
                    key
                } else {
                    encode(&key)
                };
                format!("{key}={}", encode(&value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn flatten(prefix: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten(format!("{prefix}[{key}]"), child, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten(format!("{prefix}[{index}]"), child, out);
            }
        }
        Value::String(s) => out.push((prefix, s.clone())),
        Value::Number(n) => out.push((prefix, n.to_string())),
        Value::Bool(b) => out.push((prefix, b.to_string())),
        Value::Null => out.push((prefix, String::new())),
    }
}

fn encode(raw: &str) -> String {
    byte_serialize(raw.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn arrays_use_indices_and_keys_are_encoded() {
        let query = Query::new(json!({
            "populate": ["header.logoText", "footer.externalLink"]
        }));
        assert_eq!(
            query.to_query_string(),
            "populate%5B0%5D=header.logoText&populate%5B1%5D=footer.externalLink"
        );
    }

    #[test]
    fn encode_values_only_keeps_brackets() {
        let query = Query::new(json!({
            "sort": ["date:desc"],
            "populate": {"image": {"fields": ["url", "alternativeText"]}}
        }))
        .encode_values_only();
        assert_eq!(
            query.to_query_string(),
            "sort[0]=date%3Adesc&populate[image][fields][0]=url&populate[image][fields][1]=alternativeText"
        );
    }

    #[test]
    fn nested_objects_preserve_declaration_order() {
        let query = Query::new(json!({
            "populate": {"blocks": {"on": {
                "layout.hero-section": {"populate": {"link": {"populate": true}, "heroMedia": {"populate": "*"}}}
            }}}
        }))
        .encode_values_only();
        assert_eq!(
            query.to_query_string(),
            "populate[blocks][on][layout.hero-section][populate][link][populate]=true\
             &populate[blocks][on][layout.hero-section][populate][heroMedia][populate]=*"
        );
    }

    #[test]
    fn empty_query_serializes_to_nothing() {
        assert_eq!(Query::empty().to_query_string(), "");
        assert_eq!(Query::new(json!("not an object")).to_query_string(), "");
    }
}
