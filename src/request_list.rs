// src/request_list.rs
//! Request list reshaping for the engagement-party endpoint
//!
//! in:  engParty → Client[] → Project[] → Request[]
//! out: engParty → Request[]
//!
//! Requests keep whatever nested fields they carry; only the client and
//! project layers between the party and its requests are dropped.

use serde_json::{Map, Value};

use crate::error::{CoreError, Result};

const CLIENT_KEY: &str = "Client";
const PROJECT_KEY: &str = "Project";
const REQUEST_KEY: &str = "Request";

/// Flatten every party's nested requests into a single `Request` array
pub fn flatten_request_list(data: Vec<Value>) -> Result<Vec<Value>> {
    data.into_iter()
        .enumerate()
        .map(|(idx, party)| match party {
            Value::Object(map) => Ok(Value::Object(flatten_party(map))),
            other => Err(CoreError::Shape(format!(
                "party #{idx} is {}, expected an object",
                kind(&other)
            ))),
        })
        .collect()
}

fn flatten_party(mut party: Map<String, Value>) -> Map<String, Value> {
    let clients = party.remove(CLIENT_KEY);
    let requests: Vec<Value> = children(clients, PROJECT_KEY)
        .flat_map(|project| children(Some(project), REQUEST_KEY))
        .collect();
    party.insert(REQUEST_KEY.to_string(), Value::Array(requests));
    party
}

/// Items under `key` of each element in `parent`
///
/// Arrays are walked in order; an object stands in for a single element.
/// Anything else (missing, null, scalar) yields nothing.
fn children(parent: Option<Value>, key: &'static str) -> impl Iterator<Item = Value> {
    elements(parent)
        .into_iter()
        .flat_map(move |mut item| match item.get_mut(key).map(Value::take) {
            Some(child) => elements(Some(child)),
            None => Vec::new(),
        })
}

fn elements(value: Option<Value>) -> Vec<Value> {
    match value {
        Some(Value::Array(items)) => items,
        Some(obj @ Value::Object(_)) => vec![obj],
        _ => Vec::new(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
