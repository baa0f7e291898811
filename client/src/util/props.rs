//! Helpers for reading typed values out of element property bags.

#[cfg(test)]
#[path = "props_test.rs"]
mod props_test;

use builder::doc::Element;

/// String prop, or the empty string when absent or not a string.
#[must_use]
pub fn read_str<'a>(element: &'a Element, key: &str) -> &'a str {
    element.props.get(key).and_then(|v| v.as_str()).unwrap_or("")
}

/// Integer prop, or `fallback` when absent or not numeric. Floats round.
#[must_use]
pub fn read_int(element: &Element, key: &str, fallback: i64) -> i64 {
    element
        .props
        .get(key)
        .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|n| n.round() as i64)))
        .unwrap_or(fallback)
}

/// List-valued prop as an owned vector; empty when absent or not a list.
#[must_use]
pub fn read_list(element: &Element, key: &str) -> Vec<serde_json::Value> {
    element
        .props
        .get(key)
        .and_then(|v| v.as_array())
        .cloned()
        .unwrap_or_default()
}

/// Copy-on-write list edit: clone the list with only the entry at `index`
/// replaced by `entry` merged over it (siblings and their order preserved).
/// An out-of-range index returns the list unchanged.
#[must_use]
pub fn replace_list_entry(
    list: &[serde_json::Value],
    index: usize,
    key: &str,
    value: serde_json::Value,
) -> Vec<serde_json::Value> {
    let mut next = list.to_vec();
    if let Some(slot) = next.get_mut(index) {
        if let Some(map) = slot.as_object_mut() {
            map.insert(key.to_owned(), value);
        }
    }
    next
}
