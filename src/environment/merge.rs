//! Deep merge for config overrides
//!
//! The `overrides` section of a settings environment is merged over the
//! emitted bundler config with these rules:
//!
//! ```json
//! Base:    {"a": 1, "b": {"x": 1, "y": 2}}
//! Overlay: {"b": {"y": 3, "z": 4}, "c": 3}
//! Result:  {"a": 1, "b": {"x": 1, "y": 3, "z": 4}, "c": 3}
//! ```
//!
//! Objects merge key by key, arrays append overlay items not already
//! present, and anything else takes the overlay value.

use serde_json::Value as JsonValue;

/// Recursively merge `overlay` on top of `base`
pub fn deep_merge(base: JsonValue, overlay: JsonValue) -> JsonValue {
    match (base, overlay) {
        (JsonValue::Object(mut base_map), JsonValue::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged_value = match base_map.remove(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value,
                };
                base_map.insert(key, merged_value);
            }
            JsonValue::Object(base_map)
        }
        (JsonValue::Array(mut base_arr), JsonValue::Array(overlay_arr)) => {
            for item in overlay_arr {
                if !base_arr.contains(&item) {
                    base_arr.push(item);
                }
            }
            JsonValue::Array(base_arr)
        }
        // For non-objects/arrays, the overlay value wins
        (_, overlay) => overlay,
    }
}
