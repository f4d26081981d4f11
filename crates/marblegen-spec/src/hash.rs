//! Canonical hashing of render parameters.
//!
//! Parameters are serialized with lexicographically sorted keys and no
//! whitespace, then hashed with BLAKE3. Two parameter sets that render the
//! same image always produce the same hash.

use crate::error::ParamError;
use crate::options::RenderOptions;
use crate::params::RenderParams;

/// Computes the canonical BLAKE3 hash of a parameter set.
///
/// ```text
/// params_hash = hex(BLAKE3(canonical_json(params)))
/// ```
///
/// # Example
/// ```
/// use marblegen_spec::{RenderParams, hash::canonical_params_hash};
///
/// let hash = canonical_params_hash(&RenderParams::default()).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_params_hash(params: &RenderParams) -> Result<String, ParamError> {
    let value = params.to_value()?;
    Ok(blake3_hash_str(&canonicalize_value(&value)))
}

/// Computes the canonical hash of parameters together with render options.
pub fn canonical_render_hash(
    params: &RenderParams,
    options: &RenderOptions,
) -> Result<String, ParamError> {
    let value = serde_json::json!({
        "params": params.to_value()?,
        "options": serde_json::to_value(options)?,
    });
    Ok(blake3_hash_str(&canonicalize_value(&value)))
}

/// Serializes a JSON value with sorted object keys and no whitespace.
pub fn canonicalize_json(value: &serde_json::Value) -> String {
    canonicalize_value(value)
}

fn canonicalize_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(canonicalize_value).collect();
            format!("[{}]", items.join(","))
        }
        serde_json::Value::Object(obj) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = obj.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            let pairs: Vec<String> = entries
                .into_iter()
                .map(|(k, v)| {
                    format!(
                        "{}:{}",
                        serde_json::Value::String(k.clone()),
                        canonicalize_value(v)
                    )
                })
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
        // Scalars already have a single compact form.
        scalar => scalar.to_string(),
    }
}

/// Computes a BLAKE3 hash of arbitrary data as lowercase hex.
pub fn blake3_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Computes a BLAKE3 hash of a string.
pub fn blake3_hash_str(s: &str) -> String {
    blake3_hash(s.as_bytes())
}
