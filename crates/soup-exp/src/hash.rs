use serde::Serialize;
use sha2::{Digest, Sha256};
use soup_core::errors::ErrorInfo;
use soup_core::SoupError;

/// Serializes a payload to canonical JSON bytes.
///
/// Canonical here means deterministic for the payloads this crate hashes:
/// structs serialize field by field and the maps involved are ordered.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, SoupError> {
    serde_json::to_vec(value)
        .map_err(|err| SoupError::Serde(ErrorInfo::new("json-encode", err.to_string())))
}

/// Computes a stable hexadecimal hash for the provided serializable payload.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, SoupError> {
    let bytes = to_canonical_json_bytes(value)?;
    let digest = Sha256::digest(bytes);
    Ok(format!("{:x}", digest))
}
