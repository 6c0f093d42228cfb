//! Custom serde helpers for venue wire formats.

/// Deserializes `null` (or a missing field, with `#[serde(default)]`) as `T::default()`.
///
/// The venue sends `"bids": null` for an empty book side and `"fills": null`
/// on some order snapshots.
pub mod null_as_default {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}
