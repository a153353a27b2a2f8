//! Process-wide record size cache.
//!
//! The encoded size of a record type is measured once, by deserializing it
//! from an endless fill pattern and counting what was consumed, then served
//! from a concurrent map keyed by [`TypeId`].

use crate::de::{Deserializer, Fill};
use crate::error::{Error, Result};
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use std::any::{TypeId, type_name};
use std::sync::LazyLock;

static SIZES: LazyLock<DashMap<TypeId, usize>> = LazyLock::new(DashMap::new);

/// Encoded size in bytes of the fixed-layout record type `T`.
///
/// Fails with [`Error::Unsupported`] if `T` contains a variable-size part.
/// Every primitive is read first as all-zero bits, then as 1, then as all-one
/// bits; a type that rejects all three (a tag accepting only a few magic
/// values, say) reports the error of the all-zero attempt and must be given
/// its size with [`register_size`].
pub fn size_of<T: DeserializeOwned + 'static>() -> Result<usize> {
    let id = TypeId::of::<T>();
    if let Some(size) = SIZES.get(&id).map(|entry| *entry) {
        return Ok(size);
    }

    // Racing threads may both measure; they publish the same value.
    let size = measure::<T>()?;
    log::trace!("measured record size of {}: {} bytes", type_name::<T>(), size);
    Ok(*SIZES.entry(id).or_insert(size))
}

/// Record the encoded size of `T` explicitly, replacing any measured value.
pub fn register_size<T: 'static>(size: usize) {
    SIZES.insert(TypeId::of::<T>(), size);
}

fn measure<T: DeserializeOwned>() -> Result<usize> {
    let zeroed = measure_with::<T>(Fill::Zero);
    if matches!(zeroed, Ok(_) | Err(Error::Unsupported(_))) {
        return zeroed;
    }
    [Fill::One, Fill::Ones]
        .into_iter()
        .map(measure_with::<T>)
        .find(Result::is_ok)
        .unwrap_or(zeroed)
}

fn measure_with<T: DeserializeOwned>(fill: Fill) -> Result<usize> {
    let mut de = Deserializer::measuring(fill);
    T::deserialize(&mut de)?;
    Ok(de.position())
}
