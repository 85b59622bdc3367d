// src/numerics/types/frozen.rs
// Read-only wrapper for the canonical zero/one vectors.

use core::fmt;
use core::ops::Deref;

use serde::{Serialize, Serializer};

use crate::error::VectorError;

/// Names the canonical shared vector a `Frozen` value stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Singleton {
    Zero,
    One,
}

impl fmt::Display for Singleton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Singleton::Zero => f.write_str("zero"),
            Singleton::One => f.write_str("one"),
        }
    }
}

/// Content-frozen vector.
///
/// There is no way to obtain `&mut V` from a `Frozen<V>`: reads go through
/// `Deref`, mutation requests are rejected with
/// [`VectorError::FrozenMutation`], and `thaw` hands out an independent copy
/// that can be changed freely.
#[derive(Debug, Clone, Copy)]
pub struct Frozen<V> {
    singleton: Singleton,
    value: V,
}

impl<V> Frozen<V> {
    pub(crate) const fn new(singleton: Singleton, value: V) -> Self {
        Self { singleton, value }
    }

    /// Which canonical vector this is.
    pub fn singleton(&self) -> Singleton {
        self.singleton
    }

    pub fn get(&self) -> &V {
        &self.value
    }

    /// Returns a mutable copy, detached from the shared constant.
    pub fn thaw(&self) -> V
    where
        V: Copy,
    {
        self.value
    }

    /// Always fails: a frozen vector cannot be overwritten.
    pub fn try_set(&self, _source: &V) -> Result<(), VectorError> {
        Err(self.reject("set"))
    }

    /// Always fails without running `update`.
    pub fn try_update<F>(&self, _update: F) -> Result<(), VectorError>
    where
        F: FnOnce(&mut V),
    {
        Err(self.reject("update"))
    }

    fn reject(&self, operation: &str) -> VectorError {
        tracing::warn!(
            singleton = %self.singleton,
            operation,
            "rejected mutation of a frozen vector"
        );
        VectorError::FrozenMutation {
            singleton: self.singleton,
        }
    }
}

impl<V> Deref for Frozen<V> {
    type Target = V;

    fn deref(&self) -> &V {
        &self.value
    }
}

impl<V> AsRef<V> for Frozen<V> {
    fn as_ref(&self) -> &V {
        &self.value
    }
}

impl<V: PartialEq> PartialEq<V> for Frozen<V> {
    fn eq(&self, other: &V) -> bool {
        self.value == *other
    }
}

impl<V: fmt::Display> fmt::Display for Frozen<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

// Serializes as the wrapped value; frozen vectors are never deserialized.
impl<V: Serialize> Serialize for Frozen<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}
