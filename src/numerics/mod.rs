// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod config;
pub mod wire;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod frozen;
    pub mod traits;
    pub mod vector;
    pub mod vector2;
}

pub use config::{ComponentPolicy, NumericsConfig};
pub use types::frozen::{Frozen, Singleton};
pub use types::traits::{FloatingPoint, Planar};
pub use types::vector::{Vector3, VECTOR3_ONE, VECTOR3_ZERO};
pub use types::vector2::{Vector2, VECTOR2_ONE, VECTOR2_ZERO};
