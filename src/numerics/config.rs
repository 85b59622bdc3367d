use crate::error::{Axis, VectorError};
use crate::numerics::types::traits::FloatingPoint;

/// Which component values the validating constructors accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComponentPolicy {
    /// Reject NaN; infinities pass through.
    #[default]
    RejectNaN,
    /// Reject NaN and both infinities.
    RejectNonFinite,
    /// Accept every value, including NaN.
    AllowAll,
}

impl ComponentPolicy {
    /// Returns true if `value` is acceptable under this policy.
    pub fn accepts(self, value: f64) -> bool {
        match self {
            ComponentPolicy::RejectNaN => !value.is_nan(),
            ComponentPolicy::RejectNonFinite => value.is_finite(),
            ComponentPolicy::AllowAll => true,
        }
    }

    /// Passes `value` through, or names the axis it was rejected on.
    pub fn check<T: FloatingPoint>(self, axis: Axis, value: T) -> Result<T, VectorError> {
        let wide = value.to_f64();
        if self.accepts(wide) {
            Ok(value)
        } else {
            tracing::debug!(%axis, value = wide, policy = ?self, "rejected vector component");
            Err(VectorError::InvalidComponent { axis, value: wide })
        }
    }
}

/// Configuration for vector construction and formatting.
///
/// Controls how many decimals `display_with` renders and which raw
/// component values the validating constructors let through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericsConfig {
    /// Fixed number of decimals used when rendering vectors.
    pub display_precision: usize,
    /// Validation applied by `from_components_with` and `set_components_with`.
    pub component_policy: ComponentPolicy,
}

impl NumericsConfig {
    /// Decimals used by `Display` when the formatter carries no precision.
    pub const DEFAULT_DISPLAY_PRECISION: usize = 2;

    /// Creates a new configuration with the given precision and policy.
    pub fn new(display_precision: usize, component_policy: ComponentPolicy) -> Self {
        Self {
            display_precision,
            component_policy,
        }
    }

    /// Rejects NaN and infinities. Use for values received from peers.
    pub fn strict() -> Self {
        Self {
            display_precision: Self::DEFAULT_DISPLAY_PRECISION,
            component_policy: ComponentPolicy::RejectNonFinite,
        }
    }

    /// Accepts every value. Matches the behaviour of the plain `new` constructors.
    pub fn permissive() -> Self {
        Self {
            display_precision: Self::DEFAULT_DISPLAY_PRECISION,
            component_policy: ComponentPolicy::AllowAll,
        }
    }

    /// Returns a copy of this configuration with a different display precision.
    pub fn with_display_precision(mut self, display_precision: usize) -> Self {
        self.display_precision = display_precision;
        self
    }
}

impl Default for NumericsConfig {
    /// Two decimals, NaN rejected.
    fn default() -> Self {
        Self {
            display_precision: Self::DEFAULT_DISPLAY_PRECISION,
            component_policy: ComponentPolicy::RejectNaN,
        }
    }
}
