//! Generation variants and planning.

use std::fmt;

use serde::Serialize;

use crate::Configuration;

/// One independently generated flavor of output for the same schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Immutable,
    Mutable,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Immutable => "immutable",
            Variant::Mutable => "mutable",
        }
    }

    pub fn is_immutable(&self) -> bool {
        matches!(self, Variant::Immutable)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides which variants run, and in what order.
///
/// Immutable is always planned before mutable. The shared-code flag never
/// adds a pass of its own; emitters read it from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantPlanner {
    mutable_supported: bool,
}

impl VariantPlanner {
    pub fn new() -> Self {
        Self {
            mutable_supported: true,
        }
    }

    /// Never plan the mutable variant, even when requested.
    pub fn without_mutable() -> Self {
        Self {
            mutable_supported: false,
        }
    }

    pub fn mutable_supported(&self) -> bool {
        self.mutable_supported
    }

    /// Plan the variants for a resolved configuration.
    pub fn plan(&self, config: &Configuration) -> Vec<Variant> {
        let mut variants = Vec::with_capacity(2);
        if config.generate_immutable {
            variants.push(Variant::Immutable);
        }
        if config.generate_mutable {
            if self.mutable_supported {
                variants.push(Variant::Mutable);
            } else {
                tracing::debug!("mutable variant requested but not supported, skipping");
            }
        }
        variants
    }
}

impl Default for VariantPlanner {
    fn default() -> Self {
        Self::new()
    }
}
