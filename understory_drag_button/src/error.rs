// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

use core::fmt;

/// Error returned when a drag button is constructed from an unusable configuration.
///
/// Only construction can fail. Once a button is mounted, irregular input
/// (out-of-range pointer positions, interaction while disabled) degrades
/// through clamping or is ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The label or content is empty, so there is nothing to render.
    MissingContent,
    /// `max_drag_distance` is not a finite, strictly positive number.
    InvalidDragDistance(f64),
    /// The value domain is empty or not finite.
    InvalidValueRange {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingContent => f.write_str("drag button requires non-empty content"),
            Self::InvalidDragDistance(distance) => write!(
                f,
                "max drag distance must be finite and greater than zero, got {distance}"
            ),
            Self::InvalidValueRange { min, max } => write!(
                f,
                "value range must be finite with min <= max, got {min}..={max}"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}
