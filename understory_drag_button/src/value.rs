// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value mapping: convert a drag displacement into a bounded value.
//!
//! All functions here are pure. The displacement is clamped into
//! `[0, max_drag_distance]` before mapping, so any input yields a percentage in
//! `[0, 100]` and a value inside the configured domain.
//!
//! ## Minimal example
//!
//! ```
//! use understory_drag_button::value::{ValueFormat, ValueLabel, ValueMapper};
//!
//! let mapper = ValueMapper::new(150.0, 0.0, 100.0);
//! assert_eq!(mapper.percentage(75.0), 50.0);
//! assert_eq!(mapper.value(75.0), 50.0);
//!
//! // Out-of-range displacements are clamped.
//! assert_eq!(mapper.percentage(400.0), 100.0);
//!
//! assert_eq!(mapper.label(50.0, &ValueFormat::Percentage), ValueLabel::Percentage(33.0));
//! assert_eq!(mapper.label(50.0, &ValueFormat::Value), ValueLabel::Value(33.3));
//!
//! let celsius = ValueFormat::custom(|v| format!("{v:.0} °C"));
//! assert_eq!(mapper.label(150.0, &celsius).to_string(), "100 °C");
//! ```

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use core::fmt::{self, Display};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Fraction of `max_drag_distance` covered by `displacement`, as a percentage in `[0, 100]`.
///
/// Not rounded; see [`ValueLabel::Percentage`] for the displayed form.
#[must_use]
pub fn percentage_of(displacement: f64, max_drag_distance: f64) -> f64 {
    (displacement / max_drag_distance).clamp(0.0, 1.0) * 100.0
}

/// Linear interpolation of `displacement` into `[min_value, max_value]`.
///
/// Full precision; this is what release callbacks receive.
#[must_use]
pub fn scaled_value(
    displacement: f64,
    max_drag_distance: f64,
    min_value: f64,
    max_value: f64,
) -> f64 {
    let fraction = percentage_of(displacement, max_drag_distance) / 100.0;
    let value = min_value + fraction * (max_value - min_value);
    // Keep rounding error from stepping outside the domain.
    if min_value <= max_value {
        value.clamp(min_value, max_value)
    } else {
        value
    }
}

/// Rounds to one decimal place.
///
/// Small negative values round to `0.0`, never `-0.0`.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    // Adding positive zero turns -0.0 into 0.0 and leaves everything else alone.
    (value * 10.0).round() / 10.0 + 0.0
}

/// Maps displacements for one drag distance and value domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueMapper {
    /// Displacement that maps to the top of the domain.
    pub max_drag_distance: f64,
    /// Value at zero displacement.
    pub min_value: f64,
    /// Value at `max_drag_distance`.
    pub max_value: f64,
}

impl ValueMapper {
    /// Creates a mapper.
    #[must_use]
    pub const fn new(max_drag_distance: f64, min_value: f64, max_value: f64) -> Self {
        Self {
            max_drag_distance,
            min_value,
            max_value,
        }
    }

    /// See [`percentage_of`].
    #[must_use]
    pub fn percentage(&self, displacement: f64) -> f64 {
        percentage_of(displacement, self.max_drag_distance)
    }

    /// See [`scaled_value`].
    #[must_use]
    pub fn value(&self, displacement: f64) -> f64 {
        scaled_value(
            displacement,
            self.max_drag_distance,
            self.min_value,
            self.max_value,
        )
    }

    /// The displayed value for `displacement` under `format`.
    #[must_use]
    pub fn label(&self, displacement: f64, format: &ValueFormat) -> ValueLabel {
        match format {
            ValueFormat::Percentage => {
                ValueLabel::Percentage(self.percentage(displacement).round())
            }
            ValueFormat::Value => ValueLabel::Value(round_to_tenth(self.value(displacement))),
            ValueFormat::Custom(formatter) => {
                ValueLabel::Custom(formatter.format(self.value(displacement)))
            }
        }
    }
}

/// Host-supplied formatter applied to the scaled value.
///
/// The closure may return anything that implements [`Display`]; its rendering
/// is shown as-is.
#[derive(Clone)]
pub struct CustomFormatter(Rc<dyn Fn(f64) -> String>);

impl CustomFormatter {
    /// Wraps a formatting closure.
    pub fn new<T: Display>(format: impl Fn(f64) -> T + 'static) -> Self {
        Self(Rc::new(move |value| format(value).to_string()))
    }

    /// Formats a scaled value.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        (self.0)(value)
    }
}

impl fmt::Debug for CustomFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomFormatter(..)")
    }
}

/// How the current value is presented.
#[derive(Clone, Debug, Default)]
pub enum ValueFormat {
    /// Whole percentage of the drag range, e.g. `50%`.
    #[default]
    Percentage,
    /// Scaled value rounded to one decimal place.
    Value,
    /// Scaled value passed through a [`CustomFormatter`].
    Custom(CustomFormatter),
}

impl ValueFormat {
    /// Shorthand for [`ValueFormat::Custom`].
    pub fn custom<T: Display>(format: impl Fn(f64) -> T + 'static) -> Self {
        Self::Custom(CustomFormatter::new(format))
    }
}

/// A formatted value, as shown in the tooltip.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueLabel {
    /// Rounded percentage in `[0, 100]`.
    Percentage(f64),
    /// Scaled value rounded to one decimal place.
    Value(f64),
    /// Output of a custom formatter.
    Custom(String),
}

impl fmt::Display for ValueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percentage(percentage) => write!(f, "{percentage}%"),
            Self::Value(value) => write!(f, "{value}"),
            Self::Custom(text) => f.write_str(text),
        }
    }
}
