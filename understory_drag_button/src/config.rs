// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-mount configuration for both drag button variants.
//!
//! Configuration is immutable once a button is mounted (apart from
//! [`SliderButton::set_disabled`](crate::slider::SliderButton::set_disabled) and
//! [`BasicButton::set_disabled`](crate::basic::BasicButton::set_disabled)).
//! Values are checked when the button is constructed; see [`ConfigError`].

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Size;
use peniko::Color;

use crate::error::ConfigError;
use crate::value::{ValueFormat, ValueMapper};

/// Default edge length of the square slider button.
pub const DEFAULT_BUTTON_SIZE: f64 = 80.0;

/// Default tooltip box (fixed for circular tooltips, minimum for rounded ones).
pub const DEFAULT_TOOLTIP_SIZE: Size = Size::new(70.0, 40.0);

/// Default travel of the slider button, in the same units as pointer positions.
pub const DEFAULT_MAX_DRAG_DISTANCE: f64 = 150.0;

/// Default label shown on the slider button.
pub const DEFAULT_LABEL: &str = "Button";

/// Ordered inline style overrides, applied after the derived styles.
pub type StyleOverrides = Vec<(String, String)>;

/// Colors used by the slider presentation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonColors {
    /// Idle button fill and the bounds indicator.
    pub background: Color,
    /// Button fill while hovered and idle.
    pub hover_background: Color,
    /// Button fill while dragging.
    pub active_background: Color,
    /// Label color.
    pub text: Color,
    /// Tooltip and connector fill.
    pub tooltip_background: Color,
    /// Tooltip text color.
    pub tooltip_text: Color,
}

impl Default for ButtonColors {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0xee, 0x6e, 0x7e),
            hover_background: Color::from_rgb8(0xf4, 0x8c, 0x98),
            active_background: Color::from_rgb8(0xda, 0x5c, 0x6c),
            text: Color::WHITE,
            tooltip_background: Color::from_rgb8(0xee, 0x6e, 0x7e),
            tooltip_text: Color::WHITE,
        }
    }
}

/// Tooltip box shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TooltipShape {
    /// Auto-sized box with rounded corners; the tooltip size is a minimum.
    #[default]
    Rounded,
    /// Fixed-size circular box; the tooltip size is exact.
    Circular,
}

impl TooltipShape {
    /// Class name used in the tooltip class list.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Rounded => "rounded",
            Self::Circular => "circular",
        }
    }
}

/// Side of the button the tooltip and connector sit on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TooltipPosition {
    /// Left of the button.
    Left,
    /// Right of the button.
    #[default]
    Right,
}

impl TooltipPosition {
    /// Class name used in the tooltip class list.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Configuration of the bounded slider variant.
///
/// ```
/// use understory_drag_button::config::{SliderConfig, TooltipPosition};
/// use understory_drag_button::value::ValueFormat;
///
/// let config = SliderConfig::default()
///     .with_label("Volume")
///     .with_value_range(0.0, 10.0)
///     .with_value_format(ValueFormat::Value)
///     .with_tooltip_position(TooltipPosition::Left);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct SliderConfig {
    /// Text rendered on the button. Must not be empty.
    pub label: String,
    /// Fill and text colors.
    pub colors: ButtonColors,
    /// Edge length of the square button.
    pub button_size: f64,
    /// Tooltip box size.
    pub tooltip_size: Size,
    /// Tooltip box shape.
    pub tooltip_shape: TooltipShape,
    /// Tooltip side.
    pub tooltip_position: TooltipPosition,
    /// Clamp ceiling for the drag displacement and height of the bounds indicator.
    pub max_drag_distance: f64,
    /// Value reported at zero displacement.
    pub min_value: f64,
    /// Value reported at full displacement.
    pub max_value: f64,
    /// How the tooltip presents the current value.
    pub value_format: ValueFormat,
    /// Extra class appended to the container class list.
    pub class_name: String,
    /// Inline style overrides for the container.
    pub style: StyleOverrides,
    /// Suppresses every gesture transition.
    pub disabled: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            label: String::from(DEFAULT_LABEL),
            colors: ButtonColors::default(),
            button_size: DEFAULT_BUTTON_SIZE,
            tooltip_size: DEFAULT_TOOLTIP_SIZE,
            tooltip_shape: TooltipShape::default(),
            tooltip_position: TooltipPosition::default(),
            max_drag_distance: DEFAULT_MAX_DRAG_DISTANCE,
            min_value: 0.0,
            max_value: 100.0,
            value_format: ValueFormat::default(),
            class_name: String::new(),
            style: StyleOverrides::new(),
            disabled: false,
        }
    }
}

impl SliderConfig {
    /// Sets the button label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the colors.
    #[must_use]
    pub fn with_colors(mut self, colors: ButtonColors) -> Self {
        self.colors = colors;
        self
    }

    /// Sets the button edge length.
    #[must_use]
    pub fn with_button_size(mut self, size: f64) -> Self {
        self.button_size = size;
        self
    }

    /// Sets the tooltip box size.
    #[must_use]
    pub fn with_tooltip_size(mut self, size: Size) -> Self {
        self.tooltip_size = size;
        self
    }

    /// Sets the tooltip shape.
    #[must_use]
    pub fn with_tooltip_shape(mut self, shape: TooltipShape) -> Self {
        self.tooltip_shape = shape;
        self
    }

    /// Sets the tooltip side.
    #[must_use]
    pub fn with_tooltip_position(mut self, position: TooltipPosition) -> Self {
        self.tooltip_position = position;
        self
    }

    /// Sets the maximum drag distance.
    #[must_use]
    pub fn with_max_drag_distance(mut self, distance: f64) -> Self {
        self.max_drag_distance = distance;
        self
    }

    /// Sets the output domain.
    #[must_use]
    pub fn with_value_range(mut self, min: f64, max: f64) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    /// Sets the value format.
    #[must_use]
    pub fn with_value_format(mut self, format: ValueFormat) -> Self {
        self.value_format = format;
        self
    }

    /// Sets the extra container class.
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Appends an inline style override for the container.
    #[must_use]
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.push((property.into(), value.into()));
        self
    }

    /// Sets whether the button ignores input.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The value mapper for this configuration's drag distance and domain.
    #[must_use]
    pub fn mapper(&self) -> ValueMapper {
        ValueMapper::new(self.max_drag_distance, self.min_value, self.max_value)
    }

    /// Checks that the configuration can be rendered and mapped.
    ///
    /// Degenerate numeric settings are rejected rather than left to produce
    /// divisions by zero or inverted ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.label.is_empty() {
            return Err(ConfigError::MissingContent);
        }
        if !self.max_drag_distance.is_finite() || self.max_drag_distance <= 0.0 {
            return Err(ConfigError::InvalidDragDistance(self.max_drag_distance));
        }
        if !self.min_value.is_finite()
            || !self.max_value.is_finite()
            || self.min_value > self.max_value
        {
            return Err(ConfigError::InvalidValueRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        Ok(())
    }
}

/// Configuration of the basic position-drag variant.
///
/// `Default` leaves the content empty, which fails validation: content has to
/// be supplied with [`BasicConfig::new`] or [`BasicConfig::with_content`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BasicConfig {
    /// Text rendered on the button. Must not be empty.
    pub content: String,
    /// Extra class appended to the class list.
    pub class_name: String,
    /// Inline style overrides for the button.
    pub style: StyleOverrides,
    /// Suppresses every gesture transition.
    pub disabled: bool,
}

impl BasicConfig {
    /// Creates a configuration with the given content.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Sets the button content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the extra class.
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Appends an inline style override.
    #[must_use]
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.push((property.into(), value.into()));
        self
    }

    /// Sets whether the button ignores input.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Checks that there is content to render.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content.is_empty() {
            return Err(ConfigError::MissingContent);
        }
        Ok(())
    }
}
