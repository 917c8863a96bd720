// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation derived from configuration and gesture state.
//!
//! Styles are recomputed from scratch on every render; nothing here holds
//! state. Slider geometry is expressed in the container's local space: origin
//! at the container's top-left, y pointing down, the button resting in the
//! `button_size` square at the origin. Parts that extend above the container
//! (the bounds indicator, the raised button) have negative y.

use alloc::string::{String, ToString};

use kurbo::{Point, Rect, Size};
use peniko::Color;

use crate::basic::BasicGesture;
use crate::config::{BasicConfig, SliderConfig, StyleOverrides, TooltipPosition, TooltipShape};
use crate::slider::SliderGesture;

/// Length of the line joining the button and the tooltip.
pub const CONNECTOR_LENGTH: f64 = 10.0;

/// Thickness of the line joining the button and the tooltip.
pub const CONNECTOR_THICKNESS: f64 = 2.0;

/// Class present on every button.
pub const BUTTON_CLASS: &str = "drag-button";

/// Class present on the slider container.
pub const CONTAINER_CLASS: &str = "drag-button-container";

/// Class present on the slider tooltip.
pub const TOOLTIP_CLASS: &str = "drag-tooltip";

/// Class added while a session is active.
pub const DRAGGING_CLASS: &str = "dragging";

fn class_list(classes: &[&str]) -> String {
    let mut list = String::new();
    for class in classes.iter().filter(|class| !class.is_empty()) {
        if !list.is_empty() {
            list.push(' ');
        }
        list.push_str(class);
    }
    list
}

/// How the tooltip box is sized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TooltipExtent {
    /// Exactly this size (circular tooltips).
    Fixed(Size),
    /// At least this size, growing with the content (rounded tooltips).
    AtLeast(Size),
}

/// Everything needed to draw a slider drag button.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderStyle {
    /// Container classes.
    pub container_class: String,
    /// Container size; the button's resting square.
    pub container_size: Size,
    /// Inline overrides for the container, in order.
    pub container_overrides: StyleOverrides,
    /// Bounds indicator: the full travel of the button. Present in every state.
    pub background: Rect,
    /// Bounds indicator fill.
    pub background_color: Color,
    /// Button classes.
    pub button_class: String,
    /// Button box, already translated.
    pub button: Rect,
    /// Vertical translation applied to the button; `-displacement`.
    pub button_offset_y: f64,
    /// Button fill.
    pub button_fill: Color,
    /// Button label color.
    pub text_color: Color,
    /// Button label.
    pub label: String,
    /// Line between button and tooltip.
    pub connector: Rect,
    /// Tooltip classes.
    pub tooltip_class: String,
    /// Tooltip box, using the fixed or minimum size.
    pub tooltip: Rect,
    /// Tooltip sizing mode.
    pub tooltip_extent: TooltipExtent,
    /// Tooltip and connector fill.
    pub tooltip_background: Color,
    /// Tooltip text color.
    pub tooltip_text_color: Color,
    /// Formatted current value.
    pub tooltip_text: String,
}

impl SliderStyle {
    /// Derives the style for the current state.
    #[must_use]
    pub fn derive(config: &SliderConfig, gesture: &SliderGesture) -> Self {
        let dragging = gesture.is_dragging();
        let displacement = gesture.displacement();
        let size = config.button_size;
        let tooltip_size = config.tooltip_size;
        let colors = &config.colors;

        let button_fill = if dragging {
            colors.active_background
        } else if gesture.is_hovered() {
            colors.hover_background
        } else {
            colors.background
        };

        // The connector and tooltip are centred on the button's mid-line.
        let mid_y = size / 2.0 - displacement;
        let (connector_x, tooltip_x) = match config.tooltip_position {
            TooltipPosition::Right => (size, size + CONNECTOR_LENGTH),
            TooltipPosition::Left => (
                -CONNECTOR_LENGTH,
                -CONNECTOR_LENGTH - tooltip_size.width,
            ),
        };
        let tooltip_extent = match config.tooltip_shape {
            TooltipShape::Circular => TooltipExtent::Fixed(tooltip_size),
            TooltipShape::Rounded => TooltipExtent::AtLeast(tooltip_size),
        };
        let dragging_class = if dragging { DRAGGING_CLASS } else { "" };

        Self {
            container_class: class_list(&[
                CONTAINER_CLASS,
                dragging_class,
                config.class_name.as_str(),
            ]),
            container_size: Size::new(size, size),
            container_overrides: config.style.clone(),
            background: Rect::new(0.0, -config.max_drag_distance, size, size),
            background_color: colors.background,
            button_class: class_list(&[BUTTON_CLASS, dragging_class]),
            button: Rect::new(0.0, -displacement, size, size - displacement),
            button_offset_y: -displacement,
            button_fill,
            text_color: colors.text,
            label: config.label.clone(),
            connector: Rect::from_origin_size(
                Point::new(connector_x, mid_y),
                Size::new(CONNECTOR_LENGTH, CONNECTOR_THICKNESS),
            ),
            tooltip_class: class_list(&[
                TOOLTIP_CLASS,
                config.tooltip_shape.class_name(),
                config.tooltip_position.class_name(),
            ]),
            tooltip: Rect::from_origin_size(
                Point::new(tooltip_x, mid_y - tooltip_size.height / 2.0),
                tooltip_size,
            ),
            tooltip_extent,
            tooltip_background: colors.tooltip_background,
            tooltip_text_color: colors.tooltip_text,
            tooltip_text: config
                .mapper()
                .label(displacement, &config.value_format)
                .to_string(),
        }
    }
}

/// Everything needed to draw a basic drag button.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicStyle {
    /// Button classes: `drag-button`, `dragging` while active, then the caller's class.
    pub class: String,
    /// Whether the button renders as disabled.
    pub disabled: bool,
    /// Inline overrides, in order.
    pub overrides: StyleOverrides,
    /// Button content.
    pub content: String,
}

impl BasicStyle {
    /// Derives the style for the current state.
    #[must_use]
    pub fn derive(config: &BasicConfig, gesture: &BasicGesture) -> Self {
        let dragging_class = if gesture.is_dragging() {
            DRAGGING_CLASS
        } else {
            ""
        };
        Self {
            class: class_list(&[BUTTON_CLASS, dragging_class, config.class_name.as_str()]),
            disabled: config.disabled,
            overrides: config.style.clone(),
            content: config.content.clone(),
        }
    }
}
