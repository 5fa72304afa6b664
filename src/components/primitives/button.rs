//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::GridColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Bordered button on a white background
    #[default]
    Outline,
    /// Borderless button, used for icons
    Ghost,
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Compact button (pagination, header icons)
    Small,
    #[default]
    Medium,
}

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    text_color: Option<gpui::Rgba>,
    on_click: Option<ClickHandler>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Outline,
            size: ButtonSize::Medium,
            disabled: false,
            text_color: None,
            on_click: None,
        }
    }

    /// Create an outline button
    pub fn outline(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Outline)
    }

    /// Create a ghost button
    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn small(self) -> Self {
        self.size(ButtonSize::Small)
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Override the label color (highlighted icons)
    pub fn text_color(mut self, color: gpui::Rgba) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg, hover_bg, bordered) = match self.variant {
            ButtonVariant::Outline => (
                GridColors::button_outline_bg(),
                GridColors::button_outline_hover(),
                true,
            ),
            ButtonVariant::Ghost => (
                gpui::rgba(0x00000000),
                GridColors::button_ghost_hover(),
                false,
            ),
        };

        let (padding_x, padding_y, font_size) = match self.size {
            ButtonSize::Small => (px(8.0), px(4.0), px(13.0)),
            ButtonSize::Medium => (px(14.0), px(7.0), px(14.0)),
        };

        let text_color = self.text_color.unwrap_or_else(GridColors::text_primary);

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .px(padding_x)
            .py(padding_y)
            .bg(bg)
            .text_color(text_color)
            .text_size(font_size)
            .rounded_md()
            .when(bordered, |this| {
                this.border_1().border_color(GridColors::input_border())
            })
            .child(self.label);

        if self.disabled {
            element = element.opacity(0.5);
        } else {
            element = element.cursor_pointer().hover(|s| s.bg(hover_bg));
            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
