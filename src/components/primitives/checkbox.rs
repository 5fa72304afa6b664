//! Checkbox Component

use gpui::{
    div, prelude::*, px, App, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::GridColors;

type ToggleHandler = Box<dyn Fn(bool, &mut Window, &mut App) + 'static>;

/// A checkbox; `on_toggle` receives the requested new state
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    checked: bool,
    disabled: bool,
    label: Option<SharedString>,
    on_toggle: Option<ToggleHandler>,
}

impl Checkbox {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            disabled: false,
            label: None,
            on_toggle: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn on_toggle(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_toggle = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let checked = self.checked;

        let box_el = div()
            .size(px(16.0))
            .flex_none()
            .rounded_sm()
            .border_1()
            .border_color(if checked {
                GridColors::checkbox_checked()
            } else {
                GridColors::input_border()
            })
            .bg(if checked {
                GridColors::checkbox_checked()
            } else {
                GridColors::content_bg()
            })
            .flex()
            .items_center()
            .justify_center()
            .text_color(GridColors::text_inverse())
            .text_size(px(11.0))
            .when(checked, |this| this.child("✓"));

        let mut row = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .child(box_el)
            .when_some(self.label, |this, label| {
                this.child(
                    div()
                        .text_sm()
                        .text_color(GridColors::text_primary())
                        .child(label),
                )
            });

        match (self.disabled, self.on_toggle) {
            (true, _) => row = row.opacity(0.5),
            (false, Some(handler)) => {
                row = row
                    .cursor_pointer()
                    .on_click(move |_, window, cx| handler(!checked, window, cx));
            }
            (false, None) => {}
        }

        row
    }
}
