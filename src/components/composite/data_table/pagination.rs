//! Pagination Component
//!
//! Previous/next navigation for the DataTable. The table decides which
//! directions are available; this component only renders and reports
//! clicks.

use gpui::{div, prelude::*, App, IntoElement, ParentElement, RenderOnce, Styled, Window};

use crate::components::primitives::Button;
use crate::theme::colors::GridColors;

type PageHandler = Box<dyn Fn(&mut Window, &mut App) + 'static>;

/// Pagination component
#[derive(IntoElement)]
pub struct Pagination {
    page_index: usize,
    page_count: usize,
    row_count: usize,
    selected_count: Option<usize>,
    can_previous: bool,
    can_next: bool,
    on_previous: Option<PageHandler>,
    on_next: Option<PageHandler>,
}

impl Pagination {
    pub fn new(page_index: usize, page_count: usize, row_count: usize) -> Self {
        Self {
            page_index,
            page_count,
            row_count,
            selected_count: None,
            can_previous: false,
            can_next: false,
            on_previous: None,
            on_next: None,
        }
    }

    /// Show "n of m row(s) selected" instead of the plain row count
    pub fn selected_count(mut self, selected: Option<usize>) -> Self {
        self.selected_count = selected;
        self
    }

    pub fn on_previous(
        mut self,
        enabled: bool,
        handler: impl Fn(&mut Window, &mut App) + 'static,
    ) -> Self {
        self.can_previous = enabled;
        self.on_previous = Some(Box::new(handler));
        self
    }

    pub fn on_next(mut self, enabled: bool, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.can_next = enabled;
        self.on_next = Some(Box::new(handler));
        self
    }
}

/// Status text shown left of the navigation buttons
pub(crate) fn summary_label(row_count: usize, selected: Option<usize>) -> String {
    match selected {
        Some(selected) => format!("{selected} of {row_count} row(s) selected"),
        None => format!("{row_count} row(s)"),
    }
}

/// 1-based page position, `Page 0 of 0` when there are no pages
pub(crate) fn page_label(page_index: usize, page_count: usize) -> String {
    if page_count == 0 {
        "Page 0 of 0".to_string()
    } else {
        format!("Page {} of {}", page_index + 1, page_count)
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let mut previous = Button::outline("page-previous", "Previous")
            .small()
            .disabled(!self.can_previous);
        if let Some(handler) = self.on_previous {
            previous = previous.on_click(move |_, window, cx| handler(window, cx));
        }

        let mut next = Button::outline("page-next", "Next")
            .small()
            .disabled(!self.can_next);
        if let Some(handler) = self.on_next {
            next = next.on_click(move |_, window, cx| handler(window, cx));
        }

        div()
            .w_full()
            .px_4()
            .py_4()
            .flex()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(GridColors::border())
            .child(
                div()
                    .text_sm()
                    .text_color(GridColors::text_secondary())
                    .child(summary_label(self.row_count, self.selected_count)),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .text_sm()
                            .text_color(GridColors::text_primary())
                            .child(page_label(self.page_index, self.page_count)),
                    )
                    .child(previous)
                    .child(next),
            )
    }
}
