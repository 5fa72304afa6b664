//! Column Visibility Selector
//!
//! "Toggle Columns" button with a dropdown listing every column.

use std::rc::Rc;

use gpui::{
    deferred, div, prelude::*, px, App, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window,
};

use crate::components::primitives::{Button, Checkbox};
use crate::theme::colors::GridColors;

type Handler = Rc<dyn Fn(&mut Window, &mut App) + 'static>;
type ColumnHandler = Rc<dyn Fn(&str, &mut Window, &mut App) + 'static>;

/// Column visibility dropdown
#[derive(IntoElement)]
pub struct VisibilitySelector {
    columns: Vec<(SharedString, bool)>,
    open: bool,
    on_open_change: Option<Handler>,
    on_toggle_all: Option<Handler>,
    on_toggle_column: Option<ColumnHandler>,
}

impl VisibilitySelector {
    /// `columns` lists every column id with its current visibility
    pub fn new(columns: Vec<(SharedString, bool)>, open: bool) -> Self {
        Self {
            columns,
            open,
            on_open_change: None,
            on_toggle_all: None,
            on_toggle_column: None,
        }
    }

    pub fn on_open_change(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_open_change = Some(Rc::new(handler));
        self
    }

    pub fn on_toggle_all(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_toggle_all = Some(Rc::new(handler));
        self
    }

    pub fn on_toggle_column(
        mut self,
        handler: impl Fn(&str, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_toggle_column = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for VisibilitySelector {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let mut trigger = Button::outline("toggle-columns", "Toggle Columns");
        if let Some(handler) = self.on_open_change.clone() {
            trigger = trigger.on_click(move |_, window, cx| handler(window, cx));
        }

        let all_visible = self.columns.iter().all(|(_, visible)| *visible);

        let mut toggle_all = Checkbox::new("toggle-all-columns")
            .checked(all_visible)
            .label("Toggle all columns");
        if let Some(handler) = self.on_toggle_all.clone() {
            toggle_all = toggle_all.on_toggle(move |_, window, cx| handler(window, cx));
        }

        let items = self
            .columns
            .into_iter()
            .enumerate()
            .map(|(ix, (id, visible))| {
                let mut item = Checkbox::new(("column-visibility", ix))
                    .checked(visible)
                    .label(id.clone());
                if let Some(handler) = self.on_toggle_column.clone() {
                    item = item.on_toggle(move |_, window, cx| handler(&id, window, cx));
                }
                div().px_2().py_1().child(item)
            });

        let panel = div()
            .absolute()
            .top(px(40.0))
            .right_0()
            .w(px(224.0))
            .py_2()
            .bg(GridColors::popover_bg())
            .border_1()
            .border_color(GridColors::border())
            .rounded_md()
            .shadow_md()
            .flex()
            .flex_col()
            .child(
                div()
                    .px_2()
                    .pb_3()
                    .mb_1()
                    .border_b_1()
                    .border_color(GridColors::border())
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(toggle_all),
            )
            .children(items);

        div()
            .relative()
            .child(trigger)
            .when(self.open, |this| this.child(deferred(panel)))
    }
}
