//! Payments Page
//!
//! Hosts a DataTable over the simulated payments backend. The page owns
//! pagination, sorting, selection and the global filter; every change
//! re-fetches the current page and a newer request replaces the older one.

use gpui::{
    AnyElement, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled,
    Subscription, Task, Window, div, prelude::*,
};
use tracing::{debug, info};

use super::payment::Payment;
use super::service::{PaymentsPageData, PaymentsQuery, PaymentsService};
use crate::components::composite::data_table::{
    DataTable, DataTableEvent, DataTableOptions, data_table,
};
use crate::components::primitives::Button;
use crate::config::GridConfig;
use crate::services::run_in_tokio;
use crate::table::{Column, FilterBody, PaginationState, SortingState};
use crate::theme::colors::GridColors;

/// Amount presets offered by the custom amount filter
const AMOUNT_PRESETS: [&str; 3] = ["", "100", "200"];

/// Payments page component
pub struct PaymentsPage {
    table: Entity<DataTable<Payment>>,
    service: PaymentsService,
    pagination: PaginationState,
    sorting: SortingState,
    global_filter: String,
    _fetch_task: Option<Task<()>>,
    _subscriptions: Vec<Subscription>,
}

impl PaymentsPage {
    pub fn new(config: &GridConfig, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let pagination = PaginationState::new(0, config.page_size());
        let options = DataTableOptions {
            global_filter: Some(String::new()),
            column_visibility: true,
            sorting: Some(SortingState::default()),
            row_id: Some(Box::new(|payment: &Payment| payment.id.clone())),
            pagination,
        };
        let table = data_table(
            payment_columns(),
            options,
            config.debounce_windows(),
            window,
            cx,
        );

        let subscriptions = vec![cx.subscribe(
            &table,
            |this, _table, event: &DataTableEvent, cx| this.on_table_event(event, cx),
        )];

        let mut page = Self {
            table,
            service: PaymentsService::with_sample_data(config.simulated_latency()),
            pagination,
            sorting: SortingState::default(),
            global_filter: String::new(),
            _fetch_task: None,
            _subscriptions: subscriptions,
        };
        page.refetch(cx);
        page
    }

    fn on_table_event(&mut self, event: &DataTableEvent, cx: &mut Context<Self>) {
        match event {
            DataTableEvent::FilterValuesChanged(values) => {
                info!(?values, "Column filters changed");
            }
            DataTableEvent::GlobalFilterChanged(value) => {
                info!(filter = %value, "Global filter changed");
                self.global_filter = value.clone();
                // The old page index may not exist in the filtered result
                self.set_pagination(self.pagination.first_page(), cx);
                self.refetch(cx);
            }
            DataTableEvent::PaginationChanged(pagination) => {
                self.set_pagination(*pagination, cx);
                self.refetch(cx);
            }
            DataTableEvent::SortingChanged(sorting) => {
                self.sorting = sorting.clone();
                let sorting = sorting.clone();
                self.table
                    .update(cx, |table, cx| table.set_sorting(sorting, cx));
                self.refetch(cx);
            }
            DataTableEvent::RowSelectionChanged(selection) => {
                debug!(selected = selection.selected_count(), "Row selection changed");
                let selection = selection.clone();
                self.table
                    .update(cx, |table, cx| table.set_row_selection(selection, cx));
            }
        }
    }

    fn set_pagination(&mut self, pagination: PaginationState, cx: &mut Context<Self>) {
        self.pagination = pagination;
        self.table
            .update(cx, |table, cx| table.set_pagination(pagination, cx));
    }

    fn query(&self) -> PaymentsQuery {
        PaymentsQuery {
            pagination: self.pagination,
            sorting: self.sorting.clone(),
            global_filter: self.global_filter.clone(),
        }
    }

    /// Request the current page; replacing the task drops any stale request
    fn refetch(&mut self, cx: &mut Context<Self>) {
        let query = self.query();
        let service = self.service.clone();
        debug!(?query, "Fetching payments");

        self.table.update(cx, |table, cx| table.set_loading(true, cx));
        self._fetch_task = Some(cx.spawn(async move |this, cx| {
            let page = run_in_tokio(async move { service.fetch_page(query).await }).await;
            let _ = this.update(cx, |this, cx| this.apply_page(page, cx));
        }));
    }

    fn apply_page(&mut self, page: PaymentsPageData, cx: &mut Context<Self>) {
        let PaymentsPageData { rows, total } = page;
        self.table.update(cx, |table, cx| {
            table.set_rows(rows, cx);
            table.set_row_count(total, cx);
            table.set_loading(false, cx);
        });
    }
}

impl Render for PaymentsPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .bg(GridColors::background())
            .px_8()
            .py_10()
            .flex()
            .flex_col()
            .child(self.table.clone())
    }
}

/// Column set of the payments grid
pub fn payment_columns() -> Vec<Column<Payment>> {
    vec![
        Column::new("status", "Status", |p: &Payment| text_cell(p.status.as_str()))
            .text_filter("status"),
        Column::new("email", "Email", |p: &Payment| text_cell(p.email.clone()))
            .text_filter("email"),
        Column::new("amount", "Amount", |p: &Payment| {
            text_cell(p.amount.to_string())
        })
        .fixed_width(200.0)
        .custom_filter("amount", amount_filter),
        Column::new("custom", "Custom Body", |p: &Payment| {
            text_cell(format!("Hello {}", p.email))
        }),
    ]
}

fn text_cell(text: impl Into<SharedString>) -> AnyElement {
    div().child(text.into()).into_any_element()
}

/// Preset buttons instead of a free text input
fn amount_filter(body: FilterBody) -> AnyElement {
    let current = body.value.to_string();
    let buttons = AMOUNT_PRESETS.into_iter().enumerate().map(|(ix, preset)| {
        let label = if preset.is_empty() { "Any" } else { preset };
        let mut button = Button::outline(("amount-preset", ix), label).small();
        if current == preset {
            button = button.text_color(GridColors::accent());
        }
        let on_change = body.on_change.clone();
        button.on_click(move |_, _, cx| on_change(preset.to_string(), cx))
    });

    div()
        .flex()
        .items_center()
        .gap_1()
        .children(buttons)
        .into_any_element()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableModel;

    #[test]
    fn test_payment_columns() {
        let model = TableModel::new(payment_columns()).with_sorting(SortingState::default());
        assert_eq!(model.filter_keys(), ["status", "email", "amount"]);
        assert!(model.can_sort("amount"));
        assert!(model.can_sort("custom"));
    }
}
