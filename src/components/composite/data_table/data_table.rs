//! DataTable Component
//!
//! Renders a [`TableModel`] with a global filter bar, per-column filter
//! inputs, sortable headers, row selection and pagination.
//!
//! Filter edits go through a [`FilterController`]. Its debounced deliveries
//! fire on a tokio worker, travel over a channel and are re-emitted on the
//! UI thread as [`DataTableEvent`]s. A delivery superseded by an edit made
//! while it was queued is dropped there. Pagination, sorting and selection
//! clicks are emitted immediately; the host applies them and hands the new
//! state back through the setters.

use std::rc::Rc;

use ahash::AHashMap;
use gpui::{
    AnyElement, App, Context, Div, Entity, EventEmitter, FontWeight, IntoElement, ParentElement,
    Render, SharedString, Styled, Subscription, Task, Window, div, prelude::*, px,
};
use gpui_component::input::{Input, InputEvent, InputState};

use super::header::{filter_icon, filter_placeholder, sort_icon};
use super::pagination::Pagination;
use super::visibility::VisibilitySelector;
use crate::components::primitives::{Button, Checkbox};
use crate::constants::{GLOBAL_FILTER_WIDTH, HEADER_HEIGHT, ROW_HEIGHT, SELECTION_COLUMN_WIDTH};
use crate::filter::{DebounceWindows, Delivery, FilterController, FilterValues};
use crate::services::runtime_handle;
use crate::table::{
    Column, ColumnFilter, FilterBody, PaginationState, RowIdAccessor, RowSelectionState,
    SortingState, TableColumn, TableModel,
};
use crate::theme::colors::GridColors;

/// Events emitted to the host page
#[derive(Debug, Clone, PartialEq)]
pub enum DataTableEvent {
    /// Debounced snapshot of every column filter value
    FilterValuesChanged(FilterValues),
    /// Debounced global filter text
    GlobalFilterChanged(String),
    PaginationChanged(PaginationState),
    SortingChanged(SortingState),
    RowSelectionChanged(RowSelectionState),
}

/// Debounced payload crossing from the timer worker to the UI thread
#[derive(Debug)]
enum FilterDelivery {
    Values(Delivery<FilterValues>),
    Global(Delivery<String>),
}

impl From<FilterDelivery> for DataTableEvent {
    fn from(delivery: FilterDelivery) -> Self {
        match delivery {
            FilterDelivery::Values(d) => DataTableEvent::FilterValuesChanged(d.payload),
            FilterDelivery::Global(d) => DataTableEvent::GlobalFilterChanged(d.payload),
        }
    }
}

/// Optional features of a table
pub struct DataTableOptions<R> {
    /// Show the global filter bar, seeded with this value
    pub global_filter: Option<String>,
    /// Show the column visibility selector
    pub column_visibility: bool,
    /// Enable sorting with the host's current state
    pub sorting: Option<SortingState>,
    /// Enable row selection keyed by this accessor
    pub row_id: Option<RowIdAccessor<R>>,
    pub pagination: PaginationState,
}

impl<R> Default for DataTableOptions<R> {
    fn default() -> Self {
        Self {
            global_filter: None,
            column_visibility: false,
            sorting: None,
            row_id: None,
            pagination: PaginationState::default(),
        }
    }
}

/// DataTable component
pub struct DataTable<R: 'static> {
    model: TableModel<R>,
    filters: FilterController,
    global_input: Option<Entity<InputState>>,
    filter_inputs: AHashMap<String, Entity<InputState>>,
    show_visibility: bool,
    visibility_open: bool,
    _pump: Task<()>,
    subscriptions: Vec<Subscription>,
}

impl<R: 'static> EventEmitter<DataTableEvent> for DataTable<R> {}

impl<R: 'static> DataTable<R> {
    /// Create a new data table
    pub fn new(
        columns: Vec<Column<R>>,
        options: DataTableOptions<R>,
        windows: DebounceWindows,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let DataTableOptions {
            global_filter,
            column_visibility,
            sorting,
            row_id,
            pagination,
        } = options;

        let mut model = TableModel::new(columns);
        if let Some(sorting) = sorting {
            model = model.with_sorting(sorting);
        }
        if let Some(row_id) = row_id {
            model = model.with_row_selection(row_id);
        }
        model.set_pagination(pagination);

        let (delivery_tx, delivery_rx) = flume::unbounded();
        let column_tx = delivery_tx.clone();
        let filters = FilterController::new_stamped(
            windows,
            runtime_handle(),
            move |values| {
                let _ = column_tx.send(FilterDelivery::Values(values));
            },
            move |value| {
                let _ = delivery_tx.send(FilterDelivery::Global(value));
            },
        )
        .with_global_value(global_filter.clone().unwrap_or_default());

        let mut subscriptions = Vec::new();
        let mut global_input = None;
        if let Some(value) = global_filter {
            let state = cx.new(|cx| {
                InputState::new(window, cx)
                    .placeholder("Global filter")
                    .default_value(value)
            });
            subscriptions.push(cx.subscribe(
                &state,
                |this, state, event: &InputEvent, cx| {
                    if matches!(event, InputEvent::Change) {
                        let value = state.read(cx).value().to_string();
                        this.set_global_filter(value, cx);
                    }
                },
            ));
            global_input = Some(state);
        }

        // Drained until the table (and with it the sending controller) drops
        let pump = cx.spawn(async move |this, cx| {
            while let Ok(delivery) = delivery_rx.recv_async().await {
                let delivered = this.update(cx, |table, cx| table.deliver(delivery, cx));
                if delivered.is_err() {
                    break;
                }
            }
        });

        Self {
            model,
            filters,
            global_input,
            filter_inputs: AHashMap::new(),
            show_visibility: column_visibility,
            visibility_open: false,
            _pump: pump,
            subscriptions,
        }
    }

    // ==================== Host-Controlled State ====================

    /// Replace the rows of the current page
    pub fn set_rows(&mut self, rows: Vec<R>, cx: &mut Context<Self>) {
        self.model.set_rows(rows);
        cx.notify();
    }

    /// Total rows across all pages
    pub fn set_row_count(&mut self, row_count: usize, cx: &mut Context<Self>) {
        self.model.set_row_count(row_count);
        cx.notify();
    }

    pub fn set_loading(&mut self, loading: bool, cx: &mut Context<Self>) {
        self.model.set_loading(loading);
        cx.notify();
    }

    pub fn set_pagination(&mut self, pagination: PaginationState, cx: &mut Context<Self>) {
        self.model.set_pagination(pagination);
        cx.notify();
    }

    pub fn set_sorting(&mut self, sorting: SortingState, cx: &mut Context<Self>) {
        self.model.set_sorting(sorting);
        cx.notify();
    }

    pub fn set_row_selection(&mut self, selection: RowSelectionState, cx: &mut Context<Self>) {
        self.model.set_row_selection(selection);
        cx.notify();
    }

    pub fn model(&self) -> &TableModel<R> {
        &self.model
    }

    pub fn filters(&self) -> &FilterController {
        &self.filters
    }

    // ==================== Filters ====================

    fn deliver(&mut self, delivery: FilterDelivery, cx: &mut Context<Self>) {
        let current = match &delivery {
            FilterDelivery::Values(d) => self.filters.is_column_delivery_current(d.ticket),
            FilterDelivery::Global(d) => self.filters.is_global_delivery_current(d.ticket),
        };
        if !current {
            tracing::trace!(?delivery, "Dropping superseded filter delivery");
            return;
        }

        let event = DataTableEvent::from(delivery);
        tracing::debug!(?event, "Filter delivery");
        cx.emit(event);
    }

    fn set_column_filter(&mut self, key: &str, value: String, cx: &mut Context<Self>) {
        self.filters.set_column_filter_value(key, value);
        cx.notify();
    }

    fn set_global_filter(&mut self, value: String, cx: &mut Context<Self>) {
        self.filters.set_global_filter_value(value);
        cx.notify();
    }

    fn toggle_filter(&mut self, key: &str, window: &mut Window, cx: &mut Context<Self>) {
        if self.filters.toggle_column_filter_active(key) {
            self.ensure_filter_input(key, window, cx);
        }
        cx.notify();
    }

    /// Text inputs are created on first activation and kept afterwards
    fn ensure_filter_input(&mut self, key: &str, window: &mut Window, cx: &mut Context<Self>) {
        let is_text = self.model.columns().iter().any(|column| match &column.filter {
            Some(ColumnFilter::Text { key: text_key }) => {
                let text_key: &str = text_key;
                text_key == key
            }
            _ => false,
        });
        if !is_text || self.filter_inputs.contains_key(key) {
            return;
        }

        let value = self.filters.column_filter_value(key).to_string();
        let placeholder = filter_placeholder(key);
        let state = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder(placeholder)
                .default_value(value)
        });

        let filter_key = key.to_string();
        self.subscriptions.push(cx.subscribe(
            &state,
            move |this, state, event: &InputEvent, cx| {
                if matches!(event, InputEvent::Change) {
                    let value = state.read(cx).value().to_string();
                    this.set_column_filter(&filter_key, value, cx);
                }
            },
        ));
        self.filter_inputs.insert(key.to_string(), state);
    }

    // ==================== Pass-Through Events ====================

    fn toggle_sort(&mut self, column_id: &str, cx: &mut Context<Self>) {
        if let Some(next) = self.model.toggle_sorting(column_id) {
            tracing::debug!(column = column_id, sorting = ?next, "Sorting requested");
            cx.emit(DataTableEvent::SortingChanged(next));
        }
    }

    fn toggle_row(&mut self, row_id: &str, cx: &mut Context<Self>) {
        if let Some(next) = self.model.toggle_row_selected(row_id) {
            cx.emit(DataTableEvent::RowSelectionChanged(next));
        }
    }

    fn previous_page(&mut self, cx: &mut Context<Self>) {
        if let Some(next) = self.model.previous_page() {
            cx.emit(DataTableEvent::PaginationChanged(next));
        }
    }

    fn next_page(&mut self, cx: &mut Context<Self>) {
        if let Some(next) = self.model.next_page() {
            cx.emit(DataTableEvent::PaginationChanged(next));
        }
    }

    // ==================== Visibility ====================

    fn toggle_visibility_menu(&mut self, cx: &mut Context<Self>) {
        self.visibility_open = !self.visibility_open;
        cx.notify();
    }

    fn toggle_column_visibility(&mut self, column_id: &str, cx: &mut Context<Self>) {
        self.model.toggle_column_visibility(column_id);
        cx.notify();
    }

    fn toggle_all_columns_visible(&mut self, cx: &mut Context<Self>) {
        self.model.toggle_all_columns_visible();
        cx.notify();
    }

    // ==================== Rendering ====================

    fn render_toolbar(&self, cx: &mut Context<Self>) -> Div {
        let mut toolbar = div()
            .w_full()
            .px_5()
            .py_3()
            .flex()
            .items_center()
            .justify_between()
            .gap_5()
            .bg(GridColors::toolbar_bg())
            .rounded_md();

        toolbar = match &self.global_input {
            Some(state) => toolbar.child(div().w(px(GLOBAL_FILTER_WIDTH)).child(Input::new(state))),
            None => toolbar.child(div()),
        };

        if self.show_visibility {
            let columns = self
                .model
                .all_columns()
                .iter()
                .map(|column| {
                    let id = column.id();
                    (SharedString::from(id.to_string()), self.model.is_column_visible(id))
                })
                .collect();

            let open = cx.listener(|this, _: &(), _, cx| this.toggle_visibility_menu(cx));
            let all = cx.listener(|this, _: &(), _, cx| this.toggle_all_columns_visible(cx));
            let single =
                cx.listener(|this, column_id: &str, _, cx| this.toggle_column_visibility(column_id, cx));

            toolbar = toolbar.child(
                VisibilitySelector::new(columns, self.visibility_open)
                    .on_open_change(move |window, cx| open(&(), window, cx))
                    .on_toggle_all(move |window, cx| all(&(), window, cx))
                    .on_toggle_column(move |column_id, window, cx| single(column_id, window, cx)),
            );
        }

        toolbar
    }

    fn render_header(&self, columns: &[TableColumn<'_, R>], cx: &mut Context<Self>) -> Div {
        let cells: Vec<AnyElement> = columns
            .iter()
            .enumerate()
            .map(|(ix, column)| self.render_header_cell(ix, column, cx))
            .collect();

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .flex()
            .items_center()
            .bg(GridColors::table_header_bg())
            .border_b_1()
            .border_color(GridColors::border())
            .children(cells)
    }

    fn render_header_cell(
        &self,
        ix: usize,
        column: &TableColumn<'_, R>,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let cell = div()
            .w(px(cell_width(column)))
            .flex_none()
            .px_3()
            .flex()
            .items_center()
            .gap_2()
            .whitespace_nowrap();

        let TableColumn::Data(column) = column else {
            return cell.into_any_element();
        };

        let mut cell = cell;
        if let Some(key) = column.filter_key() {
            let (glyph, color) = filter_icon(self.filters.is_filter_active(key));
            let key = key.to_string();
            cell = cell.child(
                Button::ghost(("filter-toggle", ix), glyph)
                    .small()
                    .text_color(color)
                    .on_click(cx.listener(move |this, _, window, cx| {
                        this.toggle_filter(&key, window, cx)
                    })),
            );
        }

        if self.model.can_sort(&column.id) {
            let (glyph, color) = sort_icon(self.model.next_sorting_order(&column.id));
            let column_id = column.id.to_string();
            cell = cell.child(
                Button::ghost(("sort-toggle", ix), glyph)
                    .small()
                    .text_color(color)
                    .on_click(cx.listener(move |this, _, _, cx| this.toggle_sort(&column_id, cx))),
            );
        }

        cell.child(
            div()
                .text_sm()
                .font_weight(FontWeight::MEDIUM)
                .text_color(GridColors::text_primary())
                .child(column.label.clone()),
        )
        .into_any_element()
    }

    fn render_filter_row(&self, columns: &[TableColumn<'_, R>], cx: &mut Context<Self>) -> Div {
        let cells = columns.iter().map(|column| {
            let cell = div().w(px(cell_width(column))).flex_none().px_3().py_3();
            let filter = match column {
                TableColumn::Data(column) => column.filter.as_ref(),
                TableColumn::Selection => None,
            };
            match filter {
                Some(filter) if self.filters.is_filter_active(filter.key()) => {
                    cell.child(self.render_filter_input(filter, cx))
                }
                _ => cell,
            }
        });

        div()
            .w_full()
            .flex()
            .items_center()
            .bg(GridColors::table_header_bg())
            .border_b_1()
            .border_color(GridColors::border())
            .children(cells)
    }

    fn render_filter_input(&self, filter: &ColumnFilter, cx: &mut Context<Self>) -> AnyElement {
        match filter {
            ColumnFilter::Text { key } => {
                let key: &str = key;
                match self.filter_inputs.get(key) {
                    Some(state) => Input::new(state).into_any_element(),
                    None => div().into_any_element(),
                }
            }
            ColumnFilter::Custom { key, body } => {
                let weak = cx.weak_entity();
                let filter_key = key.to_string();
                let on_change: Rc<dyn Fn(String, &mut App)> = Rc::new(move |value, cx| {
                    let _ = weak.update(cx, |this, cx| this.set_column_filter(&filter_key, value, cx));
                });
                body(FilterBody {
                    value: self.filters.column_filter_value(key).to_string().into(),
                    on_change,
                })
            }
        }
    }

    fn render_body(&self, columns: &[TableColumn<'_, R>], cx: &mut Context<Self>) -> AnyElement {
        if self.model.is_loading() {
            return render_message("Content is loading here");
        }
        if self.model.rows().is_empty() {
            return render_message("No results.");
        }

        let rows: Vec<Div> = self
            .model
            .rows()
            .iter()
            .enumerate()
            .map(|(ix, row)| self.render_row(ix, row, columns, cx))
            .collect();

        div()
            .id("data-table-rows")
            .flex_1()
            .overflow_y_scroll()
            .children(rows)
            .into_any_element()
    }

    fn render_row(
        &self,
        ix: usize,
        row: &R,
        columns: &[TableColumn<'_, R>],
        cx: &mut Context<Self>,
    ) -> Div {
        let row_id = self.model.row_id(ix, row);
        let selected = self.model.is_row_selected(&row_id);

        let cells: Vec<AnyElement> = columns
            .iter()
            .map(|column| {
                let content = match column {
                    TableColumn::Selection => {
                        let toggle =
                            cx.listener(|this, row_id: &str, _, cx| this.toggle_row(row_id, cx));
                        let row_id = row_id.clone();
                        Checkbox::new(("row-select", ix))
                            .checked(selected)
                            .on_toggle(move |_, window, cx| toggle(row_id.as_str(), window, cx))
                            .into_any_element()
                    }
                    TableColumn::Data(column) => column.render_cell(row),
                };
                div()
                    .w(px(cell_width(column)))
                    .flex_none()
                    .px_3()
                    .text_sm()
                    .text_color(GridColors::text_primary())
                    .overflow_hidden()
                    .child(content)
                    .into_any_element()
            })
            .collect();

        div()
            .h(px(ROW_HEIGHT))
            .w_full()
            .flex()
            .items_center()
            .bg(if selected {
                GridColors::table_row_selected()
            } else {
                GridColors::content_bg()
            })
            .hover(|s| s.bg(GridColors::table_row_hover()))
            .border_b_1()
            .border_color(GridColors::border())
            .children(cells)
    }

    fn render_pagination(&self, cx: &mut Context<Self>) -> Pagination {
        let previous = cx.listener(|this, _: &(), _, cx| this.previous_page(cx));
        let next = cx.listener(|this, _: &(), _, cx| this.next_page(cx));

        Pagination::new(
            self.model.pagination().page_index,
            self.model.page_count(),
            self.model.row_count(),
        )
        .selected_count(self.model.row_selection().map(|s| s.selected_count()))
        .on_previous(self.model.can_previous_page(), move |window, cx| {
            previous(&(), window, cx)
        })
        .on_next(self.model.can_next_page(), move |window, cx| next(&(), window, cx))
    }
}

fn cell_width<R>(column: &TableColumn<'_, R>) -> f32 {
    match column {
        TableColumn::Selection => SELECTION_COLUMN_WIDTH,
        TableColumn::Data(column) => column.width.pixels(),
    }
}

fn render_message(message: &'static str) -> AnyElement {
    div()
        .h_24()
        .w_full()
        .flex()
        .items_center()
        .justify_center()
        .text_sm()
        .text_color(GridColors::text_muted())
        .child(message)
        .into_any_element()
}

impl<R: 'static> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let columns = self.model.visible_columns();

        let toolbar = (self.global_input.is_some() || self.show_visibility)
            .then(|| self.render_toolbar(cx));
        let header = self.render_header(&columns, cx);
        let filter_row = self
            .filters
            .has_active_filters()
            .then(|| self.render_filter_row(&columns, cx));
        let body = self.render_body(&columns, cx);
        let pagination = self.render_pagination(cx);

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(GridColors::content_bg())
            .border_1()
            .border_color(GridColors::border())
            .rounded_md()
            .overflow_hidden()
            .children(toolbar)
            .child(header)
            .children(filter_row)
            .child(body)
            .child(pagination)
    }
}

/// Helper to create a DataTable entity
pub fn data_table<R: 'static, V: 'static>(
    columns: Vec<Column<R>>,
    options: DataTableOptions<R>,
    windows: DebounceWindows,
    window: &mut Window,
    cx: &mut Context<V>,
) -> Entity<DataTable<R>> {
    cx.new(|cx| DataTable::new(columns, options, windows, window, cx))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use gpui::TestAppContext;

    use super::*;

    fn values(pairs: &[(&str, &str)]) -> FilterValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn stamped<T>(ticket: u64, payload: T) -> Delivery<T> {
        Delivery { ticket, payload }
    }

    #[test]
    fn test_deliveries_map_to_events() {
        let values = values(&[("status", "pending")]);
        assert_eq!(
            DataTableEvent::from(FilterDelivery::Values(stamped(3, values.clone()))),
            DataTableEvent::FilterValuesChanged(values)
        );
        assert_eq!(
            DataTableEvent::from(FilterDelivery::Global(stamped(0, "zebra".to_string()))),
            DataTableEvent::GlobalFilterChanged("zebra".to_string())
        );
    }

    #[test]
    fn test_options_default_to_plain_table() {
        let options = DataTableOptions::<String>::default();
        assert!(options.global_filter.is_none());
        assert!(!options.column_visibility);
        assert!(options.sorting.is_none());
        assert!(options.row_id.is_none());
        assert_eq!(options.pagination, PaginationState::default());
    }

    // ==================== Host Integration ====================

    const WINDOW: Duration = Duration::from_millis(20);

    /// Page stand-in that records every event the table emits
    struct Host {
        table: Option<Entity<DataTable<String>>>,
        events: Vec<DataTableEvent>,
        _subscription: Subscription,
    }

    impl Host {
        fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
            let columns = vec![
                Column::new("status", "Status", |row: &String| {
                    div().child(row.clone()).into_any_element()
                })
                .custom_filter("status", |_| div().into_any_element()),
            ];
            let windows = DebounceWindows {
                column: WINDOW,
                global: WINDOW,
            };
            let table = data_table(columns, DataTableOptions::default(), windows, window, cx);
            let subscription = cx.subscribe(&table, |this, _, event: &DataTableEvent, _| {
                this.events.push(event.clone());
            });
            Self {
                table: Some(table),
                events: Vec::new(),
                _subscription: subscription,
            }
        }
    }

    impl Render for Host {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            div()
        }
    }

    /// Let timers fire on the tokio worker, then drain the UI side
    fn settle(cx: &mut TestAppContext) {
        std::thread::sleep(WINDOW * 5);
        cx.run_until_parked();
    }

    /// Wait until the host has seen `count` events
    fn wait_for_events(cx: &mut TestAppContext, host: &gpui::WindowHandle<Host>, count: usize) {
        for _ in 0..100 {
            cx.run_until_parked();
            let seen = host
                .update(cx, |host, _, _| host.events.len())
                .expect("host window");
            if seen >= count {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    fn events(cx: &mut TestAppContext, host: &gpui::WindowHandle<Host>) -> Vec<DataTableEvent> {
        host.update(cx, |host, _, _| host.events.clone())
            .expect("host window")
    }

    #[gpui::test]
    fn test_column_edit_reaches_host(cx: &mut TestAppContext) {
        let host = cx.add_window(Host::new);
        host.update(cx, |host, _, cx| {
            let table = host.table.clone().expect("table");
            table.update(cx, |table, cx| {
                table.set_column_filter("status", "pend".to_string(), cx);
                table.set_column_filter("status", "pending".to_string(), cx);
            });
        })
        .expect("host window");

        wait_for_events(cx, &host, 1);
        settle(cx);
        assert_eq!(
            events(cx, &host),
            vec![DataTableEvent::FilterValuesChanged(values(&[(
                "status", "pending"
            )]))]
        );
    }

    #[gpui::test]
    fn test_toggle_emits_nothing(cx: &mut TestAppContext) {
        let host = cx.add_window(Host::new);
        host.update(cx, |host, window, cx| {
            let table = host.table.clone().expect("table");
            table.update(cx, |table, cx| {
                table.toggle_filter("status", window, cx);
                assert!(table.filters().is_filter_active("status"));
                assert!(!table.filters().is_column_pending());
            });
        })
        .expect("host window");

        settle(cx);
        assert!(events(cx, &host).is_empty());
    }

    #[gpui::test]
    fn test_dropping_table_cancels_pending_delivery(cx: &mut TestAppContext) {
        let host = cx.add_window(Host::new);
        host.update(cx, |host, _, cx| {
            let table = host.table.take().expect("table");
            table.update(cx, |table, cx| {
                table.set_column_filter("status", "pending".to_string(), cx);
            });
        })
        .expect("host window");

        cx.run_until_parked();
        settle(cx);
        assert!(events(cx, &host).is_empty());
    }

    // A delivery drained after a newer edit was committed carries an
    // outdated ticket and must not reach the host.
    #[gpui::test]
    fn test_superseded_delivery_is_dropped(cx: &mut TestAppContext) {
        let host = cx.add_window(Host::new);
        host.update(cx, |host, _, cx| {
            let table = host.table.clone().expect("table");
            table.update(cx, |table, cx| {
                table.set_column_filter("status", "A".to_string(), cx);
                table.set_column_filter("status", "B".to_string(), cx);
                let stale = stamped(0, values(&[("status", "A")]));
                table.deliver(FilterDelivery::Values(stale), cx);
                table.deliver(FilterDelivery::Global(stamped(7, "A".to_string())), cx);
            });
        })
        .expect("host window");
        assert!(events(cx, &host).is_empty());

        wait_for_events(cx, &host, 1);
        settle(cx);
        assert_eq!(
            events(cx, &host),
            vec![DataTableEvent::FilterValuesChanged(values(&[("status", "B")]))]
        );
    }
}
