//! Table Model
//!
//! Headless state behind the DataTable view: column definitions, the rows of
//! the current page and the host-controlled pagination, sorting and
//! selection. Pagination, sorting and selection are controlled: transitions
//! return the next state for the host to apply instead of mutating the
//! model. Column visibility is owned by the grid itself.
//!
//! Row ordering and slicing belong to the host; the model renders rows in
//! the order it is given.

use crate::constants::SELECTION_COLUMN_ID;

use super::column::Column;
use super::state::{
    ColumnSort, PaginationState, RowSelectionState, SortDirection, SortingState, VisibilityState,
};

/// Maps a row to its stable id for selection
pub type RowIdAccessor<R> = Box<dyn Fn(&R) -> String>;

/// A column as laid out in the header and body
pub enum TableColumn<'a, R> {
    /// Synthetic row-selection checkbox column
    Selection,
    /// A host-defined column
    Data(&'a Column<R>),
}

impl<R> TableColumn<'_, R> {
    pub fn id(&self) -> &str {
        match self {
            TableColumn::Selection => SELECTION_COLUMN_ID,
            TableColumn::Data(column) => AsRef::<str>::as_ref(&column.id),
        }
    }
}

struct RowSelection<R> {
    row_id: RowIdAccessor<R>,
    state: RowSelectionState,
}

/// Headless table state
pub struct TableModel<R> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    row_count: usize,
    loading: bool,
    pagination: PaginationState,
    sorting: Option<SortingState>,
    selection: Option<RowSelection<R>>,
    visibility: VisibilityState,
}

impl<R: 'static> TableModel<R> {
    pub fn new(columns: Vec<Column<R>>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            row_count: 0,
            loading: false,
            pagination: PaginationState::default(),
            sorting: None,
            selection: None,
            visibility: VisibilityState::default(),
        }
    }

    /// Enable sorting with the host's current state
    pub fn with_sorting(mut self, sorting: SortingState) -> Self {
        self.sorting = Some(sorting);
        self
    }

    /// Enable row selection keyed by `row_id`
    pub fn with_row_selection(mut self, row_id: impl Fn(&R) -> String + 'static) -> Self {
        self.selection = Some(RowSelection {
            row_id: Box::new(row_id),
            state: RowSelectionState::default(),
        });
        self
    }

    // ==================== Host-Controlled State ====================

    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    /// Total rows across all pages, as reported by the host
    pub fn set_row_count(&mut self, row_count: usize) {
        self.row_count = row_count;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_pagination(&mut self, pagination: PaginationState) {
        self.pagination = pagination;
    }

    /// Apply the host's sorting; ignored when sorting is disabled
    pub fn set_sorting(&mut self, sorting: SortingState) {
        if let Some(current) = self.sorting.as_mut() {
            *current = sorting;
        }
    }

    /// Apply the host's selection; ignored when selection is disabled
    pub fn set_row_selection(&mut self, state: RowSelectionState) {
        if let Some(selection) = self.selection.as_mut() {
            selection.state = state;
        }
    }

    // ==================== Getters ====================

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    pub fn sorting(&self) -> Option<&SortingState> {
        self.sorting.as_ref()
    }

    pub fn row_selection(&self) -> Option<&RowSelectionState> {
        self.selection.as_ref().map(|s| &s.state)
    }

    pub fn visibility(&self) -> &VisibilityState {
        &self.visibility
    }

    // ==================== Columns ====================

    /// Every column, selection first, regardless of visibility
    pub fn all_columns(&self) -> Vec<TableColumn<'_, R>> {
        let selection = self.selection.is_some().then_some(TableColumn::Selection);
        selection
            .into_iter()
            .chain(self.columns.iter().map(TableColumn::Data))
            .collect()
    }

    /// Columns to lay out, hidden ones skipped
    pub fn visible_columns(&self) -> Vec<TableColumn<'_, R>> {
        self.all_columns()
            .into_iter()
            .filter(|column| self.visibility.is_visible(column.id()))
            .collect()
    }

    pub fn is_column_visible(&self, column_id: &str) -> bool {
        self.visibility.is_visible(column_id)
    }

    pub fn toggle_column_visibility(&mut self, column_id: &str) {
        self.visibility.toggle(column_id);
        tracing::debug!(
            column = column_id,
            visible = self.visibility.is_visible(column_id),
            "Column visibility toggled"
        );
    }

    /// Show every column, or hide every column when all are already shown
    pub fn toggle_all_columns_visible(&mut self) {
        let ids: Vec<String> = self
            .all_columns()
            .iter()
            .map(|column| column.id().to_string())
            .collect();
        let all_visible = ids.iter().all(|id| self.visibility.is_visible(id));
        self.visibility
            .set_all(ids.iter().map(String::as_str), !all_visible);
    }

    /// Filter keys of filterable columns, in column order
    pub fn filter_keys(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter_map(|column| column.filter_key())
            .map(|key| AsRef::<str>::as_ref(key))
            .collect()
    }

    // ==================== Rows ====================

    /// Row id: the selection accessor when selection is enabled, else the
    /// row's index on the page
    pub fn row_id(&self, index: usize, row: &R) -> String {
        match &self.selection {
            Some(selection) => (selection.row_id)(row),
            None => index.to_string(),
        }
    }

    pub fn is_row_selected(&self, row_id: &str) -> bool {
        self.selection
            .as_ref()
            .is_some_and(|selection| selection.state.is_selected(row_id))
    }

    /// Next selection with `row_id` flipped, or `None` when selection is off
    pub fn toggle_row_selected(&self, row_id: &str) -> Option<RowSelectionState> {
        self.selection
            .as_ref()
            .map(|selection| selection.state.toggled(row_id))
    }

    // ==================== Pagination ====================

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.row_count)
    }

    pub fn can_previous_page(&self) -> bool {
        self.pagination.page_index > 0
    }

    pub fn can_next_page(&self) -> bool {
        self.pagination.page_index + 1 < self.page_count()
    }

    pub fn previous_page(&self) -> Option<PaginationState> {
        self.can_previous_page().then(|| PaginationState {
            page_index: self.pagination.page_index - 1,
            ..self.pagination
        })
    }

    pub fn next_page(&self) -> Option<PaginationState> {
        self.can_next_page().then(|| PaginationState {
            page_index: self.pagination.page_index + 1,
            ..self.pagination
        })
    }

    // ==================== Sorting ====================

    pub fn can_sort(&self, column_id: &str) -> bool {
        self.sorting.is_some()
            && self
                .columns
                .iter()
                .any(|column| column.sortable && AsRef::<str>::as_ref(&column.id) == column_id)
    }

    pub fn sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        self.sorting
            .as_ref()
            .and_then(|sorting| sorting.direction(column_id))
    }

    /// Direction a click would move `column_id` to; `None` clears the sort
    ///
    /// Descending comes first: unsorted -> desc -> asc -> unsorted.
    pub fn next_sorting_order(&self, column_id: &str) -> Option<SortDirection> {
        match self.sort_direction(column_id) {
            None => Some(SortDirection::Desc),
            Some(SortDirection::Desc) => Some(SortDirection::Asc),
            Some(SortDirection::Asc) => None,
        }
    }

    /// Next single-column sorting for a click on `column_id`, or `None` when
    /// the column cannot be sorted
    pub fn toggle_sorting(&self, column_id: &str) -> Option<SortingState> {
        if !self.can_sort(column_id) {
            return None;
        }
        let next = match self.next_sorting_order(column_id) {
            Some(direction) => vec![ColumnSort {
                id: column_id.to_string(),
                desc: direction == SortDirection::Desc,
            }],
            None => Vec::new(),
        };
        Some(SortingState(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{Empty, IntoElement};

    #[derive(Clone)]
    struct Row {
        id: &'static str,
    }

    fn column(id: &'static str) -> Column<Row> {
        Column::new(id, id, |_: &Row| Empty.into_any_element())
    }

    fn model() -> TableModel<Row> {
        TableModel::new(vec![
            column("status").text_filter("status"),
            column("email"),
            column("custom").unsortable(),
        ])
    }

    fn rows() -> Vec<Row> {
        vec![Row { id: "728eg52f" }, Row { id: "7283d52f" }]
    }

    fn ids<R>(columns: &[TableColumn<'_, R>]) -> Vec<String> {
        columns.iter().map(|c| c.id().to_string()).collect()
    }

    #[test]
    fn test_selection_column_is_prepended() {
        let plain = model();
        assert_eq!(ids(&plain.visible_columns()), ["status", "email", "custom"]);

        let selectable = model().with_row_selection(|row: &Row| row.id.to_string());
        assert_eq!(
            ids(&selectable.visible_columns()),
            ["select", "status", "email", "custom"]
        );
    }

    #[test]
    fn test_row_id_uses_accessor_or_index() {
        let mut plain = model();
        plain.set_rows(rows());
        assert_eq!(plain.row_id(1, &plain.rows()[1]), "1");

        let mut selectable = model().with_row_selection(|row: &Row| row.id.to_string());
        selectable.set_rows(rows());
        assert_eq!(selectable.row_id(1, &selectable.rows()[1]), "7283d52f");
    }

    #[test]
    fn test_row_selection_is_controlled() {
        let mut table = model().with_row_selection(|row: &Row| row.id.to_string());
        let next = table.toggle_row_selected("728eg52f").expect("selection enabled");
        // Not applied until the host hands it back
        assert!(!table.is_row_selected("728eg52f"));

        table.set_row_selection(next);
        assert!(table.is_row_selected("728eg52f"));
        assert!(model().toggle_row_selected("728eg52f").is_none());
    }

    #[test]
    fn test_pagination_bounds() {
        let mut table = model();
        table.set_row_count(7);
        table.set_pagination(PaginationState::new(0, 5));
        assert_eq!(table.page_count(), 2);
        assert!(!table.can_previous_page());
        assert!(table.can_next_page());
        assert_eq!(table.previous_page(), None);
        assert_eq!(table.next_page(), Some(PaginationState::new(1, 5)));

        table.set_pagination(PaginationState::new(1, 5));
        assert!(table.can_previous_page());
        assert!(!table.can_next_page());
        assert_eq!(table.previous_page(), Some(PaginationState::new(0, 5)));
    }

    #[test]
    fn test_no_rows_means_no_next_page() {
        let table = model();
        assert_eq!(table.page_count(), 0);
        assert!(!table.can_next_page());
    }

    #[test]
    fn test_sorting_cycles_desc_first() {
        let mut table = model().with_sorting(SortingState::default());
        assert_eq!(table.next_sorting_order("email"), Some(SortDirection::Desc));

        let desc = table.toggle_sorting("email").expect("sortable");
        assert_eq!(desc.direction("email"), Some(SortDirection::Desc));
        table.set_sorting(desc);

        let asc = table.toggle_sorting("email").expect("sortable");
        assert_eq!(asc.direction("email"), Some(SortDirection::Asc));
        table.set_sorting(asc);

        let cleared = table.toggle_sorting("email").expect("sortable");
        assert!(cleared.is_empty());
    }

    #[test]
    fn test_sorting_another_column_replaces_current() {
        let mut table = model().with_sorting(SortingState::default());
        let by_email = table.toggle_sorting("email").expect("sortable");
        table.set_sorting(by_email);

        let by_status = table.toggle_sorting("status").expect("sortable");
        assert_eq!(by_status.0.len(), 1);
        assert_eq!(by_status.direction("status"), Some(SortDirection::Desc));
        assert_eq!(by_status.direction("email"), None);
    }

    #[test]
    fn test_sorting_disabled_or_unsortable() {
        assert!(model().toggle_sorting("email").is_none());
        let table = model().with_sorting(SortingState::default());
        assert!(table.toggle_sorting("custom").is_none());
        assert!(table.toggle_sorting("missing").is_none());
    }

    #[test]
    fn test_visibility_toggles() {
        let mut table = model().with_row_selection(|row: &Row| row.id.to_string());
        table.toggle_column_visibility("email");
        assert_eq!(ids(&table.visible_columns()), ["select", "status", "custom"]);
        assert_eq!(table.all_columns().len(), 4);

        // Not all visible: show everything
        table.toggle_all_columns_visible();
        assert_eq!(table.visible_columns().len(), 4);

        // All visible: hide everything
        table.toggle_all_columns_visible();
        assert!(table.visible_columns().is_empty());
    }

    #[test]
    fn test_filter_keys() {
        assert_eq!(model().filter_keys(), ["status"]);
    }
}
