//! Table State - Host-controlled pagination, sorting, selection and
//! grid-local column visibility

use ahash::AHashMap;

use crate::constants::DEFAULT_PAGE_SIZE;

/// Current page of a manually paginated table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationState {
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size,
        }
    }

    /// Number of pages for `row_count` rows (0 when there are no rows)
    pub fn page_count(&self, row_count: usize) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        row_count.div_ceil(self.page_size)
    }

    /// Offset of the first row on this page
    pub fn offset(&self) -> usize {
        self.page_index * self.page_size
    }

    pub fn first_page(&self) -> Self {
        Self {
            page_index: 0,
            ..*self
        }
    }
}

/// Sort direction of one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// One sorted column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSort {
    pub id: String,
    pub desc: bool,
}

impl ColumnSort {
    pub fn direction(&self) -> SortDirection {
        if self.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

/// Ordered list of sorted columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortingState(pub Vec<ColumnSort>);

impl SortingState {
    pub fn direction(&self, column_id: &str) -> Option<SortDirection> {
        self.0
            .iter()
            .find(|sort| sort.id == column_id)
            .map(ColumnSort::direction)
    }

    pub fn primary(&self) -> Option<&ColumnSort> {
        self.0.first()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Selected rows keyed by row id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSelectionState(pub AHashMap<String, bool>);

impl RowSelectionState {
    pub fn is_selected(&self, row_id: &str) -> bool {
        self.0.get(row_id).copied().unwrap_or(false)
    }

    /// Copy of this selection with `row_id` flipped
    pub fn toggled(&self, row_id: &str) -> Self {
        let mut next = self.0.clone();
        if next.remove(row_id).is_none_or(|selected| !selected) {
            next.insert(row_id.to_string(), true);
        }
        Self(next)
    }

    pub fn selected_count(&self) -> usize {
        self.0.values().filter(|selected| **selected).count()
    }
}

/// Column visibility keyed by column id; absent means visible
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityState(pub AHashMap<String, bool>);

impl VisibilityState {
    pub fn is_visible(&self, column_id: &str) -> bool {
        self.0.get(column_id).copied().unwrap_or(true)
    }

    pub fn toggle(&mut self, column_id: &str) {
        let visible = self.is_visible(column_id);
        self.0.insert(column_id.to_string(), !visible);
    }

    pub fn set_all<'a>(&mut self, column_ids: impl IntoIterator<Item = &'a str>, visible: bool) {
        for id in column_ids {
            self.0.insert(id.to_string(), visible);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        let pagination = PaginationState::new(0, 5);
        assert_eq!(pagination.page_count(0), 0);
        assert_eq!(pagination.page_count(5), 1);
        assert_eq!(pagination.page_count(7), 2);
        assert_eq!(PaginationState::new(0, 0).page_count(7), 0);
    }

    #[test]
    fn test_offset_and_first_page() {
        let pagination = PaginationState::new(3, 5);
        assert_eq!(pagination.offset(), 15);
        assert_eq!(pagination.first_page(), PaginationState::new(0, 5));
    }

    #[test]
    fn test_selection_toggle() {
        let selection = RowSelectionState::default();
        let selected = selection.toggled("728eg52f");
        assert!(selected.is_selected("728eg52f"));
        assert_eq!(selected.selected_count(), 1);

        let cleared = selected.toggled("728eg52f");
        assert!(!cleared.is_selected("728eg52f"));
        assert_eq!(cleared.selected_count(), 0);
    }

    #[test]
    fn test_visibility_defaults_to_visible() {
        let mut visibility = VisibilityState::default();
        assert!(visibility.is_visible("email"));
        visibility.toggle("email");
        assert!(!visibility.is_visible("email"));
        visibility.set_all(["email", "status"], false);
        assert!(!visibility.is_visible("status"));
    }

    #[test]
    fn test_sorting_direction_lookup() {
        let sorting = SortingState(vec![ColumnSort {
            id: "amount".into(),
            desc: true,
        }]);
        assert_eq!(sorting.direction("amount"), Some(SortDirection::Desc));
        assert_eq!(sorting.direction("status"), None);
    }
}
