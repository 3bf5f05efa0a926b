use contracts::domain::common::{Lookups, RecordId, Resource};
use contracts::shared::list_filter::ListFilter;

/// Which modal, if any, is open over the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Create,
    Edit(RecordId),
}

/// View state of one resource list page.
///
/// `items` holds exactly what the server returned for `filter`; the search
/// term and the page cursor only shape derived views of it.
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewState<R> {
    pub items: Vec<R>,
    pub lookups: Lookups,
    pub search_term: String,
    pub filter: ListFilter,
    /// 1-based
    pub current_page: usize,
    pub items_per_page: usize,
    pub selected_record: Option<R>,
    pub modal: ModalState,
    /// A fetch is in flight
    pub loading: bool,
    /// At least one fetch has completed
    pub is_loaded: bool,
}

impl<R: Resource> ListViewState<R> {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            items: Vec::new(),
            lookups: Lookups::new(),
            search_term: String::new(),
            filter: ListFilter::new(),
            current_page: 1,
            items_per_page: items_per_page.max(1),
            selected_record: None,
            modal: ModalState::Closed,
            loading: false,
            is_loaded: false,
        }
    }

    /// Replace the fetched set wholesale and return to page 1
    pub fn replace_items(&mut self, items: Vec<R>, lookups: Lookups) {
        self.items = items;
        self.lookups = lookups;
        self.current_page = 1;
        self.is_loaded = true;
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.current_page = 1;
    }

    /// Items matching the search term, in server order
    pub fn filtered_items(&self) -> Vec<&R> {
        self.items
            .iter()
            .filter(|item| item.matches_search(&self.search_term, &self.lookups))
            .collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_items().len()
    }

    /// Never less than 1, so "page 1 of 1" shows for an empty list
    pub fn total_pages(&self) -> usize {
        let count = self.filtered_count();
        ((count + self.items_per_page - 1) / self.items_per_page).max(1)
    }

    /// Slice of the filtered view for `page`
    pub fn page(&self, page: usize) -> Vec<R> {
        let filtered = self.filtered_items();
        paginate(&filtered, page, self.items_per_page)
            .iter()
            .map(|item| (*item).clone())
            .collect()
    }

    /// Rows of the current page
    pub fn page_items(&self) -> Vec<R> {
        self.page(self.current_page)
    }

    /// Move the cursor, clamped to existing pages
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page.max(1);
        self.current_page = 1;
    }

    pub fn open_create(&mut self) {
        self.selected_record = None;
        self.modal = ModalState::Create;
    }

    pub fn open_edit(&mut self, record: R) {
        self.modal = ModalState::Edit(record.id());
        self.selected_record = Some(record);
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
        self.selected_record = None;
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal != ModalState::Closed
    }

    /// Sum of `f` over the filtered view (table footers)
    pub fn total_by<F>(&self, f: F) -> f64
    where
        F: Fn(&R) -> f64,
    {
        self.filtered_items().into_iter().map(f).sum()
    }
}

/// `items[(page-1)*per_page .. page*per_page]`, clamped to the slice.
/// Page numbers start at 1; page 0 is treated as page 1.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if per_page == 0 {
        return &[];
    }
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_driver::aggregate::Driver;

    fn driver(id: i64, name: &str) -> Driver {
        Driver {
            id,
            name: name.to_string(),
            license_number: format!("B{}", 1000 + id),
            nic_no: format!("9{:08}V", id),
            phone: None,
            address: None,
            license_expiry: None,
            profile_image: None,
            status: None,
        }
    }

    fn state_with(n: i64, per_page: usize) -> ListViewState<Driver> {
        let mut state = ListViewState::new(per_page);
        let drivers = (1..=n).map(|i| driver(i, &format!("Driver {}", i))).collect();
        state.replace_items(drivers, Lookups::new());
        state
    }

    #[test]
    fn test_paginate_bounds() {
        let items: Vec<u32> = (1..=23).collect();
        assert_eq!(paginate(&items, 1, 10), &items[0..10]);
        assert_eq!(paginate(&items, 3, 10), &items[20..23]);
        assert!(paginate(&items, 4, 10).is_empty());
        assert_eq!(paginate(&items, 0, 10), &items[0..10]);
        assert!(paginate(&items, 1, 0).is_empty());
    }

    #[test]
    fn test_pages_cover_filtered_view_exactly() {
        let items: Vec<u32> = (1..=37).collect();
        for per_page in [1, 5, 10, 36, 37, 50] {
            let pages = (items.len() + per_page - 1) / per_page;
            let mut union = Vec::new();
            for page in 1..=pages {
                let slice = paginate(&items, page, per_page);
                assert!(slice.len() <= per_page);
                union.extend_from_slice(slice);
            }
            assert_eq!(union, items);
        }
    }

    #[test]
    fn test_replace_items_resets_page() {
        let mut state = state_with(25, 10);
        state.go_to_page(3);
        assert_eq!(state.current_page, 3);

        state.replace_items(vec![driver(1, "Only")], Lookups::new());
        assert_eq!(state.current_page, 1);
        assert_eq!(state.filtered_count(), 1);
    }

    #[test]
    fn test_search_is_derived_and_idempotent() {
        let mut state = state_with(12, 5);
        state.go_to_page(2);

        state.set_search_term("driver 1");
        assert_eq!(state.current_page, 1);
        let first: Vec<i64> = state.filtered_items().iter().map(|d| d.id).collect();
        assert_eq!(first, vec![1, 10, 11, 12]);
        assert_eq!(state.items.len(), 12);

        state.set_search_term("driver 1");
        let second: Vec<i64> = state.filtered_items().iter().map(|d| d.id).collect();
        assert_eq!(first, second);

        state.set_search_term("");
        assert_eq!(state.filtered_count(), state.items.len());
    }

    #[test]
    fn test_go_to_page_is_clamped() {
        let mut state = state_with(12, 5);
        assert_eq!(state.total_pages(), 3);
        state.go_to_page(9);
        assert_eq!(state.current_page, 3);
        assert_eq!(state.page_items().len(), 2);
        state.go_to_page(0);
        assert_eq!(state.current_page, 1);

        let empty: ListViewState<Driver> = ListViewState::new(10);
        assert_eq!(empty.total_pages(), 1);
        assert!(empty.page_items().is_empty());
    }

    #[test]
    fn test_modal_lifecycle() {
        let mut state = state_with(2, 10);
        state.open_edit(driver(2, "Driver 2"));
        assert_eq!(state.modal, ModalState::Edit(2));
        assert!(state.selected_record.is_some());

        state.close_modal();
        assert!(!state.is_modal_open());
        assert!(state.selected_record.is_none());

        state.open_create();
        assert_eq!(state.modal, ModalState::Create);
        assert!(state.selected_record.is_none());
    }
}
