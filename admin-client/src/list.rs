//! List view state
//!
//! A [`ListView`] caches the collection fetched for a screen and derives the
//! visible, paginated rows from the current [`ListFilter`]. Nothing here talks
//! to the network; screens fetch and hand the results over.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use shared::listing::{self, DEFAULT_PAGE_SIZE, ListFilter, Listable};

use crate::{ClientError, ClientResult};

/// Result of a delete as seen by the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// Server answered 404; the row was dropped anyway
    AlreadyGone,
}

#[derive(Debug, Clone)]
pub struct ListView<T> {
    items: Vec<T>,
    filter: ListFilter,
    page: u32,
    per_page: u32,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<T> ListView<T> {
    pub fn new(per_page: u32) -> Self {
        Self {
            items: Vec::new(),
            filter: ListFilter::default(),
            page: 1,
            per_page,
        }
    }

    /// Replace the cached collection with a fresh fetch.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.page = self.page.min(self.total_pages_unfiltered());
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn filter(&self) -> &ListFilter {
        &self.filter
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn total_pages_unfiltered(&self) -> u32 {
        listing::total_pages(self.items.len() as u64, self.per_page)
    }
}

impl<T: Listable> ListView<T> {
    /// Changing the filter returns to the first page.
    pub fn set_filter(&mut self, filter: ListFilter) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.page = 1;
    }

    pub fn visible(&self) -> Vec<&T> {
        self.items.iter().filter(|item| item.matches(&self.filter)).collect()
    }

    pub fn total_pages(&self) -> u32 {
        listing::total_pages(self.visible().len() as u64, self.per_page)
    }

    /// Move to page `page`; out-of-range pages are refused.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        if page == 0 || page > self.total_pages() {
            return false;
        }
        self.page = page;
        true
    }

    pub fn page_items(&self) -> Vec<&T> {
        let page = self.page.clamp(1, self.total_pages());
        self.visible()
            .into_iter()
            .skip(((page - 1) * self.per_page) as usize)
            .take(self.per_page as usize)
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Replace the row with the same id; returns false when absent.
    pub fn replace(&mut self, item: T) -> bool {
        match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    pub fn update<F: FnOnce(&mut T)>(&mut self, id: &str, apply: F) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                apply(item);
                true
            }
            None => false,
        }
    }

    /// Reconcile a delete request with the cache.
    ///
    /// The row is removed on success and on 404; any other failure keeps it
    /// and is returned unchanged.
    pub fn apply_delete(&mut self, id: &str, result: ClientResult<()>) -> ClientResult<DeleteOutcome> {
        let outcome = match result {
            Ok(()) => DeleteOutcome::Deleted,
            Err(ClientError::NotFound(_)) => DeleteOutcome::AlreadyGone,
            Err(e) => return Err(e),
        };
        self.items.retain(|item| item.id() != id);
        self.page = self.page.min(self.total_pages());
        Ok(outcome)
    }
}

/// Default quiet period before a server-filtered search is sent
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);

/// Trailing-edge debouncer
///
/// Each call to [`settle`](Debouncer::settle) waits for the quiet period and
/// reports whether it is still the latest call; superseded calls return
/// `false` and their caller skips the request.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: AtomicU64,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: AtomicU64::new(0),
        }
    }

    pub async fn settle(&self) -> bool {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;
        self.generation.load(Ordering::SeqCst) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Customer;

    fn customer(id: &str, name: &str) -> Customer {
        Customer {
            id: id.into(),
            name: name.into(),
            email: format!("{}@mail.test", name.to_lowercase()),
            joined: "2024-01-01".into(),
        }
    }

    fn view(count: usize) -> ListView<Customer> {
        let mut view = ListView::new(10);
        view.set_items((1..=count).map(|i| customer(&i.to_string(), &format!("User{}", i))).collect());
        view
    }

    #[test]
    fn test_filter_resets_page() {
        let mut view = view(25);
        assert_eq!(view.total_pages(), 3);
        assert!(view.go_to_page(3));
        assert_eq!(view.page_items().len(), 5);

        view.set_search("user2");
        assert_eq!(view.page(), 1);
        // User2, User20..User25
        assert_eq!(view.visible().len(), 7);
        assert!(!view.go_to_page(2));
    }

    #[test]
    fn test_apply_delete() {
        let mut view = view(3);

        let outcome = view.apply_delete("1", Ok(())).unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);

        let outcome = view
            .apply_delete("2", Err(ClientError::NotFound("Category not found".into())))
            .unwrap();
        assert_eq!(outcome, DeleteOutcome::AlreadyGone);
        assert!(view.find("2").is_none());

        let err = view
            .apply_delete("3", Err(ClientError::Server { status: 500, message: "boom".into() }))
            .unwrap_err();
        assert!(matches!(err, ClientError::Server { status: 500, .. }));
        assert!(view.find("3").is_some());
    }

    #[test]
    fn test_replace_and_update() {
        let mut view = view(2);
        assert!(view.replace(customer("2", "Renamed")));
        assert_eq!(view.find("2").unwrap().name, "Renamed");
        assert!(!view.replace(customer("9", "Ghost")));
        assert!(view.update("1", |c| c.email = "new@mail.test".into()));
        assert_eq!(view.find("1").unwrap().email, "new@mail.test");
    }

    #[tokio::test(start_paused = true)]
    async fn test_debouncer_keeps_only_latest() {
        let debouncer = Debouncer::default();
        let first = debouncer.settle();
        let second = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            debouncer.settle().await
        };
        let (first, second) = tokio::join!(first, second);
        assert!(!first);
        assert!(second);

        // a lone call settles
        assert!(debouncer.settle().await);
    }
}
