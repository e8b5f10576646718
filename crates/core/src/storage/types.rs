use crate::todo::TodoKey;

/// One bounded slice of a query or scan.
///
/// `next` is the key of the last item the store evaluated; pass it back as
/// the start key to resume. `None` means the read is exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<TodoKey>,
}

impl<T> Page<T> {
    /// Creates a page that ends the read.
    pub fn last(items: Vec<T>) -> Self {
        Self { items, next: None }
    }

    /// Creates a page followed by more results starting after `next`.
    pub fn with_next(items: Vec<T>, next: TodoKey) -> Self {
        Self {
            items,
            next: Some(next),
        }
    }

    /// Returns true if no further pages follow this one.
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_page() {
        let page = Page::last(vec![1, 2]);

        assert!(page.is_last());
        assert_eq!(page.items, vec![1, 2]);
    }

    #[test]
    fn test_page_with_next() {
        let page: Page<u8> = Page::with_next(Vec::new(), TodoKey::new("a@b.com", "1"));

        assert!(!page.is_last());
        assert_eq!(page.next, Some(TodoKey::new("a@b.com", "1")));
    }
}
