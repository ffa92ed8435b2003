use thiserror::Error;

pub const MAX_PAGE_LIMIT: i64 = 50;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("limit must be between 0 and 50, got {0}")]
    Limit(i64),
    #[error("offset must not be negative, got {0}")]
    Offset(i64),
}

/// A validated offset/limit window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: usize,
    pub limit: usize,
}

impl Page {
    pub fn new(limit: i64, offset: i64) -> Result<Self, PageError> {
        if !(0..=MAX_PAGE_LIMIT).contains(&limit) {
            return Err(PageError::Limit(limit));
        }
        if offset < 0 {
            return Err(PageError::Offset(offset));
        }
        Ok(Self {
            offset: usize::try_from(offset).map_err(|_| PageError::Offset(offset))?,
            limit: limit as usize,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    Ascending,
    #[default]
    Descending,
}

/// Sort `items` by `key`, then cut out the requested window.
///
/// Callers pass a key that is unique per item (e.g. `(created_at, id)`) so
/// equal timestamps still come out in a fixed order. An offset past the end
/// yields an empty page.
pub fn page<T, K, F>(mut items: Vec<T>, window: Page, key: F, order: Order) -> Vec<T>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    match order {
        Order::Ascending => items.sort_by(|a, b| key(a).cmp(&key(b))),
        Order::Descending => items.sort_by(|a, b| key(b).cmp(&key(a))),
    }
    items
        .into_iter()
        .skip(window.offset)
        .take(window.limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_bounds() {
        assert!(Page::new(0, 0).is_ok());
        assert!(Page::new(50, 0).is_ok());
        assert_eq!(Page::new(51, 0), Err(PageError::Limit(51)));
        assert_eq!(Page::new(-1, 0), Err(PageError::Limit(-1)));
        assert_eq!(Page::new(5, -1), Err(PageError::Offset(-1)));
    }

    #[test]
    fn seven_items_limit_five_offset_two() {
        // (timestamp, id) pairs, inserted out of order
        let items = vec![(3, "c"), (7, "g"), (1, "a"), (5, "e"), (2, "b"), (6, "f"), (4, "d")];
        let window = Page::new(5, 2).unwrap();

        let got = page(items, window, |&(ts, id)| (ts, id), Order::Descending);
        let ids: Vec<_> = got.iter().map(|(_, id)| *id).collect();
        assert_eq!(ids, vec!["e", "d", "c", "b", "a"]);
    }

    #[test]
    fn offset_past_end_is_empty() {
        let items = vec![1, 2, 3];
        let got = page(items, Page::new(5, 10).unwrap(), |x| *x, Order::Descending);
        assert!(got.is_empty());
    }

    #[test]
    fn zero_limit_is_empty() {
        let got = page(vec![1, 2, 3], Page::new(0, 0).unwrap(), |x| *x, Order::Descending);
        assert!(got.is_empty());
    }

    #[test]
    fn ties_broken_by_secondary_key() {
        let items = vec![(1, "b"), (1, "a"), (1, "c")];
        let got = page(items, Page::new(3, 0).unwrap(), |&(ts, id)| (ts, id), Order::Descending);
        assert_eq!(got, vec![(1, "c"), (1, "b"), (1, "a")]);

        let items = vec![(1, "b"), (1, "a"), (1, "c")];
        let got = page(items, Page::new(3, 0).unwrap(), |&(ts, id)| (ts, id), Order::Ascending);
        assert_eq!(got, vec![(1, "a"), (1, "b"), (1, "c")]);
    }
}
