// src/domain/pagination.rs
use crate::domain::errors::{DomainError, DomainResult};

/// One-based page selection used by every listing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_size: u32,
    page_num: u32,
}

impl PageRequest {
    pub fn new(page_size: u32, page_num: u32) -> DomainResult<Self> {
        if page_size == 0 {
            return Err(DomainError::Validation(
                "page size must be at least 1".into(),
            ));
        }
        if page_num == 0 {
            return Err(DomainError::Validation(
                "page number must be at least 1".into(),
            ));
        }
        Ok(Self {
            page_size,
            page_num,
        })
    }

    /// Caps the page size without touching the page number.
    #[must_use]
    pub fn clamped(self, max_page_size: u32) -> Self {
        Self {
            page_size: self.page_size.min(max_page_size.max(1)),
            page_num: self.page_num,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn page_num(&self) -> u32 {
        self.page_num
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page_num - 1) * i64::from(self.page_size)
    }
}

/// A page slice together with the total number of rows matching the same filter.
#[derive(Debug, Clone)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Paged<T> {
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_size_and_number() {
        assert!(matches!(
            PageRequest::new(0, 1),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            PageRequest::new(10, 0),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn offset_is_one_based() {
        let page = PageRequest::new(10, 1).unwrap();
        assert_eq!(page.offset(), 0);
        let page = PageRequest::new(10, 3).unwrap();
        assert_eq!(page.offset(), 20);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn clamp_caps_page_size() {
        let page = PageRequest::new(500, 2).unwrap().clamped(100);
        assert_eq!(page.page_size(), 100);
        assert_eq!(page.page_num(), 2);
        assert_eq!(page.offset(), 100);
    }
}
