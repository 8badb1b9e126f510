use crate::{application::error::ApplicationResult, domain::pagination::PageRequest};

/// Validates the caller's page selection and caps the size at the configured maximum.
pub(super) fn page_request(
    page_size: u32,
    page_num: u32,
    max_page_size: u32,
) -> ApplicationResult<PageRequest> {
    Ok(PageRequest::new(page_size, page_num)?.clamped(max_page_size))
}
