use crate::neo_tracking::domain::FeedWindow;

/// FeedRequest - request DTO for the feed browsing use case
#[derive(Debug, Clone, Default)]
pub struct FeedRequest {
    /// First window to load; `None` means the default seven days from today
    pub window: Option<FeedWindow>,
    /// How many "load more" pages to attempt after the first window
    pub extra_pages: u32,
}

impl FeedRequest {
    pub fn new(window: Option<FeedWindow>, extra_pages: u32) -> Self {
        Self {
            window,
            extra_pages,
        }
    }
}

/// FeedResponse - summary of what a feed session loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedResponse {
    /// Records held by the session after the last page
    pub total_loaded: usize,
    /// Successful fetches, first window included
    pub pages_loaded: u32,
    pub has_more: bool,
}
