//! Displayable handles for in-memory payloads.
//!
//! In the browser these are `blob:` object URLs, which stay alive until they
//! are revoked. The pipeline owns every handle it creates and revokes it as
//! soon as a newer payload replaces it.

use std::collections::BTreeSet;

/// Creates and releases object URLs.
pub trait ObjectUrls {
    /// Register `payload` and return a URL for it, or `None` if the host refused.
    fn create(&mut self, payload: &[u8], mime: Option<&str>) -> Option<String>;

    /// Release a URL previously returned by [`ObjectUrls::create`].
    fn revoke(&mut self, url: &str);
}

/// In-process URL registry for native hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryObjectUrls {
    next_id: u64,
    live: BTreeSet<String>,
    revoked: u64,
}

impl MemoryObjectUrls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of URLs created and not yet revoked.
    pub fn live(&self) -> usize {
        self.live.len()
    }

    pub fn revoked(&self) -> u64 {
        self.revoked
    }

    pub fn is_live(&self, url: &str) -> bool {
        self.live.contains(url)
    }
}

impl ObjectUrls for MemoryObjectUrls {
    fn create(&mut self, payload: &[u8], mime: Option<&str>) -> Option<String> {
        self.next_id += 1;
        let url = format!(
            "memory:{}/{}/{}",
            mime.unwrap_or("application/octet-stream"),
            self.next_id,
            payload.len()
        );
        self.live.insert(url.clone());
        Some(url)
    }

    fn revoke(&mut self, url: &str) {
        if self.live.remove(url) {
            self.revoked += 1;
        }
    }
}
