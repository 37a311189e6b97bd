use std::sync::atomic::{AtomicUsize, Ordering};

use time::{Date, OffsetDateTime};

pub mod assets;
pub mod version;

static ID_COUNTER: AtomicUsize = AtomicUsize::new(1);

pub fn generate_id(prefix: &str) -> String {
    let value = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{value}")
}

/// Calendar date used for booking and delivery defaults.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_prefixed() {
        let first = generate_id("toast");
        let second = generate_id("toast");
        assert!(first.starts_with("toast-"));
        assert_ne!(first, second);
    }
}
