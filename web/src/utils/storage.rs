use shared_types::{KeyValueStore, StoreError};

/// The visitor's `localStorage`. Reads see nothing and writes fail while
/// rendering on the server.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
impl BrowserStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}

#[cfg(not(feature = "hydrate"))]
impl KeyValueStore for BrowserStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable(format!(
            "cannot persist {} outside the browser",
            key
        )))
    }
}

#[cfg(all(test, not(feature = "hydrate")))]
mod tests {
    use super::*;

    #[test]
    fn server_side_store_reads_nothing() {
        assert_eq!(BrowserStore.get("rugCafeNewsletterClosed"), Ok(None));
        assert!(matches!(
            BrowserStore.set("rugCafeNewsletterClosed", "1"),
            Err(StoreError::Unavailable(_))
        ));
    }
}
