//! Local snapshot storage for the showcase demo state.

#[cfg(target_arch = "wasm32")]
const SNAPSHOT_KEY: &str = "vera.showcase.v1";

/// Loads the last saved snapshot JSON.
///
/// On non-WASM targets this returns `None`.
pub(crate) fn load_snapshot() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        local_storage()?.get_item(SNAPSHOT_KEY).ok().flatten()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Saves snapshot JSON to `localStorage`.
pub(crate) fn save_snapshot(raw: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = local_storage().ok_or_else(|| "localStorage unavailable".to_string())?;
        storage
            .set_item(SNAPSHOT_KEY, raw)
            .map_err(|err| format!("localStorage write failed: {err:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = raw;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
