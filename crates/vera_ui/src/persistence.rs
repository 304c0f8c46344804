//! Browser side effects behind the stateful primitives: the sidebar cookie, the tab query
//! parameter, and viewport measurement.
//!
//! On non-WASM targets reads return defaults and writes succeed without doing anything.

use vera_state::SidebarState;

#[cfg(target_arch = "wasm32")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

/// Restores the desktop sidebar state from `document.cookie`.
pub fn load_sidebar_state() -> SidebarState {
    #[cfg(target_arch = "wasm32")]
    {
        let header = html_document()
            .and_then(|document| document.cookie().ok())
            .unwrap_or_default();
        SidebarState::from_cookie_header(&header)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SidebarState::default()
    }
}

/// Writes the desktop sidebar state cookie.
pub fn persist_sidebar_state(state: &SidebarState) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let document = html_document().ok_or_else(|| "document unavailable".to_string())?;
        document
            .set_cookie(&state.cookie_value())
            .map_err(|err| format!("sidebar cookie write failed: {err:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = state;
        Ok(())
    }
}

/// Current `location.search`, empty when unavailable.
pub fn current_search() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// Replaces `location.search` without adding a history entry, keeping path and hash.
pub fn replace_search(search: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
        let location = window.location();
        let pathname = location
            .pathname()
            .map_err(|err| format!("location read failed: {err:?}"))?;
        let hash = location.hash().unwrap_or_default();
        window
            .history()
            .and_then(|history| {
                history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&format!("{pathname}{search}{hash}")),
                )
            })
            .map_err(|err| format!("history update failed: {err:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = search;
        Ok(())
    }
}

/// Viewport width in CSS pixels.
pub fn viewport_width() -> Option<u32> {
    #[cfg(target_arch = "wasm32")]
    {
        let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
        Some(width.max(0.0) as u32)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_targets_fall_back_to_defaults() {
        assert_eq!(load_sidebar_state(), SidebarState::default());
        assert_eq!(persist_sidebar_state(&SidebarState::default()), Ok(()));
        assert_eq!(current_search(), "");
        assert_eq!(replace_search("?tab=api"), Ok(()));
        assert_eq!(viewport_width(), None);
    }
}
