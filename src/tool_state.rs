//! Per-tool state that survives page reloads.
//!
//! Each tool owns one or more named string values backed by localStorage and
//! optionally seeded from a URL query parameter, so pasted share links
//! pre-fill the tool. The URL is never written reactively: it is only read
//! once on mount, and produced on demand by [`ToolState::shareable_url`].

use yew::prelude::*;

use crate::dom;

#[derive(Clone)]
pub struct ToolState {
    value: UseStateHandle<String>,
    key: &'static str,
    url_param: Option<&'static str>,
}

impl ToolState {
    pub fn value(&self) -> String {
        (*self.value).clone()
    }

    /// Updates the in-memory value and writes it through under the storage
    /// key. A blocked localStorage degrades to in-memory-only state.
    pub fn set(&self, next: String) {
        self.value.set(next.clone());
        if let Some(st) = dom::local_storage() {
            let _ = st.set_item(self.key, &next);
        }
    }

    /// Current page URL carrying this value as a query parameter, or an
    /// empty string when the state was created without a URL parameter.
    pub fn shareable_url(&self) -> String {
        let Some(param) = self.url_param else {
            return String::new();
        };
        let Some(base) = dom::page_base_url() else {
            return String::new();
        };
        share_url(&base, param, &self.value())
    }
}

fn share_url(base: &str, param: &str, value: &str) -> String {
    format!("{base}?{param}={}", urlencoding::encode(value))
}

/// localStorage wins over the URL parameter, which wins over the default.
/// Empty strings count as absent.
fn resolve_initial(
    stored: Option<String>,
    from_url: Option<String>,
    default_value: &str,
) -> String {
    if let Some(v) = stored {
        if !v.is_empty() {
            return v;
        }
    }
    if let Some(v) = from_url {
        if !v.is_empty() {
            return v;
        }
    }
    default_value.to_string()
}

#[hook]
pub fn use_tool_state(
    key: &'static str,
    default_value: &'static str,
    url_param: Option<&'static str>,
) -> ToolState {
    let value = use_state(move || {
        let stored = dom::local_storage().and_then(|st| st.get_item(key).ok().flatten());
        let from_url = url_param.and_then(|p| dom::query_param(p));
        resolve_initial(stored, from_url, default_value)
    });

    ToolState {
        value,
        key,
        url_param,
    }
}
