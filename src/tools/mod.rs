pub mod base64_tool;
pub mod color_converter;
pub mod curl_converter;
pub mod json_formatter;
pub mod json_yaml_converter;
pub mod jwt_decoder;
pub mod regex_tester;
pub mod svg_optimizer;

use yew::prelude::*;

/// Inline status line: error-ish text gets the alert styling.
pub(crate) fn msg_view(s: &str) -> Html {
    if s.trim().is_empty() {
        html! { <div class="smallnote">{ " " }</div> }
    } else if s.to_lowercase().contains("error")
        || s.to_lowercase().contains("failed")
        || s.to_lowercase().contains("invalid")
        || s.to_lowercase().contains("unclosed")
    {
        html! { <div class="alert">{ s }</div> }
    } else {
        html! { <div class="ok">{ s }</div> }
    }
}
