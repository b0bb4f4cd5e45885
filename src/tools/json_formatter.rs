// JSON formatter: validates and pretty-prints in place.

use yew::prelude::*;

use crate::dom;
use crate::tool_state::use_tool_state;
use crate::tools::msg_view;

fn pretty_json(input: &str) -> Result<String, String> {
    let v: serde_json::Value =
        serde_json::from_str(input).map_err(|e| format!("JSON parse error: {e}"))?;
    serde_json::to_string_pretty(&v).map_err(|e| format!("JSON stringify error: {e}"))
}

#[function_component(JsonFormatter)]
pub fn json_formatter() -> Html {
    let input = use_tool_state("devbox-json-formatter", "{}", Some("data"));
    let msg = use_state(String::new);

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let v = e
                .target_unchecked_into::<web_sys::HtmlTextAreaElement>()
                .value();
            input.set(v);
        })
    };

    let on_format = {
        let input = input.clone();
        let msg = msg.clone();
        Callback::from(move |_| match pretty_json(&input.value()) {
            Ok(s) => {
                input.set(s);
                msg.set("Formatted OK.".to_string());
            }
            Err(e) => msg.set(e),
        })
    };

    let on_share = {
        let input = input.clone();
        let msg = msg.clone();
        Callback::from(move |_| {
            dom::copy_with_status(input.shareable_url(), msg.clone(), "Link copied to clipboard.");
        })
    };

    html! {
        <div class="panel">
          <div class="block">
            <div class="block-head">
              <div class="block-title">{ "JSON" }</div>
              <div class="btnrow">
                <button class="btn" onclick={on_format}>{ "Format JSON" }</button>
                <button class="btn" onclick={on_share}>{ "Share" }</button>
              </div>
            </div>
            <textarea
              value={input.value()}
              oninput={on_input}
              placeholder="{ \"hello\": \"world\" }"
            />
          </div>

          { msg_view(&msg) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn formats_compact_json_with_two_space_indent() {
        let out = pretty_json(r#"{"a":1,"b":[true,null]}"#).expect("valid json");
        assert_eq!(out, "{\n  \"a\": 1,\n  \"b\": [\n    true,\n    null\n  ]\n}");
    }

    #[test]
    fn formatted_text_parses_back_to_the_same_value() {
        let original = json!({
            "name": "devbox",
            "tools": ["json", "regex", "curl"],
            "nested": { "depth": 2, "enabled": true, "ratio": 0.5 }
        });
        let formatted = pretty_json(&original.to_string()).expect("valid json");
        let reparsed: Value = serde_json::from_str(&formatted).expect("round trip");
        assert_eq!(reparsed, original);
    }

    #[test]
    fn invalid_json_reports_a_parse_error() {
        let err = pretty_json("{oops").expect_err("invalid json");
        assert!(err.starts_with("JSON parse error:"));
    }
}
