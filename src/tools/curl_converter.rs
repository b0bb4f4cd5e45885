// cURL → fetch / axios converter.
//
// Parsing is regex-based and first-match-wins over the raw command text.
// The loose matching (no escaped quotes inside quoted values, only the first
// data flag) is the observable contract share links rely on, so it stays.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use yew::prelude::*;

use crate::dom;
use crate::tool_state::use_tool_state;
use crate::tools::msg_view;

pub const INVALID_INPUT: &str = "// Invalid cURL command";

static RE_QUOTED_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"'(https?://[^']+)'|"https?://[^"]+""#).expect("quoted url pattern")
});

static RE_BARE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("bare url pattern"));

static RE_METHOD: Lazy<Regex> = Lazy::new(|| Regex::new(r"-X (\w+)").expect("method pattern"));

static RE_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"-H '([^:]+):\s*([^']+)'|-H "([^:]+):\s*([^"]+)""#).expect("header pattern")
});

static RE_BODY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?:--data-raw|--data-binary|--data|-d)\s+'([^']+)'|(?:--data-raw|--data-binary|--data|-d)\s+"([^"]+)""#,
    )
    .expect("body pattern")
});

/// Request fields recovered from one cURL invocation. Recomputed from the
/// input on every change, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCurlRequest {
    pub url: String,
    pub method: String,
    pub headers: Map<String, Value>,
    pub body: Option<String>,
}

/// `None` when the input does not start with the `curl` token. Every field
/// falls back independently: empty URL, `GET`, empty headers, no body.
pub fn parse(curl: &str) -> Option<ParsedCurlRequest> {
    let trimmed = curl.trim();
    if !trimmed.starts_with("curl") {
        return None;
    }
    // Drop the `curl ` prefix; the flags are matched positionally after it.
    let cmd = trimmed.get(5..).unwrap_or("");

    let url = RE_QUOTED_URL
        .find(cmd)
        .or_else(|| RE_BARE_URL.find(cmd))
        .map(|m| m.as_str().replace(['\'', '"'], ""))
        .unwrap_or_default();

    let method = RE_METHOD
        .captures(cmd)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "GET".to_string());

    // Duplicate header names overwrite in place, keeping first-seen order.
    let mut headers = Map::new();
    for caps in RE_HEADER.captures_iter(cmd) {
        let name = caps.get(1).or_else(|| caps.get(3));
        let value = caps.get(2).or_else(|| caps.get(4));
        if let (Some(name), Some(value)) = (name, value) {
            headers.insert(
                name.as_str().to_string(),
                Value::String(value.as_str().to_string()),
            );
        }
    }

    let body = RE_BODY
        .captures(cmd)
        .and_then(|c| c.get(1).or_else(|| c.get(2)))
        .map(|m| m.as_str().to_string());

    Some(ParsedCurlRequest {
        url,
        method,
        headers,
        body,
    })
}

fn headers_json(headers: &Map<String, Value>) -> String {
    serde_json::to_string_pretty(&Value::Object(headers.clone()))
        .unwrap_or_else(|_| "{}".to_string())
}

pub fn to_fetch(curl: &str) -> String {
    let Some(req) = parse(curl) else {
        return INVALID_INPUT.to_string();
    };

    let headers = headers_json(&req.headers);
    let body = match &req.body {
        Some(b) => format!(",\n  body: {}", Value::String(b.clone())),
        None => String::new(),
    };

    format!(
        "fetch(\"{}\", {{\n  method: \"{}\",\n  headers: {}{}\n}})\n  .then(res => res.json())\n  .then(console.log)\n  .catch(console.error);",
        req.url, req.method, headers, body
    )
}

pub fn to_axios(curl: &str) -> String {
    let Some(req) = parse(curl) else {
        return INVALID_INPUT.to_string();
    };

    let method = req.method.to_lowercase();
    let headers = headers_json(&req.headers);

    let call = if method == "get" {
        format!("axios.get(\"{}\", {{ headers: {} }})", req.url, headers)
    } else {
        match &req.body {
            Some(b) => format!(
                "axios.{}(\"{}\", {}, {{ headers: {} }})",
                method,
                req.url,
                Value::String(b.clone()),
                headers
            ),
            None => format!("axios.{}(\"{}\", {{ headers: {} }})", method, req.url, headers),
        }
    };

    format!(
        "import axios from \"axios\";\n\n{call}\n  .then(res => console.log(res.data))\n  .catch(console.error);"
    )
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum OutputTab {
    Fetch,
    Axios,
}

#[function_component(CurlConverter)]
pub fn curl_converter() -> Html {
    let input = use_tool_state("devbox-curl-input", "", Some("curl"));
    let output_tab = use_state(|| OutputTab::Fetch);
    let msg = use_state(String::new);

    let rendered = match *output_tab {
        OutputTab::Fetch => to_fetch(&input.value()),
        OutputTab::Axios => to_axios(&input.value()),
    };

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let v = e
                .target_unchecked_into::<web_sys::HtmlTextAreaElement>()
                .value();
            input.set(v);
        })
    };

    let on_copy_output = {
        let rendered = rendered.clone();
        let msg = msg.clone();
        Callback::from(move |_| {
            dom::copy_with_status(rendered.clone(), msg.clone(), "Copied output.");
        })
    };

    let on_share = {
        let input = input.clone();
        let msg = msg.clone();
        Callback::from(move |_| {
            dom::copy_with_status(input.shareable_url(), msg.clone(), "Link copied to clipboard.");
        })
    };

    let tab_button = |t: OutputTab, label: &'static str| {
        let is_active = *output_tab == t;
        let cls = if is_active { "tab active" } else { "tab" };
        let output_tab = output_tab.clone();
        html! {
            <button class={cls} onclick={Callback::from(move |_| output_tab.set(t))}>
                { label }
            </button>
        }
    };

    html! {
        <div class="panel">
          <div class="block">
            <div class="block-head">
              <div class="block-title">{ "cURL Command" }</div>
              <div class="btnrow">
                <button class="btn" onclick={on_share}>{ "Share" }</button>
              </div>
            </div>
            <textarea
              value={input.value()}
              oninput={on_input}
              placeholder={"curl -X POST https://api.example.com -H 'Content-Type: application/json' -d '{\"a\":1}'"}
            />
          </div>

          <div class="tabs">
            { tab_button(OutputTab::Fetch, "Fetch") }
            { tab_button(OutputTab::Axios, "Axios") }
          </div>

          <div class="block">
            <div class="block-head">
              <div class="block-title">
                { match *output_tab { OutputTab::Fetch => "Fetch Output", OutputTab::Axios => "Axios Output" } }
              </div>
              <div class="btnrow">
                <button class="btn" onclick={on_copy_output}>{ "Copy" }</button>
              </div>
            </div>
            <textarea value={rendered} readonly={true} />
          </div>

          { msg_view(&msg) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_curl_input_yields_the_invalid_marker() {
        for input in ["", "wget https://a.dev", "GET /index.html", "  fetch()"] {
            assert_eq!(to_fetch(input), INVALID_INPUT);
            assert_eq!(to_axios(input), INVALID_INPUT);
        }
    }

    #[test]
    fn bare_curl_parses_to_all_defaults() {
        let req = parse("curl").expect("starts with curl");
        assert_eq!(req.url, "");
        assert_eq!(req.method, "GET");
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn url_prefers_single_quoted_then_double_then_bare() {
        let req = parse("curl 'https://a.dev/one'").expect("parses");
        assert_eq!(req.url, "https://a.dev/one");

        let req = parse(r#"curl "https://a.dev/two""#).expect("parses");
        assert_eq!(req.url, "https://a.dev/two");

        let req = parse("curl -s https://a.dev/three -o out.json").expect("parses");
        assert_eq!(req.url, "https://a.dev/three");
    }

    #[test]
    fn missing_method_defaults_to_get_in_both_renderings() {
        let input = "curl https://a.dev/items";
        assert!(to_fetch(input).contains("method: \"GET\""));
        assert!(to_axios(input).contains("axios.get(\"https://a.dev/items\", { headers: {} })"));
    }

    #[test]
    fn repeated_headers_overwrite_in_place() {
        let req = parse("curl https://a.dev -H 'Name: v1' -H 'Name: v2'").expect("parses");
        assert_eq!(req.headers.len(), 1);
        assert_eq!(req.headers["Name"], Value::String("v2".into()));
    }

    #[test]
    fn headers_render_in_first_seen_order() {
        let out = to_fetch("curl https://a.dev -H 'B-Second: 2' -H 'A-First: 1'");
        let b = out.find("B-Second").expect("B-Second rendered");
        let a = out.find("A-First").expect("A-First rendered");
        assert!(b < a);
    }

    #[test]
    fn post_with_data_embeds_method_and_json_string_body() {
        let out = to_fetch(r#"curl -X POST https://a.dev/login -d '{"username":"dev"}'"#);
        assert!(out.contains("method: \"POST\""));
        assert!(out.contains(r#"body: "{\"username\":\"dev\"}""#));
    }

    #[test]
    fn data_flag_variants_all_match() {
        for flag in ["-d", "--data", "--data-raw", "--data-binary"] {
            let input = format!("curl -X POST https://a.dev {flag} 'payload'");
            let req = parse(&input).expect("parses");
            assert_eq!(req.body.as_deref(), Some("payload"), "flag {flag}");
        }
    }

    #[test]
    fn fetch_rendering_of_the_login_example() {
        let input = r#"curl -X POST https://api.devbox.tools/login -H "Content-Type: application/json" -d '{"username":"dev"}'"#;
        let expected = "fetch(\"https://api.devbox.tools/login\", {\n  method: \"POST\",\n  headers: {\n  \"Content-Type\": \"application/json\"\n},\n  body: \"{\\\"username\\\":\\\"dev\\\"}\"\n})\n  .then(res => res.json())\n  .then(console.log)\n  .catch(console.error);";
        assert_eq!(to_fetch(input), expected);
    }

    #[test]
    fn axios_uses_three_argument_form_for_post_with_body() {
        let out = to_axios(r#"curl -X POST https://a.dev/login -d '{"username":"dev"}'"#);
        assert!(out.starts_with("import axios from \"axios\";\n\n"));
        assert!(out.contains(r#"axios.post("https://a.dev/login", "{\"username\":\"dev\"}", { headers: {} })"#));
        assert!(out.ends_with(".then(res => console.log(res.data))\n  .catch(console.error);"));
    }

    #[test]
    fn axios_lowercases_the_method_name() {
        let out = to_axios("curl -X DELETE https://a.dev/items/1");
        assert!(out.contains("axios.delete(\"https://a.dev/items/1\", { headers: {} })"));
    }

    #[test]
    fn missing_url_renders_as_empty_string() {
        let out = to_fetch("curl -X GET");
        assert!(out.starts_with("fetch(\"\", {"));
    }
}
