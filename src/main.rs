// src/main.rs
use yew::prelude::*;

mod dom;
mod tool_state;
mod tools;

use tools::base64_tool::Base64Tool;
use tools::color_converter::ColorConverter;
use tools::curl_converter::CurlConverter;
use tools::json_formatter::JsonFormatter;
use tools::json_yaml_converter::JsonYamlConverter;
use tools::jwt_decoder::JwtDecoder;
use tools::regex_tester::RegexTester;
use tools::svg_optimizer::SvgOptimizer;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tool {
    Json,
    Regex,
    Curl,
    Base64,
    Color,
    Svg,
    Yaml,
    Jwt,
}

fn tool_label(t: Tool) -> &'static str {
    match t {
        Tool::Json => "JSON",
        Tool::Regex => "Regex",
        Tool::Curl => "cURL",
        Tool::Base64 => "Base64",
        Tool::Color => "Color",
        Tool::Svg => "SVG",
        Tool::Yaml => "YAML",
        Tool::Jwt => "JWT",
    }
}

#[function_component(App)]
fn app() -> Html {
    let tool = use_state(|| Tool::Json);

    let set_tool = {
        let tool = tool.clone();
        Callback::from(move |t: Tool| tool.set(t))
    };

    let content = match *tool {
        Tool::Json => html! { <JsonFormatter /> },
        Tool::Regex => html! { <RegexTester /> },
        Tool::Curl => html! { <CurlConverter /> },
        Tool::Base64 => html! { <Base64Tool /> },
        Tool::Color => html! { <ColorConverter /> },
        Tool::Svg => html! { <SvgOptimizer /> },
        Tool::Yaml => html! { <JsonYamlConverter /> },
        Tool::Jwt => html! { <JwtDecoder /> },
    };

    html! {
      <div class="app">
        <div class="tabs" role="tablist" aria-label="DevBox Tools">
          { for [
              Tool::Json, Tool::Regex, Tool::Curl, Tool::Base64,
              Tool::Color, Tool::Svg, Tool::Yaml, Tool::Jwt
            ].into_iter().map(|t| {
              let is_active = *tool == t;
              let cls = if is_active { "tab active" } else { "tab" };
              let set_tool = set_tool.clone();
              html!{
                <button
                  class={cls}
                  role="tab"
                  aria-selected={is_active.to_string()}
                  onclick={Callback::from(move |_| set_tool.emit(t))}
                >
                  { tool_label(t) }
                </button>
              }
          })}
        </div>

        { content }
      </div>
    }
}

fn main() {
    let root = web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .get_element_by_id("app")
        .unwrap();
    yew::Renderer::<App>::with_root(root).render();
}
