// JSON ⇄ YAML converter.

use yew::prelude::*;

use crate::dom;
use crate::tool_state::use_tool_state;
use crate::tools::msg_view;

const MODE_JSON_TO_YAML: &str = "json-to-yaml";
const MODE_YAML_TO_JSON: &str = "yaml-to-json";

fn json_to_yaml(input: &str) -> Result<String, String> {
    let v: serde_json::Value =
        serde_json::from_str(input).map_err(|e| format!("JSON parse error: {e}"))?;
    serde_yaml::to_string(&v).map_err(|e| format!("YAML stringify error: {e}"))
}

fn yaml_to_json(input: &str) -> Result<String, String> {
    let v: serde_json::Value =
        serde_yaml::from_str(input).map_err(|e| format!("YAML parse error: {e}"))?;
    serde_json::to_string_pretty(&v).map_err(|e| format!("JSON stringify error: {e}"))
}

#[function_component(JsonYamlConverter)]
pub fn json_yaml_converter() -> Html {
    let mode = use_tool_state("jsonYaml_mode", MODE_JSON_TO_YAML, Some("mode"));
    let input = use_tool_state("jsonYaml_input", "", Some("input"));
    let output = use_tool_state("jsonYaml_output", "", None);
    let msg = use_state(String::new);

    let json_to_yaml_mode = mode.value() == MODE_JSON_TO_YAML;

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let v = e
                .target_unchecked_into::<web_sys::HtmlTextAreaElement>()
                .value();
            input.set(v);
        })
    };

    let on_convert = {
        let input = input.clone();
        let output = output.clone();
        let msg = msg.clone();
        Callback::from(move |_| {
            let result = if json_to_yaml_mode {
                json_to_yaml(&input.value())
            } else {
                yaml_to_json(&input.value())
            };
            match result {
                Ok(s) => {
                    output.set(s);
                    msg.set("Converted OK.".to_string());
                }
                Err(e) => {
                    output.set(String::new());
                    msg.set(e);
                }
            }
        })
    };

    let on_switch_mode = {
        let mode = mode.clone();
        let input = input.clone();
        let output = output.clone();
        let msg = msg.clone();
        Callback::from(move |_| {
            let next = if json_to_yaml_mode {
                MODE_YAML_TO_JSON
            } else {
                MODE_JSON_TO_YAML
            };
            mode.set(next.to_string());
            input.set(String::new());
            output.set(String::new());
            msg.set(String::new());
        })
    };

    let on_reset = {
        let input = input.clone();
        let output = output.clone();
        let msg = msg.clone();
        Callback::from(move |_| {
            input.set(String::new());
            output.set(String::new());
            msg.set(String::new());
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
              <div class="block-title">
                { if json_to_yaml_mode { "JSON → YAML" } else { "YAML → JSON" } }
              </div>
              <div class="btnrow">
                <button class="btn" onclick={on_convert}>{ "Convert" }</button>
                <button class="btn" onclick={on_switch_mode}>
                  { if json_to_yaml_mode { "Switch to YAML → JSON" } else { "Switch to JSON → YAML" } }
                </button>
                <button class="btn" onclick={on_share}>{ "Share" }</button>
                <button class="btn" onclick={on_reset}>{ "Reset" }</button>
              </div>
            </div>
          </div>

          <div class="panel two-col">
            <div class="block">
              <div class="block-head">
                <div class="block-title">
                  { if json_to_yaml_mode { "JSON Input" } else { "YAML Input" } }
                </div>
              </div>
              <textarea
                value={input.value()}
                oninput={on_input}
                placeholder={ if json_to_yaml_mode { "{ \"hello\": \"world\" }" } else { "hello: world" } }
              />
            </div>

            <div class="block">
              <div class="block-head">
                <div class="block-title">
                  { if json_to_yaml_mode { "YAML Output" } else { "JSON Output" } }
                </div>
              </div>
              <textarea value={output.value()} readonly={true} placeholder="Converted result shows here" />
            </div>
          </div>

          { msg_view(&msg) }
        </div>
    }
}
