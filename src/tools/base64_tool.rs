// Base64 encoder/decoder: both directions derived live from one input.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use yew::prelude::*;

use crate::dom;
use crate::tool_state::use_tool_state;
use crate::tools::msg_view;

const DECODE_FAILED: &str = "// Invalid Base64 input";

fn encode_text(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

fn decode_text(input: &str) -> Result<String, String> {
    let bytes = STANDARD
        .decode(input.trim().as_bytes())
        .map_err(|e| format!("base64 decode error: {e}"))?;
    let s = String::from_utf8(bytes).map_err(|e| format!("utf8 error: {e}"))?;
    Ok(s.trim_end_matches(['\r', '\n']).to_string())
}

#[function_component(Base64Tool)]
pub fn base64_tool() -> Html {
    let input = use_tool_state("devbox-base64-input", "", Some("base64"));
    let msg = use_state(String::new);

    let input_value = input.value();
    let (encoded, decoded) = if input_value.is_empty() {
        (String::new(), String::new())
    } else {
        (
            encode_text(&input_value),
            decode_text(&input_value).unwrap_or_else(|_| DECODE_FAILED.to_string()),
        )
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

    let on_example = {
        let input = input.clone();
        Callback::from(move |_| input.set("Hello DevBox!".to_string()))
    };

    let on_share = {
        let input = input.clone();
        let msg = msg.clone();
        Callback::from(move |_| {
            dom::copy_with_status(input.shareable_url(), msg.clone(), "Link copied to clipboard.");
        })
    };

    let on_copy_encoded = {
        let encoded = encoded.clone();
        let msg = msg.clone();
        Callback::from(move |_| {
            dom::copy_with_status(encoded.clone(), msg.clone(), "Copied encoded output.");
        })
    };

    html! {
        <div class="panel">
          <div class="block">
            <div class="block-head">
              <div class="block-title">{ "Input" }</div>
              <div class="btnrow">
                <button class="btn" onclick={on_example}>{ "Try Example" }</button>
                <button class="btn" onclick={on_share}>{ "Share" }</button>
              </div>
            </div>
            <textarea
              value={input_value}
              oninput={on_input}
              placeholder="Text or base64 here"
            />
          </div>

          <div class="panel two-col">
            <div class="block">
              <div class="block-head">
                <div class="block-title">{ "Encoded (Base64)" }</div>
                <div class="btnrow">
                  <button class="btn" onclick={on_copy_encoded}>{ "Copy" }</button>
                </div>
              </div>
              <textarea value={encoded} readonly={true} placeholder="Encoded result shows here" />
            </div>

            <div class="block">
              <div class="block-head">
                <div class="block-title">{ "Decoded (UTF-8)" }</div>
              </div>
              <textarea value={decoded} readonly={true} placeholder="Decoded result shows here" />
            </div>
          </div>

          { msg_view(&msg) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_the_documented_example() {
        assert_eq!(encode_text("Hello DevBox!"), "SGVsbG8gRGV2Qm94IQ==");
    }

    #[test]
    fn decode_inverts_encode() {
        let original = "round trip: ünïcödé ok";
        let decoded = decode_text(&encode_text(original)).expect("valid base64");
        assert_eq!(decoded, original);
    }

    #[test]
    fn decode_strips_trailing_newlines() {
        let encoded = encode_text("line\r\n");
        assert_eq!(decode_text(&encoded).expect("valid base64"), "line");
    }

    #[test]
    fn decode_rejects_non_base64() {
        assert!(decode_text("%%%not base64%%%").is_err());
    }
}
