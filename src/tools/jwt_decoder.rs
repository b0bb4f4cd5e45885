// JWT decoder: base64url header + payload, signature left opaque.
// Decoding only; signatures are never verified.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::Value;
use yew::prelude::*;

use crate::dom;
use crate::tool_state::use_tool_state;
use crate::tools::msg_view;

fn decode_segment(part: &str) -> Result<Value, String> {
    let bytes = URL_SAFE_NO_PAD
        .decode(part.trim_end_matches('=').as_bytes())
        .map_err(|e| format!("base64url decode error: {e}"))?;
    let s = String::from_utf8(bytes).map_err(|e| format!("utf8 error: {e}"))?;
    serde_json::from_str(&s).map_err(|e| format!("JSON parse error: {e}"))
}

pub fn decode_jwt(token: &str) -> Result<String, String> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err("Invalid JWT format".to_string());
    }

    let header = decode_segment(parts[0]).map_err(|e| format!("Header: {e}"))?;
    let payload = decode_segment(parts[1]).map_err(|e| format!("Payload: {e}"))?;

    let out = serde_json::json!({
        "header": header,
        "payload": payload,
        "signature": parts[2],
    });
    serde_json::to_string_pretty(&out).map_err(|e| format!("JSON stringify error: {e}"))
}

fn render_output(token: &str) -> String {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match decode_jwt(trimmed) {
        Ok(s) => s,
        Err(e) => {
            let obj = serde_json::json!({ "error": e });
            serde_json::to_string_pretty(&obj).unwrap_or_default()
        }
    }
}

#[function_component(JwtDecoder)]
pub fn jwt_decoder() -> Html {
    let input = use_tool_state("jwtDecoder_input", "", Some("jwt"));
    let output = use_tool_state("jwtDecoder_output", "", None);
    let msg = use_state(String::new);

    // Decode on every input change; the decoded result is persisted like
    // the input so a reload restores both sides.
    {
        let output = output.clone();
        use_effect_with(input.value(), move |token| {
            output.set(render_output(token));
            || ()
        });
    }

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let v = e
                .target_unchecked_into::<web_sys::HtmlTextAreaElement>()
                .value();
            input.set(v);
        })
    };

    let on_copy = {
        let output = output.clone();
        let msg = msg.clone();
        Callback::from(move |_| {
            dom::copy_with_status(output.value(), msg.clone(), "Copied decoded result.");
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
        <div class="panel two-col">
          <div class="block">
            <div class="block-head">
              <div class="block-title">{ "JWT Token" }</div>
              <div class="btnrow">
                <button class="btn" onclick={on_share}>{ "Share" }</button>
              </div>
            </div>
            <textarea
              value={input.value()}
              oninput={on_input}
              placeholder="header.payload.signature"
            />
          </div>

          <div class="block">
            <div class="block-head">
              <div class="block-title">{ "Decoded Result" }</div>
              <div class="btnrow">
                <button class="btn" onclick={on_copy}>{ "Copy" }</button>
              </div>
            </div>
            <textarea value={output.value()} readonly={true} placeholder="Decoded result will appear here..." />
            <div class="smallnote">{ "Decodes base64url only; signatures are not verified." }</div>
          </div>

          { msg_view(&msg) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(header: &str, payload: &str, signature: &str) -> String {
        format!(
            "{}.{}.{}",
            URL_SAFE_NO_PAD.encode(header),
            URL_SAFE_NO_PAD.encode(payload),
            signature
        )
    }

    #[test]
    fn decodes_header_payload_and_keeps_signature_opaque() {
        let token = make_token(
            r#"{"alg":"HS256","typ":"JWT"}"#,
            r#"{"sub":"1234567890","name":"Dev Box"}"#,
            "sig-bytes",
        );

        let out = decode_jwt(&token).expect("valid token");
        let v: Value = serde_json::from_str(&out).expect("output is json");
        assert_eq!(v["header"]["alg"], "HS256");
        assert_eq!(v["payload"]["sub"], "1234567890");
        assert_eq!(v["signature"], "sig-bytes");
    }

    #[test]
    fn tolerates_padded_segments() {
        use base64::engine::general_purpose::URL_SAFE;
        let token = format!(
            "{}.{}.s",
            URL_SAFE.encode(r#"{"alg":"none"}"#),
            URL_SAFE.encode(r#"{"ok":true}"#)
        );
        let out = decode_jwt(&token).expect("padded segments decode");
        assert!(out.contains("\"ok\": true"));
    }

    #[test]
    fn wrong_segment_count_is_invalid() {
        assert_eq!(
            decode_jwt("onlyonepart").expect_err("not a jwt"),
            "Invalid JWT format"
        );
        assert_eq!(
            decode_jwt("two.parts").expect_err("not a jwt"),
            "Invalid JWT format"
        );
    }

    #[test]
    fn garbage_segments_name_the_failing_part() {
        let err = decode_jwt("!!!.???.sig").expect_err("bad base64");
        assert!(err.starts_with("Header:"));

        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"none"}"#);
        let err = decode_jwt(&format!("{header}.???.sig")).expect_err("bad payload");
        assert!(err.starts_with("Payload:"));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render_output("   "), "");
    }

    #[test]
    fn errors_render_as_an_error_object() {
        let out = render_output("nope");
        let v: Value = serde_json::from_str(&out).expect("error object is json");
        assert_eq!(v["error"], "Invalid JWT format");
    }
}
