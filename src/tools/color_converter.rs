// HEX → RGB / HSL color converter.

use yew::prelude::*;

use crate::dom;
use crate::tool_state::use_tool_state;
use crate::tools::msg_view;

fn parse_hex(color: &str) -> Result<u32, String> {
    let digits = color.strip_prefix('#').unwrap_or(color);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("\"{color}\" is not a #RRGGBB color"));
    }
    u32::from_str_radix(digits, 16).map_err(|e| format!("hex parse error: {e}"))
}

fn hex_to_rgb(color: &str) -> Result<String, String> {
    let v = parse_hex(color)?;
    let r = (v >> 16) & 255;
    let g = (v >> 8) & 255;
    let b = v & 255;
    Ok(format!("rgb({r}, {g}, {b})"))
}

fn hex_to_hsl(color: &str) -> Result<String, String> {
    let v = parse_hex(color)?;
    let r = ((v >> 16) & 255) as f64 / 255.0;
    let g = ((v >> 8) & 255) as f64 / 255.0;
    let b = (v & 255) as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    Ok(format!(
        "hsl({}, {}%, {}%)",
        (h * 360.0).round(),
        (s * 100.0).round(),
        (l * 100.0).round()
    ))
}

fn copy_row(label: &'static str, value: String, msg: UseStateHandle<String>) -> Html {
    let display = format!("{label}: {value}");
    let onclick = {
        let value = value.clone();
        Callback::from(move |_| {
            dom::copy_with_status(value.clone(), msg.clone(), "Copied.");
        })
    };
    html! {
        <div class="kv">
          <span class="tag mono">{ display }</span>
          <button class="btn small" {onclick}>{ "Copy" }</button>
        </div>
    }
}

#[function_component(ColorConverter)]
pub fn color_converter() -> Html {
    let color = use_tool_state("color-converter", "#ff0000", None);
    let msg = use_state(String::new);

    let value = color.value();
    let rgb = hex_to_rgb(&value);
    let hsl = hex_to_hsl(&value);

    let on_input = {
        let color = color.clone();
        Callback::from(move |e: InputEvent| {
            let v = e
                .target_unchecked_into::<web_sys::HtmlInputElement>()
                .value();
            color.set(v);
        })
    };

    let rows = match (&rgb, &hsl) {
        (Ok(rgb), Ok(hsl)) => html! {
            <>
              { copy_row("HEX", value.clone(), msg.clone()) }
              { copy_row("RGB", rgb.clone(), msg.clone()) }
              { copy_row("HSL", hsl.clone(), msg.clone()) }
            </>
        },
        (Err(e), _) | (_, Err(e)) => msg_view(e),
    };

    html! {
        <div class="panel">
          <div class="block">
            <div class="block-head">
              <div class="block-title">{ "Color" }</div>
            </div>

            <div class="textline">
              <div class="row">
                <input
                  type="text"
                  value={value.clone()}
                  oninput={on_input.clone()}
                  placeholder="#RRGGBB"
                />
                <input
                  type="color"
                  value={value}
                  oninput={on_input}
                />
              </div>
            </div>

            { rows }
          </div>

          { msg_view(&msg) }
        </div>
    }
}
