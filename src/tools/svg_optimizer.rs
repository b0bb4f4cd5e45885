// SVG optimizer: strips comments, editor metadata, and inter-tag whitespace.

use once_cell::sync::Lazy;
use regex::Regex;
use yew::prelude::*;

use crate::dom;
use crate::tool_state::use_tool_state;
use crate::tools::msg_view;

static RE_XML_PROLOG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<\?xml.*?\?>").expect("xml prolog pattern"));

static RE_DOCTYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!DOCTYPE[^>]*>").expect("doctype pattern"));

static RE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern"));

static RE_EDITOR_BLOCKS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<metadata[^>]*>.*?</metadata>|<title[^>]*>.*?</title>|<desc[^>]*>.*?</desc>")
        .expect("editor block pattern")
});

static RE_BETWEEN_TAGS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r">\s+<").expect("inter-tag whitespace pattern"));

static RE_SELF_CLOSED_SVG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<svg[^>]*/>").expect("self-closed svg pattern"));

pub fn optimize_svg(input: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if !trimmed.contains("<svg") {
        return Err("Input does not contain an <svg> element".to_string());
    }
    if !trimmed.contains("</svg>") && !RE_SELF_CLOSED_SVG.is_match(trimmed) {
        return Err("Unclosed <svg> element".to_string());
    }

    let out = RE_XML_PROLOG.replace_all(trimmed, "");
    let out = RE_DOCTYPE.replace_all(&out, "");
    let out = RE_COMMENT.replace_all(&out, "");
    let out = RE_EDITOR_BLOCKS.replace_all(&out, "");
    let out = RE_BETWEEN_TAGS.replace_all(&out, "><");
    Ok(out.trim().to_string())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum OutputTab {
    Preview,
    Code,
}

#[function_component(SvgOptimizer)]
pub fn svg_optimizer() -> Html {
    let input = use_tool_state("svg-optimizer", "", Some("data"));
    let output_tab = use_state(|| OutputTab::Preview);
    let msg = use_state(String::new);

    let result = optimize_svg(&input.value());
    let (optimized, error) = match &result {
        Ok(s) => (s.clone(), None),
        Err(e) => (String::new(), Some(e.clone())),
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

    let on_copy = {
        let optimized = optimized.clone();
        let msg = msg.clone();
        Callback::from(move |_| {
            dom::copy_with_status(optimized.clone(), msg.clone(), "Optimized SVG copied.");
        })
    };

    let on_download = {
        let optimized = optimized.clone();
        let msg = msg.clone();
        Callback::from(move |_| {
            match dom::download_text_file("optimized.svg", "image/svg+xml", &optimized) {
                Ok(_) => msg.set("Downloaded optimized.svg.".to_string()),
                Err(e) => msg.set(e),
            }
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

    let output = if optimized.is_empty() {
        html! {}
    } else {
        match *output_tab {
            OutputTab::Preview => html! {
                <div class="block">
                  <div class="block-head">
                    <div class="block-title">{ "Preview" }</div>
                    <div class="btnrow">
                      <button class="btn" onclick={on_download.clone()}>{ "Download" }</button>
                      <button class="btn" onclick={on_copy.clone()}>{ "Copy" }</button>
                    </div>
                  </div>
                  <div class="svg-preview">
                    { Html::from_html_unchecked(AttrValue::from(optimized.clone())) }
                  </div>
                </div>
            },
            OutputTab::Code => html! {
                <div class="block">
                  <div class="block-head">
                    <div class="block-title">{ "Optimized SVG Code" }</div>
                    <div class="btnrow">
                      <button class="btn" onclick={on_download.clone()}>{ "Download" }</button>
                      <button class="btn" onclick={on_copy.clone()}>{ "Copy" }</button>
                    </div>
                  </div>
                  <textarea value={optimized.clone()} readonly={true} />
                </div>
            },
        }
    };

    html! {
        <div class="panel">
          <div class="block">
            <div class="block-head">
              <div class="block-title">{ "SVG Code" }</div>
              <div class="btnrow">
                <button class="btn" onclick={on_share}>{ "Share" }</button>
              </div>
            </div>
            <textarea
              value={input.value()}
              oninput={on_input}
              placeholder="<svg xmlns=\"http://www.w3.org/2000/svg\">...</svg>"
            />
          </div>

          {
            match &error {
                Some(e) => msg_view(e),
                None => html! {},
            }
          }

          <div class="tabs">
            { tab_button(OutputTab::Preview, "Preview") }
            { tab_button(OutputTab::Code, "Code") }
          </div>

          { output }

          { msg_view(&msg) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_comments_and_collapses_whitespace() {
        let input = "<svg>\n  <!-- drawn in some editor -->\n  <rect width=\"4\"/>\n</svg>";
        assert_eq!(optimize_svg(input).unwrap(), "<svg><rect width=\"4\"/></svg>");
    }

    #[test]
    fn strips_prolog_doctype_and_editor_blocks() {
        let input = concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"svg11.dtd\">\n",
            "<svg xmlns=\"http://www.w3.org/2000/svg\">\n",
            "  <title>logo</title>\n",
            "  <desc>company logo</desc>\n",
            "  <metadata id=\"m\">junk</metadata>\n",
            "  <circle r=\"5\"/>\n",
            "</svg>"
        );
        assert_eq!(
            optimize_svg(input).unwrap(),
            "<svg xmlns=\"http://www.w3.org/2000/svg\"><circle r=\"5\"/></svg>"
        );
    }

    #[test]
    fn empty_input_produces_empty_output() {
        assert_eq!(optimize_svg("   ").unwrap(), "");
    }

    #[test]
    fn non_svg_input_is_an_error() {
        assert!(optimize_svg("<div>nope</div>").is_err());
    }

    #[test]
    fn unclosed_svg_is_an_error() {
        assert!(optimize_svg("<svg><rect width=\"4\"/>").is_err());
    }

    #[test]
    fn self_closing_svg_is_accepted() {
        assert_eq!(optimize_svg("<svg viewBox=\"0 0 1 1\"/>").unwrap(), "<svg viewBox=\"0 0 1 1\"/>");
    }
}
