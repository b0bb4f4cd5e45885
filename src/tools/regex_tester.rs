// Regex tester with live match highlighting.
//
// Flags follow the JavaScript convention users paste in: `g` decides whether
// every match or only the first is highlighted, the rest become inline
// engine flags. Unsupported letters are ignored.

use regex::Regex;
use yew::prelude::*;

use crate::dom;
use crate::tool_state::{use_tool_state, ToolState};
use crate::tools::msg_view;

fn build_matcher(pattern: &str, flags: &str) -> Option<Regex> {
    if pattern.is_empty() {
        return None;
    }
    let inline: String = flags
        .chars()
        .filter(|c| matches!(c, 'i' | 'm' | 's' | 'x' | 'U'))
        .collect();
    let pat = if inline.is_empty() {
        pattern.to_string()
    } else {
        format!("(?{inline}:{pattern})")
    };
    Regex::new(&pat).ok()
}

fn match_ranges(re: &Regex, text: &str, global: bool) -> Vec<(usize, usize)> {
    let mut out = vec![];
    for m in re.find_iter(text) {
        // zero-width matches would render nothing
        if m.start() == m.end() {
            continue;
        }
        out.push((m.start(), m.end()));
        if !global {
            break;
        }
    }
    out
}

fn highlight(text: &str, ranges: &[(usize, usize)]) -> Html {
    let mut out: Vec<Html> = Vec::new();
    let mut cursor = 0usize;

    for &(s, e) in ranges {
        if s > cursor {
            out.push(html! { <span>{ &text[cursor..s] }</span> });
        }
        out.push(html! { <mark class="hl">{ &text[s..e] }</mark> });
        cursor = e;
    }

    if cursor < text.len() {
        out.push(html! { <span>{ &text[cursor..] }</span> });
    }

    html! { <>{ for out }</> }
}

fn text_input(state: &ToolState, placeholder: &'static str) -> Html {
    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let v = e
                .target_unchecked_into::<web_sys::HtmlInputElement>()
                .value();
            state.set(v);
        })
    };
    html! {
        <input type="text" value={state.value()} {oninput} {placeholder} />
    }
}

#[function_component(RegexTester)]
pub fn regex_tester() -> Html {
    let pattern = use_tool_state("regex-pattern", "", Some("pattern"));
    let flags = use_tool_state("regex-flags", "g", Some("flags"));
    let text = use_tool_state("regex-text", "", Some("text"));
    let msg = use_state(String::new);

    let text_value = text.value();
    let flags_value = flags.value();

    // Invalid or empty patterns fall back to un-highlighted text.
    let highlighted = match build_matcher(&pattern.value(), &flags_value) {
        Some(re) => {
            let ranges = match_ranges(&re, &text_value, flags_value.contains('g'));
            highlight(&text_value, &ranges)
        }
        None => html! { <span>{ text_value.clone() }</span> },
    };

    let on_text = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            let v = e
                .target_unchecked_into::<web_sys::HtmlTextAreaElement>()
                .value();
            text.set(v);
        })
    };

    // Share carries all three parameters, not just one.
    let on_share = {
        let pattern = pattern.clone();
        let flags = flags.clone();
        let text = text.clone();
        let msg = msg.clone();
        Callback::from(move |_| {
            let Some(base) = dom::page_base_url() else {
                return;
            };
            let url = format!(
                "{base}?pattern={}&flags={}&text={}",
                urlencoding::encode(&pattern.value()),
                urlencoding::encode(&flags.value()),
                urlencoding::encode(&text.value()),
            );
            dom::copy_with_status(url, msg.clone(), "Link copied to clipboard.");
        })
    };

    html! {
        <div class="panel">
          <div class="block">
            <div class="block-head">
              <div class="block-title">{ "Regex Tester" }</div>
              <div class="btnrow">
                <button class="btn" onclick={on_share}>{ "Share" }</button>
              </div>
            </div>

            <div class="textline">
              <div class="row">
                { text_input(&pattern, r"Pattern (e.g. (\w+)=(\d+))") }
                { text_input(&flags, "Flags (g, i, m...)") }
              </div>
            </div>

            <textarea
              value={text_value}
              oninput={on_text}
              placeholder="Enter text here"
            />
          </div>

          <div class="block">
            <div class="block-head">
              <div class="block-title">{ "Matches" }</div>
            </div>
            <pre class="mono">{ highlighted }</pre>
          </div>

          { msg_view(&msg) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flag_highlights_every_match() {
        let re = build_matcher(r"\d+", "g").expect("valid pattern");
        assert_eq!(match_ranges(&re, "a1 b22 c333", true), vec![(1, 2), (4, 6), (8, 11)]);
    }

    #[test]
    fn without_global_flag_only_first_match_counts() {
        let re = build_matcher(r"\d+", "").expect("valid pattern");
        assert_eq!(match_ranges(&re, "a1 b22 c333", false), vec![(1, 2)]);
    }

    #[test]
    fn case_insensitive_flag_maps_to_inline_i() {
        let re = build_matcher("warn", "gi").expect("valid pattern");
        assert_eq!(match_ranges(&re, "WARN warn Warn", true).len(), 3);
    }

    #[test]
    fn unknown_flags_are_ignored() {
        let re = build_matcher("a", "guy").expect("valid pattern");
        assert_eq!(match_ranges(&re, "aaa", true).len(), 3);
    }

    #[test]
    fn invalid_or_empty_patterns_produce_no_matcher() {
        assert!(build_matcher("(unclosed", "g").is_none());
        assert!(build_matcher("", "g").is_none());
    }

    #[test]
    fn zero_width_matches_are_skipped() {
        let re = build_matcher("x*", "g").expect("valid pattern");
        assert_eq!(match_ranges(&re, "axxb", true), vec![(1, 3)]);
    }
}
