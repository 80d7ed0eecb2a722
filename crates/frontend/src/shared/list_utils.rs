/// List helpers shared by the admin tables and the catalog (search box, match highlighting)
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Byte ranges of every case-insensitive occurrence of `filter` in `text`
///
/// Ranges are offsets into `text` and always fall on char boundaries, even
/// where lowercasing changes a character's width. A match that starts or
/// ends inside the expansion of a single character is skipped.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let needle: String = filter.trim().chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    // origin[i] is the offset in `text` of lowered byte i, when that byte starts a char
    let mut haystack = String::with_capacity(text.len());
    let mut origin: Vec<Option<usize>> = Vec::with_capacity(text.len() + 1);
    for (offset, ch) in text.char_indices() {
        let before = haystack.len();
        haystack.extend(ch.to_lowercase());
        origin.push(Some(offset));
        origin.extend(std::iter::repeat(None).take(haystack.len() - before - 1));
    }
    origin.push(Some(text.len()));

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        match (origin[start], origin[end]) {
            (Some(s), Some(e)) => {
                ranges.push((s, e));
                from = end;
            }
            _ => {
                from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    ranges
}

/// Highlight matches of `filter` in `text` (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last = 0;
    for (start, end) in ranges {
        if start > last {
            parts.push(view! { <span>{text[last..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-hit">{text[start..end].to_string()}</mark> }.into_any());
        last = end;
    }
    if last < text.len() {
        parts.push(view! { <span>{text[last..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Receives the value once typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let input_value = RwSignal::new(value.get_untracked());
    // Bumped on every keystroke; a pending timer fires only if it is still the latest
    let generation = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        input_value.set(new_value.clone());
        let current = generation.get_value() + 1;
        generation.set_value(current);

        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.try_get_value() == Some(current) {
                on_change.run(new_value);
            }
        });
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        generation.update_value(|g| *g += 1);
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="Clear" on:click=clear_filter>
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Acetic Acid", "ac"), vec![(0, 2), (7, 9)]);
        assert_eq!(match_ranges("Acetic Acid", " ACID "), vec![(7, 11)]);
    }

    #[test]
    fn test_match_ranges_empty_filter() {
        assert!(match_ranges("Acetic Acid", "").is_empty());
        assert!(match_ranges("Acetic Acid", "   ").is_empty());
        assert!(match_ranges("Acetic Acid", "base").is_empty());
    }

    #[test]
    fn test_match_ranges_width_changing_case() {
        // 'İ' lowercases to two code points, the Kelvin sign to a one-byte 'k'
        assert_eq!(match_ranges("İsopropanol", "sop"), vec![(2, 5)]);

        let text = "\u{212A}abİİ";
        let ranges = match_ranges(text, "ab");
        assert_eq!(ranges, vec![(3, 5)]);
        for &(start, end) in &ranges {
            assert!(text.is_char_boundary(start) && text.is_char_boundary(end));
        }
        assert_eq!(&text[3..5], "ab");
        assert_eq!(match_ranges(text, "k"), vec![(0, 3)]);
    }

    #[test]
    fn test_match_ranges_inside_expansion_skipped() {
        // only the leading 'i' of the lowered 'İ' matches, which is half a char
        assert!(match_ranges("İ", "i").is_empty());
        assert_eq!(match_ranges("İi", "i"), vec![(2, 3)]);
    }
}
