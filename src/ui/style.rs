//! Utility-class composition.
//!
//! Every widget builds its class list from base tokens, size tokens, variant
//! tokens, state-conditional tokens, and finally caller-supplied overrides.
//! [`merge`] resolves conflicts between those layers: for each recognized
//! mutually-exclusive property group (background color, padding, font size,
//! …), only the last-supplied token survives, so a caller can override any
//! single visual property without knowing the widget's internal composition.
//!
//! Tokens outside the recognized groups never conflict and are preserved in
//! first-seen order; malformed tokens pass through unchanged.

/// Merge ordered class strings, resolving utility-token conflicts last-wins.
///
/// # Example
///
/// ```
/// use plinng_ui::ui::style::merge;
///
/// let classes = merge(["bg-primary px-6", "bg-secondary"]);
/// assert_eq!(classes, "px-6 bg-secondary");
/// ```
pub fn merge<'a, I>(sources: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut kept: Vec<(Option<String>, &'a str)> = Vec::new();

    for source in sources {
        for token in source.split_whitespace() {
            let (variants, base) = split_variants(token);
            let key = conflict_group(base).map(|group| format!("{variants}{group}"));

            match &key {
                // A later token for the same group replaces the earlier one.
                Some(key) => kept.retain(|(existing, _)| existing.as_deref() != Some(key.as_str())),
                // Ungrouped tokens are deduplicated, first occurrence kept.
                None => {
                    if kept.iter().any(|(_, existing)| *existing == token) {
                        continue;
                    }
                }
            }

            kept.push((key, token));
        }
    }

    let mut out = String::new();
    for (i, (_, token)) in kept.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// Split a token into its state-variant prefix chain (`hover:`, `disabled:`,
/// …, including the trailing colon) and the base utility.
///
/// Colons inside arbitrary-value brackets do not split.
fn split_variants(token: &str) -> (&str, &str) {
    let mut depth = 0_usize;
    let mut split = 0_usize;
    for (i, c) in token.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => split = i + 1,
            _ => {}
        }
    }
    (&token[..split], &token[split..])
}

/// The enumerated table of mutually-exclusive property groups.
///
/// Returns `None` for tokens this library treats as non-conflicting.
fn conflict_group(base: &str) -> Option<&'static str> {
    // An opacity modifier such as `/80` does not change the group.
    let base = base.split('/').next().unwrap_or(base);

    if base.starts_with("bg-") {
        return Some("bg");
    }
    if let Some(rest) = base.strip_prefix("text-") {
        return Some(if is_font_size(rest) {
            "text-size"
        } else {
            "text-color"
        });
    }
    if let Some(rest) = base.strip_prefix("font-") {
        return Some(if matches!(rest, "sans" | "serif" | "mono") {
            "font-family"
        } else {
            "font-weight"
        });
    }
    if base.starts_with("leading-") {
        return Some("leading");
    }
    if base.starts_with("tracking-") {
        return Some("tracking");
    }
    if base.starts_with("px-") {
        return Some("px");
    }
    if base.starts_with("py-") {
        return Some("py");
    }
    if base.starts_with("pl-") {
        return Some("pl");
    }
    if base.starts_with("pr-") {
        return Some("pr");
    }
    if base.starts_with("pt-") {
        return Some("pt");
    }
    if base.starts_with("pb-") {
        return Some("pb");
    }
    if base.starts_with("p-") {
        return Some("p");
    }
    if base.starts_with("h-") {
        return Some("h");
    }
    if base.starts_with("w-") {
        return Some("w");
    }
    if base == "rounded" || base.starts_with("rounded-") {
        return Some("rounded");
    }
    if base.starts_with("gap-") {
        return Some("gap");
    }
    if base.starts_with("opacity-") {
        return Some("opacity");
    }
    if base.starts_with("cursor-") {
        return Some("cursor");
    }
    if let Some(rest) = base.strip_prefix("ring-") {
        return Some(if rest.chars().all(|c| c.is_ascii_digit()) {
            "ring-w"
        } else {
            "ring-color"
        });
    }
    if base == "border" {
        return Some("border-w");
    }
    if let Some(rest) = base.strip_prefix("border-") {
        return Some(if rest.chars().all(|c| c.is_ascii_digit()) {
            "border-w"
        } else {
            "border-color"
        });
    }

    match base {
        "underline" | "no-underline" | "overline" | "line-through" => Some("decoration"),
        "uppercase" | "lowercase" | "capitalize" | "normal-case" => Some("transform"),
        "block" | "inline-block" | "inline" | "flex" | "inline-flex" | "grid" | "inline-grid"
        | "hidden" => Some("display"),
        "items-start" | "items-center" | "items-end" | "items-baseline" | "items-stretch" => {
            Some("items")
        }
        "justify-start" | "justify-center" | "justify-end" | "justify-between" => Some("justify"),
        _ => None,
    }
}

/// Whether the suffix after `text-` names a font size rather than a color.
fn is_font_size(rest: &str) -> bool {
    matches!(
        rest,
        "xs" | "sm" | "base" | "lg" | "xl" | "2xl" | "3xl" | "4xl" | "5xl" | "6xl" | "7xl"
            | "8xl" | "9xl"
    ) || (rest.starts_with('[') && rest.ends_with("px]"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_token_wins_within_a_group() {
        assert_eq!(merge(["bg-primary", "bg-secondary"]), "bg-secondary");
        assert_eq!(merge(["px-6 py-2", "px-8"]), "py-2 px-8");
    }

    #[test]
    fn non_conflicting_tokens_keep_first_seen_order() {
        assert_eq!(
            merge(["shrink-0 transition-colors", "shadow-md"]),
            "shrink-0 transition-colors shadow-md"
        );
    }

    #[test]
    fn duplicate_ungrouped_tokens_collapse_to_first() {
        assert_eq!(
            merge(["transition-colors shrink-0", "transition-colors"]),
            "transition-colors shrink-0"
        );
    }

    #[test]
    fn text_size_and_text_color_do_not_conflict() {
        assert_eq!(
            merge(["text-base text-black", "text-sm"]),
            "text-black text-sm"
        );
        assert_eq!(
            merge(["text-base text-black", "text-red-500"]),
            "text-base text-red-500"
        );
    }

    #[test]
    fn arbitrary_pixel_values_count_as_font_sizes() {
        assert_eq!(merge(["text-[11px]", "text-xs"]), "text-xs");
    }

    #[test]
    fn state_variants_scope_their_group() {
        assert_eq!(
            merge(["bg-primary hover:bg-primary/80", "hover:bg-gray-100"]),
            "bg-primary hover:bg-gray-100"
        );
        // A hover token never displaces the unprefixed one.
        assert_eq!(
            merge(["bg-primary", "hover:bg-gray-100"]),
            "bg-primary hover:bg-gray-100"
        );
    }

    #[test]
    fn chained_variants_are_distinct_from_single_ones() {
        assert_eq!(
            merge(["disabled:hover:bg-secondary hover:bg-secondary/80"]),
            "disabled:hover:bg-secondary hover:bg-secondary/80"
        );
    }

    #[test]
    fn border_width_and_color_are_separate_groups() {
        assert_eq!(
            merge(["border border-tertiary-border", "border-red-500"]),
            "border border-red-500"
        );
    }

    #[test]
    fn ring_width_and_color_are_separate_groups() {
        assert_eq!(
            merge(["focus:ring-2 focus:ring-primary/20", "focus:ring-red-500/20"]),
            "focus:ring-2 focus:ring-red-500/20"
        );
    }

    #[test]
    fn empty_sources_are_ignored() {
        assert_eq!(merge(["", "bg-primary", ""]), "bg-primary");
    }

    #[test]
    fn malformed_tokens_pass_through() {
        assert_eq!(
            merge(["?garbage! bg-primary", "?garbage!"]),
            "?garbage! bg-primary"
        );
    }

    #[test]
    fn reapplying_an_override_is_idempotent() {
        let once = merge(["bg-primary px-6", "bg-secondary"]);
        let twice = merge([once.as_str(), "bg-secondary"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn width_overrides_let_callers_unset_block() {
        assert_eq!(merge(["inline-flex w-full", "w-auto"]), "inline-flex w-auto");
    }
}
