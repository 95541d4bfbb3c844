use yew::prelude::*;

use crate::components::ReportSection;
use crate::data::esg::{ESG_BADGES, ESG_CARDS};
use crate::data::nav;

#[function_component(EsgSection)]
pub fn esg_section() -> Html {
    html! {
        <ReportSection id={nav::ESG} number="04" title="ESG & Sustainability Alignment">
            <div class="esg-grid" style="margin-bottom: 24px;">
                { for ESG_BADGES.iter().map(|b| html! {
                    <div key={b.value} class="esg-badge">
                        <span class="esg-icon">{ b.icon }</span>
                        <div class="card-value">{ b.value }</div>
                        <div class="card-note">{ b.note }</div>
                    </div>
                }) }
            </div>
            <div class="grid-2">
                { for ESG_CARDS.iter().map(|c| {
                    let label_style = c.accent.map(|color| format!("color: {color};"));
                    html! {
                        <div key={c.label} class="card">
                            <div class="card-label" style={label_style}>{ c.label }</div>
                            <p class="card-note" style="line-height: 1.7;">
                                { for highlight_segments(c.body, c.highlights).into_iter().map(|(text, strong)| {
                                    if strong {
                                        html! { <strong>{ text }</strong> }
                                    } else {
                                        html! { { text } }
                                    }
                                }) }
                            </p>
                        </div>
                    }
                }) }
            </div>
        </ReportSection>
    }
}

/// Splits `body` into plain and highlighted runs, in order.
fn highlight_segments<'a>(body: &'a str, highlights: &[&str]) -> Vec<(&'a str, bool)> {
    let mut segments = Vec::new();
    let mut rest = body;

    loop {
        let next = highlights
            .iter()
            .filter(|phrase| !phrase.is_empty())
            .filter_map(|phrase| rest.find(phrase).map(|at| (at, phrase.len())))
            .min_by_key(|&(at, _)| at);

        let Some((at, len)) = next else { break };
        if at > 0 {
            segments.push((&rest[..at], false));
        }
        segments.push((&rest[at..at + len], true));
        rest = &rest[at + len..];
    }

    if !rest.is_empty() {
        segments.push((rest, false));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_highlights_is_one_plain_run() {
        assert_eq!(highlight_segments("plain text", &[]), vec![("plain text", false)]);
    }

    #[test]
    fn highlights_are_split_out_in_order() {
        let body = "targets: 42% absolute reduction Scope 1 & 2, 52% Scope 3 intensity";
        let segments = highlight_segments(body, &["52% Scope 3", "42% absolute reduction"]);
        assert_eq!(
            segments,
            vec![
                ("targets: ", false),
                ("42% absolute reduction", true),
                (" Scope 1 & 2, ", false),
                ("52% Scope 3", true),
                (" intensity", false),
            ]
        );
    }

    #[test]
    fn highlight_at_the_edges() {
        assert_eq!(
            highlight_segments("bold end", &["bold", "end"]),
            vec![("bold", true), (" ", false), ("end", true)]
        );
    }

    #[test]
    fn missing_phrase_is_ignored() {
        assert_eq!(highlight_segments("abc", &["zzz", ""]), vec![("abc", false)]);
    }
}
