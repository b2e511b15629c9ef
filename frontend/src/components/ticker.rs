use web_sys::HtmlElement;
use yew::prelude::*;

use crate::state::ticker::TickerConfig;

#[derive(Properties, PartialEq)]
pub struct TickerProps {
    pub headlines: &'static [&'static str],
}

/// Measures the mounted strip and starts its scroll animation. An unmounted
/// ref leaves the element untouched and yields `None`.
fn start_ticker(ticker_ref: &NodeRef) -> Option<TickerConfig> {
    let ticker = ticker_ref.cast::<HtmlElement>()?;
    let config = TickerConfig::from_width(f64::from(ticker.offset_width()));
    match ticker.style().set_property("animation", &config.animation()) {
        Ok(()) => log::debug!(
            "ticker is {}px wide, scrolling over {}s",
            config.content_px_width,
            config.animation_duration_secs
        ),
        Err(_) => log::warn!("could not set the ticker animation"),
    }
    Some(config)
}

#[function_component(BreakingTicker)]
pub fn breaking_ticker(props: &TickerProps) -> Html {
    let ticker_ref = use_node_ref();

    // Runs once after the first render, when the text has a stable width.
    {
        let ticker_ref = ticker_ref.clone();
        use_effect_with_deps(
            move |_| {
                start_ticker(&ticker_ref);
                || ()
            },
            (),
        );
    }

    // Repeat the list so the strip has no gap before it loops.
    let text = props
        .headlines
        .iter()
        .chain(props.headlines.iter())
        .copied()
        .collect::<Vec<_>>()
        .join(" • ");

    html! {
        <div class="breaking-banner">
            <style>
                {r#"
                    .breaking-banner { background: #b91c1c; padding: 0.75rem 1rem; }
                    .breaking-inner {
                        max-width: 1280px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        overflow: hidden;
                    }
                    .breaking-badge {
                        flex-shrink: 0;
                        background: #fff;
                        color: #ef4444;
                        border: 1px solid #000;
                        border-radius: 9999px;
                        padding: 0.25rem 0.75rem;
                        font-size: 0.875rem;
                        font-weight: bold;
                    }
                    .ticker-window { overflow: hidden; white-space: nowrap; }
                    .ticker-text {
                        display: inline-block;
                        white-space: nowrap;
                        color: #fff;
                        font-size: 0.875rem;
                        font-weight: 500;
                        margin: 0;
                    }
                    @keyframes ticker-scroll {
                        from { transform: translateX(0); }
                        to { transform: translateX(-50%); }
                    }
                "#}
            </style>
            <div class="breaking-inner">
                <span class="breaking-badge">{"BREAKING"}</span>
                <div class="ticker-window">
                    <p id="news-ticker" class="ticker-text" ref={ticker_ref}>{ text }</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmounted_ticker_is_left_alone() {
        assert_eq!(start_ticker(&NodeRef::default()), None);
    }
}
