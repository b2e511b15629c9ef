use yew::prelude::*;

use crate::content::{OpinionPiece, RegionPanel};
use crate::notify::{use_notifier, Notice};

#[derive(Properties, PartialEq)]
pub struct RegionalProps {
    pub regions: &'static [RegionPanel],
    pub anchor: NodeRef,
}

#[function_component(RegionalUpdates)]
pub fn regional_updates(props: &RegionalProps) -> Html {
    let notifier = use_notifier();
    let regions = props.regions;

    let open = |headline: &'static str| {
        let notifier = notifier.clone();
        Callback::from(move |_: MouseEvent| {
            notifier.notify(Notice::info(format!("Opening article: {}", headline)));
        })
    };

    html! {
        <section id="regional" class="portal-section" ref={props.anchor.clone()}>
            <style>
                {r#"
                    .panel-grid {
                        display: grid;
                        gap: 1.5rem;
                        grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                    }
                    .panel {
                        background: #111111;
                        border: 1px solid #222222;
                        border-radius: 12px;
                        padding: 1.25rem;
                    }
                    .panel-head {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 1rem;
                    }
                    .panel-head h3 { color: #b91c1c; font-size: 1.25rem; margin: 0; }
                    .panel ul { list-style: none; padding: 0; margin: 0; }
                    .panel li { border-bottom: 1px solid #222222; padding: 0.6rem 0; }
                    .panel li:last-child { border-bottom: none; }
                    .headline-button {
                        background: none;
                        border: none;
                        color: #fff;
                        text-align: left;
                        font-size: 0.875rem;
                        font-weight: 500;
                        cursor: pointer;
                        padding: 0;
                    }
                    .headline-button:hover { color: #b91c1c; }
                    .panel .timestamp { display: block; margin-top: 0.25rem; font-size: 0.75rem; }
                "#}
            </style>
            <div class="section-head">
                <h2>{"Regional Updates"}</h2>
                <button
                    class="link-button"
                    onclick={{
                        let notifier = notifier.clone();
                        Callback::from(move |_: MouseEvent| notifier.notify(Notice::info("Opening all regions")))
                    }}
                >
                    {"View All Regions"}
                </button>
            </div>
            <div class="panel-grid">
                { for regions.iter().map(|region| html! {
                    <div key={region.name} class="panel">
                        <div class="panel-head">
                            <h3>{ region.name }</h3>
                            <span class="badge">{ region.badge }</span>
                        </div>
                        <ul>
                            { for region.headlines.iter().map(|item| html! {
                                <li key={item.headline}>
                                    <button class="headline-button" onclick={open(item.headline)}>
                                        { item.headline }
                                    </button>
                                    <span class="timestamp">{ item.published }</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct OpinionProps {
    pub pieces: &'static [OpinionPiece],
    pub anchor: NodeRef,
}

#[function_component(OpinionColumn)]
pub fn opinion_column(props: &OpinionProps) -> Html {
    let notifier = use_notifier();
    let pieces = props.pieces;

    html! {
        <section id="opinion" class="portal-section" ref={props.anchor.clone()}>
            <style>
                {r#"
                    .opinion-list { display: grid; gap: 1rem; }
                    .opinion-item {
                        border-left: 4px solid #b91c1c;
                        background: #111111;
                        padding: 1rem 1.25rem;
                        border-radius: 0 8px 8px 0;
                        cursor: pointer;
                    }
                    .opinion-item h3 { margin: 0.25rem 0; font-size: 1.125rem; }
                    .opinion-item p { margin: 0.25rem 0 0; color: #9ca3af; font-size: 0.875rem; }
                    .opinion-author { color: #ef4444; font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.05em; }
                "#}
            </style>
            <div class="section-head">
                <h2>{"Opinion"}</h2>
            </div>
            <div class="opinion-list">
                { for pieces.iter().map(|piece| {
                    let onclick = {
                        let notifier = notifier.clone();
                        Callback::from(move |_: MouseEvent| {
                            notifier.notify(Notice::info(format!("Opening opinion: {}", piece.title)));
                        })
                    };
                    html! {
                        <article key={piece.title} class="opinion-item" onclick={onclick}>
                            <span class="opinion-author">{ piece.author }</span>
                            <h3>{ piece.title }</h3>
                            <p>{ piece.teaser }</p>
                            <span class="timestamp">{ piece.published }</span>
                        </article>
                    }
                }) }
            </div>
        </section>
    }
}
