use yew::prelude::*;

use crate::content::StoryItem;
use crate::notify::{use_notifier, Notice, Notifier};

fn open_story(notifier: &Notifier, story: &'static StoryItem) -> Callback<MouseEvent> {
    let notifier = notifier.clone();
    Callback::from(move |_: MouseEvent| {
        notifier.notify(Notice::info(format!("Opening article: {}", story.headline)));
    })
}

#[derive(Properties, PartialEq)]
pub struct FeaturedProps {
    pub lead: &'static StoryItem,
    pub side: &'static [StoryItem],
}

#[function_component(FeaturedStories)]
pub fn featured_stories(props: &FeaturedProps) -> Html {
    let notifier = use_notifier();
    let lead = props.lead;
    let side = props.side;

    html! {
        <section class="featured">
            <style>
                {r#"
                    .featured {
                        display: grid;
                        gap: 1.5rem;
                        grid-template-columns: 2fr 1fr;
                        margin-bottom: 2.5rem;
                    }
                    .featured-side { display: grid; gap: 1.5rem; }
                    .story-card {
                        background: #111111;
                        border-radius: 12px;
                        overflow: hidden;
                        transition: box-shadow 0.3s;
                    }
                    .story-card:hover { box-shadow: 0 10px 24px rgba(0, 0, 0, 0.6); }
                    .story-media { position: relative; overflow: hidden; aspect-ratio: 16 / 9; }
                    .story-media img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s;
                    }
                    .story-media img:hover { transform: scale(1.05); }
                    .story-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.8), transparent);
                    }
                    .story-caption { position: absolute; bottom: 0; padding: 1rem 1.5rem; }
                    .story-caption h1 { font-size: 1.875rem; margin: 0.5rem 0; }
                    .story-caption h2 { font-size: 1.125rem; margin: 0.5rem 0; }
                    .story-body { padding: 1rem 1.5rem 1.5rem; color: #d1d5db; }
                    @media (max-width: 1024px) {
                        .featured { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <article class="story-card">
                <div class="story-media">
                    <img src={lead.image} alt="Featured news" />
                    <div class="story-shade"></div>
                    <div class="story-caption">
                        <span class="badge">{ lead.category }</span>
                        <h1>{ lead.headline }</h1>
                        <span class="timestamp">{"🕑 "}{ lead.published }</span>
                    </div>
                </div>
                <div class="story-body">
                    <p>{ lead.summary }</p>
                    <button class="primary-button" onclick={open_story(&notifier, lead)}>{"Read More"}</button>
                </div>
            </article>
            <div class="featured-side">
                { for side.iter().map(|story| html! {
                    <article key={story.headline} class="story-card">
                        <div class="story-media">
                            <img src={story.image} alt={format!("{} news", story.category)} />
                            <div class="story-shade"></div>
                            <div class="story-caption">
                                <span class="badge">{ story.category }</span>
                                <h2>{ story.headline }</h2>
                                <span class="timestamp">{"🕑 "}{ story.published }</span>
                            </div>
                        </div>
                        <div class="story-body">
                            <p>{ story.summary }</p>
                            <button class="primary-button" onclick={open_story(&notifier, story)}>{"Read More"}</button>
                        </div>
                    </article>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct TopStoriesProps {
    pub stories: &'static [StoryItem],
    pub anchor: NodeRef,
}

#[function_component(TopStories)]
pub fn top_stories(props: &TopStoriesProps) -> Html {
    let notifier = use_notifier();
    let stories = props.stories;

    html! {
        <section id="top-stories" class="portal-section" ref={props.anchor.clone()}>
            <style>
                {r#"
                    .tab-strip { background: #111827; border-radius: 6px; padding: 0.25rem; }
                    .tab { background: none; border: none; color: #fff; padding: 0.35rem 0.9rem; border-radius: 4px; }
                    .tab.active { background: #b91c1c; }
                    .story-grid {
                        display: grid;
                        gap: 1.5rem;
                        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    }
                    .story-grid .story-media { aspect-ratio: 2 / 1; }
                    .story-meta {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1rem 1rem 0;
                    }
                    .story-grid h3 { font-size: 1.125rem; padding: 0 1rem; margin: 0.5rem 0; }
                    .story-grid p { color: #9ca3af; font-size: 0.875rem; padding: 0 1rem; }
                    .story-footer {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 0 1rem 1rem;
                    }
                    .reads { color: #9ca3af; font-size: 0.75rem; }
                "#}
            </style>
            <div class="section-head">
                <h2>{"Top Stories"}</h2>
                <div class="tab-strip">
                    <button class="tab active">{"Latest"}</button>
                </div>
            </div>
            <div class="story-grid">
                { for stories.iter().map(|story| html! {
                    <article key={story.headline} class="story-card">
                        <div class="story-media">
                            <img src={story.image} alt={format!("{} news", story.category)} />
                        </div>
                        <div class="story-meta">
                            <span class="badge outline">{ story.category }</span>
                            <span class="timestamp">{"🕑 "}{ story.published }</span>
                        </div>
                        <h3>{ story.headline }</h3>
                        <p>{ story.summary }</p>
                        <div class="story-footer">
                            <button class="link-button" onclick={open_story(&notifier, story)}>{"Read Full Story"}</button>
                            <span class="reads">{"🔥 "}{ format!("{} reads", story.reads) }</span>
                        </div>
                    </article>
                }) }
            </div>
        </section>
    }
}
