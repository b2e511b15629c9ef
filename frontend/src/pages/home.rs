use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::gallery::{PhotoGallery, PopularTopics};
use crate::components::header::Header;
use crate::components::newsletter::Newsletter;
use crate::components::regional::{OpinionColumn, RegionalUpdates};
use crate::components::stories::{FeaturedStories, TopStories};
use crate::components::ticker::BreakingTicker;
use crate::content;
use crate::layout::SectionAnchors;

/// Shared look for the portal sections, rendered once per page.
pub const PORTAL_STYLE: &str = r#"
    body {
        margin: 0;
        background: #000;
        color: #fff;
        font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    }
    .portal-main { max-width: 1280px; margin: 0 auto; padding: 2rem 1rem; }
    .portal-section { margin-bottom: 2.5rem; }
    .section-head {
        display: flex;
        justify-content: space-between;
        align-items: center;
        margin-bottom: 1.5rem;
    }
    .section-head h2 {
        margin: 0;
        font-size: 1.5rem;
        border-left: 4px solid #b91c1c;
        padding-left: 0.75rem;
    }
    .badge {
        display: inline-block;
        background: #b91c1c;
        color: #fff;
        border-radius: 9999px;
        padding: 0.15rem 0.6rem;
        font-size: 0.75rem;
        font-weight: 600;
    }
    .primary-button {
        background: #b91c1c;
        color: #fff;
        border: none;
        border-radius: 6px;
        padding: 0.5rem 1rem;
        cursor: pointer;
    }
    .primary-button:hover { background: #991b1b; }
    .link-button {
        background: none;
        border: none;
        color: #ef4444;
        font-size: 0.875rem;
        cursor: pointer;
    }
    .link-button:hover { text-decoration: underline; }
    .timestamp { color: #6b7280; font-size: 0.75rem; }
"#;

#[function_component(Home)]
pub fn home() -> Html {
    let anchors = use_state(SectionAnchors::default);

    html! {
        <>
            <style>{ PORTAL_STYLE }</style>
            <Header anchors={(*anchors).clone()} />
            <BreakingTicker headlines={content::TICKER_HEADLINES} />
            <main id="top" class="portal-main" ref={anchors.top.clone()}>
                <FeaturedStories lead={&content::LEAD_STORY} side={content::FEATURED_STORIES} />
                <TopStories stories={content::TOP_STORIES} anchor={anchors.top_stories.clone()} />
                <Newsletter />
                <RegionalUpdates regions={content::REGIONS} anchor={anchors.regional.clone()} />
                <OpinionColumn pieces={content::OPINION} anchor={anchors.opinion.clone()} />
                <PhotoGallery images={content::GALLERY} anchor={anchors.gallery.clone()} />
                <PopularTopics tags={content::TAGS} />
            </main>
            <Footer />
        </>
    }
}
