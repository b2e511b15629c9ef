use yew::prelude::*;

use crate::content::{GalleryImage, TagItem};
use crate::notify::{use_notifier, Notice};

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub images: &'static [GalleryImage],
    pub anchor: NodeRef,
}

#[function_component(PhotoGallery)]
pub fn photo_gallery(props: &GalleryProps) -> Html {
    let notifier = use_notifier();
    let images = props.images;

    html! {
        <section id="gallery" class="portal-section" ref={props.anchor.clone()}>
            <style>
                {r#"
                    .gallery-grid {
                        display: grid;
                        gap: 1rem;
                        grid-template-columns: repeat(4, 1fr);
                    }
                    .gallery-tile {
                        position: relative;
                        aspect-ratio: 1;
                        border-radius: 8px;
                        overflow: hidden;
                        cursor: pointer;
                    }
                    .gallery-tile img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.3s; }
                    .gallery-tile:hover img { transform: scale(1.1); }
                    .gallery-label {
                        position: absolute;
                        bottom: 0;
                        width: 100%;
                        padding: 0.75rem;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent);
                        font-size: 0.875rem;
                        font-weight: 500;
                        box-sizing: border-box;
                    }
                    @media (max-width: 768px) {
                        .gallery-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
            <div class="section-head">
                <h2>{"Photo Gallery"}</h2>
            </div>
            <div class="gallery-grid">
                { for images.iter().map(|image| {
                    let onclick = {
                        let notifier = notifier.clone();
                        Callback::from(move |_: MouseEvent| {
                            notifier.notify(Notice::info(format!("Opening full-size image of {}", image.location)));
                        })
                    };
                    html! {
                        <div key={image.location} class="gallery-tile" onclick={onclick}>
                            <img src={image.src} alt={image.location} />
                            <p class="gallery-label">{ image.label }</p>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct TopicsProps {
    pub tags: &'static [TagItem],
}

#[function_component(PopularTopics)]
pub fn popular_topics(props: &TopicsProps) -> Html {
    let notifier = use_notifier();
    let tags = props.tags;

    html! {
        <section class="portal-section">
            <style>
                {r#"
                    .tag-cloud { display: flex; flex-wrap: wrap; gap: 0.75rem; }
                    .tag {
                        border: none;
                        border-radius: 9999px;
                        padding: 0.5rem 1rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #fff;
                        background: #1f2937;
                        cursor: pointer;
                        transition: background 0.2s;
                    }
                    .tag:hover { background: #374151; }
                    .tag.featured { background: #7f1d1d; }
                    .tag.featured:hover { background: #991b1b; }
                "#}
            </style>
            <h2>{"Popular Topics"}</h2>
            <div class="tag-cloud">
                { for tags.iter().map(|tag| {
                    let onclick = {
                        let notifier = notifier.clone();
                        Callback::from(move |_: MouseEvent| {
                            notifier.notify(Notice::info(format!("Searching for topic: {}", tag.label)));
                        })
                    };
                    html! {
                        <button key={tag.label} class={classes!("tag", tag.featured.then_some("featured"))} onclick={onclick}>
                            { tag.label }
                        </button>
                    }
                }) }
            </div>
        </section>
    }
}
