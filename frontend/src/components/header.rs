use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::layout::SectionAnchors;
use crate::notify::use_notifier;
use crate::services::use_services;
use crate::state::nav::{NavigationController, NavigationTarget, UiMode};
use crate::state::search::{SearchPhase, SearchState};
use crate::tasks::{spawn_cancellable, TaskHandle};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub anchors: SectionAnchors,
}

#[derive(Properties, PartialEq)]
struct SearchBoxProps {
    query: AttrValue,
    phase: SearchPhase,
    class: &'static str,
    #[prop_or_default]
    autofocus: bool,
    oninput: Callback<String>,
    onsubmit: Callback<()>,
}

#[function_component(SearchBox)]
fn search_box(props: &SearchBoxProps) -> Html {
    let onsubmit = {
        let onsubmit = props.onsubmit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            onsubmit.emit(());
        })
    };
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            oninput.emit(input.value());
        })
    };
    let placeholder = match props.phase {
        SearchPhase::Idle => "Search news...",
        SearchPhase::Searching => "Searching...",
    };

    html! {
        <form class={props.class} onsubmit={onsubmit}>
            <span class="search-icon">{"⌕"}</span>
            <input
                type="search"
                class="search-input"
                placeholder={placeholder}
                value={props.query.clone()}
                autofocus={props.autofocus}
                oninput={oninput}
            />
        </form>
    }
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let nav = use_state(NavigationController::default);
    let search = use_mut_ref(SearchState::default);
    let search_task = use_mut_ref(|| None::<TaskHandle>);
    let update = use_update();
    let services = use_services();
    let notifier = use_notifier();

    {
        let search_task = search_task.clone();
        use_unmount(move || {
            if let Some(task) = search_task.borrow_mut().take() {
                task.cancel();
            }
        });
    }

    let toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = *nav;
            next.toggle_menu();
            nav.set(next);
        })
    };

    let toggle_search = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = *nav;
            next.toggle_search();
            nav.set(next);
        })
    };

    let navigate = {
        let nav = nav.clone();
        let anchors = props.anchors.clone();
        move |target: NavigationTarget| {
            let nav = nav.clone();
            let anchors = anchors.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                info!("Navigating to {}", target.label());
                let mut next = *nav;
                next.navigate_to(target, &anchors);
                nav.set(next);
            })
        }
    };

    let on_query = {
        let search = search.clone();
        let update = update.clone();
        Callback::from(move |query: String| {
            search.borrow_mut().set_query(query);
            update();
        })
    };

    let on_search = {
        let search = search.clone();
        let update = update.clone();
        Callback::from(move |_: ()| {
            let Some(query) = search.borrow_mut().submit() else {
                return;
            };
            info!("Searching for {:?}", query);
            let request = services.search.search(query);
            let search = search.clone();
            let notifier = notifier.clone();
            let done = update.clone();
            let handle = spawn_cancellable(async move {
                let outcome = request.await;
                let notice = search.borrow_mut().finish(outcome);
                if let Some(notice) = notice {
                    notifier.notify(notice);
                }
                done();
            });
            *search_task.borrow_mut() = Some(handle);
            update();
        })
    };

    let mode = nav.mode();
    let (query, phase) = {
        let search = search.borrow();
        (AttrValue::from(search.query().to_string()), search.phase())
    };

    let nav_buttons = || -> Html {
        NavigationTarget::ALL
            .iter()
            .map(|&target| html! {
                <button key={target.anchor_id()} class="nav-button" onclick={navigate(target)}>
                    { target.label() }
                </button>
            })
            .collect()
    };

    html! {
        <header class="site-header">
            <style>
                {r#"
                    .site-header {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        width: 100%;
                        background: #000;
                        border-bottom: 1px solid #222222;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.5);
                    }
                    .header-bar {
                        max-width: 1280px;
                        margin: 0 auto;
                        height: 64px;
                        padding: 0 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .header-brand { display: flex; align-items: center; gap: 0.5rem; }
                    .header-logo img { width: 120px; height: auto; }
                    .icon-button {
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                        padding: 0.25rem 0.5rem;
                        border-radius: 6px;
                    }
                    .icon-button:hover { background: rgba(127, 29, 29, 0.2); }
                    .icon-button.search-toggle { color: #b91c1c; }
                    .desktop-nav { display: flex; gap: 1.5rem; }
                    .nav-button {
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 0.875rem;
                        font-weight: 500;
                        cursor: pointer;
                        transition: color 0.2s;
                    }
                    .nav-button:hover { color: #b91c1c; }
                    .search-form { position: relative; }
                    .search-icon { position: absolute; left: 0.6rem; top: 0.45rem; color: #6b7280; }
                    .search-input {
                        width: 200px;
                        background: #111827;
                        border: 1px solid #1f2937;
                        border-radius: 6px;
                        color: #fff;
                        padding: 0.5rem 0.5rem 0.5rem 2rem;
                        font-size: 0.875rem;
                    }
                    .search-input:focus { outline: 2px solid #b91c1c; }
                    .mobile-only { display: none; }
                    .mobile-panel {
                        background: #000;
                        border-bottom: 1px solid #222222;
                        padding: 1rem;
                    }
                    .mobile-panel nav { display: flex; flex-direction: column; gap: 1rem; }
                    .mobile-panel .search-input { width: 100%; box-sizing: border-box; }
                    @media (max-width: 768px) {
                        .desktop-only { display: none; }
                        .mobile-only { display: block; }
                    }
                "#}
            </style>
            <div class="header-bar">
                <div class="header-brand">
                    <button class="icon-button mobile-only" onclick={toggle_menu} aria-label="Toggle menu">
                        { if mode == UiMode::MenuOpen { "✕" } else { "☰" } }
                    </button>
                    <a href="/" class="header-logo">
                        <img src="/assets/logo.png" alt="logo" />
                    </a>
                </div>
                <nav class="desktop-nav desktop-only">
                    { nav_buttons() }
                </nav>
                <div class="header-actions">
                    <SearchBox
                        class="search-form desktop-only"
                        query={query.clone()}
                        phase={phase}
                        oninput={on_query.clone()}
                        onsubmit={on_search.clone()}
                    />
                    <button class="icon-button search-toggle mobile-only" onclick={toggle_search} aria-label="Search">
                        {"⌕"}
                    </button>
                </div>
            </div>
            {
                match mode {
                    UiMode::MenuOpen => html! {
                        <div class="mobile-panel mobile-only">
                            <nav>{ nav_buttons() }</nav>
                        </div>
                    },
                    UiMode::SearchOpen => html! {
                        <div class="mobile-panel mobile-only">
                            <SearchBox
                                class="search-form"
                                query={query}
                                phase={phase}
                                autofocus={true}
                                oninput={on_query}
                                onsubmit={on_search}
                            />
                        </div>
                    },
                    UiMode::Default => html! {},
                }
            }
        </header>
    }
}
