use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{self, LinkTarget};
use crate::notify::{use_notifier, Notice};
use crate::Route;

fn whatsapp_link() -> String {
    format!(
        "https://wa.me/{}?text={}",
        content::WHATSAPP_NUMBER,
        urlencoding::encode(content::WHATSAPP_GREETING)
    )
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let notifier = use_notifier();

    let announce = |message: String| {
        let notifier = notifier.clone();
        Callback::from(move |_: MouseEvent| notifier.notify(Notice::info(message.clone())))
    };

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer { background: #000; border-top: 1px solid #222222; padding: 3rem 1rem 1.5rem; }
                    .footer-grid {
                        max-width: 1280px;
                        margin: 0 auto;
                        display: grid;
                        gap: 2rem;
                        grid-template-columns: repeat(4, 1fr);
                    }
                    .footer-grid h3 { font-size: 1.125rem; margin: 0 0 1rem; }
                    .footer-grid ul { list-style: none; padding: 0; margin: 0; display: grid; gap: 0.5rem; }
                    .footer-grid p, .footer-grid address { color: #9ca3af; font-size: 0.875rem; font-style: normal; }
                    .footer-link {
                        background: none;
                        border: none;
                        padding: 0;
                        color: #9ca3af;
                        font-size: 0.875rem;
                        cursor: pointer;
                        text-decoration: none;
                    }
                    .footer-link:hover { color: #b91c1c; }
                    .socials { display: flex; gap: 1rem; margin-top: 1rem; }
                    .socials a { color: #9ca3af; font-size: 0.875rem; }
                    .socials a:hover { color: #b91c1c; }
                    .whatsapp-button {
                        display: inline-block;
                        margin-top: 0.5rem;
                        background: #b91c1c;
                        color: #fff;
                        padding: 0.5rem 1rem;
                        border-radius: 6px;
                        text-decoration: none;
                        font-size: 0.875rem;
                    }
                    .footer-bottom {
                        max-width: 1280px;
                        margin: 2rem auto 0;
                        border-top: 1px solid #222222;
                        padding-top: 1.5rem;
                        text-align: center;
                        color: #6b7280;
                        font-size: 0.875rem;
                    }
                    @media (max-width: 768px) {
                        .footer-grid { grid-template-columns: 1fr 1fr; }
                    }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <Link<Route> to={Route::Home}>
                        <img src="/assets/logo.png" alt="logo" width="120" />
                    </Link<Route>>
                    <p>{"Your trusted source for the latest news and updates from Nepal, delivered 24/7."}</p>
                    <div class="socials">
                        { for content::SOCIAL_LINKS.iter().map(|social| html! {
                            <a key={social.name} href={social.href} target="_blank" rel="noopener noreferrer">
                                { social.name }
                            </a>
                        }) }
                    </div>
                </div>
                <div>
                    <h3>{"Categories"}</h3>
                    <ul>
                        { for content::FOOTER_CATEGORIES.iter().map(|&category| html! {
                            <li key={category}>
                                <button class="footer-link" onclick={announce(format!("Opening {} category", category))}>
                                    { category }
                                </button>
                            </li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h3>{"Quick Links"}</h3>
                    <ul>
                        { for content::QUICK_LINKS.iter().map(|link| html! {
                            <li key={link.name}>
                                {
                                    match link.target {
                                        LinkTarget::InquiryPage => html! {
                                            <Link<Route> to={Route::Contact} classes="footer-link">
                                                { link.name }
                                            </Link<Route>>
                                        },
                                        LinkTarget::Placeholder(message) => html! {
                                            <button class="footer-link" onclick={announce(message.to_string())}>
                                                { link.name }
                                            </button>
                                        },
                                    }
                                }
                            </li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h3>{"Contact"}</h3>
                    <address>
                        <p>{ content::CONTACT_ADDRESS }</p>
                        <p>{ format!("Email: {}", content::CONTACT_EMAIL) }</p>
                        <p>{ format!("Phone: {}", content::CONTACT_PHONE) }</p>
                    </address>
                    <a class="whatsapp-button" href={whatsapp_link()} target="_blank" rel="noopener noreferrer">
                        {"Contact Us"}
                    </a>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{ format!("© {} Nepal in Last 24 Hour. All rights reserved.", Local::now().year()) }</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_encodes_the_greeting() {
        assert_eq!(
            whatsapp_link(),
            "https://wa.me/9779763487935?text=Hello%2C%20I%20would%20like%20to%20know%20more%20about%20your%20services."
        );
    }
}
