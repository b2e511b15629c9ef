use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::inquiry_form::InquiryFormCard;
use crate::pages::home::PORTAL_STYLE;
use crate::Route;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <>
            <style>{ PORTAL_STYLE }</style>
            <style>
                {r#"
                    .contact-bar {
                        border-bottom: 1px solid #222222;
                        padding: 1rem;
                    }
                    .contact-bar .back-link { color: #ef4444; text-decoration: none; font-size: 0.875rem; }
                    .contact-bar .back-link:hover { text-decoration: underline; }
                "#}
            </style>
            <div class="contact-bar">
                <Link<Route> to={Route::Home} classes="back-link">
                    {"← Back to the news"}
                </Link<Route>>
            </div>
            <main class="portal-main">
                <InquiryFormCard />
            </main>
            <Footer />
        </>
    }
}
