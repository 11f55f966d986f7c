use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod logger;
mod mock;
mod pages;
mod preferences;
mod services;
mod utils;

use components::layout::{Layout, Route};
use pages::customers::CustomersPage;

fn switch(routes: Route) -> Html {
    match routes {
        Route::Customers => html! { <CustomersPage /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center" style="background-color: var(--bg-primary);">
                <div class="text-center">
                    <h1 class="text-6xl font-bold" style="color: var(--fg-primary);">{"404"}</h1>
                    <p class="text-xl mt-4" style="color: var(--fg-muted);">{"Page Not Found"}</p>
                </div>
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Layout>
                <Switch<Route> render={switch} />
            </Layout>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    logger::init();

    let document = web_sys::window().and_then(|window| window.document());
    if let Some((document, head)) = document.and_then(|d| d.head().map(|head| (d, head))) {
        // Tailwind for layout utilities, plus the palette variables.
        for href in [
            "https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css",
            "/static/themes.css",
        ] {
            if let Ok(link) = document.create_element("link") {
                link.set_attribute("href", href).ok();
                link.set_attribute("rel", "stylesheet").ok();
                head.append_child(&link).ok();
            }
        }
    }

    log::info!("mounting customer screen");
    yew::Renderer::<App>::new().render();
}
