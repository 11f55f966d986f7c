use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Customers,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Html,
}

/// Dark shell with a slim header bar around the routed page.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let current_route = use_route::<Route>().unwrap_or(Route::Customers);

    html! {
        <div class="min-h-screen bg-gray-900 flex flex-col">
            <header class="bg-gray-800 border-b border-gray-700 h-14 flex-shrink-0 z-50">
                <div class="h-full flex items-center justify-between px-4">
                    <div class="flex items-center space-x-6">
                        <div class="flex items-center space-x-2">
                            <div class="w-8 h-8 bg-blue-500 rounded flex items-center justify-center">
                                <span class="text-white font-bold text-lg">{"S"}</span>
                            </div>
                            <span class="text-white font-semibold text-lg">{"Sales CRM"}</span>
                        </div>

                        <nav class="hidden lg:flex items-center space-x-1">
                            <NavTab route={Route::Customers} label="Customers" current={current_route.clone()} />
                        </nav>
                    </div>
                </div>
            </header>

            <main class="flex-1 overflow-auto" style="background-color: var(--bg-primary);">
                {props.children.clone()}
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NavTabProps {
    route: Route,
    label: &'static str,
    current: Route,
}

#[function_component(NavTab)]
fn nav_tab(props: &NavTabProps) -> Html {
    let classes = if props.route == props.current {
        "px-3 py-1.5 rounded text-sm font-medium bg-gray-700 text-white"
    } else {
        "px-3 py-1.5 rounded text-sm font-medium text-gray-300 hover:bg-gray-700 hover:text-white"
    };

    html! {
        <Link<Route> to={props.route.clone()} classes={classes}>
            {props.label}
        </Link<Route>>
    }
}
