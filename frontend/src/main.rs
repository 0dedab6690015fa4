use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod anim;
mod config;
mod content;
mod scroll;
mod theme;
mod components {
    pub mod nav;
    pub mod sections;
    pub mod typing;
    pub mod workflow;
}
mod pages {
    pub mod filmstrip;
    pub mod flat;
    pub mod lens;
    pub mod typing;
}

use components::nav::TopNav;
use pages::{
    filmstrip::FilmstripLanding,
    flat::FlatLanding,
    lens::LensLanding,
    typing::TypingLanding,
};
use theme::{use_theme_stylesheet, Theme};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Flat,
    #[at("/lens")]
    Lens,
    #[at("/filmstrip")]
    Filmstrip,
    #[at("/typing")]
    Typing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Flat => {
            info!("Rendering flat landing");
            html! { <FlatLanding /> }
        },
        Route::Lens => {
            info!("Rendering lens landing");
            html! { <LensLanding /> }
        },
        Route::Filmstrip => {
            info!("Rendering filmstrip landing");
            html! { <FilmstripLanding /> }
        },
        Route::Typing => {
            info!("Rendering typing landing");
            html! { <TypingLanding /> }
        },
        Route::NotFound => {
            info!("Unknown path, rendering flat landing");
            html! { <FlatLanding /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    let theme = use_state(Theme::default);
    use_theme_stylesheet(*theme);

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = (*theme).toggle();
            info!("Switching to {} theme", next.class_name());
            theme.set(next);
        })
    };

    html! {
        <div class={classes!("app", theme.class_name())}>
            <BrowserRouter>
                <TopNav theme={*theme} on_toggle_theme={toggle_theme} />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
