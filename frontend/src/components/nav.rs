use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::content::PRODUCT_NAME;
use crate::theme::Theme;
use crate::Route;

const VARIANT_LINKS: &[(Route, &str)] = &[
    (Route::Flat, "Flat"),
    (Route::Lens, "Lens"),
    (Route::Filmstrip, "Filmstrip"),
    (Route::Typing, "Typing"),
];

#[derive(Properties, PartialEq)]
pub struct TopNavProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(TopNav)]
pub fn top_nav(props: &TopNavProps) -> Html {
    let TopNavProps { theme, on_toggle_theme } = props;
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let current = use_route::<Route>();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let toggle_theme = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    html! {
        <nav class={classes!("top-nav", (scroll_y > 24.0).then(|| "scrolled"))}>
            <div class="top-nav__bar">
                <button class="top-nav__icon" onclick={toggle_menu} aria-label="Menu">
                    <span class="material-symbols-outlined">{if *menu_open { "close" } else { "menu" }}</span>
                </button>
                <Link<Route> to={Route::Flat} classes="top-nav__title">
                    {PRODUCT_NAME}
                </Link<Route>>
                <button class="top-nav__icon" onclick={toggle_theme} aria-label="Toggle theme">
                    <span class="material-symbols-outlined">{theme.toggle_icon()}</span>
                </button>
            </div>
            if *menu_open {
                <div class="top-nav__menu">
                    { VARIANT_LINKS.iter().map(|(route, label)| {
                        let active = current.as_ref() == Some(route);
                        html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={route.clone()} classes={classes!("top-nav__link", active.then(|| "active"))}>
                                    {*label}
                                </Link<Route>>
                            </div>
                        }
                    }).collect::<Html>() }
                </div>
            }
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: color-mix(in srgb, var(--color-background) 80%, transparent);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid var(--color-border);
                        transition: box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        box-shadow: 0 6px 24px rgba(0, 0, 0, 0.25);
                    }
                    .top-nav__bar {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 0.75rem 1rem;
                    }
                    .top-nav__icon {
                        width: 2.5rem;
                        height: 2.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .top-nav__icon .material-symbols-outlined {
                        color: var(--color-text-main);
                    }
                    .top-nav__title {
                        flex: 1;
                        text-align: center;
                        font-weight: 700;
                        letter-spacing: -0.01em;
                        color: var(--color-text-main);
                    }
                    .top-nav__menu {
                        display: flex;
                        flex-direction: column;
                        gap: 0.25rem;
                        padding: 0.5rem 1rem 1rem 1rem;
                    }
                    .top-nav__link {
                        display: block;
                        padding: 0.625rem 0.75rem;
                        border-radius: var(--radius);
                        color: var(--color-text-muted);
                    }
                    .top-nav__link:hover,
                    .top-nav__link.active {
                        background: var(--color-surface-highlight);
                        color: var(--color-primary);
                    }
                "#}
            </style>
        </nav>
    }
}
