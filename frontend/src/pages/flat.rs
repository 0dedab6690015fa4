use yew::prelude::*;

use crate::components::sections::{
    CoreTools, FeatureCards, PlatformGrid, PricingTiers, SectionStyles, StickyCta, WorkflowSection,
};
use crate::content::{background_image, HERO_IMAGE};

#[function_component(FlatLanding)]
pub fn flat_landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="flat-page">
            <header class="flat-hero">
                <div class="flat-hero__background" style={background_image(HERO_IMAGE)}>
                    <div class="flat-hero__shade"></div>
                    <div class="flat-hero__gradient"></div>
                </div>
                <div class="flat-hero__content">
                    <span class="pill">{"Next-Gen AI SaaS"}</span>
                    <h1>{"Transform Ideas Into "}<br />{"Video Packages"}</h1>
                    <p>
                        {"A production-grade multi-tenant SaaS platform that helps creators generate short-form and long-form content with AI."}
                    </p>
                    <div class="flat-hero__actions">
                        <button class="btn btn--primary">{"Get Started Free"}</button>
                        <button class="btn flat-hero__demo">{"Watch Demo"}</button>
                    </div>
                </div>
            </header>

            <WorkflowSection />
            <PlatformGrid />
            <CoreTools />
            <FeatureCards />
            <PricingTiers />
            <StickyCta />

            <SectionStyles />
            <style>
                {r#"
                    .flat-page {
                        min-height: 100vh;
                        padding-top: 3.5rem;
                        overflow-x: hidden;
                    }
                    .flat-hero {
                        position: relative;
                        min-height: 85vh;
                        display: flex;
                        align-items: flex-end;
                        justify-content: center;
                    }
                    .flat-hero__background {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                    }
                    .flat-hero__shade {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.5);
                    }
                    .flat-hero__gradient {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(180deg, transparent 40%, var(--color-background) 100%);
                    }
                    .flat-hero__content {
                        position: relative;
                        max-width: 32rem;
                        padding: 0 1.5rem 5rem 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        text-align: center;
                    }
                    .flat-hero__content h1 {
                        margin: 0;
                        color: #ffffff;
                        font-size: 3rem;
                        font-weight: 900;
                        line-height: 1.1;
                        letter-spacing: -0.033em;
                    }
                    .flat-hero__content p {
                        margin: 0;
                        color: #e2e8f0;
                        line-height: 1.6;
                        opacity: 0.9;
                    }
                    .flat-hero__actions {
                        margin-top: 1.5rem;
                        display: flex;
                        gap: 0.75rem;
                        justify-content: center;
                    }
                    .flat-hero__demo {
                        background: rgba(255, 255, 255, 0.1);
                        color: #ffffff;
                        border-color: rgba(255, 255, 255, 0.2);
                        backdrop-filter: blur(4px);
                    }
                    .light .flat-hero__gradient {
                        background: linear-gradient(180deg, transparent 55%, var(--color-background) 100%);
                    }
                    @media (max-width: 640px) {
                        .flat-hero__content h1 {
                            font-size: 1.875rem;
                        }
                        .flat-hero__content h1 br {
                            display: none;
                        }
                        .flat-hero__actions {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
