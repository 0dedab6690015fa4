//! Page blocks shared by every landing variant. Variants restyle them through
//! the extra `class` each block accepts.

use yew::prelude::*;

use crate::components::workflow::{IndicatorVariant, WorkflowIndicator};
use crate::config::AnimationTimings;
use crate::content::{background_image, CORE_TOOLS, FEATURES, PLATFORMS, PRICING_PLANS, WORKFLOW_STEPS};

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub class: Classes,
}

#[derive(Properties, PartialEq)]
pub struct WorkflowSectionProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub variant: IndicatorVariant,
    #[prop_or(AnimationTimings::DEFAULT)]
    pub timings: AnimationTimings,
}

#[function_component(WorkflowSection)]
pub fn workflow_section(props: &WorkflowSectionProps) -> Html {
    html! {
        <section class={classes!("lp-section", "lp-section--alt", props.class.clone())}>
            <div class="lp-container lp-container--wide">
                <div class="lp-heading lp-heading--center">
                    <h2>{"AI-Powered Workflow"}</h2>
                    <p>{"From idea to export pack in minutes, not hours."}</p>
                </div>
                <WorkflowIndicator steps={WORKFLOW_STEPS} variant={props.variant} timings={props.timings} />
            </div>
        </section>
    }
}

#[function_component(PlatformGrid)]
pub fn platform_grid(props: &SectionProps) -> Html {
    html! {
        <section class={classes!("lp-section", props.class.clone())}>
            <div class="lp-container">
                <div class="lp-heading lp-heading--center">
                    <h2>{"Multi-Platform Ready"}</h2>
                    <p>{"Optimized exports for all major content platforms."}</p>
                </div>
                <div class="platform-grid">
                    { PLATFORMS.iter().map(|platform| html! {
                        <div class="platform-tile" key={platform.name}>
                            <span class="material-symbols-outlined">{platform.icon}</span>
                            <span class="platform-tile__name">{platform.name}</span>
                        </div>
                    }).collect::<Html>() }
                </div>
            </div>
        </section>
    }
}

#[function_component(CoreTools)]
pub fn core_tools(props: &SectionProps) -> Html {
    html! {
        <section class={classes!("lp-section", "lp-section--alt", props.class.clone())}>
            <div class="lp-container">
                <div class="lp-heading">
                    <h2>{"Core AI Tools"}</h2>
                    <p>{"Master the core tools in minutes."}</p>
                </div>
                <div class="tool-grid">
                    { CORE_TOOLS.iter().map(|tool| html! {
                        <div class="tool-card glass-card" key={tool.title}>
                            <div class="tool-card__image" style={background_image(tool.image)}></div>
                            <div class="tool-card__body">
                                <div class="tool-card__title">
                                    <span class="material-symbols-outlined">{tool.icon}</span>
                                    <p>{tool.title}</p>
                                </div>
                                <p class="tool-card__blurb">{tool.blurb}</p>
                                <button class="btn btn--ghost">{tool.cta}</button>
                            </div>
                        </div>
                    }).collect::<Html>() }
                </div>
            </div>
        </section>
    }
}

#[function_component(FeatureCards)]
pub fn feature_cards(props: &SectionProps) -> Html {
    html! {
        <section class={classes!("lp-section", props.class.clone())}>
            <div class="lp-container">
                <div class="lp-heading lp-heading--center">
                    <h2>{"Enterprise-Ready Features"}</h2>
                    <p>{"Built for teams, designed for scale."}</p>
                </div>
                <div class="feature-grid">
                    { FEATURES.iter().map(|feature| html! {
                        <div class="feature-card" key={feature.title}>
                            <div class="feature-card__icon">
                                <span class="material-symbols-outlined">{feature.icon}</span>
                            </div>
                            <p class="feature-card__title">{feature.title}</p>
                            <p class="feature-card__desc">{feature.desc}</p>
                        </div>
                    }).collect::<Html>() }
                </div>
            </div>
        </section>
    }
}

#[function_component(PricingTiers)]
pub fn pricing_tiers(props: &SectionProps) -> Html {
    html! {
        <section class={classes!("lp-section", "lp-section--alt", "lp-section--last", props.class.clone())}>
            <div class="lp-container">
                <div class="lp-heading lp-heading--center">
                    <h2>{"Simple, Transparent Pricing"}</h2>
                    <p>{"Start free, scale as you grow."}</p>
                </div>
                <div class="pricing-grid">
                    { PRICING_PLANS.iter().map(|plan| {
                        let cta_class = if plan.popular { "btn--primary" } else { "btn--muted" };
                        html! {
                        <div class={classes!("pricing-card", plan.popular.then(|| "pricing-card--popular"))} key={plan.name}>
                            if plan.popular {
                                <span class="pricing-card__badge">{"Most Popular"}</span>
                            }
                            <div>
                                <p class="pricing-card__name">{plan.name}</p>
                                <p class="pricing-card__price">{plan.price}</p>
                            </div>
                            <ul class="pricing-card__features">
                                { plan.features.iter().map(|f| html! {
                                    <li key={*f}>
                                        <span class="material-symbols-outlined">{"check_circle"}</span>
                                        {*f}
                                    </li>
                                }).collect::<Html>() }
                            </ul>
                            <button class={classes!("btn", "pricing-card__cta", cta_class)}>
                                {plan.cta_label()}
                            </button>
                        </div>
                        }
                    }).collect::<Html>() }
                </div>
            </div>
        </section>
    }
}

#[function_component(StickyCta)]
pub fn sticky_cta(props: &SectionProps) -> Html {
    html! {
        <div class={classes!("sticky-cta", "glass-card", props.class.clone())}>
            <div class="sticky-cta__inner">
                <button class="btn btn--primary btn--large">{"Start Your Setup"}</button>
            </div>
        </div>
    }
}

/// Styles for the shared blocks. Rendered once per page.
#[function_component(SectionStyles)]
pub fn section_styles() -> Html {
    html! {
        <style>
            {r#"
                .lp-section {
                    padding: 4rem 1.5rem;
                }
                .lp-section--alt {
                    background: var(--color-surface);
                }
                .lp-section--last {
                    margin-bottom: 7rem;
                }
                .lp-container {
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .lp-container--wide {
                    max-width: 64rem;
                }
                .lp-heading {
                    margin-bottom: 2.5rem;
                }
                .lp-heading--center {
                    text-align: center;
                }
                .lp-heading h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    letter-spacing: -0.02em;
                    margin: 0 0 0.75rem 0;
                    color: var(--color-text-main);
                }
                .lp-heading p {
                    color: var(--color-text-muted);
                    margin: 0;
                }
                .pill {
                    align-self: center;
                    padding: 0.25rem 0.75rem;
                    border-radius: var(--radius-full);
                    background: rgba(14, 165, 233, 0.2);
                    border: 1px solid rgba(14, 165, 233, 0.3);
                    color: var(--color-primary);
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                }
                .material-symbols-outlined {
                    color: var(--color-primary);
                }
                .glass-card {
                    background: rgba(21, 30, 50, 0.7);
                    backdrop-filter: blur(12px);
                    border: 1px solid var(--color-border);
                }
                .btn {
                    cursor: pointer;
                    border-radius: var(--radius-lg);
                    font-weight: 700;
                    font-size: 0.875rem;
                    padding: 0.75rem 1.5rem;
                    border: 1px solid transparent;
                    transition: transform 0.15s ease, background 0.2s ease;
                }
                .btn:active {
                    transform: scale(0.97);
                }
                .btn--primary {
                    background: var(--color-primary);
                    color: var(--color-background);
                    box-shadow: 0 10px 25px rgba(14, 165, 233, 0.25);
                }
                .btn--primary:hover {
                    background: var(--color-primary-dark);
                }
                .btn--ghost {
                    background: rgba(14, 165, 233, 0.1);
                    color: var(--color-primary);
                    border-color: rgba(14, 165, 233, 0.3);
                }
                .btn--muted {
                    background: var(--color-surface-highlight);
                    color: var(--color-text-main);
                    border-color: var(--color-border);
                }
                .btn--large {
                    width: 100%;
                    height: 3.5rem;
                    font-size: 1rem;
                }
                .platform-grid {
                    display: grid;
                    grid-template-columns: repeat(6, 1fr);
                    gap: 1rem;
                }
                .platform-tile {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem;
                    border-radius: var(--radius-xl);
                    background: var(--color-surface-highlight);
                    border: 1px solid var(--color-border);
                    cursor: pointer;
                    transition: border-color 0.2s ease;
                }
                .platform-tile:hover {
                    border-color: rgba(14, 165, 233, 0.5);
                }
                .platform-tile__name {
                    font-size: 0.75rem;
                    color: var(--color-text-muted);
                }
                .tool-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .tool-card {
                    display: flex;
                    flex-direction: column;
                    overflow: hidden;
                    border-radius: var(--radius-xl);
                }
                .tool-card__image {
                    height: 12rem;
                    background-size: cover;
                    background-position: center;
                    transition: transform 0.5s ease;
                }
                .tool-card:hover .tool-card__image {
                    transform: scale(1.05);
                }
                .tool-card__body {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    padding: 1.25rem;
                }
                .tool-card__title {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .tool-card__title p {
                    margin: 0;
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: var(--color-text-main);
                }
                .tool-card__blurb {
                    margin: 0;
                    color: var(--color-text-muted);
                }
                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                }
                .feature-card {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    gap: 0.75rem;
                    padding: 1.25rem;
                    border-radius: var(--radius-xl);
                    background: var(--color-surface-highlight);
                    border: 1px solid var(--color-border);
                }
                .feature-card__icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: var(--radius-full);
                    background: rgba(14, 165, 233, 0.1);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .feature-card__title {
                    margin: 0;
                    font-weight: 700;
                    color: var(--color-text-main);
                }
                .feature-card__desc {
                    margin: 0;
                    font-size: 0.75rem;
                    color: var(--color-text-muted);
                }
                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .pricing-card {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1.5rem;
                    border-radius: var(--radius-xl);
                    background: var(--color-background);
                    border: 1px solid var(--color-border);
                }
                .pricing-card--popular {
                    background: rgba(14, 165, 233, 0.08);
                    border-color: rgba(14, 165, 233, 0.5);
                }
                .pricing-card__badge {
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    color: var(--color-primary);
                }
                .pricing-card__name {
                    margin: 0;
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                .pricing-card__price {
                    margin: 0.25rem 0 0 0;
                    font-size: 1.875rem;
                    font-weight: 900;
                }
                .pricing-card__features {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    color: var(--color-text-muted);
                }
                .pricing-card__features li {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .pricing-card__features .material-symbols-outlined {
                    font-size: 1rem;
                }
                .pricing-card__cta {
                    margin-top: auto;
                    width: 100%;
                }
                .sticky-cta {
                    position: fixed;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    z-index: 50;
                    padding: 1rem 1rem 2rem 1rem;
                }
                .sticky-cta__inner {
                    max-width: 28rem;
                    margin: 0 auto;
                }
                @media (max-width: 768px) {
                    .lp-section {
                        padding: 2.5rem 1rem;
                    }
                    .lp-heading h2 {
                        font-size: 1.375rem;
                    }
                    .platform-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                    .tool-grid,
                    .pricing-grid {
                        grid-template-columns: 1fr;
                    }
                    .feature-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
            "#}
        </style>
    }
}
