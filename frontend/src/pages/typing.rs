use yew::prelude::*;

use crate::components::sections::{
    CoreTools, FeatureCards, PlatformGrid, PricingTiers, SectionStyles, StickyCta, WorkflowSection,
};
use crate::components::typing::TypingMarquee;
use crate::components::workflow::IndicatorVariant;
use crate::content::HEADLINE_PHRASES;

#[function_component(TypingLanding)]
pub fn typing_landing() -> Html {
    html! {
        <div class="typing-page">
            <header class="typing-hero">
                <div class="typing-hero__glow"></div>
                <div class="typing-hero__content">
                    <span class="pill">{"Next-Gen AI SaaS"}</span>
                    <h1>
                        {"Transform Ideas Into"}
                        <br />
                        <TypingMarquee phrases={HEADLINE_PHRASES} />
                    </h1>
                    <p>
                        {"Script, voice, caption and export short-form and long-form content from one prompt."}
                    </p>
                    <div class="typing-hero__actions">
                        <button class="btn btn--primary">{"Get Started Free"}</button>
                        <button class="btn btn--muted">{"Watch Demo"}</button>
                    </div>
                </div>
            </header>

            <WorkflowSection class="typing-workflow" variant={IndicatorVariant::Tilt} />
            <PlatformGrid />
            <CoreTools />
            <FeatureCards />
            <PricingTiers />
            <StickyCta />

            <SectionStyles />
            <style>
                {r#"
                    .typing-page {
                        padding-top: 3.5rem;
                        overflow-x: hidden;
                    }
                    .typing-hero {
                        position: relative;
                        min-height: 80vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        overflow: hidden;
                    }
                    .typing-hero__glow {
                        position: absolute;
                        width: 40rem;
                        height: 40rem;
                        border-radius: 50%;
                        background: radial-gradient(circle, rgba(14, 165, 233, 0.25), rgba(139, 92, 246, 0.12) 45%, transparent 70%);
                        filter: blur(40px);
                    }
                    .typing-hero__content {
                        position: relative;
                        max-width: 40rem;
                        padding: 0 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                    }
                    .typing-hero__content h1 {
                        margin: 0;
                        font-size: 3.25rem;
                        font-weight: 900;
                        line-height: 1.15;
                        letter-spacing: -0.033em;
                        min-height: 2.3em;
                    }
                    .typing-hero__content p {
                        margin: 0;
                        color: var(--color-text-muted);
                        line-height: 1.6;
                    }
                    .typing-hero__actions {
                        display: flex;
                        gap: 0.75rem;
                        justify-content: center;
                    }
                    .typing-workflow {
                        background: linear-gradient(180deg, var(--color-background), var(--color-surface));
                    }
                    @media (max-width: 640px) {
                        .typing-hero__content h1 {
                            font-size: 2rem;
                        }
                        .typing-hero__actions {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
