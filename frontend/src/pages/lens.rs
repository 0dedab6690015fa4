use yew::prelude::*;

use crate::components::sections::{
    CoreTools, FeatureCards, PlatformGrid, PricingTiers, SectionStyles, StickyCta, WorkflowSection,
};
use crate::content::CHAPTERS;
use crate::scroll::{chapter_index, chapter_local_progress, lens_transform, use_section_progress};

/// Hero where scrolling zooms and rotates a camera lens while chapter copy
/// swaps underneath it.
#[function_component(LensLanding)]
pub fn lens_landing() -> Html {
    let stage = use_node_ref();
    let progress = use_section_progress(stage.clone());
    let lens = lens_transform(progress);
    let active = chapter_index(progress, CHAPTERS.len());
    let local = chapter_local_progress(progress, CHAPTERS.len());

    html! {
        <div class="lens-page">
            <section class="lens-stage" ref={stage}>
                <div class="lens-stage__sticky">
                    <div class="lens" style={lens.barrel_style()}>
                        <div class="lens__ring lens__ring--outer"></div>
                        <div class="lens__ring lens__ring--mid"></div>
                        <div class="lens__ring lens__ring--inner"></div>
                        <div class="lens__aperture" style={lens.aperture_style()}></div>
                        <div class="lens__glint"></div>
                    </div>
                    <div class="lens-chapters">
                        { CHAPTERS.iter().enumerate().map(|(i, chapter)| html! {
                            <article class={classes!("lens-chapter", (i == active).then(|| "active"))} key={chapter.kicker}>
                                <span class="lens-chapter__kicker">{chapter.kicker}</span>
                                <h2>{chapter.title}</h2>
                                <p>{chapter.body}</p>
                            </article>
                        }).collect::<Html>() }
                    </div>
                    <div class="lens-dots">
                        { (0..CHAPTERS.len()).map(|i| {
                            let fill = if i < active { 1.0 } else if i == active { local } else { 0.0 };
                            html! {
                                <span class="lens-dots__dot">
                                    <span class="lens-dots__fill" style={format!("height: {:.1}%;", fill * 100.0)}></span>
                                </span>
                            }
                        }).collect::<Html>() }
                    </div>
                </div>
            </section>

            <WorkflowSection />
            <PlatformGrid />
            <CoreTools />
            <FeatureCards />
            <PricingTiers />
            <StickyCta />

            <SectionStyles />
            <style>
                {r#"
                    .lens-page {
                        padding-top: 3.5rem;
                        overflow-x: hidden;
                    }
                    .lens-stage {
                        position: relative;
                        height: 400vh;
                    }
                    .lens-stage__sticky {
                        position: sticky;
                        top: 0;
                        height: 100vh;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        align-items: center;
                        gap: 3rem;
                        padding: 0 4rem;
                        perspective: 1200px;
                        background: radial-gradient(circle at 30% 50%, rgba(139, 92, 246, 0.18), transparent 60%);
                    }
                    .lens {
                        position: relative;
                        width: 22rem;
                        height: 22rem;
                        justify-self: center;
                        transform-style: preserve-3d;
                        transition: transform 0.15s linear;
                    }
                    .lens__ring {
                        position: absolute;
                        border-radius: 50%;
                    }
                    .lens__ring--outer {
                        inset: 0;
                        background: conic-gradient(from 0deg, #1e293b, #0f172a, #334155, #0f172a, #1e293b);
                        box-shadow: 0 30px 80px rgba(0, 0, 0, 0.6), inset 0 0 0 6px rgba(255, 255, 255, 0.04);
                    }
                    .lens__ring--mid {
                        inset: 12%;
                        background: repeating-conic-gradient(#111827 0deg 6deg, #1f2937 6deg 12deg);
                        transform: translateZ(20px);
                    }
                    .lens__ring--inner {
                        inset: 26%;
                        background: radial-gradient(circle, #0b1121 40%, #0ea5e9 120%);
                        transform: translateZ(40px);
                    }
                    .lens__aperture {
                        position: absolute;
                        inset: 34%;
                        border-radius: 50%;
                        background: conic-gradient(from 30deg, #0f172a 0 60deg, #1e293b 60deg 120deg, #0f172a 120deg 180deg, #1e293b 180deg 240deg, #0f172a 240deg 300deg, #1e293b 300deg 360deg);
                        transform: translateZ(50px);
                        transition: opacity 0.15s linear;
                    }
                    .lens__glint {
                        position: absolute;
                        inset: 30% 45% 55% 32%;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.35);
                        filter: blur(6px);
                        transform: translateZ(60px);
                    }
                    .lens-chapters {
                        position: relative;
                        min-height: 16rem;
                    }
                    .lens-chapter {
                        position: absolute;
                        inset: 0;
                        opacity: 0;
                        transform: translateY(24px);
                        transition: opacity 0.5s ease, transform 0.5s ease;
                    }
                    .lens-chapter.active {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .lens-chapter__kicker {
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: var(--color-primary);
                    }
                    .lens-chapter h2 {
                        font-size: 2.5rem;
                        margin: 0.75rem 0;
                        letter-spacing: -0.03em;
                    }
                    .lens-chapter p {
                        color: var(--color-text-muted);
                        line-height: 1.6;
                        max-width: 28rem;
                    }
                    .lens-dots {
                        position: absolute;
                        right: 2rem;
                        top: 50%;
                        transform: translateY(-50%);
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .lens-dots__dot {
                        position: relative;
                        width: 4px;
                        height: 2.5rem;
                        border-radius: var(--radius-full);
                        background: var(--color-surface-highlight);
                        overflow: hidden;
                    }
                    .lens-dots__fill {
                        position: absolute;
                        top: 0;
                        left: 0;
                        right: 0;
                        background: var(--color-primary);
                    }
                    @media (max-width: 768px) {
                        .lens-stage__sticky {
                            grid-template-columns: 1fr;
                            padding: 4rem 1.5rem 0 1.5rem;
                            gap: 1rem;
                        }
                        .lens {
                            width: 14rem;
                            height: 14rem;
                        }
                        .lens-chapter h2 {
                            font-size: 1.75rem;
                        }
                        .lens-dots {
                            display: none;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
