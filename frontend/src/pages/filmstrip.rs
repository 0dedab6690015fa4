use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::sections::{
    CoreTools, FeatureCards, PlatformGrid, PricingTiers, SectionStyles, StickyCta, WorkflowSection,
};
use crate::content::CHAPTERS;
use crate::scroll::{chapter_index, filmstrip_offset, use_section_progress};

#[function_component(FilmstripLanding)]
pub fn filmstrip_landing() -> Html {
    let stage = use_node_ref();
    let track = use_node_ref();
    let progress = use_section_progress(stage.clone());
    let (viewport_width, _) = use_window_size();

    let track_width = track
        .cast::<Element>()
        .map(|el| el.scroll_width() as f64)
        .unwrap_or(0.0);
    let offset = filmstrip_offset(progress, track_width, viewport_width);
    let active = chapter_index(progress, CHAPTERS.len());

    html! {
        <div class="film-page">
            <section class="film-stage" ref={stage}>
                <div class="film-stage__sticky">
                    <div class="film-stage__intro">
                        <span class="pill">{"Idea to export, frame by frame"}</span>
                        <h1>{"Your content, developed."}</h1>
                    </div>
                    <div class="film-track" ref={track} style={format!("transform: translate3d({:.1}px, 0, 0);", offset)}>
                        { CHAPTERS.iter().enumerate().map(|(i, chapter)| html! {
                            <article class={classes!("film-frame", (i == active).then(|| "active"))} key={chapter.kicker}>
                                <div class="film-frame__sprockets"></div>
                                <div class="film-frame__body">
                                    <span class="film-frame__kicker">{chapter.kicker}</span>
                                    <h2>{chapter.title}</h2>
                                    <p>{chapter.body}</p>
                                </div>
                                <div class="film-frame__sprockets"></div>
                            </article>
                        }).collect::<Html>() }
                    </div>
                    <div class="film-progress">
                        <div class="film-progress__bar" style={format!("width: {:.1}%;", progress * 100.0)}></div>
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
                    .film-page {
                        padding-top: 3.5rem;
                        overflow-x: clip;
                    }
                    .film-stage {
                        position: relative;
                        height: 350vh;
                    }
                    .film-stage__sticky {
                        position: sticky;
                        top: 0;
                        height: 100vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        gap: 2.5rem;
                        overflow: hidden;
                    }
                    .film-stage__intro {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 0 4rem;
                    }
                    .film-stage__intro .pill {
                        align-self: flex-start;
                    }
                    .film-stage__intro h1 {
                        margin: 0;
                        font-size: 3rem;
                        font-weight: 900;
                        letter-spacing: -0.033em;
                    }
                    .film-track {
                        display: flex;
                        gap: 0;
                        width: max-content;
                        padding: 0 4rem;
                        will-change: transform;
                    }
                    .film-frame {
                        width: 30rem;
                        display: flex;
                        flex-direction: column;
                        background: #050810;
                        opacity: 0.55;
                        transition: opacity 0.4s ease;
                    }
                    .film-frame.active {
                        opacity: 1;
                    }
                    .film-frame__sprockets {
                        height: 1.5rem;
                        background-image: repeating-linear-gradient(90deg, transparent 0 10px, rgba(248, 250, 252, 0.85) 10px 22px, transparent 22px 32px);
                        background-size: 32px 10px;
                        background-repeat: repeat-x;
                        background-position: center;
                    }
                    .film-frame__body {
                        margin: 0 0.5rem;
                        padding: 2rem;
                        min-height: 16rem;
                        border-radius: var(--radius);
                        background: linear-gradient(135deg, var(--color-surface), var(--color-surface-highlight));
                        color: #f8fafc;
                    }
                    .film-frame__kicker {
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: var(--color-primary);
                    }
                    .film-frame__body h2 {
                        margin: 0.75rem 0;
                        font-size: 1.75rem;
                    }
                    .film-frame__body p {
                        margin: 0;
                        color: #94a3b8;
                        line-height: 1.6;
                    }
                    .film-progress {
                        margin: 0 4rem;
                        height: 2px;
                        background: var(--color-surface-highlight);
                    }
                    .film-progress__bar {
                        height: 100%;
                        background: var(--color-primary);
                    }
                    @media (max-width: 768px) {
                        .film-stage__intro,
                        .film-track {
                            padding: 0 1.5rem;
                        }
                        .film-stage__intro h1 {
                            font-size: 2rem;
                        }
                        .film-frame {
                            width: 80vw;
                        }
                        .film-progress {
                            margin: 0 1.5rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
