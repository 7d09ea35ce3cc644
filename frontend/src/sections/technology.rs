use yew::prelude::*;

use crate::animation::{Pose, Stagger, Transition};
use crate::components::motion::Motion;
use crate::config::STAGGER_STEP_MS;
use crate::content::{TECHNOLOGY_IMAGE, TECHNOLOGY_TEXT, TECH_SPECS};

#[function_component(Technology)]
pub fn technology() -> Html {
    let stagger = Stagger::new(STAGGER_STEP_MS);

    html! {
        <section id="technology" class="technology">
            <style>
                {r#"
                    .technology-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .technology-text {
                        color: var(--text-muted);
                        line-height: 1.8;
                        margin-bottom: 2rem;
                    }
                    .tech-specs {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .tech-spec {
                        display: flex;
                        justify-content: space-between;
                        gap: 1rem;
                        padding: 0.9rem 1.25rem;
                        border-radius: 12px;
                        background: var(--card);
                        border: 1px solid var(--border);
                    }
                    .spec-label {
                        color: var(--text-muted);
                    }
                    .spec-value {
                        font-weight: 600;
                    }
                    .technology-image img {
                        width: 100%;
                        border-radius: 24px;
                    }
                    @media (max-width: 900px) {
                        .technology-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <div class="technology-grid">
                    <Motion
                        class={classes!("technology-content")}
                        from={Pose::from_x(-50)}
                        transition={Transition::new(800)}
                    >
                        <h2 class="section-title">
                            {"Next-Gen "}
                            <span class="gradient-text">{"Infrastructure"}</span>
                        </h2>
                        <p class="technology-text">{TECHNOLOGY_TEXT}</p>
                        <div class="tech-specs">
                            { for TECH_SPECS.iter().enumerate().map(|(index, spec)| html! {
                                <Motion
                                    key={index}
                                    class={classes!("tech-spec")}
                                    from={Pose::from_x(-20)}
                                    transition={Transition::new(500).delayed(stagger.delay(index))}
                                >
                                    <span class="spec-label">{format!("{}:", spec.label)}</span>
                                    <span class="spec-value">{spec.value}</span>
                                </Motion>
                            }) }
                        </div>
                    </Motion>

                    <Motion
                        class={classes!("technology-image")}
                        from={Pose::from_x(50)}
                        transition={Transition::new(800).delayed(200)}
                    >
                        <img src={TECHNOLOGY_IMAGE.src} alt={TECHNOLOGY_IMAGE.alt} />
                    </Motion>
                </div>
            </div>
        </section>
    }
}
