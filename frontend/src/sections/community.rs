use yew::prelude::*;

use crate::animation::{Pose, Stagger, Transition};
use crate::components::motion::Motion;
use crate::config::STAGGER_STEP_MS;
use crate::content::{COMMUNITY_IMAGE, COMMUNITY_SUBTITLE, FEATURES};

#[function_component(Community)]
pub fn community() -> Html {
    let stagger = Stagger::new(STAGGER_STEP_MS);

    html! {
        <section id="community" class="community">
            <style>
                {r#"
                    .community {
                        background: var(--surface);
                    }
                    .community-header {
                        margin-bottom: 4rem;
                    }
                    .community-content {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .community-image img {
                        width: 100%;
                        border-radius: 24px;
                    }
                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                    }
                    .feature-card {
                        padding: 1.75rem;
                        border-radius: 16px;
                        background: var(--card);
                        border: 1px solid var(--border);
                    }
                    .feature-icon {
                        font-size: 2rem;
                        margin-bottom: 1rem;
                    }
                    .feature-card h3 {
                        margin: 0 0 0.5rem;
                        font-size: 1.1rem;
                    }
                    .feature-card p {
                        margin: 0;
                        color: var(--text-muted);
                        line-height: 1.6;
                    }
                    @media (max-width: 900px) {
                        .community-content,
                        .features-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <Motion
                    class={classes!("community-header")}
                    from={Pose::from_y(50)}
                    transition={Transition::new(800)}
                >
                    <h2 class="section-title centered">
                        {"Join the "}
                        <span class="gradient-text">{"Revolution"}</span>
                    </h2>
                    <p class="section-subtitle centered">{COMMUNITY_SUBTITLE}</p>
                </Motion>

                <div class="community-content">
                    <Motion
                        class={classes!("community-image")}
                        from={Pose::from_x(-50)}
                        transition={Transition::new(800)}
                    >
                        <img src={COMMUNITY_IMAGE.src} alt={COMMUNITY_IMAGE.alt} />
                    </Motion>

                    <div class="features-grid">
                        { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                            <Motion
                                key={index}
                                class={classes!("feature-card")}
                                from={Pose::from_y(30)}
                                transition={Transition::new(600).delayed(stagger.delay(index))}
                            >
                                <div class="feature-icon">{feature.icon}</div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </Motion>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
