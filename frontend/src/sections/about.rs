use yew::prelude::*;

use crate::animation::{Pose, Transition};
use crate::components::motion::Motion;
use crate::content::{ABOUT_IMAGE, ABOUT_TEXT, STATS};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about">
            <style>
                {r#"
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .about-text {
                        color: var(--text-muted);
                        line-height: 1.8;
                        margin-bottom: 2.5rem;
                    }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    .stat-item h3 {
                        font-size: 2rem;
                        margin: 0 0 0.25rem;
                        color: var(--accent);
                    }
                    .stat-item p {
                        margin: 0;
                        color: var(--text-muted);
                        font-size: 0.9rem;
                    }
                    .about-image img {
                        width: 100%;
                        border-radius: 24px;
                        box-shadow: 0 24px 48px rgba(0, 0, 0, 0.4);
                    }
                    @media (max-width: 900px) {
                        .about-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <div class="about-grid">
                    <Motion
                        class={classes!("about-content")}
                        from={Pose::from_x(-50)}
                        transition={Transition::new(800)}
                    >
                        <h2 class="section-title">
                            {"Revolutionizing "}
                            <span class="gradient-text">{"Blockchain"}</span>
                            {" Technology"}
                        </h2>
                        <p class="about-text">{ABOUT_TEXT}</p>
                        <div class="stats-grid">
                            { for STATS.iter().map(|stat| html! {
                                <div class="stat-item">
                                    <h3>{stat.value}</h3>
                                    <p>{stat.label}</p>
                                </div>
                            }) }
                        </div>
                    </Motion>
                    <Motion
                        class={classes!("about-image")}
                        from={Pose::from_x(50)}
                        transition={Transition::new(800).delayed(200)}
                    >
                        <img src={ABOUT_IMAGE.src} alt={ABOUT_IMAGE.alt} />
                    </Motion>
                </div>
            </div>
        </section>
    }
}
