use yew::prelude::*;

use crate::animation::{Pose, Transition};
use crate::components::motion::{Motion, Trigger};
use crate::content::{HERO_IMAGE, HERO_SUBTITLE};

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                    }
                    .hero-bg {
                        position: absolute;
                        inset: 0;
                    }
                    .hero-image {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(180deg, rgba(10, 14, 26, 0.55) 0%, var(--page-bg) 100%);
                    }
                    .hero-content {
                        position: relative;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }
                    .hero-title {
                        font-size: clamp(2.5rem, 6vw, 4.5rem);
                        line-height: 1.1;
                        margin: 0 0 1.5rem;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: var(--text-muted);
                        max-width: 640px;
                        margin: 0 0 2.5rem;
                    }
                    .hero-buttons {
                        display: flex;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }
                "#}
            </style>
            <div class="hero-bg">
                <img src={HERO_IMAGE.src} alt={HERO_IMAGE.alt} class="hero-image" />
                <div class="hero-overlay"></div>
            </div>
            <div class="hero-content">
                <Motion
                    class={classes!("hero-text")}
                    from={Pose::from_y(50)}
                    transition={Transition::new(1000).delayed(500)}
                    trigger={Trigger::Mount}
                >
                    <h1 class="hero-title">
                        {"Building the Future of"}
                        <span class="gradient-text">{" Onchain Communities"}</span>
                    </h1>
                    <p class="hero-subtitle">{HERO_SUBTITLE}</p>
                    <div class="hero-buttons">
                        <button class="btn-primary large">{"Get Started"}</button>
                        <button class="btn-secondary large">{"Learn More"}</button>
                    </div>
                </Motion>
            </div>
        </section>
    }
}
