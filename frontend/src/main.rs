use log::info;
use yew::prelude::*;

mod animation;
mod config;
mod content;
mod ellipsis;
mod error;
mod phase;
mod scroll;
mod timer;
mod components {
    pub mod loading;
    pub mod motion;
}
mod sections {
    pub mod about;
    pub mod community;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod technology;
}

use animation::{Pose, Transition};
use components::{
    loading::LoadingScreen,
    motion::{Motion, Trigger},
};
use phase::{LoadingGate, PhaseAction, ViewPhase};
use sections::{
    about::About,
    community::Community,
    footer::Footer,
    header::Header,
    hero::Hero,
    technology::Technology,
};
use timer::BrowserClock;

#[function_component]
fn App() -> Html {
    let phase = use_reducer_eq(ViewPhase::default);

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |_| {
                let gate = LoadingGate::start(&BrowserClock, config::LOADING_DELAY_MS, move || {
                    phase.dispatch(PhaseAction::Open);
                });

                // Cancels the gate if the app goes away before it opens.
                move || drop(gate)
            },
            (),
        );
    }

    // The loading screen unmounts at the swap instead of fading out: the main
    // view has to be mounted as soon as the gate opens. Both share the page
    // background and the main view starts transparent, so the swap still reads
    // as a cross-fade without the two views ever being opaque together.
    let view = if phase.is_loading() {
        html! { <LoadingScreen key="loading" /> }
    } else {
        html! {
            <Motion
                key="main"
                class={classes!("main-content")}
                from={Pose::hidden()}
                transition={Transition::new(config::CROSSFADE_MS)}
                trigger={Trigger::Mount}
            >
                <Header />
                <Hero />
                <About />
                <Community />
                <Technology />
                <Footer />
            </Motion>
        }
    };

    html! {
        <div class="App">
            <style>
                {r#"
                    :root {
                        --page-bg: #0a0e1a;
                        --surface: #0f1424;
                        --card: rgba(255, 255, 255, 0.04);
                        --border: rgba(255, 255, 255, 0.08);
                        --text: #f5f7ff;
                        --text-muted: #9aa3b8;
                        --accent: #5ec8ff;
                        --accent-2: #8b5cf6;
                    }
                    * {
                        box-sizing: border-box;
                    }
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        margin: 0;
                        background: var(--page-bg);
                        color: var(--text);
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    @keyframes motion-enter {
                        from {
                            opacity: var(--motion-opacity);
                            transform: translate(var(--motion-x), var(--motion-y));
                        }
                        to {
                            opacity: 1;
                            transform: none;
                        }
                    }
                    .container {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }
                    section {
                        padding: 6rem 0;
                    }
                    .section-title {
                        font-size: clamp(2rem, 4vw, 3rem);
                        line-height: 1.2;
                        margin: 0 0 1.5rem;
                    }
                    .section-subtitle {
                        color: var(--text-muted);
                        font-size: 1.15rem;
                        max-width: 640px;
                    }
                    .centered {
                        text-align: center;
                        margin-left: auto;
                        margin-right: auto;
                    }
                    .gradient-text {
                        background: linear-gradient(90deg, var(--accent), var(--accent-2));
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .btn-primary,
                    .btn-secondary {
                        border-radius: 999px;
                        padding: 0.7rem 1.5rem;
                        font-size: 0.95rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .btn-primary {
                        border: none;
                        color: #fff;
                        background: linear-gradient(90deg, var(--accent), var(--accent-2));
                    }
                    .btn-secondary {
                        border: 1px solid var(--border);
                        color: var(--text);
                        background: transparent;
                    }
                    .btn-primary:hover,
                    .btn-secondary:hover {
                        transform: translateY(-2px);
                        box-shadow: 0 8px 24px rgba(94, 200, 255, 0.25);
                    }
                    .large {
                        padding: 1rem 2.25rem;
                        font-size: 1.05rem;
                    }
                "#}
            </style>
            { view }
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
