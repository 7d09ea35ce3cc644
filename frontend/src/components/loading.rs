use yew::prelude::*;

use crate::animation::{Pose, Transition};
use crate::components::motion::{Motion, Trigger};
use crate::config::CROSSFADE_MS;
use crate::content::LOADING_MARK;
use crate::ellipsis::{self, Ellipsis, EllipsisAction};
use crate::timer::BrowserClock;

#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    let dots = use_reducer(Ellipsis::default);

    {
        let dots = dots.clone();
        use_effect_with_deps(
            move |_| {
                let ticker = ellipsis::animate(&BrowserClock, move || {
                    dots.dispatch(EllipsisAction::Tick);
                });

                move || {
                    drop(ticker);
                    log::debug!("loading animation stopped");
                }
            },
            (),
        );
    }

    html! {
        <Motion
            class={classes!("loading-screen")}
            from={Pose::hidden()}
            transition={Transition::new(CROSSFADE_MS)}
            trigger={Trigger::Mount}
        >
            <style>
                {r#"
                    .loading-screen {
                        position: fixed;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: var(--page-bg);
                        z-index: 100;
                    }
                    .loading-dots {
                        font-family: "SFMono-Regular", Menlo, monospace;
                        font-size: 2rem;
                        letter-spacing: 0.3em;
                        color: var(--accent);
                        min-width: 12ch;
                        text-align: center;
                    }
                "#}
            </style>
            <div class="loading-content">
                <div class="loading-dots">
                    { format!("{}{}", dots.as_str(), LOADING_MARK) }
                </div>
            </div>
        </Motion>
    }
}
