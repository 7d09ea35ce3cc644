use yew::prelude::*;

use crate::animation::{Pose, Transition};
use crate::components::motion::{Motion, Trigger};
use crate::content::{BRAND, HEADER_CTA, NAV_LINKS};
use crate::scroll::{self, WindowScroll};

#[function_component(Header)]
pub fn header() -> Html {
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowScroll::new()
                    .and_then(|window| scroll::watch(&window, move |flag| is_scrolled.set(flag)));
                let listener = match listener {
                    Ok(listener) => Some(listener),
                    Err(err) => {
                        gloo_console::error!(err.to_string());
                        None
                    }
                };

                move || drop(listener)
            },
            (),
        );
    }

    html! {
        <Motion
            tag="header"
            class={classes!("header", (*is_scrolled).then(|| "scrolled"))}
            from={Pose::slide_y(-100)}
            transition={Transition::new(800)}
            trigger={Trigger::Mount}
        >
            <style>
                {r#"
                    .header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.5rem 0;
                        transition: background 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
                    }
                    .header.scrolled {
                        padding: 0.75rem 0;
                        background: rgba(10, 14, 26, 0.92);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 4px 24px rgba(0, 0, 0, 0.35);
                    }
                    .header-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .logo h1 {
                        margin: 0;
                        font-size: 1.75rem;
                        letter-spacing: 0.05em;
                    }
                    .nav {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav a {
                        color: var(--text-muted);
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .nav a:hover {
                        color: var(--text);
                    }
                    @media (max-width: 768px) {
                        .nav {
                            display: none;
                        }
                    }
                "#}
            </style>
            <div class="header-content">
                <div class="logo">
                    <h1>{BRAND}</h1>
                </div>
                <nav class="nav">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={link.href}>{link.label}</a>
                    }) }
                </nav>
                <div class="header-cta">
                    <button class="btn-primary">{HEADER_CTA}</button>
                </div>
            </div>
        </Motion>
    }
}
