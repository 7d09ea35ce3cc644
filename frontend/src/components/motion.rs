use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::animation::{motion_style, Pose, Reveal, Transition};
use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::error::DomError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Animate as soon as the element is mounted.
    Mount,
    /// Animate the first time the element scrolls into view.
    InView,
}

#[derive(Properties, PartialEq)]
pub struct MotionProps {
    #[prop_or(AttrValue::Static("div"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    pub from: Pose,
    pub transition: Transition,
    #[prop_or(Trigger::InView)]
    pub trigger: Trigger,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Motion)]
pub fn motion(props: &MotionProps) -> Html {
    let node = use_node_ref();
    let in_view = use_reveal(node.clone(), props.trigger == Trigger::InView);

    let active = match props.trigger {
        Trigger::Mount => true,
        Trigger::InView => in_view,
    };
    let style = motion_style(props.from, props.transition, active);

    html! {
        <@{props.tag.to_string()}
            ref={node}
            id={props.id.clone()}
            class={props.class.clone()}
            style={style}
        >
            { for props.children.iter() }
        </@>
    }
}

/// Becomes true the first time `node` intersects the viewport and stays true.
/// Does nothing while `enabled` is false.
#[hook]
pub fn use_reveal(node: NodeRef, enabled: bool) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(node, enabled)| {
                let mut observer = None;
                if *enabled && !*revealed {
                    let setter = revealed.setter();
                    match RevealObserver::observe(node, move || setter.set(true)) {
                        Ok(o) => observer = Some(o),
                        Err(err) => {
                            // Never leave content hidden because the observer is missing.
                            gloo_console::error!(err.to_string());
                            revealed.set(true);
                        }
                    }
                }
                move || drop(observer)
            },
            (node, enabled),
        );
    }

    *revealed
}

/// Owns an observer and its JS callback; dropping it disconnects.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn observe(node: &NodeRef, on_enter: impl Fn() + 'static) -> Result<Self, DomError> {
        let element = node.cast::<Element>().ok_or(DomError::Detached)?;

        let mut latch = Reveal::default();
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                .any(|entry| entry.is_intersecting());
            if latch.observe(intersecting) {
                // One-shot: nothing left to watch for.
                observer.disconnect();
                on_enter();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        init.set_root_margin(REVEAL_ROOT_MARGIN);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(DomError::observer)?;
        observer.observe(&element);

        Ok(RevealObserver {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
