use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::config::SCROLL_THRESHOLD;
use crate::error::DomError;

/// Whether the header should use its scrolled style at this offset.
/// NaN compares false, so an unreadable offset counts as the top of the page.
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Something that scrolls vertically and reports it.
pub trait ScrollSource {
    /// Keeps the listener attached; dropping it detaches.
    type Listener;

    fn offset(&self) -> f64;
    fn listen(&self, on_scroll: Box<dyn FnMut(f64)>) -> Result<Self::Listener, DomError>;
}

/// Reports the scrolled flag for `source` right away, then on every scroll,
/// until the returned listener is dropped.
pub fn watch<S: ScrollSource>(
    source: &S,
    mut on_flag: impl FnMut(bool) + 'static,
) -> Result<S::Listener, DomError> {
    on_flag(is_scrolled(source.offset()));
    source.listen(Box::new(move |offset| on_flag(is_scrolled(offset))))
}

pub struct WindowScroll {
    window: Window,
}

impl WindowScroll {
    pub fn new() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        Ok(WindowScroll { window })
    }
}

impl ScrollSource for WindowScroll {
    type Listener = WindowScrollListener;

    fn offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn listen(&self, mut on_scroll: Box<dyn FnMut(f64)>) -> Result<WindowScrollListener, DomError> {
        let reader = self.window.clone();
        let callback = Closure::wrap(Box::new(move || {
            on_scroll(reader.scroll_y().unwrap_or(0.0));
        }) as Box<dyn FnMut()>);

        self.window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(|e| DomError::listener("scroll", e))?;

        Ok(WindowScrollListener {
            window: self.window.clone(),
            callback,
        })
    }
}

/// A `scroll` listener on the window. Removed when dropped.
pub struct WindowScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl Drop for WindowScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
        log::debug!("scroll listener removed");
    }
}
