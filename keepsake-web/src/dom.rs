//! Browser glue: window access, console reporting, and timers that die with
//! their owner.
//!
//! Every scheduled callback is held by a handle whose `Drop` clears the
//! underlying browser timer, so storing a handle in a component ref gives
//! cancel-on-teardown for free and replacing it gives cancel-and-replace.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

/// The global `window`, when running in a browser context.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// The active document, when running in a browser context.
#[must_use]
pub fn document() -> Option<web_sys::Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

fn delay_arg(delay_ms: u32) -> i32 {
    i32::try_from(delay_ms).unwrap_or(i32::MAX)
}

/// A pending `setTimeout`. Dropping the handle clears the timer.
pub struct TimeoutHandle {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Drop for TimeoutHandle {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_timeout_with_handle(self.id);
        }
    }
}

/// Schedule `f` once after `delay_ms`. Returns `None` outside a browser or
/// when the browser refuses the timer.
pub fn schedule_timeout(delay_ms: u32, f: impl FnMut() + 'static) -> Option<TimeoutHandle> {
    let win = window()?;
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    match win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_arg(delay_ms),
    ) {
        Ok(id) => Some(TimeoutHandle {
            id,
            _closure: closure,
        }),
        Err(err) => {
            console_error(&format!(
                "failed to schedule timeout: {}",
                js_error_message(&err)
            ));
            None
        }
    }
}

/// A running `setInterval`. Dropping the handle clears the timer.
pub struct IntervalHandle {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl IntervalHandle {
    /// Stop the interval without dropping the handle. Safe to call from
    /// inside the interval's own callback; idempotent.
    pub fn cancel(&self) {
        if let Some(win) = window() {
            win.clear_interval_with_handle(self.id);
        }
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Schedule `f` every `period_ms` until the handle is cancelled or dropped.
pub fn schedule_interval(period_ms: u32, f: impl FnMut() + 'static) -> Option<IntervalHandle> {
    let win = window()?;
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    match win.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_arg(period_ms),
    ) {
        Ok(id) => Some(IntervalHandle {
            id,
            _closure: closure,
        }),
        Err(err) => {
            console_error(&format!(
                "failed to schedule interval: {}",
                js_error_message(&err)
            ));
            None
        }
    }
}

/// Start playback and swallow the autoplay verdict; a rejected play promise
/// is not an error the card reacts to.
pub fn play_media(media: &web_sys::HtmlMediaElement) {
    if let Ok(promise) = media.play() {
        wasm_bindgen_futures::spawn_local(async move {
            let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
        });
    }
}

/// Open the printable popup, inject the document and ask it to print.
/// A blocked popup is a silent no-op.
pub fn open_print_window(title: &str, body_html: &str) {
    let Some(win) = window() else {
        return;
    };
    match win.open_with_url_and_target_and_features("", "_blank", "width=600,height=800") {
        Ok(Some(popup)) => {
            if let Some(doc) = popup.document() {
                doc.set_title(title);
                if let Some(body) = doc.body() {
                    body.set_inner_html(body_html);
                }
            }
            let _ = popup.focus();
            let _ = popup.print();
        }
        Ok(None) => {}
        Err(err) => {
            console_error(&format!(
                "failed to open print window: {}",
                js_error_message(&err)
            ));
        }
    }
}
