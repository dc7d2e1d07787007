//! Browser side of the checkout walk.
//!
//! The session in `contracts` decides what should happen; this driver owns
//! the two resources the session cannot hold: the external popup window and
//! the interval polling it for a premature close. At most one of each
//! exists at any time. Both are released when the walk ends and on
//! component teardown.

use std::cell::RefCell;
use std::rc::Rc;

use contracts::domain::cart::CartLine;
use contracts::domain::checkout::{CheckoutSession, CheckoutState, WindowDirective};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::window;

/// Close-detection poll period.
const MONITOR_INTERVAL_MS: u32 = 500;
/// The popup takes a bit over half the screen; the storefront stays visible
/// next to it.
const POPUP_WIDTH_RATIO: f64 = 0.55;
const POPUP_WINDOW_NAME: &str = "tokopedia_checkout";

#[derive(Clone)]
pub struct CheckoutController {
    session: RwSignal<Option<CheckoutSession>>,
    popup: Rc<RefCell<Option<web_sys::Window>>>,
    monitor: Rc<RefCell<Option<Interval>>>,
}

impl CheckoutController {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(None),
            popup: Rc::new(RefCell::new(None)),
            monitor: Rc::new(RefCell::new(None)),
        }
    }

    /// The running session, `None` while no walk is active.
    pub fn session(&self) -> RwSignal<Option<CheckoutSession>> {
        self.session
    }

    /// Snapshots the cart lines and raises the confirmation dialog.
    pub fn start(&self, items: Vec<CartLine>) {
        match CheckoutSession::start(items) {
            Ok(session) => {
                log::debug!("checkout: session {} confirming", session.id);
                self.session.set(Some(session));
            }
            Err(reason) => log::warn!("checkout not started: {reason}"),
        }
    }

    /// Backs out of the confirmation dialog.
    pub fn cancel_start(&self) {
        self.session.update(|s| {
            if let Some(session) = s {
                session.cancel_start();
            }
        });
        self.drop_if_idle();
    }

    /// Confirms the walk; opens the first item's page when it has one.
    pub fn confirm_start(&self) {
        let mut directive = WindowDirective::None;
        self.session.update(|s| {
            if let Some(session) = s {
                directive = session.confirm_start();
            }
        });
        self.apply(directive);
    }

    /// Moves on to the next cart line.
    pub fn advance(&self) {
        let window_open = self.has_open_popup();
        let mut directive = WindowDirective::None;
        self.session.update(|s| {
            if let Some(session) = s {
                directive = session.advance(window_open);
            }
        });
        self.apply(directive);
    }

    /// Reopens the current item after a premature close.
    pub fn retry(&self) {
        let mut directive = WindowDirective::None;
        self.session.update(|s| {
            if let Some(session) = s {
                directive = session.retry();
            }
        });
        self.apply(directive);
    }

    /// Declines the retry prompt; same exit as [`finish`](Self::finish).
    pub fn cancel_retry(&self) {
        self.session.update(|s| {
            if let Some(session) = s {
                session.cancel_retry();
            }
        });
        self.release();
        self.drop_if_idle();
    }

    /// Ends the walk, closing whatever is still open.
    pub fn finish(&self) {
        self.session.update(|s| {
            if let Some(session) = s {
                session.finish();
            }
        });
        self.release();
        self.drop_if_idle();
    }

    /// Scoped teardown for `on_cleanup`: no timer or window survives the
    /// component owning the checkout UI.
    pub fn teardown(&self) {
        self.release();
    }

    fn drop_if_idle(&self) {
        self.session.update(|s| {
            if s.as_ref().is_some_and(|x| x.state() == CheckoutState::Idle) {
                *s = None;
            }
        });
    }

    fn has_open_popup(&self) -> bool {
        self.popup
            .borrow()
            .as_ref()
            .is_some_and(|p| !p.closed().unwrap_or(true))
    }

    /// Stops the monitor, then closes and forgets the owned popup.
    fn release(&self) {
        self.monitor.borrow_mut().take();
        if let Some(popup) = self.popup.borrow_mut().take() {
            if !popup.closed().unwrap_or(true) {
                let _ = popup.close();
            }
        }
    }

    /// Executes what the session asked for after an operation.
    fn apply(&self, directive: WindowDirective) {
        match directive {
            WindowDirective::Open(url) => {
                // The old context, if any, is replaced.
                self.release();
                let popup = self.open_popup(&url);
                let monitorable = popup.is_some();
                *self.popup.borrow_mut() = popup;
                if monitorable {
                    self.start_monitoring();
                }
            }
            WindowDirective::Navigate(url) => self.navigate_popup(&url),
            WindowDirective::None => {}
        }
    }

    /// Opens the sized checkout popup; a blocked popup falls back to a
    /// plain new tab. Returns the handle only when it can be polled.
    fn open_popup(&self, url: &str) -> Option<web_sys::Window> {
        let window = window()?;

        let popup = window
            .open_with_url_and_target_and_features(
                &encode_popup_url(url),
                POPUP_WINDOW_NAME,
                &popup_features(&window),
            )
            .ok()
            .flatten();

        match popup {
            Some(popup) if !popup.closed().unwrap_or(true) => Some(popup),
            _ => {
                log::debug!("checkout: popup blocked, falling back to a plain tab");
                let _ = window.open_with_url_and_target(url, "_blank");
                None
            }
        }
    }

    /// Navigates the open context in place; refusal falls back to a plain
    /// new tab so the walk keeps going.
    fn navigate_popup(&self, url: &str) {
        let navigated = self
            .popup
            .borrow()
            .as_ref()
            .is_some_and(|popup| popup.location().set_href(url).is_ok());
        if !navigated {
            log::debug!("checkout: in-place navigation refused, opening a tab");
            if let Some(window) = window() {
                let _ = window.open_with_url_and_target(url, "_blank");
            }
        }
    }

    /// Starts the close poll for the popup just opened. The previous
    /// monitor, if any, is cancelled first — at most one interval is ever
    /// alive.
    fn start_monitoring(&self) {
        let session = self.session;
        let popup = Rc::clone(&self.popup);
        let monitor = Rc::clone(&self.monitor);

        let interval = Interval::new(MONITOR_INTERVAL_MS, move || {
            let closed = popup
                .borrow()
                .as_ref()
                .map_or(true, |p| p.closed().unwrap_or(true));
            if !closed {
                return;
            }

            popup.borrow_mut().take();
            session.update(|s| {
                if let Some(session) = s {
                    session.window_closed();
                }
            });

            // Dropping the Interval from inside its own callback would drop
            // the running closure; defer the cancel past this tick.
            let monitor = Rc::clone(&monitor);
            spawn_local(async move {
                monitor.borrow_mut().take();
            });
        });

        *self.monitor.borrow_mut() = Some(interval);
    }
}

/// Catalog URLs are already URL-formed; only stray spaces need escaping
/// before they reach `window.open`.
fn encode_popup_url(url: &str) -> String {
    url.replace(' ', "%20")
}

/// Popup features string: ~55% of the screen wide, full height, anchored
/// top-left.
fn popup_features(window: &web_sys::Window) -> String {
    let (width, height) = window
        .screen()
        .ok()
        .and_then(|screen| Some((screen.width().ok()?, screen.height().ok()?)))
        .unwrap_or((1280, 960));
    let popup_width = (f64::from(width) * POPUP_WIDTH_RATIO).floor() as i32;
    format!("width={popup_width},height={height},left=0,top=0,scrollbars=yes,resizable=yes")
}

/// Hook to use the checkout controller.
pub fn use_checkout() -> CheckoutController {
    use_context::<CheckoutController>()
        .expect("CheckoutController not found. Provide it at the app root.")
}
