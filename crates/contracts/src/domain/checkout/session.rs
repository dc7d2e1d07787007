use crate::domain::cart::CartLine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where the guided checkout walk currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutState {
    /// No walk in progress.
    Idle,
    /// The confirmation dialog is up; nothing has opened yet.
    ConfirmingStart,
    /// The external page for `items[index]` is (or should be) open.
    InProgress { index: usize },
    /// The user closed the external page for `items[index]` early and is
    /// being asked whether to retry.
    AwaitingRetry { index: usize },
}

/// What the browser driver should do with the external checkout window
/// after a session operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowDirective {
    /// Open a fresh browsing context on this URL.
    Open(String),
    /// Reuse the still-open context and navigate it in place.
    Navigate(String),
    /// Nothing to open — the item has no purchase link, or the operation
    /// was rejected.
    None,
}

/// One guided walk through the external marketplace, one cart line at a
/// time.
///
/// The session owns the cursor and an item snapshot taken at start; later
/// cart edits do not affect a running walk. The popup window handle and the
/// close-detection timer belong to the UI driver, which executes the
/// returned [`WindowDirective`]s and feeds
/// [`window_closed`](CheckoutSession::window_closed) back in when the user
/// abandons the external page.
///
/// Invalid transitions are rejected as no-ops, never panics: the cursor
/// only exists in `InProgress`/`AwaitingRetry`, never exceeds the last item
/// and only moves backwards by going through `Idle`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: Uuid,
    #[serde(rename = "startedAt")]
    pub started_at: DateTime<Utc>,
    items: Vec<CartLine>,
    state: CheckoutState,
}

impl CheckoutSession {
    /// Snapshots the cart and asks the user to confirm before any window
    /// opens.
    pub fn start(items: Vec<CartLine>) -> Result<Self, String> {
        if items.is_empty() {
            return Err("Корзина пуста: нечего оформлять".into());
        }
        Ok(Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            items,
            state: CheckoutState::ConfirmingStart,
        })
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            CheckoutState::InProgress { index } | CheckoutState::AwaitingRetry { index } => {
                Some(index)
            }
            _ => None,
        }
    }

    pub fn current_item(&self) -> Option<&CartLine> {
        self.current_index().and_then(|i| self.items.get(i))
    }

    /// True when the cursor sits on the last item, where the UI offers
    /// "finish" instead of "next".
    pub fn is_last(&self) -> bool {
        self.current_index()
            .is_some_and(|i| i + 1 >= self.items.len())
    }

    fn url_at(&self, index: usize) -> Option<String> {
        self.items
            .get(index)
            .and_then(|line| line.product.purchase_url())
            .map(str::to_string)
    }

    /// Backs out of the confirmation dialog without opening anything.
    pub fn cancel_start(&mut self) -> bool {
        if self.state == CheckoutState::ConfirmingStart {
            self.state = CheckoutState::Idle;
            true
        } else {
            false
        }
    }

    /// Confirms the walk and moves onto the first item.
    ///
    /// A first item without a purchase link still enters `InProgress(0)`;
    /// there is simply no window to open for that slot.
    pub fn confirm_start(&mut self) -> WindowDirective {
        if self.state != CheckoutState::ConfirmingStart {
            return WindowDirective::None;
        }
        self.state = CheckoutState::InProgress { index: 0 };
        match self.url_at(0) {
            Some(url) => WindowDirective::Open(url),
            None => WindowDirective::None,
        }
    }

    /// Moves the cursor to the next item.
    ///
    /// The cursor advances whether or not a window can be opened for the
    /// new item; past the last item the call is a no-op. `window_open`
    /// tells the session whether the driver still holds a live context that
    /// can be navigated in place instead of opening a fresh one.
    pub fn advance(&mut self, window_open: bool) -> WindowDirective {
        let CheckoutState::InProgress { index } = self.state else {
            return WindowDirective::None;
        };
        let next = index + 1;
        if next >= self.items.len() {
            return WindowDirective::None;
        }
        self.state = CheckoutState::InProgress { index: next };
        match self.url_at(next) {
            Some(url) if window_open => WindowDirective::Navigate(url),
            Some(url) => WindowDirective::Open(url),
            None => WindowDirective::None,
        }
    }

    /// Driver callback: the monitored window was closed before the user
    /// advanced or finished.
    pub fn window_closed(&mut self) -> bool {
        if let CheckoutState::InProgress { index } = self.state {
            self.state = CheckoutState::AwaitingRetry { index };
            true
        } else {
            false
        }
    }

    /// Reopens the current item after a premature close.
    pub fn retry(&mut self) -> WindowDirective {
        let CheckoutState::AwaitingRetry { index } = self.state else {
            return WindowDirective::None;
        };
        self.state = CheckoutState::InProgress { index };
        match self.url_at(index) {
            Some(url) => WindowDirective::Open(url),
            None => WindowDirective::None,
        }
    }

    /// Declines the retry prompt; same exit as [`finish`](Self::finish).
    pub fn cancel_retry(&mut self) -> bool {
        if matches!(self.state, CheckoutState::AwaitingRetry { .. }) {
            self.state = CheckoutState::Idle;
            true
        } else {
            false
        }
    }

    /// Ends the walk. The driver releases the window and the monitor when
    /// it sees the session go idle.
    pub fn finish(&mut self) -> bool {
        match self.state {
            CheckoutState::InProgress { .. } | CheckoutState::AwaitingRetry { .. } => {
                self.state = CheckoutState::Idle;
                true
            }
            CheckoutState::Idle | CheckoutState::ConfirmingStart => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::Product;

    fn line(id: &str, url: &str) -> CartLine {
        CartLine {
            product: Product {
                id: id.into(),
                name: format!("Product {id}"),
                category: "Sofa".into(),
                image_url: String::new(),
                description: String::new(),
                price: "Rp1.000.000".into(),
                url: url.into(),
            },
            quantity: 1,
        }
    }

    fn three_items() -> Vec<CartLine> {
        vec![
            line("product-1", "https://shop/1"),
            line("product-2", "https://shop/2"),
            line("product-3", "https://shop/3"),
        ]
    }

    #[test]
    fn start_requires_items() {
        assert!(CheckoutSession::start(Vec::new()).is_err());

        let session = CheckoutSession::start(three_items()).unwrap();
        assert_eq!(session.state(), CheckoutState::ConfirmingStart);
        assert_eq!(session.current_index(), None);
    }

    #[test]
    fn confirm_opens_the_first_item() {
        let mut session = CheckoutSession::start(three_items()).unwrap();
        let directive = session.confirm_start();

        assert_eq!(session.state(), CheckoutState::InProgress { index: 0 });
        assert_eq!(directive, WindowDirective::Open("https://shop/1".into()));
    }

    #[test]
    fn confirm_with_blank_first_url_still_enters_in_progress() {
        let mut session =
            CheckoutSession::start(vec![line("product-1", "  "), line("product-2", "u")]).unwrap();
        let directive = session.confirm_start();

        assert_eq!(directive, WindowDirective::None);
        assert_eq!(session.state(), CheckoutState::InProgress { index: 0 });
    }

    #[test]
    fn advance_walks_to_the_last_item_then_stops() {
        let mut session = CheckoutSession::start(three_items()).unwrap();
        session.confirm_start();

        assert_eq!(
            session.advance(true),
            WindowDirective::Navigate("https://shop/2".into())
        );
        assert_eq!(
            session.advance(false),
            WindowDirective::Open("https://shop/3".into())
        );
        assert_eq!(session.state(), CheckoutState::InProgress { index: 2 });
        assert!(session.is_last());

        // Past the last item: cursor stays put.
        assert_eq!(session.advance(true), WindowDirective::None);
        assert_eq!(session.state(), CheckoutState::InProgress { index: 2 });
    }

    #[test]
    fn advance_over_blank_url_still_moves_the_cursor() {
        let mut session = CheckoutSession::start(vec![
            line("product-1", "https://shop/1"),
            line("product-2", ""),
            line("product-3", "https://shop/3"),
        ])
        .unwrap();
        session.confirm_start();

        assert_eq!(session.advance(true), WindowDirective::None);
        assert_eq!(session.state(), CheckoutState::InProgress { index: 1 });

        assert_eq!(
            session.advance(true),
            WindowDirective::Navigate("https://shop/3".into())
        );
    }

    #[test]
    fn premature_close_prompts_retry() {
        let mut session = CheckoutSession::start(three_items()).unwrap();
        session.confirm_start();
        session.advance(true);

        assert!(session.window_closed());
        assert_eq!(session.state(), CheckoutState::AwaitingRetry { index: 1 });

        // Retry reopens the same item.
        assert_eq!(
            session.retry(),
            WindowDirective::Open("https://shop/2".into())
        );
        assert_eq!(session.state(), CheckoutState::InProgress { index: 1 });
    }

    #[test]
    fn cancel_retry_goes_idle() {
        let mut session = CheckoutSession::start(three_items()).unwrap();
        session.confirm_start();
        session.window_closed();

        assert!(session.cancel_retry());
        assert_eq!(session.state(), CheckoutState::Idle);
        assert_eq!(session.current_index(), None);
    }

    #[test]
    fn finish_works_from_in_progress_and_awaiting_retry() {
        let mut session = CheckoutSession::start(three_items()).unwrap();
        session.confirm_start();
        assert!(session.finish());
        assert_eq!(session.state(), CheckoutState::Idle);

        let mut session = CheckoutSession::start(three_items()).unwrap();
        session.confirm_start();
        session.window_closed();
        assert!(session.finish());
        assert_eq!(session.state(), CheckoutState::Idle);
    }

    #[test]
    fn invalid_transitions_are_rejected() {
        let mut session = CheckoutSession::start(three_items()).unwrap();

        // Nothing but confirm/cancel is valid while confirming.
        assert_eq!(session.advance(true), WindowDirective::None);
        assert!(!session.window_closed());
        assert_eq!(session.retry(), WindowDirective::None);
        assert!(!session.cancel_retry());
        assert!(!session.finish());
        assert_eq!(session.state(), CheckoutState::ConfirmingStart);

        assert!(session.cancel_start());
        assert_eq!(session.state(), CheckoutState::Idle);

        // And nothing at all is valid once idle.
        assert_eq!(session.confirm_start(), WindowDirective::None);
        assert!(!session.window_closed());
        assert!(!session.finish());
        assert!(!session.cancel_start());
    }

    #[test]
    fn session_snapshot_is_isolated_from_later_cart_edits() {
        let items = three_items();
        let session = CheckoutSession::start(items.clone()).unwrap();

        let mut cart_after = items;
        cart_after.pop();

        assert_eq!(session.items().len(), 3);
    }
}
