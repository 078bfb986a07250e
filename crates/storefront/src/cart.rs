//! The authoritative in-memory cart store.
//!
//! The store owns the ordered list of line items and the drawer visibility
//! flag. Count and subtotal are always recomputed from the lines, never
//! cached. Every mutation builds a fresh line collection and swaps it in
//! behind an `Arc`, so snapshots handed to consumers are never mutated
//! underneath them.
//!
//! Line identity is the `(product_id, size)` pair: adding the same pair
//! twice merges into one line with an incremented quantity. The first
//! insertion fixes the line's price, name, and image; later adds for the
//! same pair leave them untouched even if the caller passes different
//! values. That matches the shipped behavior, stale prices included.

use std::sync::Arc;

use tracing::debug;

use dark_cat_core::{BilingualText, CurrencyCode, LineKey, Price, ProductId, Size};

use crate::observer::{Observers, SubscriptionId};

/// Caller-supplied data for a new cart line, without a quantity.
///
/// Candidates originate from the catalog or from the customization flow;
/// the store accepts synthetic product IDs without validation.
#[derive(Debug, Clone)]
pub struct LineCandidate {
    pub product_id: ProductId,
    pub name: BilingualText,
    pub unit_price: Price,
    pub image: String,
    pub size: Size,
}

/// One product+size combination in the cart, with its own quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: BilingualText,
    pub unit_price: Price,
    pub image: String,
    pub size: Size,
    pub quantity: u32,
}

impl CartLine {
    /// The identity key of this line.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey::new(self.product_id.clone(), self.size.clone())
    }

    /// Price of this line at its current quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }

    fn matches(&self, product_id: &ProductId, size: &Size) -> bool {
        self.product_id == *product_id && self.size == *size
    }
}

impl From<LineCandidate> for CartLine {
    fn from(candidate: LineCandidate) -> Self {
        Self {
            product_id: candidate.product_id,
            name: candidate.name,
            unit_price: candidate.unit_price,
            image: candidate.image,
            size: candidate.size,
            quantity: 1,
        }
    }
}

/// An immutable view of the cart handed to observers after each command.
#[derive(Debug, Clone)]
pub struct CartSnapshot {
    pub lines: Arc<Vec<CartLine>>,
    pub count: u32,
    pub total: Price,
    pub is_open: bool,
}

/// The in-memory cart store.
///
/// Constructed once per session by [`crate::state::AppState`] and shared
/// by reference; all commands are synchronous and cannot fail. Unknown
/// identity keys are no-ops, never errors.
pub struct CartStore {
    lines: Arc<Vec<CartLine>>,
    is_open: bool,
    observers: Observers<CartSnapshot>,
}

impl CartStore {
    /// Create an empty, closed cart.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Vec::new()),
            is_open: false,
            observers: Observers::new(),
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Snapshot of the current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> Arc<Vec<CartLine>> {
        Arc::clone(&self.lines)
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Subtotal across all lines.
    ///
    /// The cart is single-currency: every candidate arrives priced in the
    /// store's native currency, so all lines share one currency code. An
    /// empty cart reports zero in that currency.
    #[must_use]
    pub fn total(&self) -> Price {
        let currency = self
            .lines
            .first()
            .map_or_else(CurrencyCode::default, |line| line.unit_price.currency_code);
        debug_assert!(
            self.lines
                .iter()
                .all(|line| line.unit_price.currency_code == currency),
            "cart lines must share one currency"
        );
        self.lines
            .iter()
            .fold(Price::zero(currency), |acc, line| {
                Price::new(acc.amount + line.line_total().amount, currency)
            })
    }

    /// Whether the cart drawer is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// An immutable view of the full cart state.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines(),
            count: self.count(),
            total: self.total(),
            is_open: self.is_open,
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Add one unit of a product+size to the cart.
    ///
    /// Merges into an existing line when the `(product_id, size)` key
    /// matches; the existing line keeps its original price, name, and
    /// image. Opens the cart drawer as an intentional side effect.
    pub fn add_line(&mut self, candidate: LineCandidate) {
        let key = LineKey::new(candidate.product_id.clone(), candidate.size.clone());
        let mut next: Vec<CartLine> = self.lines.as_ref().clone();

        if let Some(line) = next
            .iter_mut()
            .find(|line| line.matches(&candidate.product_id, &candidate.size))
        {
            line.quantity = line.quantity.saturating_add(1);
            debug!(key = %key, quantity = line.quantity, "merged into existing cart line");
        } else {
            next.push(CartLine::from(candidate));
            debug!(key = %key, "appended new cart line");
        }

        self.lines = Arc::new(next);
        self.is_open = true;
        self.notify();
    }

    /// Remove the line matching the identity key. No-op when absent.
    pub fn remove_line(&mut self, product_id: &ProductId, size: &Size) {
        if !self.lines.iter().any(|line| line.matches(product_id, size)) {
            return;
        }

        let next: Vec<CartLine> = self
            .lines
            .iter()
            .filter(|line| !line.matches(product_id, size))
            .cloned()
            .collect();
        self.lines = Arc::new(next);
        debug!(product_id = %product_id, size = %size, "removed cart line");
        self.notify();
    }

    /// Set the quantity of the line matching the identity key.
    ///
    /// A quantity of zero or less behaves exactly like
    /// [`remove_line`](Self::remove_line). There is no upper bound;
    /// values beyond the line counter's range saturate. No-op when the
    /// line is absent.
    pub fn set_quantity(&mut self, product_id: &ProductId, size: &Size, quantity: i64) {
        if quantity <= 0 {
            self.remove_line(product_id, size);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        if !self.lines.iter().any(|line| line.matches(product_id, size)) {
            return;
        }

        let next: Vec<CartLine> = self
            .lines
            .iter()
            .map(|line| {
                if line.matches(product_id, size) {
                    let mut updated = line.clone();
                    updated.quantity = quantity;
                    updated
                } else {
                    line.clone()
                }
            })
            .collect();
        self.lines = Arc::new(next);
        debug!(product_id = %product_id, size = %size, quantity, "updated cart line quantity");
        self.notify();
    }

    /// Empty the cart. Leaves the drawer visibility untouched.
    pub fn clear(&mut self) {
        self.lines = Arc::new(Vec::new());
        debug!("cleared cart");
        self.notify();
    }

    /// Open the cart drawer.
    pub fn open(&mut self) {
        self.is_open = true;
        self.notify();
    }

    /// Close the cart drawer.
    pub fn close(&mut self) {
        self.is_open = false;
        self.notify();
    }

    /// Flip the cart drawer visibility.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
        self.notify();
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Register an observer called with a snapshot after every command.
    pub fn subscribe(&mut self, observer: impl Fn(&CartSnapshot) + 'static) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    /// Remove a previously registered observer.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn notify(&self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        self.observers.notify(&snapshot);
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CartStore")
            .field("lines", &self.lines)
            .field("is_open", &self.is_open)
            .field("observers", &self.observers)
            .finish()
    }
}
