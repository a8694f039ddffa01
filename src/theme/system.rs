//! Operating-system color-scheme sources.
//!
//! A [`SystemTheme`] can be queried for the current preference and
//! subscribed to for changes. Subscriptions are [`Subscription`] guards: the
//! listener stays registered exactly as long as the guard is alive.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

/// Callback receiving the new `is_dark` value.
pub type ThemeListener = Box<dyn Fn(bool)>;

/// The platform's light/dark signal.
pub trait SystemTheme {
    /// Current preference, or `None` when the platform cannot report one.
    fn query(&self) -> Option<bool>;

    /// Registers `listener` for change notifications.
    ///
    /// Returns `None` when the platform has no change notifications.
    fn subscribe(&self, listener: ThemeListener) -> Option<Subscription>;
}

/// Keeps a listener registered until dropped.
#[must_use = "dropping a Subscription unregisters its listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Unregisters the listener now.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

#[derive(Default)]
struct Slots {
    next_id: u64,
    listeners: Vec<(u64, Rc<dyn Fn(bool)>)>,
}

/// Listener bookkeeping shared by the sources below.
#[derive(Clone, Default)]
struct ListenerSet {
    slots: Rc<RefCell<Slots>>,
}

impl ListenerSet {
    fn add(&self, listener: ThemeListener) -> Subscription {
        let id = {
            let mut slots = self.slots.borrow_mut();
            let id = slots.next_id;
            slots.next_id += 1;
            slots.listeners.push((id, Rc::from(listener)));
            id
        };
        let slots: Weak<RefCell<Slots>> = Rc::downgrade(&self.slots);
        Subscription::new(move || {
            if let Some(slots) = slots.upgrade() {
                slots.borrow_mut().listeners.retain(|(slot, _)| *slot != id);
            }
        })
    }

    fn notify(&self, is_dark: bool) {
        // Listeners may subscribe or unsubscribe while being notified.
        let snapshot: Vec<Rc<dyn Fn(bool)>> = self
            .slots
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(is_dark);
        }
    }

    fn len(&self) -> usize {
        self.slots.borrow().listeners.len()
    }
}

/// A source driven by hand.
///
/// Used by tests and demos to play the part of the operating system.
///
/// ```rust
/// use folio::{ManualSystemTheme, SystemTheme};
///
/// let os = ManualSystemTheme::new(false);
/// let _sub = os.subscribe(Box::new(|is_dark: bool| assert!(is_dark)));
/// os.set_dark(true);
/// ```
#[derive(Clone)]
pub struct ManualSystemTheme {
    current: Rc<Cell<Option<bool>>>,
    listeners: ListenerSet,
    supports_changes: bool,
}

impl ManualSystemTheme {
    pub fn new(is_dark: bool) -> Self {
        Self {
            current: Rc::new(Cell::new(Some(is_dark))),
            listeners: ListenerSet::default(),
            supports_changes: true,
        }
    }

    /// A platform that reports nothing and sends no notifications.
    pub fn unavailable() -> Self {
        Self {
            current: Rc::new(Cell::new(None)),
            listeners: ListenerSet::default(),
            supports_changes: false,
        }
    }

    /// Changes the preference, notifying listeners if it differs.
    pub fn set_dark(&self, is_dark: bool) {
        if self.current.replace(Some(is_dark)) != Some(is_dark) {
            self.listeners.notify(is_dark);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl SystemTheme for ManualSystemTheme {
    fn query(&self) -> Option<bool> {
        self.current.get()
    }

    fn subscribe(&self, listener: ThemeListener) -> Option<Subscription> {
        self.supports_changes.then(|| self.listeners.add(listener))
    }
}

/// The desktop's color-scheme setting, read with `dark-light`.
///
/// Detection is a one-shot query, so changes are found by calling
/// [`poll`](Self::poll) from the owner's event loop.
pub struct OsSystemTheme {
    detect: fn() -> bool,
    last: Cell<Option<bool>>,
    listeners: ListenerSet,
}

impl OsSystemTheme {
    pub fn new() -> Self {
        Self::with_detector(os_prefers_dark)
    }

    /// Uses `detect` in place of the desktop query.
    pub fn with_detector(detect: fn() -> bool) -> Self {
        Self {
            detect,
            last: Cell::new(None),
            listeners: ListenerSet::default(),
        }
    }

    /// Queries the desktop and notifies listeners if the preference moved.
    ///
    /// Returns whether a change was seen. The first call only records the
    /// current value.
    pub fn poll(&self) -> bool {
        let now = (self.detect)();
        match self.last.replace(Some(now)) {
            Some(previous) if previous != now => {
                tracing::debug!(is_dark = now, "system color scheme changed");
                self.listeners.notify(now);
                true
            }
            _ => false,
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for OsSystemTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemTheme for OsSystemTheme {
    fn query(&self) -> Option<bool> {
        let now = (self.detect)();
        self.last.set(Some(now));
        Some(now)
    }

    fn subscribe(&self, listener: ThemeListener) -> Option<Subscription> {
        Some(self.listeners.add(listener))
    }
}

fn os_prefers_dark() -> bool {
    match detect_os_theme() {
        OsThemeMode::Dark => true,
        OsThemeMode::Light => false,
    }
}
