//! Theme preference resolution and persistence.
//!
//! A [`ThemeResolver`] owns the single `is_dark` flag for a document. It
//! starts from the saved preference if there is one and from the operating
//! system otherwise. An explicit toggle is saved and from then on wins over
//! every system notification, until the saved entry is removed.
//!
//! # Example
//!
//! ```rust
//! use folio::{ManualSystemTheme, MemoryStore, PreferenceStore, ThemeResolver, DARK_MODE_KEY};
//! use std::rc::Rc;
//!
//! let store = Rc::new(MemoryStore::new());
//! let os = ManualSystemTheme::new(true);
//!
//! let resolver = ThemeResolver::initialize(Rc::clone(&store), &os);
//! assert!(resolver.is_dark());
//!
//! let _sub = resolver.attach(&os);
//! assert!(!resolver.toggle_user());
//! assert_eq!(store.get(DARK_MODE_KEY).unwrap().as_deref(), Some("false"));
//!
//! os.set_dark(false);
//! os.set_dark(true);
//! assert!(!resolver.is_dark());
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, warn};

use super::adaptive::ColorMode;
use super::system::{Subscription, SystemTheme};
use crate::store::{PreferenceStore, DARK_MODE_KEY};

/// Where the active value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceSource {
    /// Chosen explicitly; system notifications are ignored.
    UserSet,
    /// Follows the operating system.
    SystemDefault,
}

/// The one active theme value for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ThemePreference {
    pub is_dark: bool,
    pub source: PreferenceSource,
}

impl ThemePreference {
    pub fn mode(&self) -> ColorMode {
        ColorMode::from_is_dark(self.is_dark)
    }
}

/// What the store holds under [`DARK_MODE_KEY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stored {
    Present(bool),
    Absent,
    Unreadable,
}

type ChangeObserver = Rc<dyn Fn(ThemePreference)>;

struct Shared<S> {
    store: S,
    current: Cell<ThemePreference>,
    // Set while the last write failed and the user choice lives only in memory.
    unsaved: Cell<bool>,
    observers: RefCell<Vec<ChangeObserver>>,
}

/// Computes and maintains `is_dark` for one document.
///
/// Cloning gives another handle to the same state.
pub struct ThemeResolver<S: PreferenceStore> {
    shared: Rc<Shared<S>>,
}

impl<S: PreferenceStore> Clone for ThemeResolver<S> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<S: PreferenceStore> ThemeResolver<S> {
    /// Resolves the initial value.
    ///
    /// A valid saved preference is used as is. Otherwise the system is asked,
    /// and a system that cannot answer means light mode.
    pub fn initialize(store: S, system: &dyn SystemTheme) -> Self {
        let current = match read_stored(&store) {
            Stored::Present(is_dark) => ThemePreference {
                is_dark,
                source: PreferenceSource::UserSet,
            },
            Stored::Absent | Stored::Unreadable => ThemePreference {
                is_dark: system_prefers_dark(system),
                source: PreferenceSource::SystemDefault,
            },
        };
        debug!(is_dark = current.is_dark, source = ?current.source, "theme initialized");

        Self {
            shared: Rc::new(Shared {
                store,
                current: Cell::new(current),
                unsaved: Cell::new(false),
                observers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.shared.current.get()
    }

    pub fn is_dark(&self) -> bool {
        self.preference().is_dark
    }

    pub fn mode(&self) -> ColorMode {
        self.preference().mode()
    }

    pub fn store(&self) -> &S {
        &self.shared.store
    }

    /// Handles a system color-scheme notification.
    ///
    /// Applied only while the store holds no preference. Returns whether the
    /// notification was applied.
    pub fn on_system_theme_change(&self, new_is_dark: bool) -> bool {
        let user_set = match read_stored(&self.shared.store) {
            Stored::Present(_) => true,
            Stored::Absent => self.shared.unsaved.get(),
            Stored::Unreadable => self.preference().source == PreferenceSource::UserSet,
        };
        if user_set {
            debug!(is_dark = new_is_dark, "system theme change ignored, user preference set");
            return false;
        }
        self.apply(ThemePreference {
            is_dark: new_is_dark,
            source: PreferenceSource::SystemDefault,
        });
        true
    }

    /// Flips the theme and saves it as the user's choice. Returns the new value.
    pub fn toggle_user(&self) -> bool {
        let is_dark = !self.is_dark();
        self.persist(is_dark);
        self.apply(ThemePreference {
            is_dark,
            source: PreferenceSource::UserSet,
        });
        is_dark
    }

    /// Writes `is_dark` to the store, replacing any saved value.
    ///
    /// A failed write is logged; the resolver keeps working from memory.
    pub fn persist(&self, is_dark: bool) {
        let value = match serde_json::to_string(&is_dark) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "could not encode theme preference");
                self.shared.unsaved.set(true);
                return;
            }
        };
        match self.shared.store.set(DARK_MODE_KEY, &value) {
            Ok(()) => self.shared.unsaved.set(false),
            Err(e) => {
                warn!(error = %e, "could not save theme preference, keeping it in memory");
                self.shared.unsaved.set(true);
            }
        }
    }

    /// Drops the saved choice and goes back to following the system.
    pub fn forget_user_choice(&self, system: &dyn SystemTheme) {
        if let Err(e) = self.shared.store.remove(DARK_MODE_KEY) {
            warn!(error = %e, "could not clear saved theme preference");
        }
        self.shared.unsaved.set(false);
        self.apply(ThemePreference {
            is_dark: system_prefers_dark(system),
            source: PreferenceSource::SystemDefault,
        });
    }

    /// Registers a callback run whenever `is_dark` changes value.
    pub fn on_change(&self, observer: impl Fn(ThemePreference) + 'static) {
        self.shared.observers.borrow_mut().push(Rc::new(observer));
    }

    fn apply(&self, next: ThemePreference) {
        let previous = self.shared.current.replace(next);
        if previous.is_dark == next.is_dark {
            return;
        }
        debug!(is_dark = next.is_dark, source = ?next.source, "theme changed");
        let observers: Vec<ChangeObserver> = self.shared.observers.borrow().clone();
        for observer in observers {
            observer(next);
        }
    }
}

impl<S: PreferenceStore + 'static> ThemeResolver<S> {
    /// Subscribes this resolver to `system` change notifications.
    ///
    /// The listener holds only a weak handle, so it never keeps the resolver
    /// alive. Returns `None` when the system sends no notifications.
    pub fn attach(&self, system: &dyn SystemTheme) -> Option<Subscription> {
        let weak = Rc::downgrade(&self.shared);
        let subscription = system.subscribe(Box::new(move |is_dark: bool| {
            if let Some(shared) = weak.upgrade() {
                ThemeResolver { shared }.on_system_theme_change(is_dark);
            }
        }));
        if subscription.is_none() {
            warn!("system color scheme notifications unavailable");
        }
        subscription
    }
}

impl<S: PreferenceStore> std::fmt::Debug for ThemeResolver<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeResolver")
            .field("preference", &self.preference())
            .field("unsaved", &self.shared.unsaved.get())
            .finish()
    }
}

fn read_stored<S: PreferenceStore>(store: &S) -> Stored {
    match store.get(DARK_MODE_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<bool>(&raw) {
            Ok(is_dark) => Stored::Present(is_dark),
            Err(e) => {
                warn!(value = %raw, error = %e, "ignoring malformed saved theme preference");
                Stored::Absent
            }
        },
        Ok(None) => Stored::Absent,
        Err(e) => {
            warn!(error = %e, "could not read saved theme preference");
            Stored::Unreadable
        }
    }
}

fn system_prefers_dark(system: &dyn SystemTheme) -> bool {
    system.query().unwrap_or_else(|| {
        warn!("system color scheme unavailable, defaulting to light");
        false
    })
}
