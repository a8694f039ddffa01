//! A mounted page: one resolver, one system subscription, re-rendered on change.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use crate::content::Portfolio;
use crate::render::{RenderError, Renderer};
use crate::store::PreferenceStore;
use crate::theme::{ColorMode, Subscription, SystemTheme, ThemeResolver};

/// Owns the theme state of a rendered page for as long as the page lives.
///
/// Mounting subscribes the resolver to system color-scheme notifications
/// once; dropping the document releases the subscription on every exit
/// path, including unwinding.
///
/// # Example
///
/// ```rust
/// use folio::{Document, ManualSystemTheme, MemoryStore, ThemeResolver};
///
/// let os = ManualSystemTheme::new(false);
/// let resolver = ThemeResolver::initialize(MemoryStore::new(), &os);
/// {
///     let mut page = Document::mount(resolver, &os);
///     assert!(page.take_dirty());
///     os.set_dark(true);
///     assert!(page.is_dark());
///     assert!(page.take_dirty());
/// }
/// assert_eq!(os.listener_count(), 0);
/// ```
pub struct Document<S: PreferenceStore + 'static> {
    resolver: ThemeResolver<S>,
    dirty: Rc<Cell<bool>>,
    subscription: Option<Subscription>,
}

impl<S: PreferenceStore + 'static> Document<S> {
    /// Mounts the page. It starts dirty so the first frame gets drawn.
    pub fn mount(resolver: ThemeResolver<S>, system: &dyn SystemTheme) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::downgrade(&dirty);
        resolver.on_change(move |_| {
            if let Some(flag) = flag.upgrade() {
                flag.set(true);
            }
        });
        let subscription = resolver.attach(system);
        debug!(subscribed = subscription.is_some(), "document mounted");
        Self {
            resolver,
            dirty,
            subscription,
        }
    }

    pub fn resolver(&self) -> &ThemeResolver<S> {
        &self.resolver
    }

    pub fn is_dark(&self) -> bool {
        self.resolver.is_dark()
    }

    pub fn mode(&self) -> ColorMode {
        self.resolver.mode()
    }

    /// Whether system notifications reach this document.
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// The user's toggle control. Returns the new `is_dark`.
    pub fn toggle(&mut self) -> bool {
        self.resolver.toggle_user()
    }

    /// Returns whether the theme changed since the last call or render.
    pub fn take_dirty(&mut self) -> bool {
        self.dirty.replace(false)
    }

    /// Renders the page in the current mode and clears the dirty flag.
    pub fn render(&mut self, renderer: &Renderer, portfolio: &Portfolio) -> Result<String, RenderError> {
        self.dirty.set(false);
        renderer.render_portfolio(portfolio, self.resolver.preference())
    }
}

impl<S: PreferenceStore + 'static> Drop for Document<S> {
    fn drop(&mut self) {
        // Release before the resolver handle goes away.
        self.subscription.take();
        debug!("document torn down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputMode;
    use crate::store::MemoryStore;
    use crate::theme::{AdaptiveTheme, ManualSystemTheme};
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn mounted(os: &ManualSystemTheme) -> Document<MemoryStore> {
        Document::mount(ThemeResolver::initialize(MemoryStore::new(), os), os)
    }

    #[test]
    fn test_mount_subscribes_once() {
        let os = ManualSystemTheme::new(false);
        let page = mounted(&os);
        assert!(page.is_subscribed());
        assert_eq!(os.listener_count(), 1);
        drop(page);
        assert_eq!(os.listener_count(), 0);
    }

    #[test]
    fn test_subscription_released_on_panic() {
        let os = ManualSystemTheme::new(false);
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _page = mounted(&os);
            panic!("render blew up");
        }));
        assert!(result.is_err());
        assert_eq!(os.listener_count(), 0);
    }

    #[test]
    fn test_dirty_tracks_changes() {
        let os = ManualSystemTheme::new(false);
        let mut page = mounted(&os);
        let renderer = Renderer::new(AdaptiveTheme::portfolio(), OutputMode::Text).unwrap();
        let portfolio = Portfolio::builtin().unwrap();

        let first = page.render(&renderer, &portfolio).unwrap();
        assert!(first.contains("☾ dark"));
        assert!(!page.take_dirty());

        os.set_dark(true);
        assert!(page.take_dirty());
        assert!(page.render(&renderer, &portfolio).unwrap().contains("☀ light"));

        page.toggle();
        assert!(page.take_dirty());
        assert!(!page.is_dark());

        // User choice now wins; the system change is not a re-render.
        os.set_dark(false);
        os.set_dark(true);
        assert!(!page.take_dirty());
        assert_eq!(page.mode(), ColorMode::Light);
    }

    #[test]
    fn test_unavailable_system_still_mounts() {
        let os = ManualSystemTheme::unavailable();
        let page = mounted(&os);
        assert!(!page.is_subscribed());
        assert!(!page.is_dark());
    }
}
