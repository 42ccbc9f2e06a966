//! Mutable per-connection session state
//!
//! The session mirrors server-side state that commands implicitly read and
//! mutate: the selected group, the current-article pointer, the advertised
//! capability set, and posting permission. Only the command dispatcher
//! writes to it, and every write goes through the methods here so the
//! invariant "a current article exists only while a group is selected"
//! holds after every operation.

use crate::capabilities::Capabilities;

/// Scope of local state invalidated by a failure response.
///
/// Each dispatcher match arm maps a response code to one of these instead
/// of writing fields directly, which keeps the invalidation rules in one
/// auditable place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Invalidate {
    /// The numeric pointer no longer applies (no such article, no
    /// next/previous article, invalid current article)
    Article,
    /// No group is selected server-side; both fields are dropped together
    GroupAndArticle,
}

/// Navigation and negotiation state for one logical connection
#[derive(Debug, Default)]
pub struct Session {
    capabilities: Option<Capabilities>,
    mode_reader_issued: bool,
    can_post: bool,
    current_group: Option<String>,
    current_article: Option<u64>,
}

impl Session {
    pub(crate) fn new() -> Self {
        Session {
            // Optimistic until the greeting says otherwise
            can_post: true,
            ..Session::default()
        }
    }

    /// Capabilities advertised by the server.
    ///
    /// `None` means CAPABILITIES has never been queried on this session;
    /// an empty set means it was queried and the server advertised none.
    pub fn capabilities(&self) -> Option<&Capabilities> {
        self.capabilities.as_ref()
    }

    /// Whether MODE READER has already been issued on this session
    pub fn mode_reader_issued(&self) -> bool {
        self.mode_reader_issued
    }

    /// Whether the greeting advertised posting permission
    pub fn can_post(&self) -> bool {
        self.can_post
    }

    /// The newsgroup currently selected, if any
    pub fn current_group(&self) -> Option<&str> {
        self.current_group.as_deref()
    }

    /// The article number currently selected within the current group
    pub fn current_article(&self) -> Option<u64> {
        self.current_article
    }

    pub(crate) fn set_can_post(&mut self, can_post: bool) {
        self.can_post = can_post;
    }

    /// Replace the cached capability set (re-query overwrites)
    pub(crate) fn set_capabilities(&mut self, capabilities: Capabilities) {
        self.capabilities = Some(capabilities);
    }

    pub(crate) fn mark_mode_reader_issued(&mut self) {
        self.mode_reader_issued = true;
    }

    /// A group was selected; the numeric pointer resets with it
    pub(crate) fn select_group(&mut self, name: &str) {
        self.current_group = Some(name.to_string());
        self.current_article = None;
    }

    /// Advance the mirrored current-article pointer.
    ///
    /// A pointer is only meaningful inside a selected group, so this is a
    /// no-op while no group is selected.
    pub(crate) fn set_current_article(&mut self, number: u64) {
        if self.current_group.is_some() {
            self.current_article = Some(number);
        }
    }

    pub(crate) fn invalidate(&mut self, what: Invalidate) {
        match what {
            Invalidate::Article => self.current_article = None,
            Invalidate::GroupAndArticle => {
                self.current_group = None;
                self.current_article = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invariant_holds(s: &Session) -> bool {
        s.current_group().is_some() || s.current_article().is_none()
    }

    #[test]
    fn test_new_session_defaults() {
        let s = Session::new();
        assert!(s.can_post());
        assert!(!s.mode_reader_issued());
        assert!(s.capabilities().is_none());
        assert!(s.current_group().is_none());
        assert!(s.current_article().is_none());
    }

    #[test]
    fn test_select_group_resets_pointer() {
        let mut s = Session::new();
        s.select_group("misc.test");
        s.set_current_article(7);
        assert_eq!(s.current_article(), Some(7));

        s.select_group("alt.test");
        assert_eq!(s.current_group(), Some("alt.test"));
        assert_eq!(s.current_article(), None);
        assert!(invariant_holds(&s));
    }

    #[test]
    fn test_pointer_requires_group() {
        let mut s = Session::new();
        s.set_current_article(42);
        assert_eq!(s.current_article(), None);
        assert!(invariant_holds(&s));
    }

    #[test]
    fn test_invalidate_article_keeps_group() {
        let mut s = Session::new();
        s.select_group("misc.test");
        s.set_current_article(3);
        s.invalidate(Invalidate::Article);
        assert_eq!(s.current_group(), Some("misc.test"));
        assert_eq!(s.current_article(), None);
        assert!(invariant_holds(&s));
    }

    #[test]
    fn test_invalidate_group_drops_both() {
        let mut s = Session::new();
        s.select_group("misc.test");
        s.set_current_article(3);
        s.invalidate(Invalidate::GroupAndArticle);
        assert_eq!(s.current_group(), None);
        assert_eq!(s.current_article(), None);
        assert!(invariant_holds(&s));
    }
}
