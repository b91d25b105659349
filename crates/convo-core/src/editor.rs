//! The composer / edit-controller state machine.
//!
//! Two states: appending (no amendment pending) and amending an existing
//! entry. Committing a non-empty draft either appends or replaces in place,
//! then flips the draft role. Only one amendment can be pending at a time;
//! retargeting silently wins.

use crate::message::{Message, Role};
use crate::transcript::Transcript;

/// Outcome of a successful commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// A new message was appended at this index.
    Appended(usize),
    /// The message at this index was replaced in place.
    Amended(usize),
}

/// Owns the transcript plus the composer-side state: the pending draft role
/// and the optional amendment target.
///
/// The draft *text* lives with the caller (the UI text buffer); this type
/// decides what a commit does with it.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    transcript: Transcript,
    draft_role: Role,
    amend_target: Option<usize>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with the given composer role (from config).
    pub fn with_role(role: Role) -> Self {
        Self {
            draft_role: role,
            ..Self::default()
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn draft_role(&self) -> Role {
        self.draft_role
    }

    /// Manually selects the composer role (the role selector).
    pub fn set_draft_role(&mut self, role: Role) {
        self.draft_role = role;
    }

    pub fn toggle_draft_role(&mut self) {
        self.draft_role = self.draft_role.flip();
    }

    /// The index being amended, if an amendment is pending.
    pub fn amend_target(&self) -> Option<usize> {
        self.amend_target
    }

    pub fn is_amending(&self) -> bool {
        self.amend_target.is_some()
    }

    /// Commits the draft: replace-in-place when an amendment is pending,
    /// append otherwise.
    ///
    /// A draft that trims to empty is a complete no-op — no transcript
    /// change, no role flip, the amendment target stays put. On success the
    /// amendment target is cleared and the draft role flips, regardless of
    /// which branch ran.
    pub fn commit(&mut self, draft: &str) -> Option<Commit> {
        let outcome = match self.amend_target {
            Some(index) => {
                if !self.transcript.replace_at(index, self.draft_role, draft) {
                    return None;
                }
                self.amend_target = None;
                Commit::Amended(index)
            }
            None => {
                if !self.transcript.append(self.draft_role, draft) {
                    return None;
                }
                Commit::Appended(self.transcript.len() - 1)
            }
        };

        self.draft_role = self.draft_role.flip();
        Some(outcome)
    }

    /// Targets an existing entry for amendment and returns it so the caller
    /// can seed the draft text and role.
    ///
    /// Starting a new edit while another is pending retargets silently (last
    /// call wins); the caller's re-seeding discards the previous draft.
    /// Returns `None` for an out-of-bounds index — not reachable through the
    /// UI, where indices come from existing entries.
    pub fn begin_edit(&mut self, index: usize) -> Option<&Message> {
        let message = self.transcript.get(index)?;
        self.amend_target = Some(index);
        self.draft_role = message.role;
        Some(message)
    }

    /// Abandons a pending amendment without touching the transcript.
    ///
    /// Also flips the draft role, mirroring the alternation of a successful
    /// commit.
    pub fn cancel_edit(&mut self) {
        self.amend_target = None;
        self.draft_role = self.draft_role.flip();
    }

    /// Clears the whole transcript and any pending amendment.
    ///
    /// The draft role is left as-is.
    pub fn clear(&mut self) {
        self.transcript.clear();
        self.amend_target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_appends_and_flips_role() {
        let mut ed = Editor::new();
        assert_eq!(ed.draft_role(), Role::Human);

        assert_eq!(ed.commit("Hi"), Some(Commit::Appended(0)));
        assert_eq!(ed.draft_role(), Role::Gpt);

        assert_eq!(ed.commit("Hello"), Some(Commit::Appended(1)));
        assert_eq!(ed.draft_role(), Role::Human);

        assert_eq!(ed.transcript().len(), 2);
    }

    #[test]
    fn empty_commit_is_a_complete_noop() {
        let mut ed = Editor::new();
        ed.commit("Hi");
        let role_before = ed.draft_role();

        assert_eq!(ed.commit("   \n "), None);
        assert_eq!(ed.draft_role(), role_before);
        assert_eq!(ed.transcript().len(), 1);
    }

    #[test]
    fn empty_commit_keeps_amendment_pending() {
        let mut ed = Editor::new();
        ed.commit("Hi");
        ed.begin_edit(0);

        assert_eq!(ed.commit(""), None);
        assert_eq!(ed.amend_target(), Some(0));
    }

    #[test]
    fn commit_while_amending_replaces_in_place_and_flips() {
        let mut ed = Editor::new();
        ed.commit("Hi"); // human
        ed.commit("Hello"); // gpt

        let seeded = ed.begin_edit(0).unwrap();
        assert_eq!(seeded.text, "Hi");
        assert_eq!(ed.draft_role(), Role::Human);

        assert_eq!(ed.commit("Hi there"), Some(Commit::Amended(0)));
        assert_eq!(ed.amend_target(), None);
        assert_eq!(ed.draft_role(), Role::Gpt);

        assert_eq!(ed.transcript().get(0).unwrap().text, "Hi there");
        assert_eq!(ed.transcript().get(1).unwrap().text, "Hello");
        assert_eq!(ed.transcript().len(), 2);
    }

    #[test]
    fn begin_edit_seeds_role_from_message() {
        let mut ed = Editor::new();
        ed.commit("Hi"); // human at 0
        ed.commit("Hello"); // gpt at 1

        ed.begin_edit(1);
        assert_eq!(ed.draft_role(), Role::Gpt);
        assert_eq!(ed.amend_target(), Some(1));
    }

    #[test]
    fn begin_edit_retargets_last_call_wins() {
        let mut ed = Editor::new();
        ed.commit("a");
        ed.commit("b");

        ed.begin_edit(0);
        ed.begin_edit(1);
        assert_eq!(ed.amend_target(), Some(1));
    }

    #[test]
    fn begin_edit_out_of_bounds_is_guarded() {
        let mut ed = Editor::new();
        ed.commit("a");
        assert!(ed.begin_edit(3).is_none());
        assert_eq!(ed.amend_target(), None);
    }

    #[test]
    fn cancel_edit_leaves_transcript_unchanged_and_flips_role() {
        let mut ed = Editor::new();
        ed.commit("Hi");
        ed.commit("Hello");
        let transcript_before = ed.transcript().clone();

        ed.begin_edit(0);
        let role_before_cancel = ed.draft_role();
        ed.cancel_edit();

        assert_eq!(ed.transcript(), &transcript_before);
        assert_eq!(ed.amend_target(), None);
        assert_eq!(ed.draft_role(), role_before_cancel.flip());
    }

    #[test]
    fn clear_resets_transcript_and_amendment() {
        let mut ed = Editor::new();
        ed.commit("a");
        ed.commit("b");
        ed.begin_edit(1);
        let role = ed.draft_role();

        ed.clear();

        assert!(ed.transcript().is_empty());
        assert_eq!(ed.amend_target(), None);
        // Role is untouched by clear.
        assert_eq!(ed.draft_role(), role);
    }

    #[test]
    fn with_role_seeds_composer_role() {
        let ed = Editor::with_role(Role::Gpt);
        assert_eq!(ed.draft_role(), Role::Gpt);
    }
}
