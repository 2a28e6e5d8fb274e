//! Posting reconciliation for in-place entry edits.
//!
//! When an entry is edited, the persistence layer keeps the postings whose
//! ids survive, inserts new ones, and deletes the rest. [`diff_postings`]
//! computes that plan.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use ledgerly_shared::types::PostingId;

use super::types::Posting;

/// Changes needed to turn an entry's stored postings into the edited ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostingChanges {
    /// Postings whose id was not stored before.
    pub inserted: Vec<Posting>,
    /// Postings whose id was stored and whose content changed.
    pub updated: Vec<Posting>,
    /// Ids of stored postings missing from the edit.
    pub deleted: Vec<PostingId>,
}

impl PostingChanges {
    /// Returns true if applying the plan would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty() && self.updated.is_empty() && self.deleted.is_empty()
    }
}

/// Diffs stored postings against an edited list, keyed by posting id.
///
/// Output keeps the order of the edited list for inserts/updates and the
/// stored order for deletes. Unchanged postings appear nowhere.
#[must_use]
pub fn diff_postings(old: &[Posting], new: &[Posting]) -> PostingChanges {
    let stored: HashMap<&PostingId, &Posting> = old.iter().map(|p| (&p.id, p)).collect();
    let mut changes = PostingChanges::default();

    for posting in new {
        match stored.get(&posting.id) {
            None => changes.inserted.push(posting.clone()),
            Some(previous) if *previous != posting => changes.updated.push(posting.clone()),
            Some(_) => {}
        }
    }

    let kept: HashSet<&PostingId> = new.iter().map(|p| &p.id).collect();
    changes.deleted = old
        .iter()
        .filter(|p| !kept.contains(&p.id))
        .map(|p| p.id.clone())
        .collect();

    changes
}
