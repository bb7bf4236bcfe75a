//! Matching chat messages against word watches.

use crate::entities::word_watch;

/// Returns every watch whose word occurs in `content`, in the order given.
///
/// The message is lower-cased once; stored words are already lower-case. This is a
/// plain substring test, so `"cat"` matches inside `"concatenate"`. Several
/// watches of the same user all match independently.
#[must_use]
pub fn matching_watches<'a>(
    watches: &'a [word_watch::Model],
    content: &str,
) -> Vec<&'a word_watch::Model> {
    let content = content.to_lowercase();
    watches
        .iter()
        .filter(|watch| content.contains(watch.word.as_str()))
        .collect()
}
