//! Title lookup for front ends.
//!
//! Titles are a closed set, so discovery is a walk over [`Title::ALL`].
//! Names are matched case-insensitively with `-`, `_` and spaces ignored,
//! so "King Kong", "king-kong" and "kingkong" all resolve.

use quarter_core::core::Game;

use crate::adapter::GameAdapter;
use crate::title::Title;

/// Return all titles, sorted by name.
pub fn all() -> Vec<Title> {
    let mut titles = Title::ALL.to_vec();
    titles.sort_by_key(|t| t.name());
    titles
}

/// Look up a title by name.
pub fn find(name: &str) -> Option<Title> {
    let wanted = normalize(name);
    Title::ALL
        .into_iter()
        .find(|t| normalize(t.name()) == wanted)
}

/// Construct a fresh adapter for `title` behind the common interface.
pub fn create(title: Title) -> Box<dyn Game + Send + Sync> {
    Box::new(GameAdapter::new(title))
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
