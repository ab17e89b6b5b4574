use std::collections::BTreeMap;

use crate::models::torrent::TorrentState;

/// Count torrents per state, ordered by state name
pub fn count_states<'a, I>(states: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a TorrentState>,
{
    let mut counts = BTreeMap::new();
    for state in states {
        *counts.entry(state.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Render counts as `"1 downloading, 2 stalledUP"`
pub fn format_counts(counts: &BTreeMap<String, usize>) -> String {
    if counts.is_empty() {
        return "none".to_string();
    }

    counts
        .iter()
        .map(|(state, count)| format!("{} {}", count, state))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn summarize<'a, I>(states: I) -> String
where
    I: IntoIterator<Item = &'a TorrentState>,
{
    format_counts(&count_states(states))
}
