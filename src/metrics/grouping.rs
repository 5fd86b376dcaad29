use std::cmp::Reverse;
use std::collections::HashMap;
use std::hash::Hash;

use itertools::Itertools;
use tracing::debug;

use crate::metrics::aggregate::summarize;
use crate::metrics::normalize::team_key;
use crate::model::{GroupKey, GroupSummary, NormalizedMatch};

/// Partition matches by `selector` and summarize each group.
///
/// Groups with fewer than `min_matches` matches are left out. The rest are
/// ordered by descending size; equal sizes keep first-seen order.
pub fn group_by<'a, I, K, F>(matches: I, selector: F, min_matches: usize) -> Vec<GroupSummary<K>>
where
    I: IntoIterator<Item = &'a NormalizedMatch>,
    K: Eq + Hash + Clone,
    F: Fn(&NormalizedMatch) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a NormalizedMatch>)> = Vec::new();
    for record in matches {
        let key = selector(record);
        match index.get(&key) {
            Some(&i) => groups[i].1.push(record),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![record]));
            }
        }
    }

    let total_groups = groups.len();
    let summaries = groups
        .into_iter()
        .filter(|(_, group)| group.len() >= min_matches)
        .filter_map(|(key, group)| {
            let matches_played = group.len();
            summarize(group).into_metrics().map(|metrics| GroupSummary {
                key,
                matches_played,
                metrics,
            })
        })
        .sorted_by_key(|summary| Reverse(summary.matches_played))
        .collect_vec();

    debug!(
        groups = total_groups,
        kept = summaries.len(),
        min_matches,
        "grouped matches"
    );
    summaries
}

/// Group along one of the built-in dimensions.
///
/// Opponents are compared like team names elsewhere, ignoring case and
/// surrounding whitespace; each group is labelled with the first spelling
/// seen.
pub fn group_by_key<'a, I>(matches: I, key: GroupKey, min_matches: usize) -> Vec<GroupSummary<String>>
where
    I: IntoIterator<Item = &'a NormalizedMatch>,
{
    match key {
        GroupKey::Opponent => {
            let matches = matches.into_iter().collect_vec();
            let mut spellings: HashMap<String, String> = HashMap::new();
            for record in &matches {
                spellings
                    .entry(team_key(&record.opponent))
                    .or_insert_with(|| key.label(record));
            }
            group_by(matches, |record| team_key(&record.opponent), min_matches)
                .into_iter()
                .map(|group| GroupSummary {
                    key: spellings.remove(&group.key).unwrap_or(group.key),
                    matches_played: group.matches_played,
                    metrics: group.metrics,
                })
                .collect()
        }
        _ => group_by(matches, |record| key.label(record), min_matches),
    }
}

/// Head-to-head record against each opponent met at least `min_matches` times.
pub fn by_opponent<'a, I>(matches: I, min_matches: usize) -> Vec<GroupSummary<String>>
where
    I: IntoIterator<Item = &'a NormalizedMatch>,
{
    group_by_key(matches, GroupKey::Opponent, min_matches)
}
