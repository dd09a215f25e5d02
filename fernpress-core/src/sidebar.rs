//! Sidebar navigation trees derived from the content set.

use crate::models::{ContentEntry, ContentSet, SidebarNode};
use crate::titles::format_title;

/// Build the sidebar tree for one directory
///
/// Entries directly in the directory become leaves, first, stably sorted
/// by their `order` field (scan order breaks ties). Entries in
/// subdirectories are grouped by the first path segment beyond the
/// directory; groups keep the order they were first encountered and are
/// appended after the leaves. Grouping is a single level deep: anything
/// nested further collapses into its group as a leaf.
pub fn build_sidebar(set: &ContentSet, directory: &str) -> Vec<SidebarNode> {
    let mut direct: Vec<SidebarNode> = Vec::new();
    let mut groups: Vec<(String, Vec<SidebarNode>)> = Vec::new();

    for entry in set.in_directory(directory) {
        let leaf = leaf_node(entry);
        match group_key(entry, directory) {
            None => direct.push(leaf),
            Some(key) => {
                if let Some((_, children)) = groups.iter_mut().find(|(k, _)| *k == key) {
                    children.push(leaf);
                } else {
                    groups.push((key, vec![leaf]));
                }
            }
        }
    }

    sort_leaves(&mut direct);

    let mut result = direct;
    for (key, mut children) in groups {
        sort_leaves(&mut children);
        result.push(SidebarNode::Group {
            title: format_title(&key),
            children,
        });
    }

    result
}

/// Compose the site-wide sidebar: one group per top-level directory
///
/// Directories whose sidebar tree comes out empty are omitted.
pub fn build_full_sidebar(set: &ContentSet) -> Vec<SidebarNode> {
    set.directories()
        .into_iter()
        .filter_map(|dir| {
            let children = build_sidebar(set, &dir.path);
            if children.is_empty() {
                None
            } else {
                Some(SidebarNode::Group {
                    title: dir.title,
                    children,
                })
            }
        })
        .collect()
}

fn leaf_node(entry: &ContentEntry) -> SidebarNode {
    SidebarNode::Leaf {
        title: entry.metadata.title.clone(),
        url: entry.url.clone(),
        order: entry.metadata.order(),
    }
}

/// First path segment beyond `directory`, or None for direct children
fn group_key(entry: &ContentEntry, directory: &str) -> Option<String> {
    if entry.directory == directory {
        return None;
    }
    entry
        .directory
        .strip_prefix(directory)
        .and_then(|rest| rest.trim_start_matches('/').split('/').next())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn sort_leaves(leaves: &mut [SidebarNode]) {
    // sort_by_key is stable, so equal orders keep scan order
    leaves.sort_by_key(|node| match node {
        SidebarNode::Leaf { order, .. } => *order,
        SidebarNode::Group { .. } => i64::MAX,
    });
}
