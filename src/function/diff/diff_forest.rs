/*
 * Copyright 2023 sukawasatoru
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use crate::model::DependencyNode;
use crate::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DiffMarker {
    Added,
    Removed,
    Unchanged,
}

impl DiffMarker {
    /// Leading column of a unified diff.
    pub fn as_char(self) -> char {
        match self {
            Self::Added => '+',
            Self::Removed => '-',
            Self::Unchanged => ' ',
        }
    }
}

/// One rendered entry of a tree diff.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DiffLine<'a> {
    pub marker: DiffMarker,
    pub node: &'a DependencyNode,
    pub depth: usize,
    /// Last entry of the sibling list the node came from.
    pub last: bool,
}

/// Merges two forests level by level into a pre-order list of diff lines.
///
/// Both forests must have their siblings sorted by coordinate (see [`crate::model::sort_forest`]).
/// Nodes are matched by coordinate first; a matched coordinate with another version is emitted
/// as a removal followed by an addition, and the children of both are left out when they are
/// equal.
#[tracing::instrument(skip_all)]
pub fn diff_forest<'a>(old: &'a [DependencyNode], new: &'a [DependencyNode]) -> Vec<DiffLine<'a>> {
    let mut lines = vec![];
    diff_siblings(old, new, 0, &mut lines);

    debug!(lines = lines.len(), "diffed");

    lines
}

fn diff_siblings<'a>(
    old: &'a [DependencyNode],
    new: &'a [DependencyNode],
    depth: usize,
    lines: &mut Vec<DiffLine<'a>>,
) {
    let mut old_index = 0;
    let mut new_index = 0;
    while old_index < old.len() && new_index < new.len() {
        let old_node = &old[old_index];
        let new_node = &new[new_index];
        let old_last = old_index == old.len() - 1;
        let new_last = new_index == new.len() - 1;

        match old_node.coordinate.cmp(&new_node.coordinate) {
            Ordering::Equal if old_node.version == new_node.version => {
                lines.push(DiffLine {
                    marker: DiffMarker::Unchanged,
                    node: new_node,
                    depth,
                    last: new_last,
                });
                diff_siblings(&old_node.children, &new_node.children, depth + 1, lines);
                old_index += 1;
                new_index += 1;
            }
            Ordering::Equal => {
                trace!(
                    coordinate = %old_node.coordinate,
                    old = %old_node.version,
                    new = %new_node.version,
                    "version changed",
                );

                let children_changed = old_node.children != new_node.children;
                lines.push(DiffLine {
                    marker: DiffMarker::Removed,
                    node: old_node,
                    depth,
                    last: old_last,
                });
                if children_changed {
                    push_children(DiffMarker::Removed, &old_node.children, depth + 1, lines);
                }

                lines.push(DiffLine {
                    marker: DiffMarker::Added,
                    node: new_node,
                    depth,
                    last: new_last,
                });
                if children_changed {
                    push_children(DiffMarker::Added, &new_node.children, depth + 1, lines);
                }

                old_index += 1;
                new_index += 1;
            }
            Ordering::Less => {
                push_subtree(DiffMarker::Removed, old_node, depth, old_last, lines);
                old_index += 1;
            }
            Ordering::Greater => {
                push_subtree(DiffMarker::Added, new_node, depth, new_last, lines);
                new_index += 1;
            }
        }
    }

    for (index, node) in old.iter().enumerate().skip(old_index) {
        push_subtree(DiffMarker::Removed, node, depth, index == old.len() - 1, lines);
    }
    for (index, node) in new.iter().enumerate().skip(new_index) {
        push_subtree(DiffMarker::Added, node, depth, index == new.len() - 1, lines);
    }
}

fn push_subtree<'a>(
    marker: DiffMarker,
    node: &'a DependencyNode,
    depth: usize,
    last: bool,
    lines: &mut Vec<DiffLine<'a>>,
) {
    lines.push(DiffLine {
        marker,
        node,
        depth,
        last,
    });
    push_children(marker, &node.children, depth + 1, lines);
}

fn push_children<'a>(
    marker: DiffMarker,
    children: &'a [DependencyNode],
    depth: usize,
    lines: &mut Vec<DiffLine<'a>>,
) {
    for (index, child) in children.iter().enumerate() {
        push_subtree(marker, child, depth, index == children.len() - 1, lines);
    }
}
