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

use super::{parse_entry, DELIMITER};
use crate::model::ParseError;
use crate::prelude::*;
use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug_span;

/// Entry tokens from a root to one node, e.g. `["a:b:1.0", "c:d:2.0"]`.
pub type DependencyPath = Vec<String>;

/// Collects every root-to-leaf path of the first dependency block in a `dependencies` report.
///
/// Lines before the first root entry are ignored and the block ends at the first blank line.
#[tracing::instrument(skip_all)]
pub fn extract_dependency_paths(
    gradle_output: &str,
) -> Result<IndexSet<DependencyPath>, ParseError> {
    static ROOT_ENTRY: Lazy<Regex> = Lazy::new(|| {
        Regex::new(&format!(r"^[+\\]{}", DELIMITER)).expect("invalid pattern")
    });

    let mut paths = IndexSet::new();
    let mut stack = DependencyPath::new();
    let mut found_start = false;
    for (index, line) in gradle_output.lines().enumerate() {
        let line_number = index + 1;
        let line_span = debug_span!("", line_number, %line);
        let _enter = line_span.enter();

        if !found_start {
            if !ROOT_ENTRY.is_match(line) {
                continue;
            }
            found_start = true;
        }

        if line.trim().is_empty() {
            break;
        }

        let (line_level, token) = parse_entry(line, line_number)?;
        trace!(?line_level);

        if line_level < stack.len() {
            // +--- a:a:1.0
            // |    \--- b:b:1.0
            // \--- c:c:1.0   <- `a -> b` is complete.
            paths.insert(stack.clone());
            stack.truncate(line_level);
        }

        if line_level > stack.len() {
            // +--- a:a:1.0
            // |         \--- b:b:1.0   <- attached to `a`.
            warn!(line_number, line_level, parent_level = stack.len(), "skipped level");
        }

        stack.push(token.to_owned());
    }

    // the last branch has no following line to complete it.
    if !stack.is_empty() {
        paths.insert(stack);
    }

    debug!(paths = paths.len(), "extracted");

    Ok(paths)
}
