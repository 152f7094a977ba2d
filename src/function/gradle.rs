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

//! https://docs.gradle.org/current/userguide/viewing_debugging_dependencies.html

mod build_forest;
mod extract_paths;
mod resolve_flat;

pub use build_forest::build_forest;
pub use extract_paths::{extract_dependency_paths, DependencyPath};
pub use resolve_flat::{
    diff_resolved_dependencies, flatten_resolved_dependencies, resolve_dependencies_string,
    FlatDiff, ResolvedDependencies,
};

use crate::model::ParseError;
use crate::prelude::*;

/// Marks the start of a coordinate in an entry line, after `+` or `\`.
pub const DELIMITER: &str = "--- ";

/// Columns taken by one level of the tree: `|    `, `     `, `+--- ` or `\--- `.
pub const INDENT_WIDTH: usize = 5;

/// Returns the depth of an entry line and the text following its delimiter.
fn parse_entry(line: &str, line_number: usize) -> Result<(usize, &str), ParseError> {
    let index = line
        .find(DELIMITER)
        .ok_or_else(|| ParseError::MissingDelimiter {
            line_number,
            line: line.to_owned(),
        })?;

    // -1 for `+` or `\`.
    let offset = index.saturating_sub(1);
    if offset % INDENT_WIDTH != 0 {
        warn!(line_number, offset, "unexpected indent");
    }

    Ok((
        offset / INDENT_WIDTH,
        line[index + DELIMITER.len()..].trim_end(),
    ))
}
