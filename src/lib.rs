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

use crate::function::diff::{diff_forest, render_diff_lines};
use crate::function::gradle::{
    build_forest, diff_resolved_dependencies, extract_dependency_paths,
    flatten_resolved_dependencies, resolve_dependencies_string,
};
use crate::model::{sort_forest, Forest, ParseError};
pub use crate::prelude::*;

pub mod function;
pub mod model;
pub mod prelude;

/// Parses the first dependency block of a report into a forest with sorted siblings.
#[tracing::instrument(skip_all)]
pub fn parse_dependency_forest(gradle_output: &str) -> Result<Forest, ParseError> {
    let paths = extract_dependency_paths(gradle_output)?;
    let mut forest = build_forest(&paths);
    sort_forest(&mut forest);

    Ok(forest)
}

/// Tree diff of two reports in the report's own notation.
#[tracing::instrument(skip_all)]
pub fn diff_dependencies_string(old: &str, new: &str) -> Result<String, ParseError> {
    let old = parse_dependency_forest(old)?;
    let new = parse_dependency_forest(new)?;

    Ok(render_diff_lines(&diff_forest(&old, &new)))
}

/// Sorted `library:version` lines of a report.
pub fn flatten_dependencies_string(gradle_output: &str) -> String {
    flatten_resolved_dependencies(&resolve_dependencies_string(gradle_output))
}

/// `VERSION CHANGE`, `REMOVED LIBRARIES` and `NEW LIBRARIES` sections of two reports.
pub fn diff_flat_dependencies_string(old: &str, new: &str) -> String {
    diff_resolved_dependencies(
        &resolve_dependencies_string(old),
        &resolve_dependencies_string(new),
    )
    .to_string()
}
