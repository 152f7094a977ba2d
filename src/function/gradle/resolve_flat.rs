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

use crate::model::RESOLUTION_ARROW;
use crate::prelude::*;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

/// Library (`group:artifact`) to resolved version.
pub type ResolvedDependencies = IndexMap<String, String>;

/// Resolves every entry line of a report, regardless of the block it belongs to.
///
/// A library seen more than once keeps its last resolved version.
#[tracing::instrument(skip_all)]
pub fn resolve_dependencies_string(gradle_output: &str) -> ResolvedDependencies {
    static REG: Lazy<Regex> = Lazy::new(|| Regex::new(r"[+\\]--- (.*)$").expect("invalid pattern"));

    let mut resolved = ResolvedDependencies::new();
    for line in gradle_output.lines() {
        let Some(entry) = REG
            .captures(line)
            .and_then(|data| data.get(1))
            .map(|data| data.as_str())
        else {
            continue;
        };

        match resolve_entry(entry) {
            Some((library, version)) => {
                if let Some(previous) = resolved.insert(library.to_owned(), version.to_owned()) {
                    if previous != version {
                        trace!(%library, %previous, %version, "overwrite");
                    }
                }
            }
            None => debug!(%entry, "skip"),
        }
    }

    resolved
}

fn resolve_entry(entry: &str) -> Option<(&str, &str)> {
    if entry.starts_with("project ") {
        // \--- project :hoge
        return None;
    }

    match entry.split_once(RESOLUTION_ARROW) {
        Some((requested, resolved)) => {
            // - org.jetbrains.kotlin:kotlin-stdlib:1.6.21 -> 1.7.10
            // - org.jetbrains.kotlin:kotlin-stdlib:1.6.21 -> 1.7.10 (*)
            // - androidx.compose.ui:ui-tooling -> 1.3.3 (no version by bom)
            // - com.google.guava:guava:31.1-android -> com.google.guava:guava:32.0.0-jre (substitution)
            let library = match requested.matches(':').count() {
                0 => return None,
                1 => requested,
                _ => requested.rsplit_once(':')?.0,
            };
            let resolved = strip_annotation(resolved);
            let version = resolved
                .rsplit_once(':')
                .map_or(resolved, |(_, version)| version);
            Some((library, version))
        }
        None => {
            // - org.jetbrains.kotlin:kotlin-stdlib-jdk8:1.6.21
            // - androidx.profileinstaller:profileinstaller:1.3.0 (*)
            let (library, version) = entry.rsplit_once(':')?;
            Some((library, strip_annotation(version)))
        }
    }
}

/// `1.7.10 (*)` to `1.7.10`.
fn strip_annotation(version: &str) -> &str {
    version.split(' ').next().unwrap_or(version)
}

/// One `library:version` per line, sorted.
pub fn flatten_resolved_dependencies(resolved: &ResolvedDependencies) -> String {
    let mut list = resolved
        .iter()
        .map(|(library, version)| format!("{}:{}", library, version))
        .collect::<Vec<_>>();
    list.sort();
    list.join("\n")
}

/// Library-level changes between two resolutions.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct FlatDiff {
    /// `library:old -> new`
    pub version_changes: Vec<String>,
    /// `library:version`
    pub removed: Vec<String>,
    /// `library:version`
    pub added: Vec<String>,
}

impl FlatDiff {
    pub fn is_empty(&self) -> bool {
        self.version_changes.is_empty() && self.removed.is_empty() && self.added.is_empty()
    }
}

impl Display for FlatDiff {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sections = [
            ("VERSION CHANGE", &self.version_changes),
            ("REMOVED LIBRARIES", &self.removed),
            ("NEW LIBRARIES", &self.added),
        ];

        let mut first = true;
        for (title, lines) in sections {
            if lines.is_empty() {
                continue;
            }
            if !first {
                f.write_str("\n\n")?;
            }
            first = false;
            write!(f, "{}\n{}", title, lines.join("\n"))?;
        }

        Ok(())
    }
}

#[tracing::instrument(skip_all)]
pub fn diff_resolved_dependencies(
    old: &ResolvedDependencies,
    new: &ResolvedDependencies,
) -> FlatDiff {
    let mut diff = FlatDiff::default();
    for (library, old_version) in old {
        match new.get(library) {
            Some(new_version) if new_version != old_version => diff
                .version_changes
                .push(format!("{}:{} -> {}", library, old_version, new_version)),
            Some(_) => {}
            None => diff.removed.push(format!("{}:{}", library, old_version)),
        }
    }

    diff.added = new
        .iter()
        .filter(|(library, _)| !old.contains_key(*library))
        .map(|(library, version)| format!("{}:{}", library, version))
        .collect();

    diff.version_changes.sort();
    diff.removed.sort();
    diff.added.sort();

    debug!(
        version_changes = diff.version_changes.len(),
        removed = diff.removed.len(),
        added = diff.added.len(),
    );

    diff
}
