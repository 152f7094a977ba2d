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

use std::fmt::{Display, Formatter};

/// Separator Gradle puts between a requested and a resolved version.
pub const RESOLUTION_ARROW: &str = " -> ";

pub type Forest = Vec<DependencyNode>;

/// One entry of a dependency report, e.g. `+--- org.jetbrains:annotations:13.0`.
///
/// The version is an opaque string. It keeps whatever followed the coordinate in the report, so
/// `1.6.21 -> 1.7.10 (*)` is a version distinct from `1.7.10`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DependencyNode {
    pub coordinate: String,
    pub version: String,
    pub children: Forest,
}

impl DependencyNode {
    pub fn new(coordinate: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            coordinate: coordinate.into(),
            version: version.into(),
            children: vec![],
        }
    }

    pub fn with_children(mut self, children: Forest) -> Self {
        self.children = children;
        self
    }

    /// Splits the text following `--- ` into coordinate and version.
    pub fn from_token(token: &str) -> Self {
        if token.starts_with("project ") {
            // - project :lib
            return Self::new(token, "");
        }

        let head = match token.find(RESOLUTION_ARROW) {
            Some(index) => &token[..index],
            None => token,
        };

        match head.matches(':').count() {
            0 => Self::new(token, ""),
            1 if head.len() < token.len() => {
                // no version by bom. e.g:
                // - `androidx.compose.ui:ui-tooling -> 1.3.3`
                // - `androidx.compose.material:material -> 1.3.1 (*)`
                Self::new(head, &token[head.len() + 1..])
            }
            _ => {
                // - org.jetbrains.kotlin:kotlin-stdlib-jdk8:1.6.21
                // - org.jetbrains.kotlin:kotlin-stdlib:1.6.21 -> 1.7.10 (*)
                let index = head.rfind(':').unwrap_or(head.len());
                Self::new(&token[..index], &token[index + 1..])
            }
        }
    }

    /// Same coordinate and same version, regardless of children.
    pub fn is_same_release(&self, other: &Self) -> bool {
        self.coordinate == other.coordinate && self.version == other.version
    }
}

impl Display for DependencyNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.version.as_str() {
            "" => f.write_str(&self.coordinate),
            data if data.starts_with("->") => write!(f, "{} {}", self.coordinate, data),
            data => write!(f, "{}:{}", self.coordinate, data),
        }
    }
}

/// Sorts every sibling list by coordinate, then version.
pub fn sort_forest(forest: &mut Forest) {
    forest.sort_by(|lhs, rhs| {
        lhs.coordinate
            .cmp(&rhs.coordinate)
            .then_with(|| lhs.version.cmp(&rhs.version))
    });

    for node in forest.iter_mut() {
        sort_forest(&mut node.children);
    }
}
