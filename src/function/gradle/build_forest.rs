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

use super::DependencyPath;
use crate::model::{DependencyNode, Forest};
use crate::prelude::*;

/// Folds paths into a forest, merging shared prefixes.
///
/// Siblings keep the order they were first seen in.
#[tracing::instrument(skip_all)]
pub fn build_forest<'a, I>(paths: I) -> Forest
where
    I: IntoIterator<Item = &'a DependencyPath>,
{
    let mut forest = Forest::new();
    for path in paths {
        let mut siblings = &mut forest;
        for token in path {
            let candidate = DependencyNode::from_token(token);
            let index = match siblings
                .iter()
                .position(|data| data.is_same_release(&candidate))
            {
                Some(data) => data,
                None => {
                    siblings.push(candidate);
                    siblings.len() - 1
                }
            };
            siblings = &mut siblings[index].children;
        }
    }

    debug!(roots = forest.len(), "built");

    forest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::gradle::extract_dependency_paths;

    fn path(tokens: &[&str]) -> DependencyPath {
        tokens.iter().map(|data| data.to_string()).collect()
    }

    #[test]
    fn build_forest_shared_prefix() {
        let paths = vec![
            path(&["b:b:1.0", "c:c:1.0"]),
            path(&["b:b:1.0", "a:a:1.0"]),
            path(&["a:a:1.0"]),
        ];

        let actual = build_forest(&paths);
        let expected = vec![
            DependencyNode::new("b:b", "1.0").with_children(vec![
                DependencyNode::new("c:c", "1.0"),
                DependencyNode::new("a:a", "1.0"),
            ]),
            DependencyNode::new("a:a", "1.0"),
        ];
        assert_eq!(actual, expected);
    }

    #[test]
    fn build_forest_conflicting_versions_stay_apart() {
        let paths = vec![
            path(&["a:a:1.0", "c:c:1.0"]),
            path(&["a:a:2.0", "c:c:1.0"]),
        ];

        let actual = build_forest(&paths);
        let expected = vec![
            DependencyNode::new("a:a", "1.0").with_children(vec![DependencyNode::new("c:c", "1.0")]),
            DependencyNode::new("a:a", "2.0").with_children(vec![DependencyNode::new("c:c", "1.0")]),
        ];
        assert_eq!(actual, expected);
    }

    #[test]
    fn build_forest_from_report() {
        let gradle_output = r#"
releaseRuntimeClasspath - Runtime classpath of compilation 'release' (target  (androidJvm)).
+--- org.jetbrains.kotlin:kotlin-stdlib-jdk8:1.6.21
|    +--- org.jetbrains.kotlin:kotlin-stdlib:1.6.21 -> 1.7.10
|    |    +--- org.jetbrains.kotlin:kotlin-stdlib-common:1.7.10
|    |    \--- org.jetbrains:annotations:13.0
|    \--- org.jetbrains.kotlin:kotlin-stdlib-jdk7:1.6.21
|         \--- org.jetbrains.kotlin:kotlin-stdlib:1.6.21 -> 1.7.10 (*)
\--- androidx.compose.ui:ui-tooling -> 1.3.3
"#;

        let paths = extract_dependency_paths(gradle_output).unwrap();
        let actual = build_forest(&paths);
        let expected = vec![
            DependencyNode::new("org.jetbrains.kotlin:kotlin-stdlib-jdk8", "1.6.21").with_children(
                vec![
                    DependencyNode::new("org.jetbrains.kotlin:kotlin-stdlib", "1.6.21 -> 1.7.10")
                        .with_children(vec![
                            DependencyNode::new(
                                "org.jetbrains.kotlin:kotlin-stdlib-common",
                                "1.7.10",
                            ),
                            DependencyNode::new("org.jetbrains:annotations", "13.0"),
                        ]),
                    DependencyNode::new("org.jetbrains.kotlin:kotlin-stdlib-jdk7", "1.6.21")
                        .with_children(vec![DependencyNode::new(
                            "org.jetbrains.kotlin:kotlin-stdlib",
                            "1.6.21 -> 1.7.10 (*)",
                        )]),
                ],
            ),
            DependencyNode::new("androidx.compose.ui:ui-tooling", "-> 1.3.3"),
        ];
        assert_eq!(actual, expected);
    }

    #[test]
    fn build_forest_empty() {
        let paths: Vec<DependencyPath> = vec![];
        assert!(build_forest(&paths).is_empty());
    }
}
