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

use super::DiffLine;
use crate::function::gradle::DELIMITER;

/// Indent below an ancestor that has further siblings.
const CONTINUING_INDENT: &str = "|    ";

/// Indent below an ancestor that is the last of its siblings.
const CLOSED_INDENT: &str = "     ";

/// Renders diff lines in the notation of the `dependencies` report, prefixed by `+`, `-` or ` `.
///
/// ```text
///  +--- a:a:1.0
/// +|    \--- b:b:1.0
/// -\--- c:c:1.0
/// ```
pub fn render_diff_lines(lines: &[DiffLine]) -> String {
    let mut output = String::new();
    let mut ancestors_last = Vec::<bool>::new();
    for line in lines {
        ancestors_last.truncate(line.depth);

        output.push(line.marker.as_char());
        for last in &ancestors_last {
            output.push_str(if *last { CLOSED_INDENT } else { CONTINUING_INDENT });
        }
        output.push(if line.last { '\\' } else { '+' });
        output.push_str(DELIMITER);
        output.push_str(&line.node.to_string());
        output.push('\n');

        ancestors_last.push(line.last);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::diff::{diff_forest, DiffMarker};
    use crate::function::gradle::INDENT_WIDTH;
    use crate::model::DependencyNode;
    use pretty_assertions::assert_eq;

    #[test]
    fn indent_width() {
        assert_eq!(CONTINUING_INDENT.len(), INDENT_WIDTH);
        assert_eq!(CLOSED_INDENT.len(), INDENT_WIDTH);
        assert_eq!(format!("+{}", DELIMITER).len(), INDENT_WIDTH);
    }

    #[test]
    fn render_diff_lines_nested() {
        let old = vec![
            DependencyNode::new("a:a", "1.0")
                .with_children(vec![DependencyNode::new("c:c", "1.0")]),
            DependencyNode::new("b:b", "1.0"),
        ];
        let new = vec![
            DependencyNode::new("a:a", "1.0").with_children(vec![
                DependencyNode::new("c:c", "1.0"),
                DependencyNode::new("d:d", "1.0"),
            ]),
            DependencyNode::new("b:b", "2.0")
                .with_children(vec![DependencyNode::new("e:e", "1.0")]),
        ];

        let actual = render_diff_lines(&diff_forest(&old, &new));
        let expected = r#" +--- a:a:1.0
 |    +--- c:c:1.0
+|    \--- d:d:1.0
-\--- b:b:1.0
+\--- b:b:2.0
+     \--- e:e:1.0
"#;
        assert_eq!(actual, expected);
    }

    #[test]
    fn render_diff_lines_deep_closed_branch() {
        let node = DependencyNode::new("a:a", "1.0").with_children(vec![
            DependencyNode::new("b:b", "1.0").with_children(vec![DependencyNode::new(
                "c:c",
                "1.0 -> 1.1 (*)",
            )]),
            DependencyNode::new("d:d", "1.0"),
        ]);
        let lines = vec![
            DiffLine {
                marker: DiffMarker::Unchanged,
                node: &node,
                depth: 0,
                last: true,
            },
            DiffLine {
                marker: DiffMarker::Unchanged,
                node: &node.children[0],
                depth: 1,
                last: false,
            },
            DiffLine {
                marker: DiffMarker::Added,
                node: &node.children[0].children[0],
                depth: 2,
                last: true,
            },
            DiffLine {
                marker: DiffMarker::Removed,
                node: &node.children[1],
                depth: 1,
                last: true,
            },
        ];

        let actual = render_diff_lines(&lines);
        let expected = r#" \--- a:a:1.0
      +--- b:b:1.0
+     |    \--- c:c:1.0 -> 1.1 (*)
-     \--- d:d:1.0
"#;
        assert_eq!(actual, expected);
    }

    #[test]
    fn render_diff_lines_empty() {
        assert_eq!(render_diff_lines(&[]), "");
    }
}
