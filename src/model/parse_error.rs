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

use thiserror::Error;

/// Failure to read the dependency block of a report.
#[derive(Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    #[error("missing `--- ` delimiter at line {line_number}: {line}")]
    MissingDelimiter { line_number: usize, line: String },
}

impl ParseError {
    /// The raw line that could not be parsed.
    pub fn line(&self) -> &str {
        match self {
            Self::MissingDelimiter { line, .. } => line,
        }
    }

    pub fn line_number(&self) -> usize {
        match self {
            Self::MissingDelimiter { line_number, .. } => *line_number,
        }
    }
}
