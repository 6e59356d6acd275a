//! go.mod parser and line rewriter
//!
//! Parsing handles:
//! - the first line starting with `require`, which opens the dependency block
//! - every later non-blank line as `<module> <version> [trailing tokens...]`
//!
//! The block is never closed: anything after the opening `require` line that
//! has at least two tokens is read as a dependency, including content after
//! a closing `)` such as `replace` directives.
//!
//! Rewriting touches only lines whose first token is exactly the target module.

use crate::domain::DependencyTable;
use crate::error::ManifestError;
use crate::manifest::{LineRewrite, ManifestParser, Rewrite};

/// Keyword that opens the dependency block
const REQUIRE_KEYWORD: &str = "require";

/// Parser for go.mod files
pub struct GoModParser;

impl ManifestParser for GoModParser {
    fn parse(&self, content: &str) -> Result<DependencyTable, ManifestError> {
        let mut dependencies = DependencyTable::new();
        let mut in_require_block = false;

        for line in content.lines() {
            if !in_require_block {
                if line.starts_with(REQUIRE_KEYWORD) {
                    in_require_block = true;
                }
                continue;
            }

            if line.trim().is_empty() {
                continue;
            }

            let mut tokens = line.split_whitespace();
            if let (Some(module), Some(version)) = (tokens.next(), tokens.next()) {
                dependencies.insert(module, version.trim());
            }
        }

        Ok(dependencies)
    }

    fn rewrite_version(&self, content: &str, package: &str, new_version: &str) -> Rewrite {
        let mut result = String::with_capacity(content.len());
        let mut occurrences = Vec::new();

        for (index, line) in content.split_inclusive('\n').enumerate() {
            match rewrite_line(line, package, new_version) {
                Some((new_line, previous_version)) => {
                    occurrences.push(LineRewrite {
                        line: index + 1,
                        previous_version,
                        changed: new_line != line,
                    });
                    result.push_str(&new_line);
                }
                None => result.push_str(line),
            }
        }

        Rewrite {
            content: result,
            occurrences,
        }
    }
}

/// Replace the version on a single dependency line
///
/// Returns the rewritten line and the version it replaced, or None when the
/// line does not declare `package`. The first occurrence of the old version
/// after the module path is replaced; indentation, trailing comments and the
/// line terminator are kept as-is.
fn rewrite_line(line: &str, package: &str, new_version: &str) -> Option<(String, String)> {
    let mut tokens = line.split_whitespace();
    if tokens.next()? != package {
        return None;
    }
    let existing_version = tokens.next()?;

    let name_end = line.len() - line.trim_start().len() + package.len();
    let offset = name_end + line[name_end..].find(existing_version)?;

    let mut new_line = String::with_capacity(line.len() + new_version.len());
    new_line.push_str(&line[..offset]);
    new_line.push_str(new_version);
    new_line.push_str(&line[offset + existing_version.len()..]);

    Some((new_line, existing_version.to_string()))
}
