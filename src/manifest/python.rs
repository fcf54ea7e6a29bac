//! `__manifest__.py` parser
//!
//! A manifest is a Python module holding a single dict literal:
//!
//! ```python
//! {
//!     'name': 'My Module',
//!     'version': '12.0.1.2.3',
//!     'depends': ['base'],
//! }
//! ```
//!
//! Only the `version` key is extracted. Other values may be any expression;
//! they are never evaluated.

use tracing::warn;

use crate::manifest::error::ManifestError;

/// Key holding the module version
const VERSION_KEY: &str = "version";

/// Parser for Python dict-literal manifests
pub struct PythonManifestParser;

impl PythonManifestParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PythonManifestParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PythonManifestParser {
    /// Parse the manifest and return the raw `version` string
    pub fn parse_version(&self, content: &str) -> Result<String, ManifestError> {
        let mut parser = tree_sitter::Parser::new();
        let language = tree_sitter_python::LANGUAGE;
        parser.set_language(&language.into()).map_err(|e| {
            warn!("Failed to set Python language for tree-sitter: {}", e);
            ManifestError::TreeSitter(e.to_string())
        })?;

        let tree = parser.parse(content, None).ok_or_else(|| {
            warn!("Failed to parse manifest content");
            ManifestError::Syntax("Failed to parse Python".to_string())
        })?;

        let root = tree.root_node();
        if root.has_error() {
            let line = first_error(root)
                .map(|node| node.start_position().row + 1)
                .unwrap_or(1);
            warn!("Manifest has a syntax error at line {}", line);
            return Err(ManifestError::Syntax(format!("error at line {}", line)));
        }

        let dictionary = self.find_dictionary(root)?;

        let value = self
            .find_version_value(dictionary, content)?
            .ok_or(ManifestError::MissingVersion)?;

        self.string_literal(value, content)
    }

    /// Locate the top-level dict literal, allowing comments and parentheses around it
    fn find_dictionary<'a>(
        &self,
        root: tree_sitter::Node<'a>,
    ) -> Result<tree_sitter::Node<'a>, ManifestError> {
        let statements = named_children_without_comments(root);
        let [statement] = statements.as_slice() else {
            return Err(ManifestError::NotADictionary(format!(
                "{} top-level statements",
                statements.len()
            )));
        };

        if statement.kind() != "expression_statement" {
            return Err(ManifestError::NotADictionary(statement.kind().to_string()));
        }

        let mut expression = *statement;
        loop {
            let children = named_children_without_comments(expression);
            let [inner] = children.as_slice() else {
                return Err(ManifestError::NotADictionary(expression.kind().to_string()));
            };
            match inner.kind() {
                "dictionary" => return Ok(*inner),
                "parenthesized_expression" => expression = *inner,
                other => return Err(ManifestError::NotADictionary(other.to_string())),
            }
        }
    }

    /// Find the value of the `version` key; the last occurrence wins as in Python
    fn find_version_value<'a>(
        &self,
        dictionary: tree_sitter::Node<'a>,
        content: &str,
    ) -> Result<Option<tree_sitter::Node<'a>>, ManifestError> {
        let mut cursor = dictionary.walk();
        let mut found = None;

        for child in dictionary.named_children(&mut cursor) {
            match child.kind() {
                "pair" => {}
                "comment" => continue,
                // `**other` is not a literal
                other => {
                    return Err(ManifestError::NotADictionary(format!(
                        "dict containing {}",
                        other
                    )));
                }
            }

            let Some(key_node) = child.child_by_field_name("key") else {
                continue;
            };

            // Non-string keys are legal Python but never the version key
            let Ok(key) = self.string_literal(key_node, content) else {
                continue;
            };

            if key == VERSION_KEY {
                found = child.child_by_field_name("value");
            }
        }

        Ok(found)
    }

    /// Decode a `str` literal node, including implicit concatenation
    fn string_literal(
        &self,
        node: tree_sitter::Node,
        content: &str,
    ) -> Result<String, ManifestError> {
        match node.kind() {
            "string" => decode_string(&content[node.byte_range()]),
            "concatenated_string" => {
                let mut cursor = node.walk();
                let mut result = String::new();
                for part in node.named_children(&mut cursor) {
                    if part.kind() == "string" {
                        result.push_str(&decode_string(&content[part.byte_range()])?);
                    }
                }
                Ok(result)
            }
            other => Err(ManifestError::VersionNotString(other.to_string())),
        }
    }
}

fn named_children_without_comments(node: tree_sitter::Node) -> Vec<tree_sitter::Node> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}

fn first_error(node: tree_sitter::Node) -> Option<tree_sitter::Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }

    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error())
        .find_map(first_error)
}

/// Strip the prefix and quotes from a Python string literal and decode escapes
///
/// Raw strings are returned as written. `\N{...}` named escapes are rejected.
fn decode_string(text: &str) -> Result<String, ManifestError> {
    let quote_start = text
        .find(['\'', '"'])
        .ok_or_else(|| ManifestError::VersionNotString(text.to_string()))?;
    let (prefix, literal) = text.split_at(quote_start);

    let prefix = prefix.to_ascii_lowercase();
    if prefix.chars().any(|c| !matches!(c, 'r' | 'u')) {
        // bytes, f-strings and template strings are not plain str literals
        return Err(ManifestError::VersionNotString(format!(
            "{}-prefixed string",
            prefix
        )));
    }

    let quote = if literal.starts_with("'''") || literal.starts_with("\"\"\"") {
        &literal[..3]
    } else {
        &literal[..1]
    };

    let body = literal
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
        .ok_or_else(|| ManifestError::VersionNotString(text.to_string()))?;

    if prefix.contains('r') {
        Ok(body.to_string())
    } else {
        unescape(body)
    }
}

fn unescape(body: &str) -> Result<String, ManifestError> {
    let mut result = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        let Some(escape) = chars.next() else {
            return Err(ManifestError::Syntax("trailing backslash in string".to_string()));
        };

        match escape {
            '\n' => {} // line continuation
            '\\' | '\'' | '"' => result.push(escape),
            'a' => result.push('\u{07}'),
            'b' => result.push('\u{08}'),
            'f' => result.push('\u{0c}'),
            'n' => result.push('\n'),
            'r' => result.push('\r'),
            't' => result.push('\t'),
            'v' => result.push('\u{0b}'),
            '0'..='7' => {
                let mut value = escape.to_digit(8).unwrap_or_default();
                for _ in 0..2 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                result.push(code_point(value)?);
            }
            'x' | 'u' | 'U' => {
                let width = match escape {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let digits: String = (0..width).filter_map(|_| chars.next()).collect();
                let complete =
                    digits.len() == width && digits.chars().all(|d| d.is_ascii_hexdigit());
                let value = complete
                    .then(|| u32::from_str_radix(&digits, 16).ok())
                    .flatten()
                    .ok_or_else(|| {
                        ManifestError::Syntax(format!("truncated \\{} escape", escape))
                    })?;
                result.push(code_point(value)?);
            }
            'N' => {
                return Err(ManifestError::Syntax(
                    "named unicode escapes are not supported".to_string(),
                ));
            }
            // Unknown escapes keep their backslash, as in Python
            other => {
                result.push('\\');
                result.push(other);
            }
        }
    }

    Ok(result)
}

fn code_point(value: u32) -> Result<char, ManifestError> {
    char::from_u32(value)
        .ok_or_else(|| ManifestError::Syntax(format!("invalid code point {:#x}", value)))
}
