mod path;

pub use self::path::PathCompiler;

use crate::error::CompileError;

use std::fmt;

/// What a route is registered with.
#[derive(Debug, Clone)]
pub enum Pattern {
    Path(String),
    /// Alternatives; a path matches if any member matches.
    List(Vec<String>),
    /// A pre-built native regex. Always runs on [`Engine::Native`](crate::Engine::Native).
    Regex(fancy_regex::Regex),
}

impl Pattern {
    /// The raw path text, if this is a single path pattern.
    pub fn as_path(&self) -> Option<&str> {
        match self {
            Self::Path(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_regex(&self) -> bool {
        matches!(self, Self::Regex(_))
    }
}

impl From<&str> for Pattern {
    fn from(x: &str) -> Self {
        Self::Path(x.to_owned())
    }
}

impl From<String> for Pattern {
    fn from(x: String) -> Self {
        Self::Path(x)
    }
}

impl From<Vec<String>> for Pattern {
    fn from(x: Vec<String>) -> Self {
        Self::List(x)
    }
}

impl From<&[&str]> for Pattern {
    fn from(x: &[&str]) -> Self {
        Self::List(x.iter().map(|&s| s.to_owned()).collect())
    }
}

impl From<fancy_regex::Regex> for Pattern {
    fn from(x: fancy_regex::Regex) -> Self {
        Self::Regex(x)
    }
}

/// Names the value bound by one capture group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Name(Box<str>),
    /// Unnamed groups, numbered left to right from 0.
    Index(usize),
}

impl Key {
    /// Compares against a lookup key; positional keys match their decimal form.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Name(n) => **n == *name,
            Self::Index(i) => is_decimal(name) && name.parse::<usize>().ok() == Some(*i),
        }
    }

    /// Whether two keys address the same parameter, e.g. `Name("0")` and `Index(0)`.
    pub fn same_slot(&self, other: &Key) -> bool {
        match (self, other) {
            (Self::Name(a), Self::Name(b)) => a == b,
            (Self::Index(a), Self::Index(b)) => a == b,
            (Self::Name(n), k @ Self::Index(_)) | (k @ Self::Index(_), Self::Name(n)) => {
                k.matches(n)
            }
        }
    }
}

fn is_decimal(s: &str) -> bool {
    let digits = !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    digits && (s == "0" || !s.starts_with('0'))
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(n) => f.write_str(n),
            Self::Index(i) => write!(f, "{}", i),
        }
    }
}

/// Options handed to a [`Compiler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    pub case_sensitive: bool,
    pub strict: bool,
    pub end: bool,
    /// Allow the compiler to emit look-ahead assertions.
    pub lookahead: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            strict: false,
            end: true,
            lookahead: true,
        }
    }
}

/// Turns a [`Pattern`] into a regex plus one key per capture group.
pub trait Compiler {
    fn compile(
        &self,
        pattern: &Pattern,
        options: &CompileOptions,
    ) -> Result<(CompiledPattern, Vec<Key>), CompileError>;
}

/// A compiled pattern on the native engine, with enough left over to rebuild it
/// on the safe-linear engine.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: fancy_regex::Regex,
    source: String,
    case_insensitive: bool,
}

impl CompiledPattern {
    pub fn new(source: String, case_insensitive: bool) -> Result<Self, CompileError> {
        let regex = if case_insensitive {
            fancy_regex::Regex::new(&format!("(?i){}", source))?
        } else {
            fancy_regex::Regex::new(&source)?
        };
        Ok(Self {
            regex,
            source,
            case_insensitive,
        })
    }

    /// Wraps a pre-built regex. Its flags stay inside the regex, so
    /// [`is_case_insensitive`](Self::is_case_insensitive) reports `false` even
    /// when the regex itself ignores case.
    pub fn from_regex(regex: fancy_regex::Regex) -> Self {
        let source = regex.as_str().to_owned();
        Self {
            regex,
            source,
            case_insensitive: false,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether [`new`](Self::new) was asked for case-insensitive matching.
    /// Always `false` for patterns wrapped with [`from_regex`](Self::from_regex).
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn as_regex(&self) -> &fancy_regex::Regex {
        &self.regex
    }

    /// Number of capture groups, not counting the whole match.
    pub fn group_count(&self) -> usize {
        self.regex.captures_len().saturating_sub(1)
    }

    /// Builds the same source and case sensitivity on the linear-time engine.
    pub(crate) fn to_safe_linear(&self) -> Result<regex::Regex, CompileError> {
        let re = regex::RegexBuilder::new(&self.source)
            .case_insensitive(self.case_insensitive)
            .build()?;
        Ok(re)
    }
}

pub(crate) fn check_groups(compiled: &CompiledPattern, keys: &[Key]) -> Result<(), CompileError> {
    let groups = compiled.group_count();
    if groups != keys.len() {
        return Err(CompileError::GroupMismatch {
            groups,
            keys: keys.len(),
        });
    }
    Ok(())
}

#[test]
fn key_lookup() {
    let name = Key::Name("id".into());
    assert!(name.matches("id"));
    assert!(!name.matches("ID"));

    let index = Key::Index(10);
    assert!(index.matches("10"));
    assert!(!index.matches("010"));
    assert!(!index.matches("+10"));
    assert!(Key::Index(0).matches("0"));
    assert!(!Key::Index(0).matches(""));
    assert_eq!(index.to_string(), "10");

    assert!(Key::Name("0".into()).same_slot(&Key::Index(0)));
    assert!(Key::Index(0).same_slot(&Key::Name("0".into())));
    assert!(!Key::Name("00".into()).same_slot(&Key::Index(0)));
    assert!(!Key::Name("x".into()).same_slot(&Key::Name("y".into())));
}
