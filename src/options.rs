/// The matching back-end a [`Layer`](crate::Layer) runs its pattern on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Engine {
    /// Backtracking engine (`fancy_regex`). Supports look-around.
    #[default]
    Native,
    /// Linear-time engine (`regex`). Rejects look-around at construction.
    SafeLinear,
}

/// Options recognized when constructing a [`Layer`](crate::Layer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LayerOptions {
    /// The match must reach the end of the path.
    pub end: bool,
    pub case_sensitive: bool,
    /// Do not accept an optional trailing slash.
    pub strict: bool,
    /// Ignored when the pattern is a pre-built regex.
    pub engine: Engine,
}

impl LayerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn end(mut self, end: bool) -> Self {
        self.end = end;
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }
}
