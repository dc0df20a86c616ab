mod core;
mod imp;
mod params;

pub use self::params::Params;

use crate::compiler::{CompiledPattern, Key};
use crate::engine::Strategy;
use crate::options::Engine;

/// One registered route: a compiled pattern plus the handler it leads to.
///
/// [`Layer::find`] is pure and can be shared across threads. [`Layer::matches`]
/// keeps the last result on the layer, so it needs exclusive access.
#[derive(Debug)]
pub struct Layer<H> {
    handle: H,
    pattern: CompiledPattern,
    keys: Vec<Key>,
    strategy: Strategy,
    engine: Engine,
    end: bool,
    last: Option<Match>,
}

/// A successful match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    path: String,
    params: Params,
}

impl Match {
    /// The matched part of the input. Without `end`, a trailing `/` is dropped.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn into_parts(self) -> (String, Params) {
        (self.path, self.params)
    }
}
