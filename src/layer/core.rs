use super::{Layer, Match, Params};
use crate::compiler::Key;
use crate::decode::decode_param;
use crate::engine::Strategy;
use crate::error::MatchError;

use std::borrow::Cow;

const SLASH: char = '/';

impl<H> Layer<H> {
    /// Matches `path` and returns the result without touching the layer.
    ///
    /// `None` stands for "no path available" and never matches. A segment that
    /// fails to decode aborts the whole call with [`MatchError::Decode`].
    pub fn find(&self, path: Option<&str>) -> Result<Option<Match>, MatchError> {
        let path = match path {
            Some(p) => p,
            None => return Ok(None),
        };

        match self.strategy {
            Strategy::FastSlash => {
                return Ok(Some(Match {
                    path: String::new(),
                    params: Params::new(),
                }))
            }
            Strategy::FastStar => {
                let mut params = Params::new();
                let value = decode_param(path)?.into_owned();
                params.assign(&Key::Index(0), Some(value));
                return Ok(Some(Match {
                    path: path.to_owned(),
                    params,
                }));
            }
            Strategy::Native | Strategy::SafeLinear(_) => {}
        }

        let groups = match self.strategy.exec(&self.pattern, path)? {
            Some(g) => g,
            None => {
                trace!("no match: {:?}", path);
                return Ok(None);
            }
        };

        let whole = groups.whole();
        let matched = match whole.strip_suffix(SLASH) {
            Some(trimmed) if !self.end => trimmed,
            _ => whole,
        };

        let mut params = Params::new();
        for (key, raw) in self.keys.iter().zip(groups.captures()) {
            let value = raw.map(decode_param).transpose()?.map(Cow::into_owned);
            params.assign(key, value);
        }

        Ok(Some(Match {
            path: matched.to_owned(),
            params,
        }))
    }

    /// Matches `path` and keeps the result for [`params`](Self::params) and
    /// [`path`](Self::path).
    ///
    /// The previous result is cleared first, so after an error or a non-match
    /// both accessors return `None`.
    pub fn matches<'p>(&mut self, path: impl Into<Option<&'p str>>) -> Result<bool, MatchError> {
        self.last = None;
        let found = self.find(path.into())?;
        let matched = found.is_some();
        self.last = found;
        Ok(matched)
    }
}
