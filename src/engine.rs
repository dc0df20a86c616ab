use crate::compiler::CompiledPattern;
use crate::options::Engine;

use smallvec::SmallVec;

/// How a layer runs its pattern. Resolved once at construction.
#[derive(Debug, Clone)]
pub(crate) enum Strategy {
    /// `"/"` without `end`: every path matches, nothing is captured.
    FastSlash,
    /// `"*"`: every path matches and is captured whole.
    FastStar,
    Native,
    SafeLinear(regex::Regex),
}

impl Strategy {
    pub(crate) fn build(
        raw: Option<&str>,
        end: bool,
        engine: Engine,
        compiled: &CompiledPattern,
    ) -> Result<Self, crate::error::CompileError> {
        match raw {
            Some("/") if !end => return Ok(Self::FastSlash),
            Some("*") => return Ok(Self::FastStar),
            _ => {}
        }
        match engine {
            Engine::Native => Ok(Self::Native),
            Engine::SafeLinear => {
                trace!("building safe-linear engine: {:?}", compiled.source());
                Ok(Self::SafeLinear(compiled.to_safe_linear()?))
            }
        }
    }

    /// Runs the general engine. Fast paths never get here.
    pub(crate) fn exec<'p>(
        &self,
        compiled: &CompiledPattern,
        path: &'p str,
    ) -> Result<Option<Groups<'p>>, fancy_regex::Error> {
        match self {
            Self::SafeLinear(re) => Ok(re.captures(path).map(|caps| {
                (0..caps.len())
                    .map(|i| caps.get(i).map(|m| m.as_str()))
                    .collect()
            })),
            _ => {
                let caps = match compiled.as_regex().captures(path)? {
                    Some(caps) => caps,
                    None => return Ok(None),
                };
                Ok(Some(
                    (0..caps.len())
                        .map(|i| caps.get(i).map(|m| m.as_str()))
                        .collect(),
                ))
            }
        }
    }
}

/// A successful engine match: the whole match followed by each capture group.
#[derive(Debug)]
pub(crate) struct Groups<'p> {
    buf: SmallVec<[Option<&'p str>; 8]>,
}

impl<'p> Groups<'p> {
    pub(crate) fn whole(&self) -> &'p str {
        self.buf.first().copied().flatten().unwrap_or_default()
    }

    pub(crate) fn captures(&self) -> impl Iterator<Item = Option<&'p str>> + '_ {
        self.buf.iter().skip(1).copied()
    }
}

impl<'p> FromIterator<Option<&'p str>> for Groups<'p> {
    fn from_iter<I: IntoIterator<Item = Option<&'p str>>>(iter: I) -> Self {
        Self {
            buf: iter.into_iter().collect(),
        }
    }
}
