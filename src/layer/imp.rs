use super::{Layer, Params};
use crate::compiler::{
    check_groups, CompileOptions, CompiledPattern, Compiler, Key, PathCompiler, Pattern,
};
use crate::engine::Strategy;
use crate::error::CompileError;
use crate::options::{Engine, LayerOptions};

impl<H> Layer<H> {
    pub fn new(
        pattern: impl Into<Pattern>,
        options: LayerOptions,
        handle: H,
    ) -> Result<Self, CompileError> {
        Self::with_compiler(&PathCompiler, pattern, options, handle)
    }

    pub fn with_compiler<C>(
        compiler: &C,
        pattern: impl Into<Pattern>,
        options: LayerOptions,
        handle: H,
    ) -> Result<Self, CompileError>
    where
        C: Compiler + ?Sized,
    {
        let pattern: Pattern = pattern.into();

        // the compiler never emits look-ahead
        let compile_options = CompileOptions {
            case_sensitive: options.case_sensitive,
            strict: options.strict,
            end: options.end,
            lookahead: false,
        };
        let (compiled, keys) = compiler.compile(&pattern, &compile_options)?;
        check_groups(&compiled, &keys)?;

        let engine = if pattern.is_regex() {
            Engine::Native
        } else {
            options.engine
        };
        debug!("new layer {:?} on {:?}", pattern, engine);

        let strategy = Strategy::build(pattern.as_path(), options.end, engine, &compiled)?;

        Ok(Self {
            handle,
            pattern: compiled,
            keys,
            strategy,
            engine,
            end: options.end,
            last: None,
        })
    }

    /// Parameters of the last successful [`matches`](Self::matches) call.
    pub fn params(&self) -> Option<&Params> {
        self.last.as_ref().map(|m| &m.params)
    }

    /// Matched path of the last successful [`matches`](Self::matches) call.
    pub fn path(&self) -> Option<&str> {
        self.last.as_ref().map(|m| m.path.as_str())
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    pub fn is_end(&self) -> bool {
        self.end
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    pub fn into_handle(self) -> H {
        self.handle
    }
}
