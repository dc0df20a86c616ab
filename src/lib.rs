//! Route layers: compiled path patterns that match request paths and extract
//! their parameters.
//!
//! ```
//! use route_layer::{Layer, LayerOptions};
//!
//! let mut layer = Layer::new("/user/:id", LayerOptions::new().end(true), ()).unwrap();
//! assert!(layer.matches("/user/42").unwrap());
//! assert_eq!(layer.params().unwrap().get("id"), Some("42"));
//! ```

#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

mod compiler;
mod decode;
mod engine;
mod error;
mod layer;
mod options;

pub use self::compiler::{CompileOptions, CompiledPattern, Compiler, Key, PathCompiler, Pattern};
pub use self::decode::decode_param;
pub use self::error::{CompileError, DecodeError, MatchError, BAD_REQUEST};
pub use self::layer::{Layer, Match, Params};
pub use self::options::{Engine, LayerOptions};
