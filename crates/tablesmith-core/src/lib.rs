pub mod compile;
pub use compile::{
    compile_all, compile_enum, compile_model, Compiled, EnumHooks, HookPhase, Hooks,
};

mod config;
pub use config::{CompileConfig, Config};

mod error;
pub use error::{Error, IntoError};

pub mod registry;
pub use registry::Registry;

pub mod schema;

mod writer;
pub use writer::TableWriter;

/// A Result type alias that uses tablesmith's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
