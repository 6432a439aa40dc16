pub use build_mode::*;
pub use generated_module::*;
pub use specifier_type::*;
pub use style_language::*;

mod build_mode;
mod generated_module;
mod specifier_type;
mod style_language;
