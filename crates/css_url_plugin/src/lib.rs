//! Stylesheet-to-URL plugin for query-driven bundler pipelines.
//!
//! Importing a stylesheet with the `?css-url` query yields a script module
//! whose default export is a URL to the compiled stylesheet: a live
//! dev-server URL during development, a content-hashed asset URL in
//! production builds. The plugin never compiles CSS itself; it reroutes ids
//! through the host's own pipeline and bridges the one dependency edge the
//! host cannot see.

pub mod query_url;

mod hot_reload;
mod loader;
mod plugin;
mod resolver;

pub use plugin::CssUrlPlugin;
pub use plugin::DIRECT_PARAM;
pub use plugin::INLINE_PARAM;
pub use plugin::PLUGIN_NAME;
pub use plugin::URL_PARAM;
pub use plugin::USED_PARAM;
