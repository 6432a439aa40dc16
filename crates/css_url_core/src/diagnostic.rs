use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// A user facing error raised by a plugin hook.
///
/// Hooks return `anyhow::Error`; hosts downcast to `Diagnostic` to render a
/// build-time message naming the offending module.
#[derive(Error, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
  /// A summary user-facing message
  pub message: String,

  /// Broad failure class, used by callers to branch on error kind
  pub kind: ErrorKind,

  /// Indicates where this diagnostic was emitted from
  pub origin: Option<String>,

  /// Hints for the user
  pub hints: Option<Vec<String>>,
}

impl Display for Diagnostic {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.message)
  }
}

impl Diagnostic {
  pub fn kind_matches(&self, kind: ErrorKind) -> bool {
    self.kind == kind
  }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
  /// A plugin was applied to an input it can never handle
  Configuration,

  /// A nested pipeline request produced no output, or output the caller
  /// cannot interpret
  Pipeline,

  NotFound,

  #[default]
  Unknown,
}

/// Builds an `anyhow::Error` wrapping a [`Diagnostic`] of the given kind and
/// origin.
#[macro_export]
macro_rules! diagnostic_error {
  ($kind:expr, $origin:expr, $($arg:tt)*) => {
    ::anyhow::Error::new($crate::diagnostic::Diagnostic {
      message: format!($($arg)*),
      kind: $kind,
      origin: Some(String::from($origin)),
      hints: None,
    })
  };
}
