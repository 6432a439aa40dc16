use serde::Deserialize;
use serde::Serialize;

/// Source text of a generated script module.
///
/// Every generated module in this pipeline takes the shape
/// `export default <expr>;`; the helpers below build and destructure it.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct GeneratedModule {
  pub code: String,
}

impl GeneratedModule {
  pub fn new(code: impl Into<String>) -> Self {
    GeneratedModule { code: code.into() }
  }

  /// Module exporting the given string as a JSON-encoded literal
  pub fn default_export_string(value: &str) -> Self {
    GeneratedModule {
      code: format!("export default {};", serde_json::json!(value)),
    }
  }

  /// Module exporting a bare expression, evaluated by the consumer
  pub fn default_export_expression(expression: &str) -> Self {
    GeneratedModule {
      code: format!("export default {expression};"),
    }
  }

  /// Parses the exported JSON string literal back out of the module body
  pub fn default_export_json_string(&self) -> Option<String> {
    let value = self.code.trim().strip_prefix("export default")?.trim();
    let value = value.strip_suffix(';').unwrap_or(value).trim_end();
    serde_json::from_str(value).ok()
  }
}
