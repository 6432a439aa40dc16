//! Pure string operations on query-decorated module ids.
//!
//! Every id manipulation in this crate goes through these functions; they
//! preserve parameter order, which marker detection depends on.

/// Truncates the id at the first `?` or `#`
pub fn clean_url(url: &str) -> &str {
  match url.find(['?', '#']) {
    Some(index) => &url[..index],
    None => url,
  }
}

/// Appends the parameters onto the id's query string, starting one when the
/// id has none. Parameters are not deduplicated.
pub fn append_params(url: &str, params: &[&str]) -> String {
  if params.is_empty() {
    return url.to_string();
  }

  let separator = if url.contains('?') { '&' } else { '?' };

  format!("{url}{separator}{}", params.join("&"))
}

/// The id's query parameters in order; empty when it has no query string
pub fn extract_params(url: &str) -> Vec<&str> {
  match url.split_once('?') {
    Some((_, query)) if !query.is_empty() => query.split('&').collect(),
    _ => Vec::new(),
  }
}

/// Drops the named parameters, keeping the rest in their original order
pub fn remove_params(url: &str, to_remove: &[&str]) -> String {
  let retained: Vec<&str> = extract_params(url)
    .into_iter()
    .filter(|param| !to_remove.contains(param))
    .collect();

  append_params(clean_url(url), &retained)
}

/// Applies `f` to the portion of the id before the first `?`, reappending
/// the original query string unchanged
pub fn map_base_path(url: &str, f: impl FnOnce(&str) -> String) -> String {
  let (base, query) = match url.split_once('?') {
    Some((base, query)) => (base, query),
    None => (url, ""),
  };
  let params: Vec<&str> = if query.is_empty() {
    Vec::new()
  } else {
    query.split('&').collect()
  };

  append_params(&f(base), &params)
}

/// Whether the id's query string contains the parameter exactly
pub fn has_param(url: &str, param: &str) -> bool {
  extract_params(url).iter().any(|p| *p == param)
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn clean_url_truncates_at_query_or_fragment() {
    assert_eq!(clean_url("/a/b.css?direct&t=1"), "/a/b.css");
    assert_eq!(clean_url("/a/b.css#section"), "/a/b.css");
    assert_eq!(clean_url("/a/b.css"), "/a/b.css");
  }

  #[test]
  fn clean_url_is_idempotent() {
    for url in ["/a/b.css?x&y#z", "/a/b.css", "?x"] {
      assert_eq!(clean_url(clean_url(url)), clean_url(url));
    }
  }

  #[test]
  fn append_params_picks_the_right_separator() {
    assert_eq!(append_params("/a.css", &["css-url"]), "/a.css?css-url");
    assert_eq!(
      append_params("/a.css?css-url", &["t=1"]),
      "/a.css?css-url&t=1"
    );
    assert_eq!(
      append_params("/a.css", &["direct", "t=1"]),
      "/a.css?direct&t=1"
    );
  }

  #[test]
  fn append_params_is_a_no_op_on_empty_input() {
    assert_eq!(append_params("/a.css", &[]), "/a.css");
    assert_eq!(append_params("/a.css?x", &[]), "/a.css?x");
  }

  #[test]
  fn append_params_does_not_deduplicate() {
    assert_eq!(append_params("/a.css?x", &["x"]), "/a.css?x&x");
  }

  #[test]
  fn extract_params_splits_the_query_in_order() {
    assert_eq!(extract_params("/a.css?x&y=2&z"), vec!["x", "y=2", "z"]);
    assert!(extract_params("/a.css").is_empty());
    assert!(extract_params("/a.css?").is_empty());
  }

  #[test]
  fn remove_params_keeps_the_remaining_order() {
    assert_eq!(remove_params("/a.css?x&y=2&z", &["y=2"]), "/a.css?x&z");
    assert_eq!(remove_params("/a.css?x", &["x"]), "/a.css");
    assert_eq!(remove_params("/a.css?x&x&y", &["x"]), "/a.css?y");
    assert_eq!(remove_params("/a.css", &["x"]), "/a.css");
  }

  #[test]
  fn add_then_remove_round_trips_the_original_params() {
    let urls = ["/a.css", "/a.css?v=2", "/a.css?v=2&inline"];
    let added = ["css-url", "used"];

    for url in urls {
      let appended = append_params(url, &added);
      let removed = remove_params(&appended, &added);
      assert_eq!(extract_params(&removed), extract_params(url));
    }
  }

  #[test]
  fn map_base_path_leaves_the_query_untouched() {
    assert_eq!(
      map_base_path("/a.css?css-url&t=1", |base| format!("{base}.js")),
      "/a.css.js?css-url&t=1"
    );
    assert_eq!(map_base_path("/a.css", |base| format!("{base}.js")), "/a.css.js");
  }

  #[test]
  fn map_base_path_with_identity_is_a_no_op() {
    for url in ["/a.css", "/a.css?x", "/a.css?x&y=2"] {
      assert_eq!(map_base_path(url, str::to_string), url);
    }
  }

  #[test]
  fn has_param_matches_whole_params_only() {
    assert!(has_param("/a.css?css-url", "css-url"));
    assert!(has_param("/a.css?v=2&css-url", "css-url"));
    assert!(!has_param("/a.css?css-url-extra", "css-url"));
    assert!(!has_param("/a.css?t=css-url", "css-url"));
    assert!(!has_param("/a.css", "css-url"));
  }
}
