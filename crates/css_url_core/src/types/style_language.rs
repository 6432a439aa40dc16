/// Represents a stylesheet dialect by its extension
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StyleLanguage {
  Css,
  Less,
  Sass,
  Scss,
  Styl,
  Stylus,
  Pcss,
  Postcss,
  Sss,
}

impl StyleLanguage {
  pub fn extension(&self) -> &str {
    match self {
      StyleLanguage::Css => "css",
      StyleLanguage::Less => "less",
      StyleLanguage::Sass => "sass",
      StyleLanguage::Scss => "scss",
      StyleLanguage::Styl => "styl",
      StyleLanguage::Stylus => "stylus",
      StyleLanguage::Pcss => "pcss",
      StyleLanguage::Postcss => "postcss",
      StyleLanguage::Sss => "sss",
    }
  }

  pub fn from_extension(ext: &str) -> Option<Self> {
    match ext {
      "css" => Some(StyleLanguage::Css),
      "less" => Some(StyleLanguage::Less),
      "sass" => Some(StyleLanguage::Sass),
      "scss" => Some(StyleLanguage::Scss),
      "styl" => Some(StyleLanguage::Styl),
      "stylus" => Some(StyleLanguage::Stylus),
      "pcss" => Some(StyleLanguage::Pcss),
      "postcss" => Some(StyleLanguage::Postcss),
      "sss" => Some(StyleLanguage::Sss),
      _ => None,
    }
  }
}
