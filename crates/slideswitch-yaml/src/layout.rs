//! YAML layout types for a toggle screen.
//!
//! ```yaml
//! resources:
//!   switch_background: { width: 120, height: 40, color: "#9e9e9e" }
//!   slide_button: { width: 40, height: 40, color: "#ffffff" }
//! toggle:
//!   id: tv_toggle
//!   toggle_background: switch_background
//!   toggle_slide: slide_button
//!   toggle_state: false
//! ```

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use slideswitch_core::{AssetCatalog, Bitmap, Color, ResourceId};
use std::collections::BTreeMap;

/// Markup attributes recognised by the toggle widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleAttributes {
    /// Widget ID, exposed as the test id
    #[serde(default)]
    pub id: Option<String>,
    /// Background track image
    #[serde(default)]
    pub toggle_background: Option<ResourceId>,
    /// Slide knob image
    #[serde(default)]
    pub toggle_slide: Option<ResourceId>,
    /// Initial state (open when true)
    #[serde(default)]
    pub toggle_state: bool,
}

impl ToggleAttributes {
    /// Parse a bare attribute block.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }
}

/// A bitmap resource declared inline in the layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSpec {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Placeholder fill color
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "#000000".to_string()
}

/// Layout document loaded from a `.yaml` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Image resources available to the screen
    #[serde(default)]
    pub resources: BTreeMap<ResourceId, ResourceSpec>,
    /// The toggle element
    pub toggle: ToggleAttributes,
}

impl Layout {
    /// Parse a layout without validating it.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse and validate a layout.
    pub fn parse(yaml: &str) -> Result<Self, ParseError> {
        let layout = Self::from_yaml(yaml)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String, ParseError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check resource dimensions, colors and references.
    pub fn validate(&self) -> Result<(), ParseError> {
        for (id, spec) in &self.resources {
            if spec.width == 0 {
                return Err(invalid(format!("resources.{id}.width"), "must be positive"));
            }
            if spec.height == 0 {
                return Err(invalid(format!("resources.{id}.height"), "must be positive"));
            }
            Color::from_hex(&spec.color).map_err(|source| ParseError::Color {
                resource: id.clone(),
                source,
            })?;
        }

        let background = self.lookup("toggle_background", self.toggle.toggle_background.as_ref())?;
        let slide = self.lookup("toggle_slide", self.toggle.toggle_slide.as_ref())?;

        if let (Some(background), Some(slide)) = (background, slide) {
            if slide.width > background.width {
                return Err(ParseError::TrackTooNarrow {
                    background: background.width,
                    slide: slide.width,
                });
            }
        }

        Ok(())
    }

    /// Build an asset catalog holding every declared resource.
    pub fn catalog(&self) -> Result<AssetCatalog, ParseError> {
        let mut catalog = AssetCatalog::new();
        for (id, spec) in &self.resources {
            let fill = Color::from_hex(&spec.color).map_err(|source| ParseError::Color {
                resource: id.clone(),
                source,
            })?;
            catalog.insert(Bitmap::new(id.clone(), spec.width, spec.height, fill));
        }
        tracing::debug!(resources = catalog.len(), "built asset catalog");
        Ok(catalog)
    }

    fn lookup(
        &self,
        field: &str,
        id: Option<&ResourceId>,
    ) -> Result<Option<&ResourceSpec>, ParseError> {
        let Some(id) = id else {
            return Ok(None);
        };
        self.resources
            .get(id)
            .map(Some)
            .ok_or_else(|| ParseError::UnknownResource {
                field: field.to_string(),
                id: id.clone(),
            })
    }
}

fn invalid(field: String, message: &str) -> ParseError {
    ParseError::InvalidValue {
        field,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slideswitch_core::{AssetSource, ColorParseError};

    const LAYOUT: &str = r##"
resources:
  switch_background: { width: 120, height: 40, color: "#9e9e9e" }
  slide_button: { width: 40, height: 40, color: "#ffffff" }
toggle:
  id: tv_toggle
  toggle_background: switch_background
  toggle_slide: slide_button
  toggle_state: true
"##;

    #[test]
    fn test_parse_layout() {
        let layout = Layout::parse(LAYOUT).unwrap();
        assert_eq!(layout.resources.len(), 2);
        assert_eq!(layout.toggle.id.as_deref(), Some("tv_toggle"));
        assert_eq!(
            layout.toggle.toggle_background,
            Some(ResourceId::new("switch_background"))
        );
        assert!(layout.toggle.toggle_state);
    }

    #[test]
    fn test_toggle_state_defaults_to_false() {
        let attrs = ToggleAttributes::from_yaml("toggle_background: bg\n").unwrap();
        assert!(!attrs.toggle_state);
        assert_eq!(attrs.toggle_slide, None);
        assert_eq!(attrs.id, None);
    }

    #[test]
    fn test_resource_color_defaults_to_black() {
        let layout = Layout::parse("resources:\n  bg: { width: 10, height: 5 }\ntoggle: {}\n").unwrap();
        assert_eq!(layout.resources[&ResourceId::new("bg")].color, "#000000");
    }

    #[test]
    fn test_catalog_contains_resources() {
        let catalog = Layout::parse(LAYOUT).unwrap().catalog().unwrap();
        let knob = catalog.load_image(&"slide_button".into()).unwrap();
        assert_eq!((knob.width, knob.height), (40, 40));
        assert_eq!(knob.fill, Color::WHITE);
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = Layout::parse("resources:\n  bg: { width: 0, height: 5 }\ntoggle: {}\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidValue { ref field, .. } if field == "resources.bg.width"));
    }

    #[test]
    fn test_bad_color_rejected() {
        let err =
            Layout::parse("resources:\n  bg: { width: 1, height: 5, color: red }\ntoggle: {}\n")
                .unwrap_err();
        assert!(matches!(err, ParseError::Color { .. }));
    }

    #[test]
    fn test_signed_hex_color_rejected() {
        let yaml = "resources:\n  bg: { width: 1, height: 5, color: \"#+f+f+f\" }\ntoggle: {}\n";
        let err = Layout::parse(yaml).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Color {
                source: ColorParseError::InvalidHex,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_reference_rejected() {
        let err = Layout::parse("toggle:\n  toggle_slide: knob\n").unwrap_err();
        match err {
            ParseError::UnknownResource { field, id } => {
                assert_eq!(field, "toggle_slide");
                assert_eq!(id.as_str(), "knob");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_slide_wider_than_track_rejected() {
        let yaml = r"
resources:
  bg: { width: 30, height: 10 }
  knob: { width: 40, height: 10 }
toggle:
  toggle_background: bg
  toggle_slide: knob
";
        let err = Layout::parse(yaml).unwrap_err();
        assert!(matches!(
            err,
            ParseError::TrackTooNarrow {
                background: 30,
                slide: 40
            }
        ));
    }

    #[test]
    fn test_missing_toggle_is_yaml_error() {
        let err = Layout::parse("resources: {}\n").unwrap_err();
        assert!(matches!(err, ParseError::Yaml(_)));
    }

    #[test]
    fn test_to_yaml_reparses() {
        let layout = Layout::parse(LAYOUT).unwrap();
        let yaml = layout.to_yaml().unwrap();
        assert_eq!(Layout::parse(&yaml).unwrap(), layout);
    }
}
