//! The fixed-image contract handed to the rendering layer.

use thiserror::Error;

/// Invalid combinations of the two image layout modes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MediaError {
    #[error("Image '{src}' sets fill together with explicit dimensions")]
    FillWithDimensions { src: String },

    #[error("Image '{src}' needs width and height unless fill is set")]
    MissingDimensions { src: String },
}

/// Normalized image description.
///
/// Two layout modes share one contract: intrinsic size (explicit width and
/// height) or fill-container. `validate()` rejects mixtures; `attributes()`
/// emits the flat list the template layer renders verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSpec {
    pub src: String,
    pub alt: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fill: bool,
    /// Eager-load above-the-fold images.
    pub priority: bool,
    pub class: Option<String>,
}

impl ImageSpec {
    /// Image rendered at its intrinsic size.
    pub fn fixed(src: impl Into<String>, alt: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            width: Some(width),
            height: Some(height),
            fill: false,
            priority: false,
            class: None,
        }
    }

    /// Image stretched to fill its container.
    pub fn fill(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            width: None,
            height: None,
            fill: true,
            priority: false,
            class: None,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_priority(mut self) -> Self {
        self.priority = true;
        self
    }

    pub fn validate(&self) -> Result<(), MediaError> {
        if self.fill && (self.width.is_some() || self.height.is_some()) {
            return Err(MediaError::FillWithDimensions {
                src: self.src.clone(),
            });
        }
        if !self.fill && (self.width.is_none() || self.height.is_none()) {
            return Err(MediaError::MissingDimensions {
                src: self.src.clone(),
            });
        }
        Ok(())
    }

    /// Flat attribute list for the template layer.
    pub fn attributes(&self) -> Result<Vec<(&'static str, String)>, MediaError> {
        self.validate()?;
        let mut attrs = vec![("src", self.src.clone()), ("alt", self.alt.clone())];
        if self.fill {
            attrs.push(("data-fill", "true".to_string()));
        } else if let (Some(width), Some(height)) = (self.width, self.height) {
            attrs.push(("width", width.to_string()));
            attrs.push(("height", height.to_string()));
        }
        attrs.push(("loading", if self.priority { "eager" } else { "lazy" }.to_string()));
        if let Some(class) = &self.class {
            attrs.push(("class", class.clone()));
        }
        Ok(attrs)
    }
}
