//! Font registry
//!
//! An explicit table from face names to metrics. Lookups ignore ASCII case.

use super::{FixedMetrics, Font, FontError, FontMetrics, FontResolver};
use std::collections::HashMap;
use std::sync::Arc;

/// Face name registered by [`FontRegistry::new`].
pub const DEFAULT_FACE: &str = "System";

/// Size used when a fallback is requested with an unusable size.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// A face-name -> metrics table implementing [`FontResolver`].
#[derive(Debug, Clone)]
pub struct FontRegistry {
    faces: HashMap<String, (Arc<str>, Arc<dyn FontMetrics>)>,
    default_face: Arc<str>,
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FontRegistry {
    /// Create a registry holding only the default face.
    pub fn new() -> Self {
        Self::with_default(DEFAULT_FACE, Arc::new(FixedMetrics::default()))
    }

    /// Create a registry whose fallback is `face`.
    pub fn with_default(face: &str, metrics: Arc<dyn FontMetrics>) -> Self {
        let mut registry = Self {
            faces: HashMap::new(),
            default_face: Arc::from(face),
        };
        registry.register(face, metrics);
        registry
    }

    /// Register (or replace) a face.
    pub fn register(&mut self, face: &str, metrics: Arc<dyn FontMetrics>) {
        self.faces
            .insert(face.to_ascii_lowercase(), (Arc::from(face), metrics));
    }

    /// Builder form of [`register`](Self::register).
    pub fn face(mut self, face: &str, metrics: impl FontMetrics + 'static) -> Self {
        self.register(face, Arc::new(metrics));
        self
    }

    pub fn default_face(&self) -> &str {
        &self.default_face
    }

    pub fn contains(&self, face: &str) -> bool {
        self.faces.contains_key(&face.to_ascii_lowercase())
    }

    /// Registered face names, sorted.
    pub fn faces(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.faces.values().map(|(name, _)| &**name).collect();
        names.sort_unstable();
        names
    }
}

impl FontResolver for FontRegistry {
    fn resolve(&self, face: &str, size: f32) -> Result<Font, FontError> {
        if !(size.is_finite() && size > 0.0) {
            return Err(FontError::InvalidSize { size });
        }
        let (name, metrics) =
            self.faces
                .get(&face.to_ascii_lowercase())
                .ok_or_else(|| FontError::UnknownFace {
                    face: face.to_string(),
                })?;
        Ok(Font::new(Arc::clone(name), size, Arc::clone(metrics)))
    }

    fn fallback(&self, size: f32) -> Font {
        let size = if size.is_finite() && size > 0.0 {
            size
        } else {
            DEFAULT_FONT_SIZE
        };
        let metrics = match self.faces.get(&self.default_face.to_ascii_lowercase()) {
            Some((_, metrics)) => Arc::clone(metrics),
            None => Arc::new(FixedMetrics::default()),
        };
        Font::new(Arc::clone(&self.default_face), size, metrics)
    }
}
