use std::fmt;

/// Severity marker that overrides a layer's own styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WarnLevel {
    Info,
    Warn,
    Error,
}

impl WarnLevel {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            WarnLevel::Info => "info",
            WarnLevel::Warn => "warn",
            WarnLevel::Error => "error",
        }
    }
}

/// Styling tag carried on rendered geometry.
///
/// The engine never interprets a layer; it is forwarded unchanged onto
/// every [`RenderedShape`](super::RenderedShape) for the export step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layer {
    pub name: String,
    pub warn_level: Option<WarnLevel>,
}

impl Layer {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            warn_level: None,
        }
    }

    /// Same layer, flagged with a warning level.
    #[must_use]
    pub fn with_warn_level(mut self, level: WarnLevel) -> Self {
        self.warn_level = Some(level);
        self
    }
}

impl Default for Layer {
    fn default() -> Self {
        Layer::new("cut")
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.warn_level {
            Some(level) => write!(f, "{} ({})", self.name, level.name()),
            None => f.write_str(&self.name),
        }
    }
}

impl From<&str> for Layer {
    fn from(name: &str) -> Self {
        Layer::new(name)
    }
}
