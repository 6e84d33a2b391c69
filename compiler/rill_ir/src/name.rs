//! Qualified names for lowered declarations.

use std::fmt;

/// Dot-separated qualified name, e.g. `app.main.render`.
///
/// Lowering assigns a qualified name to every declaration it can anchor to
/// a package or enclosing class; synthetic and anonymous declarations may
/// carry none.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct FqName {
    segments: Vec<String>,
}

impl FqName {
    /// Create from pre-split segments.
    pub fn new(segments: Vec<String>) -> Self {
        FqName { segments }
    }

    /// Parse a dotted path, e.g. `"app.main"`.
    pub fn from_dotted(path: &str) -> Self {
        FqName {
            segments: path.split('.').map(str::to_owned).collect(),
        }
    }

    /// Extend with a child segment.
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_owned());
        FqName { segments }
    }

    /// The name's segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for FqName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
