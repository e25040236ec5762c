//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    use std::path::PathBuf;

    pub fn dir() -> PathBuf {
        "content".into()
    }

    pub fn extensions() -> Vec<String> {
        vec!["yml".into()]
    }
}

// ============================================================================
// [resolve] Section Defaults
// ============================================================================

pub mod resolve {
    use super::super::TypeCollision;

    pub fn type_collision() -> TypeCollision {
        TypeCollision::default()
    }
}

// ============================================================================
// [output] Section Defaults
// ============================================================================

pub mod output {
    use std::path::PathBuf;

    pub fn dir() -> PathBuf {
        "public".into()
    }
}
