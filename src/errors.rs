//! Error Types
//!
//! This module defines the error taxonomy for scene loading and resolution.
//!
//! # Overview
//!
//! Every failure the core can detect is discovered during the load-time
//! resolution pass and carries the offending identifier:
//! - ID collisions and dangling references
//! - Components missing required sub-parts
//! - Cycles in the component graph
//! - Malformed keyframe sequences
//!
//! Local errors (a single bad component or resource) are reported and the
//! scene continues without the offender; a missing or cyclic root is fatal.
//!
//! # Usage
//!
//! All public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, SceneError>`.

use thiserror::Error;

/// The kind of resource an identifier refers to, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Material,
    Texture,
    Transformation,
    Primitive,
    Animation,
    Component,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResourceKind::Material => "material",
            ResourceKind::Texture => "texture",
            ResourceKind::Transformation => "transformation",
            ResourceKind::Primitive => "primitive",
            ResourceKind::Animation => "animation",
            ResourceKind::Component => "component",
        };
        f.write_str(name)
    }
}

/// The main error type for scene-graph loading and resolution.
#[derive(Error, Debug)]
pub enum SceneError {
    // ========================================================================
    // Resource Table Errors
    // ========================================================================
    /// Two resources or components were declared with the same ID.
    /// The table retains the first registration.
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: ResourceKind, id: String },

    /// A reference did not resolve against any table or graph entry.
    #[error("unknown {kind} id: {id}")]
    UnknownId { kind: ResourceKind, id: String },

    // ========================================================================
    // Component Graph Errors
    // ========================================================================
    /// A component is missing a required sub-part (materials, texture,
    /// children). The component is dropped from the graph.
    #[error("component {component} is missing required {field}")]
    MissingRequiredField {
        component: String,
        /// The missing block ("materials", "texture", "children").
        field: &'static str,
    },

    /// The component graph contains a cycle reachable from the root.
    #[error("cyclic component reference through {id}")]
    CyclicReference { id: String },

    /// The declared root component does not exist or was dropped
    /// during resolution. The scene cannot render.
    #[error("root component {id} missing; scene cannot render")]
    RootMissing { id: String },

    // ========================================================================
    // Animation Errors
    // ========================================================================
    /// A keyframe sequence is unusable: empty, non-increasing instants,
    /// a first instant at or before zero, or a non-positive scale value.
    #[error("malformed keyframe sequence in animation {id}: {reason}")]
    MalformedKeyframeSequence { id: String, reason: String },
}

/// Alias for `Result<T, SceneError>`.
pub type Result<T> = std::result::Result<T, SceneError>;
