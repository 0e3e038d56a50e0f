//! Tests for rendering
//!
//! Organized like the rendering pipeline: formatting and substitution,
//! pass-through behavior, then strategy dispatch.

use super::*;

// Test helper functions
mod helpers;

// Rendering tests
mod render_basic;
