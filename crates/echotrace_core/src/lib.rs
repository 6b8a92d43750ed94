//! Public library API for rendering EchoTrace analysis results.

/// Structured value model, renderer, display surfaces, and the response boundary.
pub mod view;
