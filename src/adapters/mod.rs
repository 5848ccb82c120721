// Adapters layer: concrete implementations for external systems (http, illustrations, export)

pub mod export;
pub mod gemini;
pub mod illustration;
