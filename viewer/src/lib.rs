//! Interactive scene layer over the [`attitude`] geometry core.
//!
//! The scene is an ECS world: the controller state, display filters and
//! per-frame overlay set live in resources, and the systems wired up by
//! [`app::App`] recompute everything that depends on them once per frame.
//! Rendering and window management stay outside; the embedding shell feeds
//! window events in and paints the overlay primitives and egui output that
//! come back out.

pub mod app;
pub mod components;
pub mod gui;
pub mod overlay;
pub mod picking;
pub mod resources;
pub mod scene;
