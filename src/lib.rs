//! # VecForge
//!
//! An immutable vector-geometry kernel for a procedural, node-based 2D
//! design tool, plus a small command-line front end for inspecting SVG path
//! data.
//!
//! ## Architecture
//!
//! VecForge is organized as a workspace with multiple crates:
//!
//! 1. **vecforge-core** - Points, rectangles, colors, constants and errors
//! 2. **vecforge-geometry** - Paths, groups, transforms, bezier math, SVG parsing,
//!    generators, filters and render replay
//! 3. **vecforge-settings** - Kernel settings persisted as JSON or TOML
//! 4. **vecforge** - This crate: logging setup and the `vecforge` binary
//!
//! ## Features
//!
//! - **Immutable values**: every operation returns a new path or shape
//! - **SVG input**: path data, basic shapes, transforms and inherited paint
//! - **Queries**: bounds, length, point at `t`, containment, resampling
//! - **Host rendering**: primitive replay into any sink, including lyon

pub mod cli;

pub use vecforge_core::{Color, ColorError, Error, GeometryError, Point, Rect, Result};
pub use vecforge_geometry::{
    combine_paths, parse_element, parse_path_data, Group, Path, PathElement, PathSink,
    RenderStyle, Shape, SvgElement, Transform,
};
pub use vecforge_settings::{KernelSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, keeping stdout for command results
/// - RUST_LOG environment variable support, `warn` otherwise
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
