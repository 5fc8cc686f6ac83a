//! Software rendering of clipped polygons.
//!
//! The rasterizer side of the crate: it consumes the clipper the way a tiled
//! rendering pipeline would.
//!
//! - [`TiledRenderer`]: splits the target into tiles and clips every shape to
//!   every tile before filling it.
//! - [`ScanlineFill`]: exact, half-open scanline fill for integer polygons.
//! - [`FrameBuffer`] / [`Canvas`]: borrowed and owned pixel storage.

mod canvas;
mod framebuffer;
mod scanline;
mod tiles;

pub use canvas::Canvas;
pub use framebuffer::FrameBuffer;
pub use scanline::ScanlineFill;
pub use tiles::{RenderStats, Shape, TiledRenderer};
