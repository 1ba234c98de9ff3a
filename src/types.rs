//! Various types shared by loading, layout and rendering.

/// The color scalar assigned to a component.
///
/// It is mapped through the renderer's color scale at draw time.
pub type Color = u8;

/// A 2-D position in the unit square.
pub type Position = [f64; 2];
