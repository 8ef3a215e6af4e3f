use geo::Polygon;

/// Where search areas get drawn. Implementations wrap one vendor's map widget; nothing in
/// this crate touches screen space directly.
pub trait MapCanvas {
    /// The widget's identifier for a drawn shape, passed back to erase it.
    type Handle;

    fn render_ring(&mut self, ring: &Polygon) -> Self::Handle;
    fn remove_shape(&mut self, handle: Self::Handle);
}

/// Ignores everything
pub struct NullCanvas;

impl MapCanvas for NullCanvas {
    type Handle = ();

    fn render_ring(&mut self, _: &Polygon) {}
    fn remove_shape(&mut self, _: ()) {}
}

/// Erases the previously drawn ring, if any, then draws the new one. Map widgets run this
/// cycle every time the drawn shape or radius changes.
pub fn redraw<C: MapCanvas>(
    canvas: &mut C,
    previous: Option<C::Handle>,
    ring: &Polygon,
) -> C::Handle {
    if let Some(handle) = previous {
        canvas.remove_shape(handle);
    }
    canvas.render_ring(ring)
}
