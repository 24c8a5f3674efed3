use gc_core::charset::GlyphRamp;
use gc_core::frame::FrameBuffer;

/// Construit la ligne de texte d'une rangée de pixels, de gauche à droite.
///
/// # Example
/// ```
/// use gc_ascii::render::render_row;
/// use gc_core::charset::GlyphRamp;
/// use gc_core::frame::FrameBuffer;
/// let frame = FrameBuffer::new(4, 2);
/// let ramp = GlyphRamp::default();
/// assert_eq!(render_row(&frame, 0, &ramp), "````");
/// ```
#[must_use]
pub fn render_row(frame: &FrameBuffer, y: u32, ramp: &GlyphRamp) -> String {
    let mut line = String::with_capacity(frame.width as usize);
    for x in 0..frame.width {
        line.push(ramp.map(frame.brightness(x, y)));
    }
    line
}

/// Itère les lignes du haut vers le bas, une par rangée de pixels.
///
/// Le rendu est paresseux : une seule ligne vit en mémoire à la fois
/// côté écriture.
///
/// # Example
/// ```
/// use gc_ascii::render::rows;
/// use gc_core::charset::GlyphRamp;
/// use gc_core::frame::FrameBuffer;
/// let frame = FrameBuffer::new(3, 2);
/// let ramp = GlyphRamp::default();
/// assert_eq!(rows(&frame, &ramp).count(), 2);
/// ```
pub fn rows(frame: &FrameBuffer, ramp: &GlyphRamp) -> impl Iterator<Item = String> {
    (0..frame.height).map(move |y| render_row(frame, y, ramp))
}
