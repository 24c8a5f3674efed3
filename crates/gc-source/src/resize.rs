use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer as FirResizer};

use gc_core::error::ConvertError;
use gc_core::frame::FrameBuffer;

/// Calcule les dimensions cibles dans une boîte englobante en préservant
/// le ratio d'aspect.
///
/// Paysage (ratio > 1) : la largeur est fixée à `max_width` et la hauteur
/// suit. Sinon la hauteur est fixée à `max_height` et la largeur suit.
/// Chaque dimension calculée est tronquée puis ramenée à au moins 1.
///
/// # Errors
/// `InvalidDimensions` si `width` ou `height` est nul.
///
/// # Example
/// ```
/// use gc_source::resize::fit_dimensions;
/// assert_eq!(fit_dimensions(200, 100, 150, 150).unwrap(), (150, 75));
/// assert_eq!(fit_dimensions(100, 200, 150, 150).unwrap(), (75, 150));
/// ```
pub fn fit_dimensions(
    width: u32,
    height: u32,
    max_width: u32,
    max_height: u32,
) -> Result<(u32, u32), ConvertError> {
    if width == 0 || height == 0 {
        return Err(ConvertError::InvalidDimensions { width, height });
    }

    let aspect = f64::from(width) / f64::from(height);
    let (target_w, target_h) = if aspect > 1.0 {
        (max_width, ((f64::from(max_width) / aspect) as u32).max(1))
    } else {
        (((f64::from(max_height) * aspect) as u32).max(1), max_height)
    };
    Ok((target_w, target_h))
}

/// Resizer wrappant fast_image_resize, figé sur l'interpolation bilinéaire.
///
/// # Example
/// ```
/// use gc_source::resize::Resizer;
/// let r = Resizer::new();
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
}

impl Resizer {
    /// Create a new bilinear resizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Bilinear)),
        }
    }

    /// Redimensionne `src` dans la boîte `max_width`×`max_height` en
    /// préservant le ratio d'aspect.
    ///
    /// # Errors
    /// `InvalidDimensions` si la source est vide ou si les buffers ne
    /// correspondent pas aux dimensions annoncées.
    ///
    /// # Example
    /// ```
    /// use gc_core::frame::FrameBuffer;
    /// use gc_source::resize::Resizer;
    /// let mut r = Resizer::new();
    /// let src = FrameBuffer::new(200, 100);
    /// let dst = r.resize_to_fit(&src, 150, 150).unwrap();
    /// assert_eq!((dst.width, dst.height), (150, 75));
    /// ```
    pub fn resize_to_fit(
        &mut self,
        src: &FrameBuffer,
        max_width: u32,
        max_height: u32,
    ) -> Result<FrameBuffer, ConvertError> {
        let (dst_w, dst_h) = fit_dimensions(src.width, src.height, max_width, max_height)?;

        if src.width == dst_w && src.height == dst_h {
            return Ok(FrameBuffer {
                data: src.data.clone(),
                width: dst_w,
                height: dst_h,
            });
        }

        // Copie forcée par l'API fast_image_resize (&mut sur la source).
        let mut src_buf = src.data.clone();
        let src_image = Image::from_slice_u8(src.width, src.height, &mut src_buf, PixelType::U8x4)
            .map_err(|_| ConvertError::InvalidDimensions {
                width: src.width,
                height: src.height,
            })?;

        let mut dst = FrameBuffer::new(dst_w, dst_h);
        let mut dst_image = Image::from_slice_u8(dst_w, dst_h, &mut dst.data, PixelType::U8x4)
            .map_err(|_| ConvertError::InvalidDimensions {
                width: dst_w,
                height: dst_h,
            })?;

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .map_err(|_| ConvertError::InvalidDimensions {
                width: dst_w,
                height: dst_h,
            })?;

        log::debug!(
            "Redimensionnement {}×{} → {dst_w}×{dst_h}",
            src.width,
            src.height
        );
        Ok(dst)
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}
