//! 8-bit RGBA rasters: the borrowed input view and an owned buffer.
//!
//! The detector consumes [`ImageRgba8`], a view over interleaved RGBA bytes
//! with an explicit row stride. [`RgbaBuffer`] owns its bytes and backs both
//! decoded files and the scaled scratch copy rendered by the pipeline; it is
//! released when it goes out of scope.
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

#[derive(Clone, Copy, Debug)]
pub struct ImageRgba8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows, >= 4 * w
    pub data: &'a [u8],
}

impl<'a> ImageRgba8<'a> {
    /// Tightly packed view (`stride == 4 * w`).
    pub fn packed(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            stride: w * CHANNELS,
            data,
        }
    }

    /// True when the view holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// True when `stride` covers a row and `data` holds every addressed row.
    /// Row accessors index `data` directly and panic on a view that fails this.
    pub fn fits_data(&self) -> bool {
        if self.is_empty() {
            return true;
        }
        let row_len = self.w * CHANNELS;
        self.stride >= row_len && self.data.len() >= (self.h - 1) * self.stride + row_len
    }

    /// Borrow the `4 * w` bytes of row `y`.
    #[inline]
    pub fn row_bytes(&self, y: usize) -> &'a [u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * CHANNELS]
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 4] {
        let i = y * self.stride + x * CHANNELS;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Copy the view into an owned, tightly packed buffer.
    pub fn to_buffer(&self) -> RgbaBuffer {
        let mut data = Vec::with_capacity(self.w * self.h * CHANNELS);
        for y in 0..self.h {
            data.extend_from_slice(self.row_bytes(y));
        }
        RgbaBuffer {
            width: self.w,
            height: self.h,
            data,
        }
    }
}

/// Owned, tightly packed RGBA raster.
#[derive(Clone, Debug)]
pub struct RgbaBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbaBuffer {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageRgba8` view
    pub fn as_view(&self) -> ImageRgba8<'_> {
        ImageRgba8::packed(self.width, self.height, &self.data)
    }

    /// Render this raster at `width × height` with a bilinear (triangle)
    /// filter, consuming the source.
    pub fn resized(self, width: usize, height: usize) -> RgbaBuffer {
        if width == self.width && height == self.height {
            return self;
        }
        let Some(src) = RgbaImage::from_raw(self.width as u32, self.height as u32, self.data)
        else {
            // Buffers are built packed, so only an empty source ends up here.
            return RgbaBuffer {
                width,
                height,
                data: vec![0; width * height * CHANNELS],
            };
        };
        let out = imageops::resize(&src, width as u32, height as u32, FilterType::Triangle);
        RgbaBuffer {
            width,
            height,
            data: out.into_raw(),
        }
    }
}

impl From<RgbaImage> for RgbaBuffer {
    fn from(img: RgbaImage) -> Self {
        let width = img.width() as usize;
        let height = img.height() as usize;
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}
