use crate::error::ContentError;
use crate::refs::{ObjectReferences, RefType};
use crate::Pt;
use image::{ColorType, DynamicImage, ImageFormat};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};
use std::path::Path;

/// Decoded pixel data, kept in whatever form embeds most cheaply
pub enum RasterImageType {
    /// RGB JPEG files are embedded byte-for-byte with a DCT filter
    DirectlyEmbeddableJpeg(Vec<u8>),
    /// Everything else is re-encoded as deflated RGB, with an alpha mask if needed
    Image(DynamicImage),
}

/// A raster image that can be placed on any number of pages. The source file is
/// read completely when loading, so no file handle outlives [Image::load].
pub struct Image {
    pub image: RasterImageType,
    pub width: u32,
    pub height: u32,
}

struct EncodeOutput {
    filter: Filter,
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

impl Image {
    /// Read and decode an image from disk. Any failure to read, recognise or decode
    /// the file, or an image without pixels, is reported as a [ContentError].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Image, ContentError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| ContentError::ImageRead {
            path: path.to_owned(),
            source,
        })?;

        let decode_error = |source| ContentError::ImageDecode {
            path: path.to_owned(),
            source,
        };
        let format = image::guess_format(&data).map_err(decode_error)?;
        let image = image::load_from_memory_with_format(&data, format).map_err(decode_error)?;

        if image.width() == 0 || image.height() == 0 {
            return Err(ContentError::EmptyImage {
                path: path.to_owned(),
            });
        }

        log::debug!(
            "loaded {:?} image {} ({}x{})",
            format,
            path.display(),
            image.width(),
            image.height()
        );

        match (format, image.color()) {
            (ImageFormat::Jpeg, ColorType::Rgb8) => Ok(Image {
                width: image.width(),
                height: image.height(),
                image: RasterImageType::DirectlyEmbeddableJpeg(data),
            }),
            _ => Ok(Self::new_raster(image)),
        }
    }

    /// Wrap an already decoded image
    pub fn new_raster(image: DynamicImage) -> Image {
        Image {
            width: image.width(),
            height: image.height(),
            image: RasterImageType::Image(image),
        }
    }

    /// The height the image takes up when drawn `width` wide, keeping its aspect ratio
    pub fn scaled_height(&self, width: Pt) -> Pt {
        width * (self.height as f32 / self.width as f32)
    }

    fn encode(&self) -> EncodeOutput {
        match &self.image {
            RasterImageType::DirectlyEmbeddableJpeg(bytes) => EncodeOutput {
                filter: Filter::DctDecode,
                bytes: bytes.clone(),
                mask: None,
            },
            RasterImageType::Image(image) => {
                let level = CompressionLevel::DefaultLevel as u8;

                let mask = image.color().has_alpha().then(|| {
                    let alphas: Vec<u8> = image.to_rgba8().pixels().map(|p| p.0[3]).collect();
                    compress_to_vec_zlib(&alphas, level)
                });

                let bytes = compress_to_vec_zlib(image.to_rgb8().as_raw(), level);

                EncodeOutput {
                    filter: Filter::FlateDecode,
                    bytes,
                    mask,
                }
            }
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, image_index: usize, writer: &mut Pdf) {
        let id = refs.gen(RefType::Image(image_index));
        let encoded = self.encode();

        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));

        let mut image = writer.image_xobject(id, encoded.bytes.as_slice());
        image.filter(encoded.filter);
        image.width(self.width as i32);
        image.height(self.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);
        if let Some(mask_id) = mask_id {
            image.s_mask(mask_id);
        }
        image.finish();

        // add a transparency mask if we have one
        if let (Some(mask_id), Some(mask)) = (mask_id, encoded.mask.as_ref()) {
            let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }
    }
}
