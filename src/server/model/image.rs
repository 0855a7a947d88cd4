//! Stored image metadata and the supported image formats.

use std::fmt;

use crate::model::image::ImageDto;

/// Image formats accepted for upload, stored by their numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Png,
    Webp,
    Jpeg,
}

impl ImageType {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Png),
            2 => Some(Self::Webp),
            3 => Some(Self::Jpeg),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Png => 1,
            Self::Webp => 2,
            Self::Jpeg => 3,
        }
    }

    pub fn file_extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Webp => "webp",
            Self::Jpeg => "jpg",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Webp => "image/webp",
            Self::Jpeg => "image/jpeg",
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_extension())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageMetaData {
    pub id: i32,
    pub description: String,
    pub image_type: ImageType,
    /// File name inside the image directory.
    pub path: String,
}

impl ImageMetaData {
    /// Converts an image row.
    ///
    /// # Returns
    /// - `Some(ImageMetaData)` - Row with a known type code
    /// - `None` - The stored type code is not a supported format
    pub fn from_entity(entity: entity::image::Model) -> Option<Self> {
        Some(Self {
            id: entity.id,
            image_type: ImageType::from_code(entity.image_type)?,
            description: entity.description,
            path: entity.path,
        })
    }

    /// File name an image with this id and type is stored under.
    pub fn file_name(id: i32, image_type: ImageType) -> String {
        format!("{}.{}", id, image_type.file_extension())
    }

    pub fn into_dto(self) -> ImageDto {
        ImageDto {
            id: self.id,
            description: self.description,
            image_type: self.image_type.code(),
        }
    }
}
