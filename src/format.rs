use std::fmt;

use anyhow::anyhow;
use nom::{branch::alt, bytes::complete::tag, combinator::value, IResult};

const PNG_SIGNATURE: &[u8; 8] = b"\x89PNG\x0d\x0a\x1a\x0a";
const JPEG_SIGNATURE: &[u8; 3] = b"\xff\xd8\xff";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
}
impl ImageKind {
    /// Kind implied by the file name's suffix. Only `.png` and `.jpg` are accepted.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        if file_name.ends_with(".png") {
            Some(Self::Png)
        } else if file_name.ends_with(".jpg") {
            Some(Self::Jpeg)
        } else {
            None
        }
    }

    /// Detects the kind from the leading bytes of the file, regardless of its name.
    pub fn sniff(bytes: &[u8]) -> anyhow::Result<Self> {
        let (_, kind) = parse_signature(bytes).map_err(|_| anyhow!("image: unknown format"))?;
        Ok(kind)
    }

    pub(crate) fn image_format(self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
            Self::Jpeg => image::ImageFormat::Jpeg,
        }
    }
}
impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Png => f.write_str("png"),
            Self::Jpeg => f.write_str("jpeg"),
        }
    }
}

fn parse_signature(input: &[u8]) -> IResult<&[u8], ImageKind> {
    alt((
        value(ImageKind::Png, tag(PNG_SIGNATURE)),
        value(ImageKind::Jpeg, tag(JPEG_SIGNATURE)),
    ))(input)
}
