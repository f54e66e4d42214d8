//! Icon descriptors and the resolver capability that turns them into images.

use bytes::Bytes;
use smol_str::SmolStr;

use crate::Error;

/// A platform-agnostic symbolic icon name, e.g. `square.and.pencil`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SymbolName(SmolStr);

impl SymbolName {
    /// Creates a new [`SymbolName`].
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SymbolName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for SymbolName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// A raw RGBA8 bitmap supplied by the application.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Bytes,
}

impl Bitmap {
    /// Creates a [`Bitmap`] from straight RGBA8 pixels, row by row.
    pub fn from_rgba(width: u32, height: u32, pixels: impl Into<Bytes>) -> Result<Self, Error> {
        let pixels = pixels.into();
        let expected = width as usize * height as usize * 4;

        if pixels.len() != expected {
            return Err(Error::InvalidBitmap {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The RGBA8 pixel data.
    #[must_use]
    pub fn pixels(&self) -> &Bytes {
        &self.pixels
    }
}

/// The icon of a [`Node`](crate::Node): a symbolic name or a raw bitmap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Icon {
    /// An icon looked up by name through an [`IconResolver`].
    Symbol(SymbolName),
    /// An icon provided as pixels; resolvers pass it through.
    Bitmap(Bitmap),
}

impl Icon {
    /// Creates a symbolic [`Icon`].
    pub fn symbol(name: impl Into<SymbolName>) -> Self {
        Self::Symbol(name.into())
    }

    /// Creates a bitmap [`Icon`].
    pub fn bitmap(bitmap: Bitmap) -> Self {
        Self::Bitmap(bitmap)
    }
}

impl From<SymbolName> for Icon {
    fn from(name: SymbolName) -> Self {
        Self::Symbol(name)
    }
}

impl From<Bitmap> for Icon {
    fn from(bitmap: Bitmap) -> Self {
        Self::Bitmap(bitmap)
    }
}

/// Turns icon descriptors into images a render target can display.
pub trait IconResolver {
    /// The displayable image handle of the render target.
    type Image: Clone;

    /// Looks up a symbolic name. Returns `None` if the name is unknown.
    fn symbol(&self, name: &SymbolName) -> Option<Self::Image>;

    /// Wraps a raw bitmap without altering it.
    fn bitmap(&self, bitmap: &Bitmap) -> Self::Image;

    /// Resolves an [`Icon`], falling back to no icon on a miss.
    fn resolve(&self, icon: &Icon) -> Option<Self::Image> {
        match icon {
            Icon::Symbol(name) => {
                let image = self.symbol(name);

                if image.is_none() {
                    log::debug!("No image for symbol `{}`, rendering without icon", name.as_str());
                }

                image
            }
            Icon::Bitmap(bitmap) => Some(self.bitmap(bitmap)),
        }
    }
}

impl<R> IconResolver for &R
where
    R: IconResolver + ?Sized,
{
    type Image = R::Image;

    fn symbol(&self, name: &SymbolName) -> Option<Self::Image> {
        (**self).symbol(name)
    }

    fn bitmap(&self, bitmap: &Bitmap) -> Self::Image {
        (**self).bitmap(bitmap)
    }

    fn resolve(&self, icon: &Icon) -> Option<Self::Image> {
        (**self).resolve(icon)
    }
}

/// An [`IconResolver`] that hands every descriptor through as an [`Icon`].
///
/// Useful for headless hosts and for targets that resolve names themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct Descriptors;

impl IconResolver for Descriptors {
    type Image = Icon;

    fn symbol(&self, name: &SymbolName) -> Option<Icon> {
        Some(Icon::Symbol(name.clone()))
    }

    fn bitmap(&self, bitmap: &Bitmap) -> Icon {
        Icon::Bitmap(bitmap.clone())
    }
}
