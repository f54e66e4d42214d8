/// A precondition violated while building a configuration tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A submenu was built without any section.
    #[error("submenu `{title}` was built without any sections")]
    EmptySubmenu {
        /// Title of the offending submenu.
        title: String,
    },

    /// The pixel buffer of a bitmap does not match its dimensions.
    #[error("a {width}x{height} RGBA bitmap needs {expected} bytes, got {actual}")]
    InvalidBitmap {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
        /// Expected buffer length.
        expected: usize,
        /// Provided buffer length.
        actual: usize,
    },
}
