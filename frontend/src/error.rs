use thiserror::Error;

/// Every user-visible failure in the widget. All variants are handled at
/// the interaction that produced them and rendered as inline text; none
/// abort the page.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum AppError {
    #[error("Please upload an image file.")]
    InvalidFileType,

    #[error("Failed to read the image. Please try again.")]
    FileRead,

    #[error("Please upload a photo first.")]
    NoImageSelected,

    /// Non-2xx from the generation endpoint; the message is the response
    /// body, or a status line when the body was empty.
    #[error("{0}")]
    Http(String),

    /// The endpoint answered 2xx but reported `success: false`.
    #[error("{0}")]
    Generation(String),

    #[error("No image URL found in the response.")]
    MissingImageUrl,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Could not download the image. Please try again.")]
    Download,
}
