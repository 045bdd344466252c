use thiserror::Error;

/// Ошибки подключения заголовка категории к странице
#[derive(Debug, Error)]
pub enum HeadingError {
    #[error("window object is not available")]
    NoWindow,

    #[error("document object is not available")]
    NoDocument,

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("failed to add event listener: {0}")]
    Listener(String),
}
