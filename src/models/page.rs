//! Rendered pages and the images that illustrate them

/// Name of the page written for a situation
pub fn page_file_name(choice: &str) -> String {
    format!("situation_{}.html", choice)
}

/// Name an option image is staged under, whatever its original extension
pub fn image_file_name(option: &str) -> String {
    format!("{}.png", option)
}

/// User supplied picture for one option
#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub option: String,
    pub content: Vec<u8>,
}

impl ImageAsset {
    pub fn new(option: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            option: option.into(),
            content,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub choice: String,
    /// 1-based data row the page came from
    pub row: usize,
    pub file_name: String,
    pub html: String,
    /// Options whose header cell shows an image
    pub illustrated_options: Vec<String>,
}
