//! A file picked in an `<input type="file">` plus its local preview URL.

/// User-selected file. In the browser it wraps the `web_sys::File` and an
/// object URL used for the preview; release the URL with `revoke_preview`.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub preview_url: String,
    #[cfg(feature = "hydrate")]
    file: web_sys::File,
}

impl SelectedFile {
    /// Take the first file of a file input's selection.
    #[cfg(feature = "hydrate")]
    pub fn from_input(input: &web_sys::HtmlInputElement) -> Option<Self> {
        let file = input.files()?.get(0)?;
        let preview_url = web_sys::Url::create_object_url_with_blob(&file).unwrap_or_default();
        Some(Self { name: file.name(), preview_url, file })
    }

    #[cfg(feature = "hydrate")]
    pub fn file(&self) -> &web_sys::File {
        &self.file
    }

    /// Release the object URL backing the preview.
    pub fn revoke_preview(&self) {
        #[cfg(feature = "hydrate")]
        {
            if !self.preview_url.is_empty() {
                let _ = web_sys::Url::revoke_object_url(&self.preview_url);
            }
        }
    }
}
