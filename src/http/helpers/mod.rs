pub mod url;

pub use url::UrlHelper;
