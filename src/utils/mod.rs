use url::Url;

/// Returns true only for a well-formed absolute URL whose scheme is `https`.
pub fn is_valid_https_link(input: &str) -> bool {
    match Url::parse(input) {
        Ok(parsed) => parsed.scheme() == "https",
        Err(_) => false,
    }
}

/// Derive a filename from the part of the URL after its last `/`.
///
/// A trailing slash yields an empty name and a slash-free input is returned
/// whole; the save dialog treats the result as a suggestion, so neither case
/// is corrected here.
pub fn file_name_from_url(file_url: &str) -> String {
    match file_url.rfind('/') {
        Some(pos) => file_url[pos + 1..].to_string(),
        None => file_url.to_string(),
    }
}
