use anyhow::{Context, Result};

/// Open a lead's link in the user's default browser
///
/// # Arguments
/// * `url` - The URL to open (website, LinkedIn profile or map search)
///
/// # Errors
/// Returns error if browser cannot be opened (e.g., no browser available)
pub fn open_url(url: &str) -> Result<()> {
    tracing::debug!("Opening {}", url);
    webbrowser::open(url)
        .with_context(|| format!("Failed to open browser for URL: {}", url))?;
    Ok(())
}
