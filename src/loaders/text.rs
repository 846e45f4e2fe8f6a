use anyhow::{bail, Context, Result};
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);
const USER_AGENT: &str = concat!("term-scatter/", env!("CARGO_PKG_VERSION"));

/// Loads the source document for analysis.
///
/// `http(s)://` sources are fetched with a blocking client; anything else is
/// treated as a local file path. This is the only suspension point in the
/// pipeline: on failure the pure analysis stage never runs, and the caller
/// decides whether to abort or show an empty scene with the error.
pub fn load_source_text(source: &str) -> Result<String> {
    if source.starts_with("http://") || source.starts_with("https://") {
        fetch_text(source)
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read source text file: {}", source))
    }
}

fn fetch_text(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(url)
        .header("Accept", "text/plain,text/*;q=0.9,*/*;q=0.8")
        .send()
        .with_context(|| format!("Request for source text failed: {}", url))?;

    let status = response.status();
    if !status.is_success() {
        bail!("Source text request returned {} for {}", status, url);
    }

    response
        .text()
        .with_context(|| format!("Failed to read source text body from {}", url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_local_files() {
        let dir = std::env::temp_dir().join("term_scatter_loader_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sample.txt");
        std::fs::write(&path, "Emma. Knightley churchill").unwrap();

        let text = load_source_text(path.to_str().unwrap()).unwrap();
        assert_eq!(text, "Emma. Knightley churchill");
    }

    #[test]
    fn missing_file_is_an_error_with_context() {
        let err = load_source_text("/definitely/not/here.txt").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read source text file"));
    }
}
