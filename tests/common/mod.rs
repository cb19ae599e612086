//! Shared fixtures for integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Request headers as copied from a browser's network panel.
#[allow(dead_code)]
pub const BROWSER_HEADERS: &str = "GET /search?q=rust HTTP/1.1\r\n\
Host: www.example.com\r\n\
User-Agent: Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/120.0\r\n\
Accept: text/html,application/xhtml+xml\r\n\
Accept-Language: en-US,en;q=0.5\r\n\
Accept-Encoding: gzip, deflate, br\r\n\
Referer: https://www.example.com/\r\n\
Cookie: session=abc123\r\n\
Upgrade-Insecure-Requests: 1\r\n\
Sec-Fetch-Dest: document\r\n\
DNT: 1\r\n";

/// Write `content` to a temporary file that lives as long as the handle.
#[allow(dead_code)]
pub fn temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
