//! Header Code Generator Library
//!
//! Turns raw HTTP header lines, as copied from browser developer tools or a
//! proxy log, into `AddHeader` statements for a request object.
//!
//! ```text
//! Content-Type: text/html      httpRequest.AddHeader(HttpHeader.ContentType,"text/html");
//! Cookie: abc=1           →    (dropped)
//! X-Custom: foo                httpRequest.AddHeader("X-Custom","foo");
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod observability;
pub mod output;
pub mod translate;

pub use config::CodegenConfig;
pub use error::AppError;
pub use translate::{translate, HeaderLineTranslator, HeaderTables, StatementStyle, Translation};
