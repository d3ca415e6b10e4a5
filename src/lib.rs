//! php2js: translate a small subset of PHP into JavaScript.
//!
//! The work is split across the workspace crates:
//! - `php2js-scanner` / `php2js-parser` - PHP source (or a php-parser JSON
//!   dump) to syntax tree
//! - `php2js-emitter` - syntax tree to JavaScript text
//!
//! This crate ties them together ([`convert`], [`convert_source`],
//! [`convert_ast_json`]) and hosts the `php2js` command-line tool.
//!
//! ```no_run
//! let js = php2js::convert("page_script.php")?;
//! println!("{js}");
//! # Ok::<(), php2js::ConvertError>(())
//! ```

pub mod driver;
pub use driver::{
    ConvertError, conversion_pool, convert, convert_ast_json, convert_source, parse_php,
};

pub mod cli;
pub mod tracing_config;

pub use php2js_emitter::{EmitContext, EmitError};
pub use php2js_parser::{Node, NodeKind, ParseError};
