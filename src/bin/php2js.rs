#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use php2js::cli::args::CliArgs;
use php2js::cli::inputs::{collect_inputs, output_paths};
use php2js::cli::reporter::Reporter;
use php2js::{ConvertError, conversion_pool, convert, convert_ast_json, parse_php};

const EXIT_SUCCESS: i32 = 0;
const EXIT_CONVERSION_FAILED: i32 = 1;

/// What one input produced. Trees are serialized (and dropped) on the
/// conversion thread, which has the deep stack they may need.
enum Translated {
    Js(String),
    Ast(serde_json::Result<String>),
}

fn main() -> Result<()> {
    // No-op unless PHP2JS_LOG is set.
    php2js::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let files = collect_inputs(&args.inputs, args.input_extension())?;
    let pretty = args
        .pretty_errors
        .unwrap_or_else(|| std::io::stderr().is_terminal());

    let extension = if args.dump_ast { "json" } else { "js" };
    let outputs = match &args.out_dir {
        Some(out_dir) => Some(output_paths(out_dir, &files, extension)?),
        None => None,
    };

    // Inputs are independent; collect keeps them in command-line order.
    let pool = conversion_pool().context("failed to start conversion threads")?;
    let results: Vec<(&PathBuf, Result<Translated, ConvertError>)> = pool.install(|| {
        files
            .par_iter()
            .map(|path| (path, translate(path, &args)))
            .collect()
    });

    if let Some(out_dir) = &args.out_dir {
        std::fs::create_dir_all(out_dir)
            .with_context(|| format!("failed to create {}", out_dir.display()))?;
    }

    let mut errors = Vec::new();
    let mut printed = 0usize;
    for (index, (path, result)) in results.into_iter().enumerate() {
        let translated = match result {
            Ok(translated) => translated,
            Err(err) => {
                errors.push(err);
                continue;
            }
        };
        let text = match translated {
            Translated::Js(js) => js,
            Translated::Ast(json) => {
                json.with_context(|| format!("failed to serialize AST of {}", path.display()))?
            }
        };

        match outputs.as_ref().and_then(|outputs| outputs.get(index)) {
            Some(out) => {
                std::fs::write(out, format!("{text}\n"))
                    .with_context(|| format!("failed to write {}", out.display()))?;
                tracing::debug!(input = %path.display(), output = %out.display(), "wrote");
            }
            None => {
                if printed > 0 {
                    println!();
                }
                println!("{text}");
                printed += 1;
            }
        }
    }

    if errors.is_empty() {
        std::process::exit(EXIT_SUCCESS);
    }
    eprintln!("{}", Reporter::new(pretty).render(&errors));
    eprintln!();
    eprintln!(
        "Found {} error{}.",
        errors.len(),
        if errors.len() == 1 { "" } else { "s" }
    );
    std::process::exit(EXIT_CONVERSION_FAILED);
}

fn translate(path: &Path, args: &CliArgs) -> Result<Translated, ConvertError> {
    if args.dump_ast {
        let source = read(path)?;
        let stmts = parse_php(&source, &path.display().to_string())?;
        return Ok(Translated::Ast(serde_json::to_string_pretty(&stmts)));
    }
    if args.ast_json {
        let json = read(path)?;
        return convert_ast_json(&json, &path.display().to_string()).map(Translated::Js);
    }
    convert(path).map(Translated::Js)
}

fn read(path: &Path) -> Result<String, ConvertError> {
    std::fs::read_to_string(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })
}
