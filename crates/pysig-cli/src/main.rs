//! Python signature dump tool
//!
//! Reads a stub file (or stdin), parses every signature line, and prints
//! each parsed signature with its mapped target types.

use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use pysig::{find_signature, parse_signatures, PythonFunctionSignature, TypeMap};

mod cli;

use cli::{Cli, Format};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let opts = twyg::LoggerOpts {
            coloured: true,
            file: None,
            level: "debug".to_string(),
            report_caller: true,
        };
        match twyg::setup_logger(&opts) {
            Ok(_) => {}
            Err(error) => panic!("Could not setup logger: {:?}", error),
        };
    }

    let input = read_input(cli.file.as_deref())?;
    log::debug!("scanning {} line(s)", input.lines().count());

    let signatures = if cli.first {
        find_signature(&input).into_iter().collect()
    } else {
        parse_signatures(&input)
    };

    if signatures.is_empty() {
        eprintln!("{} no function signatures found", "Error:".red().bold());
        std::process::exit(1);
    }

    let type_map = TypeMap::default();

    match cli.format {
        Format::Text => print_text(&signatures, &type_map),
        Format::Json => print_json(&signatures, &type_map)?,
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

fn print_text(signatures: &[PythonFunctionSignature], type_map: &TypeMap) {
    for signature in signatures {
        let keyword = if signature.is_async { "async def" } else { "def" };
        println!("{} {}", keyword.cyan(), signature.name.bold());

        for parameter in &signature.parameters {
            let prefix = if parameter.is_star {
                "*"
            } else if parameter.is_double_star {
                "**"
            } else {
                ""
            };
            let annotation = parameter
                .ty
                .as_ref()
                .map(|ty| ty.to_string())
                .unwrap_or_else(|| "-".to_string());
            let mapped = type_map.map_optional(parameter.ty.as_ref());
            let default = parameter
                .default
                .as_ref()
                .map(|value| format!(" = {}", value))
                .unwrap_or_default();

            println!(
                "  {}{}: {} -> {}{}",
                prefix,
                parameter.name,
                annotation.yellow(),
                mapped.to_string().green(),
                default.dimmed()
            );
        }

        let return_type = type_map.map_optional(signature.return_type.as_ref());
        println!("  {} {}", "returns".dimmed(), return_type.to_string().green());
    }
}

fn print_json(signatures: &[PythonFunctionSignature], type_map: &TypeMap) -> Result<()> {
    let values: Vec<_> = signatures
        .iter()
        .map(|signature| {
            serde_json::json!({
                "name": signature.name,
                "async": signature.is_async,
                "parameters": signature
                    .parameters
                    .iter()
                    .map(|parameter| {
                        serde_json::json!({
                            "name": parameter.name,
                            "annotation": parameter.ty.as_ref().map(|ty| ty.to_string()),
                            "target_type": type_map
                                .map_optional(parameter.ty.as_ref())
                                .to_string(),
                            "default": parameter.default.as_ref().map(|value| value.to_string()),
                            "star": parameter.is_star,
                            "double_star": parameter.is_double_star,
                        })
                    })
                    .collect::<Vec<_>>(),
                "return_type": signature.return_type.as_ref().map(|ty| ty.to_string()),
                "target_return_type": type_map
                    .map_optional(signature.return_type.as_ref())
                    .to_string(),
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&values)?);
    Ok(())
}
