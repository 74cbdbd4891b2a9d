use std::collections::BTreeMap;
use std::path::Path;

use clap::{Parser, Subcommand};
use serde::Serialize;

use docblock_parser::DocBlock;

mod reflect;
use reflect::FileSource;

#[derive(Parser)]
#[command(name = "docblock")]
#[command(about = "docblock — doc comment tag and comment extractor")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a file's contents as one doc block and print tags and comments
    Parse {
        /// Input file containing a doc comment
        path: String,

        /// Print a JSON object instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Print the classified token groups of a file's contents
    Tokens {
        /// Input file containing a doc comment
        path: String,
    },

    /// Look up the doc block of a member declared in a source file
    Member {
        /// Source file to scan
        path: String,

        /// Owner declaration (class, struct, impl target)
        owner: String,

        /// Member name
        member: String,

        /// Print a JSON object instead of plain text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse { path, json } => cmd_parse(&path, json),
        Command::Tokens { path } => cmd_tokens(&path),
        Command::Member {
            path,
            owner,
            member,
            json,
        } => cmd_member(&path, &owner, &member, json),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

/// JSON shape for `--json` output.
#[derive(Serialize)]
struct Report<'a> {
    tags: &'a BTreeMap<String, String>,
    comments: &'a [String],
}

fn print_block(block: &DocBlock, json: bool) {
    if json {
        let report = Report {
            tags: block.tags(),
            comments: block.comments(),
        };
        match serde_json::to_string_pretty(&report) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("Error serializing output: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    for comment in block.comments() {
        println!("{comment}");
    }

    if !block.tags().is_empty() {
        if !block.comments().is_empty() {
            println!();
        }
        for (name, value) in block.tags() {
            println!("@{name}: {value}");
        }
    }
}

fn cmd_parse(path: &str, json: bool) {
    let source = read_source(path);
    let block = DocBlock::parse(&source);
    print_block(&block, json);
}

fn cmd_tokens(path: &str) {
    let source = read_source(path);
    print!("{}", docblock_lexer::tokenize(&source).dump());
}

fn cmd_member(path: &str, owner: &str, member: &str, json: bool) {
    let source = read_source(path);
    let file = FileSource::new(&source);

    match DocBlock::for_member(&file, owner, member) {
        Ok(block) => print_block(&block, json),
        Err(e) => {
            eprintln!("Lookup error: {e}");
            std::process::exit(1);
        }
    }
}
