use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use maorihanga::explain::{explain, format_text};
use maorihanga::trace_init::init_tracing;
use maorihanga::{translate, GlyphTable};

const DEMO_TEXT: &str = "Aotearoa, tau, wai, koe, rua";

#[derive(Parser)]
#[command(name = "maorihanga", about = "Māori to Hangul Jamo transliteration")]
struct Cli {
    /// Path to a custom glyph table TOML (optional)
    #[arg(long, global = true)]
    table: Option<PathBuf>,
    /// Directory for JSONL trace logs (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text (reads stdin line by line when no text is given)
    Translate {
        /// Māori text to transliterate
        text: Vec<String>,
        /// Output as JSON lines instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show syllable boundaries and glyph choices for a text
    Explain {
        /// Māori text to explain
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the effective glyph table
    Table,

    /// Transliterate a built-in sample sentence
    Demo,
}

#[derive(Serialize)]
struct TranslateRecord<'a> {
    input: &'a str,
    output: String,
}

fn load_table(path: &Path) {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read glyph table {}: {}", path.display(), e);
        process::exit(1);
    });
    GlyphTable::init_custom(content).unwrap_or_else(|e| {
        eprintln!("Invalid glyph table {}: {}", path.display(), e);
        process::exit(1);
    });
}

fn translate_or_exit(text: &str) -> String {
    translate(text).unwrap_or_else(|e| {
        eprintln!("Failed to translate {:?}: {}", text, e);
        process::exit(1);
    })
}

fn print_translation(input: &str, json: bool) {
    let output = translate_or_exit(input);
    if json {
        let record = TranslateRecord { input, output };
        let line = serde_json::to_string(&record).unwrap_or_else(|e| {
            eprintln!("Failed to serialize: {}", e);
            process::exit(1);
        });
        println!("{line}");
    } else {
        println!("{output}");
    }
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        init_tracing(dir);
    }
    if let Some(path) = &cli.table {
        load_table(path);
    }

    match cli.command {
        Command::Translate { text, json } => {
            if !text.is_empty() {
                print_translation(&text.join(" "), json);
                return;
            }
            for line in io::stdin().lock().lines() {
                let line = line.unwrap_or_else(|e| {
                    eprintln!("Failed to read stdin: {}", e);
                    process::exit(1);
                });
                print_translation(&line, json);
            }
        }

        Command::Explain { text, json } => {
            let explanation = explain(GlyphTable::global(), &text).unwrap_or_else(|e| {
                eprintln!("Failed to explain {:?}: {}", text, e);
                process::exit(1);
            });
            if json {
                let out = serde_json::to_string_pretty(&explanation).unwrap_or_else(|e| {
                    eprintln!("Failed to serialize: {}", e);
                    process::exit(1);
                });
                println!("{out}");
            } else {
                print!("{}", format_text(&explanation));
            }
        }

        Command::Table => {
            let table = GlyphTable::global();
            for (key, glyph) in table.entries() {
                println!("{:<8} {}", key, glyph);
            }
            println!("{:<8} {}", "(long)", table.long_mark());
        }

        Command::Demo => {
            println!("Original Māori: {DEMO_TEXT}");
            println!("---");
            println!("Māorihanga:");
            println!("{}", translate_or_exit(DEMO_TEXT));
        }
    }
}
