use anyhow::{Context, Result};
use linedit_config::Config;
use linedit_engine::{TextBuffer, io};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::{env, process};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <file>", args[0]);
        process::exit(1);
    }
    let file_path = PathBuf::from(&args[1]);

    // Buffer capacity comes from the config file when present
    let max_capacity = match Config::load() {
        Ok(Some(config)) => config.max_capacity,
        Ok(None) => linedit_config::DEFAULT_MAX_CAPACITY,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    run(&file_path, max_capacity, &mut input, &mut output)
}

fn run(
    path: &Path,
    max_capacity: usize,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    let content = io::read_file(path, max_capacity)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    let mut buffer = TextBuffer::from_bytes(&content, max_capacity)?;

    writeln!(output, "Contents of {}:", path.display())?;
    for index in 0..buffer.line_count() {
        if let Some(line) = buffer.line(index) {
            writeln!(output, "{index:>4}  {}", String::from_utf8_lossy(line))?;
        }
    }

    let answer = prompt(input, output, "Line to replace (0-based): ")?;
    let line_index: usize = answer
        .trim()
        .parse()
        .context("Line number must be a non-negative integer")?;

    // One trailing newline from read_line is stripped by the engine
    let replacement = prompt(input, output, "New text: ")?;

    match buffer.replace_line(line_index, replacement.as_bytes()) {
        Ok(patch) => {
            if patch.truncated() {
                eprintln!(
                    "Warning: replacement truncated, {} byte(s) dropped to fit the {} byte capacity",
                    patch.dropped, max_capacity
                );
            }
        }
        Err(e) => {
            // Hard failure: report and abort before the write-back step
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }

    io::write_file(path, buffer.as_bytes())
        .with_context(|| format!("Failed to write '{}'", path.display()))?;

    writeln!(output, "Wrote {} ({} bytes)", path.display(), buffer.len())?;
    Ok(())
}

fn prompt(input: &mut impl BufRead, output: &mut impl Write, message: &str) -> Result<String> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("Unexpected end of input");
    }
    Ok(line)
}
