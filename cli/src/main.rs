//! pdfpages CLI - convert PDF files to JSON and Markdown

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfpages::convert::{
    convert_batch_with_progress, BatchInput, BatchOptions, BatchReport, FileFailure,
};
use pdfpages::{
    ConvertOptions, ConvertedFile, ExtractOptions, JsonFormat, MarkdownOptions, PdfConverter,
    PdfExtractor,
};

#[derive(Parser)]
#[command(name = "pdfpages")]
#[command(version)]
#[command(about = "Convert PDF files to JSON and Markdown with embedded images", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Input PDF files
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output directory
    #[arg(short, long, value_name = "DIR", env = "PDFPAGES_OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert PDF files to {name}.json and {name}.md
    Convert {
        /// Input PDF files
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", env = "PDFPAGES_OUTPUT")]
        output: Option<PathBuf>,

        #[command(flatten)]
        flags: ConvertFlags,

        /// Convert files in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Convert a PDF to JSON
    Json {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        flags: ConvertFlags,
    },

    /// Convert a PDF to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        flags: ConvertFlags,
    },

    /// Show document information
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Write each page's raw image streams to files
    Images {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

/// Flags shared by every converting command.
#[derive(clap::Args, Clone, Default)]
struct ConvertFlags {
    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// Keep going when a page's text or an image cannot be read
    #[arg(long)]
    lenient: bool,

    /// Skip embedded images
    #[arg(long)]
    no_images: bool,

    /// Use the detected image type in data URIs instead of image/png
    #[arg(long)]
    sniff_mime: bool,
}

impl ConvertFlags {
    fn convert_options(&self) -> ConvertOptions {
        let mut extract = ExtractOptions::new().with_images(!self.no_images);
        if self.lenient {
            extract = extract.lenient();
        }

        let mut markdown = MarkdownOptions::new();
        if self.sniff_mime {
            markdown = markdown.sniff_mime();
        }

        let json_format = if self.compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };

        ConvertOptions::new()
            .with_extract_options(extract)
            .with_markdown_options(markdown)
            .with_json_format(json_format)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            files,
            output,
            flags,
            parallel,
        }) => cmd_convert(&files, output.as_deref(), &flags, parallel),
        Some(Commands::Json {
            input,
            output,
            flags,
        }) => cmd_json(&input, output.as_deref(), &flags),
        Some(Commands::Markdown {
            input,
            output,
            flags,
        }) => cmd_markdown(&input, output.as_deref(), &flags),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Images { input, output }) => cmd_images(&input, output.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if inputs are provided
            if cli.files.is_empty() {
                println!("{}", "Usage: pdfpages <FILE>... [-o DIR]".yellow());
                println!("       pdfpages --help for more information");
                Ok(())
            } else {
                cmd_convert(
                    &cli.files,
                    cli.output.as_deref(),
                    &ConvertFlags::default(),
                    false,
                )
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    files: &[PathBuf],
    output: Option<&Path>,
    flags: &ConvertFlags,
    parallel: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(output_dir)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Reading files...");
    let (inputs, mut failed) = read_inputs(files);
    pb.inc(failed.len() as u64);

    pb.set_message("Converting...");
    let options = BatchOptions::new()
        .with_convert_options(flags.convert_options())
        .with_parallel(parallel);
    let outcomes = convert_batch_with_progress(&PdfConverter::new(), &inputs, &options, |_| {
        pb.inc(1)
    });
    let report = BatchReport::from(outcomes);
    failed.extend(report.failed);

    pb.set_message("Writing output...");
    let mut names = OutputNames::default();
    let mut written = Vec::new();
    for file in &report.converted {
        let stem = names.claim(file.basename());
        match write_outputs(output_dir, &stem, file) {
            Ok(paths) => written.push(paths),
            Err(e) => failed.push(FileFailure::new(&file.filename, e.to_string())),
        }
    }
    pb.finish_and_clear();

    for (json_path, md_path) in &written {
        println!("{} {}", "Saved".green(), json_path.display());
        println!("{} {}", "Saved".green(), md_path.display());
    }
    for failure in &failed {
        eprintln!("{}", failure.to_string().red());
    }

    println!(
        "\n{} {} of {} files converted",
        "Done!".green().bold(),
        written.len(),
        files.len()
    );

    if failed.is_empty() {
        Ok(())
    } else {
        Err(format!("{} file(s) failed", failed.len()).into())
    }
}

/// Read every file; unreadable files become failures instead of stopping the batch.
fn read_inputs(files: &[PathBuf]) -> (Vec<BatchInput>, Vec<FileFailure>) {
    let mut inputs = Vec::with_capacity(files.len());
    let mut failed = Vec::new();

    for path in files {
        match BatchInput::from_path(path) {
            Ok(input) => inputs.push(input),
            Err(e) => {
                log::warn!("Cannot read {}: {}", path.display(), e);
                failed.push(FileFailure::new(path.display().to_string(), e.to_string()));
            }
        }
    }

    (inputs, failed)
}

/// Output stems for one batch; a repeated basename gets `_2`, `_3`, ...
#[derive(Default)]
struct OutputNames {
    used: HashSet<String>,
}

impl OutputNames {
    fn claim(&mut self, basename: &str) -> String {
        let mut stem = basename.to_string();
        let mut n = 2;
        while !self.used.insert(stem.clone()) {
            stem = format!("{}_{}", basename, n);
            n += 1;
        }
        if stem != basename {
            log::warn!("{} already written in this batch, saving as {}", basename, stem);
        }
        stem
    }
}

/// Write `{stem}.json` and `{stem}.md` into `dir`.
fn write_outputs(
    dir: &Path,
    stem: &str,
    file: &ConvertedFile,
) -> std::io::Result<(PathBuf, PathBuf)> {
    let json_path = dir.join(format!("{}.json", stem));
    let md_path = dir.join(format!("{}.md", stem));
    fs::write(&json_path, &file.json)?;
    fs::write(&md_path, &file.markdown)?;
    Ok((json_path, md_path))
}

fn convert_single(
    input: &Path,
    flags: &ConvertFlags,
) -> Result<ConvertedFile, Box<dyn std::error::Error>> {
    let converter = PdfConverter::new();
    Ok(converter.convert_path(input, &flags.convert_options())?)
}

fn emit(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", content);
    }
    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    flags: &ConvertFlags,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = convert_single(input, flags)?;
    emit(&file.json, output)
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    flags: &ConvertFlags,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = convert_single(input, flags)?;
    emit(&file.markdown, output)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // Lenient so metadata is still shown when some page text is unreadable
    let extractor = PdfExtractor::open_with_options(input, ExtractOptions::new().lenient())?;
    let doc = extractor.extract()?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: PDF {}", "Format".bold(), extractor.version());
    println!("{}: {}", "Pages".bold(), doc.page_count());
    println!(
        "{}: {}",
        "Encrypted".bold(),
        if extractor.is_encrypted() { "Yes" } else { "No" }
    );

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let blank_pages = doc.pages().iter().filter(|page| page.is_blank()).count();
    println!("{}: {}", "Words".bold(), doc.word_count());
    println!("{}: {}", "Characters".bold(), doc.plain_text().chars().count());
    println!("{}: {}", "Images".bold(), doc.image_count());
    println!("{}: {}", "Blank pages".bold(), blank_pages);

    Ok(())
}

fn cmd_images(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let extractor = PdfExtractor::open(input)?;

    let output_dir = output.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(output_dir)?;

    let count = extract_images(&extractor, output_dir, |filename| {
        println!("{} {}", "Extracted".green(), filename);
    })?;

    println!("\n{} {} images extracted", "Done!".green().bold(), count);

    Ok(())
}

fn extract_images(
    extractor: &PdfExtractor,
    output_dir: &Path,
    mut on_write: impl FnMut(&str),
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut count = 0;
    for page_number in 1..=extractor.page_count() {
        for (idx, image) in extractor.page_images(page_number)?.iter().enumerate() {
            let filename = image.suggested_filename(page_number, idx + 1);
            fs::write(output_dir.join(&filename), &image.data)?;
            on_write(&filename);
            count += 1;
        }
    }
    Ok(count)
}

fn cmd_version() {
    println!("{} {}", "pdfpages".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF to JSON and Markdown converter");
    println!();
    println!("License: MIT");
}
