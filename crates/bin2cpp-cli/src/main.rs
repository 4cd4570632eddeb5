//! bin2cpp - Convert binary files into C++ source modules
//!
//! This tool embeds the bytes of a file (or of every file in a directory)
//! into a generated `.cpp`/`.h` pair exposing them through a shared accessor
//! class.

use anyhow::{bail, Context, Result};
use bin2cpp_core::request::is_valid_identifier;
use bin2cpp_core::{
    GenerationRequest, GeneratorRegistry, DEFAULT_BASE_CLASS, DEFAULT_CHUNK_SIZE,
    DEFAULT_GENERATOR, DEFAULT_NAMESPACE,
};
use clap::{Args, Parser};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn, Level};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

/// Convert binary files into C++ source modules embedding their contents
#[derive(Parser, Debug)]
#[command(name = "bin2cpp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    input: InputMode,

    /// Output directory for the generated files
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Identifier used for the class and getter names (single file mode)
    #[arg(short, long)]
    identifier: Option<String>,

    /// Name of the generated source file (single file mode, default: <identifier>.cpp)
    #[arg(long)]
    cppfile: Option<String>,

    /// Generator used to encode the file contents
    #[arg(short, long, env = "BIN2CPP_GENERATOR", default_value = DEFAULT_GENERATOR)]
    generator: String,

    /// Number of input bytes per emitted line
    #[arg(long, env = "BIN2CPP_CHUNKSIZE", default_value_t = DEFAULT_CHUNK_SIZE)]
    chunksize: usize,

    /// Namespace of the generated code
    #[arg(long, env = "BIN2CPP_NAMESPACE", default_value = DEFAULT_NAMESPACE)]
    namespace: String,

    /// Name of the shared base class
    #[arg(long, env = "BIN2CPP_BASECLASS", default_value = DEFAULT_BASE_CLASS)]
    baseclass: String,

    /// Overwrite existing output files
    #[arg(long = "override")]
    overwrite: bool,

    /// Do not emit the comment block at the top of generated files
    #[arg(long)]
    noheader: bool,

    /// Do not emit the save() method
    #[arg(long)]
    nosave: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct InputMode {
    /// Path to a single file to embed
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Path to a directory whose files are all embedded
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// List the available generators and exit
    #[arg(long)]
    list_generators: bool,
}

/// Assigns unique identifiers to the files of a directory
#[derive(Default)]
struct IdentifierRegistry {
    /// Maps case-folded identifier -> relative path it was assigned to
    seen: HashMap<String, PathBuf>,
    /// Statistics
    stats: RegistryStats,
}

#[derive(Default)]
struct RegistryStats {
    total_found: usize,
    conflicts_renamed: usize,
    skipped_existing: usize,
    written: usize,
    failed: usize,
}

impl IdentifierRegistry {
    fn new() -> Self {
        Self::default()
    }

    /// Compute a short hash of a relative path (first 8 chars of blake3)
    fn path_hash(relative: &Path) -> String {
        let hash = blake3::hash(relative.as_os_str().as_encoded_bytes());
        hash.to_hex()[..8].to_string()
    }

    /// Key under which an identifier is tracked
    ///
    /// Class names capitalize the first letter and include guards upper-case
    /// everything, so identifiers differing only in case collide.
    fn conflict_key(identifier: &str) -> String {
        identifier.to_ascii_uppercase()
    }

    /// Register a file and return the identifier to generate it under
    fn register(&mut self, relative: &Path) -> String {
        self.stats.total_found += 1;

        let base = identifier_from_filename(relative);
        let identifier = if self.seen.contains_key(&Self::conflict_key(&base)) {
            let renamed = format!("{}_{}", base, Self::path_hash(relative));
            info!(
                "Identifier conflict: {} -> {} ({})",
                base,
                renamed,
                relative.display()
            );
            self.stats.conflicts_renamed += 1;
            renamed
        } else {
            base
        };

        self.seen
            .insert(Self::conflict_key(&identifier), relative.to_path_buf());
        identifier
    }

    fn print_summary(&self) {
        info!(
            "Summary: {} found, {} conflicts renamed, {} skipped, {} written, {} failed",
            self.stats.total_found,
            self.stats.conflicts_renamed,
            self.stats.skipped_existing,
            self.stats.written,
            self.stats.failed
        );
    }
}

/// Derive a C++ identifier from a file name: `my-logo.png` becomes `my_logo_png`
fn identifier_from_filename(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut identifier: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    if !identifier.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        identifier.insert(0, '_');
    }
    identifier
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .init();

    let registry = GeneratorRegistry::with_defaults();

    if cli.input.list_generators {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    if registry.get(&cli.generator).is_none() {
        bail!(
            "Unknown generator '{}' (available: {})",
            cli.generator,
            registry.names().collect::<Vec<_>>().join(", ")
        );
    }

    // Dispatch based on input mode
    if let Some(ref file) = cli.input.file {
        process_single_file(&cli, &registry, file)
    } else if let Some(ref dir) = cli.input.dir {
        process_directory(&cli, &registry, dir)
    } else {
        bail!("Either --file or --dir must be specified")
    }
}

/// Build a request carrying the shared options of the command line
fn build_request(cli: &Cli, input: &Path, output: PathBuf, identifier: &str) -> GenerationRequest {
    GenerationRequest::new(input, output, identifier)
        .namespace(&cli.namespace)
        .base_class(&cli.baseclass)
        .chunk_size(cli.chunksize)
        .header_comment(!cli.noheader)
        .save_method(!cli.nosave)
}

/// Process a single input file
fn process_single_file(cli: &Cli, registry: &GeneratorRegistry, file: &Path) -> Result<()> {
    if !file.is_file() {
        bail!("Input path is not a file: {}", file.display());
    }

    let identifier = match &cli.identifier {
        Some(identifier) => identifier.clone(),
        None => identifier_from_filename(file),
    };
    if !is_valid_identifier(&identifier) {
        bail!("Invalid identifier: '{}'", identifier);
    }

    let cppfile = cli
        .cppfile
        .clone()
        .unwrap_or_else(|| format!("{}.cpp", identifier));

    fs_create_dir(&cli.output)?;
    let request = build_request(cli, file, cli.output.join(cppfile), &identifier);
    generate(cli, registry, &request)?;
    Ok(())
}

/// Process every file of a directory recursively
fn process_directory(cli: &Cli, registry: &GeneratorRegistry, directory: &Path) -> Result<()> {
    if !directory.is_dir() {
        bail!("Path is not a directory: {}", directory.display());
    }
    if cli.identifier.is_some() || cli.cppfile.is_some() {
        warn!("--identifier and --cppfile are ignored in directory mode");
    }

    info!("Scanning directory: {}", directory.display());
    fs_create_dir(&cli.output)?;

    let mut identifiers = IdentifierRegistry::new();

    // Walk the directory in a stable order so identifiers are reproducible
    for entry in WalkDir::new(directory)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        // Skip hidden files
        if path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with('.'))
            .unwrap_or(false)
        {
            trace!("Skipping hidden file: {}", path.display());
            continue;
        }

        let relative = path.strip_prefix(directory).unwrap_or(path);
        let identifier = identifiers.register(relative);
        let output = cli.output.join(format!("{}.cpp", identifier));
        let request = build_request(cli, path, output, &identifier);

        debug!("Processing file: {}", path.display());
        match generate(cli, registry, &request) {
            Ok(true) => identifiers.stats.written += 1,
            Ok(false) => identifiers.stats.skipped_existing += 1,
            Err(e) => {
                // Log error but continue with other files
                warn!("Error processing {}: {:#}", path.display(), e);
                identifiers.stats.failed += 1;
            }
        }
    }

    identifiers.print_summary();
    Ok(())
}

/// Run the selected generator, honoring `--override`
///
/// Returns `Ok(false)` when the outputs already exist and were left alone.
fn generate(cli: &Cli, registry: &GeneratorRegistry, request: &GenerationRequest) -> Result<bool> {
    let generator = registry
        .get(&cli.generator)
        .with_context(|| format!("Unknown generator '{}'", cli.generator))?;
    let header_path = generator.header_path(&request.output_path);

    if !cli.overwrite && (request.output_path.exists() || header_path.exists()) {
        info!(
            "Output already exists: {} (use --override to overwrite)",
            request.output_path.display()
        );
        return Ok(false);
    }

    let module = generator.generate(request).with_context(|| {
        format!(
            "Failed to generate {} from {}",
            request.output_path.display(),
            request.input_path.display()
        )
    })?;

    println!(
        "Wrote {} and {} ({} bytes, class {})",
        module.source_path.display(),
        module.header_path.display(),
        module.size,
        module.class_name
    );
    Ok(true)
}

fn fs_create_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))
}
