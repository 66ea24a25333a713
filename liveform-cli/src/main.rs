use std::fmt::Write as FmtWrite;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use liveform::{
    FormSchema, FormStudio, UiOptions,
    io::{DocumentFormat, OutputDestination, OutputOptions, load_schema_str},
    project_survey,
};

#[derive(Debug, Parser)]
#[command(
    name = "liveform",
    version,
    about = "Edit a form schema and fill in its live preview in the terminal"
)]
struct Cli {
    /// Schema spec: file path, inline document, or "-" for stdin.
    /// Opens a sample survey when omitted
    #[arg(short = 's', long = "schema", value_name = "SPEC")]
    schema: Option<String>,

    /// Title shown at the top of the UI
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Where to write the last submitted record ("-" writes to stdout)
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Record format; inferred from output file extensions when omitted
    #[arg(long = "format", value_name = "FORMAT")]
    format: Option<DocumentFormat>,

    /// Emit compact JSON/TOML rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Write the last valid schema as pretty JSON on exit
    #[arg(long = "save-schema", value_name = "PATH")]
    save_schema: Option<PathBuf>,

    /// Overwrite output files even if they already exist
    #[arg(short = 'f', long = "force", short_alias = 'y', alias = "yes")]
    force: bool,

    /// Write tracing output to this file (RUST_LOG sets the filter)
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Hide the key help line
    #[arg(long = "no-help")]
    no_help: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let mut diagnostics = DiagnosticCollector::default();
    let schema = load_schema(cli.schema.as_deref(), &mut diagnostics);
    let output = build_output_options(&cli, &mut diagnostics);

    let mut claimed: Vec<PathBuf> = output
        .iter()
        .flat_map(|options| &options.destinations)
        .filter_map(|dest| match dest {
            OutputDestination::File(path) => Some(path.clone()),
            OutputDestination::Stdout => None,
        })
        .collect();
    claimed.extend(cli.save_schema.clone());
    ensure_output_paths_available(&claimed, cli.force, &mut diagnostics);

    diagnostics.into_result()?;

    let schema = schema.unwrap_or_else(project_survey);
    info!(
        title = %schema.form_title,
        fields = schema.fields.len(),
        "starting form studio"
    );

    let options = UiOptions::default().with_help(!cli.no_help);
    let mut studio = FormStudio::new(schema).with_options(options);
    if let Some(title) = cli.title.as_ref() {
        studio = studio.with_title(title.clone());
    }
    if let Some(output) = output {
        studio = studio.with_output(output);
    }

    let session = studio.run().map_err(Report::msg)?;

    if let Some(path) = cli.save_schema.as_ref() {
        save_schema(path, &session.schema)?;
        info!(path = %path.display(), "schema saved");
    }
    if session.submission.is_none() {
        info!("closed without a submission");
    }

    Ok(())
}

/// Install a file-backed subscriber. The terminal belongs to the UI, so
/// without `--log-file` nothing is installed.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn load_schema(spec: Option<&str>, diagnostics: &mut DiagnosticCollector) -> Option<FormSchema> {
    let spec = spec?;
    let format = match spec {
        "-" => DocumentFormat::default(),
        path => match probe_format_from_extension(Path::new(path)) {
            ExtensionFormat::Known(format) => format,
            ExtensionFormat::UnsupportedFeature(feature) => {
                diagnostics.push_input(format!(
                    "schema '{path}' requires {feature} support, but this build lacks the '{feature}' feature"
                ));
                return None;
            }
            ExtensionFormat::Unknown => DocumentFormat::default(),
        },
    };

    match read_schema(spec, format) {
        Ok(schema) => Some(schema),
        Err(err) => {
            diagnostics.push_input(format!("{err:#}"));
            None
        }
    }
}

fn read_schema(spec: &str, format: DocumentFormat) -> Result<FormSchema> {
    let contents = if spec == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err("failed to read from stdin")?;
        buffer
    } else {
        match fs::read_to_string(spec) {
            Ok(contents) => contents,
            // Not a file: treat the argument itself as the document.
            Err(err) if err.kind() == io::ErrorKind::NotFound => spec.to_string(),
            Err(err) => {
                return Err(Report::new(err).wrap_err(format!("failed to read schema from {spec}")));
            }
        }
    };
    load_schema_str(&contents, format).map_err(|err| eyre!("{err:#}"))
}

fn save_schema(path: &Path, schema: &FormSchema) -> Result<()> {
    let mut text = serde_json::to_string_pretty(schema).wrap_err("failed to serialize schema")?;
    text.push('\n');
    fs::write(path, text).wrap_err_with(|| format!("failed to write schema to {}", path.display()))
}

#[derive(Default)]
struct DiagnosticCollector {
    messages: Vec<String>,
}

impl DiagnosticCollector {
    fn push_input(&mut self, message: impl Into<String>) {
        self.messages.push(format!("input (schema): {}", message.into()));
    }

    fn push_output(&mut self, message: impl Into<String>) {
        self.messages.push(format!("output: {}", message.into()));
    }

    fn into_result(self) -> Result<()> {
        if self.messages.is_empty() {
            return Ok(());
        }
        let mut body = String::from("encountered input/output issues:\n");
        for (idx, msg) in self.messages.iter().enumerate() {
            let _ = writeln!(body, "  {}. {}", idx + 1, msg);
        }
        Err(eyre!(body))
    }
}

fn build_output_options(cli: &Cli, diagnostics: &mut DiagnosticCollector) -> Option<OutputOptions> {
    let mut destinations = Vec::new();
    for raw in &cli.outputs {
        if raw.trim().is_empty() {
            diagnostics.push_output("output destination cannot be empty");
            continue;
        }
        destinations.push(OutputDestination::from_spec(raw));
    }
    if destinations.is_empty() {
        return None;
    }

    let format = match cli.format {
        Some(format) => format,
        None => infer_format_from_files(&destinations, diagnostics)?,
    };
    Some(
        OutputOptions::new(format)
            .with_pretty(!cli.no_pretty)
            .with_destinations(destinations),
    )
}

fn infer_format_from_files(
    destinations: &[OutputDestination],
    diagnostics: &mut DiagnosticCollector,
) -> Option<DocumentFormat> {
    let mut detected: Option<DocumentFormat> = None;
    let mut failed = false;
    for dest in destinations {
        let OutputDestination::File(path) = dest else {
            continue;
        };
        match probe_format_from_extension(path) {
            ExtensionFormat::Known(format) => match detected {
                Some(existing) if existing != format => {
                    failed = true;
                    diagnostics.push_output(format!(
                        "output file {} uses {format} but other destinations use {existing}; align extensions or pass --format",
                        path.display()
                    ));
                }
                Some(_) => {}
                None => detected = Some(format),
            },
            ExtensionFormat::UnsupportedFeature(feature) => {
                failed = true;
                diagnostics.push_output(format!(
                    "output file {} requires {feature} support, but this build was compiled without the '{feature}' feature",
                    path.display()
                ));
            }
            ExtensionFormat::Unknown => {
                failed = true;
                diagnostics.push_output(format!(
                    "cannot infer format from output file {}; use .json/.yaml/.toml or pass --format",
                    path.display()
                ));
            }
        }
    }
    if failed {
        None
    } else {
        Some(detected.unwrap_or_default())
    }
}

/// Known extensions whose format this build was compiled without fall
/// through to `UnsupportedFeature`.
fn probe_format_from_extension(path: &Path) -> ExtensionFormat {
    let Some(ext) = path.extension() else {
        return ExtensionFormat::Unknown;
    };
    let ext = ext.to_string_lossy().to_ascii_lowercase();
    if let Ok(format) = ext.parse::<DocumentFormat>() {
        return ExtensionFormat::Known(format);
    }
    match ext.as_str() {
        "yaml" | "yml" => ExtensionFormat::UnsupportedFeature("yaml"),
        "toml" => ExtensionFormat::UnsupportedFeature("toml"),
        _ => ExtensionFormat::Unknown,
    }
}

#[derive(Debug)]
enum ExtensionFormat {
    Known(DocumentFormat),
    /// Names the cargo feature that would enable it.
    UnsupportedFeature(&'static str),
    Unknown,
}

fn ensure_output_paths_available(
    paths: &[PathBuf],
    force: bool,
    diagnostics: &mut DiagnosticCollector,
) {
    if force {
        return;
    }
    for path in paths {
        if path.exists() {
            diagnostics.push_output(format!(
                "file {} already exists (pass --force to overwrite)",
                path.display()
            ));
        }
    }
}
