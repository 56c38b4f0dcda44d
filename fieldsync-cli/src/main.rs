use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, WrapErr, eyre};
use serde_json::Value;

use fieldsync::{FormUi, UiOptions, parse_form_definition};

#[derive(Debug, Parser)]
#[command(
    name = "fieldsync",
    version,
    about = "Render a JSON form definition as a debounced TUI form"
)]
struct Cli {
    /// Form definition: file path, inline JSON, or "-" for stdin
    #[arg(short = 'f', long = "form", value_name = "SPEC")]
    form: String,

    /// Seed values document: file path, inline JSON, or "-" for stdin
    #[arg(short = 'c', long = "seed", alias = "values", value_name = "SPEC")]
    seed: Option<String>,

    /// Title shown at the top of the UI (overrides the definition's)
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Output destinations ("-" writes to stdout). Accepts multiple values per flag use.
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Quiet period in milliseconds between the last keystroke and the deferred commit
    #[arg(long = "delay", value_name = "MS", default_value_t = 300)]
    delay: u64,

    /// Event-loop tick rate in milliseconds
    #[arg(long = "tick", value_name = "MS", default_value_t = 250)]
    tick: u64,

    /// Emit compact JSON rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Overwrite output files even if they already exist
    #[arg(short = 'F', long = "force", alias = "yes")]
    force: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if cli.form == "-" && cli.seed.as_deref() == Some("-") {
        return Err(eyre!(
            "cannot read the form definition and the seed values from stdin simultaneously"
        ));
    }

    ensure_outputs_available(&cli.outputs, cli.force)?;

    let definition_doc = load_value(&cli.form, "form definition")?;
    let definition = parse_form_definition(&definition_doc)
        .wrap_err("invalid form definition")?;

    let seed = cli
        .seed
        .as_deref()
        .map(|spec| load_value(spec, "seed values"))
        .transpose()?;

    let options = UiOptions::default().with_tick_rate(Duration::from_millis(cli.tick));

    let model = definition.build(Duration::from_millis(cli.delay));
    let mut ui = FormUi::new(model).with_options(options);
    if let Some(title) = cli.title.as_ref().or(definition.title.as_ref()) {
        ui = ui.with_title(title.clone());
    }
    if let Some(seed) = seed {
        ui = ui.with_seed(seed);
    }

    let committed = ui.run().map_err(|e| eyre!(e))?;
    write_outputs(&cli.outputs, &committed, cli.no_pretty)?;

    Ok(())
}

fn load_value(spec: &str, label: &str) -> Result<Value> {
    if spec == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err("failed to read from stdin")?;
        return parse_contents(&buffer, label);
    }

    let path = PathBuf::from(spec);
    match fs::read_to_string(&path) {
        Ok(contents) => parse_contents(&contents, label),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            // Not a file on disk; treat the spec as inline JSON.
            parse_contents(spec, &format!("inline {label}"))
        }
        Err(err) => {
            Err(err).wrap_err_with(|| format!("failed to load {label} from {}", path.display()))
        }
    }
}

fn parse_contents(contents: &str, label: &str) -> Result<Value> {
    serde_json::from_str(contents).wrap_err_with(|| format!("failed to parse {label} as JSON"))
}

fn ensure_outputs_available(outputs: &[String], force: bool) -> Result<()> {
    if force {
        return Ok(());
    }
    for dest in outputs {
        if dest != "-" && PathBuf::from(dest).exists() {
            return Err(eyre!(
                "output file '{dest}' already exists; pass --force to overwrite"
            ));
        }
    }
    Ok(())
}

fn write_outputs(outputs: &[String], committed: &Value, no_pretty: bool) -> Result<()> {
    let rendered = if no_pretty {
        serde_json::to_string(committed)?
    } else {
        serde_json::to_string_pretty(committed)?
    };

    if outputs.is_empty() {
        println!("{rendered}");
        return Ok(());
    }

    for dest in outputs {
        if dest == "-" {
            let mut stdout = io::stdout();
            writeln!(stdout, "{rendered}").wrap_err("failed to write to stdout")?;
        } else {
            fs::write(dest, format!("{rendered}\n"))
                .wrap_err_with(|| format!("failed to write output file '{dest}'"))?;
        }
    }
    Ok(())
}
