//! Drives one invocation: resolve options, convert every input, report.

use std::fmt;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use recolor_common::{ConversionOptions, RecolorError};
use recolor_config::RecolorConfig;
use recolor_core::{convert_range, convert_text, ConversionResult};
use tracing::{debug, info, warn};

use crate::cli::Args;
use crate::picker;
use crate::report::{self, InputReport, Report};
use crate::selection::{self, LineRange};

/// Where a text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub struct Outcome {
    pub source: Source,
    pub result: Result<ConversionResult, RecolorError>,
}

/// Config values overridden by whatever flags were given.
pub fn resolve_options(args: &Args, config: &RecolorConfig) -> ConversionOptions {
    let convert = &config.convert;
    ConversionOptions::new(
        args.format.unwrap_or(convert.target_format),
        args.precision.unwrap_or(convert.precision),
        args.opacity_override().unwrap_or(convert.use_opacity),
    )
}

/// Convert `text`, limited to `lines` when given.
pub fn convert_input(
    text: &str,
    options: &ConversionOptions,
    lines: Option<LineRange>,
) -> Result<ConversionResult, RecolorError> {
    match lines {
        Some(lines) => {
            let range = selection::byte_range(text, lines)?;
            convert_range(text, range, options)
        }
        None => Ok(convert_text(text, options)),
    }
}

fn convert_file(
    path: &Path,
    options: &ConversionOptions,
    lines: Option<LineRange>,
) -> Result<ConversionResult, RecolorError> {
    let text = std::fs::read_to_string(path)?;
    convert_input(&text, options, lines)
}

/// Convert every file on its own blocking task. Outcomes keep argument order.
pub fn convert_files(
    paths: &[PathBuf],
    options: ConversionOptions,
    lines: Option<LineRange>,
) -> Result<Vec<Outcome>, RecolorError> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let outcomes = rt.block_on(async move {
        let handles: Vec<_> = paths
            .iter()
            .cloned()
            .map(|path| {
                let task_path = path.clone();
                let handle = tokio::task::spawn_blocking(move || {
                    convert_file(&task_path, &options, lines)
                });
                (path, handle)
            })
            .collect();

        let mut outcomes = Vec::with_capacity(handles.len());
        for (path, handle) in handles {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => Err(RecolorError::Other(format!("conversion task failed: {e}"))),
            };
            outcomes.push(Outcome {
                source: Source::File(path),
                result,
            });
        }
        outcomes
    });

    Ok(outcomes)
}

fn convert_stdin(
    options: &ConversionOptions,
    lines: Option<LineRange>,
) -> Result<ConversionResult, RecolorError> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    convert_input(&text, options, lines)
}

/// Run the command. `Err` is reserved for failures before any input was read.
pub fn run(args: &Args, config: &RecolorConfig) -> Result<ExitCode, RecolorError> {
    let mut options = resolve_options(args, config);

    if args.pick || config.convert.prompt_for_format {
        if args.files.is_empty() {
            if args.pick {
                return Err(RecolorError::Other(
                    "--pick needs FILES; stdin already carries the CSS".into(),
                ));
            }
            warn!("prompt_for_format ignored while reading CSS from stdin");
        } else {
            let picked = picker::pick_format(options.target_format, io::stdin().lock(), io::stderr())?;
            match picked {
                Some(format) => options.target_format = format,
                None => {
                    eprintln!("Unknown format; nothing converted.");
                    return Ok(ExitCode::SUCCESS);
                }
            }
        }
    }

    debug!(
        format = %options.target_format,
        precision = options.precision,
        use_opacity = options.use_opacity,
        "resolved options"
    );

    let outcomes = if args.files.is_empty() {
        vec![Outcome {
            source: Source::Stdin,
            result: convert_stdin(&options, args.lines),
        }]
    } else {
        convert_files(&args.files, options, args.lines)?
    };

    let ok = report_outcomes(args, config, &options, outcomes)?;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Print or write results. Returns `false` when any input failed.
fn report_outcomes(
    args: &Args,
    config: &RecolorConfig,
    options: &ConversionOptions,
    outcomes: Vec<Outcome>,
) -> Result<bool, RecolorError> {
    let max_shown = config.report.max_errors_shown as usize;
    let prefix_messages = outcomes.len() > 1;
    let mut stdout = io::stdout().lock();
    let mut all_errors = Vec::new();
    let mut inputs = Vec::with_capacity(outcomes.len());
    let mut ok = true;

    for Outcome { source, result } in outcomes {
        let label = if prefix_messages {
            format!("{source}: ")
        } else {
            String::new()
        };

        let result = match result {
            Ok(result) => result,
            Err(e) => {
                ok = false;
                eprintln!("recolor: {source}: {e}");
                inputs.push(InputReport::failed(&source, &e));
                continue;
            }
        };

        if result.has_errors() {
            eprintln!("{label}{}", report::error_message(&result.error_colors, max_shown));
        }
        if let Some(notice) = report::notice(&result, args.lines.is_some()) {
            eprintln!("{label}{notice}");
        }

        let mut written = false;
        if args.in_place {
            if let Source::File(path) = &source {
                written = true;
                if !result.is_noop() {
                    if let Err(e) = std::fs::write(path, &result.output) {
                        ok = false;
                        eprintln!("recolor: {source}: {e}");
                    } else {
                        info!("{source}: {}", result.summary());
                    }
                }
            }
        }
        if !written && !args.json {
            stdout.write_all(result.output.as_bytes())?;
        }

        all_errors.extend(result.error_colors.iter().cloned());
        inputs.push(InputReport::converted(&source, &result, written));
    }

    if args.json {
        let report = Report {
            format: options.target_format,
            precision: options.precision,
            inputs,
        };
        writeln!(stdout, "{}", report.to_json())?;
    }
    stdout.flush()?;

    if let Some(path) = &args.error_list {
        report::write_error_list(path, &all_errors)?;
    }

    Ok(ok)
}
