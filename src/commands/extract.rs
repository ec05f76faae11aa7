use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use dtx_lib::{
    load_corrections, parse_document, parse_local_variables, Correction, DocumentNode, DtxError,
    DtxOutput, LocalVariables, Pipeline, TokenOutput,
};
use tracing::info;

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};
use crate::settings::{apply_category_flag, load_config, log_effective_config};

/// Run the extract command.
#[allow(clippy::too_many_arguments)]
pub fn run_extract(
    config_path: Option<PathBuf>,
    verbose: bool,
    document: PathBuf,
    variables: Option<PathBuf>,
    corrections: Option<PathBuf>,
    categories: Option<Vec<String>>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let mut config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output),
    };
    if let Err(err) = apply_category_flag(&mut config, categories.as_deref()) {
        return render_error(err, format, output);
    }
    if verbose {
        log_effective_config(&config, config_path.as_deref());
    }

    let root = match read_document(&document) {
        Ok(root) => root,
        Err(err) => return render_error(err, format, output),
    };
    let variables = match variables.as_deref().map(read_variables).transpose() {
        Ok(variables) => variables,
        Err(err) => return render_error(err, format, output),
    };
    let corrections: Vec<Correction> = match corrections
        .as_deref()
        .map(load_corrections)
        .transpose()
    {
        Ok(corrections) => corrections.unwrap_or_default(),
        Err(err) => return render_error(err, format, output),
    };

    let mut pipeline = Pipeline::new(config);
    if let Some(variables) = &variables {
        pipeline = pipeline.with_resolver(variables);
    }
    let tokens = match pipeline.run(&root, &corrections) {
        Ok(tokens) => tokens,
        Err(err) => return render_error(err, format, output),
    };

    let name = Some(root.name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string);
    let body = DtxOutput::Extract(TokenOutput::new(name, tokens));
    if let Err(err) = write_output(&body, format, output.clone()) {
        return render_error(DtxError::Config(err.to_string()), format, output);
    }
    ExitCode::SUCCESS
}

fn read_document(path: &Path) -> Result<DocumentNode, DtxError> {
    if !path.is_file() {
        return Err(DtxError::Config(format!(
            "Document file not found: {}",
            path.display()
        )));
    }
    let bytes = fs::read(path)?;
    let root = parse_document(&bytes)?;
    info!(path = %path.display(), name = %root.name, "document loaded");
    Ok(root)
}

fn read_variables(path: &Path) -> Result<LocalVariables, DtxError> {
    if !path.is_file() {
        return Err(DtxError::Config(format!(
            "Variables file not found: {}",
            path.display()
        )));
    }
    let bytes = fs::read(path)?;
    let variables = LocalVariables::new(parse_local_variables(&bytes)?);
    info!(path = %path.display(), variables = variables.len(), "local variables loaded");
    Ok(variables)
}
