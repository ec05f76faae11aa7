use std::process::ExitCode;

use dtx_lib::output::DTX_OUTPUT_VERSION;
use dtx_lib::{CategoriesOutput, Category, DtxError, DtxOutput};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};

/// Run the categories command.
pub fn run_categories(format: OutputFormat) -> ExitCode {
    let body = DtxOutput::Categories(CategoriesOutput {
        version: DTX_OUTPUT_VERSION.to_string(),
        categories: Category::ALL.to_vec(),
    });
    if let Err(err) = write_output(&body, format, None) {
        return render_error(DtxError::Unknown(err.to_string()), format, None);
    }
    ExitCode::SUCCESS
}
