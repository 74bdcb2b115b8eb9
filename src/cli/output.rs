use clap::ValueEnum;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Readable text
    #[default]
    Human,
    /// One JSON document on stdout
    Json,
}

/// Format dispatch where the json branch returns `Result` and human returns `()`.
///
/// ```rust,ignore
/// output_by_format_result!(cli.format,
///     json => { print_json(&value) },
///     human => { println!("{}", text); }
/// )?;
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
        }
    };
}
