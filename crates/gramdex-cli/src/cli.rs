//! Command definition and dispatch.

use clap::{Arg, ArgMatches, Command, value_parser};

use gramdex_translate::{DEFAULT_GRAM_LENGTH, translate_with_gram_length};

pub fn build_cli() -> Command {
    Command::new("gramdex")
        .about("Translate a regex into an n-gram boolean query for inverted-index pruning")
        .arg(
            Arg::new("regex")
                .value_name("REGEX")
                .required(true)
                .help("Regular expression to translate"),
        )
        .arg(
            Arg::new("gram_length")
                .short('n')
                .long("gram-length")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("3")
                .help("Gram length the target index was built with"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
}

/// Translate the pattern from the parsed arguments and render the query.
pub fn run(matches: &ArgMatches) -> Result<String, String> {
    let regex = matches
        .get_one::<String>("regex")
        .ok_or("missing REGEX argument")?;
    let gram_len = matches
        .get_one::<usize>("gram_length")
        .copied()
        .unwrap_or(DEFAULT_GRAM_LENGTH);

    let query = translate_with_gram_length(regex, gram_len).map_err(|e| e.to_string())?;

    match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => serde_json::to_string_pretty(&query).map_err(|e| e.to_string()),
        _ => Ok(query.to_string()),
    }
}
