use serde::Serialize;
use uvatick_core::{format_message, IndexDate, IndexQuote};

use crate::cli::MessageArgs;
use crate::error::CliError;

use super::CommandOutput;

#[derive(Debug, Serialize)]
struct MessageResponseData<'a> {
    quote: &'a IndexQuote,
    text: &'a str,
    parse_mode: &'static str,
}

pub fn run(args: &MessageArgs) -> Result<CommandOutput, CliError> {
    let quote = IndexQuote::new(IndexDate::parse(&args.date)?, args.value)?;
    let text = format_message(&quote);

    let data = serde_json::to_value(MessageResponseData {
        quote: &quote,
        text: &text,
        parse_mode: "HTML",
    })?;
    Ok(CommandOutput::new(data).with_text(text))
}
