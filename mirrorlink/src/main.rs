use commands::command_argument_builder;
use mirrorlink::handlers::{
    handle_list, handle_open, handle_resolve, handle_search, init_tracing,
};

mod commands;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    init_tracing();

    match chosen_command.subcommand() {
        Some(("open", primary_command)) => handle_open(primary_command, quiet).await,
        Some(("resolve", primary_command)) => handle_resolve(primary_command, quiet).await,
        Some(("search", primary_command)) => handle_search(primary_command),
        Some(("list", primary_command)) => handle_list(primary_command),
        _ => unreachable!("clap should ensure we don't get here"),
    }
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
