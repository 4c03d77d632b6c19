use crate::CLAP_STYLING;
use clap::{arg, command};
use mirrorlink::handlers::DEFAULT_PAGE;

fn page_arg() -> clap::Arg {
    arg!(-p --"page" <PATH>)
        .required(false)
        .help("Catalog page to read cards from")
        .default_value(DEFAULT_PAGE)
}

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("mirrorlink")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("mirrorlink")
        .styles(CLAP_STYLING)
        .arg(
            arg!(-q --"quiet" "Suppress the loading indicator and non-essential output")
                .required(false)
                .global(true),
        )
        .subcommand_required(true)
        .subcommand(
            command!("open")
                .about(
                    "Open a catalog card through its first reachable mirror. Prints the URL \
                unless --open-with is given.",
                )
                .arg(arg!(<TITLE>).help("Title of the card to open (case-insensitive)"))
                .arg(page_arg())
                .arg(
                    arg!(--"open-with" <PROGRAM>)
                        .required(false)
                        .help("Program to launch with the resolved URL, e.g. xdg-open"),
                ),
        )
        .subcommand(
            command!("resolve")
                .about("Resolve ad-hoc mirror candidates and print the first reachable URL")
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(false)
                        .help("Candidate host or URL; repeat to add fallbacks in priority order")
                        .action(clap::ArgAction::Append)
                        .conflicts_with("urls"),
                )
                .arg(
                    arg!(--"urls" <JSON>)
                        .required(false)
                        .help("Candidates as a JSON array of {\"url\", \"priority\"} records")
                        .conflicts_with("url"),
                ),
        )
        .subcommand(
            command!("search")
                .about("Filter catalog cards by title")
                .arg(arg!([TERM]).help("Text to look for in card titles"))
                .arg(page_arg()),
        )
        .subcommand(
            command!("list")
                .about("List catalog cards with their icons and mirrors in probe order")
                .arg(page_arg())
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_definition_is_valid() {
        command_argument_builder().debug_assert();
    }

    #[test]
    fn test_resolve_collects_repeated_urls() {
        let matches = command_argument_builder()
            .try_get_matches_from(["mirrorlink", "resolve", "-u", "a.example", "-u", "b.example"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        let urls: Vec<&String> = sub.get_many::<String>("url").unwrap().collect();

        assert_eq!(urls, vec!["a.example", "b.example"]);
    }

    #[test]
    fn test_resolve_rejects_both_sources() {
        let result = command_argument_builder().try_get_matches_from([
            "mirrorlink",
            "resolve",
            "-u",
            "a.example",
            "--urls",
            "[]",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_quiet_is_accepted_after_subcommand() {
        let matches = command_argument_builder()
            .try_get_matches_from(["mirrorlink", "search", "wiki", "-q"])
            .unwrap();

        assert!(matches.get_flag("quiet"));
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<String>("page").unwrap(), DEFAULT_PAGE);
    }

    #[test]
    fn test_search_term_is_optional() {
        let matches = command_argument_builder()
            .try_get_matches_from(["mirrorlink", "search"])
            .unwrap();

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "search");
        assert!(sub.get_one::<String>("TERM").is_none());
    }
}
