// Library root
// -----------
// Two unrelated command line tools share this crate: an image purger and a
// DeepL-backed interactive translator. The binary (`main.rs`) parses the
// command line and hands off to these modules.
//
// Module responsibilities:
// - `api`: the `TranslationProvider` trait and the blocking DeepL client.
// - `translator`: argument checks around a single provider call.
// - `purge`: deletes image files from the top level of a folder.
// - `ui`: the interactive prompt loop and console reporting.
// - `cli`: clap definitions for the subcommands.
// - `errors`: typed errors for all of the above.
pub mod api;
pub mod cli;
pub mod errors;
pub mod purge;
pub mod translator;
pub mod ui;
