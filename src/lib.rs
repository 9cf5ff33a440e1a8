// Library root
// -----------
// This crate exposes a small library surface for the quiz CLI. The binary
// (`main.rs`) parses arguments and hands off to these modules.
//
// Module responsibilities:
// - `store`: The `Quote` record and the JSON file that holds the
//   collection (load, save, id assignment).
// - `quiz`: Session planning over an injectable random source, answer
//   matching and scoring. No I/O.
// - `ui`: The interactive `play`, `add` and `list` flows, reading input
//   through the `Prompter` trait.
pub mod quiz;
pub mod store;
pub mod ui;
