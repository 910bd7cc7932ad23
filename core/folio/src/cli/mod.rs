//! CLI（引数解析と表示）

mod args;
pub mod render;

pub use args::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
#[allow(unused_imports)]
pub use args::parse_args_from;
