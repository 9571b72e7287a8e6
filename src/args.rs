// src/args.rs
use crate::version::VERSION;
use clap::{ArgAction, Parser};

const HELP_TEMPLATE: &str = "\
------------------------------------------------------------------------------------
{name} v{version} by unium @ unified
Description : {about}
{usage-heading} {usage}

Options:
{options}
------------------------------------------------------------------------------------
";

#[derive(Parser, Debug)]
#[command(
    name = "ls2",
    version = VERSION,
    about = "A replacement for the command ls, with nicer formatting and colors.",
    help_template = HELP_TEMPLATE,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Args {
    #[arg(short = 'a', help = "Displays hidden files.")]
    pub all: bool,

    #[arg(short = 'n', help = "Displays permissions in a numerical form.")]
    pub numeric: bool,

    #[arg(short = 'v', action = ArgAction::Version, help = "Displays the version of this command.")]
    pub version: Option<bool>,

    #[arg(short = 'h', action = ArgAction::Help, help = "Displays this menu.")]
    pub help: Option<bool>,
}
