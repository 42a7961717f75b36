mod commands;
mod examples;
mod output;
mod theme;

use std::path::PathBuf;

use anyhow::Result;
use clap::{
    ColorChoice, Command, CommandFactory, FromArgMatches, Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Color as ClapColor, Style},
    },
};
use colored::{Color as ThemeColor, Colorize, control::ShouldColorize};
use std::fmt::Write;

use commands::{Commands, handle_command};
use examples::{ExampleGroup, command_examples};
use output::{GlobalOptions, OutputFormat, OutputManager};
use theme::{ICONS, THEME};

const ENVIRONMENT_VARIABLES: &[(&str, &str)] = &[
    ("REDIS_URL", "Redis connection URL"),
    ("MONKEYS_PREFIX", "Key prefix isolating this troop's data"),
    ("RUST_LOG", "Log filter, e.g. monkeys=debug"),
];

#[derive(Parser)]
#[command(name = "monkeys")]
#[command(version = "0.1.0")]
#[command(
    about = "Manage monkeys and their friendships",
    long_about = r#"Manage monkeys and their friendships stored in Redis.

Friendship is mutual: befriending a monkey also makes it befriend you back.
Each monkey may have one best friend among its friends.
"#
)]
#[command(subcommand_required = true, arg_required_else_help = true)]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    output: OutputFormat,

    /// Suppress output (only errors will be shown)
    #[arg(short = 'q', long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to the configuration file
    #[arg(long, default_value = monkeys::config::CONFIG_FILE_NAME, global = true)]
    config: PathBuf,

    /// Redis connection URL (overrides the configuration file)
    #[arg(long, env = "REDIS_URL", global = true)]
    redis_url: Option<String>,

    /// Key prefix (overrides the configuration file)
    #[arg(long, env = "MONKEYS_PREFIX", global = true)]
    prefix: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn build_cli_command() -> Command {
    let use_color = ShouldColorize::from_env().should_colorize();
    let mut command = Cli::command().after_long_help(render_top_level_appendix(use_color));
    command = command.color(if use_color { ColorChoice::Auto } else { ColorChoice::Never });
    for example in command_examples() {
        if let Some(subcommand) = command.find_subcommand_mut(example.name) {
            let updated = subcommand.clone().after_long_help(render_examples(example.groups, use_color));
            *subcommand = updated;
        }
    }
    command.styles(help_styles())
}

fn render_examples(groups: &[ExampleGroup], use_color: bool) -> String {
    let mut buffer = String::new();
    let _ = writeln!(buffer, "{}", stylize("Examples:", THEME.highlight, true, use_color));
    for (index, group) in groups.iter().enumerate() {
        let _ = writeln!(buffer, "  {}", stylize(group.title, THEME.primary, true, use_color));
        for command in group.commands {
            let arrow = stylize(ICONS.arrow, THEME.secondary, false, use_color);
            let _ = writeln!(buffer, "    {arrow} {}", stylize(command, THEME.secondary, false, use_color));
        }
        if index + 1 < groups.len() {
            buffer.push('\n');
        }
    }
    buffer
}

fn render_top_level_appendix(use_color: bool) -> String {
    let mut buffer = String::new();
    let _ = writeln!(buffer, "{}", stylize("Environment Variables:", THEME.highlight, true, use_color));
    for (key, description) in ENVIRONMENT_VARIABLES {
        let _ = writeln!(
            buffer,
            "  {}  {}",
            stylize(key, THEME.key, true, use_color),
            stylize(description, THEME.value, false, use_color)
        );
    }
    buffer
}

fn stylize(text: &str, color: ThemeColor, bold: bool, use_color: bool) -> String {
    if !use_color {
        return text.to_string();
    }
    let styled = text.color(color);
    if bold { styled.bold().to_string() } else { styled.to_string() }
}

fn help_styles() -> Styles {
    let ansi = |color| Style::new().fg_color(Some(ClapColor::Ansi(color)));
    Styles::styled()
        .usage(ansi(AnsiColor::BrightBlue).bold())
        .header(ansi(AnsiColor::Cyan).bold())
        .literal(ansi(AnsiColor::Magenta))
        .placeholder(ansi(AnsiColor::BrightBlack))
        .error(ansi(AnsiColor::Red).bold())
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let matches = build_cli_command().get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    let output = OutputManager::new(GlobalOptions {
        output_format: cli.output.clone(),
        quiet: cli.quiet,
        no_color: cli.no_color,
    });

    if let Err(err) = execute(cli, &output).await {
        output.error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

async fn execute(cli: Cli, output: &OutputManager) -> Result<()> {
    let mut config = monkeys::MonkeysConfig::load_or_default(&cli.config)?;
    if let Some(url) = cli.redis_url {
        config.redis.url = url;
    }
    if let Some(prefix) = cli.prefix {
        config.store.prefix = prefix;
    }
    handle_command(cli.command, &config, output).await
}
