use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{Attribute, Cell, Color as TableColor, Table};
use monkeys::{FriendView, MonkeyProfile};
use serde::Serialize;

use crate::theme::{ICONS, THEME};

/// Output format options for CLI commands
#[derive(Clone, Debug, ValueEnum, Default, PartialEq)]
pub enum OutputFormat {
    /// Formatted table output (default)
    #[default]
    Table,
    /// JSON output for scripting
    Json,
    /// Compact single-line output
    Compact,
}

/// Global CLI options that affect output and behavior
#[derive(Clone, Debug, Default)]
pub struct GlobalOptions {
    pub output_format: OutputFormat,
    pub quiet: bool,
    pub no_color: bool,
}

/// Data that can be displayed as a table
pub trait TableDisplay {
    fn to_table(&self, options: &GlobalOptions) -> Table;
    fn to_compact(&self) -> String;
}

/// Output manager handles formatting and display
pub struct OutputManager {
    pub options: GlobalOptions,
}

impl OutputManager {
    pub fn new(options: GlobalOptions) -> Self {
        Self { options }
    }

    /// Display data according to the configured output format
    pub fn display<T>(&self, data: &T) -> Result<()>
    where
        T: Serialize + TableDisplay + ?Sized,
    {
        if self.options.quiet {
            return Ok(());
        }

        match self.options.output_format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(data)?;
                println!("{json}");
            }
            OutputFormat::Table => {
                let table = data.to_table(&self.options);
                println!("{table}");
            }
            OutputFormat::Compact => {
                println!("{}", data.to_compact());
            }
        }
        Ok(())
    }

    fn line(&self, icon: &str, message: &str, color: colored::Color) -> String {
        if self.options.no_color {
            format!("{icon} {message}")
        } else {
            format!("{} {}", icon.color(color), message.color(color))
        }
    }

    /// Display a success message with color and icon
    pub fn success(&self, message: &str) {
        if !self.options.quiet {
            println!("{}", self.line(ICONS.success, message, THEME.success));
        }
    }

    /// Display an error message with color and icon
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.line(ICONS.error, message, THEME.error));
    }

    pub fn warning(&self, message: &str) {
        if !self.options.quiet {
            println!("{}", self.line(ICONS.warning, message, THEME.warning));
        }
    }

    pub fn info(&self, message: &str) {
        if !self.options.quiet {
            println!("{}", self.line(ICONS.info, message, THEME.info));
        }
    }

    /// Display a key-value pair
    pub fn key_value(&self, key: &str, value: &str) {
        if !self.options.quiet {
            let output = if self.options.no_color {
                format!("{key}: {value}")
            } else {
                format!("{}: {}", key.color(THEME.key).bold(), value.color(THEME.value))
            };
            println!("{output}");
        }
    }
}

fn themed_table(options: &GlobalOptions, headers: &[&str]) -> Table {
    let mut table = Table::new();
    if options.no_color {
        table.load_preset(comfy_table::presets::ASCII_FULL);
    } else {
        table.load_preset(comfy_table::presets::UTF8_FULL_CONDENSED);
    }
    let header_cells: Vec<Cell> = headers
        .iter()
        .map(|header| {
            let cell = Cell::new(header).add_attribute(Attribute::Bold);
            if options.no_color { cell } else { cell.fg(TableColor::Cyan) }
        })
        .collect();
    table.set_header(header_cells);
    table
}

fn best_marker(best: &Option<String>) -> String {
    best.as_deref().map(|name| format!("{} {name}", ICONS.star)).unwrap_or_else(|| "-".to_string())
}

impl TableDisplay for [MonkeyProfile] {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let mut table = themed_table(options, &["Id", "Name", "Age", "Email", "Friends", "Best friend"]);
        for profile in self {
            table.add_row(vec![
                Cell::new(profile.monkey.id),
                Cell::new(&profile.monkey.name),
                Cell::new(profile.monkey.age),
                Cell::new(&profile.monkey.email),
                Cell::new(profile.lenfriends),
                Cell::new(best_marker(&profile.best_friend_name)),
            ]);
        }
        table
    }

    fn to_compact(&self) -> String {
        self.iter().map(MonkeyProfile::to_compact).collect::<Vec<_>>().join("\n")
    }
}

impl TableDisplay for MonkeyProfile {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let mut table = themed_table(options, &["Field", "Value"]);
        table.add_row(vec![Cell::new("id"), Cell::new(self.monkey.id)]);
        table.add_row(vec![Cell::new("name"), Cell::new(&self.monkey.name)]);
        table.add_row(vec![Cell::new("age"), Cell::new(self.monkey.age)]);
        table.add_row(vec![Cell::new("email"), Cell::new(&self.monkey.email)]);
        table.add_row(vec![Cell::new("friends"), Cell::new(self.friend_names.join(", "))]);
        table.add_row(vec![Cell::new("best friend"), Cell::new(best_marker(&self.best_friend_name))]);
        table
    }

    fn to_compact(&self) -> String {
        format!(
            "{} {} age={} friends={} best={}",
            self.monkey.id,
            self.monkey.name,
            self.monkey.age,
            self.lenfriends,
            self.best_friend_name.as_deref().unwrap_or("-")
        )
    }
}

impl TableDisplay for [FriendView] {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let mut table = themed_table(options, &["Id", "Monkey", "Friend", "Best"]);
        for view in self {
            table.add_row(vec![
                Cell::new(view.id),
                Cell::new(&view.name),
                Cell::new(&view.to_monkey),
                Cell::new(if view.is_best { ICONS.star } else { "" }),
            ]);
        }
        table
    }

    fn to_compact(&self) -> String {
        self.iter()
            .map(|view| {
                let marker = if view.is_best { " *" } else { "" };
                format!("{} {} {}{marker}", view.name, ICONS.arrow, view.to_monkey)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
