use colored::Colorize;
use flightsched::commands::{CmdMessage, MessageLevel};

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub fn print_error(error: &impl std::fmt::Display) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}
