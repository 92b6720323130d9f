//! Interactive line-oriented shell over a [`TerminalUi`].

use catalog_sdk::ProductId;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

use crate::ui::controller::{ProductListController, Ui};
use crate::ui::render::ListAction;
use crate::ui::terminal::TerminalUi;

pub const HELP: &str = "\
Commands:
  list                  reload the product list
  edit <id>             load a product into the form
  delete <id>           delete a product (asks first)
  name <text>           set the name field
  price <text>          set the price field
  description <text>    set the description field
  form                  show the form
  submit                add or update the product in the form
  reset                 clear the form and return to add mode
  help                  show this help
  quit                  leave the shell";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    List,
    Action(ListAction),
    SetName(String),
    SetPrice(String),
    SetDescription(String),
    ShowForm,
    Submit,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("`{0}` needs a product id")]
    MissingId(&'static str),

    #[error("`{0}` is not a product id")]
    InvalidId(String),
}

impl FromStr for ShellCommand {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(word, rest)| (word, rest.trim()))
            .unwrap_or((line, ""));

        let command = match word.to_ascii_lowercase().as_str() {
            "list" | "ls" => ShellCommand::List,
            "edit" => ShellCommand::Action(ListAction::Edit(parse_id("edit", rest)?)),
            "delete" | "rm" => ShellCommand::Action(ListAction::Delete(parse_id("delete", rest)?)),
            "name" => ShellCommand::SetName(rest.to_string()),
            "price" => ShellCommand::SetPrice(rest.to_string()),
            "description" | "desc" => ShellCommand::SetDescription(rest.to_string()),
            "form" => ShellCommand::ShowForm,
            "submit" | "save" => ShellCommand::Submit,
            "reset" | "cancel" => ShellCommand::Reset,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            _ => return Err(ShellError::UnknownCommand(word.to_string())),
        };
        Ok(command)
    }
}

fn parse_id(command: &'static str, text: &str) -> Result<ProductId, ShellError> {
    if text.is_empty() {
        return Err(ShellError::MissingId(command));
    }
    text.parse().map_err(|_| ShellError::InvalidId(text.to_string()))
}

/// Load the list, then read and run commands until `quit` or end of input.
pub async fn run_shell<R, W>(
    controller: &mut ProductListController<TerminalUi<R, W>>,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let _ = controller.fetch_products().await;

    loop {
        controller.ui_mut().prompt("catalog> ");
        let Some(line) = controller.ui_mut().read_line()? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<ShellCommand>() {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => execute(controller, command).await,
            Err(e) => controller
                .ui_mut()
                .print(&format!("{} (type `help` for commands)", e)),
        }
    }

    Ok(())
}

async fn execute<R, W>(
    controller: &mut ProductListController<TerminalUi<R, W>>,
    command: ShellCommand,
)
where
    R: BufRead,
    W: Write,
{
    match command {
        ShellCommand::List => {
            let _ = controller.fetch_products().await;
        }
        ShellCommand::Action(action) => {
            let _ = controller.handle_action(action).await;
        }
        ShellCommand::SetName(value) => controller.form_mut().name = value,
        ShellCommand::SetPrice(value) => controller.form_mut().price = value,
        ShellCommand::SetDescription(value) => controller.form_mut().description = value,
        ShellCommand::ShowForm => {
            let form = controller.form().clone();
            controller.ui_mut().show_form(&form);
        }
        ShellCommand::Submit => {
            let _ = controller.submit().await;
        }
        ShellCommand::Reset => controller.reset_form(),
        ShellCommand::Help => controller.ui_mut().print(HELP),
        ShellCommand::Quit => {}
    }
}
