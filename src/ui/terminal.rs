//! Terminal front end.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Style},
};

use crate::ui::controller::Ui;
use crate::ui::form::FormState;
use crate::ui::render::{ListRow, RenderedList};

/// [`Ui`] over a line-based reader and a writer.
///
/// Lists are drawn as tables, alerts are printed, and confirmations read a
/// `y`/`yes` answer from the input.
#[derive(Debug)]
pub struct TerminalUi<R, W> {
    input: R,
    output: W,
    assume_yes: bool,
}

impl TerminalUi<StdinLock<'static>, Stdout> {
    /// Attached to the process's stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalUi<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            assume_yes: false,
        }
    }

    /// Answer every confirmation with yes.
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// Next input line without its line ending, `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Print `text` without a newline and flush.
    pub fn prompt(&mut self, text: &str) {
        let result = write!(self.output, "{}", text).and_then(|_| self.output.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }

    /// Print `text` followed by a newline.
    pub fn print(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{}", text) {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Ui for TerminalUi<R, W> {
    fn render(&mut self, list: &RenderedList) {
        let text = match list.rows() {
            [ListRow::Placeholder(text)] | [ListRow::Error(text)] => text.to_string(),
            _ => product_table(list),
        };
        self.print(&text);
    }

    fn alert(&mut self, message: &str) {
        self.print(message);
    }

    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            self.print(&format!("{} [y/N] y", message));
            return true;
        }

        self.prompt(&format!("{} [y/N] ", message));
        match self.read_line() {
            Ok(Some(answer)) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read confirmation");
                false
            }
        }
    }

    fn show_form(&mut self, form: &FormState) {
        let text = format!(
            "Name:        {}\nPrice:       {}\nDescription: {}\n[{}]",
            form.name,
            form.price,
            form.description,
            form.mode().submit_label()
        );
        self.print(&text);
    }
}

fn product_table(list: &RenderedList) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Name", "Description", "Price", "Actions"]);
    for row in list.products() {
        let actions = row
            .actions()
            .iter()
            .map(|action| {
                format!(
                    "{} {}",
                    action.label().to_ascii_lowercase(),
                    action.product_id()
                )
            })
            .collect::<Vec<_>>()
            .join(" | ");
        builder.push_record([
            row.id.to_string(),
            row.name.clone(),
            row.description.clone(),
            row.price.clone(),
            actions,
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(3..4), Alignment::right());
    table.to_string()
}
