//! # Console Commands Module
//!
//! Every command the operator can type at the prompt.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (tokenizer, parsing, dispatch)
//! ├── booking.rs  ◄─── book, status
//! ├── order.rs    ◄─── order, ticket, menu
//! ├── billing.rs  ◄─── bill
//! └── report.rs   ◄─── report
//! ```
//!
//! ## How a Line Becomes a Command
//! ```text
//! order 2 late "Fresh Caught Lobster" --diners 2
//!         │
//!         ▼  tokenize()
//! ["order", "2", "late", "Fresh Caught Lobster", "--diners", "2"]
//!         │
//!         ▼  clap
//! Command::Order { table: 2, session: "late", item: "...", quantity: 1, diners: 2 }
//!         │
//!         ▼  dispatch()
//! order::place_order(state, ...) -> Result<String, ConsoleError>
//! ```

pub mod billing;
pub mod booking;
pub mod order;
pub mod report;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::error::ConsoleError;
use crate::state::AppState;

/// One line typed at the prompt.
#[derive(Debug, Parser)]
#[command(name = "tablebook", no_binary_name = true, disable_version_flag = true)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Book a table for the early or late session
    #[command(alias = "b")]
    Book {
        /// Table number (1-5)
        table: u32,
        /// Session (early/late)
        session: String,
    },
    /// Order a menu item for a booked session
    #[command(alias = "o")]
    Order {
        /// Table number (1-5)
        table: u32,
        /// Session (early/late)
        session: String,
        /// Menu item name, quoted if it contains spaces
        item: String,
        /// Units of the item
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        quantity: i64,
        /// Diners joining the table with this order
        #[arg(short, long, default_value_t = 1)]
        diners: u32,
    },
    /// Show a session's order with priority dishes first
    #[command(alias = "t")]
    Ticket {
        /// Table number (1-5)
        table: u32,
        /// Session (early/late)
        session: String,
    },
    /// Show which sessions are booked on every table
    #[command(alias = "s")]
    Status,
    /// Calculate the bill for a session and record the tip
    Bill {
        /// Table number (1-5)
        table: u32,
        /// Session (early/late)
        session: String,
        /// Payment method (cash / "credit card")
        #[arg(short, long, default_value = "cash")]
        payment: String,
        /// Tip amount, e.g. 5 or 4.50
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        tip: String,
    },
    /// Generate the sales report for every booked session
    #[command(alias = "r")]
    Report {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the menu
    #[command(alias = "m")]
    Menu,
    /// Leave the console
    #[command(alias = "exit", alias = "q")]
    Quit,
}

/// What the run loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text
    Text(String),
    /// Blank or comment line
    Nothing,
    /// Stop reading input
    Quit,
}

/// Parses and executes one input line.
pub fn dispatch(state: &mut AppState, line: &str) -> Result<Reply, ConsoleError> {
    if line.trim_start().starts_with('#') {
        return Ok(Reply::Nothing);
    }
    let tokens = tokenize(line)?;
    if tokens.is_empty() {
        return Ok(Reply::Nothing);
    }

    let command = match CommandLine::try_parse_from(&tokens) {
        Ok(parsed) => parsed.command,
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            return Ok(Reply::Text(err.to_string().trim_end().to_string()));
        }
        Err(err) => return Err(ConsoleError::input(err.to_string().trim_end())),
    };
    debug!(?command, "Dispatching command");

    let text = match command {
        Command::Book { table, session } => booking::book_table(state, table, &session)?,
        Command::Order {
            table,
            session,
            item,
            quantity,
            diners,
        } => order::place_order(state, table, &session, &item, quantity, diners)?,
        Command::Ticket { table, session } => order::kitchen_ticket(state, table, &session)?,
        Command::Status => booking::display_status(state),
        Command::Bill {
            table,
            session,
            payment,
            tip,
        } => billing::calculate_bill(state, table, &session, &payment, &tip)?,
        Command::Report { json } => report::generate_report(state, json)?,
        Command::Menu => order::show_menu(state),
        Command::Quit => return Ok(Reply::Quit),
    };

    Ok(Reply::Text(text))
}

/// Splits a line on whitespace. Single or double quotes group words.
///
/// `order 1 early "Steak Diane"` → `["order", "1", "early", "Steak Diane"]`
pub fn tokenize(line: &str) -> Result<Vec<String>, ConsoleError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(ConsoleError::input(format!("unterminated {} quote", q)));
    }
    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_tokenize_plain_and_quoted() {
        assert_eq!(
            tokenize(r#"order 1 early "Steak Diane" -q 2"#).unwrap(),
            vec!["order", "1", "early", "Steak Diane", "-q", "2"]
        );
        assert_eq!(
            tokenize("order 1 early 'White\"s Out'").unwrap(),
            vec!["order", "1", "early", "White\"s Out"]
        );
        assert_eq!(
            tokenize(r#"order 1 early "White's Out Seafood Cocktail""#).unwrap(),
            vec!["order", "1", "early", "White's Out Seafood Cocktail"]
        );
        assert_eq!(
            tokenize(r#"bill 1 late -p "credit card""#).unwrap(),
            vec!["bill", "1", "late", "-p", "credit card"]
        );
    }

    #[test]
    fn test_tokenize_blank_and_empty_quotes() {
        assert!(tokenize("   ").unwrap().is_empty());
        assert_eq!(tokenize(r#"x """#).unwrap(), vec!["x", ""]);
    }

    #[test]
    fn test_tokenize_unterminated_quote() {
        let err = tokenize(r#"order 1 early "Steak"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::InputError);
    }

    #[test]
    fn test_parse_order_defaults() {
        let parsed =
            CommandLine::try_parse_from(["order", "2", "late", "Floating Island"]).unwrap();
        match parsed.command {
            Command::Order {
                table,
                quantity,
                diners,
                ..
            } => {
                assert_eq!(table, 2);
                assert_eq!(quantity, 1);
                assert_eq!(diners, 1);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_bill_options() {
        let parsed = CommandLine::try_parse_from([
            "bill",
            "1",
            "early",
            "--payment",
            "credit card",
            "--tip",
            "5",
        ])
        .unwrap();
        assert!(matches!(
            parsed.command,
            Command::Bill { ref payment, ref tip, .. } if payment == "credit card" && tip == "5"
        ));
    }

    #[test]
    fn test_dispatch_blank_comment_and_quit() {
        let mut state = AppState::default();
        assert_eq!(dispatch(&mut state, "").unwrap(), Reply::Nothing);
        assert_eq!(dispatch(&mut state, "# setup").unwrap(), Reply::Nothing);
        assert_eq!(dispatch(&mut state, "exit").unwrap(), Reply::Quit);
    }

    #[test]
    fn test_dispatch_unknown_command_is_input_error() {
        let mut state = AppState::default();
        let err = dispatch(&mut state, "dance 1").unwrap_err();
        assert_eq!(err.code, ErrorCode::InputError);
    }

    #[test]
    fn test_dispatch_help_is_text() {
        let mut state = AppState::default();
        match dispatch(&mut state, "help").unwrap() {
            Reply::Text(text) => assert!(text.contains("book")),
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_session_flow() {
        let mut state = AppState::default();

        dispatch(&mut state, "book 1 early").unwrap();
        dispatch(&mut state, r#"order 1 early "Steak Diane" -q 2 -d 2"#).unwrap();
        dispatch(&mut state, r#"order 1 early "Coffee and biscuits" -d 0"#).unwrap();

        let reply = dispatch(&mut state, "bill 1 early").unwrap();
        assert_eq!(
            reply,
            Reply::Text("Total bill for Table 1 for early session: £105.97".to_string())
        );

        let err = dispatch(&mut state, "book 1 early").unwrap_err();
        assert_eq!(err.message, "Table 1 is already booked for the early session.");
    }
}
