use clap::Parser;

use split_it_right_rs::cli::{Cli, Command};
use split_it_right_rs::engine::summary::build_summary;
use split_it_right_rs::error::Result;
use split_it_right_rs::interface::{
    display_bill, display_extraction, display_settled_banner, prompt_action, prompt_assignment,
    prompt_diner, prompt_discount, prompt_item, prompt_name, prompt_price, prompt_yes_no, Action,
};
use split_it_right_rs::state::{load_extraction, BillState, Mutation};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Split => cmd_split(cli.file.as_deref()),
        Command::Inspect => cmd_inspect(cli.file.as_deref()),
    }
}

/// Run an interactive bill-splitting session.
fn cmd_split(file: Option<&str>) -> Result<()> {
    let mut state = match file {
        Some(path) => {
            let extraction = load_extraction(path)?;
            println!(
                "Loaded {} items (receipt language: {})",
                extraction.items.len(),
                extraction.language
            );
            // Start with one diner, like a fresh receipt upload.
            BillState::from_extraction(&extraction).apply(Mutation::AddDiner {
                name: String::new(),
            })
        }
        None => {
            println!("Starting an empty bill. Add items and diners from the menu.");
            BillState::new()
        }
    };

    display_bill(&state);

    loop {
        match prompt_action()? {
            Action::ShowBill => display_bill(&state),
            Action::AssignItem => {
                if let Some(item) = prompt_item(&state.items)? {
                    let target = prompt_assignment(&state.diners, state.current_diner)?;
                    state = apply(state, Mutation::AssignItem { item, target });
                    display_bill(&state);
                }
            }
            Action::AddDiner => {
                let name = prompt_name("Diner name (empty for auto-naming)")?;
                state = apply(state, Mutation::AddDiner { name });
            }
            Action::RemoveDiner => {
                if let Some(id) = prompt_diner(&state.diners, "Remove which diner?")? {
                    state = apply(state, Mutation::RemoveDiner { id });
                    display_bill(&state);
                }
            }
            Action::RenameDiner => {
                if let Some(id) = prompt_diner(&state.diners, "Rename which diner?")? {
                    let name = prompt_name("New name")?;
                    if name.is_empty() {
                        println!("Name unchanged.");
                    } else {
                        state = apply(state, Mutation::RenameDiner { id, name });
                    }
                }
            }
            Action::SelectDiner => {
                if let Some(id) = prompt_diner(&state.diners, "Who is assigning now?")? {
                    state = apply(state, Mutation::SelectDiner { id: Some(id) });
                }
            }
            Action::AddItem => {
                let name = prompt_name("Item name")?;
                if name.is_empty() {
                    println!("Item name cannot be empty.");
                    continue;
                }
                match prompt_price("Price", None)? {
                    Some(price) => {
                        let description = prompt_name("Description (optional)")?;
                        state = apply(
                            state,
                            Mutation::AddItem {
                                name,
                                price,
                                description,
                            },
                        );
                        display_bill(&state);
                    }
                    None => println!("Invalid price, item not added."),
                }
            }
            Action::EditPrice => {
                if let Some(item) = prompt_item(&state.items)? {
                    let current = state.item(item).map(|i| i.price);
                    match prompt_price("New price", current)? {
                        Some(price) => {
                            state = apply(state, Mutation::UpdateItemPrice { item, price });
                            display_bill(&state);
                        }
                        None => println!("Invalid price, keeping the current value."),
                    }
                }
            }
            Action::RemoveItem => {
                if let Some(item) = prompt_item(&state.items)? {
                    state = apply(state, Mutation::RemoveItem { item });
                    display_bill(&state);
                }
            }
            Action::SetDiscount => {
                let value = prompt_discount(state.discount)?;
                state = apply(state, Mutation::SetDiscount { value });
                display_bill(&state);
            }
            Action::ExportSummary => {
                let label = prompt_name("Restaurant label")?;
                let label = if label.is_empty() {
                    "Restaurant".to_string()
                } else {
                    label
                };
                let date = chrono::Local::now().format("%Y-%m-%d").to_string();
                let text = build_summary(&label, &date, &state.diners, state.discount, &state.totals());
                println!();
                println!("{}", text);
            }
            Action::Quit => {
                if prompt_yes_no("Quit the session?", true)? {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply a mutation and print the celebration banner on the
/// not-settled -> settled transition.
fn apply(state: BillState, mutation: Mutation) -> BillState {
    let was_settled = state.totals().is_settled();
    let next = state.apply(mutation);
    if !was_settled && next.totals().is_settled() {
        display_settled_banner();
    }
    next
}

/// Print the extracted receipt entries without starting a session.
fn cmd_inspect(file: Option<&str>) -> Result<()> {
    let Some(path) = file else {
        eprintln!("inspect requires --file <extraction.json>");
        return Ok(());
    };

    let extraction = load_extraction(path)?;
    display_extraction(&extraction);
    Ok(())
}
