use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::engine::constants::FUZZY_MATCH_THRESHOLD;
use crate::error::Result;
use crate::models::{Assignment, Diner, DinerId, Item, ItemId};

/// Prompt for a monetary amount.
///
/// Returns `Ok(None)` when the input is not a valid non-negative number;
/// the caller keeps the prior value (prices are never clamped, only
/// rejected).
pub fn prompt_price(prompt: &str, default: Option<f64>) -> Result<Option<f64>> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    let raw: String = input.interact_text()?;

    match raw.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(Some(price)),
        _ => Ok(None),
    }
}

/// Prompt for the discount percentage.
///
/// Non-numeric input coerces to 0; the state layer clamps to 0..=100.
pub fn prompt_discount(current: u8) -> Result<i64> {
    let raw: String = Input::new()
        .with_prompt("Discount percentage (0-100)")
        .default(current.to_string())
        .interact_text()?;

    Ok(raw.trim().parse().unwrap_or(0))
}

/// Prompt for a name; empty input is allowed and returned as-is.
pub fn prompt_name(prompt: &str) -> Result<String> {
    let name: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(name.trim().to_string())
}

/// Pick an item by typed name: exact match first, then fuzzy candidates.
///
/// Returns `Ok(None)` when nothing matched or the user backed out.
pub fn prompt_item(items: &[Item]) -> Result<Option<ItemId>> {
    let input: String = Input::new()
        .with_prompt("Item name (or press Enter to cancel)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    // Exact match first (case-insensitive)
    if let Some(item) = items
        .iter()
        .find(|i| i.name.to_lowercase() == input.to_lowercase())
    {
        return Ok(Some(item.id));
    }

    // Fuzzy candidates
    let mut candidates: Vec<(&Item, f64)> = items
        .iter()
        .map(|i| (i, jaro_winkler(&i.name.to_lowercase(), &input.to_lowercase())))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        println!("No matching item found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let item = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", item.name))
            .default(true)
            .interact()?;
        return Ok(confirm.then_some(item.id));
    }

    // Multiple matches - let user select
    let mut options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(i, _)| i.name.clone())
        .collect();
    let match_count = options.len();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < match_count {
        Ok(Some(candidates[selection].0.id))
    } else {
        Ok(None)
    }
}

/// Pick a diner from the current list.
///
/// Returns `Ok(None)` when the list is empty or the user cancels.
pub fn prompt_diner(diners: &[Diner], prompt: &str) -> Result<Option<DinerId>> {
    if diners.is_empty() {
        println!("No diners yet.");
        return Ok(None);
    }

    let mut options: Vec<String> = diners.iter().map(|d| d.name.clone()).collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    Ok(diners.get(selection).map(|d| d.id))
}

/// Tri-state assignment selector: unassigned, shared by all, or one diner.
///
/// The current diner, when set, is the default selection.
pub fn prompt_assignment(diners: &[Diner], current: Option<DinerId>) -> Result<Assignment> {
    let mut options = vec!["Unassigned".to_string(), "Shared by all".to_string()];
    options.extend(diners.iter().map(|d| d.name.clone()));

    let default = current
        .and_then(|id| diners.iter().position(|d| d.id == id))
        .map(|pos| pos + 2)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Assign to")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(match selection {
        0 => Assignment::Unassigned,
        1 => Assignment::Shared,
        n => diners
            .get(n - 2)
            .map(|d| Assignment::Diner(d.id))
            .unwrap_or(Assignment::Unassigned),
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// One entry in the session action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ShowBill,
    AssignItem,
    AddDiner,
    RemoveDiner,
    RenameDiner,
    SelectDiner,
    AddItem,
    EditPrice,
    RemoveItem,
    SetDiscount,
    ExportSummary,
    Quit,
}

const ACTIONS: &[(Action, &str)] = &[
    (Action::ShowBill, "Show bill"),
    (Action::AssignItem, "Assign item"),
    (Action::AddDiner, "Add diner"),
    (Action::RemoveDiner, "Remove diner"),
    (Action::RenameDiner, "Rename diner"),
    (Action::SelectDiner, "Select current diner"),
    (Action::AddItem, "Add item"),
    (Action::EditPrice, "Edit item price"),
    (Action::RemoveItem, "Remove item"),
    (Action::SetDiscount, "Set discount"),
    (Action::ExportSummary, "Export summary"),
    (Action::Quit, "Quit"),
];

/// Main session menu.
pub fn prompt_action() -> Result<Action> {
    let labels: Vec<&str> = ACTIONS.iter().map(|(_, label)| *label).collect();

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(ACTIONS
        .get(selection)
        .map(|(action, _)| *action)
        .unwrap_or(Action::ShowBill))
}
