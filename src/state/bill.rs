use crate::engine::constants::DISCOUNT_MAX;
use crate::engine::totals::{compute_totals, BillTotals};
use crate::models::{is_valid_price, next_auto_name, Assignment, Diner, DinerId, Item, ItemId};
use crate::state::extraction::ExtractionResult;

/// One state transition over a [`BillState`].
///
/// Every variant degrades to a no-op (or a clamp) on bad input rather than
/// returning an error: ids only ever come from the current snapshot and
/// there is no persisted state to corrupt.
#[derive(Debug, Clone)]
pub enum Mutation {
    AddDiner { name: String },
    RemoveDiner { id: DinerId },
    RenameDiner { id: DinerId, name: String },
    SelectDiner { id: Option<DinerId> },
    AssignItem { item: ItemId, target: Assignment },
    UpdateItemPrice { item: ItemId, price: f64 },
    AddItem { name: String, price: f64, description: String },
    RemoveItem { item: ItemId },
    SetDiscount { value: i64 },
}

/// The full state of one bill-splitting session.
///
/// All mutation goes through [`BillState::apply`], which returns a new state
/// and leaves the receiver untouched; derived totals are recomputed from
/// scratch on demand.
#[derive(Debug, Clone, Default)]
pub struct BillState {
    pub items: Vec<Item>,
    pub diners: Vec<Diner>,
    /// Uniform percentage discount, always within 0..=100.
    pub discount: u8,
    /// The diner currently driving assignment in the UI, if any.
    pub current_diner: Option<DinerId>,
    /// Receipt language code from extraction ("en", "es", ...).
    pub language: String,
    next_item_id: ItemId,
    next_diner_id: DinerId,
}

impl BillState {
    pub fn new() -> Self {
        Self {
            language: "en".to_string(),
            ..Default::default()
        }
    }

    /// Bulk-create unassigned items from an extraction result.
    ///
    /// Quantities arrive already expanded and prices already normalized,
    /// so each entry maps to exactly one item.
    pub fn from_extraction(result: &ExtractionResult) -> Self {
        let mut state = Self::new();
        state.language = result.language.clone();
        for entry in &result.items {
            let id = state.alloc_item_id();
            state.items.push(Item::new(
                id,
                entry.item.clone(),
                entry.price.max(0.0),
                entry.calories.max(0.0),
                entry.description.clone(),
            ));
        }
        state
    }

    /// Apply one mutation, producing the next state.
    pub fn apply(&self, mutation: Mutation) -> BillState {
        let mut next = self.clone();
        match mutation {
            Mutation::AddDiner { name } => next.add_diner(&name),
            Mutation::RemoveDiner { id } => next.remove_diner(id),
            Mutation::RenameDiner { id, name } => next.rename_diner(id, &name),
            Mutation::SelectDiner { id } => next.select_diner(id),
            Mutation::AssignItem { item, target } => next.assign_item(item, target),
            Mutation::UpdateItemPrice { item, price } => next.update_item_price(item, price),
            Mutation::AddItem {
                name,
                price,
                description,
            } => next.add_item(&name, price, description),
            Mutation::RemoveItem { item } => next.remove_item(item),
            Mutation::SetDiscount { value } => next.set_discount(value),
        }
        next
    }

    /// Recompute all derived totals for the current state.
    pub fn totals(&self) -> BillTotals {
        compute_totals(&self.items, &self.diners, self.discount)
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn diner(&self, id: DinerId) -> Option<&Diner> {
        self.diners.iter().find(|d| d.id == id)
    }

    /// Display name for an assignment, resolving diner ids.
    pub fn assignment_label(&self, assignment: Assignment) -> String {
        match assignment {
            Assignment::Unassigned => "unassigned".to_string(),
            Assignment::Shared => "shared by all".to_string(),
            Assignment::Diner(id) => self
                .diner(id)
                .map(|d| d.name.clone())
                .unwrap_or_else(|| "unassigned".to_string()),
        }
    }

    fn alloc_item_id(&mut self) -> ItemId {
        self.next_item_id += 1;
        self.next_item_id
    }

    fn alloc_diner_id(&mut self) -> DinerId {
        self.next_diner_id += 1;
        self.next_diner_id
    }

    fn add_diner(&mut self, name: &str) {
        let name = name.trim();
        let name = if name.is_empty() {
            next_auto_name(&self.diners)
        } else {
            name.to_string()
        };
        let id = self.alloc_diner_id();
        self.diners.push(Diner::new(id, name));
        self.current_diner = Some(id);
    }

    fn remove_diner(&mut self, id: DinerId) {
        if self.diner(id).is_none() {
            return;
        }
        self.diners.retain(|d| d.id != id);

        // Cascade: the removed diner's items revert to unassigned. Shared
        // items are untouched; their divisor changes on its own.
        for item in self.items.iter_mut() {
            if item.assignment.diner_id() == Some(id) {
                item.assignment = Assignment::Unassigned;
            }
        }

        if self.current_diner == Some(id) {
            self.current_diner = self.diners.first().map(|d| d.id);
        }
    }

    fn rename_diner(&mut self, id: DinerId, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        if let Some(diner) = self.diners.iter_mut().find(|d| d.id == id) {
            diner.name = name.to_string();
        }
    }

    fn select_diner(&mut self, id: Option<DinerId>) {
        // Selecting a diner that no longer exists is a no-op.
        match id {
            Some(id) if self.diner(id).is_none() => {}
            _ => self.current_diner = id,
        }
    }

    fn assign_item(&mut self, item_id: ItemId, target: Assignment) {
        // A target referencing an unknown diner is a no-op.
        if let Some(diner_id) = target.diner_id() {
            if self.diner(diner_id).is_none() {
                return;
            }
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.id == item_id) {
            item.assignment = target;
        }
    }

    fn update_item_price(&mut self, item_id: ItemId, price: f64) {
        if !is_valid_price(price) {
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.id == item_id) {
            item.price = price;
        }
    }

    fn add_item(&mut self, name: &str, price: f64, description: String) {
        let name = name.trim();
        if name.is_empty() || !is_valid_price(price) {
            return;
        }
        let id = self.alloc_item_id();
        // Manually added items have no calorie estimate.
        self.items
            .push(Item::new(id, name.to_string(), price, 0.0, description));
    }

    fn remove_item(&mut self, item_id: ItemId) {
        self.items.retain(|i| i.id != item_id);
    }

    fn set_discount(&mut self, value: i64) {
        self.discount = value.clamp(0, i64::from(DISCOUNT_MAX)) as u8;
    }
}
