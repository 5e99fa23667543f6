pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_action, prompt_assignment, prompt_diner, prompt_discount, prompt_item, prompt_name,
    prompt_price, prompt_yes_no, Action,
};
pub use render::{display_bill, display_extraction, display_settled_banner};
