// GUI Components module
mod add_form;
mod game_row;
mod header;
mod status_bar;
mod transfer_bar;

pub use add_form::AddForm;
pub use game_row::GameRowCard;
pub use header::Header;
pub use status_bar::{StatusBar, StatusMessage};
pub use transfer_bar::{TransferAction, TransferBar};
