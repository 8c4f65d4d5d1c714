mod directory_state;
mod filter;
mod toast;
