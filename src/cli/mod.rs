mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{
    format_table, handle_add, handle_clear, handle_delete, handle_init, handle_list, handle_serve,
};
