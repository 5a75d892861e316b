pub mod user;
pub mod wellness_entry;
pub mod fun_fact;

pub use user::*;
pub use wellness_entry::*;
pub use fun_fact::*;
