mod contact;
mod game;
mod question;
mod user;

pub use contact::*;
pub use game::*;
pub use question::*;
pub use user::*;
