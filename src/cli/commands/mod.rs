//! Command implementations

mod answer;
mod ask;
mod check;
mod init;
mod points;
mod remote;
mod reset;
mod status;

pub use answer::answer;
pub use ask::ask;
pub use check::check;
pub use init::init;
pub use points::add_points;
pub use remote::remote;
pub use reset::reset;
pub use status::status;
