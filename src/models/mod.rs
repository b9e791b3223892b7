pub mod participants;
pub mod teams;

pub use participants::ParticipantsRow;
pub use teams::TeamsRow;
