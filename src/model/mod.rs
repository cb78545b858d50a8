//! Wire types exchanged verbatim with the backend services, plus the one
//! adapter that knows about their hypermedia list envelope.

pub mod ballot;
pub mod cin;
pub mod envelope;
pub mod results;
pub mod voter;

pub use ballot::{Candidate, Proposal, VoteSubmission};
pub use cin::Cin;
pub use envelope::Embedded;
pub use results::{RankedEntry, ResultEntry, Scoreboard};
pub use voter::Voter;
