pub mod matches;
pub mod member;

pub use matches::MatchRecord;
pub use member::MemberProfile;
