pub mod aid_flow;
pub mod dashboard;
pub mod help_desk;
pub mod landing;
pub mod leaderboard;
pub mod not_found;
pub mod opportunities;
pub mod portfolio;
pub mod talent_stage;

pub use aid_flow::AidFlow;
pub use dashboard::Dashboard;
pub use help_desk::HelpDesk;
pub use landing::Landing;
pub use leaderboard::Leaderboard;
pub use not_found::NotFound;
pub use opportunities::Opportunities;
pub use portfolio::Portfolio;
pub use talent_stage::TalentStage;
