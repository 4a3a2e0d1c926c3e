use yew_router::prelude::*;

/// Navigable routes. No route takes parameters.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/dashboard")]
    Dashboard,
    #[at("/aidflow")]
    AidFlow,
    #[at("/helpdesk")]
    HelpDesk,
    #[at("/talentstage")]
    TalentStage,
    #[at("/portfolio")]
    Portfolio,
    #[at("/opportunities")]
    Opportunities,
    #[at("/leaderboard")]
    Leaderboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}
