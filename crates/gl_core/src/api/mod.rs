//! JSON API layer for the game server.
//!
//! Every entry point takes a JSON request string and returns either a JSON
//! response string or a human-readable error.

pub mod match_json;
pub mod progression_json;
pub mod record;

pub use match_json::{
    run_match, simulate_match_json, simulate_request, MatchRequest, MatchResponse, TeamEntry,
};
pub use progression_json::{
    find_opponent_json, opponent_request, upgrade_player_json, upgrade_request,
    value_player_json, value_request, OpponentRequest, OpponentResponse, UpgradeRequest,
    UpgradeResponse, ValueRequest, ValueResponse,
};
pub use record::{MatchRecord, RatingUpdate};
