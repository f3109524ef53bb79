pub mod report_json;

pub use report_json::{score_summary_json, standings_json, StandingsRequest, StandingsResponse};
