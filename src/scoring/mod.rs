pub(crate) mod pick;
pub(crate) mod player;
pub(crate) mod playoff;
pub(crate) mod position;
pub(crate) mod stage;
pub(crate) mod standings;

pub use pick::score_pick;
pub use player::{aggregate_player, WIN_PLAYOFF_POINTS};
pub use playoff::{allocate_playoff_points, DEFAULT_PLAYOFF_BONUS};
pub use position::{position_points, FLOOR_POINTS, LEADER_POINTS};
pub use stage::{stage_points, STAGE_POINTS_CUTOFF};
pub use standings::{build_event_standings, rank_players};
