/// One player's result within a single game.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantResult {
    pub player: String,
    pub performance: f64,
    pub k_factor: f64
}
