use crate::model::Winner;

pub fn winner_decision(is_significant: bool, control_rate: f64, variant_rate: f64) -> Winner {
    if !is_significant {
        return Winner::Inconclusive;
    }
    if variant_rate > control_rate {
        Winner::VariantWins
    } else if control_rate > variant_rate {
        Winner::ControlWins
    } else {
        Winner::Tie
    }
}
