//----------------------------------------
// trial characteristics mod
//----------------------------------------
// Each function solves the sample size relation for one quantity, given
// fixed group sizes:
//    delta / se = z_alpha + z_beta
//    se = sqrt(p1 (1 - p1) (1 / n_control + 1 / n_test))
pub mod compute_alpha;
pub mod compute_mde;
pub mod compute_power;
