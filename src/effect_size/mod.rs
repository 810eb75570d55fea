//----------------------------------------
// effect size mod
//----------------------------------------
pub mod cohens_h;
