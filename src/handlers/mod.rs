// Two security tiers: public (no session) and protected (session required).
pub mod protected;
pub mod public;
