// passcheck services
// Services are the stateless building blocks: crypto, entropy, scoring, breach lookup, generation, metrics.

pub mod breach_checker;
pub mod crypto_service;
pub mod entropy;
pub mod password_generator;
pub mod strength_scorer;
pub mod visual_metrics;
pub mod wordlist;
