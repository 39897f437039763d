//! Continuous probability distributions.

mod beta;
mod cauchy;
mod chi_squared;
mod exponential;
mod f_distribution;
mod gamma;
mod gumbel;
mod laplace;
mod levy;
mod log_uniform;
mod logistic;
mod lognormal;
mod nakagami;
mod normal;
mod pareto;
mod student_t;
mod trapezoidal;
mod triangular;
mod truncated_normal;
mod uniform;
mod weibull;

pub use beta::Beta;
pub use cauchy::Cauchy;
pub use chi_squared::ChiSquared;
pub use exponential::Exponential;
pub use f_distribution::FDistribution;
pub use gamma::Gamma;
pub use gumbel::Gumbel;
pub use laplace::Laplace;
pub use levy::Levy;
pub use log_uniform::LogUniform;
pub use logistic::Logistic;
pub use lognormal::LogNormal;
pub use nakagami::Nakagami;
pub use normal::Normal;
pub use pareto::Pareto;
pub use student_t::StudentT;
pub use trapezoidal::{TrapezoidShape, Trapezoidal};
pub use triangular::Triangular;
pub use truncated_normal::TruncatedNormal;
pub use uniform::Uniform;
pub use weibull::Weibull;
