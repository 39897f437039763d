//! Discrete probability distributions.

mod bernoulli;
mod binomial;
mod geometric;
mod hypergeometric;
mod pascal;
mod poisson;
mod uniform_discrete;

pub use bernoulli::Bernoulli;
pub use binomial::Binomial;
pub use geometric::Geometric;
pub use hypergeometric::Hypergeometric;
pub use pascal::Pascal;
pub use poisson::Poisson;
pub use uniform_discrete::UniformDiscrete;
