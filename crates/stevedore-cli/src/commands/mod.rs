mod deploy;
mod publish;
mod release;

pub use deploy::deploy;
pub use publish::publish;
pub use release::release;
