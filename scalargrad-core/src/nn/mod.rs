pub mod init;
pub mod layers;
pub mod losses;
pub mod mlp;
pub mod module;
pub mod parameter;

pub use mlp::Mlp;
pub use module::Module;
pub use parameter::Parameter;
